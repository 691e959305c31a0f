use pretty_assertions::assert_eq;

use super::*;
use crate::GeneratorConfig;

fn small_bank() -> WavetableBank {
    // 124..=135 share one harmonic, 136 and 137 have none
    WavetableBank::generate(GeneratorConfig {
        notes: 124..138,
        table_size: 4,
        ..Default::default()
    })
    .unwrap()
}

#[test]
fn c_header_layout_for_silent_bank() {
    let expected = "\
#define w_tbl_idx_size 2
#define w_tbl_size 4

uint8_t note_boundary[w_tbl_idx_size] =
    {
        135, 137,
    };

uint32_t w_tbl[w_tbl_idx_size][w_tbl_size + 1] =
    {
        {
            0x0, 0x0, 0x0, 0x0, 0x80000000,
        },
        {
            0x0, 0x0, 0x0, 0x0, 0x80000000,
        },
    };
";

    assert_eq!(CHeader.emit(&small_bank()), expected);
}

#[test]
fn wrap_values_breaks_lines() {
    let values: Vec<u8> = (1..=10).collect();

    assert_eq!(
        wrap_values(&values, 4, 2, |v| v.to_string()),
        "  1, 2, 3, 4,\n  5, 6, 7, 8,\n  9, 10,\n"
    );
}

#[test]
fn c_header_wraps_boundaries_at_four_and_samples_at_eight() {
    let bank = WavetableBank::generate(GeneratorConfig::default()).unwrap();
    let text = CHeader.emit(&bank);

    assert!(text.starts_with("#define w_tbl_idx_size 50\n#define w_tbl_size 128\n"));
    assert!(text.contains("        54, 55, 56, 57,\n"));
    assert!(text.contains("        135, 137,\n    };\n"));

    let sample_lines = text
        .lines()
        .filter(|line| line.starts_with("            0x"))
        .count();
    // 129 words per table: 16 full lines and one with the wrap sample
    assert_eq!(sample_lines, 50 * 17);
}

#[test]
fn rust_module_declares_sized_statics() {
    let text = RustF32Module::new().emit(&small_bank());

    assert!(text.starts_with("//! Generated band-limited sawtooth wavetable bank\n"));
    assert!(text.contains("pub const W_TBL_IDX_SIZE: usize = 2;\n"));
    assert!(text.contains("pub const W_TBL_SIZE: usize = 4;\n"));
    assert!(text.contains("pub static NOTE_BOUNDARY: [u8; W_TBL_IDX_SIZE] = [\n    135, 137,\n];\n"));
    assert!(text.contains("pub static W_TBL: [[u32; W_TBL_SIZE + 1]; W_TBL_IDX_SIZE] = [\n"));
    assert!(text.contains(
        "    // 1 harmonics\n    [\n        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x80000000,\n    ],\n"
    ));
    assert!(text.contains(
        "/// IEEE-754 binary32 bit patterns, read back with `f32::from_bits`\npub static W_TBL"
    ));
    assert!(!text.contains("use fixed"));
}

#[test]
fn rust_q15_module_imports_fixed_point_type() {
    let text = RustQ15Module::new().emit(&small_bank());

    assert!(text.contains("use fixed::types::I1F15 as Q15;\n"));
    assert!(text.contains("pub static W_TBL: [[Q15; W_TBL_SIZE + 1]; W_TBL_IDX_SIZE] = [\n"));
    assert!(text.contains("Q15::from_bits(0x0000_u16 as i16)"));
}

#[test]
fn q15_literal_keeps_sign_bits() {
    assert_eq!(
        Q15::from_bits(-2).literal(),
        "Q15::from_bits(0xfffe_u16 as i16)"
    );
    assert_eq!(0x3f80_0000_u32.literal(), "0x3f800000");
}
