use core::marker::PhantomData;

use crate::WavetableBank;
use crate::encode::{F32Bits, FixedQ15, Q15, SampleEncoding};

const BOUNDARIES_PER_LINE: usize = 4;
const SAMPLES_PER_LINE: usize = 8;

/// Renders a bank as source text for the consuming runtime.
pub trait TableEmitter {
    fn emit(&self, bank: &WavetableBank) -> String;
}

/// C declarations: `note_boundary` as `uint8_t` and `w_tbl` as the `uint32_t`
/// bit patterns of binary32 samples.
#[derive(Debug, Default, Clone, Copy)]
pub struct CHeader;

impl TableEmitter for CHeader {
    fn emit(&self, bank: &WavetableBank) -> String {
        let boundaries: Vec<u8> = bank.boundaries().iter().map(|note| note.as_u8()).collect();
        let tables = bank.encode::<F32Bits>();

        let mut out = String::new();

        out.push_str(&format!("#define w_tbl_idx_size {}\n", boundaries.len()));
        out.push_str(&format!("#define w_tbl_size {}\n", bank.table_size()));
        out.push('\n');

        out.push_str("uint8_t note_boundary[w_tbl_idx_size] =\n    {\n");
        out.push_str(&wrap_values(&boundaries, BOUNDARIES_PER_LINE, 8, |note| {
            note.to_string()
        }));
        out.push_str("    };\n\n");

        out.push_str("uint32_t w_tbl[w_tbl_idx_size][w_tbl_size + 1] =\n    {\n");
        for table in &tables {
            out.push_str("        {\n");
            out.push_str(&wrap_values(table, SAMPLES_PER_LINE, 12, |word| {
                format!("{word:#x}")
            }));
            out.push_str("        },\n");
        }
        out.push_str("    };\n");

        out
    }
}

/// Rust literal syntax for one table word
pub trait RustLiteral: Copy {
    const TYPE_NAME: &'static str;
    const IMPORT: Option<&'static str>;
    const DESCRIPTION: &'static str;

    fn literal(&self) -> String;
}

impl RustLiteral for u32 {
    const TYPE_NAME: &'static str = "u32";
    const IMPORT: Option<&'static str> = None;
    const DESCRIPTION: &'static str =
        "IEEE-754 binary32 bit patterns, read back with `f32::from_bits`";

    fn literal(&self) -> String {
        format!("{self:#010x}")
    }
}

impl RustLiteral for Q15 {
    const TYPE_NAME: &'static str = "Q15";
    const IMPORT: Option<&'static str> = Some("use fixed::types::I1F15 as Q15;");
    const DESCRIPTION: &'static str = "Samples in Q15 fixed point";

    fn literal(&self) -> String {
        format!("Q15::from_bits({:#06x}_u16 as i16)", self.to_bits() as u16)
    }
}

/// Rust module with `pub static` tables, words encoded by `E`.
#[derive(Debug, Default, Clone, Copy)]
pub struct RustModule<E>(PhantomData<E>);

impl<E> RustModule<E> {
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

pub type RustF32Module = RustModule<F32Bits>;
pub type RustQ15Module = RustModule<FixedQ15>;

impl<E> TableEmitter for RustModule<E>
where
    E: SampleEncoding,
    E::Word: RustLiteral,
{
    fn emit(&self, bank: &WavetableBank) -> String {
        let boundaries: Vec<u8> = bank.boundaries().iter().map(|note| note.as_u8()).collect();
        let tables = bank.encode::<E>();

        let mut out = String::new();
        out.push_str("//! Generated band-limited sawtooth wavetable bank\n");
        out.push_str("//! DO NOT EDIT - Generated by generate_saw_wavetable_bank.rs\n\n");

        if let Some(import) = E::Word::IMPORT {
            out.push_str(import);
            out.push_str("\n\n");
        }

        out.push_str("/// Number of wavetables in the bank\n");
        out.push_str(&format!(
            "pub const W_TBL_IDX_SIZE: usize = {};\n",
            boundaries.len()
        ));
        out.push_str("/// Samples per table, excluding the wrap sample\n");
        out.push_str(&format!(
            "pub const W_TBL_SIZE: usize = {};\n",
            bank.table_size()
        ));
        out.push('\n');

        out.push_str("/// Largest note served by each table, ascending\n");
        out.push_str("pub static NOTE_BOUNDARY: [u8; W_TBL_IDX_SIZE] = [\n");
        out.push_str(&wrap_values(&boundaries, BOUNDARIES_PER_LINE, 4, |note| {
            note.to_string()
        }));
        out.push_str("];\n\n");

        out.push_str(&format!("/// {}\n", E::Word::DESCRIPTION));
        out.push_str(&format!(
            "pub static W_TBL: [[{}; W_TBL_SIZE + 1]; W_TBL_IDX_SIZE] = [\n",
            E::Word::TYPE_NAME
        ));
        for (table, harmonics) in tables.iter().zip(bank.harmonic_counts()) {
            out.push_str(&format!("    // {harmonics} harmonics\n"));
            out.push_str("    [\n");
            out.push_str(&wrap_values(table, SAMPLES_PER_LINE, 8, <E::Word as RustLiteral>::literal));
            out.push_str("    ],\n");
        }
        out.push_str("];\n");

        out
    }
}

/// `per_line` comma-terminated values per line, each line indented by
/// `indent` spaces.
fn wrap_values<T>(
    values: &[T],
    per_line: usize,
    indent: usize,
    render: impl Fn(&T) -> String,
) -> String {
    values
        .chunks(per_line)
        .map(|chunk| {
            let line: Vec<String> = chunk.iter().map(&render).collect();
            format!("{:indent$}{},\n", "", line.join(", "))
        })
        .collect()
}

#[cfg(test)]
mod test;
