use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use saw_wavetable::{
    CHeader, GeneratorConfig, NOTE_RANGE, RustF32Module, RustQ15Module, TABLE_SIZE,
    TableEmitter, WavetableBank,
};
use tracing::{Level, info};

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    /// C declarations with uint32_t float bit patterns
    C,
    /// Rust statics with u32 float bit patterns
    Rust,
    /// Rust statics with Q15 fixed-point samples
    RustQ15,
}

#[derive(Parser, Debug)]
#[command(name = "Saw wavetable bank generator")]
#[command(about = "Generates band-limited sawtooth wavetables indexed by note", long_about = None)]
struct Args {
    /// Output format
    #[arg(long, value_enum, default_value_t = Format::C)]
    format: Format,

    /// Samples per half-wave table
    #[arg(long, default_value_t = TABLE_SIZE)]
    table_size: usize,

    /// Lowest note in the bank
    #[arg(long, default_value_t = NOTE_RANGE.start)]
    first_note: u8,

    /// Note after the highest one in the bank
    #[arg(long, default_value_t = NOTE_RANGE.end)]
    end_note: u8,

    /// Output file, stdout when omitted
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Log more (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = match args.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    let config = GeneratorConfig {
        notes: args.first_note..args.end_note,
        table_size: args.table_size,
        ..Default::default()
    };

    info!(
        format = ?args.format,
        table_size = config.table_size,
        first_note = config.notes.start,
        end_note = config.notes.end,
        "generating sawtooth wavetable bank"
    );

    let bank = WavetableBank::generate(config).context("failed to generate wavetable bank")?;

    let contents = match args.format {
        Format::C => CHeader.emit(&bank),
        Format::Rust => RustF32Module::new().emit(&bank),
        Format::RustQ15 => RustQ15Module::new().emit(&bank),
    };

    match &args.output {
        Some(path) => fs::write(path, &contents)
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => print!("{contents}"),
    }

    log_sanity_checks(&bank);

    Ok(())
}

fn log_sanity_checks(bank: &WavetableBank) {
    let boundaries = bank.boundaries();
    let counts = bank.harmonic_counts();
    let peak = bank
        .wavetables()
        .iter()
        .map(|table| table.peak())
        .fold(0.0, f64::max);
    let silent = bank.wavetables().iter().filter(|t| t.is_silent()).count();

    info!("sanity checks:");
    if let (Some(first), Some(last)) = (boundaries.first(), boundaries.last()) {
        info!(
            "  first table: boundary {} with {} harmonics",
            first, counts[0]
        );
        info!(
            "  last table: boundary {} with {} harmonics",
            last,
            counts[counts.len() - 1]
        );
    }
    info!("  tables: {} ({} silent)", bank.len(), silent);
    info!("  peak sample magnitude: {:.6} (expected: < 1.0)", peak);
}
