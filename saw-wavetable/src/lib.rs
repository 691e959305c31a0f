//! Band-limited sawtooth wavetables indexed by note, for embedding as
//! constant data.
//!
//! Notes are grouped by how many harmonics fit below [`MAX_FREQUENCY`], one
//! half-wave table is synthesized per group, and samples are emitted as exact
//! binary32 bit patterns next to the boundary note of each group.

pub mod bucket;
mod config;
pub mod emit;
pub mod encode;
mod error;
pub mod frequency;
pub mod synth;

pub use bucket::{Bucket, Buckets};
pub use config::{
    GeneratorConfig, MAX_FREQUENCY, MAX_HARMONICS, MAX_PHI, MAX_VALUE, NOTE_RANGE, REFERENCE_FREQUENCY,
    REFERENCE_NOTE, TABLE_SIZE,
};
pub use emit::{CHeader, RustF32Module, RustQ15Module, TableEmitter};
pub use encode::{F32Bits, FixedQ15, Q15, SampleEncoding};
pub use error::TableError;
pub use frequency::{FrequencyMapper, HarmonicCount, Note};
pub use synth::{WaveformSynthesizer, Wavetable};

use tracing::{info, warn};

/// Every bucket with its wavetable, in descending harmonic count order.
#[derive(Debug, Clone, PartialEq)]
pub struct WavetableBank {
    config: GeneratorConfig,
    buckets: Buckets,
    wavetables: Vec<Wavetable>,
}

impl WavetableBank {
    /// Runs the whole pipeline. Nothing is synthesized unless the config
    /// validates and the buckets line up.
    pub fn generate(config: GeneratorConfig) -> Result<Self, TableError> {
        config.validate()?;

        let mapper = FrequencyMapper::new(&config);
        let buckets = Buckets::from_notes(&mapper, config.notes.clone().map(Note::new))?;

        let synthesizer = WaveformSynthesizer::new(&config);
        let wavetables: Vec<Wavetable> = buckets
            .iter()
            .map(|bucket| synthesizer.synthesize(bucket.harmonics()))
            .collect();

        let silent = wavetables.iter().filter(|table| table.is_silent()).count();
        if silent > 0 {
            warn!(silent, "buckets above the harmonic budget produce silent tables");
        }

        info!(
            tables = wavetables.len(),
            table_size = config.table_size,
            first_note = config.notes.start,
            end_note = config.notes.end,
            "generated wavetable bank"
        );

        Ok(Self {
            config,
            buckets,
            wavetables,
        })
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn table_size(&self) -> usize {
        self.config.table_size
    }

    pub fn buckets(&self) -> &Buckets {
        &self.buckets
    }

    /// Same order as `boundaries` and `harmonic_counts`
    pub fn wavetables(&self) -> &[Wavetable] {
        &self.wavetables
    }

    pub fn len(&self) -> usize {
        self.wavetables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.wavetables.is_empty()
    }

    pub fn boundaries(&self) -> Vec<Note> {
        self.buckets.boundaries()
    }

    pub fn harmonic_counts(&self) -> Vec<HarmonicCount> {
        self.buckets.harmonic_counts()
    }

    /// The table the runtime would pick for `note`
    pub fn wavetable_for(&self, note: Note) -> &Wavetable {
        &self.wavetables[self.buckets.lookup(note)]
    }

    /// Each table encoded with its wrap sample, `table_size + 1` words apiece
    pub fn encode<E: SampleEncoding>(&self) -> Vec<Vec<E::Word>> {
        self.wavetables
            .iter()
            .map(encode::encode_table::<E>)
            .collect()
    }

    pub fn emit(&self, emitter: &impl TableEmitter) -> String {
        emitter.emit(self)
    }
}
