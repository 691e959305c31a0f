use core::ops::Range;

use crate::TableError;
use crate::frequency::{FrequencyMapper, Note};

/// Highest frequency any synthesized harmonic may reach, in Hz
pub const MAX_FREQUENCY: f64 = 20000.0;

/// Samples per half-wave table, excluding the wrap sample
pub const TABLE_SIZE: usize = 128;

/// Phase span covered by one table (half a period)
pub const MAX_PHI: f64 = 0.5;

/// Headroom for the Gibbs overshoot of the truncated series
pub const MAX_VALUE: f64 = 1.0 / 1.18;

/// Pitch reference. `REFERENCE_FREQUENCY / 32` is the frequency of note
/// `REFERENCE_NOTE`, which is not the usual MIDI tuning and must stay as is.
pub const REFERENCE_FREQUENCY: f64 = 440.0;
pub const REFERENCE_NOTE: u8 = 9;

/// Most harmonics any table may sum. The default bank tops out at 108.
pub const MAX_HARMONICS: u32 = 1 << 16;

/// Notes covered by the bank, end exclusive
pub const NOTE_RANGE: Range<u8> = 54..138;

#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorConfig {
    pub notes: Range<u8>,
    pub reference_frequency: f64,
    pub reference_note: u8,
    pub max_frequency: f64,
    pub table_size: usize,
    pub max_phi: f64,
    pub max_value: f64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            notes: NOTE_RANGE,
            reference_frequency: REFERENCE_FREQUENCY,
            reference_note: REFERENCE_NOTE,
            max_frequency: MAX_FREQUENCY,
            table_size: TABLE_SIZE,
            max_phi: MAX_PHI,
            max_value: MAX_VALUE,
        }
    }
}

impl GeneratorConfig {
    /// Rejects configurations that cannot produce a bank. Must pass before
    /// any synthesis happens.
    pub fn validate(&self) -> Result<(), TableError> {
        if self.notes.is_empty() {
            return Err(TableError::EmptyNoteRange {
                start: self.notes.start,
                end: self.notes.end,
            });
        }
        if self.table_size == 0 {
            return Err(TableError::ZeroTableSize);
        }
        if !is_positive(self.reference_frequency) {
            return Err(TableError::InvalidReferenceFrequency(
                self.reference_frequency,
            ));
        }
        if !is_positive(self.max_frequency) {
            return Err(TableError::InvalidMaxFrequency(self.max_frequency));
        }
        if !is_positive(self.max_phi) {
            return Err(TableError::InvalidPhaseSpan(self.max_phi));
        }
        if !self.max_value.is_finite() {
            return Err(TableError::InvalidAmplitude(self.max_value));
        }

        // the lowest note has the largest budget
        let lowest = Note::new(self.notes.start);
        let harmonics = self.max_frequency / FrequencyMapper::new(self).frequency(lowest);
        if harmonics >= f64::from(MAX_HARMONICS) + 1.0 {
            return Err(TableError::TooManyHarmonics {
                note: lowest.as_u8(),
                harmonics: harmonics.floor(),
                limit: MAX_HARMONICS,
            });
        }

        Ok(())
    }
}

fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

#[cfg(test)]
mod test;
