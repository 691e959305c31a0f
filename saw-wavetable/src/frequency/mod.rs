use core::fmt;

use crate::GeneratorConfig;

/// A note number as the consuming runtime indexes it (0-255)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Note(u8);

impl Note {
    pub const fn new(value: u8) -> Self {
        Self(value)
    }

    pub const fn as_u8(self) -> u8 {
        self.0
    }
}

impl From<u8> for Note {
    fn from(value: u8) -> Self {
        Self(value)
    }
}

impl From<Note> for u8 {
    fn from(note: Note) -> Self {
        note.0
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Number of Fourier terms budgeted for a fundamental
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HarmonicCount(u32);

impl HarmonicCount {
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    pub const fn get(self) -> u32 {
        self.0
    }

    /// The series sums harmonics `1..count`, so a count of 0 or 1 leaves
    /// nothing to sum.
    pub const fn is_silent(self) -> bool {
        self.0 <= 1
    }
}

impl fmt::Display for HarmonicCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mapping {
    pub note: Note,
    pub frequency: f64,
    pub harmonics: HarmonicCount,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrequencyMapper {
    reference_frequency: f64,
    reference_note: u8,
    max_frequency: f64,
}

impl FrequencyMapper {
    pub fn new(config: &GeneratorConfig) -> Self {
        Self {
            reference_frequency: config.reference_frequency,
            reference_note: config.reference_note,
            max_frequency: config.max_frequency,
        }
    }

    pub fn frequency(&self, note: Note) -> f64 {
        let semitones = f64::from(note.as_u8()) - f64::from(self.reference_note);
        (self.reference_frequency / 32.0) * 2.0_f64.powf(semitones / 12.0)
    }

    /// Harmonics that fit below the max frequency. Zero once the
    /// fundamental itself is above it.
    pub fn harmonic_count(&self, frequency: f64) -> HarmonicCount {
        // positive quotient, so `as` truncates like floor
        HarmonicCount((self.max_frequency / frequency) as u32)
    }

    pub fn map(&self, note: Note) -> Mapping {
        let frequency = self.frequency(note);

        Mapping {
            note,
            frequency,
            harmonics: self.harmonic_count(frequency),
        }
    }
}
