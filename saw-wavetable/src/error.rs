use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TableError {
    #[error("note range {start}..{end} is empty")]
    EmptyNoteRange { start: u8, end: u8 },
    #[error("table size must be at least one sample")]
    ZeroTableSize,
    #[error("reference frequency must be finite and positive, got {0}")]
    InvalidReferenceFrequency(f64),
    #[error("max frequency must be finite and positive, got {0}")]
    InvalidMaxFrequency(f64),
    #[error("phase span must be finite and positive, got {0}")]
    InvalidPhaseSpan(f64),
    #[error("amplitude must be finite, got {0}")]
    InvalidAmplitude(f64),
    #[error("no notes to bucket")]
    NoNotes,
    #[error("note {note} needs {harmonics} harmonics, more than the limit of {limit}")]
    TooManyHarmonics { note: u8, harmonics: f64, limit: u32 },
    #[error("bucket {index} starts at note {first}, not above the previous boundary {previous}")]
    MisalignedBoundary { index: usize, first: u8, previous: u8 },
}
