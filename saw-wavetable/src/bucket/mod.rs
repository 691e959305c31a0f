use std::collections::{BTreeMap, BTreeSet};

use tracing::debug;

use crate::TableError;
use crate::frequency::{FrequencyMapper, HarmonicCount, Mapping, Note};

/// Notes sharing one harmonic count, and therefore one wavetable
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bucket {
    harmonics: HarmonicCount,
    notes: Vec<Note>,
}

impl Bucket {
    pub fn harmonics(&self) -> HarmonicCount {
        self.harmonics
    }

    /// Notes in ascending order, never empty
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn first_note(&self) -> Note {
        self.notes[0]
    }

    /// Largest note routed to this bucket
    pub fn boundary(&self) -> Note {
        self.notes[self.notes.len() - 1]
    }
}

/// Buckets ordered by descending harmonic count. Since the harmonic count
/// never increases with the note, this is also ascending boundary order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Buckets(Vec<Bucket>);

impl Buckets {
    pub fn from_notes(
        mapper: &FrequencyMapper,
        notes: impl IntoIterator<Item = Note>,
    ) -> Result<Self, TableError> {
        Self::from_mappings(notes.into_iter().map(|note| mapper.map(note)))
    }

    pub fn from_mappings(mappings: impl IntoIterator<Item = Mapping>) -> Result<Self, TableError> {
        let mappings: Vec<Mapping> = mappings.into_iter().collect();
        if mappings.is_empty() {
            return Err(TableError::NoNotes);
        }

        // every key gets its list up front so insertion can't miss
        let counts: BTreeSet<HarmonicCount> = mappings.iter().map(|m| m.harmonics).collect();
        let mut grouped: BTreeMap<HarmonicCount, Vec<Note>> =
            counts.into_iter().map(|count| (count, Vec::new())).collect();

        for mapping in &mappings {
            if let Some(notes) = grouped.get_mut(&mapping.harmonics) {
                notes.push(mapping.note);
            }
        }

        let buckets: Vec<Bucket> = grouped
            .into_iter()
            .rev()
            .map(|(harmonics, mut notes)| {
                notes.sort_unstable();
                notes.dedup();
                Bucket { harmonics, notes }
            })
            .collect();

        let buckets = Self(buckets);
        buckets.check_alignment()?;

        for bucket in buckets.iter() {
            debug!(
                harmonics = bucket.harmonics.get(),
                first = bucket.first_note().as_u8(),
                boundary = bucket.boundary().as_u8(),
                "bucket"
            );
        }

        Ok(buckets)
    }

    /// Each bucket must start above the previous bucket's boundary. This
    /// fails exactly when some higher note got more harmonics than a lower
    /// one, in which case descending counts and ascending boundaries no
    /// longer pair up.
    fn check_alignment(&self) -> Result<(), TableError> {
        for (index, pair) in self.0.windows(2).enumerate() {
            let previous = pair[0].boundary();
            let first = pair[1].first_note();
            if first <= previous {
                return Err(TableError::MisalignedBoundary {
                    index: index + 1,
                    first: first.as_u8(),
                    previous: previous.as_u8(),
                });
            }
        }

        Ok(())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Bucket> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[Bucket] {
        &self.0
    }

    /// Distinct harmonic counts, descending
    pub fn harmonic_counts(&self) -> Vec<HarmonicCount> {
        self.iter().map(Bucket::harmonics).collect()
    }

    /// Boundary notes, ascending, index-paired with `harmonic_counts`
    pub fn boundaries(&self) -> Vec<Note> {
        self.iter().map(Bucket::boundary).collect()
    }

    /// Index of the first bucket whose boundary is at or above `note`, the
    /// same search the runtime does. Notes above the last boundary get the
    /// last bucket.
    pub fn lookup(&self, note: Note) -> usize {
        let index = self.0.partition_point(|bucket| bucket.boundary() < note);
        index.min(self.0.len() - 1)
    }
}
