pub use fixed::types::I1F15 as Q15;

use crate::synth::Wavetable;

/// How a synthesized sample becomes a word in the emitted table.
pub trait SampleEncoding {
    type Word: Copy + PartialEq + core::fmt::Debug;

    fn encode(sample: f64) -> Self::Word;

    /// Word for the negated sample, used for the wrap sample
    fn negate(word: Self::Word) -> Self::Word;
}

/// IEEE-754 binary32 bit patterns, exact and reversible
#[derive(Debug, Default, Clone, Copy)]
pub struct F32Bits;

impl SampleEncoding for F32Bits {
    type Word = u32;

    fn encode(sample: f64) -> u32 {
        encode_sample(sample)
    }

    fn negate(word: u32) -> u32 {
        (-decode_sample(word)).to_bits()
    }
}

/// Signed Q15 fixed point, saturating at the ends of `[-1, 1)`
#[derive(Debug, Default, Clone, Copy)]
pub struct FixedQ15;

impl SampleEncoding for FixedQ15 {
    type Word = Q15;

    fn encode(sample: f64) -> Q15 {
        Q15::saturating_from_num(sample)
    }

    fn negate(word: Q15) -> Q15 {
        word.saturating_neg()
    }
}

pub fn encode_sample(sample: f64) -> u32 {
    (sample as f32).to_bits()
}

pub fn decode_sample(word: u32) -> f32 {
    f32::from_bits(word)
}

/// Encodes every sample and appends the wrap sample, the negated last
/// sample, so the runtime can interpolate past the end without wrapping.
pub fn encode_table<E: SampleEncoding>(table: &Wavetable) -> Vec<E::Word> {
    let mut words: Vec<E::Word> = table.samples().iter().map(|&s| E::encode(s)).collect();

    if let Some(&last) = words.last() {
        words.push(E::negate(last));
    }

    words
}
