use std::f64::consts::PI;

use crate::GeneratorConfig;
use crate::frequency::HarmonicCount;

/// One half period of a band-limited sawtooth, before encoding
#[derive(Debug, Clone, PartialEq)]
pub struct Wavetable {
    harmonics: HarmonicCount,
    samples: Vec<f64>,
}

impl Wavetable {
    pub fn harmonics(&self) -> HarmonicCount {
        self.harmonics
    }

    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn is_silent(&self) -> bool {
        self.samples.iter().all(|&sample| sample == 0.0)
    }

    pub fn peak(&self) -> f64 {
        self.samples
            .iter()
            .fold(0.0, |peak: f64, sample| peak.max(sample.abs()))
    }
}

/// Sums the truncated Fourier series of a sawtooth over a fixed phase grid.
#[derive(Debug, Clone, PartialEq)]
pub struct WaveformSynthesizer {
    grid: Vec<f64>,
    max_value: f64,
}

impl WaveformSynthesizer {
    pub fn new(config: &GeneratorConfig) -> Self {
        Self {
            grid: sample_grid(config.table_size, config.max_phi),
            max_value: config.max_value,
        }
    }

    pub fn grid(&self) -> &[f64] {
        &self.grid
    }

    /// `x(t) = max_value * sum(2 / (pi * n) * sin(2 * pi * n * t))` for
    /// `n` in `1..harmonics`. The top harmonic itself is left out.
    pub fn synthesize(&self, harmonics: HarmonicCount) -> Wavetable {
        let samples = self
            .grid
            .iter()
            .map(|&t| {
                // fold from +0.0, an empty `sum()` would give -0.0
                let series = (1..harmonics.get()).fold(0.0, |acc, n| {
                    let n = f64::from(n);
                    acc + 2.0 / (PI * n) * (2.0 * PI * n * t).sin()
                });
                self.max_value * series
            })
            .collect();

        Wavetable { harmonics, samples }
    }
}

/// `table_size` points over `[0, max_phi)`, each moved half a bin right so
/// neither end of the half period is sampled.
pub fn sample_grid(table_size: usize, max_phi: f64) -> Vec<f64> {
    let step = max_phi / table_size as f64;
    let offset = max_phi / table_size as f64 / 2.0;

    (0..table_size)
        .map(|index| index as f64 * step + offset)
        .collect()
}
