//! Synthetic test signals: a sine wave buried in uniform noise.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Generator for a noisy signal with one hidden periodic component.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HiddenSine {
    /// Sine period in samples (default: 128)
    pub period: f32,
    /// Sine amplitude (default: 1.0)
    pub amplitude: f32,
    /// Noise is uniform in `[-noise, noise]` (default: 2.0)
    pub noise: f32,
    /// RNG seed; equal seeds give identical signals.
    pub seed: u64,
}

impl Default for HiddenSine {
    fn default() -> Self {
        Self {
            period: 128.0,
            amplitude: 1.0,
            noise: 2.0,
            seed: 0,
        }
    }
}

impl HiddenSine {
    pub fn new(period: f32) -> Self {
        Self {
            period,
            ..Default::default()
        }
    }

    /// Generate `len` samples.
    pub fn generate(&self, len: usize) -> Vec<f32> {
        let mut rng = StdRng::seed_from_u64(self.seed);
        let noise = self.noise.abs();
        let omega = 2.0 * std::f64::consts::PI / self.period as f64;

        (0..len)
            .map(|i| {
                let tone = self.amplitude as f64 * (omega * i as f64).sin();
                let jitter = if noise > 0.0 {
                    rng.gen_range(-noise..=noise)
                } else {
                    0.0
                };
                tone as f32 + jitter
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_signal() {
        let synth = HiddenSine::default();
        assert_eq!(synth.generate(1000), synth.generate(1000));

        let other = HiddenSine {
            seed: 7,
            ..HiddenSine::default()
        };
        assert_ne!(synth.generate(1000), other.generate(1000));
    }

    #[test]
    fn test_noiseless_is_pure_sine() {
        let synth = HiddenSine {
            period: 8.0,
            amplitude: 2.0,
            noise: 0.0,
            seed: 0,
        };
        let samples = synth.generate(16);
        assert!(samples[0].abs() < 1e-6);
        assert!((samples[2] - 2.0).abs() < 1e-6);
        assert!((samples[6] + 2.0).abs() < 1e-6);
        assert!((samples[10] - 2.0).abs() < 1e-6);
    }

    #[test]
    fn test_noise_bounded() {
        let synth = HiddenSine {
            amplitude: 0.0,
            noise: 0.5,
            ..HiddenSine::default()
        };
        assert!(synth.generate(10_000).iter().all(|v| v.abs() <= 0.5));
    }
}
