//! Waveform contributors: sinusoid populations and Gaussian peaks.
//!
//! Each `draw_*` function pulls its count first, then each member's fields in
//! declaration order. That order is part of the output contract: shuffling
//! any draw changes every image for a given seed.
//!
//! `sin` and `exp` come from `libm`, not the platform math library, so a
//! sample evaluates to the same bits on every target.

use std::f64::consts::TAU;

use crate::random::SeededRandom;

/// Horizontal band (normalized) that peaks are placed in.
pub const PEAK_BAND: (f64, f64) = (0.3, 0.7);

/// A sinusoidal contributor to a line's vertical offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Wave {
    /// Cycles across the full width.
    pub freq: f64,
    /// Radians, `[0, 2π)`.
    pub phase: f64,
    /// Pixels.
    pub amp: f64,
}

impl Wave {
    #[inline]
    pub fn eval(&self, x_norm: f64) -> f64 {
        self.amp * libm::sin(self.freq * TAU * x_norm + self.phase)
    }
}

/// A localized bump.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Peak {
    /// Normalized horizontal centre, inside [`PEAK_BAND`].
    pub pos: f64,
    /// Gaussian sigma in normalized units; smaller is narrower.
    pub width: f64,
    /// Pixels.
    pub amp: f64,
}

impl Peak {
    #[inline]
    pub fn eval(&self, x_norm: f64) -> f64 {
        let d = x_norm - self.pos;
        self.amp * libm::exp(-(d * d) / (2.0 * self.width * self.width))
    }
}

/// Frequency band and amplitude role of a wave group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Population {
    /// Gross shape: near the base frequency, large amplitude.
    Primary,
    /// Mid detail: 3-6× the base frequency.
    Secondary,
    /// Fine texture: fixed 15-30 cycles, amplitude scaled by noise level.
    Tertiary,
}

impl Population {
    /// Inclusive bounds on how many waves the population gets per line.
    pub fn count_range(self) -> (u32, u32) {
        match self {
            Self::Primary => (2, 3),
            Self::Secondary => (2, 3),
            Self::Tertiary => (3, 5),
        }
    }

    fn draw_one(self, rng: &mut SeededRandom, wave_freq: f64, noise_level: f64) -> Wave {
        let freq = match self {
            Self::Primary => wave_freq * rng.uniform(0.7, 1.3),
            Self::Secondary => wave_freq * rng.uniform(3.0, 6.0),
            Self::Tertiary => rng.uniform(15.0, 30.0),
        };
        let phase = rng.uniform(0.0, TAU);
        let amp = match self {
            Self::Primary => rng.uniform(0.5, 2.0),
            Self::Secondary => rng.uniform(0.3, 0.8),
            Self::Tertiary => noise_level * rng.uniform(0.1, 0.3),
        };
        Wave { freq, phase, amp }
    }
}

/// Draw a wave count, then that many waves of the given population.
pub fn draw_waves(
    rng: &mut SeededRandom,
    population: Population,
    wave_freq: f64,
    noise_level: f64,
) -> Vec<Wave> {
    let (lo, hi) = population.count_range();
    let n = rng.randint(lo, hi);
    (0..n)
        .map(|_| population.draw_one(rng, wave_freq, noise_level))
        .collect()
}

/// Draw a peak count in `[min, max]`, then each peak's position, width and
/// amplitude.
pub fn draw_peaks(rng: &mut SeededRandom, min: u32, max: u32, max_amplitude: f64) -> Vec<Peak> {
    let n = rng.randint(min, max);
    (0..n)
        .map(|_| {
            let pos = rng.uniform(PEAK_BAND.0, PEAK_BAND.1);
            let width = rng.uniform(0.01, 0.05);
            let amp = rng.uniform(0.3, 1.0) * max_amplitude;
            Peak { pos, width, amp }
        })
        .collect()
}
