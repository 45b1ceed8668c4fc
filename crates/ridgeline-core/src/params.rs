//! Parameter model: the document the slider UI edits and `generate` consumes.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{GenerateError, GenerateResult};

/// Seeds handed out by [`random_seed`] fall in `[0, SEED_SPACE)`.
pub const SEED_SPACE: u64 = 1_000_000;

// ── Public structs ────────────────────────────────────────────────────────────

/// User-facing generation parameters (10 sliders + seed).
/// Field names serialize in camelCase to match the UI's JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GeneratorParams {
    /// Canvas width in px, default 600.
    pub width: f64,
    /// Canvas height in px, default 800.
    pub height: f64,
    /// Number of stacked lines, default 80.
    pub num_lines: u32,
    /// Vertical gap between consecutive baselines in px, default 6.
    pub line_spacing: f64,
    /// Peak height ceiling in px, default 40.
    pub max_amplitude: f64,
    /// Inclusive lower bound on peaks per line, default 4.
    pub num_peaks_min: u32,
    /// Inclusive upper bound on peaks per line, default 7.
    pub num_peaks_max: u32,
    /// Base oscillation count across the full width, default 2.0.
    pub wave_freq: f64,
    /// Scales the fine-texture wave amplitude, default 0.3.
    pub noise_level: f64,
    /// Stroke thickness in px, default 1.5.
    pub stroke_width: f64,
    /// Reproducibility key. Only the low 32 bits reach the random source.
    pub seed: u64,
}

impl Default for GeneratorParams {
    fn default() -> Self {
        Self {
            width: 600.0,
            height: 800.0,
            num_lines: 80,
            line_spacing: 6.0,
            max_amplitude: 40.0,
            num_peaks_min: 4,
            num_peaks_max: 7,
            wave_freq: 2.0,
            noise_level: 0.3,
            stroke_width: 1.5,
            seed: 42,
        }
    }
}

impl GeneratorParams {
    /// Parse a (possibly partial) JSON params document. Missing fields take
    /// their defaults. The result is not validated.
    pub fn from_json(json: &str) -> GenerateResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Same parameters on a preset canvas.
    pub fn with_preset(mut self, preset: CanvasPreset) -> Self {
        let (w, h) = preset.dimensions();
        self.width = w;
        self.height = h;
        self
    }

    /// Check every field against the generator's input contract.
    ///
    /// Non-finite numbers, a non-positive canvas, spacing or stroke, negative
    /// amplitudes, zero lines and an inverted peak range are all rejected with
    /// the offending field named in the error.
    pub fn validate(&self) -> GenerateResult<()> {
        positive("width", self.width)?;
        positive("height", self.height)?;
        positive("lineSpacing", self.line_spacing)?;
        non_negative("maxAmplitude", self.max_amplitude)?;
        finite("waveFreq", self.wave_freq)?;
        non_negative("noiseLevel", self.noise_level)?;
        positive("strokeWidth", self.stroke_width)?;

        if self.num_lines == 0 {
            return Err(GenerateError::NoLines);
        }
        if self.num_peaks_min > self.num_peaks_max {
            return Err(GenerateError::PeakRangeInverted {
                min: self.num_peaks_min,
                max: self.num_peaks_max,
            });
        }
        Ok(())
    }

    /// Copy with every field pulled into its slider range.
    ///
    /// Non-finite values fall back to the field's default before clamping.
    /// Peak bounds are linked the way the sliders link them: the minimum is
    /// lowered to the maximum when it would exceed it. The seed is untouched.
    pub fn clamp_to_ranges(&self) -> Self {
        let d = Self::default();
        let num_peaks_max = clamp_u32(self.num_peaks_max, &NUM_PEAKS_MAX);
        let num_peaks_min = clamp_u32(self.num_peaks_min, &NUM_PEAKS_MIN).min(num_peaks_max);
        Self {
            width: clamp_f64(self.width, d.width, &WIDTH),
            height: clamp_f64(self.height, d.height, &HEIGHT),
            num_lines: clamp_u32(self.num_lines, &NUM_LINES),
            line_spacing: clamp_f64(self.line_spacing, d.line_spacing, &LINE_SPACING),
            max_amplitude: clamp_f64(self.max_amplitude, d.max_amplitude, &MAX_AMPLITUDE),
            num_peaks_min,
            num_peaks_max,
            wave_freq: clamp_f64(self.wave_freq, d.wave_freq, &WAVE_FREQ),
            noise_level: clamp_f64(self.noise_level, d.noise_level, &NOISE_LEVEL),
            stroke_width: clamp_f64(self.stroke_width, d.stroke_width, &STROKE_WIDTH),
            seed: self.seed,
        }
    }
}

fn finite(field: &'static str, value: f64) -> GenerateResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(GenerateError::NonFinite { field, value })
    }
}

fn positive(field: &'static str, value: f64) -> GenerateResult<()> {
    finite(field, value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(GenerateError::NotPositive { field, value })
    }
}

fn non_negative(field: &'static str, value: f64) -> GenerateResult<()> {
    finite(field, value)?;
    if value >= 0.0 {
        Ok(())
    } else {
        Err(GenerateError::Negative { field, value })
    }
}

// ── Slider ranges ─────────────────────────────────────────────────────────────

/// Range and step of one slider, as the UI draws it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ParamRange {
    pub field: &'static str,
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

const fn range(field: &'static str, min: f64, max: f64, step: f64) -> ParamRange {
    ParamRange { field, min, max, step }
}

const WIDTH: ParamRange = range("width", 400.0, 1200.0, 50.0);
const HEIGHT: ParamRange = range("height", 600.0, 1600.0, 50.0);
const NUM_LINES: ParamRange = range("numLines", 40.0, 150.0, 1.0);
const LINE_SPACING: ParamRange = range("lineSpacing", 2.0, 12.0, 0.5);
const MAX_AMPLITUDE: ParamRange = range("maxAmplitude", 10.0, 100.0, 1.0);
const NUM_PEAKS_MIN: ParamRange = range("numPeaksMin", 1.0, 10.0, 1.0);
const NUM_PEAKS_MAX: ParamRange = range("numPeaksMax", 1.0, 10.0, 1.0);
const WAVE_FREQ: ParamRange = range("waveFreq", 0.5, 5.0, 0.1);
const NOISE_LEVEL: ParamRange = range("noiseLevel", 0.0, 2.0, 0.05);
const STROKE_WIDTH: ParamRange = range("strokeWidth", 0.5, 4.0, 0.1);

/// Every slider, in panel order (canvas, density, peaks, texture, style).
pub const PARAM_RANGES: [ParamRange; 10] = [
    WIDTH,
    HEIGHT,
    NUM_LINES,
    LINE_SPACING,
    MAX_AMPLITUDE,
    NUM_PEAKS_MIN,
    NUM_PEAKS_MAX,
    WAVE_FREQ,
    NOISE_LEVEL,
    STROKE_WIDTH,
];

/// Look up a slider by its camelCase field name.
pub fn param_range(field: &str) -> Option<&'static ParamRange> {
    PARAM_RANGES.iter().find(|r| r.field == field)
}

fn clamp_f64(value: f64, fallback: f64, r: &ParamRange) -> f64 {
    let v = if value.is_finite() { value } else { fallback };
    v.clamp(r.min, r.max)
}

fn clamp_u32(value: u32, r: &ParamRange) -> u32 {
    value.clamp(r.min as u32, r.max as u32)
}

// ── Canvas presets ────────────────────────────────────────────────────────────

/// Portrait 3:4 canvas sizes offered as one-click presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CanvasPreset {
    /// 600×800
    Portrait,
    /// 900×1200
    PortraitLarge,
    /// 1200×1600
    PortraitXl,
}

impl CanvasPreset {
    pub const ALL: [CanvasPreset; 3] = [Self::Portrait, Self::PortraitLarge, Self::PortraitXl];

    /// `(width, height)` in px.
    pub fn dimensions(self) -> (f64, f64) {
        match self {
            Self::Portrait => (600.0, 800.0),
            Self::PortraitLarge => (900.0, 1200.0),
            Self::PortraitXl => (1200.0, 1600.0),
        }
    }
}

// ── Seeds ─────────────────────────────────────────────────────────────────────

/// A fresh seed in `[0, SEED_SPACE)` from the thread RNG.
///
/// This is the "new seed" button; it is never called during generation.
pub fn random_seed() -> u64 {
    rand::thread_rng().gen_range(0..SEED_SPACE)
}

// ── Unit tests ────────────────────────────────────────────────────────────────
