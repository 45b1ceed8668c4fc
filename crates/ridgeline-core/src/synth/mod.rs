//! Ridgeline synthesis: per-line waveform drawing and sampling.
//!
//! Draw order per line (fixed, seeds depend on it):
//!   1. Peak count, then each peak
//!   2. Primary wave count, then each wave
//!   3. Secondary wave count, then each wave
//!   4. Tertiary wave count, then each wave
//!   5. Sampling (consumes nothing)

pub mod wave;

use crate::params::GeneratorParams;
use crate::random::SeededRandom;
use wave::{draw_peaks, draw_waves, Peak, Population, Wave};

/// Samples per line, evenly spaced over `[0, width]` inclusive.
pub const POINTS_PER_LINE: usize = 400;

/// Occlusion mask reaches this many line spacings below a line's baseline.
pub const MASK_DEPTH: f64 = 1.5;

// ── Stack layout ──────────────────────────────────────────────────────────────

/// Vertical placement of the stack: baselines `start_y + i * line_spacing`,
/// with `start_y` chosen so the stack is centred on the canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StackLayout {
    pub start_y: f64,
    pub line_spacing: f64,
}

impl StackLayout {
    pub fn centered(height: f64, num_lines: u32, line_spacing: f64) -> Self {
        let total_height = num_lines as f64 * line_spacing;
        Self { start_y: (height - total_height) / 2.0, line_spacing }
    }

    #[inline]
    pub fn baseline(&self, index: u32) -> f64 {
        self.start_y + index as f64 * self.line_spacing
    }

    /// Bottom edge of the white fill painted under line `index`.
    #[inline]
    pub fn mask_bottom(&self, index: u32) -> f64 {
        self.baseline(index) + self.line_spacing * MASK_DEPTH
    }
}

// ── Lines ─────────────────────────────────────────────────────────────────────

/// One ridge of the stack: its baseline and everything drawn for it.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    pub index: u32,
    pub base_y: f64,
    pub peaks: Vec<Peak>,
    pub primary: Vec<Wave>,
    pub secondary: Vec<Wave>,
    pub tertiary: Vec<Wave>,
}

impl Line {
    /// Draw line `index` from `rng` in contract order.
    pub fn draw(
        rng: &mut SeededRandom,
        index: u32,
        layout: &StackLayout,
        params: &GeneratorParams,
    ) -> Self {
        let (freq, noise) = (params.wave_freq, params.noise_level);
        let peaks = draw_peaks(rng, params.num_peaks_min, params.num_peaks_max, params.max_amplitude);
        let primary = draw_waves(rng, Population::Primary, freq, noise);
        let secondary = draw_waves(rng, Population::Secondary, freq, noise);
        let tertiary = draw_waves(rng, Population::Tertiary, freq, noise);

        tracing::trace!(
            index,
            peaks = peaks.len(),
            primary = primary.len(),
            secondary = secondary.len(),
            tertiary = tertiary.len(),
            "line drawn"
        );

        Self {
            index,
            base_y: layout.baseline(index),
            peaks,
            primary,
            secondary,
            tertiary,
        }
    }

    /// Upward displacement at normalized `x_norm`: every wave (primary, then
    /// secondary, then tertiary) followed by every peak.
    pub fn offset(&self, x_norm: f64) -> f64 {
        let mut offset = 0.0;
        for wave in self.primary.iter().chain(&self.secondary).chain(&self.tertiary) {
            offset += wave.eval(x_norm);
        }
        for peak in &self.peaks {
            offset += peak.eval(x_norm);
        }
        offset
    }

    /// The [`POINTS_PER_LINE`] rendered points, left to right. Positive
    /// offsets raise the line, so `y = base_y - offset`.
    pub fn points(&self, width: f64) -> impl Iterator<Item = (f64, f64)> + '_ {
        let last = (POINTS_PER_LINE - 1) as f64;
        (0..POINTS_PER_LINE).map(move |i| {
            let x = i as f64 / last * width;
            let x_norm = x / width;
            (x, self.base_y - self.offset(x_norm))
        })
    }
}

/// Draw every line of the stack from one random source, top line first.
pub fn draw_lines(params: &GeneratorParams) -> Vec<Line> {
    let mut rng = SeededRandom::from_seed_u64(params.seed);
    let layout = StackLayout::centered(params.height, params.num_lines, params.line_spacing);
    (0..params.num_lines)
        .map(|i| Line::draw(&mut rng, i, &layout, params))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn layout_centres_the_stack() {
        let layout = StackLayout::centered(800.0, 80, 6.0);
        assert_abs_diff_eq!(layout.start_y, 160.0);
        assert_abs_diff_eq!(layout.baseline(79), 634.0);
        let mid = (layout.baseline(0) + layout.baseline(79)) / 2.0;
        assert!((mid - 400.0).abs() <= 3.0, "stack midpoint {mid} is off-centre");
        assert_abs_diff_eq!(layout.mask_bottom(0), 169.0);
    }

    #[test]
    fn single_line_sits_near_canvas_middle() {
        let layout = StackLayout::centered(800.0, 1, 6.0);
        assert!((layout.baseline(0) - 400.0).abs() <= 3.0);
    }

    #[test]
    fn draw_lines_is_deterministic() {
        let p = GeneratorParams { num_lines: 5, ..Default::default() };
        assert_eq!(draw_lines(&p), draw_lines(&p));
    }

    #[test]
    fn lines_are_independent_draws_in_index_order() {
        let p = GeneratorParams { num_lines: 3, ..Default::default() };
        let lines = draw_lines(&p);
        assert_eq!(lines.iter().map(|l| l.index).collect::<Vec<_>>(), vec![0, 1, 2]);
        assert!(lines.windows(2).all(|w| w[0].base_y < w[1].base_y));
        assert_ne!(lines[0].peaks, lines[1].peaks, "consecutive lines should differ");
    }

    #[test]
    fn first_line_matches_manual_draw_sequence() {
        let p = GeneratorParams::default();
        let line = &draw_lines(&p)[0];

        let mut rng = SeededRandom::new(42);
        let k = rng.randint(4, 7);
        assert_eq!(line.peaks.len() as u32, k);
        let pos = rng.uniform(0.3, 0.7);
        assert_eq!(line.peaks[0].pos.to_bits(), pos.to_bits());
    }

    #[test]
    fn points_span_the_width_evenly() {
        let p = GeneratorParams { num_lines: 1, ..Default::default() };
        let line = &draw_lines(&p)[0];
        let pts: Vec<(f64, f64)> = line.points(p.width).collect();
        assert_eq!(pts.len(), POINTS_PER_LINE);
        assert_eq!(pts[0].0, 0.0);
        assert_abs_diff_eq!(pts[POINTS_PER_LINE - 1].0, 600.0, epsilon = 1e-9);
        assert!(pts.iter().all(|(x, y)| x.is_finite() && y.is_finite()));
    }

    #[test]
    fn peaks_raise_the_line() {
        let line = Line {
            index: 0,
            base_y: 100.0,
            peaks: vec![Peak { pos: 0.5, width: 0.02, amp: 30.0 }],
            primary: vec![],
            secondary: vec![],
            tertiary: vec![],
        };
        let pts: Vec<(f64, f64)> = line.points(399.0).collect();
        let lowest_y = pts.iter().map(|&(_, y)| y).fold(f64::INFINITY, f64::min);
        assert!(
            lowest_y < 75.0,
            "peak should lift the line well above its baseline, min y = {lowest_y}"
        );
        assert_abs_diff_eq!(pts[0].1, 100.0, epsilon = 1e-6);
    }

    #[test]
    fn peak_count_bound_holds_across_seeds() {
        for seed in 0..200u64 {
            let p = GeneratorParams {
                num_lines: 10,
                num_peaks_min: 2,
                num_peaks_max: 5,
                seed,
                ..Default::default()
            };
            for line in draw_lines(&p) {
                assert!(
                    (2..=5).contains(&line.peaks.len()),
                    "seed {seed} line {} drew {} peaks", line.index, line.peaks.len()
                );
            }
        }
    }
}
