//! Entry point: parameters in, SVG markup out.

use crate::error::{GenerateError, GenerateResult};
use crate::params::GeneratorParams;
use crate::svg::{fill_path, polyline_path, SvgDocument};
use crate::synth::{draw_lines, Line, StackLayout, POINTS_PER_LINE};

/// Render the ridgeline stack for `params` as an SVG document.
///
/// The result is a pure function of `params` (seed included): byte-identical
/// across calls and platforms. Each line contributes a white occlusion fill
/// followed by its black stroke, top line first, so lower lines paint over
/// the peaks of the lines behind them.
///
/// # Errors
/// Returns the first contract violation found by
/// [`GeneratorParams::validate`], or [`GenerateError::NonFiniteSample`] if a
/// coordinate overflows. Sample index `POINTS_PER_LINE` denotes the mask's
/// bottom edge.
#[tracing::instrument(skip(params), fields(seed = params.seed, lines = params.num_lines))]
pub fn generate(params: &GeneratorParams) -> GenerateResult<String> {
    params.validate()?;

    let layout = StackLayout::centered(params.height, params.num_lines, params.line_spacing);
    let mut doc = SvgDocument::new(params.width, params.height, params.stroke_width);
    doc.reserve_lines(params.num_lines as usize);

    for line in draw_lines(params) {
        let points: Vec<(f64, f64)> = line.points(params.width).collect();
        if let Some(point) = points.iter().position(|(x, y)| !x.is_finite() || !y.is_finite()) {
            return Err(GenerateError::NonFiniteSample { line: line.index, point });
        }
        let bottom = layout.mask_bottom(line.index);
        if !bottom.is_finite() {
            return Err(GenerateError::NonFiniteSample { line: line.index, point: POINTS_PER_LINE });
        }

        let line_d = polyline_path(points.iter().copied());
        let fill_d = fill_path(&line_d, points[0].0, points[POINTS_PER_LINE - 1].0, bottom);
        doc.push_line(&fill_d, &line_d);
    }

    let svg = doc.finish();
    tracing::debug!(bytes = svg.len(), "ridgeline document generated");
    Ok(svg)
}

/// Validate `params` and return the drawn lines without rendering them.
/// Consumes the random source exactly as [`generate`] does.
pub fn generate_lines(params: &GeneratorParams) -> GenerateResult<Vec<Line>> {
    params.validate()?;
    Ok(draw_lines(params))
}

/// Suggested download name for the document generated from `seed`.
pub fn export_filename(seed: u64) -> String {
    format!("joy_division_{seed}.svg")
}

// ── Unit tests ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn small(seed: u64) -> GeneratorParams {
        GeneratorParams { num_lines: 6, seed, ..Default::default() }
    }

    #[test]
    fn generate_is_deterministic() {
        let p = small(42);
        assert_eq!(generate(&p).unwrap(), generate(&p).unwrap());
    }

    #[test]
    fn seed_changes_output_but_not_structure() {
        let a = generate(&small(42)).unwrap();
        let b = generate(&small(43)).unwrap();
        assert_ne!(a, b);
        assert_eq!(a.matches("<path ").count(), b.matches("<path ").count());
        assert_eq!(a.lines().next(), b.lines().next(), "envelope must not depend on the seed");
    }

    #[test]
    fn emits_fill_then_stroke_per_line() {
        let svg = generate(&small(1)).unwrap();
        let paths: Vec<&str> = svg
            .lines()
            .filter(|l| l.trim_start().starts_with("<path "))
            .collect();
        assert_eq!(paths.len(), 12);
        for pair in paths.chunks(2) {
            assert!(pair[0].ends_with(r#"fill="white" stroke="none"/>"#), "{}", &pair[0][..40]);
            assert!(pair[1].contains(r#"stroke="black" stroke-width="1.5""#));
            // The fill is the stroke's polyline extended into a closed mask.
            let line_d = pair[1].split('"').nth(1).unwrap();
            let fill_d = pair[0].split('"').nth(1).unwrap();
            assert!(fill_d.starts_with(line_d) && fill_d.ends_with(" Z"));
        }
        assert_eq!(svg.matches("<rect ").count(), 1);
    }

    #[test]
    fn single_line_is_one_pair_at_mid_height() {
        let p = GeneratorParams { num_lines: 1, ..Default::default() };
        let svg = generate(&p).unwrap();
        assert_eq!(svg.matches("<path ").count(), 2);
        let lines = generate_lines(&p).unwrap();
        assert!((lines[0].base_y - p.height / 2.0).abs() <= p.line_spacing / 2.0);
        // Mask bottom is baseY + 1.5 × spacing = 397 + 9.
        assert!(svg.contains("L 600.00,406.00 L 0.00,406.00 Z"), "mask bottom missing");
    }

    #[test]
    fn invalid_params_fail_fast_with_field() {
        let p = GeneratorParams { num_peaks_min: 9, num_peaks_max: 2, ..Default::default() };
        let err = generate(&p).unwrap_err();
        assert_eq!(err.field(), Some("numPeaksMin"));

        let p = GeneratorParams { stroke_width: f64::NAN, ..Default::default() };
        assert!(matches!(generate(&p), Err(GenerateError::NonFinite { field: "strokeWidth", .. })));
    }

    #[test]
    fn overflowing_layout_is_reported_not_printed() {
        // 2 × f64::MAX of stack height overflows the baseline to -inf.
        let p = GeneratorParams {
            num_lines: 2,
            height: f64::MAX,
            line_spacing: f64::MAX,
            ..Default::default()
        };
        match generate(&p) {
            Err(GenerateError::NonFiniteSample { line: 0, point: 0 }) => {}
            other => panic!("expected NonFiniteSample on line 0, got {other:?}"),
        }
    }

    #[test]
    fn output_never_contains_nan_or_inf() {
        for seed in 0..20 {
            let p = GeneratorParams { num_lines: 4, noise_level: 2.0, seed, ..Default::default() };
            let svg = generate(&p).unwrap();
            assert!(
                !svg.contains("NaN") && !svg.contains("inf"),
                "seed {seed} leaked a non-finite number"
            );
        }
    }

    #[test]
    fn export_filename_is_derived_from_seed() {
        assert_eq!(export_filename(42), "joy_division_42.svg");
        assert_eq!(export_filename(0), "joy_division_0.svg");
    }
}
