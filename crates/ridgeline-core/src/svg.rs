//! SVG path and document assembly.
//!
//! Output layout is fixed: one element per line, two-space indent, path
//! coordinates with exactly two fractional digits. Consumers diff and parse
//! this text, so any change here is a format change.

use std::fmt::Write;

pub const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// Media type the export path tags the document with.
pub const SVG_MEDIA_TYPE: &str = "image/svg+xml";

/// Approximate size of one fill/stroke pair at 400 samples.
const BYTES_PER_LINE: usize = 13 * 1024;

/// `M x0,y0 L x1,y1 L ...` over `points`, in order.
pub fn polyline_path<I>(points: I) -> String
where
    I: IntoIterator<Item = (f64, f64)>,
{
    let mut d = String::new();
    for (i, (x, y)) in points.into_iter().enumerate() {
        d.push_str(if i == 0 { "M " } else { " L " });
        // Writing into a String cannot fail.
        let _ = write!(d, "{x:.2},{y:.2}");
    }
    d
}

/// Close `line_path` into an occlusion mask: down the right edge to
/// `bottom`, across to `first_x`, and back up.
pub fn fill_path(line_path: &str, first_x: f64, last_x: f64, bottom: f64) -> String {
    format!("{line_path} L {last_x:.2},{bottom:.2} L {first_x:.2},{bottom:.2} Z")
}

/// Streaming writer for the ridgeline document envelope.
pub struct SvgDocument {
    buf: String,
    stroke_width: f64,
}

impl SvgDocument {
    /// Open the envelope and paint the white background.
    pub fn new(width: f64, height: f64, stroke_width: f64) -> Self {
        let mut buf = String::new();
        let _ = writeln!(
            buf,
            r#"<svg viewBox="0 0 {width} {height}" xmlns="{SVG_NS}" preserveAspectRatio="xMidYMid meet">"#
        );
        let _ = writeln!(buf, r#"  <rect width="{width}" height="{height}" fill="white"/>"#);
        Self { buf, stroke_width }
    }

    /// Reserve room for `lines` more fill/stroke pairs of typical size.
    /// Best effort: a request that overflows or cannot be allocated up front
    /// is skipped and the buffer grows as lines are pushed.
    pub fn reserve_lines(&mut self, lines: usize) {
        let _ = self.buf.try_reserve(lines.saturating_mul(BYTES_PER_LINE));
    }

    /// Append one line: the white occlusion fill, then the black stroke.
    pub fn push_line(&mut self, fill_d: &str, line_d: &str) {
        let _ = writeln!(self.buf, r#"  <path d="{fill_d}" fill="white" stroke="none"/>"#);
        let _ = writeln!(
            self.buf,
            r#"  <path d="{line_d}" fill="none" stroke="black" stroke-width="{}" stroke-linecap="round" stroke-linejoin="round"/>"#,
            self.stroke_width
        );
    }

    /// Close the envelope and hand back the markup.
    pub fn finish(mut self) -> String {
        self.buf.push_str("</svg>\n");
        self.buf
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn polyline_formats_two_decimals() {
        let d = polyline_path([(0.0, 10.0), (1.503_759, 9.996), (3.0, 0.004)]);
        assert_eq!(d, "M 0.00,10.00 L 1.50,10.00 L 3.00,0.00");
    }

    #[test]
    fn empty_polyline_is_empty() {
        assert_eq!(polyline_path(std::iter::empty()), "");
    }

    #[test]
    fn fill_path_closes_below_the_line() {
        let line = polyline_path([(0.0, 5.0), (600.0, 6.0)]);
        assert_eq!(
            fill_path(&line, 0.0, 600.0, 169.0),
            "M 0.00,5.00 L 600.00,6.00 L 600.00,169.00 L 0.00,169.00 Z"
        );
    }

    #[test]
    fn document_envelope_layout() {
        let mut doc = SvgDocument::new(600.0, 800.0, 1.5);
        doc.push_line("F", "L");
        let svg = doc.finish();
        let expected = concat!(
            r#"<svg viewBox="0 0 600 800" xmlns="http://www.w3.org/2000/svg" preserveAspectRatio="xMidYMid meet">"#, "\n",
            r#"  <rect width="600" height="800" fill="white"/>"#, "\n",
            r#"  <path d="F" fill="white" stroke="none"/>"#, "\n",
            r#"  <path d="L" fill="none" stroke="black" stroke-width="1.5" stroke-linecap="round" stroke-linejoin="round"/>"#, "\n",
            "</svg>\n",
        );
        assert_eq!(svg, expected);
    }

    #[test]
    fn oversized_reservation_is_skipped_not_fatal() {
        let mut doc = SvgDocument::new(600.0, 800.0, 1.5);
        doc.reserve_lines(usize::MAX);
        doc.reserve_lines(u32::MAX as usize);
        doc.push_line("F", "L");
        assert!(doc.finish().ends_with("</svg>\n"));
    }

    #[test]
    fn whole_numbers_print_without_fraction() {
        let svg = SvgDocument::new(1200.0, 1600.0, 2.0).finish();
        assert!(svg.contains(r#"viewBox="0 0 1200 1600""#), "{svg}");
        let mut doc = SvgDocument::new(1.0, 1.0, 2.0);
        doc.push_line("", "");
        assert!(doc.finish().contains(r#"stroke-width="2""#));
    }
}
