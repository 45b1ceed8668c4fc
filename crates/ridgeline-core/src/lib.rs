//! Procedural ridgeline plots in the style of the *Unknown Pleasures* cover.
//!
//! A stack of horizontal lines, each a sum of sinusoids plus Gaussian peaks,
//! rendered front-to-back so lower lines occlude the ones behind them. The
//! whole image is a pure function of [`GeneratorParams`] (seed included).
//!
//! ```
//! use ridgeline_core::{generate, GeneratorParams};
//!
//! let params = GeneratorParams { num_lines: 3, seed: 7, ..Default::default() };
//! let svg = generate(&params).unwrap();
//! assert_eq!(svg.matches("<path ").count(), 6);
//! ```

pub mod error;
pub mod generator;
pub mod params;
pub mod random;
pub mod svg;
pub mod synth;

pub use error::{GenerateError, GenerateResult};
pub use generator::{export_filename, generate, generate_lines};
pub use params::{param_range, random_seed, CanvasPreset, GeneratorParams, ParamRange, PARAM_RANGES};
pub use random::SeededRandom;
pub use svg::SVG_MEDIA_TYPE;
