pub type GenerateResult<T> = Result<T, GenerateError>;

/// Caller contract violations. `generate` is total over valid parameters, so
/// every variant points at an input, never at an internal failure.
#[derive(thiserror::Error, Debug)]
pub enum GenerateError {
    #[error("{field} must be a finite number, got {value}")]
    NonFinite { field: &'static str, value: f64 },

    #[error("{field} must be greater than zero, got {value}")]
    NotPositive { field: &'static str, value: f64 },

    #[error("{field} must not be negative, got {value}")]
    Negative { field: &'static str, value: f64 },

    #[error("numLines must be at least 1")]
    NoLines,

    #[error("numPeaksMin ({min}) exceeds numPeaksMax ({max})")]
    PeakRangeInverted { min: u32, max: u32 },

    #[error("line {line} produced a non-finite coordinate at sample {point}")]
    NonFiniteSample { line: u32, point: usize },

    #[error("invalid params document: {0}")]
    Json(#[from] serde_json::Error),
}

impl GenerateError {
    /// The camelCase parameter name this error is about, if any.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::NonFinite { field, .. }
            | Self::NotPositive { field, .. }
            | Self::Negative { field, .. } => Some(field),
            Self::NoLines => Some("numLines"),
            Self::PeakRangeInverted { .. } => Some("numPeaksMin"),
            Self::NonFiniteSample { .. } | Self::Json(_) => None,
        }
    }
}
