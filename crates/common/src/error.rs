//! Error types shared across gaitkin crates.

/// Top-level error type for gaitkin operations.
///
/// Every error is fatal for the series it was raised on: the kinematics
/// pass produces either a complete result or one of these.
#[derive(Debug, thiserror::Error)]
pub enum GaitkinError {
    #[error("Insufficient data: need at least {required} samples, got {actual}")]
    InsufficientData { required: usize, actual: usize },

    #[error("Missing column: {column}")]
    MissingColumn { column: String },

    #[error("No heel strike found")]
    NoHeelStrikeFound,

    #[error("Length mismatch: expected {expected} samples, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("Timestamps must be strictly increasing (violated at frame {index})")]
    NonMonotonicTime { index: usize },

    #[error("Invalid value {value:?} in row {row}, column {column}")]
    InvalidValue {
        row: usize,
        column: String,
        value: String,
    },

    #[error("Unknown joint: {name}")]
    UnknownJoint { name: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),
}

/// Result type alias using GaitkinError.
pub type GaitkinResult<T> = Result<T, GaitkinError>;

impl GaitkinError {
    pub fn insufficient_data(required: usize, actual: usize) -> Self {
        Self::InsufficientData { required, actual }
    }

    pub fn missing_column(column: impl Into<String>) -> Self {
        Self::MissingColumn {
            column: column.into(),
        }
    }

    pub fn length_mismatch(expected: usize, actual: usize) -> Self {
        Self::LengthMismatch { expected, actual }
    }

    pub fn invalid_value(row: usize, column: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidValue {
            row,
            column: column.into(),
            value: value.into(),
        }
    }

    pub fn unknown_joint(name: impl Into<String>) -> Self {
        Self::UnknownJoint { name: name.into() }
    }
}
