use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlanError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Ratio out of range [0, 1]: {0}")]
    InvalidRatio(f64),

    #[error("Expected {expected} calorie ratios, got {actual}")]
    DistributionLength { expected: usize, actual: usize },

    #[error("Meal index {index} out of range (meals: {len})")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("{what} ratios sum to {sum:.3}, expected 1.0")]
    UnbalancedRatios { what: &'static str, sum: f64 },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// `hint` is either empty or a " (did you mean ...)" suffix.
    #[error("Unknown macro '{given}'{hint}")]
    UnknownMacro { given: String, hint: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),
}

pub type Result<T> = std::result::Result<T, PlanError>;
