use thiserror::Error;

#[derive(Debug, Error)]
pub enum LunchError {
    #[error("Type mismatch: {0}")]
    TypeMismatch(String),

    #[error("Missing expected key {0}")]
    MissingKey(String),

    #[error("Arity mismatch: {0}")]
    ArityMismatch(String),

    #[error("Range inverted for {0}: upper limit cannot be smaller than lower limit")]
    RangeInverted(String),

    #[error("Unknown category '{}'{}", .label, suggestion_suffix(.suggestion))]
    UnknownCategory {
        label: String,
        suggestion: Option<String>,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

fn suggestion_suffix(suggestion: &Option<String>) -> String {
    match suggestion {
        Some(label) => format!(" (did you mean '{}'?)", label),
        None => String::new(),
    }
}

pub type Result<T> = std::result::Result<T, LunchError>;
