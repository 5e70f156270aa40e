use std::fmt;

#[derive(Clone, Debug, PartialEq)]
pub enum PuzzleError {
    InvalidImage { width: f64, height: f64 },
    NonFinite { param: &'static str },
    InvalidConfig { field: &'static str, reason: String },
    Json(String),
}

impl PuzzleError {
    pub fn code(&self) -> &'static str {
        match self {
            PuzzleError::InvalidImage { .. } => "invalid_image",
            PuzzleError::NonFinite { .. } => "non_finite",
            PuzzleError::InvalidConfig { .. } => "invalid_config",
            PuzzleError::Json(_) => "invalid_json",
        }
    }
}

impl fmt::Display for PuzzleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PuzzleError::InvalidImage { width, height } => {
                write!(f, "image dimensions must be positive and finite (got {}x{})", width, height)
            }
            PuzzleError::NonFinite { param } => write!(f, "parameter '{}' must be finite", param),
            PuzzleError::InvalidConfig { field, reason } => write!(f, "config field '{}': {}", field, reason),
            PuzzleError::Json(msg) => write!(f, "invalid json: {}", msg),
        }
    }
}

impl std::error::Error for PuzzleError {}

impl From<serde_json::Error> for PuzzleError {
    fn from(e: serde_json::Error) -> Self {
        PuzzleError::Json(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, PuzzleError>;
