//! Error handling for the symptom matcher.

pub mod util;

use std::path::PathBuf;

/// Errors raised while loading tables, parsing category configuration,
/// predicting, or prompting the user
#[derive(Debug, thiserror::Error)]
pub enum DiagnosisError {
    /// Input file does not exist
    #[error("File not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    /// Error opening or reading a file
    #[error("IO error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error decoding tabular input
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Declarative category table is inconsistent
    #[error("Category configuration error: {0}")]
    CategoryConfig(String),

    /// Category table could not be parsed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Prediction requested before a category was chosen
    #[error("Please select a disease category.")]
    NoCategorySelected,

    /// Prediction requested with an empty symptom selection
    #[error("Please select at least one symptom.")]
    NoSymptomsSelected,

    /// Terminal prompt failed
    #[error("Prompt error: {0}")]
    Prompt(#[from] inquire::InquireError),
}

impl DiagnosisError {
    /// Whether this error is a selection problem the user can fix by retrying
    #[must_use]
    pub const fn is_user_warning(&self) -> bool {
        matches!(self, Self::NoCategorySelected | Self::NoSymptomsSelected)
    }

    /// Whether the user cancelled or interrupted a prompt
    #[must_use]
    pub const fn is_interrupted(&self) -> bool {
        matches!(
            self,
            Self::Prompt(
                inquire::InquireError::OperationCanceled
                    | inquire::InquireError::OperationInterrupted
            )
        )
    }
}

/// Result type for symptom matcher operations
pub type Result<T> = std::result::Result<T, DiagnosisError>;
