//! Algorithm implementations for symptom-based prediction
//!
//! This module contains the categorizer, the symptom matcher and the
//! prediction step that combines them for a user selection.

pub mod categories;
pub mod matcher;
pub mod prediction;

// Re-export commonly used types
pub use categories::{CategorizedDiseases, Category, CategoryMap, categorize_diseases};
pub use matcher::{MIN_MATCH_COUNT, MatchCandidate, rank_diseases};
pub use prediction::{DiagnosisReport, Prediction, predict};
