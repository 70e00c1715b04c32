//! A Rust library for matching selected symptoms against a categorized
//! disease table, with description and precaution lookup.

pub mod algorithm;
pub mod config;
pub mod error;
pub mod knowledge_base;
pub mod loader;
pub mod models;
pub mod presenter;
pub mod utils;

// Re-export the most common types for easier use
// Core types
pub use config::{DataPaths, DiagnosisConfig};
pub use error::{DiagnosisError, Result};
pub use knowledge_base::KnowledgeBase;
pub use models::{DiseaseTable, SelectionState, TableKind};

// Categorization and matching
pub use algorithm::{Category, CategoryMap, MatchCandidate, Prediction, predict, rank_diseases};

// Loading
pub use loader::{load_descriptions, load_precautions, load_symptoms, read_table};

// Presentation
pub use presenter::{ConsolePresenter, Presenter, Session, SessionState};
