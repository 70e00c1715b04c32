//! Domain models
//!
//! Lookup tables loaded from the input files and the user's selection state.

pub mod selection;
pub mod table;

// Re-export commonly used types
pub use selection::SelectionState;
pub use table::{DiseaseEntry, DiseaseTable, TableKind};
