//! Configuration for the symptom matcher.

use std::path::{Path, PathBuf};

use crate::algorithm::categories::CategoryMap;

/// Symptom table file name
pub const SYMPTOMS_FILE: &str = "dataset1.csv";
/// Description table file name
pub const DESCRIPTIONS_FILE: &str = "symptom_Description.csv";
/// Precaution table file name
pub const PRECAUTIONS_FILE: &str = "symptom_precaution.csv";

/// Locations of the three input tables
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataPaths {
    /// Disease to symptom rows
    pub symptoms: PathBuf,
    /// Disease to description rows
    pub descriptions: PathBuf,
    /// Disease to precaution rows
    pub precautions: PathBuf,
}

impl DataPaths {
    /// Resolve the fixed file names against a base directory
    #[must_use]
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            symptoms: dir.join(SYMPTOMS_FILE),
            descriptions: dir.join(DESCRIPTIONS_FILE),
            precautions: dir.join(PRECAUTIONS_FILE),
        }
    }
}

impl Default for DataPaths {
    fn default() -> Self {
        Self {
            symptoms: PathBuf::from(SYMPTOMS_FILE),
            descriptions: PathBuf::from(DESCRIPTIONS_FILE),
            precautions: PathBuf::from(PRECAUTIONS_FILE),
        }
    }
}

/// Configuration for building the knowledge base
#[derive(Debug, Clone, Default)]
pub struct DiagnosisConfig {
    /// Input table locations
    pub paths: DataPaths,
    /// Category membership table
    pub categories: CategoryMap,
}
