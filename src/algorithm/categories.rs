//! Disease categories
//!
//! This module defines the nine disease categories offered to the user, the
//! declarative table assigning diseases to them, and the categorizer that
//! buckets a loaded symptom table.

use std::fmt;
use std::io;
use std::path::Path;

use itertools::Itertools;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::error::util::safe_open_file;
use crate::error::{DiagnosisError, Result};
use crate::models::table::SymptomTable;

/// Disease categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Respiratory system (e.g., asthma, pneumonia)
    #[serde(rename = "Respiratory System Diseases")]
    Respiratory,
    /// Digestive system (e.g., GERD, hepatitis)
    #[serde(rename = "Digestive System Diseases")]
    Digestive,
    /// Heart and blood vessels
    #[serde(rename = "Cardiovascular Diseases")]
    Cardiovascular,
    /// Endocrine system (e.g., diabetes, thyroid disorders)
    #[serde(rename = "Endocrine System Diseases")]
    Endocrine,
    /// Joints, bones and spine
    #[serde(rename = "Musculoskeletal System Diseases")]
    Musculoskeletal,
    /// Brain and nervous system
    #[serde(rename = "Neurological Diseases")]
    Neurological,
    /// Infections
    #[serde(rename = "Infectious Diseases")]
    Infectious,
    /// Skin conditions
    #[serde(rename = "Skin Diseases")]
    Skin,
    /// Fallback bucket for anything not listed elsewhere
    #[serde(rename = "Other Diseases")]
    Other,
}

impl Category {
    /// All categories in menu order
    pub const ALL: [Self; 9] = [
        Self::Respiratory,
        Self::Digestive,
        Self::Cardiovascular,
        Self::Endocrine,
        Self::Musculoskeletal,
        Self::Neurological,
        Self::Infectious,
        Self::Skin,
        Self::Other,
    ];

    /// Get the display name for this category
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Respiratory => "Respiratory System Diseases",
            Self::Digestive => "Digestive System Diseases",
            Self::Cardiovascular => "Cardiovascular Diseases",
            Self::Endocrine => "Endocrine System Diseases",
            Self::Musculoskeletal => "Musculoskeletal System Diseases",
            Self::Neurological => "Neurological Diseases",
            Self::Infectious => "Infectious Diseases",
            Self::Skin => "Skin Diseases",
            Self::Other => "Other Diseases",
        }
    }

    /// Position in menu order
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Built-in membership table, checked in this order
const BUILTIN_CATEGORIES: [(Category, &[&str]); 9] = [
    (
        Category::Respiratory,
        &["Bronchial Asthma", "Pneumonia", "Tuberculosis", "Common Cold"],
    ),
    (
        Category::Digestive,
        &[
            "GERD",
            "Chronic Cholestasis",
            "Peptic Ulcer Disease",
            "Alcoholic Hepatitis",
            "Hepatitis A",
            "Hepatitis B",
            "Hepatitis C",
            "Hepatitis D",
            "Hepatitis E",
        ],
    ),
    (Category::Cardiovascular, &["Heart Attack", "Hypertension"]),
    (
        Category::Endocrine,
        &["Diabetes", "Hyperthyroidism", "Hypothyroidism", "Hypoglycemia"],
    ),
    (
        Category::Musculoskeletal,
        &["Osteoarthritis", "Arthritis", "Cervical Spondylosis"],
    ),
    (
        Category::Neurological,
        &[
            "Paralysis (Brain Hemorrhage)",
            "Migraine",
            "Vertigo (Paroxysmal Positional Vertigo)",
        ],
    ),
    (
        Category::Infectious,
        &[
            "Fungal Infection",
            "AIDS",
            "Urinary Tract Infection",
            "Malaria",
            "Chicken Pox",
            "Dengue",
            "Typhoid",
        ],
    ),
    (Category::Skin, &["Acne", "Impetigo", "Psoriasis"]),
    (
        Category::Other,
        &["Varicose Veins", "Allergy", "Drug Reaction", "Gastroenteritis"],
    ),
];

/// One row of the declarative category table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryEntry {
    /// Category the diseases belong to
    pub category: Category,
    /// Disease names, matched exactly
    pub diseases: Vec<String>,
}

/// Ordered category membership table
///
/// Lookups walk the entries in order and stop at the first hit, so a disease
/// listed under two categories lands in the earlier one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryMap {
    entries: Vec<(Category, FxHashSet<String>)>,
}

impl Default for CategoryMap {
    fn default() -> Self {
        Self::from_entries(BUILTIN_CATEGORIES.iter().map(|(category, diseases)| {
            CategoryEntry {
                category: *category,
                diseases: diseases.iter().map(|d| (*d).to_string()).collect(),
            }
        }))
    }
}

impl CategoryMap {
    /// Build a table from entries, keeping their order
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = CategoryEntry>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|entry| {
                    let diseases = entry
                        .diseases
                        .iter()
                        .map(|d| d.trim().to_string())
                        .collect();
                    (entry.category, diseases)
                })
                .collect(),
        }
    }

    /// Parse a table from a JSON array of `{"category", "diseases"}` objects
    pub fn from_json_str(json: &str) -> Result<Self> {
        let entries: Vec<CategoryEntry> = serde_json::from_str(json)?;

        let duplicated = entries
            .iter()
            .map(|entry| entry.category)
            .duplicates()
            .collect_vec();
        if let Some(category) = duplicated.first() {
            return Err(DiagnosisError::CategoryConfig(format!(
                "category '{category}' is listed more than once"
            )));
        }

        Ok(Self::from_entries(entries))
    }

    /// Read a JSON category table from disk
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let file = safe_open_file(path)?;
        let content = io::read_to_string(file).map_err(|source| DiagnosisError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&content)
    }

    /// First category listing the disease, or `Other` when none does
    #[must_use]
    pub fn category_of(&self, disease: &str) -> Category {
        self.entries
            .iter()
            .find(|(_, diseases)| diseases.contains(disease))
            .map_or(Category::Other, |(category, _)| *category)
    }
}

/// A disease with its full symptom list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiseaseSymptoms {
    /// Disease name
    pub disease: String,
    /// Symptoms in file order, duplicates kept
    pub symptoms: Vec<String>,
}

/// Diseases bucketed by category
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategorizedDiseases {
    buckets: [Vec<DiseaseSymptoms>; 9],
}

impl CategorizedDiseases {
    /// Diseases assigned to a category, in table order
    #[must_use]
    pub fn diseases(&self, category: Category) -> &[DiseaseSymptoms] {
        &self.buckets[category.index()]
    }

    /// Categories with at least one disease, in menu order
    #[must_use]
    pub fn populated_categories(&self) -> Vec<Category> {
        Category::ALL
            .into_iter()
            .filter(|category| !self.buckets[category.index()].is_empty())
            .collect()
    }

    /// Distinct symptoms across a category, sorted by name
    #[must_use]
    pub fn symptoms_in(&self, category: Category) -> Vec<String> {
        self.diseases(category)
            .iter()
            .flat_map(|entry| entry.symptoms.iter())
            .unique()
            .sorted()
            .cloned()
            .collect()
    }

    /// Total number of categorized diseases
    #[must_use]
    pub fn total(&self) -> usize {
        self.buckets.iter().map(Vec::len).sum()
    }
}

/// Assign every disease in the symptom table to exactly one category
#[must_use]
pub fn categorize_diseases(symptoms: &SymptomTable, categories: &CategoryMap) -> CategorizedDiseases {
    let mut categorized = CategorizedDiseases::default();

    for entry in symptoms {
        let category = categories.category_of(&entry.disease);
        categorized.buckets[category.index()].push(DiseaseSymptoms {
            disease: entry.disease.clone(),
            symptoms: entry.values.clone(),
        });
    }

    log::debug!(
        "Categorized {} diseases into {} populated categories",
        categorized.total(),
        categorized.populated_categories().len()
    );

    categorized
}
