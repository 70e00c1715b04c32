//! Knowledge base holding every table the matcher needs
//!
//! Built once at startup and only read afterwards. The presenter and the
//! prediction step receive it by reference.

use std::time::Instant;

use crate::algorithm::categories::{
    CategorizedDiseases, Category, CategoryMap, DiseaseSymptoms, categorize_diseases,
};
use crate::config::DiagnosisConfig;
use crate::loader::{load_descriptions, load_precautions, load_symptoms};
use crate::models::table::{DescriptionTable, PrecautionTable, SymptomTable};

/// Immutable lookup context for predictions
#[derive(Debug, Clone, Default)]
pub struct KnowledgeBase {
    symptoms: SymptomTable,
    descriptions: DescriptionTable,
    precautions: PrecautionTable,
    categorized: CategorizedDiseases,
}

impl KnowledgeBase {
    /// Build the knowledge base from already loaded tables
    #[must_use]
    pub fn new(
        symptoms: SymptomTable,
        descriptions: DescriptionTable,
        precautions: PrecautionTable,
        categories: &CategoryMap,
    ) -> Self {
        let categorized = categorize_diseases(&symptoms, categories);
        Self {
            symptoms,
            descriptions,
            precautions,
            categorized,
        }
    }

    /// Load the three tables named by the configuration and categorize them
    ///
    /// Never fails: unreadable files leave their table empty.
    #[must_use]
    pub fn load(config: &DiagnosisConfig) -> Self {
        let start = Instant::now();

        let symptoms = load_symptoms(&config.paths.symptoms);
        let descriptions = load_descriptions(&config.paths.descriptions);
        let precautions = load_precautions(&config.paths.precautions);
        let knowledge_base = Self::new(symptoms, descriptions, precautions, &config.categories);

        log::info!(
            "Knowledge base ready with {} diseases in {} categories in {:?}",
            knowledge_base.symptoms.len(),
            knowledge_base.categories().len(),
            start.elapsed()
        );
        if knowledge_base.symptoms.is_empty() {
            log::warn!("No symptom data loaded, every prediction will come back empty");
        }

        knowledge_base
    }

    /// The disease to symptom table
    #[must_use]
    pub const fn symptom_table(&self) -> &SymptomTable {
        &self.symptoms
    }

    /// Diseases bucketed by category
    #[must_use]
    pub const fn categorized(&self) -> &CategorizedDiseases {
        &self.categorized
    }

    /// Categories to offer the user
    #[must_use]
    pub fn categories(&self) -> Vec<Category> {
        self.categorized.populated_categories()
    }

    /// Diseases in a category
    #[must_use]
    pub fn diseases_in(&self, category: Category) -> &[DiseaseSymptoms] {
        self.categorized.diseases(category)
    }

    /// Symptom checklist for a category
    #[must_use]
    pub fn symptoms_in(&self, category: Category) -> Vec<String> {
        self.categorized.symptoms_in(category)
    }

    /// Description lines for a disease
    #[must_use]
    pub fn description(&self, disease: &str) -> Option<&[String]> {
        self.descriptions.get(disease)
    }

    /// Precaution lines for a disease
    #[must_use]
    pub fn precautions(&self, disease: &str) -> Option<&[String]> {
        self.precautions.get(disease)
    }
}
