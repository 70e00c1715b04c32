//! User selection state
//!
//! Holds the category and symptoms the user has picked so far. The
//! prediction step reads it; only the presenter mutates it.

use crate::algorithm::categories::Category;

/// Category choice plus the symptom checklist state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    category: Option<Category>,
    symptoms: Vec<String>,
}

impl SelectionState {
    /// Create an empty selection
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a selection for a category with the given symptoms ticked
    #[must_use]
    pub fn with_symptoms<I, S>(category: Category, symptoms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut selection = Self::new();
        selection.select_category(category);
        for symptom in symptoms {
            selection.select_symptom(symptom);
        }
        selection
    }

    /// The chosen category, if any
    #[must_use]
    pub const fn category(&self) -> Option<Category> {
        self.category
    }

    /// Ticked symptoms in the order they were ticked
    #[must_use]
    pub fn symptoms(&self) -> &[String] {
        &self.symptoms
    }

    /// Whether a symptom is currently ticked
    #[must_use]
    pub fn is_selected(&self, symptom: &str) -> bool {
        self.symptoms.iter().any(|s| s == symptom)
    }

    /// Choose a category
    ///
    /// Switching to a different category clears the symptom checklist, since
    /// the offered symptoms change with the category.
    pub fn select_category(&mut self, category: Category) {
        if self.category != Some(category) {
            self.symptoms.clear();
        }
        self.category = Some(category);
    }

    /// Tick a symptom; ticking twice has no further effect
    pub fn select_symptom(&mut self, symptom: impl Into<String>) {
        let symptom = symptom.into();
        if !self.is_selected(&symptom) {
            self.symptoms.push(symptom);
        }
    }

    /// Flip a symptom checkbox, returning whether it is now ticked
    pub fn toggle_symptom(&mut self, symptom: &str) -> bool {
        if let Some(position) = self.symptoms.iter().position(|s| s == symptom) {
            self.symptoms.remove(position);
            false
        } else {
            self.symptoms.push(symptom.to_string());
            true
        }
    }

    /// Replace the ticked symptoms wholesale
    pub fn set_symptoms<I, S>(&mut self, symptoms: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.symptoms.clear();
        for symptom in symptoms {
            self.select_symptom(symptom);
        }
    }

    /// Drop the category and all ticked symptoms
    pub fn reset(&mut self) {
        self.category = None;
        self.symptoms.clear();
    }
}
