//! Prediction from a user selection
//!
//! Turns the current selection into one of three outcomes which the
//! presenter renders: nothing matched, several candidates remain, or a single
//! disease was identified.

use crate::algorithm::matcher::{MatchCandidate, rank_diseases};
use crate::error::{DiagnosisError, Result};
use crate::knowledge_base::KnowledgeBase;
use crate::models::selection::SelectionState;

/// A single identified disease with its reference text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosisReport {
    /// Disease name
    pub disease: String,
    /// Number of selected symptoms the disease shows
    pub match_count: usize,
    /// Description lines, `None` when the disease has no description entry
    pub description: Option<Vec<String>>,
    /// Precaution lines, `None` when the disease has no precaution entry
    pub precautions: Option<Vec<String>>,
}

/// Outcome of a prediction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Prediction {
    /// No disease reached the match threshold
    NoMatch,
    /// Several diseases reached it; more symptoms are needed
    Ambiguous(Vec<MatchCandidate>),
    /// Exactly one disease reached it
    Found(DiagnosisReport),
}

impl Prediction {
    /// Names of the matched diseases, best first
    #[must_use]
    pub fn disease_names(&self) -> Vec<&str> {
        match self {
            Self::NoMatch => Vec::new(),
            Self::Ambiguous(candidates) => candidates.iter().map(|c| c.disease.as_str()).collect(),
            Self::Found(report) => vec![report.disease.as_str()],
        }
    }
}

/// Predict a disease for the current selection
///
/// Fails with [`DiagnosisError::NoCategorySelected`] or
/// [`DiagnosisError::NoSymptomsSelected`] when the selection is incomplete.
pub fn predict(knowledge_base: &KnowledgeBase, selection: &SelectionState) -> Result<Prediction> {
    let category = selection
        .category()
        .ok_or(DiagnosisError::NoCategorySelected)?;
    if selection.symptoms().is_empty() {
        return Err(DiagnosisError::NoSymptomsSelected);
    }

    let mut ranked = rank_diseases(knowledge_base.diseases_in(category), selection.symptoms());
    log::info!(
        "{} candidate diseases in '{}' for {} selected symptoms",
        ranked.len(),
        category,
        selection.symptoms().len()
    );

    let prediction = match ranked.len() {
        0 => Prediction::NoMatch,
        1 => {
            let best = ranked.remove(0);
            Prediction::Found(DiagnosisReport {
                description: knowledge_base.description(&best.disease).map(<[String]>::to_vec),
                precautions: knowledge_base.precautions(&best.disease).map(<[String]>::to_vec),
                disease: best.disease,
                match_count: best.match_count,
            })
        }
        _ => Prediction::Ambiguous(ranked),
    };

    Ok(prediction)
}
