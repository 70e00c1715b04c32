//! Symptom matching
//!
//! Scores the diseases of one category against the user's selected symptoms
//! and ranks those that reach the match threshold.

use itertools::Itertools;
use rustc_hash::FxHashSet;

use crate::algorithm::categories::DiseaseSymptoms;

/// Minimum number of selected symptoms a disease must show to be reported
pub const MIN_MATCH_COUNT: usize = 2;

/// A disease that reached the threshold, with its score
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchCandidate {
    /// Disease name
    pub disease: String,
    /// Number of selected symptoms present in the disease's symptom list
    pub match_count: usize,
}

/// Count how many distinct selected symptoms appear in a symptom list
///
/// Membership only: a symptom listed twice for the disease, or selected
/// twice, still counts once.
#[must_use]
pub fn match_count<S: AsRef<str>>(disease_symptoms: &[String], selected: &[S]) -> usize {
    let present: FxHashSet<&str> = disease_symptoms.iter().map(String::as_str).collect();
    selected
        .iter()
        .map(AsRef::as_ref)
        .unique()
        .filter(|symptom| present.contains(symptom))
        .count()
}

/// Rank the diseases of a category against the selected symptoms
///
/// Keeps diseases with at least [`MIN_MATCH_COUNT`] matches, ordered by count
/// descending. Equal counts keep the order of `diseases`.
#[must_use]
pub fn rank_diseases<S: AsRef<str>>(
    diseases: &[DiseaseSymptoms],
    selected: &[S],
) -> Vec<MatchCandidate> {
    if selected.is_empty() {
        return Vec::new();
    }

    let ranked = diseases
        .iter()
        .map(|entry| MatchCandidate {
            disease: entry.disease.clone(),
            match_count: match_count(&entry.symptoms, selected),
        })
        .filter(|candidate| candidate.match_count >= MIN_MATCH_COUNT)
        // itertools sorts via the stable slice sort
        .sorted_by(|a, b| b.match_count.cmp(&a.match_count))
        .collect_vec();

    log::debug!(
        "{} of {} diseases matched {} selected symptoms",
        ranked.len(),
        diseases.len(),
        selected.len()
    );

    ranked
}
