//! Tests for ranking diseases against selected symptoms

use pretty_assertions::assert_eq;
use symptom_dx::algorithm::categories::DiseaseSymptoms;
use symptom_dx::algorithm::matcher::match_count;
use symptom_dx::{Category, KnowledgeBase, MatchCandidate, rank_diseases};

use crate::utils::{config_for, dataset_dir};

fn candidate(disease: &str, match_count: usize) -> MatchCandidate {
    MatchCandidate {
        disease: disease.to_string(),
        match_count,
    }
}

#[test]
fn test_rank_respiratory_diseases() {
    let dir = dataset_dir();
    let knowledge_base = KnowledgeBase::load(&config_for(dir.path()));

    let ranked = rank_diseases(
        knowledge_base.diseases_in(Category::Respiratory),
        &["cough", "chills", "breathlessness", "high_fever"],
    );

    assert_eq!(
        ranked,
        vec![
            candidate("Pneumonia", 4),
            candidate("Common Cold", 2),
            candidate("Bronchial Asthma", 2),
        ]
    );
}

#[test]
fn test_repeated_symptoms_count_once() {
    let dir = dataset_dir();
    let knowledge_base = KnowledgeBase::load(&config_for(dir.path()));

    // "itching" appears in two Fungal Infection rows
    let fungal = &knowledge_base.diseases_in(Category::Infectious)[0];
    assert_eq!(fungal.disease, "Fungal Infection");
    assert_eq!(match_count(&fungal.symptoms, &["itching"]), 1);
}

#[test]
fn test_threshold_is_two() {
    let diseases = [DiseaseSymptoms {
        disease: "Migraine".to_string(),
        symptoms: vec!["headache".to_string(), "nausea".to_string()],
    }];

    assert!(rank_diseases(&diseases, &["headache"]).is_empty());
    assert_eq!(
        rank_diseases(&diseases, &["headache", "nausea"]),
        vec![candidate("Migraine", 2)]
    );
}

#[test]
fn test_matching_is_case_sensitive() {
    let diseases = [DiseaseSymptoms {
        disease: "Migraine".to_string(),
        symptoms: vec!["headache".to_string(), "nausea".to_string()],
    }];
    assert!(rank_diseases(&diseases, &["Headache", "Nausea"]).is_empty());
}
