//! Tests for the interactive selection flow, driven by a scripted presenter

use std::collections::VecDeque;

use symptom_dx::presenter::Message;
use symptom_dx::presenter::format::{MULTIPLE_MATCHES_TITLE, NO_DATA_TITLE, RESULTS_TITLE};
use symptom_dx::{
    Category, DiagnosisError, KnowledgeBase, Presenter, Result, SelectionState, Session,
    SessionState,
};

use crate::utils::{config_for, dataset_dir};

/// Presenter replaying canned answers and recording everything shown
///
/// Running out of category answers behaves like the user pressing Ctrl-C.
#[derive(Debug, Default)]
struct ScriptedPresenter {
    start: bool,
    categories: VecDeque<Option<Category>>,
    symptoms: VecDeque<Vec<&'static str>>,
    restarts: VecDeque<bool>,
    warnings: Vec<String>,
    messages: Vec<Message>,
    preselected: Vec<Vec<String>>,
}

impl ScriptedPresenter {
    fn starting() -> Self {
        Self {
            start: true,
            ..Default::default()
        }
    }
}

impl Presenter for ScriptedPresenter {
    fn show_introduction(&mut self, _text: &str) -> Result<bool> {
        Ok(self.start)
    }

    fn choose_category(&mut self, categories: &[Category]) -> Result<Option<Category>> {
        let choice = self
            .categories
            .pop_front()
            .ok_or(inquire::InquireError::OperationInterrupted)?;
        if let Some(category) = choice {
            assert!(categories.contains(&category), "{category} was not offered");
        }
        Ok(choice)
    }

    fn choose_symptoms(
        &mut self,
        _category: Category,
        symptoms: &[String],
        preselected: &[String],
    ) -> Result<Vec<String>> {
        self.preselected.push(preselected.to_vec());
        let chosen = self
            .symptoms
            .pop_front()
            .ok_or(inquire::InquireError::OperationInterrupted)?;
        for symptom in &chosen {
            assert!(symptoms.iter().any(|s| s == symptom), "{symptom} was not offered");
        }
        Ok(chosen.into_iter().map(str::to_string).collect())
    }

    fn warn(&mut self, message: &str) -> Result<()> {
        self.warnings.push(message.to_string());
        Ok(())
    }

    fn inform(&mut self, message: &Message) -> Result<()> {
        self.messages.push(message.clone());
        Ok(())
    }

    fn confirm_restart(&mut self, _question: &str) -> Result<bool> {
        Ok(self.restarts.pop_front().unwrap_or(false))
    }
}

fn knowledge_base() -> KnowledgeBase {
    let dir = dataset_dir();
    KnowledgeBase::load(&config_for(dir.path()))
}

#[test]
fn test_declining_introduction_terminates() {
    let knowledge_base = knowledge_base();
    let mut presenter = ScriptedPresenter::default();

    let mut session = Session::new(&knowledge_base);
    session.run(&mut presenter).unwrap();

    assert!(session.is_terminated());
    assert!(presenter.messages.is_empty());
}

#[test]
fn test_starting_opens_category_selection() {
    let knowledge_base = knowledge_base();
    let mut presenter = ScriptedPresenter::starting();

    let mut session = Session::new(&knowledge_base);
    session.step(&mut presenter).unwrap();

    assert_eq!(
        session.state(),
        &SessionState::AwaitingCategory(SelectionState::new())
    );
}

#[test]
fn test_single_match_then_stop() {
    let knowledge_base = knowledge_base();
    let mut presenter = ScriptedPresenter::starting();
    presenter.categories.push_back(Some(Category::Skin));
    presenter.symptoms.push_back(vec!["skin_rash", "blackheads"]);
    presenter.restarts.push_back(false);

    let mut session = Session::new(&knowledge_base);
    session.run(&mut presenter).unwrap();

    assert!(session.is_terminated());
    assert_eq!(presenter.messages.len(), 1);
    let message = &presenter.messages[0];
    assert_eq!(message.title, RESULTS_TITLE);
    assert_eq!(
        message.body,
        "Predicted Disease:\nAcne\n\
         Description:\n- Acne occurs when hair follicles become plugged.\n\
         No precautions found for this disease.\n"
    );
}

#[test]
fn test_restart_after_single_match_starts_fresh() {
    let knowledge_base = knowledge_base();
    let mut presenter = ScriptedPresenter::starting();
    presenter.categories.push_back(Some(Category::Skin));
    presenter.categories.push_back(Some(Category::Respiratory));
    presenter.symptoms.push_back(vec!["skin_rash", "blackheads"]);
    presenter
        .symptoms
        .push_back(vec!["chills", "high_fever", "breathlessness"]);
    presenter.restarts.push_back(true);
    presenter.restarts.push_back(false);

    let mut session = Session::new(&knowledge_base);
    // Introduction, category, symptoms, prediction
    for _ in 0..4 {
        session.step(&mut presenter).unwrap();
    }
    assert!(matches!(session.state(), SessionState::Predicted { .. }));

    session.step(&mut presenter).unwrap();
    assert_eq!(
        session.state(),
        &SessionState::AwaitingCategory(SelectionState::new())
    );
    assert_eq!(presenter.restarts.front(), Some(&false));

    session.run(&mut presenter).unwrap();

    assert!(session.is_terminated());
    assert!(presenter.categories.is_empty());
    assert_eq!(presenter.messages.len(), 2);
    assert!(
        presenter.messages[0]
            .body
            .starts_with("Predicted Disease:\nAcne\n")
    );
    assert!(
        presenter.messages[1]
            .body
            .starts_with("Predicted Disease:\nPneumonia\n")
    );
    // Nothing from the first round is carried into the second checklist
    assert!(presenter.preselected[1].is_empty());
}

#[test]
fn test_ambiguous_match_asks_for_more_symptoms() {
    let knowledge_base = knowledge_base();
    let mut presenter = ScriptedPresenter::starting();
    presenter.categories.push_back(Some(Category::Respiratory));
    presenter.symptoms.push_back(vec!["cough", "chills"]);
    presenter
        .symptoms
        .push_back(vec!["chills", "high_fever", "breathlessness"]);
    presenter.restarts.push_back(false);

    let mut session = Session::new(&knowledge_base);
    session.run(&mut presenter).unwrap();

    assert!(session.is_terminated());
    assert_eq!(presenter.messages.len(), 2);

    assert_eq!(presenter.messages[0].title, MULTIPLE_MATCHES_TITLE);
    assert!(
        presenter.messages[0]
            .body
            .contains("Common Cold\nPneumonia\n")
    );
    assert!(!presenter.messages[0].body.contains("Description:"));

    // The second checklist starts from the previous ticks
    assert_eq!(presenter.preselected[1], ["cough", "chills"]);

    assert_eq!(presenter.messages[1].title, RESULTS_TITLE);
    assert!(
        presenter.messages[1]
            .body
            .starts_with("Predicted Disease:\nPneumonia\n")
    );
    assert!(presenter.messages[1].body.contains("- consult doctor\n"));
}

#[test]
fn test_incomplete_selection_warns_and_retries() {
    let knowledge_base = knowledge_base();
    let mut presenter = ScriptedPresenter::starting();
    presenter.categories.push_back(None);
    presenter.categories.push_back(Some(Category::Skin));
    presenter.symptoms.push_back(vec![]);
    presenter.symptoms.push_back(vec!["skin_rash"]);

    let mut session = Session::new(&knowledge_base);
    session.run(&mut presenter).unwrap();

    assert_eq!(
        presenter.warnings,
        [
            DiagnosisError::NoCategorySelected.to_string(),
            DiagnosisError::NoSymptomsSelected.to_string()
        ]
    );
    assert_eq!(presenter.messages.len(), 1);
    assert_eq!(
        presenter.messages[0].body,
        "No diseases found matching the minimum 2 symptoms in this category."
    );
}

#[test]
fn test_no_data_terminates_after_notice() {
    let dir = tempfile::tempdir().unwrap();
    let knowledge_base = KnowledgeBase::load(&config_for(dir.path()));
    let mut presenter = ScriptedPresenter::starting();

    let mut session = Session::new(&knowledge_base);
    session.run(&mut presenter).unwrap();

    assert!(session.is_terminated());
    assert_eq!(presenter.messages.len(), 1);
    assert_eq!(presenter.messages[0].title, NO_DATA_TITLE);
}
