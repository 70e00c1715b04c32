//! Interactive selection flow
//!
//! A [`Session`] owns the current [`SessionState`] and advances it one user
//! interaction at a time through a [`Presenter`].

use crate::algorithm::prediction::{Prediction, predict};
use crate::error::{DiagnosisError, Result};
use crate::knowledge_base::KnowledgeBase;
use crate::models::selection::SelectionState;
use crate::presenter::Presenter;
use crate::presenter::format::{
    INTRODUCTION, RESTART_QUESTION, no_data_message, render_prediction,
};

/// Where the user is in the selection flow
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    /// Welcome text not yet acknowledged
    Introduction,
    /// Main interface: waiting for a category choice
    AwaitingCategory(SelectionState),
    /// Category chosen, waiting for the symptom checklist
    CategorySelected(SelectionState),
    /// Symptoms chosen, ready to predict
    SymptomsSelected(SelectionState),
    /// A prediction is ready to be shown
    Predicted {
        /// Selection the prediction was made for
        selection: SelectionState,
        /// The outcome
        prediction: Prediction,
    },
    /// The user chose to stop
    Terminated,
}

/// One run of the selection flow against a knowledge base
#[derive(Debug)]
pub struct Session<'a> {
    knowledge_base: &'a KnowledgeBase,
    state: SessionState,
}

impl<'a> Session<'a> {
    /// Start a session at the introduction
    #[must_use]
    pub const fn new(knowledge_base: &'a KnowledgeBase) -> Self {
        Self {
            knowledge_base,
            state: SessionState::Introduction,
        }
    }

    /// Current state
    #[must_use]
    pub const fn state(&self) -> &SessionState {
        &self.state
    }

    /// Whether the session has ended
    #[must_use]
    pub const fn is_terminated(&self) -> bool {
        matches!(self.state, SessionState::Terminated)
    }

    /// Run until the user stops
    ///
    /// A cancelled or interrupted prompt ends the session without an error.
    pub fn run<P: Presenter>(&mut self, presenter: &mut P) -> Result<()> {
        while !self.is_terminated() {
            match self.step(presenter) {
                Ok(()) => {}
                Err(e) if e.is_interrupted() => {
                    log::info!("Session interrupted by user");
                    self.state = SessionState::Terminated;
                }
                Err(e) => return Err(e),
            }
        }
        Ok(())
    }

    /// Perform a single interaction and move to the next state
    pub fn step<P: Presenter>(&mut self, presenter: &mut P) -> Result<()> {
        let state = std::mem::replace(&mut self.state, SessionState::Terminated);

        self.state = match state {
            SessionState::Introduction => {
                if presenter.show_introduction(INTRODUCTION)? {
                    SessionState::AwaitingCategory(SelectionState::new())
                } else {
                    SessionState::Terminated
                }
            }
            SessionState::AwaitingCategory(selection) => {
                self.choose_category(presenter, selection)?
            }
            SessionState::CategorySelected(mut selection) => {
                // Always set when entering this state
                let Some(category) = selection.category() else {
                    let warning = DiagnosisError::NoCategorySelected;
                    return self.retry_selection(presenter, selection, &warning);
                };
                let symptoms = self.knowledge_base.symptoms_in(category);
                if symptoms.is_empty() {
                    presenter.warn(&format!("No symptoms are listed for {category}."))?;
                    self.state = SessionState::AwaitingCategory(selection);
                    return Ok(());
                }
                let chosen = presenter.choose_symptoms(category, &symptoms, selection.symptoms())?;
                selection.set_symptoms(chosen);
                SessionState::SymptomsSelected(selection)
            }
            SessionState::SymptomsSelected(selection) => {
                match predict(self.knowledge_base, &selection) {
                    Ok(prediction) => SessionState::Predicted {
                        selection,
                        prediction,
                    },
                    Err(e) if e.is_user_warning() => {
                        return self.retry_selection(presenter, selection, &e);
                    }
                    Err(e) => return Err(e),
                }
            }
            SessionState::Predicted {
                selection,
                prediction,
            } => {
                presenter.inform(&render_prediction(&prediction))?;
                match prediction {
                    // Keep the category and ticks so the user can adjust them
                    Prediction::NoMatch => SessionState::AwaitingCategory(selection),
                    Prediction::Ambiguous(_) => SessionState::CategorySelected(selection),
                    Prediction::Found(_) => {
                        if presenter.confirm_restart(RESTART_QUESTION)? {
                            SessionState::AwaitingCategory(SelectionState::new())
                        } else {
                            SessionState::Terminated
                        }
                    }
                }
            }
            SessionState::Terminated => SessionState::Terminated,
        };

        log::debug!("Session state: {:?}", self.state);
        Ok(())
    }

    fn choose_category<P: Presenter>(
        &self,
        presenter: &mut P,
        mut selection: SelectionState,
    ) -> Result<SessionState> {
        let categories = self.knowledge_base.categories();
        if categories.is_empty() {
            presenter.inform(&no_data_message())?;
            return Ok(SessionState::Terminated);
        }

        match presenter.choose_category(&categories)? {
            Some(category) => {
                selection.select_category(category);
                Ok(SessionState::CategorySelected(selection))
            }
            None => {
                presenter.warn(&DiagnosisError::NoCategorySelected.to_string())?;
                Ok(SessionState::AwaitingCategory(selection))
            }
        }
    }

    /// Warn about an incomplete selection and return to the step that fixes it
    fn retry_selection<P: Presenter>(
        &mut self,
        presenter: &mut P,
        selection: SelectionState,
        warning: &DiagnosisError,
    ) -> Result<()> {
        presenter.warn(&warning.to_string())?;
        self.state = match warning {
            DiagnosisError::NoSymptomsSelected => SessionState::CategorySelected(selection),
            _ => SessionState::AwaitingCategory(selection),
        };
        Ok(())
    }
}
