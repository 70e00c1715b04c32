//! Terminal presenter
//!
//! Category dropdown, symptom checkboxes and the continue dialog become
//! `inquire` prompts; message boxes are printed to stdout.

use inquire::{Confirm, MultiSelect, Select};

use crate::algorithm::categories::Category;
use crate::error::Result;
use crate::presenter::Presenter;
use crate::presenter::format::Message;

/// Rows of the symptom checklist visible at once
const SYMPTOM_PAGE_SIZE: usize = 15;

/// Presenter backed by interactive terminal prompts
#[derive(Debug, Default)]
pub struct ConsolePresenter;

impl ConsolePresenter {
    /// Create a terminal presenter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Presenter for ConsolePresenter {
    fn show_introduction(&mut self, text: &str) -> Result<bool> {
        println!("{text}\n");
        let start = Confirm::new("Start?").with_default(true).prompt()?;
        Ok(start)
    }

    fn choose_category(&mut self, categories: &[Category]) -> Result<Option<Category>> {
        let category = Select::new("Select Disease Category", categories.to_vec())
            .with_help_message("Esc to skip")
            .prompt_skippable()?;
        Ok(category)
    }

    fn choose_symptoms(
        &mut self,
        category: Category,
        symptoms: &[String],
        preselected: &[String],
    ) -> Result<Vec<String>> {
        let defaults: Vec<usize> = symptoms
            .iter()
            .enumerate()
            .filter(|(_, symptom)| preselected.contains(*symptom))
            .map(|(position, _)| position)
            .collect();

        let chosen = MultiSelect::new(
            &format!("Select Symptoms ({category})"),
            symptoms.to_vec(),
        )
        .with_default(&defaults)
        .with_page_size(SYMPTOM_PAGE_SIZE)
        .with_help_message("Space to tick, type to filter, Enter to diagnose")
        .prompt()?;
        Ok(chosen)
    }

    fn warn(&mut self, message: &str) -> Result<()> {
        println!("\nWarning: {message}\n");
        Ok(())
    }

    fn inform(&mut self, message: &Message) -> Result<()> {
        println!("\n== {} ==\n{}\n", message.title, message.body.trim_end());
        Ok(())
    }

    fn confirm_restart(&mut self, question: &str) -> Result<bool> {
        let restart = Confirm::new(question).with_default(true).prompt()?;
        Ok(restart)
    }
}
