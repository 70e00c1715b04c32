//! Presentation layer
//!
//! The [`Presenter`] trait is the boundary to whatever displays prompts and
//! messages. [`Session`] drives the selection flow on top of it:
//!
//! Introduction → category chosen → symptoms chosen → predicted, then either
//! back to an earlier step or terminated.

pub mod console;
pub mod format;
pub mod session;

pub use console::ConsolePresenter;
pub use format::{Message, render_prediction, render_report};
pub use session::{Session, SessionState};

use crate::algorithm::categories::Category;
use crate::error::Result;

/// Display and input operations a session needs
pub trait Presenter {
    /// Show the introduction; `false` means the user does not want to start
    fn show_introduction(&mut self, text: &str) -> Result<bool>;

    /// Ask for a category; `None` when the user skipped the choice
    fn choose_category(&mut self, categories: &[Category]) -> Result<Option<Category>>;

    /// Ask which symptoms apply, with `preselected` ticked initially
    fn choose_symptoms(
        &mut self,
        category: Category,
        symptoms: &[String],
        preselected: &[String],
    ) -> Result<Vec<String>>;

    /// Show a warning the user can act on
    fn warn(&mut self, message: &str) -> Result<()>;

    /// Show an informational message
    fn inform(&mut self, message: &Message) -> Result<()>;

    /// Ask whether to go back to category selection after a result
    fn confirm_restart(&mut self, question: &str) -> Result<bool>;
}
