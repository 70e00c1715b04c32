//! Message text for predictions and prompts

use crate::algorithm::matcher::MIN_MATCH_COUNT;
use crate::algorithm::prediction::{DiagnosisReport, Prediction};

/// Text shown before the first category prompt
pub const INTRODUCTION: &str = "Welcome to Medical Diagnosis Agent!\n\n\
    This application helps predict possible diseases based on symptoms you select.\n\
    Please choose a disease category and select symptoms to begin prediction.";

/// Question asked after a single disease has been shown
pub const RESTART_QUESTION: &str = "Do you want to go back to the main interface?";

/// Title for the single-match and no-match messages
pub const RESULTS_TITLE: &str = "Disease Prediction Results";

/// Title for the several-matches message
pub const MULTIPLE_MATCHES_TITLE: &str = "Multiple Matches";

/// Title for the notice shown when no disease data was loaded
pub const NO_DATA_TITLE: &str = "No Data";

/// Shown instead of the category prompt when no data was loaded
pub const NO_DATA_MESSAGE: &str =
    "No disease data is available. Check that the symptom table is present and readable.";

/// A titled message ready for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    /// Dialog or section title
    pub title: &'static str,
    /// Body text, newline separated
    pub body: String,
}

/// Notice for an empty knowledge base
#[must_use]
pub fn no_data_message() -> Message {
    Message {
        title: NO_DATA_TITLE,
        body: NO_DATA_MESSAGE.to_string(),
    }
}

/// Render a prediction as a titled message
#[must_use]
pub fn render_prediction(prediction: &Prediction) -> Message {
    match prediction {
        Prediction::NoMatch => Message {
            title: RESULTS_TITLE,
            body: format!(
                "No diseases found matching the minimum {MIN_MATCH_COUNT} symptoms in this category."
            ),
        },
        Prediction::Ambiguous(candidates) => {
            let mut body = String::from("Multiple diseases match the selected symptoms:\n");
            for candidate in candidates {
                body.push_str(&candidate.disease);
                body.push('\n');
            }
            body.push_str("\nPlease select more symptoms to narrow down the diagnosis.");
            Message {
                title: MULTIPLE_MATCHES_TITLE,
                body,
            }
        }
        Prediction::Found(report) => Message {
            title: RESULTS_TITLE,
            body: render_report(report),
        },
    }
}

/// Render a single diagnosis with description and precautions
///
/// Missing entries are stated explicitly rather than left out.
#[must_use]
pub fn render_report(report: &DiagnosisReport) -> String {
    let mut body = format!("Predicted Disease:\n{}\n", report.disease);

    match &report.description {
        Some(lines) => {
            body.push_str("Description:\n");
            push_bullets(&mut body, lines);
        }
        None => body.push_str("No description found for this disease.\n"),
    }

    match &report.precautions {
        Some(lines) => {
            body.push_str("Precautions:\n");
            push_bullets(&mut body, lines);
        }
        None => body.push_str("No precautions found for this disease.\n"),
    }

    body
}

fn push_bullets(body: &mut String, lines: &[String]) {
    for line in lines {
        body.push_str(&format!("- {line}\n"));
    }
}
