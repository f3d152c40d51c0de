//! State for the analysis form.

use crate::api::{AnalysisResult, CvFile, CONNECTIVITY_MESSAGE};
use crate::ui::mvi::UiState;
use uuid::Uuid;

pub const SUBMIT_LABEL: &str = "Analyze Now";
pub const SUBMIT_BUSY_LABEL: &str = "Analyzing...";

/// Control that currently receives keystrokes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    JobDescription,
    FilePath,
    Submit,
}

impl FormField {
    pub fn next(self) -> Self {
        match self {
            Self::JobDescription => Self::FilePath,
            Self::FilePath => Self::Submit,
            Self::Submit => Self::JobDescription,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Self::JobDescription => Self::Submit,
            Self::FilePath => Self::JobDescription,
            Self::Submit => Self::FilePath,
        }
    }
}

/// Blocking message shown over the form until dismissed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Alert {
    /// Submit pressed without a CV.
    NoFileSelected,
    /// The service rejected the upload; its message, or the fallback.
    Server(String),
    /// No usable response arrived.
    Connectivity,
    /// The typed path could not be read.
    FileUnreadable { path: String, reason: String },
    /// The file extension is not in the allowed list.
    UnsupportedFile { name: String, allowed: Vec<String> },
}

impl Alert {
    pub fn message(&self) -> String {
        match self {
            Alert::NoFileSelected => "Please select a CV file first!".to_string(),
            Alert::Server(message) => message.clone(),
            Alert::Connectivity => CONNECTIVITY_MESSAGE.to_string(),
            Alert::FileUnreadable { path, reason } => {
                format!("Could not read '{}': {}", path, reason)
            }
            Alert::UnsupportedFile { name, allowed } => format!(
                "'{}' is not a supported file (allowed: {})",
                name,
                allowed.join(", ")
            ),
        }
    }
}

/// Inputs captured at the moment a submission starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmittedInputs {
    pub file_name: String,
    pub job_description: String,
}

/// An upload that has been started and not yet settled.
#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    pub id: Uuid,
    pub file: CvFile,
    pub inputs: SubmittedInputs,
}

/// A settled, successful analysis paired with what produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisOutcome {
    pub result: AnalysisResult,
    pub inputs: SubmittedInputs,
}

impl AnalysisOutcome {
    /// Score as shown in the result panel, without the percent sign.
    pub fn score_text(&self) -> String {
        format_score(self.result.score)
    }
}

/// The score exactly as the service sent it; whole numbers carry no
/// trailing ".0".
pub fn format_score(score: f64) -> String {
    format!("{}", score)
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct FormState {
    pub(crate) status_message: String,
    pub(crate) probe_started: bool,
    pub(crate) selected_file: Option<CvFile>,
    pub(crate) job_description: String,
    pub(crate) path_input: String,
    pub(crate) analysis: Option<AnalysisOutcome>,
    pub(crate) in_flight: Option<Submission>,
    pub(crate) focus: FormField,
    pub(crate) alert: Option<Alert>,
}

impl UiState for FormState {}

impl FormState {
    /// Connection status reported by the probe; empty until it succeeds.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    pub fn probe_started(&self) -> bool {
        self.probe_started
    }

    pub fn selected_file(&self) -> Option<&CvFile> {
        self.selected_file.as_ref()
    }

    pub fn job_description(&self) -> &str {
        &self.job_description
    }

    pub fn path_input(&self) -> &str {
        &self.path_input
    }

    pub fn analysis(&self) -> Option<&AnalysisOutcome> {
        self.analysis.as_ref()
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn in_flight(&self) -> Option<&Submission> {
        self.in_flight.as_ref()
    }

    pub fn focus(&self) -> FormField {
        self.focus
    }

    pub fn alert(&self) -> Option<&Alert> {
        self.alert.as_ref()
    }

    pub fn submit_enabled(&self) -> bool {
        !self.is_in_flight()
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_in_flight() {
            SUBMIT_BUSY_LABEL
        } else {
            SUBMIT_LABEL
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_empty_and_idle() {
        let state = FormState::default();
        assert_eq!(state.status_message(), "");
        assert!(state.selected_file().is_none());
        assert_eq!(state.job_description(), "");
        assert!(state.analysis().is_none());
        assert!(!state.is_in_flight());
        assert!(!state.probe_started());
        assert_eq!(state.focus(), FormField::JobDescription);
    }

    #[test]
    fn submit_label_tracks_in_flight() {
        let mut state = FormState::default();
        assert_eq!(state.submit_label(), SUBMIT_LABEL);
        assert!(state.submit_enabled());

        state.in_flight = Some(Submission {
            id: Uuid::nil(),
            file: CvFile::new("cv.pdf", vec![1u8]),
            inputs: SubmittedInputs {
                file_name: "cv.pdf".into(),
                job_description: String::new(),
            },
        });
        assert_eq!(state.submit_label(), SUBMIT_BUSY_LABEL);
        assert!(!state.submit_enabled());
    }

    #[test]
    fn focus_cycles_both_ways() {
        let field = FormField::JobDescription;
        assert_eq!(field.next().next().next(), field);
        assert_eq!(field.prev(), FormField::Submit);
        assert_eq!(field.next().prev(), field);
    }

    #[test]
    fn score_formatting() {
        assert_eq!(format_score(87.0), "87");
        assert_eq!(format_score(72.46), "72.46");
        assert_eq!(format_score(87.25), "87.25");
        assert_eq!(format_score(99.99), "99.99");
        assert_eq!(format_score(0.04), "0.04");
        assert_eq!(format_score(0.0), "0");
    }

    #[test]
    fn alert_messages() {
        assert_eq!(
            Alert::NoFileSelected.message(),
            "Please select a CV file first!"
        );
        assert_eq!(Alert::Server("File too large".into()).message(), "File too large");
        assert_eq!(Alert::Connectivity.message(), CONNECTIVITY_MESSAGE);
        assert_eq!(
            Alert::UnsupportedFile {
                name: "cv.txt".into(),
                allowed: vec!["pdf".into(), "docx".into()],
            }
            .message(),
            "'cv.txt' is not a supported file (allowed: pdf, docx)"
        );
    }
}
