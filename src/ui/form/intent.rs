//! Intents for the analysis form.

use crate::api::{AnalysisResult, CvFile};
use crate::ui::mvi::Intent;
use uuid::Uuid;

#[derive(Debug, Clone)]
pub enum FormIntent {
    /// The status probe has been launched. Only the first one counts.
    ProbeStarted,

    /// Probe answered with a status message.
    ProbeSucceeded { message: String },

    FocusNext,
    FocusPrev,

    /// Text typed or pasted into the job description.
    DescriptionInput(String),
    DescriptionBackspace,

    /// Text typed or pasted into the file path input.
    PathInput(String),
    PathBackspace,

    /// A file was read from disk and accepted.
    FileChosen { file: CvFile },

    /// The typed path could not be read.
    FileUnreadable { path: String, reason: String },

    /// The file's extension is not accepted.
    FileUnsupported { name: String, allowed: Vec<String> },

    /// User pressed submit. The id tags the upload if one starts.
    Submit { id: Uuid },

    /// Upload settled with a success status.
    UploadSucceeded { id: Uuid, result: AnalysisResult },

    /// Upload settled with a failure status. `None` when the service sent
    /// no usable message.
    UploadRejected { id: Uuid, message: Option<String> },

    /// Upload never produced a usable response.
    UploadUnreachable { id: Uuid },

    /// User acknowledged the alert.
    DismissAlert,
}

impl Intent for FormIntent {}
