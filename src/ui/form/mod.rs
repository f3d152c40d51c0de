//! Analysis form feature module.
//!
//! Holds the form's five pieces of state (status message, selected file,
//! job description, analysis result, in-flight submission) plus focus and
//! the modal alert.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Form state and the values derived from it for rendering
//! - `intent.rs` - User edits, submit, and async completions
//! - `reducer.rs` - State transitions (pure, no side effects)
//!
//! Network calls are launched by `ui::app::App` after it observes a new
//! in-flight submission; their outcomes come back as intents.

mod intent;
mod reducer;
mod state;

pub use intent::FormIntent;
pub use reducer::FormReducer;
pub use state::{
    format_score, Alert, AnalysisOutcome, FormField, FormState, Submission, SubmittedInputs,
    SUBMIT_BUSY_LABEL, SUBMIT_LABEL,
};
