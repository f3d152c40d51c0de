//! Reducer for the analysis form.

use crate::api::SERVER_ERROR_FALLBACK;
use crate::ui::mvi::Reducer;

use super::intent::FormIntent;
use super::state::{Alert, AnalysisOutcome, FormState, Submission, SubmittedInputs};

pub struct FormReducer;

impl Reducer for FormReducer {
    type State = FormState;
    type Intent = FormIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        // An open alert is modal: only dismissal and async completions get through.
        if state.alert.is_some() && blocked_by_alert(&intent) {
            return state;
        }

        match intent {
            FormIntent::ProbeStarted => {
                state.probe_started = true;
            }
            FormIntent::ProbeSucceeded { message } => {
                state.status_message = message;
            }
            FormIntent::FocusNext => {
                state.focus = state.focus.next();
            }
            FormIntent::FocusPrev => {
                state.focus = state.focus.prev();
            }
            FormIntent::DescriptionInput(text) => {
                state.job_description.push_str(&text);
            }
            FormIntent::DescriptionBackspace => {
                state.job_description.pop();
            }
            FormIntent::PathInput(text) => {
                // Paths are single-line; pasted newlines would never resolve.
                state
                    .path_input
                    .extend(text.chars().filter(|c| *c != '\n' && *c != '\r'));
            }
            FormIntent::PathBackspace => {
                state.path_input.pop();
            }
            FormIntent::FileChosen { file } => {
                state.selected_file = Some(file);
            }
            FormIntent::FileUnreadable { path, reason } => {
                state.alert = Some(Alert::FileUnreadable { path, reason });
            }
            FormIntent::FileUnsupported { name, allowed } => {
                state.alert = Some(Alert::UnsupportedFile { name, allowed });
            }
            FormIntent::Submit { id } => {
                if state.in_flight.is_some() {
                    return state;
                }
                let Some(file) = state.selected_file.clone() else {
                    state.alert = Some(Alert::NoFileSelected);
                    return state;
                };
                state.analysis = None;
                state.in_flight = Some(Submission {
                    id,
                    inputs: SubmittedInputs {
                        file_name: file.name().to_string(),
                        job_description: state.job_description.clone(),
                    },
                    file,
                });
            }
            FormIntent::UploadSucceeded { id, result } => {
                if let Some(submission) = take_matching(&mut state, id) {
                    state.analysis = Some(AnalysisOutcome {
                        result,
                        inputs: submission.inputs,
                    });
                }
            }
            FormIntent::UploadRejected { id, message } => {
                if take_matching(&mut state, id).is_some() {
                    let message = message.unwrap_or_else(|| SERVER_ERROR_FALLBACK.to_string());
                    state.alert = Some(Alert::Server(message));
                }
            }
            FormIntent::UploadUnreachable { id } => {
                if take_matching(&mut state, id).is_some() {
                    state.alert = Some(Alert::Connectivity);
                }
            }
            FormIntent::DismissAlert => {
                state.alert = None;
            }
        }
        state
    }
}

/// Clears the in-flight submission if `id` is the one outstanding.
/// Completions for anything else are stale and leave state alone.
fn take_matching(state: &mut FormState, id: uuid::Uuid) -> Option<Submission> {
    if state.in_flight.as_ref().map(|s| s.id) != Some(id) {
        return None;
    }
    state.in_flight.take()
}

fn blocked_by_alert(intent: &FormIntent) -> bool {
    !matches!(
        intent,
        FormIntent::DismissAlert
            | FormIntent::ProbeStarted
            | FormIntent::ProbeSucceeded { .. }
            | FormIntent::UploadSucceeded { .. }
            | FormIntent::UploadRejected { .. }
            | FormIntent::UploadUnreachable { .. }
    )
}
