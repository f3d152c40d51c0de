use std::path::{Path, PathBuf};
use std::sync::mpsc;

use tokio::runtime::Handle;
use uuid::Uuid;

use crate::api::{AnalyzerClient, ApiError, CvFile};
use crate::config::{Config, UploadConfig};
use crate::shutdown::ShutdownCoordinator;
use crate::ui::events::AppEvent;
use crate::ui::form::{FormField, FormIntent, FormReducer, FormState, Submission};
use crate::ui::mvi::Reducer;

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

/// Controller for the analysis form.
///
/// Owns the form state and turns state transitions that need I/O into
/// tasks on the tokio runtime. Tasks report back through the UI event
/// channel and are abandoned when the app shuts down.
pub struct App {
    should_quit: bool,
    form: FormState,
    client: AnalyzerClient,
    upload: UploadConfig,
    server_label: String,
    runtime: Handle,
    events: mpsc::Sender<AppEvent>,
    shutdown: ShutdownCoordinator,
}

impl App {
    pub fn new(
        config: &Config,
        client: AnalyzerClient,
        runtime: Handle,
        events: mpsc::Sender<AppEvent>,
        shutdown: ShutdownCoordinator,
    ) -> Self {
        Self {
            should_quit: false,
            form: FormState::default(),
            client,
            upload: config.upload.clone(),
            server_label: config.server.base_url.clone(),
            runtime,
            events,
            shutdown,
        }
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    /// Origin of the analysis service, for display.
    pub fn server_label(&self) -> &str {
        &self.server_label
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    /// Abandon any request still running. Their results are dropped.
    pub fn shutdown(&self) {
        self.shutdown.signal();
    }

    pub fn dispatch(&mut self, intent: FormIntent) {
        dispatch_mvi!(self, form, FormReducer, intent);
    }

    /// First render: fire the status probe. Later calls do nothing.
    pub fn mount(&mut self) {
        if self.form.probe_started() {
            return;
        }
        self.dispatch(FormIntent::ProbeStarted);

        let client = self.client.clone();
        let events = self.events.clone();
        let shutdown = self.shutdown.handle();
        tracing::debug!(url = %client.status_url(), "Starting status probe");
        self.runtime.spawn(async move {
            match shutdown.run_until_shutdown(client.probe_status()).await {
                None => tracing::debug!("Status probe abandoned on shutdown"),
                Some(Ok(message)) => {
                    tracing::info!(%message, "Status probe succeeded");
                    let intent = FormIntent::ProbeSucceeded { message };
                    if events.send(AppEvent::Completed(intent)).is_err() {
                        tracing::trace!("Probe result dropped (UI loop gone)");
                    }
                }
                Some(Err(err)) => tracing::warn!(error = %err, "Status probe failed"),
            }
        });
    }

    /// Submit the form. Starts an upload only if the reducer accepted it.
    pub fn submit(&mut self) {
        let before = self.form.in_flight().map(|s| s.id);
        self.dispatch(FormIntent::Submit { id: Uuid::new_v4() });

        let Some(submission) = self.form.in_flight().cloned() else {
            tracing::info!("Submit blocked: no CV selected");
            return;
        };
        if Some(submission.id) == before {
            return;
        }
        self.spawn_upload(submission);
    }

    fn spawn_upload(&self, submission: Submission) {
        let client = self.client.clone();
        let events = self.events.clone();
        let shutdown = self.shutdown.handle();
        tracing::info!(
            id = %submission.id,
            file = %submission.inputs.file_name,
            "Submitting CV for analysis"
        );

        self.runtime.spawn(async move {
            let id = submission.id;
            let upload = client.upload(&submission.file, &submission.inputs.job_description);
            let Some(result) = shutdown.run_until_shutdown(upload).await else {
                tracing::debug!(%id, "Upload abandoned on shutdown");
                return;
            };
            let intent = match result {
                Ok(result) => {
                    tracing::info!(%id, score = result.score, "Analysis received");
                    FormIntent::UploadSucceeded { id, result }
                }
                Err(ApiError::Server { status, message }) => {
                    tracing::warn!(%id, status, ?message, "Upload rejected by server");
                    FormIntent::UploadRejected { id, message }
                }
                Err(err) => {
                    tracing::warn!(%id, error = %err, "Upload failed");
                    FormIntent::UploadUnreachable { id }
                }
            };
            if events.send(AppEvent::Completed(intent)).is_err() {
                tracing::trace!(%id, "Upload result dropped (UI loop gone)");
            }
        });
    }

    /// Load the file named in the path input.
    pub fn choose_file_from_input(&mut self) {
        let raw = self.form.path_input().trim();
        if raw.is_empty() {
            return;
        }
        let path = expand_home(raw);
        self.choose_file(&path);
    }

    /// Read `path` and make it the selected CV.
    pub fn choose_file(&mut self, path: &Path) {
        let shown = path.display().to_string();
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| shown.clone());

        if !self.upload.accepts(&name) {
            self.dispatch(FormIntent::FileUnsupported {
                name,
                allowed: self.upload.allowed_extensions.clone(),
            });
            return;
        }

        match std::fs::read(path) {
            Ok(bytes) => {
                tracing::debug!(file = %name, bytes = bytes.len(), "CV selected");
                self.dispatch(FormIntent::FileChosen {
                    file: CvFile::new(name, bytes),
                });
            }
            Err(err) => {
                tracing::debug!(path = %shown, error = %err, "CV could not be read");
                self.dispatch(FormIntent::FileUnreadable {
                    path: shown,
                    reason: err.to_string(),
                });
            }
        }
    }

    /// Pasted text goes to whichever text control has focus.
    pub fn on_paste(&mut self, text: &str) {
        let text = text.replace("\r\n", "\n").replace('\r', "\n");
        match self.form.focus() {
            FormField::JobDescription => {
                self.dispatch(FormIntent::DescriptionInput(text));
            }
            FormField::FilePath => {
                self.dispatch(FormIntent::PathInput(text));
            }
            FormField::Submit => {}
        }
    }
}

fn expand_home(raw: &str) -> PathBuf {
    if let Some(rest) = raw.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    PathBuf::from(raw)
}
