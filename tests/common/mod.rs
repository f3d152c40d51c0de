//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_backend;

use cv_analyzer::api::AnalyzerClient;
use cv_analyzer::config::Config;
use cv_analyzer::shutdown::ShutdownCoordinator;
use cv_analyzer::ui::app::App;
use cv_analyzer::ui::events::AppEvent;
use cv_analyzer::ui::form::FormState;
use cv_analyzer::ui::render::draw;
use mock_backend::MockBackend;
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use std::net::TcpListener;
use std::path::PathBuf;
use std::sync::mpsc;
use std::time::{Duration, Instant};
use tempfile::TempDir;
use tokio::runtime::Runtime;

pub const WAIT: Duration = Duration::from_secs(5);

/// Base URL of a local port with nothing listening on it.
pub fn closed_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind to free port");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{}", port)
}

/// Config pointing at `base_url` with short timeouts.
pub fn test_config(base_url: &str) -> Config {
    let mut config = Config::default();
    config.server.base_url = base_url.to_string();
    config.server.timeout_seconds = 5;
    config.server.connect_timeout_seconds = 2;
    config
}

/// Render the app into an in-memory terminal and return the screen text.
pub fn render(app: &App, width: u16, height: u16) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|frame| draw(frame, app)).unwrap();
    let buffer = terminal.backend().buffer().clone();
    let mut screen = String::new();
    for y in 0..height {
        for x in 0..width {
            screen.push_str(buffer[(x, y)].symbol());
        }
        screen.push('\n');
    }
    screen
}

// -- App harness --------------------------------------------------------------

/// An `App` wired to a mock service, driven from the test thread.
///
/// The test thread plays the role of the UI loop: it pulls completions off
/// the event channel and dispatches them, so it must not be a runtime
/// worker itself.
pub struct Harness {
    pub app: App,
    pub backend: MockBackend,
    events: mpsc::Receiver<AppEvent>,
    dir: TempDir,
    pub rt: Runtime,
}

impl Harness {
    pub fn start() -> Self {
        Self::start_with(|_| {})
    }

    pub fn start_with(customize: impl FnOnce(&mut Config)) -> Self {
        let rt = Runtime::new().expect("Failed to build runtime");
        let backend = rt.block_on(MockBackend::start());
        let mut config = test_config(&backend.base_url());
        customize(&mut config);

        let client = AnalyzerClient::new(&config).expect("client");
        let (tx, events) = mpsc::channel();
        let app = App::new(
            &config,
            client,
            rt.handle().clone(),
            tx,
            ShutdownCoordinator::new(),
        );

        Self {
            app,
            backend,
            events,
            dir: TempDir::new().expect("Failed to create temp dir"),
            rt,
        }
    }

    /// Write a CV into the scratch dir and return its path.
    pub fn write_cv(&self, name: &str, bytes: &[u8]) -> PathBuf {
        let path = self.dir.path().join(name);
        std::fs::write(&path, bytes).expect("Failed to write CV");
        path
    }

    /// Write a CV and select it through the app.
    pub fn select_cv(&mut self, name: &str, bytes: &[u8]) {
        let path = self.write_cv(name, bytes);
        self.app.choose_file(&path);
    }

    /// Dispatch completions until `done` holds or the wait runs out.
    pub fn pump_until(&mut self, done: impl Fn(&FormState) -> bool) -> bool {
        let deadline = Instant::now() + WAIT;
        while !done(self.app.form()) {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if remaining.is_zero() {
                return false;
            }
            match self.events.recv_timeout(remaining) {
                Ok(AppEvent::Completed(intent)) => self.app.dispatch(intent),
                Ok(_) => {}
                Err(_) => return done(self.app.form()),
            }
        }
        true
    }

    /// Dispatch whatever completions arrive within `window`.
    pub fn pump_for(&mut self, window: Duration) {
        let deadline = Instant::now() + window;
        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if remaining.is_zero() {
                return;
            }
            match self.events.recv_timeout(remaining) {
                Ok(AppEvent::Completed(intent)) => self.app.dispatch(intent),
                Ok(_) => {}
                Err(mpsc::RecvTimeoutError::Timeout) => return,
                Err(mpsc::RecvTimeoutError::Disconnected) => return,
            }
        }
    }

    pub fn screen(&self) -> String {
        render(&self.app, 100, 40)
    }

    pub fn requests_to(&self, path: &str) -> Vec<mock_backend::CapturedRequest> {
        self.rt.block_on(self.backend.requests_to(path))
    }

    pub fn request_count(&self) -> usize {
        self.rt.block_on(self.backend.captured_requests()).len()
    }

    pub fn enqueue(&self, path: &str, resp: mock_backend::MockResponse) {
        self.rt.block_on(self.backend.enqueue(path, resp));
    }
}
