use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use std::sync::mpsc::{self, Receiver};
use std::thread;
use std::time::Duration;

use crate::shutdown::ShutdownHandle;
use crate::ui::form::FormIntent;

pub enum AppEvent {
    Key(KeyEvent),
    Paste(String),
    Resize(u16, u16),
    /// A probe or upload task finished; the intent carries its outcome.
    Completed(FormIntent),
    /// The terminal stopped delivering input. No key can arrive after
    /// this, so the loop has to end on its own.
    InputLost(String),
}

pub struct EventHandler {
    rx: Receiver<AppEvent>,
    tx: mpsc::Sender<AppEvent>,
}

impl EventHandler {
    pub fn new(poll_interval: Duration, shutdown: ShutdownHandle) -> Self {
        let (tx, rx) = mpsc::channel();
        let event_tx = tx.clone();

        thread::spawn(move || loop {
            if shutdown.is_shutting_down() {
                break;
            }

            // Short poll so the shutdown flag is noticed promptly
            let ready = match event::poll(poll_interval) {
                Ok(ready) => ready,
                Err(err) => {
                    tracing::error!(error = %err, "Terminal event poll failed");
                    let _ = event_tx.send(AppEvent::InputLost(err.to_string()));
                    break;
                }
            };
            if !ready {
                continue;
            }

            let app_event = match event::read() {
                Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => AppEvent::Key(key),
                Ok(Event::Paste(text)) => AppEvent::Paste(text),
                Ok(Event::Resize(cols, rows)) => AppEvent::Resize(cols, rows),
                Ok(_) => continue,
                Err(err) => {
                    tracing::error!(error = %err, "Terminal event read failed");
                    let _ = event_tx.send(AppEvent::InputLost(err.to_string()));
                    break;
                }
            };

            if event_tx.send(app_event).is_err() {
                break;
            }
        });

        Self { rx, tx }
    }

    pub fn next(&self, timeout: Duration) -> Result<AppEvent, mpsc::RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }

    pub fn sender(&self) -> mpsc::Sender<AppEvent> {
        self.tx.clone()
    }
}
