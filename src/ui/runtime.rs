use crate::api::AnalyzerClient;
use crate::config::Config;
use crate::shutdown::ShutdownCoordinator;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::sync::mpsc::RecvTimeoutError;
use std::time::Duration;
use tokio::runtime::Handle;

const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Run the form until the user quits.
///
/// The UI loop stays on the calling thread; network work goes to
/// `runtime`. Pending requests are abandoned on exit.
pub fn run(config: &Config, client: AnalyzerClient, runtime: Handle) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let shutdown = ShutdownCoordinator::new();
    let events = EventHandler::new(POLL_INTERVAL, shutdown.handle());
    let mut app = App::new(config, client, runtime, events.sender(), shutdown);
    app.mount();

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(POLL_INTERVAL) {
            Ok(event) => apply_event(&mut app, event),
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    app.shutdown();
    drop(guard);
    Ok(())
}

fn apply_event(app: &mut App, event: AppEvent) {
    match event {
        AppEvent::Key(key) => handle_key(app, key),
        AppEvent::Paste(text) => app.on_paste(&text),
        AppEvent::Resize(cols, rows) => {
            tracing::trace!(cols, rows, "Terminal resized");
        }
        AppEvent::Completed(intent) => app.dispatch(intent),
        AppEvent::InputLost(reason) => {
            tracing::error!(%reason, "Terminal input lost, exiting");
            app.request_quit();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::form::FormIntent;
    use std::sync::mpsc;

    fn make_app(rt: &tokio::runtime::Runtime) -> App {
        let mut config = Config::default();
        config.server.base_url = "http://127.0.0.1:9".to_string();
        let client = AnalyzerClient::new(&config).unwrap();
        let (tx, _rx) = mpsc::channel();
        App::new(
            &config,
            client,
            rt.handle().clone(),
            tx,
            ShutdownCoordinator::new(),
        )
    }

    #[test]
    fn lost_input_ends_the_loop() {
        let rt = tokio::runtime::Runtime::new().unwrap();
        let mut app = make_app(&rt);
        assert!(!app.should_quit());

        apply_event(&mut app, AppEvent::InputLost("poll failed".to_string()));

        assert!(app.should_quit());
    }

    #[test]
    fn completions_and_pastes_reach_the_form() {
        let rt = tokio::runtime::Runtime::new().unwrap();
        let mut app = make_app(&rt);

        apply_event(&mut app, AppEvent::Paste("Rust\r\nTokio".to_string()));
        apply_event(
            &mut app,
            AppEvent::Completed(FormIntent::ProbeSucceeded {
                message: "ok".to_string(),
            }),
        );
        apply_event(&mut app, AppEvent::Resize(120, 40));

        assert_eq!(app.form().job_description(), "Rust\nTokio");
        assert_eq!(app.form().status_message(), "ok");
        assert!(!app.should_quit());
    }
}
