use crate::ui::app::App;
use crate::ui::form::{FormField, FormIntent};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') || is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    // Alert is modal
    if app.form().alert().is_some() {
        if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
            app.dispatch(FormIntent::DismissAlert);
        }
        return;
    }

    if is_ctrl_char(key, 's') {
        app.submit();
        return;
    }

    match key.code {
        KeyCode::Tab => {
            app.dispatch(FormIntent::FocusNext);
            return;
        }
        KeyCode::BackTab => {
            app.dispatch(FormIntent::FocusPrev);
            return;
        }
        _ => {}
    }

    match app.form().focus() {
        FormField::JobDescription => match key.code {
            KeyCode::Char(ch) if is_plain(key) => {
                app.dispatch(FormIntent::DescriptionInput(ch.to_string()));
            }
            KeyCode::Enter => app.dispatch(FormIntent::DescriptionInput("\n".to_string())),
            KeyCode::Backspace => app.dispatch(FormIntent::DescriptionBackspace),
            _ => {}
        },
        FormField::FilePath => match key.code {
            KeyCode::Char(ch) if is_plain(key) => {
                app.dispatch(FormIntent::PathInput(ch.to_string()));
            }
            KeyCode::Enter => app.choose_file_from_input(),
            KeyCode::Backspace => app.dispatch(FormIntent::PathBackspace),
            _ => {}
        },
        FormField::Submit => {
            if matches!(key.code, KeyCode::Enter | KeyCode::Char(' ')) {
                app.submit();
            }
        }
    }
}

fn is_plain(key: KeyEvent) -> bool {
    !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
        && !key.modifiers.contains(KeyModifiers::SHIFT)
}
