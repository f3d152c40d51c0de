use crate::ui::form::{FormField, FormState};
use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Key hints for whatever currently has the keyboard.
pub fn hints(form: &FormState) -> &'static str {
    if form.alert().is_some() {
        return " Enter/Esc: Close alert │ Ctrl+Q: Quit";
    }
    match form.focus() {
        FormField::JobDescription => " Tab: Next field │ Enter: New line │ Ctrl+S: Submit │ Ctrl+Q: Quit",
        FormField::FilePath => " Tab: Next field │ Enter: Load file │ Ctrl+S: Submit │ Ctrl+Q: Quit",
        FormField::Submit => " Tab: Next field │ Enter: Submit │ Ctrl+Q: Quit",
    }
}

pub fn footer_widget(form: &FormState, area: Rect) -> Paragraph<'static> {
    let hints = hints(form);
    let version = format!("v{} ", VERSION);

    // Char count, not bytes: the separators are multi-byte.
    let content_width = area.width.saturating_sub(2) as usize;
    let padding = content_width
        .saturating_sub(hints.chars().count())
        .saturating_sub(version.chars().count());

    let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);
    let line = Line::from(vec![
        Span::styled(hints, text_style),
        Span::raw(" ".repeat(padding)),
        Span::styled(version, text_style),
    ]);

    Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER)),
    )
}
