use crate::ui::theme::{GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, STATUS_ERROR, STATUS_OK};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header;

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}

impl Header {
    pub fn new() -> Self {
        Self
    }

    /// Title, connection status and service origin.
    ///
    /// An empty status means the probe has not answered (or failed); the
    /// header never says which.
    pub fn widget(&self, status_message: &str, server: &str) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let (dot, dot_style) = if status_message.is_empty() {
            ("○", Style::default().fg(STATUS_ERROR))
        } else {
            ("●", Style::default().fg(STATUS_OK))
        };

        let line = Line::from(vec![
            Span::styled(" Smart CV Analyzer", text_style.add_modifier(Modifier::BOLD)),
            Span::styled("  │  ", separator_style),
            Span::styled(dot, dot_style),
            Span::styled(" Status: ", text_style),
            Span::styled(status_message.to_string(), Style::default().fg(STATUS_OK)),
            Span::styled("  │  ", separator_style),
            Span::styled(
                server.to_string(),
                text_style.add_modifier(Modifier::DIM),
            ),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
