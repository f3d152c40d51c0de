use crate::ui::app::App;
use crate::ui::footer::footer_widget;
use crate::ui::form::{Alert, AnalysisOutcome, FormField, FormState};
use crate::ui::header::Header;
use crate::ui::layout::{centered_rect_by_size, form_regions, layout_regions};
use crate::ui::theme::{
    ACCENT, ACTIVE_HIGHLIGHT, DISABLED, GLOBAL_BORDER, HEADER_TEXT, POPUP_BORDER, STATUS_ERROR,
    STATUS_OK,
};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

const ALERT_MAX_WIDTH: u16 = 60;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);
    let form = app.form();

    frame.render_widget(
        Header::new().widget(form.status_message(), app.server_label()),
        header,
    );
    frame.render_widget(Clear, body);
    draw_form(frame, body, form);
    frame.render_widget(footer_widget(form, footer), footer);

    if let Some(alert) = form.alert() {
        draw_alert(frame, body, alert);
    }
}

fn draw_form(frame: &mut Frame<'_>, body: Rect, form: &FormState) {
    let regions = form_regions(body, form.analysis().is_some());

    let description = Paragraph::new(form.job_description().to_string())
        .wrap(Wrap { trim: false })
        .scroll((description_scroll(form.job_description(), regions.description), 0))
        .block(field_block(
            " Target Job Description ",
            form.focus() == FormField::JobDescription,
        ));
    frame.render_widget(description, regions.description);

    let selected = match form.selected_file() {
        Some(file) => Line::from(vec![
            Span::raw("Selected: "),
            Span::styled(file.name().to_string(), Style::default().fg(STATUS_OK)),
            Span::styled(
                format!(" ({})", human_size(file.len())),
                Style::default().add_modifier(Modifier::DIM),
            ),
        ]),
        None => Line::from(Span::styled(
            "No file selected",
            Style::default().add_modifier(Modifier::DIM),
        )),
    };
    let file = Paragraph::new(vec![Line::from(form.path_input().to_string()), selected]).block(
        field_block(
            " CV file path (PDF/DOCX), Enter to load ",
            form.focus() == FormField::FilePath,
        ),
    );
    frame.render_widget(file, regions.file);

    frame.render_widget(submit_button(form), regions.submit);

    if let (Some(outcome), Some(area)) = (form.analysis(), regions.result) {
        frame.render_widget(result_panel(outcome), area);
    }
}

fn field_block(title: &'static str, focused: bool) -> Block<'static> {
    let border = if focused { ACCENT } else { GLOBAL_BORDER };
    Block::default()
        .title(Span::styled(title, Style::default().fg(HEADER_TEXT)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
}

fn submit_button(form: &FormState) -> Paragraph<'static> {
    let focused = form.focus() == FormField::Submit;
    let label_style = if form.submit_enabled() {
        Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DISABLED).add_modifier(Modifier::ITALIC)
    };
    let mut block = field_block("", focused && form.submit_enabled());
    if focused {
        block = block.style(Style::default().bg(ACTIVE_HIGHLIGHT));
    }
    Paragraph::new(Line::from(Span::styled(form.submit_label(), label_style)))
        .alignment(Alignment::Center)
        .block(block)
}

fn result_panel(outcome: &AnalysisOutcome) -> Paragraph<'static> {
    let label = Style::default().add_modifier(Modifier::BOLD);
    let lines = vec![
        Line::from(vec![
            Span::styled("File name: ", label),
            Span::raw(outcome.inputs.file_name.clone()),
        ]),
        Line::from(vec![
            Span::styled("Match score: ", label),
            Span::styled(
                format!("{}%", outcome.score_text()),
                Style::default().fg(STATUS_OK).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(Span::styled("Recommendations:", label)),
        Line::from(outcome.result.recommendations.clone()),
    ];
    Paragraph::new(lines).wrap(Wrap { trim: false }).block(
        Block::default()
            .title(Span::styled(" Analysis Result ", Style::default().fg(ACCENT)))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(STATUS_OK)),
    )
}

fn draw_alert(frame: &mut Frame<'_>, body: Rect, alert: &Alert) {
    let message = alert.message();
    let width = (message.chars().count() as u16)
        .saturating_add(4)
        .clamp(30, ALERT_MAX_WIDTH);
    let inner_width = width.saturating_sub(2).max(1) as usize;
    let message_rows = message.chars().count().div_ceil(inner_width).max(1) as u16;
    // message, blank line, hint, borders
    let height = message_rows + 4;
    let area = centered_rect_by_size(body, width, height);

    let lines = vec![
        Line::from(message),
        Line::from(""),
        Line::from(Span::styled(
            "Enter/Esc: Close",
            Style::default().add_modifier(Modifier::DIM),
        )),
    ];
    frame.render_widget(Clear, area);
    let popup = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
        Block::default()
            .title(Span::styled(" Alert ", Style::default().fg(STATUS_ERROR)))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(POPUP_BORDER)),
    );
    frame.render_widget(popup, area);
}

/// Keep the end of a long description in view.
///
/// Counts rows after word wrapping at the box's inner width, so a long
/// pasted line scrolls the same way as many short ones.
fn description_scroll(text: &str, area: Rect) -> u16 {
    let inner_width = area.width.saturating_sub(2);
    let visible = area.height.saturating_sub(2) as usize;
    let mut rows = Paragraph::new(text)
        .wrap(Wrap { trim: false })
        .line_count(inner_width);
    // A trailing newline puts the cursor on a row the wrapper does not count.
    if text.ends_with('\n') {
        rows += 1;
    }
    rows.saturating_sub(visible).min(u16::MAX as usize) as u16
}

fn human_size(bytes: usize) -> String {
    const KIB: f64 = 1024.0;
    let bytes_f = bytes as f64;
    if bytes_f < KIB {
        format!("{} B", bytes)
    } else if bytes_f < KIB * KIB {
        format!("{:.1} KiB", bytes_f / KIB)
    } else {
        format!("{:.1} MiB", bytes_f / (KIB * KIB))
    }
}
