use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect) {
    let header_height = area.height.min(3);
    let footer_height = 3.min(area.height.saturating_sub(header_height));
    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: area.height.saturating_sub(header_height + footer_height),
    };
    (header, body, footer)
}

/// Regions of the form body, top to bottom.
pub struct FormRegions {
    pub description: Rect,
    pub file: Rect,
    pub submit: Rect,
    pub result: Option<Rect>,
}

pub fn form_regions(body: Rect, with_result: bool) -> FormRegions {
    let mut constraints = vec![
        Constraint::Min(5),
        Constraint::Length(4),
        Constraint::Length(3),
    ];
    if with_result {
        constraints.push(Constraint::Percentage(40));
    }
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(body);

    FormRegions {
        description: chunks[0],
        file: chunks[1],
        submit: chunks[2],
        result: chunks.get(3).copied(),
    }
}

/// Rect of the given size centered in `area`, clamped to fit.
pub fn centered_rect_by_size(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
