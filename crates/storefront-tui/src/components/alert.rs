use crate::components::product_card::fit;
use crate::viewport::MESSAGE_HEIGHT;
use ratatui::{
    style::Style,
    text::{Line, Span},
};

/// A boxed single-message alert spanning `width` columns.
pub fn alert_lines(message: &str, style: Style, width: u16) -> Vec<Line<'static>> {
    let width = usize::from(width).max(4);
    let inner = width - 4;
    let lines = vec![
        Line::from(Span::styled(format!("┌{}┐", "─".repeat(width - 2)), style)),
        Line::from(vec![
            Span::styled("│ ", style),
            Span::styled(fit(message, inner), style),
            Span::styled(" │", style),
        ]),
        Line::from(Span::styled(format!("└{}┘", "─".repeat(width - 2)), style)),
    ];
    debug_assert_eq!(lines.len(), MESSAGE_HEIGHT);
    lines
}
