use super::colors::*;
use ratatui::style::{Modifier, Style};

pub fn focused_border() -> Style {
    Style::default().fg(FOCUSED_BORDER)
}

pub fn card_border() -> Style {
    Style::default().fg(CARD_BORDER)
}

pub fn normal_text() -> Style {
    Style::default().fg(NORMAL_TEXT)
}

pub fn label_text() -> Style {
    Style::default().fg(LABEL_TEXT)
}

pub fn highlight_text() -> Style {
    Style::default().fg(HIGHLIGHT_TEXT)
}

pub fn product_name() -> Style {
    Style::default()
        .fg(NORMAL_TEXT)
        .add_modifier(Modifier::BOLD)
}

pub fn price_text() -> Style {
    Style::default().fg(PRICE_TEXT)
}

pub fn placeholder() -> Style {
    Style::default()
        .fg(PLACEHOLDER)
        .add_modifier(Modifier::DIM)
}

pub fn error_text() -> Style {
    Style::default()
        .fg(ERROR_COLOR)
        .add_modifier(Modifier::BOLD)
}

pub fn loader() -> Style {
    Style::default().fg(LOADER_COLOR)
}

pub fn popup_bg() -> Style {
    Style::default().bg(POPUP_BG)
}
