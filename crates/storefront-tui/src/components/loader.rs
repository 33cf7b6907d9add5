use crate::theme::loader;
use crate::viewport::LOADER_HEIGHT;
use ratatui::{
    layout::Alignment,
    text::{Line, Span},
};

pub const SPINNER_FRAMES: [&str; 8] = ["⣾", "⣽", "⣻", "⢿", "⡿", "⣟", "⣯", "⣷"];

/// Rows of the loading indicator. The spinner sits on the middle row, pushed
/// down by `slide_offset` rows while the indicator slides in or out.
pub fn loader_lines(frame_index: usize, slide_offset: u16) -> Vec<Line<'static>> {
    let spinner_row = (1 + usize::from(slide_offset)).min(LOADER_HEIGHT - 1);
    let spinner = SPINNER_FRAMES[frame_index % SPINNER_FRAMES.len()];

    (0..LOADER_HEIGHT)
        .map(|row| {
            if row == spinner_row {
                Line::from(Span::styled(spinner.to_string(), loader())).alignment(Alignment::Center)
            } else {
                Line::default()
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spinner_on_middle_row_when_settled() {
        let lines = loader_lines(0, 0);
        assert_eq!(lines.len(), LOADER_HEIGHT);
        assert_eq!(lines[1].width(), 1);
        assert_eq!(lines[0].width(), 0);
    }

    #[test]
    fn test_slide_offset_is_clamped() {
        let lines = loader_lines(3, 9);
        assert_eq!(lines[LOADER_HEIGHT - 1].width(), 1);
    }
}
