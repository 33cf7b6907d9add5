use std::time::Instant;

use crate::app::{App, AppMode};
use crate::components::*;
use crate::gallery::GalleryBody;
use crate::theme::*;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use storefront_domain::PriceCeiling;

pub fn render(app: &mut App, frame: &mut Frame, now: Instant) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(frame.area());

    render_header(app, frame, chunks[0]);
    render_gallery(app, frame, chunks[1], now);
    render_footer(app, frame, chunks[2]);

    match app.mode {
        AppMode::EditSearch => render_input_popup(
            frame,
            "Search",
            "Product name (empty clears):",
            app.input.as_str(),
            app.input.cursor_column(),
        ),
        AppMode::EditFilter => render_input_popup(
            frame,
            "Price filter",
            "Maximum price (empty clears):",
            app.input.as_str(),
            app.input.cursor_column(),
        ),
        AppMode::Browse => {}
    }

    if let Some(banner) = &app.banner {
        banner.render(frame, chunks[1]);
    }
}

fn render_header(app: &App, frame: &mut Frame, area: Rect) {
    let result = app.feed.result();
    let filter = if app.filter == PriceCeiling::default() {
        "any".to_string()
    } else {
        format!("≤ {}", format_price(app.filter.value()))
    };

    let mut spans = vec![
        Span::styled("Search: ", label_text()),
        Span::styled(app.search.as_deref().unwrap_or("-").to_string(), highlight_text()),
        Span::raw("   "),
        Span::styled("Price: ", label_text()),
        Span::styled(filter, highlight_text()),
        Span::raw("   "),
        Span::styled("Lang: ", label_text()),
        Span::styled(app.lang.to_string(), highlight_text()),
        Span::raw("   "),
        Span::styled(
            format!("{} of {}", result.item_count(), result.total),
            normal_text(),
        ),
    ];
    if let Some(fetched_at) = result.fetched_at {
        spans.push(Span::styled(
            format!("   updated {}", fetched_at.format("%H:%M:%S")),
            label_text(),
        ));
    }

    let header = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(focused_border())
            .title("Storefront"),
    );
    frame.render_widget(header, area);
}

fn render_gallery(app: &mut App, frame: &mut Frame, area: Rect, now: Instant) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(card_border())
        .title("Products");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let layout = app.measure(inner.width, inner.height);

    let mut lines: Vec<Line<'static>> = match app.view().body {
        GalleryBody::Error { message } => alert_lines(message, error_text(), inner.width),
        GalleryBody::NotFound { message } => alert_lines(message, highlight_text(), inner.width),
        GalleryBody::Blank => Vec::new(),
        GalleryBody::Grid { slots } => grid_lines(&slots, layout.columns, inner.width),
    };
    if app.loader.is_rendered() {
        let slide = app.loader.slide_offset(now, 2);
        lines.extend(loader_lines(app.spinner_frame, slide));
    }

    let offset = u16::try_from(app.viewport.offset()).unwrap_or(u16::MAX);
    frame.render_widget(Paragraph::new(lines).scroll((offset, 0)), inner);
}

fn render_footer(app: &App, frame: &mut Frame, area: Rect) {
    let help = match app.mode {
        AppMode::Browse => {
            "q: quit | j/k: scroll | PgUp/PgDn: page | g/G: top/bottom | /: search | f: price | l: language | r: reload"
        }
        AppMode::EditSearch | AppMode::EditFilter => "Enter: apply | Esc: cancel",
    };
    frame.render_widget(Paragraph::new(help).style(label_text()), area);
}
