use crate::gallery::CardSlot;
use crate::theme::{card_border, label_text, placeholder, price_text, product_name};
use crate::viewport::CARD_HEIGHT;
use ratatui::text::{Line, Span};

/// Fit `text` into exactly `width` columns, cutting with an ellipsis.
pub fn fit(text: &str, width: usize) -> String {
    let count = text.chars().count();
    if count <= width {
        let mut fitted = text.to_string();
        fitted.extend(std::iter::repeat(' ').take(width - count));
        return fitted;
    }
    if width == 0 {
        return String::new();
    }
    let mut fitted: String = text.chars().take(width - 1).collect();
    fitted.push('…');
    fitted
}

/// Group digits in thousands: `1234567` becomes `1,234,567`.
pub fn format_price(price: u64) -> String {
    let digits = price.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

fn border_line(left: char, right: char, width: usize) -> Span<'static> {
    let inner = width.saturating_sub(2);
    Span::styled(
        format!("{left}{}{right}", "─".repeat(inner)),
        card_border(),
    )
}

fn body_line(content: Span<'static>) -> Vec<Span<'static>> {
    vec![
        Span::styled("│ ", card_border()),
        content,
        Span::styled(" │", card_border()),
    ]
}

/// The rows of one card, `width` columns wide.
pub fn card_lines(slot: &CardSlot<'_>, width: usize) -> [Vec<Span<'static>>; CARD_HEIGHT] {
    let inner = width.saturating_sub(4);
    let (name, price, tag) = match slot {
        CardSlot::Product(product) => {
            let id = product.id.simple().to_string();
            (
                Span::styled(fit(&product.name, inner), product_name()),
                Span::styled(fit(&format_price(product.price), inner), price_text()),
                Span::styled(fit(&format!("#{}", &id[..8]), inner), label_text()),
            )
        }
        CardSlot::Placeholder(_) => (
            Span::styled(fit(&"░".repeat(inner * 3 / 4), inner), placeholder()),
            Span::styled(fit(&"░".repeat(inner / 3), inner), placeholder()),
            Span::styled(fit("", inner), placeholder()),
        ),
    };

    [
        vec![border_line('┌', '┐', width)],
        body_line(name),
        body_line(price),
        body_line(tag),
        vec![border_line('└', '┘', width)],
    ]
}

/// Lay out cards into rows of `columns`, returning one line per terminal row.
pub fn grid_lines(slots: &[CardSlot<'_>], columns: usize, width: u16) -> Vec<Line<'static>> {
    let columns = columns.max(1);
    let card_width = usize::from(width) / columns;

    let mut lines = Vec::with_capacity(slots.len().div_ceil(columns) * CARD_HEIGHT);
    for row in slots.chunks(columns) {
        let cards: Vec<_> = row.iter().map(|slot| card_lines(slot, card_width)).collect();
        for i in 0..CARD_HEIGHT {
            let spans: Vec<Span<'static>> = cards.iter().flat_map(|card| card[i].clone()).collect();
            lines.push(Line::from(spans));
        }
    }
    lines
}
