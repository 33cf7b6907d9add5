use ratatui::style::Color;

pub const FOCUSED_BORDER: Color = Color::Cyan;
pub const CARD_BORDER: Color = Color::Gray;

pub const NORMAL_TEXT: Color = Color::White;
pub const LABEL_TEXT: Color = Color::DarkGray;
pub const HIGHLIGHT_TEXT: Color = Color::Yellow;
pub const PRICE_TEXT: Color = Color::Green;
pub const PLACEHOLDER: Color = Color::DarkGray;

pub const POPUP_BG: Color = Color::Black;
pub const ERROR_COLOR: Color = Color::Red;
pub const LOADER_COLOR: Color = Color::Cyan;
