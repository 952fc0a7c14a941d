use ratatui::style::Color;

pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const HEADER_SEPARATOR: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const FOCUS_BORDER: Color = Color::Rgb(0xda, 0x77, 0x56);
pub const STATUS_OK: Color = Color::Rgb(0x22, 0xc5, 0x5e);
pub const ACTIVE_HIGHLIGHT: Color = Color::Rgb(0x26, 0x26, 0x26);
pub const MARK_X: Color = Color::Rgb(0x60, 0xa5, 0xfa);
pub const MARK_O: Color = Color::Rgb(0xef, 0x44, 0x44);
pub const WIN_HIGHLIGHT: Color = Color::Rgb(0x16, 0x65, 0x34);
