use ratatui::style::Color;

pub const ACCENT: Color = Color::Rgb(0xf5, 0xb9, 0x42);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const HEADER_SEPARATOR: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const LIGHT_ON: Color = Color::Rgb(0xfa, 0xcc, 0x15);
pub const LIGHT_OFF: Color = Color::Rgb(0x6b, 0x72, 0x80);
