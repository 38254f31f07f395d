use ratatui::style::Color;

pub const ACCENT: Color = Color::Rgb(0xda, 0x77, 0x56);
pub const BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const SEPARATOR: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const MUTED: Color = Color::Rgb(0x8a, 0x8f, 0x98);
pub const DANGER: Color = Color::Rgb(0xef, 0x44, 0x44);
pub const FOCUS_BG: Color = Color::Rgb(0x26, 0x26, 0x26);
