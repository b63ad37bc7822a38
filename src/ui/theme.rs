use ratatui::style::Color;

pub const BRAND_GREEN: Color = Color::Rgb(0x00, 0x9c, 0x3b);
pub const BRAND_YELLOW: Color = Color::Rgb(0xff, 0xdf, 0x00);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const MUTED_TEXT: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const LINK_TEXT: Color = Color::Rgb(0x60, 0xa5, 0xfa);
pub const STATUS_OK: Color = Color::Rgb(0x22, 0xc5, 0x5e);
pub const STATUS_ERROR: Color = Color::Rgb(0xef, 0x44, 0x44);
pub const ACTIVE_HIGHLIGHT: Color = Color::Rgb(0x26, 0x26, 0x26);
