use ratatui::style::Color;

pub const PRIMARY: Color = Color::from_u32(0x0048c9b0);
pub const SECONDARY: Color = Color::from_u32(0x00236b5e);
pub const NEUTRAL: Color = Color::from_u32(0x00505050);
pub const BACKGROUND: Color = Color::from_u32(0x00101214);
pub const ACCENT: Color = Color::from_u32(0x00f2b35b);
pub const ERROR: Color = Color::from_u32(0x00e06c75);
