use colored::Color;

pub const ACCENT: Color = Color::TrueColor { r: 135, g: 255, b: 135 };
pub const SEPARATOR: Color = Color::BrightBlack;
pub const TEXT_DEFAULT: Color = Color::White;
pub const IPV4_ADDR: Color = Color::TrueColor { r: 255, g: 215, b: 95 };
