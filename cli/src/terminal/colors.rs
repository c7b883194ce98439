use colored::Color;

pub const SEPARATOR: Color = Color::BrightBlack;
pub const TEXT_DEFAULT: Color = Color::White;
pub const ACCENT: Color = Color::BrightGreen;
pub const STATUS: Color = Color::Yellow;
