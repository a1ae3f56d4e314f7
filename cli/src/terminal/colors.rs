use colored::Color;

pub const PRIMARY: Color = Color::TrueColor { r: 94, g: 201, b: 255 };
pub const ACCENT: Color = Color::TrueColor { r: 255, g: 196, b: 87 };
pub const SEPARATOR: Color = Color::BrightBlack;
pub const TEXT_DEFAULT: Color = Color::TrueColor { r: 210, g: 210, b: 210 };
pub const DEVICE_ADDR: Color = Color::TrueColor { r: 214, g: 143, b: 255 };
pub const IN_RANGE: Color = Color::Green;
pub const OUT_OF_RANGE: Color = Color::Red;
