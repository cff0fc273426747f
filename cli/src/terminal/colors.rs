use colored::Color;
use sacristan_common::liturgy::season::LiturgicalColor;

pub const PRIMARY: Color = Color::BrightWhite;
pub const SEPARATOR: Color = Color::BrightBlack;
pub const TEXT_DEFAULT: Color = Color::White;
pub const ACCENT: Color = Color::BrightYellow;
pub const RUBRIC: Color = Color::Red;

pub const PURPLE: Color = Color::TrueColor { r: 128, g: 64, b: 160 };
pub const WHITE: Color = Color::TrueColor { r: 245, g: 240, b: 225 };
pub const RED: Color = Color::TrueColor { r: 200, g: 30, b: 45 };
pub const GREEN: Color = Color::TrueColor { r: 40, g: 150, b: 70 };
pub const ROSE: Color = Color::TrueColor { r: 235, g: 130, b: 170 };

/// Terminal color used to paint a vestment color.
pub fn vestment(color: LiturgicalColor) -> Color {
    match color {
        LiturgicalColor::Purple => PURPLE,
        LiturgicalColor::White => WHITE,
        LiturgicalColor::Red => RED,
        LiturgicalColor::Green => GREEN,
        LiturgicalColor::Rose => ROSE,
    }
}
