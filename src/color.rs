use std::str::FromStr;

use eframe::egui::Color32;
use palette::{Darken, IntoColor, Hsl, Srgb};

// ---------------------------------------------------------------------------
// Chart colorway: hex strings → Color32
// ---------------------------------------------------------------------------

/// Fallback when a chart's colorway entry is not a valid hex colour.
pub const DEFAULT_LINE_COLOR: Color32 = Color32::LIGHT_BLUE;

/// Parse a `#rrggbb` (or `#rgb`) colour.
pub fn parse_hex(hex: &str) -> Option<Color32> {
    let rgb = Srgb::<u8>::from_str(hex).ok()?;
    Some(Color32::from_rgb(rgb.red, rgb.green, rgb.blue))
}

/// Colour of a chart's line, from the first colorway entry.
pub fn line_color(colorway: &[String]) -> Color32 {
    colorway
        .first()
        .and_then(|hex| parse_hex(hex))
        .unwrap_or(DEFAULT_LINE_COLOR)
}

/// A darker shade of `color`, used for chart titles so they match the line.
pub fn title_color(color: Color32) -> Color32 {
    let rgb: Srgb = Srgb::new(color.r(), color.g(), color.b()).into_format();
    let hsl: Hsl = rgb.into_color();
    let rgb: Srgb = hsl.darken(0.3).into_color();
    let rgb: Srgb<u8> = rgb.into_format();
    Color32::from_rgb(rgb.red, rgb.green, rgb.blue)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex() {
        assert_eq!(parse_hex("#17B897"), Some(Color32::from_rgb(0x17, 0xb8, 0x97)));
        assert_eq!(parse_hex("#E12D39"), Some(Color32::from_rgb(0xe1, 0x2d, 0x39)));
        assert_eq!(parse_hex("not a colour"), None);
    }

    #[test]
    fn test_line_color_fallback() {
        assert_eq!(line_color(&[]), DEFAULT_LINE_COLOR);
        assert_eq!(line_color(&["zzz".to_string()]), DEFAULT_LINE_COLOR);
        assert_eq!(
            line_color(&["#E12D39".to_string(), "#17B897".to_string()]),
            Color32::from_rgb(0xe1, 0x2d, 0x39)
        );
    }

    #[test]
    fn test_title_color_is_darker() {
        let base = Color32::from_rgb(0x17, 0xb8, 0x97);
        let dark = title_color(base);
        let sum = |c: Color32| c.r() as u32 + c.g() as u32 + c.b() as u32;
        assert!(sum(dark) < sum(base));
    }
}
