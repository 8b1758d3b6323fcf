//! Color token parsing utilities

use log::error;
use ratatui::style::Color;

/// Error type for color token parsing failures
#[derive(Debug, thiserror::Error)]
pub enum ColorParseError {
    #[error("Invalid hex color format: {0}")]
    InvalidHex(String),
}

/// Parse a `#RRGGBB` or `#RGB` hex token into a terminal color.
pub fn parse_hex(hex: &str) -> Result<Color, ColorParseError> {
    let hex = hex.trim();
    if !hex.starts_with('#') {
        return Err(ColorParseError::InvalidHex(hex.to_string()));
    }
    if hex.len() == 7 {
        // #RRGGBB format
        let r = u8::from_str_radix(&hex[1..3], 16)
            .map_err(|_| ColorParseError::InvalidHex(hex.to_string()))?;
        let g = u8::from_str_radix(&hex[3..5], 16)
            .map_err(|_| ColorParseError::InvalidHex(hex.to_string()))?;
        let b = u8::from_str_radix(&hex[5..7], 16)
            .map_err(|_| ColorParseError::InvalidHex(hex.to_string()))?;
        Ok(Color::Rgb(r, g, b))
    } else if hex.len() == 4 {
        // #RGB format - expand to #RRGGBB
        let r = u8::from_str_radix(&hex[1..2], 16)
            .map_err(|_| ColorParseError::InvalidHex(hex.to_string()))?;
        let g = u8::from_str_radix(&hex[2..3], 16)
            .map_err(|_| ColorParseError::InvalidHex(hex.to_string()))?;
        let b = u8::from_str_radix(&hex[3..4], 16)
            .map_err(|_| ColorParseError::InvalidHex(hex.to_string()))?;
        Ok(Color::Rgb(r * 17, g * 17, b * 17)) // 17 = 255/15
    } else {
        Err(ColorParseError::InvalidHex(hex.to_string()))
    }
}

/// Resolve a hex token from a theme definition.
/// A bad token must not abort a render, so fall back to `Color::Reset`.
pub(crate) fn hex(token: &str) -> Color {
    match parse_hex(token) {
        Ok(color) => color,
        Err(e) => {
            error!("Bad theme color token: {}", e);
            Color::Reset
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_colors() {
        assert_eq!(parse_hex("#ff0000").unwrap(), Color::Rgb(255, 0, 0));
        assert_eq!(parse_hex("#FFB000").unwrap(), Color::Rgb(255, 176, 0));
        assert_eq!(parse_hex("#1a1408").unwrap(), Color::Rgb(26, 20, 8));
        assert_eq!(parse_hex("#f00").unwrap(), Color::Rgb(255, 0, 0));
        assert_eq!(parse_hex("#0f0").unwrap(), Color::Rgb(0, 255, 0));
    }

    #[test]
    fn test_invalid_tokens() {
        assert!(parse_hex("#gg0000").is_err());
        assert!(parse_hex("#ff00").is_err());
        assert!(parse_hex("amber").is_err());
        assert!(parse_hex("").is_err());
    }

    #[test]
    fn test_bad_token_falls_back_to_reset() {
        assert_eq!(hex("#not-a-color"), Color::Reset);
    }
}
