use ratatui::style::Color;

use crate::model::UiConfig;

/// Parsed color theme for the TUI.
#[derive(Debug, Clone)]
pub struct Theme {
    pub background: Color,
    pub text: Color,
    pub text_bright: Color,
    pub dim: Color,
    /// The counting accent (progress ring, live count).
    pub accent: Color,
    /// Near-end pulse color.
    pub pulse: Color,
    pub red: Color,
    pub selection_bg: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            background: Color::Rgb(0x10, 0x14, 0x12),
            text: Color::Rgb(0xC8, 0xD6, 0xCE),
            text_bright: Color::Rgb(0xFF, 0xFF, 0xFF),
            dim: Color::Rgb(0x6E, 0x7D, 0x74),
            accent: Color::Rgb(0x34, 0xD3, 0x99),
            pulse: Color::Rgb(0xFF, 0xD7, 0x00),
            red: Color::Rgb(0xFF, 0x55, 0x44),
            selection_bg: Color::Rgb(0x1C, 0x33, 0x2A),
        }
    }
}

/// Parse a hex color string like "#34D399" into an RGB Color.
fn parse_hex_color(hex: &str) -> Option<Color> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::Rgb(r, g, b))
}

impl Theme {
    /// Create a theme from the `[ui.colors]` config table, falling back to
    /// defaults for anything absent or unparseable.
    pub fn from_config(ui: &UiConfig) -> Self {
        let mut theme = Theme::default();
        for (key, value) in &ui.colors {
            if let Some(color) = parse_hex_color(value) {
                match key.as_str() {
                    "background" => theme.background = color,
                    "text" => theme.text = color,
                    "text_bright" => theme.text_bright = color,
                    "dim" => theme.dim = color,
                    "accent" => theme.accent = color,
                    "pulse" => theme.pulse = color,
                    "red" => theme.red = color,
                    "selection_bg" => theme.selection_bg = color,
                    _ => {}
                }
            }
        }
        theme
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_hex() {
        assert_eq!(
            parse_hex_color("#34D399"),
            Some(Color::Rgb(0x34, 0xD3, 0x99))
        );
        assert_eq!(parse_hex_color("34D399"), None); // missing #
        assert_eq!(parse_hex_color("#34D3"), None); // too short
        assert_eq!(parse_hex_color("#GGGGGG"), None); // not hex
    }

    #[test]
    fn config_overrides_apply() {
        let mut ui = UiConfig::default();
        ui.colors.insert("accent".into(), "#112233".into());
        ui.colors.insert("bogus".into(), "#445566".into());

        let theme = Theme::from_config(&ui);
        assert_eq!(theme.accent, Color::Rgb(0x11, 0x22, 0x33));
        assert_eq!(theme.text, Theme::default().text);
    }
}
