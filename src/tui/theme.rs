use ratatui::style::Color;

use crate::model::UiConfig;

/// Parsed color theme for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    pub text: Color,
    pub title: Color,
    pub highlight: Color,
    pub dim: Color,
    pub number: Color,
    pub help: Color,
    pub link: Color,
    pub red: Color,
    pub yellow: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            text: Color::Reset,
            title: Color::Indexed(170),
            highlight: Color::Indexed(212),
            dim: Color::Indexed(240),
            number: Color::Indexed(243),
            help: Color::Indexed(241),
            link: Color::Indexed(81),
            red: Color::Indexed(196),
            yellow: Color::Indexed(214),
        }
    }
}

/// Parse a hex color string like "#FF4444" into an RGB Color
fn parse_hex_color(hex: &str) -> Option<Color> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(hex.get(0..2)?, 16).ok()?;
    let g = u8::from_str_radix(hex.get(2..4)?, 16).ok()?;
    let b = u8::from_str_radix(hex.get(4..6)?, 16).ok()?;
    Some(Color::Rgb(r, g, b))
}

impl Theme {
    /// Defaults with `[ui.colors]` overrides applied. Unknown keys and bad
    /// hex values are ignored.
    pub fn from_config(ui: &UiConfig) -> Self {
        let mut theme = Theme::default();
        for (key, value) in &ui.colors {
            let Some(color) = parse_hex_color(value) else {
                continue;
            };
            match key.as_str() {
                "text" => theme.text = color,
                "title" => theme.title = color,
                "highlight" => theme.highlight = color,
                "dim" => theme.dim = color,
                "number" => theme.number = color,
                "help" => theme.help = color,
                "link" => theme.link = color,
                "red" => theme.red = color,
                "yellow" => theme.yellow = color,
                _ => {}
            }
        }
        theme
    }
}
