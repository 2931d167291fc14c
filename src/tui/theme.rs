use std::collections::HashMap;

use ratatui::style::Color;

use crate::model::UiConfig;

/// Parsed color theme for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    pub background: Color,
    pub text: Color,
    pub text_bright: Color,
    pub highlight: Color,
    pub dim: Color,
    pub red: Color,
    pub green: Color,
    pub selection_bg: Color,
    /// Fixed badge colors from config; everything else is hashed
    pub category_colors: HashMap<String, Color>,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            background: Color::Rgb(0x0C, 0x00, 0x1B),
            text: Color::Rgb(0xB0, 0xAA, 0xFF),
            text_bright: Color::Rgb(0xFF, 0xFF, 0xFF),
            highlight: Color::Rgb(0xFB, 0x41, 0x96),
            dim: Color::Rgb(0x7D, 0x78, 0xBF),
            red: Color::Rgb(0xFF, 0x44, 0x44),
            green: Color::Rgb(0x44, 0xFF, 0x88),
            selection_bg: Color::Rgb(0x3D, 0x14, 0x38),
            category_colors: HashMap::new(),
        }
    }
}

/// Parse a hex color string like "#FF4444" into an RGB Color
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

/// Deterministic color for any string.
///
/// Runs the `h = c + (h << 5) - h` hash over UTF-16 code units in 32-bit
/// wrapping arithmetic and takes the low three bytes as red, green, blue.
pub fn string_to_color(s: &str) -> Color {
    let hash = s.encode_utf16().fold(0i32, |h, unit| {
        i32::from(unit).wrapping_add(h.wrapping_shl(5).wrapping_sub(h))
    });
    let byte = |i: u32| ((hash >> (i * 8)) & 0xFF) as u8;
    Color::Rgb(byte(0), byte(1), byte(2))
}

/// Whether text on top of `color` should be dark rather than light
pub fn is_light(color: Color) -> bool {
    match color {
        Color::Rgb(r, g, b) => {
            let luma = 299 * u32::from(r) + 587 * u32::from(g) + 114 * u32::from(b);
            luma > 140_000
        }
        _ => false,
    }
}

impl Theme {
    /// Create a theme from UI config, falling back to defaults
    pub fn from_config(ui: &UiConfig) -> Self {
        let mut theme = Theme::default();

        for (key, value) in &ui.colors {
            if let Some(color) = parse_hex_color(value) {
                match key.as_str() {
                    "background" => theme.background = color,
                    "text" => theme.text = color,
                    "text_bright" => theme.text_bright = color,
                    "highlight" => theme.highlight = color,
                    "dim" => theme.dim = color,
                    "red" => theme.red = color,
                    "green" => theme.green = color,
                    "selection_bg" => theme.selection_bg = color,
                    _ => log::warn!("event=theme_unknown_color key={}", key),
                }
            }
        }

        for (category, value) in &ui.category_colors {
            if let Some(color) = parse_hex_color(value) {
                theme.category_colors.insert(category.clone(), color);
            }
        }

        theme
    }

    /// Badge background for a category
    pub fn category_color(&self, category: &str) -> Color {
        self.category_colors
            .get(category)
            .copied()
            .unwrap_or_else(|| string_to_color(category))
    }

    /// Readable text color on a category badge
    pub fn category_fg(&self, category: &str) -> Color {
        if is_light(self.category_color(category)) {
            self.background
        } else {
            self.text_bright
        }
    }
}
