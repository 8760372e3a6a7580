//! Terminal colors with a plain-text fallback

use console::Style;

/// Colors used by command output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Red,
    Green,
    Yellow,
    Cyan,
    Blue,
    Magenta,
    Grey,
}

impl Color {
    fn style(self) -> Style {
        match self {
            Color::Red => Style::new().red(),
            Color::Green => Style::new().green(),
            Color::Yellow => Style::new().yellow(),
            Color::Cyan => Style::new().cyan(),
            Color::Blue => Style::new().blue(),
            Color::Magenta => Style::new().magenta(),
            Color::Grey => Style::new().black().bright(),
        }
    }

    /// Stand-in for a colored star when color is off
    fn star_glyph(self) -> Option<&'static str> {
        match self {
            Color::Yellow => Some("*"),
            Color::Cyan => Some("/"),
            Color::Grey => Some("."),
            _ => None,
        }
    }
}

/// Colors text, or keeps star grids readable when color is disabled
///
/// Stars are the only text whose meaning depends on color, so with color off
/// a lone `*` becomes a glyph per color and everything else is left as is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    enabled: bool,
}

impl Palette {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn paint(&self, text: &str, color: Color) -> String {
        if self.enabled {
            return color.style().apply_to(text).to_string();
        }
        match color.star_glyph() {
            Some(glyph) if text == "*" => glyph.to_string(),
            _ => text.to_string(),
        }
    }

    /// Print a colored line to stdout
    pub fn println(&self, text: &str, color: Color) {
        println!("{}", self.paint(text, color));
    }
}
