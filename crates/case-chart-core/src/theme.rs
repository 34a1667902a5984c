// File: crates/case-chart-core/src/theme.rs
// Summary: Colours and theme presets for chart rendering.

use std::fmt;

/// Opaque RGB colour, written as `#rrggbb`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rgb`, `#rrggbb` or one of the few named colours the renderers emit.
    pub fn parse(s: &str) -> Option<Color> {
        let s = s.trim();
        if let Some(hex) = s.strip_prefix('#') {
            let nibble = |i: usize| u8::from_str_radix(hex.get(i..i + 1)?, 16).ok();
            let byte = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();
            return match hex.len() {
                3 => Some(Color::rgb(nibble(0)? * 17, nibble(1)? * 17, nibble(2)? * 17)),
                6 => Some(Color::rgb(byte(0)?, byte(2)?, byte(4)?)),
                _ => None,
            };
        }
        match s.to_ascii_lowercase().as_str() {
            "black" => Some(Color::rgb(0, 0, 0)),
            "white" => Some(Color::rgb(255, 255, 255)),
            "red" => Some(Color::rgb(255, 0, 0)),
            "green" => Some(Color::rgb(0, 128, 0)),
            "steelblue" => Some(Color::rgb(70, 130, 180)),
            _ => None,
        }
    }

    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    pub background: Color,
    /// Axis lines, tick labels and titles.
    pub foreground: Color,
    /// Single-region line.
    pub line_stroke: Color,
    /// Minimum marker and its labels.
    pub low_point: Color,
    /// Maximum marker and its labels.
    pub high_point: Color,
    /// Per-region line colours of the combined chart, in region order.
    pub palette: [Color; 3],
}

impl Theme {
    pub fn classic() -> Self {
        Self {
            name: "classic",
            background: Color::rgb(255, 255, 255),
            foreground: Color::rgb(0, 0, 0),
            line_stroke: Color::rgb(70, 130, 180),
            low_point: Color::rgb(255, 0, 0),
            high_point: Color::rgb(0, 128, 0),
            palette: [
                Color::rgb(0x1f, 0x77, 0xb4),
                Color::rgb(0xff, 0x7f, 0x0e),
                Color::rgb(0x2c, 0xa0, 0x2c),
            ],
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: Color::rgb(18, 18, 20),
            foreground: Color::rgb(235, 235, 245),
            line_stroke: Color::rgb(64, 160, 255),
            low_point: Color::rgb(220, 80, 80),
            high_point: Color::rgb(40, 200, 120),
            palette: [
                Color::rgb(64, 160, 255),
                Color::rgb(255, 170, 60),
                Color::rgb(120, 220, 120),
            ],
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme::classic()
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::classic(), Theme::dark()]
}

/// Find a theme by its `name`, falling back to classic.
pub fn find(name: &str) -> Theme {
    presets()
        .into_iter()
        .find(|t| t.name.eq_ignore_ascii_case(name))
        .unwrap_or_else(Theme::classic)
}
