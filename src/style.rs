use std::str::FromStr;

use crate::error::Error;

/// RGBA color with straight (non premultiplied) alpha, each channel in
/// `[0, 1]`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const BLACK: Color = Color::rgba(0.0, 0.0, 0.0, 1.0);
    pub const WHITE: Color = Color::rgba(1.0, 1.0, 1.0, 1.0);
    /// The color canvases are cleared to.
    pub const TRANSPARENT_WHITE: Color = Color::rgba(1.0, 1.0, 1.0, 0.0);

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Color { r, g, b, a }
    }
}

/// Parses `#RRGGBB` or `#RRGGBBAA`. The leading `#` is optional.
impl FromStr for Color {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.trim().trim_start_matches('#');
        if !(hex.len() == 6 || hex.len() == 8) || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(Error::InvalidColor(s.to_string()));
        }
        let channel = |i: usize| -> Result<f32, Error> {
            u8::from_str_radix(&hex[i..(i + 2)], 16)
                .map(|c| c as f32 / 255.0)
                .map_err(|_| Error::InvalidColor(s.to_string()))
        };
        let a = if hex.len() == 8 { channel(6)? } else { 1.0 };
        Ok(Color::rgba(channel(0)?, channel(2)?, channel(4)?, a))
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PaintKind {
    Fill,
    Stroke,
}

/// How a polygon or polyline is painted.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Style {
    pub color: Color,
    pub kind: PaintKind,
    /// Stroke width in pixels. Ignored for fills.
    pub width: f32,
    pub anti_alias: bool,
}

impl Style {
    pub fn fill(color: Color) -> Self {
        Style {
            color,
            kind: PaintKind::Fill,
            width: 0.0,
            anti_alias: true,
        }
    }

    pub fn stroke(color: Color, width: f32) -> Self {
        Style {
            color,
            kind: PaintKind::Stroke,
            width,
            anti_alias: true,
        }
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn with_width(mut self, width: f32) -> Self {
        self.width = width;
        self
    }

    pub fn with_anti_alias(mut self, anti_alias: bool) -> Self {
        self.anti_alias = anti_alias;
        self
    }
}

/// The four named styles used to draw a uv layout.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Styles {
    /// Outline of every polygon.
    pub internal_edges: Style,
    /// Boundary loops of the uv islands.
    pub border_edges: Style,
    /// Fill of polygons that wind counter-clockwise in uv space.
    pub front_facing: Style,
    /// Fill of polygons that wind clockwise in uv space.
    pub back_facing: Style,
}

impl Default for Styles {
    fn default() -> Self {
        Styles {
            internal_edges: Style::stroke(Color::BLACK, 2.0),
            border_edges: Style::stroke(Color::WHITE, 4.0),
            front_facing: Style::fill(Color::rgba(0.0, 0.0, 1.0, 0.5)),
            back_facing: Style::fill(Color::rgba(1.0, 0.0, 0.0, 0.5)),
        }
    }
}

impl Styles {
    /// The fill style for a polygon with the given winding.
    pub fn facing(&self, front_facing: bool) -> &Style {
        if front_facing {
            &self.front_facing
        } else {
            &self.back_facing
        }
    }

    pub fn with_anti_alias(self, anti_alias: bool) -> Self {
        Styles {
            internal_edges: self.internal_edges.with_anti_alias(anti_alias),
            border_edges: self.border_edges.with_anti_alias(anti_alias),
            front_facing: self.front_facing.with_anti_alias(anti_alias),
            back_facing: self.back_facing.with_anti_alias(anti_alias),
        }
    }
}

#[cfg(test)]
mod test {
    use super::{Color, PaintKind, Styles};
    use crate::macros::assert_float_eq;

    #[test]
    fn t_parse_color() {
        let c: Color = "#ff8000".parse().unwrap();
        assert_eq!(c, Color::rgba(1.0, 128.0 / 255.0, 0.0, 1.0));
        let c: Color = "00000080".parse().unwrap();
        assert_float_eq!(c.a as f64, 128.0 / 255.0, 1e-6);
        assert!("#fff".parse::<Color>().is_err());
        assert!("#gg0000".parse::<Color>().is_err());
        assert!("#ff00ééff".parse::<Color>().is_err());
        // Signs are not hex digits.
        assert!("#+f+f+f".parse::<Color>().is_err());
        assert!("-f00000".parse::<Color>().is_err());
    }

    #[test]
    fn t_default_styles() {
        let styles = Styles::default();
        assert_eq!(styles.internal_edges.kind, PaintKind::Stroke);
        assert_eq!(styles.internal_edges.width, 2.0);
        assert_eq!(styles.border_edges.width, 4.0);
        assert_eq!(styles.border_edges.color, Color::WHITE);
        assert_eq!(styles.facing(true).kind, PaintKind::Fill);
        assert_eq!(styles.facing(true).color.b, 1.0);
        assert_eq!(styles.facing(false).color.r, 1.0);
        let aliased = styles.with_anti_alias(false);
        assert!(!aliased.front_facing.anti_alias);
        assert!(!aliased.border_edges.anti_alias);
    }
}
