//! The painting surface that frame renderers draw onto.
//!
//! Hosts implement [`Canvas`] on top of whatever 2D backend they have. The
//! calls mirror an HTML5 canvas context so such an implementation is
//! mostly forwarding.

use std::fmt;

use crate::model::pos::Pos;

pub use self::record::DrawCall;

mod record;

/// A 2D painting surface in playfield coordinates.
pub trait Canvas {
    /// Discard the current path and start a new one.
    fn begin_path(&mut self);

    /// Start a new sub-path at the given point.
    fn move_to(&mut self, pos: Pos);

    /// Add a straight line to the current sub-path.
    fn line_to(&mut self, pos: Pos);

    /// Add a quadratic bezier curve to the current sub-path.
    fn quadratic_curve_to(&mut self, ctrl: Pos, end: Pos);

    /// Add a cubic bezier curve to the current sub-path.
    fn bezier_curve_to(&mut self, ctrl1: Pos, ctrl2: Pos, end: Pos);

    /// Add a circular arc around `center` to the current path.
    ///
    /// Angles are in radians, measured from the positive x-axis towards the
    /// positive y-axis.
    fn arc(
        &mut self,
        center: Pos,
        radius: f32,
        start_angle: f32,
        end_angle: f32,
        anticlockwise: bool,
    );

    /// Outline the current path.
    fn stroke(&mut self, stroke: &Stroke);

    /// Fill the current path.
    fn fill(&mut self, colour: Colour);

    /// Fill a rectangle without touching the current path.
    fn fill_rect(&mut self, rect: Rect, colour: Colour);

    /// Draw text anchored at the given point.
    fn fill_text(&mut self, text: &str, pos: Pos, font: &Font, colour: Colour);
}

impl<C: Canvas + ?Sized> Canvas for &mut C {
    fn begin_path(&mut self) {
        (**self).begin_path();
    }

    fn move_to(&mut self, pos: Pos) {
        (**self).move_to(pos);
    }

    fn line_to(&mut self, pos: Pos) {
        (**self).line_to(pos);
    }

    fn quadratic_curve_to(&mut self, ctrl: Pos, end: Pos) {
        (**self).quadratic_curve_to(ctrl, end);
    }

    fn bezier_curve_to(&mut self, ctrl1: Pos, ctrl2: Pos, end: Pos) {
        (**self).bezier_curve_to(ctrl1, ctrl2, end);
    }

    fn arc(
        &mut self,
        center: Pos,
        radius: f32,
        start_angle: f32,
        end_angle: f32,
        anticlockwise: bool,
    ) {
        (**self).arc(center, radius, start_angle, end_angle, anticlockwise);
    }

    fn stroke(&mut self, stroke: &Stroke) {
        (**self).stroke(stroke);
    }

    fn fill(&mut self, colour: Colour) {
        (**self).fill(colour);
    }

    fn fill_rect(&mut self, rect: Rect, colour: Colour) {
        (**self).fill_rect(rect, colour);
    }

    fn fill_text(&mut self, text: &str, pos: Pos, font: &Font, colour: Colour) {
        (**self).fill_text(text, pos, font, colour);
    }
}

/// An RGB colour with opacity.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    /// Opacity in `[0, 1]`.
    pub a: f32,
}

impl Colour {
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// An opaque colour.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// An opaque colour from its `0xRRGGBB` representation.
    pub const fn hex(hex: u32) -> Self {
        Self::rgb((hex >> 16) as u8, (hex >> 8) as u8, hex as u8)
    }

    /// The same colour with the given opacity.
    pub const fn alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }
}

/// Formats as CSS colour, e.g. `rgba(18, 124, 255, 0.5)`.
impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self { r, g, b, a } = self;

        write!(f, "rgba({r}, {g}, {b}, {a})")
    }
}

/// Shape at the end of open sub-paths.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum LineCap {
    #[default]
    Butt,
    Round,
    Square,
}

/// Shape where two segments meet.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum LineJoin {
    #[default]
    Miter,
    Round,
    Bevel,
}

/// How to outline a path.
#[derive(Copy, Clone, Debug, PartialEq)]
#[must_use]
pub struct Stroke {
    pub colour: Colour,
    pub width: f32,
    pub cap: LineCap,
    pub join: LineJoin,
}

impl Stroke {
    /// A stroke with butt caps and miter joins.
    pub const fn new(colour: Colour, width: f32) -> Self {
        Self {
            colour,
            width,
            cap: LineCap::Butt,
            join: LineJoin::Miter,
        }
    }

    /// Use round caps and joins.
    pub const fn round(self) -> Self {
        Self {
            cap: LineCap::Round,
            join: LineJoin::Round,
            ..self
        }
    }
}

/// An axis-aligned rectangle with non-negative extent.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    /// Create a rectangle spanning from `(x, y)` by `width` and `height`.
    ///
    /// Negative extents grow left or upwards and are normalized.
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        let (x, width) = if width < 0.0 { (x + width, -width) } else { (x, width) };
        let (y, height) = if height < 0.0 { (y + height, -height) } else { (y, height) };

        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// Horizontal alignment of text relative to its anchor.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum TextAlign {
    #[default]
    Start,
    Center,
    End,
}

/// Text style.
#[derive(Clone, Debug, PartialEq)]
pub struct Font {
    pub family: &'static str,
    /// CSS font weight.
    pub weight: u16,
    /// Size in pixels.
    pub size: f32,
    pub align: TextAlign,
    /// Whether the anchor is the vertical center of the text instead of
    /// its baseline.
    pub middle: bool,
}

/// Formats as CSS font shorthand, e.g. `600 32px "Exo 2"`.
impl fmt::Display for Font {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}px \"{}\"", self.weight, self.size, self.family)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_normalizes_negative_extent() {
        let rect = Rect::new(10.0, 100.0, 28.0, -15.0);

        assert_eq!(rect, Rect::new(10.0, 85.0, 28.0, 15.0));
    }

    #[test]
    fn colour_formats() {
        assert_eq!(Colour::hex(0xdc8dba), Colour::rgb(220, 141, 186));
        assert_eq!(Colour::WHITE.alpha(0.5).to_string(), "rgba(255, 255, 255, 0.5)");
    }
}
