//! Drawing surface trait for the face renderer

use crate::geometry::Point;

/// Colors the face is drawn with
///
/// The face is monochrome: black ink on white paper. Display crates map
/// these onto whatever pixel format the panel uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Ink {
    #[default]
    Black,
    White,
}

/// Trait for the surface a face is drawn onto
///
/// This is the full set of primitives the renderer needs. Stroke settings
/// persist until changed and apply to every following `draw_line`.
pub trait Canvas {
    /// Error reported by the underlying display
    type Error;

    /// Set the color used for lines
    fn set_stroke_color(&mut self, ink: Ink);

    /// Set the line thickness in display units
    fn set_stroke_width(&mut self, width: u32);

    /// Set the color used for filled shapes
    fn set_fill_color(&mut self, ink: Ink);

    /// Draw a straight line between two points
    fn draw_line(&mut self, from: Point, to: Point) -> Result<(), Self::Error>;

    /// Fill a circle
    ///
    /// - `center`: Circle center
    /// - `radius`: Radius in display units (0 draws a single dot)
    fn fill_circle(&mut self, center: Point, radius: u32) -> Result<(), Self::Error>;
}

/// A single recorded canvas call
#[cfg(test)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawOp {
    StrokeColor(Ink),
    StrokeWidth(u32),
    FillColor(Ink),
    Line(Point, Point),
    Circle(Point, u32),
}

/// Canvas that records every call (for testing)
#[cfg(test)]
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    pub ops: heapless::Vec<DrawOp, 128>,
}

#[cfg(test)]
impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    fn record(&mut self, op: DrawOp) {
        self.ops.push(op).expect("recording canvas full");
    }

    /// All recorded line segments, in draw order
    pub fn lines(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        self.ops.iter().filter_map(|op| match *op {
            DrawOp::Line(a, b) => Some((a, b)),
            _ => None,
        })
    }

    /// All recorded filled circles, in draw order
    pub fn circles(&self) -> impl Iterator<Item = (Point, u32)> + '_ {
        self.ops.iter().filter_map(|op| match *op {
            DrawOp::Circle(c, r) => Some((c, r)),
            _ => None,
        })
    }
}

#[cfg(test)]
impl Canvas for RecordingCanvas {
    type Error = core::convert::Infallible;

    fn set_stroke_color(&mut self, ink: Ink) {
        self.record(DrawOp::StrokeColor(ink));
    }

    fn set_stroke_width(&mut self, width: u32) {
        self.record(DrawOp::StrokeWidth(width));
    }

    fn set_fill_color(&mut self, ink: Ink) {
        self.record(DrawOp::FillColor(ink));
    }

    fn draw_line(&mut self, from: Point, to: Point) -> Result<(), Self::Error> {
        self.record(DrawOp::Line(from, to));
        Ok(())
    }

    fn fill_circle(&mut self, center: Point, radius: u32) -> Result<(), Self::Error> {
        self.record(DrawOp::Circle(center, radius));
        Ok(())
    }
}
