//! Canvas implementation over an embedded-graphics draw target

use embedded_graphics::draw_target::DrawTarget;
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::{Drawable, Point as EgPoint, Primitive};
use embedded_graphics::primitives::{Circle, Line, PrimitiveStyle};
use timeface_core::{Canvas, Ink, Point};

/// Mapping from face ink to panel colors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette<C> {
    /// Color for `Ink::Black` (lines, pupils)
    pub ink: C,
    /// Color for `Ink::White` (background)
    pub paper: C,
}

impl<C: Copy> Palette<C> {
    pub const fn new(ink: C, paper: C) -> Self {
        Self { ink, paper }
    }

    /// Resolve an ink to a panel color
    pub fn color(&self, ink: Ink) -> C {
        match ink {
            Ink::Black => self.ink,
            Ink::White => self.paper,
        }
    }
}

impl Palette<BinaryColor> {
    /// Monochrome panel where a set pixel is ink
    pub const fn binary() -> Self {
        Self::new(BinaryColor::On, BinaryColor::Off)
    }
}

/// `Canvas` backed by an embedded-graphics `DrawTarget`
///
/// Lines are drawn with the current stroke color and width. Circles of
/// radius `r` cover `2r + 1` pixels across, centred on the given point.
pub struct GraphicsCanvas<'a, D: DrawTarget> {
    target: &'a mut D,
    palette: Palette<D::Color>,
    stroke_color: D::Color,
    stroke_width: u32,
    fill_color: D::Color,
}

impl<'a, D: DrawTarget> GraphicsCanvas<'a, D> {
    /// Wrap a draw target
    ///
    /// Stroke and fill start as ink with a 1 unit stroke.
    pub fn new(target: &'a mut D, palette: Palette<D::Color>) -> Self {
        Self {
            target,
            palette,
            stroke_color: palette.ink,
            stroke_width: 1,
            fill_color: palette.ink,
        }
    }

    /// Palette in use
    pub fn palette(&self) -> &Palette<D::Color> {
        &self.palette
    }

    /// Current stroke width
    pub fn stroke_width(&self) -> u32 {
        self.stroke_width
    }
}

fn to_eg(point: Point) -> EgPoint {
    EgPoint::new(point.x, point.y)
}

impl<D: DrawTarget> Canvas for GraphicsCanvas<'_, D> {
    type Error = D::Error;

    fn set_stroke_color(&mut self, ink: Ink) {
        self.stroke_color = self.palette.color(ink);
    }

    fn set_stroke_width(&mut self, width: u32) {
        self.stroke_width = width;
    }

    fn set_fill_color(&mut self, ink: Ink) {
        self.fill_color = self.palette.color(ink);
    }

    fn draw_line(&mut self, from: Point, to: Point) -> Result<(), Self::Error> {
        Line::new(to_eg(from), to_eg(to))
            .into_styled(PrimitiveStyle::with_stroke(self.stroke_color, self.stroke_width))
            .draw(&mut *self.target)
    }

    fn fill_circle(&mut self, center: Point, radius: u32) -> Result<(), Self::Error> {
        let diameter = radius.saturating_mul(2).saturating_add(1);
        Circle::with_center(to_eg(center), diameter)
            .into_styled(PrimitiveStyle::with_fill(self.fill_color))
            .draw(&mut *self.target)
    }
}
