//! Frame rendering
//!
//! Host-side helpers: paint the paper background and draw the face onto a
//! draw target.

use embedded_graphics::draw_target::DrawTarget;
use embedded_graphics::geometry::Dimensions;
use rand_core::RngCore;
use timeface_core::{Bounds, TimeFace};

use crate::canvas::{GraphicsCanvas, Palette};

/// Face bounds covering the whole draw target
pub fn bounds_of<D: Dimensions>(target: &D) -> Bounds {
    let size = target.bounding_box().size;
    Bounds::new(
        i32::try_from(size.width).unwrap_or(i32::MAX),
        i32::try_from(size.height).unwrap_or(i32::MAX),
    )
}

/// Clear the target to paper and draw one frame of the face
pub fn render_frame<D, R>(
    face: &mut TimeFace<R>,
    target: &mut D,
    palette: Palette<D::Color>,
) -> Result<(), D::Error>
where
    D: DrawTarget,
    R: RngCore,
{
    target.clear(palette.paper)?;

    let mut canvas = GraphicsCanvas::new(target, palette);
    face.draw(&mut canvas)?;

    #[cfg(feature = "defmt")]
    defmt::trace!("Frame rendered");

    Ok(())
}

/// Render only if the face has changed since the last frame
///
/// Returns true if a frame was drawn.
pub fn render_if_dirty<D, R>(
    face: &mut TimeFace<R>,
    target: &mut D,
    palette: Palette<D::Color>,
) -> Result<bool, D::Error>
where
    D: DrawTarget,
    R: RngCore,
{
    if !face.is_dirty() {
        return Ok(false);
    }

    render_frame(face, target, palette)?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_graphics::mock_display::MockDisplay;
    use embedded_graphics::pixelcolor::BinaryColor;
    use embedded_graphics::prelude::Point;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;
    use timeface_core::{ClockTime, FaceConfig};

    fn display() -> MockDisplay<BinaryColor> {
        let mut display = MockDisplay::new();
        display.set_allow_overdraw(true);
        display.set_allow_out_of_bounds_drawing(true);
        display
    }

    fn face_for(display: &MockDisplay<BinaryColor>, hour: u8, minute: u8) -> TimeFace<SmallRng> {
        TimeFace::new(
            FaceConfig::default(),
            bounds_of(display),
            ClockTime::new(hour, minute),
            SmallRng::seed_from_u64(11),
        )
    }

    #[test]
    fn test_bounds_of_mock_display() {
        let display = display();
        assert_eq!(bounds_of(&display), Bounds::new(64, 64));
    }

    #[test]
    fn test_render_midnight() {
        let mut display = display();
        let mut face = face_for(&display, 0, 0);

        render_frame(&mut face, &mut display, Palette::binary()).unwrap();

        // Left eye at (17, 25), size 21: leans 2 up, pupil travels 6 up
        assert_eq!(display.get_pixel(Point::new(17, 17)), Some(BinaryColor::On));
        // Right eye mirrors it at x = 47
        assert_eq!(display.get_pixel(Point::new(47, 17)), Some(BinaryColor::On));
        // Background cleared to paper
        assert_eq!(display.get_pixel(Point::new(0, 63)), Some(BinaryColor::Off));
        assert!(!face.is_dirty());
    }

    #[test]
    fn test_render_if_dirty() {
        let mut display = display();
        let mut face = face_for(&display, 3, 17);

        assert!(render_if_dirty(&mut face, &mut display, Palette::binary()).unwrap());
        assert!(!render_if_dirty(&mut face, &mut display, Palette::binary()).unwrap());

        face.set_time(ClockTime::new(3, 18));
        assert!(render_if_dirty(&mut face, &mut display, Palette::binary()).unwrap());
    }

    #[test]
    fn test_same_minute_renders_same_pixels() {
        let mut first = display();
        let mut second = display();
        let mut face = face_for(&first, 11, 42);

        render_frame(&mut face, &mut first, Palette::binary()).unwrap();
        face.set_time(ClockTime::new(11, 42));
        render_frame(&mut face, &mut second, Palette::binary()).unwrap();

        assert_eq!(first, second);
    }
}
