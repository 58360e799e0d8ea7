//! embedded-graphics support
//!
//! Every pixel becomes one `DP` frame with its colour packed to 3-3-2, so
//! primitives drawn pixel by pixel are slow over a serial link. Solid fills
//! are sent as one colour change plus one filled rectangle.

use digole_hal::Transport;
use digole_protocol::Color;
use embedded_graphics::draw_target::DrawTarget;
use embedded_graphics::geometry::{Dimensions, OriginDimensions, Point, Size};
use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::primitives::{ContainsPoint, Rectangle};
use embedded_graphics::Pixel;
use embedded_hal::delay::DelayNs;

use crate::driver::Digole;
use crate::error::Error;

impl<T: Transport, D: DelayNs> OriginDimensions for Digole<T, D> {
    fn size(&self) -> Size {
        Size::new(self.config().width as u32, self.config().height as u32)
    }
}

impl<T: Transport, D: DelayNs> DrawTarget for Digole<T, D> {
    type Color = Rgb888;
    type Error = Error;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        let bounds = self.bounding_box();
        for Pixel(point, color) in pixels {
            if !bounds.contains(point) {
                continue;
            }
            let color = Color::from(color).to_rgb332();
            self.draw_pixel(point.x as u16, point.y as u16, color)?;
        }
        Ok(())
    }

    fn fill_solid(&mut self, area: &Rectangle, color: Self::Color) -> Result<(), Self::Error> {
        let area = area.intersection(&self.bounding_box());
        let Some(bottom_right) = area.bottom_right() else {
            return Ok(());
        };

        let Point { x, y } = area.top_left;
        self.set_color(Color::from(color))?;
        // Rectangle corners are inclusive
        self.draw_rect(
            x as u16,
            y as u16,
            (bottom_right.x - x) as u16,
            (bottom_right.y - y) as u16,
            true,
        )
    }
}
