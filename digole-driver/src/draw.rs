//! Drawing commands
//!
//! Coordinates and sizes travel as varints, so every value must be at most
//! [`VARINT_MAX`](digole_protocol::VARINT_MAX); larger values fail with
//! [`Error::ParameterOutOfRange`] before anything is written.

use digole_hal::Transport;
use digole_protocol::{BitmapDepth, Command};
use embedded_hal::delay::DelayNs;

use crate::driver::Digole;
use crate::error::Error;

impl<T: Transport, D: DelayNs> Digole<T, D> {
    /// Clear the screen to the background colour
    pub fn clear_screen(&mut self) -> Result<(), Error> {
        self.send(Command::Clear)
    }

    /// Draw a pixel; `color` is passed through as a raw byte
    pub fn draw_pixel(&mut self, x: u16, y: u16, color: u8) -> Result<(), Error> {
        self.send(Command::DrawPixel { x, y, color })
    }

    /// Draw a line from `(x0, y0)` to `(x1, y1)`
    pub fn draw_line(&mut self, x0: u16, y0: u16, x1: u16, y1: u16) -> Result<(), Error> {
        self.send(Command::DrawLine { x0, y0, x1, y1 })
    }

    /// Draw a line from the graphics cursor to `(x, y)`
    pub fn draw_line_to(&mut self, x: u16, y: u16) -> Result<(), Error> {
        self.send(Command::DrawLineTo { x, y })
    }

    /// Draw a rectangle with corners `(x, y)` and `(x + w, y + h)`
    pub fn draw_rect(&mut self, x: u16, y: u16, w: u16, h: u16, filled: bool) -> Result<(), Error> {
        self.send(Command::DrawRect { x, y, w, h, filled })
    }

    /// Draw a circle of radius `r` centred on `(x, y)`
    pub fn draw_circle(&mut self, x: u16, y: u16, r: u16, filled: bool) -> Result<(), Error> {
        self.send(Command::DrawCircle { x, y, r, filled })
    }

    /// Draw a `w` x `h` image at `(x, y)`
    ///
    /// `data` must hold at least [`BitmapDepth::data_len`] bytes; exactly
    /// that many are sent after the header. Nothing is sent if the header
    /// or the data is rejected.
    pub fn draw_bitmap(
        &mut self,
        depth: BitmapDepth,
        x: u16,
        y: u16,
        w: u16,
        h: u16,
        data: &[u8],
    ) -> Result<(), Error> {
        // Encoding the header first bounds w and h by the varint range
        let header = Command::BitmapHeader { depth, x, y, w, h }.to_frame()?;
        let pixels = depth
            .data_len(w, h)
            .and_then(|len| data.get(..len))
            .ok_or(Error::ParameterOutOfRange)?;

        self.write_all(header.as_bytes())?;
        if !pixels.is_empty() {
            self.write_all(pixels)?;
        }
        Ok(())
    }

    /// Move the area between `(x0, y0)` and `(x1, y1)` by `(dx, dy)`
    pub fn move_area(
        &mut self,
        x0: u16,
        y0: u16,
        x1: u16,
        y1: u16,
        dx: i8,
        dy: i8,
    ) -> Result<(), Error> {
        self.send(Command::MoveArea {
            x0,
            y0,
            x1,
            y1,
            dx,
            dy,
        })
    }

    /// Set the dash pattern used for lines, one bit per pixel
    pub fn set_line_pattern(&mut self, pattern: u8) -> Result<(), Error> {
        self.send(Command::SetLinePattern(pattern))
    }

    /// Move the graphics cursor
    pub fn set_graphics_position(&mut self, x: u16, y: u16) -> Result<(), Error> {
        self.send(Command::SetGraphicsPosition { x, y })
    }

    /// Restrict drawing to a window
    pub fn set_draw_window(&mut self, x: u16, y: u16, w: u16, h: u16) -> Result<(), Error> {
        self.send(Command::SetDrawWindow { x, y, w, h })
    }

    /// Make the whole screen the draw window again
    pub fn reset_draw_window(&mut self) -> Result<(), Error> {
        self.send(Command::ResetDrawWindow)
    }

    /// Clear the draw window with the background colour
    pub fn clear_draw_window(&mut self) -> Result<(), Error> {
        self.send(Command::ClearDrawWindow)
    }
}
