//! Display settings

use digole_hal::Transport;
use digole_protocol::{Color, Command, DrawMode, Orientation};
use embedded_hal::delay::DelayNs;

use crate::driver::Digole;
use crate::error::Error;

impl<T: Transport, D: DelayNs> Digole<T, D> {
    /// Show or hide the text cursor
    pub fn set_cursor(&mut self, enabled: bool) -> Result<(), Error> {
        self.send(Command::SetCursor(enabled))
    }

    /// Enable or disable the configuration screen shown at power-up
    pub fn set_display_config(&mut self, enabled: bool) -> Result<(), Error> {
        self.send(Command::SetDisplayConfig(enabled))
    }

    /// Rotate the screen
    pub fn set_rotation(&mut self, orientation: Orientation) -> Result<(), Error> {
        self.send(Command::SetRotation(orientation))
    }

    /// Set the contrast on modules that support it
    pub fn set_contrast(&mut self, value: u8) -> Result<(), Error> {
        self.send(Command::SetContrast(value))
    }

    /// Set the backlight brightness, 0 to 100
    pub fn set_backlight(&mut self, value: u8) -> Result<(), Error> {
        self.send(Command::SetBacklight(value))
    }

    /// Set the foreground colour from raw 6-bit channels (0-63)
    pub fn set_color_channels(&mut self, r: u8, g: u8, b: u8) -> Result<(), Error> {
        self.send(Command::SetColorChannels { r, g, b })
    }

    /// Set the foreground colour from a packed 3-3-2 byte
    pub fn set_color_index(&mut self, color: u8) -> Result<(), Error> {
        self.send(Command::SetColorIndex(color))
    }

    /// Set the foreground colour at full (18-bit) depth
    pub fn set_color(&mut self, color: Color) -> Result<(), Error> {
        let [r, g, b] = color.to_rgb666();
        self.set_color_channels(r, g, b)
    }

    /// Set the foreground colour reduced to 8 bits
    pub fn set_color_rgb332(&mut self, color: Color) -> Result<(), Error> {
        self.set_color_index(color.to_rgb332())
    }

    /// Use the current foreground colour as the background colour
    pub fn set_background_color(&mut self) -> Result<(), Error> {
        self.send(Command::SetBackgroundColor)
    }

    /// Set how drawn pixels combine with the screen
    pub fn set_draw_mode(&mut self, mode: DrawMode) -> Result<(), Error> {
        self.send(Command::SetDrawMode(mode))
    }
}

#[cfg(test)]
mod tests {
    use crate::mock::MockTransport;
    use crate::{Color, Digole, DrawMode, Orientation};

    #[test]
    fn test_set_color_shifts_channels() {
        let mut display = Digole::new(MockTransport::new());
        display.set_color(Color::new(255, 128, 7)).unwrap();

        let (transport, _) = display.release();
        assert_eq!(transport.writes, [[b'E', b'S', b'C', 63, 32, 1].to_vec()]);
    }

    #[test]
    fn test_set_color_8bit() {
        let mut display = Digole::new(MockTransport::new());
        display.set_color_rgb332(Color::GREEN).unwrap();

        let (transport, _) = display.release();
        assert_eq!(transport.writes, [b"SC\x1C".to_vec()]);
    }

    #[test]
    fn test_settings_sequence() {
        let mut display = Digole::new(MockTransport::new());
        display.set_cursor(false).unwrap();
        display.set_rotation(Orientation::Rot180).unwrap();
        display.set_backlight(50).unwrap();
        display.set_draw_mode(DrawMode::Not).unwrap();
        display.set_background_color().unwrap();

        let (transport, _) = display.release();
        assert_eq!(transport.written(), b"CS0SD2BL\x32DM!BGC");
        assert_eq!(transport.writes.len(), 5);
    }
}
