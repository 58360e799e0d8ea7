//! Character LCD pass-through and module link settings

use digole_hal::Transport;
use digole_protocol::{Command, LcdChip};
use embedded_hal::delay::DelayNs;

use crate::driver::Digole;
use crate::error::Error;

impl<T: Transport, D: DelayNs> Digole<T, D> {
    /// Select the controller of an attached character LCD
    pub fn set_lcd_chip(&mut self, chip: LcdChip) -> Result<(), Error> {
        self.send(Command::SetLcdChip(chip))
    }

    /// Set the character LCD geometry
    ///
    /// The standard HD44780 row start addresses are sent along.
    pub fn set_lcd_size(&mut self, cols: u8, rows: u8) -> Result<(), Error> {
        self.send(Command::SetLcdSize { cols, rows })
    }

    /// Send a command byte straight to the LCD controller
    pub fn send_raw_command(&mut self, command: u8) -> Result<(), Error> {
        self.send(Command::RawCommand(command))
    }

    /// Send a data byte straight to the LCD controller
    pub fn send_raw_data(&mut self, value: u8) -> Result<(), Error> {
        self.send(Command::RawData(value))
    }

    /// Drive the module's digital output pins
    pub fn digital_write(&mut self, value: u8) -> Result<(), Error> {
        self.send(Command::DigitalWrite(value))
    }

    /// Change the module's I2C address
    ///
    /// Takes effect immediately; later frames must go to the new address.
    pub fn set_i2c_address(&mut self, address: u8) -> Result<(), Error> {
        if address > 0x7F {
            return Err(Error::ParameterOutOfRange);
        }
        debug!("i2c address -> {=u8:#x}", address);
        self.send(Command::SetI2cAddress(address))
    }

    /// Change the module's UART baud rate
    ///
    /// The host port has to follow before the next frame.
    pub fn set_baud_rate(&mut self, baud: u32) -> Result<(), Error> {
        debug!("baud rate -> {}", baud);
        self.send(Command::SetBaudRate(baud))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockTransport;

    #[test]
    fn test_lcd_size_row_addresses() {
        let mut display = Digole::new(MockTransport::new());
        display.set_lcd_size(20, 4).unwrap();

        let (transport, _) = display.release();
        assert_eq!(
            transport.writes,
            [[b'S', b'T', b'C', b'R', 20, 4, 0x80, 0xC0, 0x94, 0xD4].to_vec()]
        );
    }

    #[test]
    fn test_pass_through() {
        let mut display = Digole::new(MockTransport::new());
        display.set_lcd_chip(LcdChip::Ks0108).unwrap();
        display.send_raw_command(0x01).unwrap();
        display.send_raw_data(b'A').unwrap();
        display.digital_write(0b101).unwrap();

        let (transport, _) = display.release();
        assert_eq!(transport.written(), b"SLCD1MCD\x01MDTADOUT\x05");
    }

    #[test]
    fn test_link_settings() {
        let mut display = Digole::new(MockTransport::new());
        display.set_i2c_address(0x29).unwrap();
        display.set_baud_rate(115200).unwrap();
        assert_eq!(display.set_i2c_address(0x80), Err(Error::ParameterOutOfRange));

        let (transport, _) = display.release();
        assert_eq!(
            transport.writes,
            [b"SI2CA\x29".to_vec(), b"SB115200\r\n".to_vec()]
        );
    }
}
