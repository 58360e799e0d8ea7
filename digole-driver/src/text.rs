//! Text output

use core::fmt;

use digole_hal::Transport;
use digole_protocol::text::is_line_terminator;
use digole_protocol::{split_lines, Command, TextUnit};
use embedded_hal::delay::DelayNs;

use crate::driver::Digole;
use crate::error::Error;

impl<T: Transport, D: DelayNs> Digole<T, D> {
    /// Select a built-in or uploaded font by number
    pub fn set_font(&mut self, font: u8) -> Result<(), Error> {
        self.send(Command::SetFont(font))
    }

    /// Move the text cursor, in character cells or pixels
    pub fn set_text_position(&mut self, x: u16, y: u16, unit: TextUnit) -> Result<(), Error> {
        self.send(Command::SetTextPosition { x, y, unit })
    }

    /// Move the text cursor back one character
    pub fn backspace(&mut self) -> Result<(), Error> {
        self.send(Command::Backspace)
    }

    /// Shift the text cursor by a pixel offset
    pub fn set_text_position_offset(&mut self, dx: i8, dy: i8) -> Result<(), Error> {
        self.send(Command::SetTextPositionOffset { dx, dy })
    }

    /// Move the text cursor to the start of the next line
    pub fn new_line(&mut self) -> Result<(), Error> {
        self.send(Command::NewLine)
    }

    /// Print one byte
    ///
    /// `\n` and `\r` advance the line; anything else is printed as is.
    pub fn write_byte(&mut self, byte: u8) -> Result<usize, Error> {
        if is_line_terminator(byte) {
            self.new_line()?;
        } else {
            self.send(Command::TextChar(byte))?;
        }
        Ok(1)
    }

    /// Print a byte stream, breaking lines at `\n` and `\r`
    ///
    /// Returns the number of input bytes consumed, which is always the
    /// whole input on success.
    pub fn write_text(&mut self, text: &[u8]) -> Result<usize, Error> {
        for segment in split_lines(text) {
            let frame = segment.to_frame()?;
            self.write_all(frame.as_bytes())?;
        }
        Ok(text.len())
    }

    /// Print a string, breaking lines at `\n` and `\r`
    pub fn print(&mut self, text: &str) -> Result<(), Error> {
        self.write_text(text.as_bytes()).map(|_| ())
    }
}

impl<T: Transport, D: DelayNs> fmt::Write for Digole<T, D> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.print(s).map_err(|_e| {
            warn!("text write failed: {}", _e);
            fmt::Error
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::mock::MockTransport;
    use crate::{Digole, Error, LinkError, TextUnit};
    use core::fmt::Write;
    use std::vec::Vec;

    #[test]
    fn test_print_two_lines() {
        let mut display = Digole::new(MockTransport::new());
        display.print("Hello\nWorld").unwrap();

        let (transport, _) = display.release();
        assert_eq!(
            transport.writes,
            [
                b"TTHello\r".to_vec(),
                b"TRT".to_vec(),
                b"TTWorld\r".to_vec()
            ]
        );
    }

    #[test]
    fn test_crlf_is_one_advance() {
        let mut display = Digole::new(MockTransport::new());
        display.print("Hello\r\nWorld").unwrap();

        let (transport, _) = display.release();
        assert_eq!(transport.writes.len(), 3);
        assert_eq!(transport.written(), b"TTHello\rTRTTTWorld\r");
    }

    #[test]
    fn test_blank_line() {
        let mut display = Digole::new(MockTransport::new());
        display.print("a\n\nb").unwrap();

        let (transport, _) = display.release();
        assert_eq!(transport.written(), b"TTa\rTRTTRTTTb\r");
    }

    #[test]
    fn test_write_byte() {
        let mut display = Digole::new(MockTransport::new());
        assert_eq!(display.write_byte(b'A'), Ok(1));
        assert_eq!(display.write_byte(b'\n'), Ok(1));

        let (transport, _) = display.release();
        assert_eq!(transport.writes, [b"TTA\r".to_vec(), b"TRT".to_vec()]);
    }

    #[test]
    fn test_write_text_returns_input_len() {
        let mut display = Digole::new(MockTransport::new());
        assert_eq!(display.write_text(b"ab\r\n"), Ok(4));
        assert_eq!(display.write_text(b""), Ok(0));

        let (transport, _) = display.release();
        assert_eq!(transport.written(), b"TTab\rTRT");
    }

    #[test]
    fn test_long_line_split_into_runs() {
        let mut display = Digole::new(MockTransport::new());
        let line = [b'x'; 100];
        display.write_text(&line).unwrap();

        let (transport, _) = display.release();
        assert_eq!(transport.writes.len(), 2);
        assert_eq!(transport.writes[0].len(), 2 + 64 + 1);
        assert_eq!(transport.writes[1].len(), 2 + 36 + 1);
    }

    #[test]
    fn test_fmt_write() {
        let mut display = Digole::new(MockTransport::new());
        write!(display, "T={}C\nok", 21).unwrap();

        // How core::fmt splits the output into write_str calls is not fixed,
        // so check the printed text and where the line advance falls
        let (transport, _) = display.release();
        let mut printed = Vec::new();
        let mut advances = Vec::new();
        for frame in &transport.writes {
            if frame.as_slice() == b"TRT" {
                advances.push(printed.len());
            } else {
                assert_eq!(&frame[..2], b"TT");
                assert_eq!(frame.last(), Some(&b'\r'));
                printed.extend_from_slice(&frame[2..frame.len() - 1]);
            }
        }
        assert_eq!(printed, b"T=21Cok");
        assert_eq!(advances, [5]);
    }

    #[test]
    fn test_crlf_across_writes_is_two_advances() {
        let mut display = Digole::new(MockTransport::new());
        display.write_str("a\r").unwrap();
        display.write_str("\nb").unwrap();

        let (transport, _) = display.release();
        assert_eq!(transport.written(), b"TTa\rTRTTRTTTb\r");
    }

    #[test]
    fn test_fmt_write_error() {
        let mut transport = MockTransport::new();
        transport.write_error = Some(LinkError::Bus);
        let mut display = Digole::new(transport);

        assert!(write!(display, "x").is_err());
        assert_eq!(display.print("x"), Err(Error::Link(LinkError::Bus)));
    }

    #[test]
    fn test_cursor_commands() {
        let mut display = Digole::new(MockTransport::new());
        display.set_font(10).unwrap();
        display.set_text_position(2, 3, TextUnit::Character).unwrap();
        display.set_text_position(300, 3, TextUnit::Pixel).unwrap();
        display.set_text_position_offset(-1, 4).unwrap();
        display.backspace().unwrap();

        let (transport, _) = display.release();
        assert_eq!(
            transport.written(),
            b"SF\x0aTP\x02\x03ETP\xff\x2d\x03ETO\xff\x04ETB"
        );
    }
}
