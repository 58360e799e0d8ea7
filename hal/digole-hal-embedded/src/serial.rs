//! UART transport

use digole_hal::{LinkError, Transport, UartConfig};
use embedded_hal::delay::DelayNs;
use embedded_io::{Read, ReadReady, Write};

use crate::error::io_error;

/// Transport over a UART
///
/// The UART must already run at `config.baudrate`; switching the module
/// away from its power-up rate is done with the `SB` command.
pub struct SerialTransport<U, D> {
    uart: U,
    delay: D,
    config: UartConfig,
}

impl<U, D> SerialTransport<U, D>
where
    U: Read + Write + ReadReady,
    D: DelayNs,
{
    /// Create a transport over a UART already running at `config.baudrate`
    pub fn new(uart: U, delay: D, config: UartConfig) -> Self {
        debug!("uart transport at {} baud", config.baudrate);
        Self {
            uart,
            delay,
            config,
        }
    }

    /// Current link configuration
    pub fn config(&self) -> &UartConfig {
        &self.config
    }

    /// Record a baud rate change made on the underlying UART
    pub fn set_baudrate(&mut self, baudrate: u32) {
        debug!("uart baud rate now {}", baudrate);
        self.config.baudrate = baudrate;
    }

    /// Give back the UART and delay
    pub fn release(self) -> (U, D) {
        (self.uart, self.delay)
    }
}

impl<U, D> Transport for SerialTransport<U, D>
where
    U: Read + Write + ReadReady,
    D: DelayNs,
{
    fn write_bytes(&mut self, data: &[u8]) -> Result<usize, LinkError> {
        let mut sent = 0;
        while sent < data.len() {
            let n = self.uart.write(&data[sent..]).map_err(io_error)?;
            if n == 0 {
                warn!("uart stalled after {} of {} bytes", sent, data.len());
                break;
            }
            sent += n;
        }
        self.uart.flush().map_err(io_error)?;
        Ok(sent)
    }

    fn read_byte(&mut self) -> Result<u8, LinkError> {
        let Self {
            uart,
            delay,
            config,
        } = self;
        config
            .read_timeout
            .wait_until(delay, || uart.read_ready().map_err(io_error))?;

        let mut byte = [0u8];
        match uart.read(&mut byte).map_err(io_error)? {
            1 => Ok(byte[0]),
            _ => Err(LinkError::Other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::convert::Infallible;
    use digole_hal::ReadTimeout;
    use std::collections::VecDeque;
    use std::vec::Vec;

    /// UART that accepts a limited number of bytes per write
    #[derive(Default)]
    struct MockUart {
        tx: Vec<u8>,
        rx: VecDeque<u8>,
        max_write: usize,
    }

    impl embedded_io::ErrorType for MockUart {
        type Error = Infallible;
    }

    impl Write for MockUart {
        fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
            let n = buf.len().min(self.max_write);
            self.tx.extend_from_slice(&buf[..n]);
            Ok(n)
        }

        fn flush(&mut self) -> Result<(), Self::Error> {
            Ok(())
        }
    }

    impl Read for MockUart {
        fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
            let mut n = 0;
            while n < buf.len() {
                match self.rx.pop_front() {
                    Some(byte) => buf[n] = byte,
                    None => break,
                }
                n += 1;
            }
            Ok(n)
        }
    }

    impl ReadReady for MockUart {
        fn read_ready(&mut self) -> Result<bool, Self::Error> {
            Ok(!self.rx.is_empty())
        }
    }

    struct NoopDelay;

    impl DelayNs for NoopDelay {
        fn delay_ns(&mut self, _ns: u32) {}
    }

    fn transport(uart: MockUart) -> SerialTransport<MockUart, NoopDelay> {
        let config = UartConfig {
            read_timeout: ReadTimeout::Millis(1),
            ..Default::default()
        };
        SerialTransport::new(uart, NoopDelay, config)
    }

    #[test]
    fn test_write_loops_over_partial_writes() {
        let uart = MockUart {
            max_write: 3,
            ..Default::default()
        };
        let mut link = transport(uart);

        assert_eq!(link.write_bytes(b"TTHello\r"), Ok(8));
        let (uart, _) = link.release();
        assert_eq!(uart.tx, b"TTHello\r");
    }

    #[test]
    fn test_write_stops_when_port_is_full() {
        let mut link = transport(MockUart::default());
        assert_eq!(link.write_bytes(b"CL"), Ok(0));
    }

    #[test]
    fn test_read_u16() {
        let uart = MockUart {
            rx: [0x12, 0x34].into_iter().collect(),
            ..Default::default()
        };
        let mut link = transport(uart);
        assert_eq!(link.read_u16(), Ok(0x1234));
    }

    #[test]
    fn test_read_times_out() {
        let mut link = transport(MockUart::default());
        assert_eq!(link.read_byte(), Err(LinkError::ReadTimeout));
    }
}
