//! Display handle and frame transmission

use digole_hal::Transport;
use digole_protocol::Command;
use embedded_hal::delay::DelayNs;

use crate::config::DigoleConfig;
use crate::error::Error;

/// Delay that returns immediately
///
/// Used when no upload pacing is needed.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDelay;

impl DelayNs for NoDelay {
    fn delay_ns(&mut self, _ns: u32) {}
}

/// Digole display module
///
/// Generic over the link it talks through. `D` paces uploads; with
/// [`NoDelay`] they run as fast as the transport allows.
pub struct Digole<T, D = NoDelay> {
    transport: T,
    delay: D,
    config: DigoleConfig,
}

impl<T: Transport> Digole<T, NoDelay> {
    /// Create a driver without upload pacing
    pub fn new(transport: T) -> Self {
        Self::with_delay(transport, NoDelay, DigoleConfig::unpaced())
    }
}

impl<T: Transport, D: DelayNs> Digole<T, D> {
    /// Create a driver that paces uploads with `delay`
    pub fn with_delay(transport: T, delay: D, config: DigoleConfig) -> Self {
        Self {
            transport,
            delay,
            config,
        }
    }

    /// The active configuration
    pub fn config(&self) -> &DigoleConfig {
        &self.config
    }

    /// Access the underlying transport
    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    /// Release the transport and delay
    pub fn release(self) -> (T, D) {
        (self.transport, self.delay)
    }

    /// Encode and write one command
    pub fn send(&mut self, command: Command) -> Result<(), Error> {
        let frame = command.to_frame()?;
        self.write_all(frame.as_bytes())
    }

    /// Write bytes in one transport call, failing on a short write
    pub(crate) fn write_all(&mut self, bytes: &[u8]) -> Result<(), Error> {
        trace!("tx {=[u8]}", bytes);
        let written = self.transport.write_bytes(bytes)?;
        if written != bytes.len() {
            warn!("short write: {} of {} bytes", written, bytes.len());
            return Err(Error::ShortWrite {
                expected: bytes.len(),
                written,
            });
        }
        Ok(())
    }

    /// Write one byte, failing if the transport did not take it
    pub(crate) fn write_one(&mut self, byte: u8) -> Result<(), Error> {
        let written = self.transport.write_byte(byte)?;
        if written != 1 {
            warn!("byte not accepted");
            return Err(Error::ShortWrite {
                expected: 1,
                written,
            });
        }
        Ok(())
    }

    pub(crate) fn read_byte(&mut self) -> Result<u8, Error> {
        Ok(self.transport.read_byte()?)
    }

    pub(crate) fn read_u16(&mut self) -> Result<u16, Error> {
        Ok(self.transport.read_u16()?)
    }

    pub(crate) fn pause_ms(&mut self, ms: u32) {
        if ms > 0 {
            self.delay.delay_ms(ms);
        }
    }

    /// Write upload data at a pace the module's flash can absorb
    ///
    /// Pauses before every burst; with a per-byte delay the burst is sent
    /// one byte at a time, otherwise in a single write.
    pub(crate) fn write_paced(&mut self, data: &[u8]) -> Result<(), Error> {
        let burst_len = (self.config.upload_burst_len as usize).max(1);
        let byte_delay = self.config.upload_byte_delay_ms;

        for burst in data.chunks(burst_len) {
            self.pause_ms(self.config.upload_burst_pause_ms);
            if byte_delay == 0 {
                self.write_all(burst)?;
            } else {
                for &byte in burst {
                    self.delay.delay_ms(byte_delay);
                    self.write_one(byte)?;
                }
            }
        }
        Ok(())
    }
}
