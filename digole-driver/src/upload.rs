//! Start screen, user font and flash transfers
//!
//! Start screens and fonts are written by the module into its own flash
//! while they arrive, so their payload is paced per
//! [`DigoleConfig`](crate::DigoleConfig). Flash writes go 1 KiB at a time and
//! the module acknowledges every chunk with [`XON`].

use digole_hal::Transport;
use digole_protocol::chunk::check_flash_range;
use digole_protocol::{Command, FlashChunks, FontSections};
use embedded_hal::delay::DelayNs;

use crate::driver::Digole;
use crate::error::Error;

/// Byte the module sends once a flash chunk is stored
pub const XON: u8 = 17;

impl<T: Transport, D: DelayNs> Digole<T, D> {
    /// Store `data` as the start screen shown at power-up
    ///
    /// `data` is a command stream, at most 65535 bytes.
    pub fn upload_start_screen(&mut self, data: &[u8]) -> Result<(), Error> {
        let len = u16::try_from(data.len()).map_err(|_| Error::ParameterOutOfRange)?;
        debug!("start screen upload: {} bytes", len);

        self.send(Command::StartScreenHeader { len })?;
        self.pause_ms(self.config().start_screen_settle_ms);
        self.write_paced(data)
    }

    /// Store a user font starting at `section`
    ///
    /// Fonts larger than one section continue into the following ones; the
    /// upload fails before sending anything if it would run past the last.
    pub fn upload_user_font(&mut self, section: u8, data: &[u8]) -> Result<(), Error> {
        let sections = FontSections::new(section, data)?;
        debug!("user font upload: {} bytes from section {}", data.len(), section);

        for (section, chunk) in sections {
            // Sections are at most 4 KiB
            let len = chunk.len() as u16;
            self.send(Command::UserFontHeader { section, len })?;
            self.pause_ms(self.config().font_settle_ms);
            self.write_paced(chunk)?;
        }
        Ok(())
    }

    /// Erase `len` bytes of flash starting at `address`
    pub fn flash_erase(&mut self, address: u32, len: u32) -> Result<(), Error> {
        check_flash_range(address, len as usize)?;
        self.send(Command::FlashErase { address, len })
    }

    /// Read flash into `buf`, starting at `address`
    pub fn flash_read(&mut self, address: u32, buf: &mut [u8]) -> Result<(), Error> {
        check_flash_range(address, buf.len())?;
        let len = buf.len() as u32;
        self.send(Command::FlashRead { address, len })?;

        for byte in buf.iter_mut() {
            *byte = self.read_byte()?;
        }
        Ok(())
    }

    /// Write `data` to flash starting at `address`
    ///
    /// Sent in 1 KiB chunks, each acknowledged before the next is sent.
    pub fn flash_write(&mut self, address: u32, data: &[u8]) -> Result<(), Error> {
        let chunks = FlashChunks::new(address, data)?;
        debug!("flash write: {} bytes at {=u32:#x}", data.len(), address);

        for (address, chunk) in chunks {
            let len = chunk.len() as u32;
            self.send(Command::FlashWriteHeader { address, len })?;
            self.write_all(chunk)?;
            self.wait_ack()?;
        }
        Ok(())
    }

    /// Select a font stored in flash at `address`
    pub fn set_flash_font(&mut self, address: u32) -> Result<(), Error> {
        self.send(Command::SetFlashFont(address))
    }

    /// Run the command set stored in flash at `address`
    pub fn run_flash_command_set(&mut self, address: u32) -> Result<(), Error> {
        self.send(Command::RunFlashCommandSet(address))
    }

    /// Wait for [`XON`], skipping a bounded number of other bytes
    fn wait_ack(&mut self) -> Result<(), Error> {
        let mut stray = 0u16;
        loop {
            let byte = self.read_byte()?;
            if byte == XON {
                return Ok(());
            }
            warn!("stray byte {=u8:#x} while waiting for ack", byte);
            stray += 1;
            if stray > self.config().ack_max_stray_bytes {
                return Err(Error::AckNotReceived);
            }
        }
    }
}
