//! SPI link configuration
//!
//! Digole modules sample on the second clock edge (mode 1) and cannot keep
//! up with fast clocks; 100 kHz is a safe rate.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::timeout::ReadTimeout;

/// Chip-select setup time before a write, in nanoseconds
pub const WRITE_SETUP_NS: u32 = 8_000;

/// Chip-select setup time before a read, in nanoseconds
pub const READ_SETUP_NS: u32 = 10_000;

/// How a frame is clocked out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SpiWriteMode {
    /// Whole frame in one chip-select window
    #[default]
    Burst,
    /// One chip-select window per byte, for modules that drop bytes in bursts
    PerByte,
}

/// SPI configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SpiConfig {
    /// Clock frequency in Hz
    pub frequency: u32,
    /// Clock polarity and phase
    pub mode: Mode,
    /// Framing of writes
    pub write_mode: SpiWriteMode,
    /// Bound on waiting for the module's data-ready line
    pub read_timeout: ReadTimeout,
}

impl SpiConfig {
    /// Clock polarity and phase to set the bus up with
    pub fn bus_mode(&self) -> embedded_hal::spi::Mode {
        self.mode.into()
    }
}

impl Default for SpiConfig {
    fn default() -> Self {
        Self {
            frequency: 100_000,
            mode: Mode::Mode1,
            write_mode: SpiWriteMode::Burst,
            read_timeout: ReadTimeout::default(),
        }
    }
}

/// SPI mode (combined polarity and phase)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Mode {
    /// Mode 0: CPOL=0, CPHA=0
    Mode0,
    /// Mode 1: CPOL=0, CPHA=1
    Mode1,
    /// Mode 2: CPOL=1, CPHA=0
    Mode2,
    /// Mode 3: CPOL=1, CPHA=1
    Mode3,
}

impl From<Mode> for embedded_hal::spi::Mode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Mode0 => embedded_hal::spi::MODE_0,
            Mode::Mode1 => embedded_hal::spi::MODE_1,
            Mode::Mode2 => embedded_hal::spi::MODE_2,
            Mode::Mode3 => embedded_hal::spi::MODE_3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal::spi::{Phase, Polarity};

    #[test]
    fn test_default_mode_is_mode1() {
        let mode = SpiConfig::default().bus_mode();
        assert_eq!(mode.polarity, Polarity::IdleLow);
        assert_eq!(mode.phase, Phase::CaptureOnSecondTransition);
    }
}
