//! UART link configuration
//!
//! Digole modules power up at [`FACTORY_BAUDRATE`]. A faster rate is
//! negotiated with the `SB` command; the host then re-clocks its UART.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::timeout::ReadTimeout;

/// Baud rate the module listens at after power-up
pub const FACTORY_BAUDRATE: u32 = 9600;

/// UART configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct UartConfig {
    /// Baud rate in bits per second, after negotiation
    pub baudrate: u32,
    /// Bound on blocking reads
    pub read_timeout: ReadTimeout,
}

impl Default for UartConfig {
    fn default() -> Self {
        Self {
            baudrate: 115200,
            read_timeout: ReadTimeout::default(),
        }
    }
}

impl UartConfig {
    /// Whether the module must be told to switch away from its power-up rate
    pub fn needs_negotiation(&self) -> bool {
        self.baudrate != FACTORY_BAUDRATE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_requires_negotiation() {
        assert!(UartConfig::default().needs_negotiation());
    }

    #[test]
    fn test_factory_rate_needs_no_negotiation() {
        let config = UartConfig {
            baudrate: FACTORY_BAUDRATE,
            ..Default::default()
        };
        assert!(!config.needs_negotiation());
    }
}
