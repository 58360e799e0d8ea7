//! I2C link configuration

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Factory 7-bit I2C address of Digole modules
pub const DEFAULT_ADDRESS: u8 = 0x27;

/// I2C configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct I2cConfig {
    /// 7-bit address of the module
    pub address: u8,
    /// Bus clock the module is known to keep up with, in Hz
    pub frequency: u32,
}

impl Default for I2cConfig {
    fn default() -> Self {
        Self {
            address: DEFAULT_ADDRESS,
            frequency: 50_000,
        }
    }
}

impl I2cConfig {
    /// Same configuration at another address
    pub const fn with_address(self, address: u8) -> Self {
        Self { address, ..self }
    }
}
