//! embedded-hal transports for Digole display modules
//!
//! Implements [`digole_hal::Transport`] on top of the embedded-hal 1.0 and
//! embedded-io 0.6 traits, so the command encoder runs on any chip with a
//! HAL for them:
//!
//! - [`SerialTransport`] - UART through `embedded_io::{Read, Write, ReadReady}`
//! - [`I2cTransport`] - `embedded_hal::i2c::I2c`
//! - [`SpiTransport`] - `embedded_hal::spi::SpiDevice` plus the module's
//!   data-ready line
//! - [`SoftSpiTransport`] - bit-banged SPI over four GPIOs
//!
//! Bus errors are reduced to [`digole_hal::LinkError`] through each trait's
//! `ErrorKind`.

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

// Must come first so the other modules see its macros
mod fmt;

mod error;
pub mod i2c;
pub mod serial;
pub mod soft_spi;
pub mod spi;

pub use i2c::I2cTransport;
pub use serial::SerialTransport;
pub use soft_spi::SoftSpiTransport;
pub use spi::SpiTransport;
