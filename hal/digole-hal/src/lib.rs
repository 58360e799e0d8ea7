//! Digole Hardware Abstraction Layer
//!
//! This crate defines the byte-level transport capability that the Digole
//! command encoder is built on. A transport only moves raw bytes; it knows
//! nothing about the command protocol carried over it.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  digole (command encoder)               │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  digole-hal (this crate - traits)       │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┼───────────┐
//!         ▼           ▼           ▼
//!     ┌────────┐  ┌────────┐  ┌─────────────┐
//!     │ serial │  │  I2C   │  │ SPI / soft  │
//!     └────────┘  └────────┘  └─────────────┘
//!          (digole-hal-embedded)
//! ```
//!
//! # Traits
//!
//! - [`transport::Transport`] - Raw byte I/O towards the display module
//!
//! Link configuration for each bus lives in [`uart`], [`i2c`] and [`spi`].

#![no_std]
#![deny(unsafe_code)]

pub mod i2c;
pub mod spi;
pub mod timeout;
pub mod transport;
pub mod uart;

// Re-export key types at crate root for convenience
pub use i2c::I2cConfig;
pub use spi::{Mode, SpiConfig, SpiWriteMode};
pub use timeout::{Deadline, ReadTimeout};
pub use transport::{LinkError, Transport};
pub use uart::{UartConfig, FACTORY_BAUDRATE};
