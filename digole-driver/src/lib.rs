//! Command encoder driver for Digole serial display modules
//!
//! [`Digole`] turns drawing, text and configuration calls into the module's
//! command frames and writes them through any [`Transport`]:
//!
//! - Settings: cursor, rotation, contrast, backlight, colours, draw mode
//! - Drawing: pixels, lines, rectangles, circles, bitmaps, windows
//! - Text: fonts, cursor positioning, multi-line printing (`core::fmt::Write`)
//! - Touchscreen and telemetry queries
//! - Start screen, user font and flash uploads
//! - Raw LCD pass-through and digital output
//!
//! # Example
//!
//! ```
//! use digole::{Digole, LinkError, Transport};
//!
//! struct Sink;
//!
//! impl Transport for Sink {
//!     fn write_bytes(&mut self, data: &[u8]) -> Result<usize, LinkError> {
//!         Ok(data.len())
//!     }
//!
//!     fn read_byte(&mut self) -> Result<u8, LinkError> {
//!         Err(LinkError::ReadTimeout)
//!     }
//! }
//!
//! let mut display = Digole::new(Sink);
//! display.clear_screen()?;
//! display.draw_line(0, 0, 127, 63)?;
//! display.print("Hello\nWorld")?;
//! # Ok::<(), digole::Error>(())
//! ```
//!
//! # Resource model
//!
//! Every call builds its frame on the stack and writes it before returning.
//! Nothing is buffered between calls and there is no shared scratch buffer,
//! so the driver is reentrant. Reads block for as long as the transport's
//! read timeout allows.

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

// Must come first so the other modules see its macros
mod fmt;

pub mod config;
mod draw;
mod driver;
pub mod error;
#[cfg(feature = "graphics")]
mod graphics;
mod lcd;
mod settings;
mod text;
mod touch;
mod upload;

#[cfg(test)]
mod mock;

pub use config::DigoleConfig;
pub use driver::{Digole, NoDelay};
pub use error::Error;
pub use touch::TouchPoint;
pub use upload::XON;

pub use digole_hal::{LinkError, ReadTimeout, Transport};
pub use digole_protocol::{
    BitmapDepth, Color, Command, DrawMode, LcdChip, Orientation, TextUnit, TouchMode,
};
