//! Touchscreen and telemetry queries
//!
//! Each query writes its request frame and then blocks on the transport for
//! the answer. 16-bit values arrive high byte first.

use digole_hal::Transport;
use digole_protocol::{Command, TouchMode};
use embedded_hal::delay::DelayNs;

use crate::driver::Digole;
use crate::error::Error;

/// Coordinates above this value mean the panel was not touched
const NO_TOUCH_THRESHOLD: u16 = 0xFF00;

/// Position reported by a touchscreen read
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TouchPoint {
    pub x: u16,
    pub y: u16,
}

impl TouchPoint {
    /// Whether the reading is an actual touch
    ///
    /// Non-blocking and release reads report out-of-range coordinates when
    /// nothing is pressed.
    pub fn is_touched(&self) -> bool {
        self.x <= NO_TOUCH_THRESHOLD && self.y <= NO_TOUCH_THRESHOLD
    }
}

impl<T: Transport, D: DelayNs> Digole<T, D> {
    /// Start the module's interactive touchscreen calibration
    pub fn calibrate_touchscreen(&mut self) -> Result<(), Error> {
        self.send(Command::CalibrateTouchscreen)
    }

    /// Read a touch position
    ///
    /// With [`TouchMode::Down`] or [`TouchMode::Up`] the module answers only
    /// once the panel is pressed or released, so the read is bounded by the
    /// transport's read timeout.
    pub fn read_touchscreen(&mut self, mode: TouchMode) -> Result<TouchPoint, Error> {
        self.send(Command::ReadTouchscreen(mode))?;
        let x = self.read_u16()?;
        let y = self.read_u16()?;
        trace!("touch {} {}", x, y);
        Ok(TouchPoint { x, y })
    }

    /// Read the battery voltage channel
    pub fn read_battery(&mut self) -> Result<u16, Error> {
        self.query_u16(Command::ReadBattery)
    }

    /// Read the auxiliary analog input
    pub fn read_aux(&mut self) -> Result<u16, Error> {
        self.query_u16(Command::ReadAux)
    }

    /// Read the on-board temperature sensor
    pub fn read_temperature(&mut self) -> Result<u16, Error> {
        self.query_u16(Command::ReadTemperature)
    }

    fn query_u16(&mut self, command: Command) -> Result<u16, Error> {
        self.send(command)?;
        self.read_u16()
    }
}
