//! Driver configuration
//!
//! Upload pacing follows what the modules tolerate when they write a start
//! screen or font into their own flash: a settle time after the header, a
//! short delay per byte and a longer pause every burst.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Driver configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DigoleConfig {
    /// Non-acknowledgement bytes tolerated while waiting for a flash write ack
    pub ack_max_stray_bytes: u16,
    /// Wait after a start screen header (ms)
    pub start_screen_settle_ms: u32,
    /// Wait after each user font section header (ms)
    pub font_settle_ms: u32,
    /// Wait before each upload data byte (ms); 0 sends bursts in one write
    pub upload_byte_delay_ms: u32,
    /// Upload data bytes between pauses
    pub upload_burst_len: u16,
    /// Pause before each upload burst (ms)
    pub upload_burst_pause_ms: u32,
    /// Screen width in pixels
    pub width: u16,
    /// Screen height in pixels
    pub height: u16,
}

impl Default for DigoleConfig {
    fn default() -> Self {
        Self {
            ack_max_stray_bytes: 64,
            start_screen_settle_ms: 300,
            font_settle_ms: 200,
            upload_byte_delay_ms: 6,
            upload_burst_len: 32,
            upload_burst_pause_ms: 50,
            width: 160,
            height: 128,
        }
    }
}

impl DigoleConfig {
    /// Configuration without any upload pacing
    ///
    /// Suitable when the transport itself throttles, or for host tests.
    pub fn unpaced() -> Self {
        Self {
            start_screen_settle_ms: 0,
            font_settle_ms: 0,
            upload_byte_delay_ms: 0,
            upload_burst_pause_ms: 0,
            ..Default::default()
        }
    }

    /// Same configuration with another screen size
    pub fn with_size(self, width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            ..self
        }
    }
}
