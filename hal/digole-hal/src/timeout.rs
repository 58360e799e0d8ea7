//! Read timeout policy
//!
//! Display modules answer queries whenever they are ready, so every blocking
//! read polls a readiness condition. The timeout bounds that loop.

use embedded_hal::delay::DelayNs;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::transport::LinkError;

/// Interval between readiness polls in microseconds
pub const POLL_INTERVAL_US: u32 = 100;

/// How long a blocking read may wait for the module
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ReadTimeout {
    /// Wait indefinitely
    Forever,
    /// Give up after this many milliseconds
    Millis(u32),
}

impl Default for ReadTimeout {
    fn default() -> Self {
        ReadTimeout::Millis(1000)
    }
}

impl ReadTimeout {
    /// Poll `ready` until it reports true
    ///
    /// Sleeps [`POLL_INTERVAL_US`] between polls. Returns
    /// [`LinkError::ReadTimeout`] once the budget is spent; errors from
    /// `ready` are returned as-is.
    pub fn wait_until<D, F>(self, delay: &mut D, mut ready: F) -> Result<(), LinkError>
    where
        D: DelayNs,
        F: FnMut() -> Result<bool, LinkError>,
    {
        let mut deadline = Deadline::start(self);
        loop {
            if ready()? {
                return Ok(());
            }
            deadline.tick(delay)?;
        }
    }
}

/// Remaining polling budget for one read
#[derive(Debug, Clone, Copy)]
pub struct Deadline {
    remaining_us: Option<u64>,
}

impl Deadline {
    /// Start a new budget from a timeout policy
    pub fn start(timeout: ReadTimeout) -> Self {
        let remaining_us = match timeout {
            ReadTimeout::Forever => None,
            ReadTimeout::Millis(ms) => Some(ms as u64 * 1000),
        };
        Self { remaining_us }
    }

    /// Sleep one poll interval, failing once the budget is exhausted
    pub fn tick<D: DelayNs>(&mut self, delay: &mut D) -> Result<(), LinkError> {
        if let Some(remaining) = self.remaining_us {
            if remaining == 0 {
                return Err(LinkError::ReadTimeout);
            }
            self.remaining_us = Some(remaining.saturating_sub(POLL_INTERVAL_US as u64));
        }
        delay.delay_us(POLL_INTERVAL_US);
        Ok(())
    }

    /// Check whether the budget is spent
    pub fn is_expired(&self) -> bool {
        self.remaining_us == Some(0)
    }
}
