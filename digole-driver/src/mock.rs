//! Test doubles for the transport and delay

use std::collections::VecDeque;
use std::vec::Vec;

use digole_hal::{LinkError, Transport};
use embedded_hal::delay::DelayNs;

/// Transport that records every write and replays queued responses
///
/// Reads past the end of the queue fail with [`LinkError::ReadTimeout`].
#[derive(Debug, Default)]
pub struct MockTransport {
    /// Bytes of each write call, in order
    pub writes: Vec<Vec<u8>>,
    /// Bytes returned by reads
    pub responses: VecDeque<u8>,
    /// Accept at most this many bytes per write
    pub accept_limit: Option<usize>,
    /// Fail every write with this error
    pub write_error: Option<LinkError>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Transport that answers reads with `responses`
    pub fn with_responses(responses: &[u8]) -> Self {
        Self {
            responses: responses.iter().copied().collect(),
            ..Self::default()
        }
    }

    /// All written bytes concatenated
    pub fn written(&self) -> Vec<u8> {
        self.writes.concat()
    }
}

impl Transport for MockTransport {
    fn write_bytes(&mut self, data: &[u8]) -> Result<usize, LinkError> {
        if let Some(e) = self.write_error {
            return Err(e);
        }
        let accepted = self.accept_limit.map_or(data.len(), |limit| limit.min(data.len()));
        self.writes.push(data[..accepted].to_vec());
        Ok(accepted)
    }

    fn read_byte(&mut self) -> Result<u8, LinkError> {
        self.responses.pop_front().ok_or(LinkError::ReadTimeout)
    }
}

/// Delay that records elapsed time instead of sleeping
#[derive(Debug, Default)]
pub struct Clock {
    elapsed_ns: u64,
}

impl Clock {
    pub fn elapsed_ms(&self) -> u64 {
        self.elapsed_ns / 1_000_000
    }
}

impl DelayNs for Clock {
    fn delay_ns(&mut self, ns: u32) {
        self.elapsed_ns += ns as u64;
    }
}
