//! Command frame construction
//!
//! A frame is the complete byte sequence of one command:
//! - MNEMONIC (2-5 bytes): ASCII command identifier
//! - PARAMETERS (0-11 bytes): varints, literal bytes, 24-bit addresses
//!
//! Frames live on the stack and are written to the transport as-is.

use heapless::Vec;

use crate::varint;

/// Capacity of a command frame
///
/// The longest fixed-layout command is `SB` with a 10-digit baud rate and
/// CR LF (14 bytes).
pub const MAX_FRAME_SIZE: usize = 16;

/// Largest value a 24-bit field can carry
pub const U24_MAX: u32 = 0x00FF_FFFF;

/// Errors that can occur while building a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FrameError {
    /// A parameter does not fit its on-wire encoding
    ParameterOutOfRange,
    /// Frame capacity exceeded
    BufferTooSmall,
}

/// A constructed command frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame<const N: usize = MAX_FRAME_SIZE> {
    bytes: Vec<u8, N>,
}

impl<const N: usize> Frame<N> {
    /// Start a frame with the given mnemonic
    pub fn new(mnemonic: &[u8]) -> Result<Self, FrameError> {
        let mut frame = Self::empty();
        frame.push_bytes(mnemonic)?;
        Ok(frame)
    }

    /// Create a frame with no bytes
    pub fn empty() -> Self {
        Self { bytes: Vec::new() }
    }

    /// Append a literal byte
    pub fn push_byte(&mut self, byte: u8) -> Result<(), FrameError> {
        self.bytes.push(byte).map_err(|_| FrameError::BufferTooSmall)
    }

    /// Append literal bytes
    pub fn push_bytes(&mut self, bytes: &[u8]) -> Result<(), FrameError> {
        self.bytes
            .extend_from_slice(bytes)
            .map_err(|_| FrameError::BufferTooSmall)
    }

    /// Append a coordinate or size in varint form
    pub fn push_varint(&mut self, value: u16) -> Result<(), FrameError> {
        let mut buf = [0u8; 2];
        let len = varint::encode(value, &mut buf)?;
        self.push_bytes(&buf[..len])
    }

    /// Append a 24-bit value as 3 big-endian bytes
    pub fn push_u24(&mut self, value: u32) -> Result<(), FrameError> {
        if value > U24_MAX {
            return Err(FrameError::ParameterOutOfRange);
        }
        let [_, high, mid, low] = value.to_be_bytes();
        self.push_bytes(&[high, mid, low])
    }

    /// Append a 16-bit length, low byte first
    pub fn push_u16_le(&mut self, value: u16) -> Result<(), FrameError> {
        let low = (value & 0xFF) as u8;
        let high = ((value >> 8) & 0xFF) as u8;
        self.push_bytes(&[low, high])
    }

    /// The encoded bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Frame length in bytes
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Whether the frame holds no bytes
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl<const N: usize> AsRef<[u8]> for Frame<N> {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}
