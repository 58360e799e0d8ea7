//! One-or-two byte integer encoding for coordinates and sizes
//!
//! ```text
//! 0..=254    → [v]
//! 255..=509  → [255, v - 255]
//! ```
//!
//! This is the protocol's own scheme, not LEB128. Nothing above 509 can be
//! expressed.

use crate::frame::FrameError;

/// Escape byte announcing a second byte
pub const VARINT_ESCAPE: u8 = 255;

/// Largest encodable value
pub const VARINT_MAX: u16 = VARINT_ESCAPE as u16 + 254;

/// Number of bytes `value` occupies on the wire
///
/// Returns `None` when the value cannot be encoded.
pub fn encoded_len(value: u16) -> Option<usize> {
    match value {
        0..=254 => Some(1),
        255..=VARINT_MAX => Some(2),
        _ => None,
    }
}

/// Encode `value` at the start of `buf`
///
/// Returns the number of bytes written.
pub fn encode(value: u16, buf: &mut [u8]) -> Result<usize, FrameError> {
    let len = encoded_len(value).ok_or(FrameError::ParameterOutOfRange)?;
    if buf.len() < len {
        return Err(FrameError::BufferTooSmall);
    }

    if len == 1 {
        buf[0] = value as u8;
    } else {
        buf[0] = VARINT_ESCAPE;
        buf[1] = (value - VARINT_ESCAPE as u16) as u8;
    }
    Ok(len)
}

/// Decode a value from the start of `buf`
///
/// Returns the value and the number of bytes consumed, or `None` if the
/// buffer ends early or the second byte is out of range.
pub fn decode(buf: &[u8]) -> Option<(u16, usize)> {
    match *buf.first()? {
        VARINT_ESCAPE => {
            let low = *buf.get(1)?;
            if low == VARINT_ESCAPE {
                return None;
            }
            Some((VARINT_ESCAPE as u16 + low as u16, 2))
        }
        v => Some((v as u16, 1)),
    }
}
