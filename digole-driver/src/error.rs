//! Driver errors

use digole_hal::LinkError;
use digole_protocol::FrameError;

/// Errors returned by display operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// The transport failed, including read timeouts
    Link(LinkError),
    /// The transport accepted only part of a frame
    ///
    /// `written == 0` means nothing reached the module. The driver never
    /// retries; the caller may repeat the whole operation.
    ShortWrite { expected: usize, written: usize },
    /// A parameter does not fit its on-wire encoding or the module's limits
    ParameterOutOfRange,
    /// A frame exceeded its buffer
    FrameOverflow,
    /// The module sent too many bytes other than the flash write acknowledgement
    AckNotReceived,
}

impl Error {
    /// Whether this error is a read timeout
    pub fn is_timeout(&self) -> bool {
        matches!(self, Error::Link(LinkError::ReadTimeout))
    }
}

impl From<LinkError> for Error {
    fn from(e: LinkError) -> Self {
        Error::Link(e)
    }
}

impl From<FrameError> for Error {
    fn from(e: FrameError) -> Self {
        match e {
            FrameError::ParameterOutOfRange => Error::ParameterOutOfRange,
            FrameError::BufferTooSmall => Error::FrameOverflow,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conversions() {
        assert_eq!(Error::from(LinkError::Nack), Error::Link(LinkError::Nack));
        assert_eq!(
            Error::from(FrameError::ParameterOutOfRange),
            Error::ParameterOutOfRange
        );
        assert_eq!(Error::from(FrameError::BufferTooSmall), Error::FrameOverflow);
    }

    #[test]
    fn test_is_timeout() {
        assert!(Error::Link(LinkError::ReadTimeout).is_timeout());
        assert!(!Error::Link(LinkError::Bus).is_timeout());
        assert!(!Error::AckNotReceived.is_timeout());
    }
}
