//! Mapping of HAL errors onto link errors

use digole_hal::LinkError;

pub(crate) fn i2c_error<E: embedded_hal::i2c::Error>(e: E) -> LinkError {
    use embedded_hal::i2c::ErrorKind;

    match e.kind() {
        ErrorKind::Bus | ErrorKind::ArbitrationLoss => LinkError::Bus,
        ErrorKind::NoAcknowledge(_) => LinkError::Nack,
        ErrorKind::Overrun => LinkError::Overrun,
        _ => LinkError::Other,
    }
}

pub(crate) fn spi_error<E: embedded_hal::spi::Error>(e: E) -> LinkError {
    use embedded_hal::spi::ErrorKind;

    match e.kind() {
        ErrorKind::Overrun => LinkError::Overrun,
        ErrorKind::ModeFault | ErrorKind::FrameFormat | ErrorKind::ChipSelectFault => {
            LinkError::Bus
        }
        _ => LinkError::Other,
    }
}

pub(crate) fn pin_error<E: embedded_hal::digital::Error>(_e: E) -> LinkError {
    LinkError::Bus
}

pub(crate) fn io_error<E: embedded_io::Error>(e: E) -> LinkError {
    use embedded_io::ErrorKind;

    match e.kind() {
        ErrorKind::TimedOut => LinkError::ReadTimeout,
        ErrorKind::OutOfMemory => LinkError::Overrun,
        ErrorKind::InvalidData | ErrorKind::BrokenPipe | ErrorKind::ConnectionReset => {
            LinkError::Bus
        }
        _ => LinkError::Other,
    }
}
