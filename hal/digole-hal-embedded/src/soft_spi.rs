//! Bit-banged SPI transport
//!
//! For boards without a free SPI peripheral. Each byte is clocked MSB first
//! in its own chip-select window. The module's data-out line doubles as its
//! ready signal: it goes high once a byte is waiting.

use digole_hal::{LinkError, ReadTimeout, Transport};
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{InputPin, OutputPin};

use crate::error::pin_error;

/// Chip-select setup time before a written byte, in microseconds
const WRITE_SETUP_US: u32 = 6;

/// Chip-select setup time before a read byte, in microseconds
const READ_SETUP_US: u32 = 10;

/// Transport over four GPIOs
///
/// `dout` carries host-to-module data, `din` module-to-host data.
pub struct SoftSpiTransport<CLK, DOUT, DIN, CS, D> {
    clk: CLK,
    dout: DOUT,
    din: DIN,
    cs: CS,
    delay: D,
    read_timeout: ReadTimeout,
}

impl<CLK, DOUT, DIN, CS, D> SoftSpiTransport<CLK, DOUT, DIN, CS, D>
where
    CLK: OutputPin,
    DOUT: OutputPin,
    DIN: InputPin,
    CS: OutputPin,
    D: DelayNs,
{
    /// Create a transport and put the lines in their idle state
    pub fn new(
        mut clk: CLK,
        mut dout: DOUT,
        din: DIN,
        mut cs: CS,
        delay: D,
        read_timeout: ReadTimeout,
    ) -> Result<Self, LinkError> {
        cs.set_high().map_err(pin_error)?;
        clk.set_low().map_err(pin_error)?;
        dout.set_low().map_err(pin_error)?;
        Ok(Self {
            clk,
            dout,
            din,
            cs,
            delay,
            read_timeout,
        })
    }

    /// Give back the pins and delay
    pub fn release(self) -> (CLK, DOUT, DIN, CS, D) {
        (self.clk, self.dout, self.din, self.cs, self.delay)
    }

    fn shift_out(&mut self, byte: u8) -> Result<(), LinkError> {
        for bit in (0..8).rev() {
            if byte & (1 << bit) != 0 {
                self.dout.set_high().map_err(pin_error)?;
            } else {
                self.dout.set_low().map_err(pin_error)?;
            }
            self.clk.set_high().map_err(pin_error)?;
            self.clk.set_low().map_err(pin_error)?;
        }
        Ok(())
    }

    fn shift_in(&mut self) -> Result<u8, LinkError> {
        let mut byte = 0u8;
        for _ in 0..8 {
            self.clk.set_high().map_err(pin_error)?;
            byte <<= 1;
            if self.din.is_high().map_err(pin_error)? {
                byte |= 1;
            }
            self.clk.set_low().map_err(pin_error)?;
        }
        Ok(byte)
    }
}

impl<CLK, DOUT, DIN, CS, D> Transport for SoftSpiTransport<CLK, DOUT, DIN, CS, D>
where
    CLK: OutputPin,
    DOUT: OutputPin,
    DIN: InputPin,
    CS: OutputPin,
    D: DelayNs,
{
    fn write_bytes(&mut self, data: &[u8]) -> Result<usize, LinkError> {
        for &byte in data {
            self.cs.set_low().map_err(pin_error)?;
            self.delay.delay_us(WRITE_SETUP_US);
            let shifted = self.shift_out(byte);
            self.cs.set_high().map_err(pin_error)?;
            shifted?;
        }
        Ok(data.len())
    }

    fn read_byte(&mut self) -> Result<u8, LinkError> {
        let din = &mut self.din;
        self.read_timeout
            .wait_until(&mut self.delay, || din.is_high().map_err(pin_error))?;

        self.cs.set_low().map_err(pin_error)?;
        self.delay.delay_us(READ_SETUP_US);
        let byte = self.shift_in();
        self.cs.set_high().map_err(pin_error)?;
        byte
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::RefCell;
    use core::convert::Infallible;
    use std::vec::Vec;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Line {
        Clk,
        Dout,
        Cs,
    }

    /// Shared record of every output edge, plus the bits DIN will return
    #[derive(Default)]
    struct Bench {
        edges: RefCell<Vec<(Line, bool)>>,
        din: RefCell<Vec<bool>>,
    }

    impl Bench {
        /// Bits clocked out on DOUT, sampled at each rising clock edge
        fn sampled_bits(&self) -> Vec<bool> {
            let mut dout = false;
            let mut bits = Vec::new();
            for &(line, level) in self.edges.borrow().iter() {
                match line {
                    Line::Dout => dout = level,
                    Line::Clk if level => bits.push(dout),
                    _ => {}
                }
            }
            bits
        }
    }

    struct Out<'a>(&'a Bench, Line);

    impl embedded_hal::digital::ErrorType for Out<'_> {
        type Error = Infallible;
    }

    impl OutputPin for Out<'_> {
        fn set_high(&mut self) -> Result<(), Self::Error> {
            self.0.edges.borrow_mut().push((self.1, true));
            Ok(())
        }

        fn set_low(&mut self) -> Result<(), Self::Error> {
            self.0.edges.borrow_mut().push((self.1, false));
            Ok(())
        }
    }

    struct In<'a>(&'a Bench);

    impl embedded_hal::digital::ErrorType for In<'_> {
        type Error = Infallible;
    }

    impl InputPin for In<'_> {
        fn is_high(&mut self) -> Result<bool, Self::Error> {
            let mut din = self.0.din.borrow_mut();
            Ok(if din.is_empty() { false } else { din.remove(0) })
        }

        fn is_low(&mut self) -> Result<bool, Self::Error> {
            self.is_high().map(|high| !high)
        }
    }

    #[derive(Default)]
    struct Clock {
        elapsed_ns: u64,
    }

    impl DelayNs for Clock {
        fn delay_ns(&mut self, ns: u32) {
            self.elapsed_ns += ns as u64;
        }
    }

    type Link<'a> = SoftSpiTransport<Out<'a>, Out<'a>, In<'a>, Out<'a>, Clock>;

    fn transport(bench: &Bench) -> Link<'_> {
        SoftSpiTransport::new(
            Out(bench, Line::Clk),
            Out(bench, Line::Dout),
            In(bench),
            Out(bench, Line::Cs),
            Clock::default(),
            ReadTimeout::Millis(1),
        )
        .unwrap()
    }

    fn bits(byte: u8) -> Vec<bool> {
        (0..8).rev().map(|bit| byte & (1 << bit) != 0).collect()
    }

    #[test]
    fn test_write_msb_first() {
        let bench = Bench::default();
        let mut link = transport(&bench);
        bench.edges.borrow_mut().clear();

        assert_eq!(link.write_bytes(&[0xA5, 0x01]), Ok(2));

        let mut expected = bits(0xA5);
        expected.extend(bits(0x01));
        assert_eq!(bench.sampled_bits(), expected);

        let cs: Vec<bool> = bench
            .edges
            .borrow()
            .iter()
            .filter(|(line, _)| *line == Line::Cs)
            .map(|&(_, level)| level)
            .collect();
        assert_eq!(cs, [false, true, false, true]);

        let (.., clock) = link.release();
        assert_eq!(clock.elapsed_ns, 2 * 6_000);
    }

    #[test]
    fn test_read_waits_for_din() {
        let bench = Bench::default();
        let mut link = transport(&bench);

        // Two polls low, ready, then 0b1100_0011
        let mut din = [false, false, true].to_vec();
        din.extend(bits(0xC3));
        *bench.din.borrow_mut() = din;

        assert_eq!(link.read_byte(), Ok(0xC3));
        let (.., clock) = link.release();
        assert_eq!(clock.elapsed_ns, 2 * 100_000 + 10_000);
    }

    #[test]
    fn test_read_times_out() {
        let bench = Bench::default();
        let mut link = transport(&bench);
        assert_eq!(link.read_byte(), Err(LinkError::ReadTimeout));
    }
}
