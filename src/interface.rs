//! Hardware interface abstraction
//!
//! This module provides the [`ControlInterface`] trait and the [`Interface`]
//! struct that bit-bangs the panel control lines.
//!
//! ## Hardware Requirements
//!
//! The board needs 5 GPIO outputs:
//!   - **CFG_DATA**: serial data into the configuration shift register
//!   - **CFG_CLK**: shift clock, rising edge samples CFG_DATA
//!   - **CFG_STR**: strobe, a high pulse copies the shift stage to the outputs
//!   - **STH**: horizontal start pulse (direct)
//!   - **LE**: source driver latch enable (direct)
//!
//! ## Shift protocol
//!
//! 1. Drive CFG_STR low
//! 2. For each of the 8 bits, MSB first: CFG_CLK low, CFG_DATA = bit, CFG_CLK high
//! 3. Pulse CFG_STR high then low
//!
//! ## Example
//!
//! ```rust,no_run
//! use epd_board::{ControlInterface, Interface};
//! # use core::convert::Infallible;
//! # use embedded_hal::digital::OutputPin;
//! # struct MockPin;
//! # impl embedded_hal::digital::ErrorType for MockPin { type Error = Infallible; }
//! # impl OutputPin for MockPin {
//! #     fn set_low(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! #     fn set_high(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! # }
//! let mut interface = Interface::new(MockPin, MockPin, MockPin, MockPin, MockPin);
//!
//! // Strobe and latch enable low
//! let _ = interface.init();
//!
//! // Main power enable only
//! let _ = interface.push_frame(0b0000_0001);
//! ```

use core::fmt::Debug;
use embedded_hal::digital::OutputPin;

use crate::register::FRAME_BITS;

type InterfaceResult<T, E> = core::result::Result<T, E>;

/// Trait for the pin-level control of an e-paper board
///
/// Every call is a synchronous, unbuffered pin write sequence and must finish
/// before the next one starts.
///
/// ## Implementing
///
/// For most cases, use the provided [`Interface`] struct. Implement this
/// trait yourself for boards with inverted lines or a hardware shift engine.
pub trait ControlInterface {
    /// Error type for interface operations
    type Error: Debug;

    /// Bring the lines to their idle levels
    ///
    /// The implementation must drive the strobe and latch enable low.
    fn init(&mut self) -> InterfaceResult<(), Self::Error>;

    /// Drive the horizontal start line
    fn set_sth(&mut self, level: bool) -> InterfaceResult<(), Self::Error>;

    /// Drive the source driver latch enable line
    fn set_latch_enable(&mut self, level: bool) -> InterfaceResult<(), Self::Error>;

    /// Shift an 8-bit frame into the configuration register and latch it
    ///
    /// Bits go out MSB first. See the module docs for the exact sequence.
    fn push_frame(&mut self, frame: u8) -> InterfaceResult<(), Self::Error>;
}

/// Logical signal a pin write was meant for
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Line {
    /// Shift register serial data
    ConfigData,
    /// Shift register clock
    ConfigClock,
    /// Shift register strobe
    ConfigStrobe,
    /// Horizontal start
    Sth,
    /// Latch enable
    LatchEnable,
}

/// Errors that can occur at the interface level
#[derive(Debug)]
pub enum InterfaceError<PinErr> {
    /// A GPIO write failed
    Pin {
        /// Line being driven
        line: Line,
        /// Underlying HAL error
        error: PinErr,
    },
}

impl<PinErr: Debug> core::fmt::Display for InterfaceError<PinErr> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Pin { line, error } => write!(f, "Pin error on {line:?}: {error:?}"),
        }
    }
}

impl<PinErr: Debug> core::error::Error for InterfaceError<PinErr> {}

/// Bit-banged control interface
///
/// Implements [`ControlInterface`] for embedded-hal v1.0 output pins.
///
/// ## Type Parameters
///
/// * `DATA` - Shift register data pin
/// * `CLK` - Shift register clock pin
/// * `STR` - Shift register strobe pin
/// * `STH` - Horizontal start pin
/// * `LE` - Latch enable pin
pub struct Interface<DATA, CLK, STR, STH, LE> {
    data: DATA,
    clk: CLK,
    strobe: STR,
    sth: STH,
    latch_enable: LE,
}

impl<DATA, CLK, STR, STH, LE> Interface<DATA, CLK, STR, STH, LE>
where
    DATA: OutputPin,
    CLK: OutputPin,
    STR: OutputPin,
    STH: OutputPin,
    LE: OutputPin,
{
    /// Create a new Interface
    ///
    /// Pins must already be configured as push-pull outputs.
    pub fn new(data: DATA, clk: CLK, strobe: STR, sth: STH, latch_enable: LE) -> Self {
        Self {
            data,
            clk,
            strobe,
            sth,
            latch_enable,
        }
    }

    /// Release the pins
    pub fn release(self) -> (DATA, CLK, STR, STH, LE) {
        (self.data, self.clk, self.strobe, self.sth, self.latch_enable)
    }
}

fn drive<P: OutputPin>(
    pin: &mut P,
    level: bool,
    line: Line,
) -> InterfaceResult<(), InterfaceError<P::Error>> {
    let result = if level { pin.set_high() } else { pin.set_low() };
    result.map_err(|error| InterfaceError::Pin { line, error })
}

impl<DATA, CLK, STR, STH, LE, PinErr> ControlInterface for Interface<DATA, CLK, STR, STH, LE>
where
    DATA: OutputPin<Error = PinErr>,
    CLK: OutputPin<Error = PinErr>,
    STR: OutputPin<Error = PinErr>,
    STH: OutputPin<Error = PinErr>,
    LE: OutputPin<Error = PinErr>,
    PinErr: Debug,
{
    type Error = InterfaceError<PinErr>;

    fn init(&mut self) -> InterfaceResult<(), Self::Error> {
        drive(&mut self.strobe, false, Line::ConfigStrobe)?;
        drive(&mut self.latch_enable, false, Line::LatchEnable)
    }

    fn set_sth(&mut self, level: bool) -> InterfaceResult<(), Self::Error> {
        drive(&mut self.sth, level, Line::Sth)
    }

    fn set_latch_enable(&mut self, level: bool) -> InterfaceResult<(), Self::Error> {
        drive(&mut self.latch_enable, level, Line::LatchEnable)
    }

    fn push_frame(&mut self, frame: u8) -> InterfaceResult<(), Self::Error> {
        drive(&mut self.strobe, false, Line::ConfigStrobe)?;

        for i in 0..FRAME_BITS {
            let bit = frame & (0x80 >> i) != 0;
            drive(&mut self.clk, false, Line::ConfigClock)?;
            drive(&mut self.data, bit, Line::ConfigData)?;
            drive(&mut self.clk, true, Line::ConfigClock)?;
        }

        drive(&mut self.strobe, true, Line::ConfigStrobe)?;
        drive(&mut self.strobe, false, Line::ConfigStrobe)
    }
}
