//! Error types for the driver
//!
//! This module defines error types for configuration building ([`BuilderError`])
//! and board operations ([`Error`]).
//!
//! ## Error Types
//!
//! - [`BuilderError`] - Errors during configuration construction
//! - [`Error`] - Runtime errors during board operations
//! - [`InterfaceError`](crate::interface::InterfaceError) - Low-level pin errors
//!
//! None of these are transient. A failed pin write during power sequencing
//! leaves the rails in an unknown state; the firmware should halt rather
//! than retry.
//!
//! ## Example
//!
//! ```
//! use epd_board::{Builder, BuilderError, PowerStep};
//!
//! let result = Builder::new().settle_us(PowerStep::GateLowOn, 0).build();
//! assert!(matches!(
//!     result,
//!     Err(BuilderError::ZeroSettleDelay { step: PowerStep::GateLowOn })
//! ));
//! ```

use crate::board::{Operation, PowerState};
use crate::config::PowerStep;
use crate::interface::ControlInterface;
use crate::peripheral::{PixelBus, PulseGenerator};

/// Widest row, in bytes, the pixel bus is asked to stream
///
/// Covers panels up to 4096 pixels wide at 4 pixels per byte.
pub const MAX_ROW_WIDTH: u32 = 1024;

/// Errors that can occur when driving the board
///
/// Generic over the control interface and both peripherals so the concrete
/// HAL errors are preserved.
pub enum Error<I, B, P>
where
    I: ControlInterface,
    B: PixelBus,
    P: PulseGenerator,
{
    /// Control-line pin error
    Interface(I::Error),
    /// Pixel-data bus error
    Bus(B::Error),
    /// Pulse generator error
    Pulse(P::Error),
    /// Board used before [`Board::init`](crate::board::Board::init)
    NotInitialized,
    /// [`Board::init`](crate::board::Board::init) called twice
    AlreadyInitialized,
    /// Operation not legal in the current power state
    InvalidState {
        /// Rejected operation
        operation: Operation,
        /// Power state at the time of the call
        state: PowerState,
    },
    /// Row width outside `1..=MAX_ROW_WIDTH`
    InvalidRowWidth {
        /// Requested width in bytes
        width: u32,
    },
}

impl<I, B, P> core::fmt::Debug for Error<I, B, P>
where
    I: ControlInterface,
    B: PixelBus,
    P: PulseGenerator,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Interface(e) => f.debug_tuple("Interface").field(e).finish(),
            Self::Bus(e) => f.debug_tuple("Bus").field(e).finish(),
            Self::Pulse(e) => f.debug_tuple("Pulse").field(e).finish(),
            Self::NotInitialized => f.write_str("NotInitialized"),
            Self::AlreadyInitialized => f.write_str("AlreadyInitialized"),
            Self::InvalidState { operation, state } => f
                .debug_struct("InvalidState")
                .field("operation", operation)
                .field("state", state)
                .finish(),
            Self::InvalidRowWidth { width } => f
                .debug_struct("InvalidRowWidth")
                .field("width", width)
                .finish(),
        }
    }
}

impl<I, B, P> core::fmt::Display for Error<I, B, P>
where
    I: ControlInterface,
    B: PixelBus,
    P: PulseGenerator,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Interface(e) => write!(f, "Interface error: {e:?}"),
            Self::Bus(e) => write!(f, "Pixel bus error: {e:?}"),
            Self::Pulse(e) => write!(f, "Pulse generator error: {e:?}"),
            Self::NotInitialized => write!(f, "Board not initialized"),
            Self::AlreadyInitialized => write!(f, "Board already initialized"),
            Self::InvalidState { operation, state } => {
                write!(f, "Cannot {operation:?} while {state:?}")
            }
            Self::InvalidRowWidth { width } => {
                write!(f, "Invalid row width: {width} (max {MAX_ROW_WIDTH})")
            }
        }
    }
}

impl<I, B, P> core::error::Error for Error<I, B, P>
where
    I: ControlInterface,
    B: PixelBus,
    P: PulseGenerator,
{
}

/// Errors that can occur when building configuration
#[derive(Debug, PartialEq)]
pub enum BuilderError {
    /// A settle delay was set to zero
    ///
    /// Rails need time to stabilize between steps; a zero delay is never valid.
    ZeroSettleDelay {
        /// Step with the zero delay
        step: PowerStep,
    },
}

impl core::fmt::Display for BuilderError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::ZeroSettleDelay { step } => {
                write!(f, "Settle delay for {step:?} must be non-zero")
            }
        }
    }
}

impl core::error::Error for BuilderError {}
