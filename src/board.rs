//! Board definition
//!
//! A board revision is one implementation of [`Board`]. The firmware picks the
//! implementation once at startup and keeps it as a single concrete handle;
//! callers never change when a new revision is added.
//!
//! ## Power states
//!
//! ```text
//! Off --poweron--> PoweringOn --> On --poweroff--> PoweringOff --> Off
//! ```
//!
//! The transient states are only observable if a sequence aborted on an
//! error. From there every power transition is rejected.

use embedded_hal::delay::DelayNs;

use crate::control::{ControlMask, ControlState};

/// Power state of the panel rails
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PowerState {
    /// All rails down, pixel bus detached
    #[default]
    Off,
    /// Power-on sequence running (or aborted)
    PoweringOn,
    /// All rails up, pixel bus attached
    On,
    /// Power-off sequence running (or aborted)
    PoweringOff,
}

/// Board operation, used to report sequencing misuse
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    /// [`Board::deinit`]
    Deinit,
    /// [`Board::set_ctrl`]
    SetCtrl,
    /// [`Board::poweron`]
    PowerOn,
    /// [`Board::poweroff`]
    PowerOff,
    /// Vertical clock pulse
    PulseVerticalClock,
}

/// Board definition table
///
/// One implementation per hardware revision. Every method is a blocking,
/// run-to-completion operation; none of them may be interrupted.
pub trait Board {
    /// Error type for board operations
    type Error;

    /// Configure pins and peripherals for rows of `row_width` bytes
    ///
    /// Resets the control state and the power config register to all-off.
    fn init(&mut self, row_width: u32) -> Result<(), Self::Error>;

    /// Release what `init` set up
    ///
    /// Boards without anything to release keep the default no-op.
    fn deinit(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Update the control lines
    ///
    /// STH and LE follow `state` immediately. The shift register is only
    /// pushed when `mask` marks output enable, mode or STV.
    fn set_ctrl(&mut self, state: ControlState, mask: ControlMask) -> Result<(), Self::Error>;

    /// Bring the panel rails up
    ///
    /// Starts from all control lines low. If the pixel bus cannot be acquired
    /// the board stays `Off`; a failure after that aborts the sequence.
    fn poweron<D: DelayNs>(&mut self, delay: &mut D) -> Result<(), Self::Error>;

    /// Bring the panel rails down
    fn poweroff<D: DelayNs>(&mut self, delay: &mut D) -> Result<(), Self::Error>;

    /// Ambient temperature in degrees Celsius, if the board can measure it
    fn ambient_temperature(&mut self) -> Option<f32> {
        None
    }
}
