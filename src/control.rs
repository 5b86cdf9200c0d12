//! Control-line state and update masks
//!
//! [`ControlState`] is the commanded logical level of every panel control line.
//! [`ControlMask`] travels alongside it on each update and marks which flags
//! actually changed meaning for that update. Only the output-enable, scan-mode
//! and start-of-frame flags are routed through the configuration shift register,
//! so only those three decide whether a shift-register push happens.
//!
//! ## Example
//!
//! ```
//! use epd_board::{ControlMask, ControlState};
//!
//! let mask = ControlMask {
//!     sth: true,
//!     ..ControlMask::NONE
//! };
//! assert!(!mask.touches_shift_register());
//!
//! let mask = ControlMask {
//!     mode: true,
//!     ..ControlMask::NONE
//! };
//! assert!(mask.touches_shift_register());
//!
//! assert_eq!(ControlState::default(), ControlState::OFF);
//! ```

/// Commanded level of each panel control line
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ControlState {
    /// Source driver output enable (OE), via shift register
    pub output_enable: bool,
    /// Gate driver scan mode (MODE), via shift register
    pub mode: bool,
    /// Start-of-frame / vertical start pulse (STV), via shift register
    pub stv: bool,
    /// Source driver latch enable (LE), wired directly
    pub latch_enable: bool,
    /// Horizontal start pulse (STH), wired directly
    pub sth: bool,
}

impl ControlState {
    /// Every line low
    pub const OFF: Self = Self {
        output_enable: false,
        mode: false,
        stv: false,
        latch_enable: false,
        sth: false,
    };
}

/// Marks which [`ControlState`] flags are significant for an update
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ControlMask {
    /// Output enable changed
    pub output_enable: bool,
    /// Scan mode changed
    pub mode: bool,
    /// Start-of-frame changed
    pub stv: bool,
    /// Latch enable changed
    pub latch_enable: bool,
    /// Horizontal start changed
    pub sth: bool,
}

impl ControlMask {
    /// No flag marked
    pub const NONE: Self = Self {
        output_enable: false,
        mode: false,
        stv: false,
        latch_enable: false,
        sth: false,
    };

    /// Mask used to trigger a shift-register push during power sequencing
    pub const STV: Self = Self {
        stv: true,
        ..Self::NONE
    };

    /// Whether this update has to be shifted out to the config register
    ///
    /// STH and LE are driven directly and never require a push.
    pub fn touches_shift_register(&self) -> bool {
        self.output_enable || self.mode || self.stv
    }
}
