//! Configuration shift-register layout
//!
//! The board carries a single 8-bit serial-in, parallel-out register that
//! holds three panel control lines and the five power-rail enables. Every push
//! shifts all eight bits, so a frame is always built from the full
//! [`ControlState`] and [`PowerConfig`], never from a partial update.
//!
//! A frame is a `u8` transmitted MSB first. The bit constants below follow the
//! wiring of the shift chain: the first bit clocked in ends up furthest down
//! the chain.
//!
//! | Bit  | Order | Signal                    |
//! |------|-------|---------------------------|
//! | 0x80 | 1st   | Output enable (OE)        |
//! | 0x40 | 2nd   | Scan mode (MODE)          |
//! | 0x20 | 3rd   | Gate-high enable (VGH)    |
//! | 0x10 | 4th   | Start-of-frame (STV)      |
//! | 0x08 | 5th   | Gate-low enable (VGL)     |
//! | 0x04 | 6th   | Negative rail enable (-V) |
//! | 0x02 | 7th   | Positive rail enable (+V) |
//! | 0x01 | 8th   | Main power enable         |
//!
//! ## Example
//!
//! ```
//! use epd_board::register::{self, PowerConfig};
//! use epd_board::ControlState;
//!
//! let power = PowerConfig {
//!     main: true,
//!     ..PowerConfig::OFF
//! };
//! let state = ControlState {
//!     stv: true,
//!     ..ControlState::OFF
//! };
//! assert_eq!(register::frame(&state, &power), register::STV | register::POWER_MAIN);
//! ```

use crate::control::ControlState;

/// Number of bits pushed per frame
pub const FRAME_BITS: u8 = 8;

/// Output enable, shifted first
pub const OUTPUT_ENABLE: u8 = 0x80;

/// Scan mode
pub const MODE: u8 = 0x40;

/// Gate-high rail enable
pub const POWER_GATE_HIGH: u8 = 0x20;

/// Start-of-frame pulse
pub const STV: u8 = 0x10;

/// Gate-low rail enable
pub const POWER_GATE_LOW: u8 = 0x08;

/// Negative source rail enable
pub const POWER_NEG: u8 = 0x04;

/// Positive source rail enable
pub const POWER_POS: u8 = 0x02;

/// Main power enable, shifted last
pub const POWER_MAIN: u8 = 0x01;

/// All rail enable bits
pub const POWER_RAILS: u8 = POWER_GATE_HIGH | POWER_GATE_LOW | POWER_NEG | POWER_POS | POWER_MAIN;

/// Power-rail enables held in the configuration register
///
/// Always resident in the shift-register bit stream: every push carries the
/// current value of all five enables.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PowerConfig {
    /// Main power enable
    pub main: bool,
    /// Positive source rail (+V)
    pub pos: bool,
    /// Negative source rail (-V)
    pub neg: bool,
    /// Gate-low rail (VGL)
    pub gate_low: bool,
    /// Gate-high rail (VGH)
    pub gate_high: bool,
}

impl PowerConfig {
    /// Every rail disabled
    pub const OFF: Self = Self {
        main: false,
        pos: false,
        neg: false,
        gate_low: false,
        gate_high: false,
    };

    /// Every rail enabled
    pub const ON: Self = Self {
        main: true,
        pos: true,
        neg: true,
        gate_low: true,
        gate_high: true,
    };

    /// Whether every rail is disabled
    pub fn is_off(&self) -> bool {
        *self == Self::OFF
    }

    /// Whether every rail is enabled
    pub fn is_on(&self) -> bool {
        *self == Self::ON
    }
}

/// Build the 8-bit frame for the current control and power state
pub fn frame(state: &ControlState, power: &PowerConfig) -> u8 {
    let mut bits = 0u8;
    if state.output_enable {
        bits |= OUTPUT_ENABLE;
    }
    if state.mode {
        bits |= MODE;
    }
    if power.gate_high {
        bits |= POWER_GATE_HIGH;
    }
    if state.stv {
        bits |= STV;
    }
    if power.gate_low {
        bits |= POWER_GATE_LOW;
    }
    if power.neg {
        bits |= POWER_NEG;
    }
    if power.pos {
        bits |= POWER_POS;
    }
    if power.main {
        bits |= POWER_MAIN;
    }
    bits
}

/// Decode the rail enables back out of a frame
pub fn power_from_frame(frame: u8) -> PowerConfig {
    PowerConfig {
        main: frame & POWER_MAIN != 0,
        pos: frame & POWER_POS != 0,
        neg: frame & POWER_NEG != 0,
        gate_low: frame & POWER_GATE_LOW != 0,
        gate_high: frame & POWER_GATE_HIGH != 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bit_order_matches_shift_chain() {
        // MSB first: OE, MODE, VGH, STV, VGL, -V, +V, main
        let order = [
            OUTPUT_ENABLE,
            MODE,
            POWER_GATE_HIGH,
            STV,
            POWER_GATE_LOW,
            POWER_NEG,
            POWER_POS,
            POWER_MAIN,
        ];
        for (i, bit) in order.iter().enumerate() {
            assert_eq!(*bit, 0x80 >> i);
        }
    }

    #[test]
    fn test_frame_all_off_is_zero() {
        assert_eq!(frame(&ControlState::OFF, &PowerConfig::OFF), 0);
    }

    #[test]
    fn test_frame_ignores_direct_lines() {
        let state = ControlState {
            latch_enable: true,
            sth: true,
            ..ControlState::OFF
        };
        assert_eq!(frame(&state, &PowerConfig::OFF), 0);
    }

    #[test]
    fn test_frame_carries_power_even_for_control_only_update() {
        let state = ControlState {
            mode: true,
            ..ControlState::OFF
        };
        assert_eq!(frame(&state, &PowerConfig::ON), MODE | POWER_RAILS);
    }

    #[test]
    fn test_frame_single_rails() {
        let gl = PowerConfig {
            gate_low: true,
            ..PowerConfig::OFF
        };
        let neg = PowerConfig {
            neg: true,
            ..PowerConfig::OFF
        };
        assert_eq!(frame(&ControlState::OFF, &gl), 0b0000_1000);
        assert_eq!(frame(&ControlState::OFF, &neg), 0b0000_0100);
    }

    #[test]
    fn test_power_from_frame_drops_control_bits() {
        let bits = OUTPUT_ENABLE | STV | POWER_MAIN | POWER_NEG;
        let power = power_from_frame(bits);
        assert!(power.main);
        assert!(power.neg);
        assert!(!power.pos);
        assert!(!power.gate_low);
        assert!(!power.gate_high);
    }

    #[test]
    fn test_power_config_on_off() {
        assert!(PowerConfig::default().is_off());
        assert!(PowerConfig::ON.is_on());
        assert!(!PowerConfig::ON.is_off());
    }
}
