//! E-Paper Board Driver
//!
//! Power sequencing and control-line driver for parallel e-paper panels on
//! boards that route the panel's control lines and rail enables through a
//! bit-banged configuration shift register.
//!
//! ## Features
//!
//! - `no_std` compatible
//! - `embedded-hal` v1.0 support
//! - Fixed-order power-on / power-off with configurable settle delays
//! - Exact 8-bit shift-register protocol for the control and rail enables
//! - Board revisions as implementations of a single [`Board`] trait
//!
//! Pixel streaming and the vertical clock are left to the caller's
//! peripherals through the [`PixelBus`] and [`PulseGenerator`] traits.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use core::convert::Infallible;
//! use embedded_hal::delay::DelayNs;
//! use embedded_hal::digital::OutputPin;
//! use epd_board::{Board, BoardV5, Builder, Interface, PinId, PixelBus, PulseGenerator};
//! use epd_board::pins::BusPins;
//!
//! # struct MockPin;
//! # impl embedded_hal::digital::ErrorType for MockPin { type Error = Infallible; }
//! # impl OutputPin for MockPin {
//! #     fn set_low(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! #     fn set_high(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! # }
//! # struct MockBus;
//! # impl PixelBus for MockBus {
//! #     type Error = Infallible;
//! #     fn init(&mut self, _pins: &BusPins, _row_width: u32) -> Result<(), Self::Error> { Ok(()) }
//! #     fn attach(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! #     fn detach(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! # }
//! # struct MockRmt;
//! # impl PulseGenerator for MockRmt {
//! #     type Error = Infallible;
//! #     fn init(&mut self, _pin: PinId) -> Result<(), Self::Error> { Ok(()) }
//! #     fn pulse(&mut self, _high_us: u16, _low_us: u16) -> Result<(), Self::Error> { Ok(()) }
//! # }
//! # struct MockDelay;
//! # impl DelayNs for MockDelay { fn delay_ns(&mut self, _ns: u32) {} }
//! # let mut delay = MockDelay;
//! let interface = Interface::new(MockPin, MockPin, MockPin, MockPin, MockPin);
//! let config = match Builder::new().build() {
//!     Ok(config) => config,
//!     Err(_) => return,
//! };
//!
//! let mut board = BoardV5::new(interface, MockBus, MockRmt, config);
//! if board.init(960 / 4).is_err() {
//!     return;
//! }
//! let _ = board.poweron(&mut delay);
//! // stream scanlines ...
//! let _ = board.poweroff(&mut delay);
//! ```

#![no_std]

#[cfg(test)]
extern crate alloc;

/// Board definition trait and power states
pub mod board;
/// Board configuration types and builder
pub mod config;
/// Control-line state and masks
pub mod control;
/// Error types for the driver
pub mod error;
/// Hardware interface abstraction
pub mod interface;
/// Pixel bus and pulse generator traits
pub mod peripheral;
/// Board pin assignment
pub mod pins;
/// Configuration shift-register layout
pub mod register;
/// Board revision 5
pub mod v5;

pub use board::{Board, Operation, PowerState};
pub use config::{Builder, Config, DEFAULT_ROW_PADDING, MAX_ROW_WIDTH, PowerStep, SettleDelays};
pub use control::{ControlMask, ControlState};
pub use error::{BuilderError, Error};
pub use interface::{ControlInterface, Interface, InterfaceError, Line};
pub use peripheral::{PixelBus, PulseGenerator};
pub use pins::{PinAssignment, PinId};
pub use register::PowerConfig;
pub use v5::BoardV5;
