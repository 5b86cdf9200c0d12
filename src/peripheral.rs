//! External peripherals the board driver hands resources to
//!
//! The pixel-data bus streams scanlines and the pulse generator clocks the
//! gate driver. Neither is implemented here; a board only needs these
//! primitives to set them up and to scope the bus to the powered-on window.

use core::fmt::Debug;

use crate::pins::{BusPins, PinId};

/// Parallel pixel-data bus (I2S or LCD peripheral)
pub trait PixelBus {
    /// Error type for bus operations
    type Error: Debug;

    /// Configure the bus for rows of `row_width` bytes
    fn init(&mut self, pins: &BusPins, row_width: u32) -> Result<(), Self::Error>;

    /// Route the bus signals onto its pins
    fn attach(&mut self) -> Result<(), Self::Error>;

    /// Return the bus pins to plain GPIO
    fn detach(&mut self) -> Result<(), Self::Error>;
}

/// Precision pulse generator (RMT) for the vertical clock
pub trait PulseGenerator {
    /// Error type for pulse operations
    type Error: Debug;

    /// Bind the generator to its output pin
    fn init(&mut self, pin: PinId) -> Result<(), Self::Error>;

    /// Emit one high pulse of `high_us` followed by `low_us` low
    fn pulse(&mut self, high_us: u16, low_us: u16) -> Result<(), Self::Error>;
}
