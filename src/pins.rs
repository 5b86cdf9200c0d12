//! Board pin assignment
//!
//! Static map from logical signal to physical GPIO number. The table is fixed
//! per board revision and never changes after initialization.

/// Physical GPIO number
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PinId(pub u8);

/// Pins owned by the parallel pixel-data bus
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BusPins {
    /// Horizontal pixel clock (CKH)
    pub clock: PinId,
    /// Horizontal start pulse (STH), shared with the control-line driver
    pub start_pulse: PinId,
    /// Data lines D0..D7
    pub data: [PinId; 8],
}

/// Full pin map of a board revision
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PinAssignment {
    /// Shift register serial data
    pub cfg_data: PinId,
    /// Shift register clock
    pub cfg_clk: PinId,
    /// Shift register strobe
    pub cfg_str: PinId,
    /// Vertical gate clock (CKV), driven by the pulse generator
    pub ckv: PinId,
    /// Source driver latch enable
    pub latch_enable: PinId,
    /// Pixel-data bus pins
    pub bus: BusPins,
}

impl PinAssignment {
    /// Board revision 5
    ///
    /// The strobe sits on GPIO12 rather than GPIO0 so the strap pin stays free.
    pub const V5: Self = Self {
        cfg_data: PinId(33),
        cfg_clk: PinId(32),
        cfg_str: PinId(12),
        ckv: PinId(26),
        latch_enable: PinId(2),
        bus: BusPins {
            clock: PinId(15),
            start_pulse: PinId(27),
            data: [
                PinId(25),
                PinId(4),
                PinId(5),
                PinId(18),
                PinId(19),
                PinId(21),
                PinId(22),
                PinId(23),
            ],
        },
    };

    /// Horizontal start pin
    pub fn sth(&self) -> PinId {
        self.bus.start_pulse
    }

    /// Iterate over every assigned pin
    pub fn iter(&self) -> impl Iterator<Item = PinId> + '_ {
        [
            self.cfg_data,
            self.cfg_clk,
            self.cfg_str,
            self.ckv,
            self.latch_enable,
            self.bus.clock,
            self.bus.start_pulse,
        ]
        .into_iter()
        .chain(self.bus.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn test_v5_pins_are_unique() {
        let mut pins: Vec<PinId> = PinAssignment::V5.iter().collect();
        let count = pins.len();
        pins.sort_unstable();
        pins.dedup();
        assert_eq!(count, 15);
        assert_eq!(pins.len(), count);
    }

    #[test]
    fn test_v5_sth_is_bus_start_pulse() {
        assert_eq!(PinAssignment::V5.sth(), PinId(27));
    }
}
