//! Board configuration types and builder

pub use crate::error::{BuilderError, MAX_ROW_WIDTH};

/// Extra bytes appended to every row handed to the pixel bus
///
/// Dummy bytes at the end of a row give the bus timing headroom.
pub const DEFAULT_ROW_PADDING: u32 = 32;

/// One rail transition of the power sequence
///
/// Power-on raises one rail per step. Power-off drops rails in pairs, then
/// drops main enable without a trailing delay.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PowerStep {
    /// Main enable raised
    MainOn,
    /// Gate-low rail raised
    GateLowOn,
    /// Negative rail raised
    NegOn,
    /// Gate-high rail raised
    GateHighOn,
    /// Positive rail raised
    PosOn,
    /// Positive and gate-high rails dropped together
    PosGateHighOff,
    /// Negative and gate-low rails dropped together
    NegGateLowOff,
}

impl PowerStep {
    /// Power-on steps in sequence order
    pub const POWER_ON: [Self; 5] = [
        Self::MainOn,
        Self::GateLowOn,
        Self::NegOn,
        Self::GateHighOn,
        Self::PosOn,
    ];

    /// Power-off steps in sequence order
    pub const POWER_OFF: [Self; 2] = [Self::PosGateHighOff, Self::NegGateLowOff];
}

/// Minimum wait after each power step, in microseconds
///
/// These are floors, not polled conditions. The panel reports nothing back.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SettleDelays {
    /// After main enable
    pub main_on_us: u32,
    /// After gate-low
    pub gate_low_on_us: u32,
    /// After -V
    pub neg_on_us: u32,
    /// After gate-high
    pub gate_high_on_us: u32,
    /// After +V
    pub pos_on_us: u32,
    /// After dropping +V and gate-high
    pub pos_gate_high_off_us: u32,
    /// After dropping -V and gate-low
    pub neg_gate_low_off_us: u32,
}

impl Default for SettleDelays {
    fn default() -> Self {
        Self {
            main_on_us: 100,
            gate_low_on_us: 500,
            neg_on_us: 500,
            gate_high_on_us: 500,
            pos_on_us: 100,
            pos_gate_high_off_us: 10,
            neg_gate_low_off_us: 100,
        }
    }
}

impl SettleDelays {
    /// Delay for a given step
    pub fn get(&self, step: PowerStep) -> u32 {
        match step {
            PowerStep::MainOn => self.main_on_us,
            PowerStep::GateLowOn => self.gate_low_on_us,
            PowerStep::NegOn => self.neg_on_us,
            PowerStep::GateHighOn => self.gate_high_on_us,
            PowerStep::PosOn => self.pos_on_us,
            PowerStep::PosGateHighOff => self.pos_gate_high_off_us,
            PowerStep::NegGateLowOff => self.neg_gate_low_off_us,
        }
    }

    fn slot(&mut self, step: PowerStep) -> &mut u32 {
        match step {
            PowerStep::MainOn => &mut self.main_on_us,
            PowerStep::GateLowOn => &mut self.gate_low_on_us,
            PowerStep::NegOn => &mut self.neg_on_us,
            PowerStep::GateHighOn => &mut self.gate_high_on_us,
            PowerStep::PosOn => &mut self.pos_on_us,
            PowerStep::PosGateHighOff => &mut self.pos_gate_high_off_us,
            PowerStep::NegGateLowOff => &mut self.neg_gate_low_off_us,
        }
    }

    /// Scale every delay by `factor`, saturating
    ///
    /// Useful for panels with slower charge pumps.
    pub fn scaled(mut self, factor: u32) -> Self {
        for step in PowerStep::POWER_ON.into_iter().chain(PowerStep::POWER_OFF) {
            let slot = self.slot(step);
            *slot = slot.saturating_mul(factor);
        }
        self
    }
}

/// Board configuration
///
/// Use `Builder` to create a Config.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// Settle delays for power sequencing
    pub settle: SettleDelays,
    /// Dummy bytes added to each row for the pixel bus
    pub row_padding: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            settle: SettleDelays::default(),
            row_padding: DEFAULT_ROW_PADDING,
        }
    }
}

/// Builder for constructing board configuration
///
/// # Example
///
/// ```
/// use epd_board::{Builder, PowerStep};
///
/// let config = match Builder::new().settle_us(PowerStep::MainOn, 200).build() {
///     Ok(config) => config,
///     Err(_) => return,
/// };
/// assert_eq!(config.settle.main_on_us, 200);
/// ```
#[must_use]
#[derive(Default)]
pub struct Builder {
    settle: SettleDelays,
    row_padding: Option<u32>,
}

impl Builder {
    /// Create a new Builder with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace all settle delays
    pub fn settle_delays(mut self, settle: SettleDelays) -> Self {
        self.settle = settle;
        self
    }

    /// Set the settle delay of a single step
    pub fn settle_us(mut self, step: PowerStep, us: u32) -> Self {
        *self.settle.slot(step) = us;
        self
    }

    /// Set the dummy bytes appended to each row
    pub fn row_padding(mut self, bytes: u32) -> Self {
        self.row_padding = Some(bytes);
        self
    }

    /// Build the configuration
    ///
    /// # Errors
    ///
    /// Returns `BuilderError::ZeroSettleDelay` if any step has a zero delay
    pub fn build(self) -> Result<Config, BuilderError> {
        for step in PowerStep::POWER_ON.into_iter().chain(PowerStep::POWER_OFF) {
            if self.settle.get(step) == 0 {
                return Err(BuilderError::ZeroSettleDelay { step });
            }
        }
        Ok(Config {
            settle: self.settle,
            row_padding: self.row_padding.unwrap_or(DEFAULT_ROW_PADDING),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_delays_follow_reference_timing() {
        let settle = SettleDelays::default();
        assert_eq!(settle.get(PowerStep::MainOn), 100);
        assert_eq!(settle.get(PowerStep::GateLowOn), 500);
        assert_eq!(settle.get(PowerStep::NegOn), 500);
        assert_eq!(settle.get(PowerStep::GateHighOn), 500);
        assert_eq!(settle.get(PowerStep::PosOn), 100);
        assert_eq!(settle.get(PowerStep::PosGateHighOff), 10);
        assert_eq!(settle.get(PowerStep::NegGateLowOff), 100);
    }

    #[test]
    fn test_builder_defaults() {
        let config = Builder::new().build().unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.row_padding, DEFAULT_ROW_PADDING);
    }

    #[test]
    fn test_builder_sets_single_step() {
        let config = Builder::new()
            .settle_us(PowerStep::NegGateLowOff, 250)
            .row_padding(0)
            .build()
            .unwrap();
        assert_eq!(config.settle.neg_gate_low_off_us, 250);
        assert_eq!(config.settle.main_on_us, 100);
        assert_eq!(config.row_padding, 0);
    }

    #[test]
    fn test_builder_rejects_zero_delay() {
        let result = Builder::new().settle_us(PowerStep::PosOn, 0).build();
        assert_eq!(
            result,
            Err(BuilderError::ZeroSettleDelay {
                step: PowerStep::PosOn
            })
        );
    }

    #[test]
    fn test_scaled_saturates() {
        let settle = SettleDelays::default().scaled(1000);
        assert_eq!(settle.gate_low_on_us, 500_000);

        let settle = SettleDelays::default().scaled(u32::MAX);
        assert_eq!(settle.main_on_us, u32::MAX);
    }
}
