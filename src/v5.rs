//! Board revision 5
//!
//! Three control lines and all five rail enables share one 8-bit shift
//! register; STH and LE are wired straight to GPIOs. The pixel bus is an
//! 8-bit parallel peripheral and the vertical clock comes from a pulse
//! generator on CKV.

use embedded_hal::delay::DelayNs;

use crate::board::{Board, Operation, PowerState};
use crate::config::{Config, MAX_ROW_WIDTH, PowerStep};
use crate::control::{ControlMask, ControlState};
use crate::error::Error;
use crate::interface::ControlInterface;
use crate::peripheral::{PixelBus, PulseGenerator};
use crate::pins::PinAssignment;
use crate::register::{self, PowerConfig};

type BoardResult<I, B, P> = core::result::Result<(), Error<I, B, P>>;

/// Board revision 5 session
///
/// Owns the control lines, both peripherals, the commanded control state and
/// the power config register. One instance drives one panel; every operation
/// takes `&mut self`, so there is a single owner for the whole session.
pub struct BoardV5<I, B, P>
where
    I: ControlInterface,
    B: PixelBus,
    P: PulseGenerator,
{
    /// Control-line driver
    interface: I,
    /// Parallel pixel-data bus
    bus: B,
    /// Vertical clock pulse generator
    pulse: P,
    /// Board configuration
    config: Config,
    /// Commanded control-line levels
    ctrl: ControlState,
    /// Rail enables resident in the shift register
    power: PowerConfig,
    power_state: PowerState,
    initialized: bool,
    bus_attached: bool,
}

impl<I, B, P> BoardV5<I, B, P>
where
    I: ControlInterface,
    B: PixelBus,
    P: PulseGenerator,
{
    /// Pin map of this revision
    pub const PINS: PinAssignment = PinAssignment::V5;

    /// Create a new, uninitialized board
    pub fn new(interface: I, bus: B, pulse: P, config: Config) -> Self {
        Self {
            interface,
            bus,
            pulse,
            config,
            ctrl: ControlState::OFF,
            power: PowerConfig::OFF,
            power_state: PowerState::Off,
            initialized: false,
            bus_attached: false,
        }
    }

    /// Current power state
    pub fn power_state(&self) -> PowerState {
        self.power_state
    }

    /// Last commanded control-line levels
    pub fn control_state(&self) -> ControlState {
        self.ctrl
    }

    /// Current rail enables
    pub fn power_config(&self) -> PowerConfig {
        self.power
    }

    /// Whether `init` has run
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Whether the pixel bus currently owns its pins
    pub fn is_bus_attached(&self) -> bool {
        self.bus_attached
    }

    /// Access the underlying configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Emit one vertical clock pulse
    ///
    /// Only legal while the panel is powered.
    pub fn pulse_vertical_clock(&mut self, high_us: u16, low_us: u16) -> BoardResult<I, B, P> {
        self.require(Operation::PulseVerticalClock, PowerState::On)?;
        self.pulse.pulse(high_us, low_us).map_err(Error::Pulse)
    }

    /// Tear the board apart into its interface and peripherals
    pub fn release(self) -> (I, B, P) {
        (self.interface, self.bus, self.pulse)
    }

    fn require(&self, operation: Operation, expected: PowerState) -> BoardResult<I, B, P> {
        if !self.initialized {
            log::warn!("{operation:?} before init");
            return Err(Error::NotInitialized);
        }
        if self.power_state != expected {
            log::warn!("{operation:?} rejected while {:?}", self.power_state);
            return Err(Error::InvalidState {
                operation,
                state: self.power_state,
            });
        }
        Ok(())
    }

    /// Drive the lines from the stored control state
    fn apply_ctrl(&mut self, mask: ControlMask) -> BoardResult<I, B, P> {
        self.interface
            .set_sth(self.ctrl.sth)
            .map_err(Error::Interface)?;

        if mask.touches_shift_register() {
            let frame = register::frame(&self.ctrl, &self.power);
            log::trace!("config frame {frame:#010b}");
            self.interface
                .push_frame(frame)
                .map_err(Error::Interface)?;
        }

        self.interface
            .set_latch_enable(self.ctrl.latch_enable)
            .map_err(Error::Interface)
    }

    /// Push the rail enables and wait for the step to settle
    fn push_rails<D: DelayNs>(&mut self, step: PowerStep, delay: &mut D) -> BoardResult<I, B, P> {
        self.apply_ctrl(ControlMask::STV)?;
        let us = self.config.settle.get(step);
        log::debug!("{step:?}, settling {us}us");
        delay.delay_us(us);
        Ok(())
    }
}

impl<I, B, P> Board for BoardV5<I, B, P>
where
    I: ControlInterface,
    B: PixelBus,
    P: PulseGenerator,
{
    type Error = Error<I, B, P>;

    fn init(&mut self, row_width: u32) -> BoardResult<I, B, P> {
        if self.initialized {
            return Err(Error::AlreadyInitialized);
        }
        if row_width == 0 || row_width > MAX_ROW_WIDTH {
            return Err(Error::InvalidRowWidth { width: row_width });
        }

        self.interface.init().map_err(Error::Interface)?;
        self.ctrl = ControlState::OFF;
        self.power = PowerConfig::OFF;
        self.power_state = PowerState::Off;

        let pins = Self::PINS;
        self.bus
            .init(&pins.bus, row_width.saturating_add(self.config.row_padding))
            .map_err(Error::Bus)?;
        self.pulse.init(pins.ckv).map_err(Error::Pulse)?;

        self.initialized = true;
        log::info!("board v5 initialized, row width {row_width}");
        Ok(())
    }

    fn deinit(&mut self) -> BoardResult<I, B, P> {
        self.require(Operation::Deinit, PowerState::Off)?;
        self.interface.init().map_err(Error::Interface)?;
        self.initialized = false;
        log::info!("board v5 deinitialized");
        Ok(())
    }

    fn set_ctrl(&mut self, state: ControlState, mask: ControlMask) -> BoardResult<I, B, P> {
        if !self.initialized {
            log::warn!("set_ctrl before init");
            return Err(Error::NotInitialized);
        }
        if matches!(
            self.power_state,
            PowerState::PoweringOn | PowerState::PoweringOff
        ) {
            log::warn!("set_ctrl rejected while {:?}", self.power_state);
            return Err(Error::InvalidState {
                operation: Operation::SetCtrl,
                state: self.power_state,
            });
        }
        self.ctrl = state;
        self.apply_ctrl(mask)
    }

    fn poweron<D: DelayNs>(&mut self, delay: &mut D) -> BoardResult<I, B, P> {
        self.require(Operation::PowerOn, PowerState::Off)?;

        // Nothing is driven yet, so a failed attach leaves the session Off
        self.bus.attach().map_err(Error::Bus)?;
        self.bus_attached = true;
        self.power_state = PowerState::PoweringOn;

        // Lines left over from the previous cycle must not leak into bring-up
        self.ctrl = ControlState::OFF;

        self.power.main = true;
        self.push_rails(PowerStep::MainOn, delay)?;
        self.power.gate_low = true;
        self.push_rails(PowerStep::GateLowOn, delay)?;
        self.power.neg = true;
        self.push_rails(PowerStep::NegOn, delay)?;
        self.power.gate_high = true;
        self.push_rails(PowerStep::GateHighOn, delay)?;
        self.power.pos = true;
        self.push_rails(PowerStep::PosOn, delay)?;

        self.ctrl.stv = true;
        self.ctrl.sth = true;
        self.apply_ctrl(ControlMask {
            stv: true,
            sth: true,
            ..ControlMask::NONE
        })?;

        self.power_state = PowerState::On;
        log::info!("panel powered on");
        Ok(())
    }

    fn poweroff<D: DelayNs>(&mut self, delay: &mut D) -> BoardResult<I, B, P> {
        self.require(Operation::PowerOff, PowerState::On)?;
        self.power_state = PowerState::PoweringOff;

        // Paired teardown, deliberately not the reverse of power-on
        self.power.gate_high = false;
        self.power.pos = false;
        self.push_rails(PowerStep::PosGateHighOff, delay)?;
        self.power.gate_low = false;
        self.power.neg = false;
        self.push_rails(PowerStep::NegGateLowOff, delay)?;

        self.ctrl.stv = false;
        self.ctrl.output_enable = false;
        self.ctrl.mode = false;
        self.power.main = false;
        log::debug!("main enable off");
        self.apply_ctrl(ControlMask {
            stv: true,
            output_enable: true,
            mode: true,
            ..ControlMask::NONE
        })?;

        self.bus.detach().map_err(Error::Bus)?;
        self.bus_attached = false;

        self.power_state = PowerState::Off;
        log::info!("panel powered off");
        Ok(())
    }
}
