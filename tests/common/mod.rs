//! Simulated mount for exercising the pointing controller on the host.
//!
//! Steppers move simulated shafts one encoder count per step, the encoders read the shafts back,
//! and every bus, step and delay call is recorded in order.

#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use antenna_mount::drivers::{AngleEncoder, EncoderCount, MultiTurnEncoder, StepActuator, TurnCount};
use antenna_mount::hw::{BusSettings, EncoderBus};
use antenna_mount::{Hardware, PointingConfig, PointingController};
use embedded_hal::delay::DelayNs;

/// Encoder ring used by every simulated test.
pub const COUNTS: u32 = 4096;
pub const TURN: i64 = COUNTS as i64;

#[derive(Clone, Debug, PartialEq)]
pub enum Event {
    BusConfigured(BusSettings),
    AzRead,
    TurnRead,
    ElevRead,
    AzStep(i32),
    ElevStep(i32),
    Delay(u32),
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct BusFault;

#[derive(Debug, Default)]
pub struct SimState {
    /// Unwrapped azimuth shaft position in encoder counts.
    pub az_counts: i64,
    /// Unwrapped elevation shaft position in encoder counts.
    pub elev_counts: i64,
    pub events: Vec<Event>,
    pub bus_down: bool,
    pub fail_configure: bool,
    /// Fail this many upcoming reads.
    pub failing_reads: u32,
    /// Report this value from every position read.
    pub corrupt_position: Option<EncoderCount>,
}

impl SimState {
    fn read(&mut self, event: Event) -> Result<(), BusFault> {
        self.events.push(event);
        if self.bus_down {
            return Err(BusFault);
        }
        if self.failing_reads > 0 {
            self.failing_reads -= 1;
            return Err(BusFault);
        }
        Ok(())
    }

    fn position(&self, counts: i64) -> EncoderCount {
        self.corrupt_position
            .unwrap_or(counts.rem_euclid(TURN) as EncoderCount)
    }
}

pub type Sim = Rc<RefCell<SimState>>;

pub struct SimBus(Sim);
pub struct SimAzEncoder(Sim);
pub struct SimElevEncoder(Sim);
pub struct SimAzStepper(Sim);
pub struct SimElevStepper(Sim);
pub struct SimDelay(Sim);

impl EncoderBus for SimBus {
    type Error = BusFault;

    fn configure(&mut self, settings: &BusSettings) -> Result<(), BusFault> {
        let mut s = self.0.borrow_mut();
        if s.fail_configure {
            return Err(BusFault);
        }
        s.events.push(Event::BusConfigured(*settings));
        Ok(())
    }
}

impl AngleEncoder<SimBus> for SimAzEncoder {
    fn read_position(&mut self, _bus: &mut SimBus) -> Result<EncoderCount, BusFault> {
        let mut s = self.0.borrow_mut();
        s.read(Event::AzRead)?;
        Ok(s.position(s.az_counts))
    }
}

impl MultiTurnEncoder<SimBus> for SimAzEncoder {
    fn read_turn_count(&mut self, _bus: &mut SimBus) -> Result<TurnCount, BusFault> {
        let mut s = self.0.borrow_mut();
        s.read(Event::TurnRead)?;
        Ok(s.az_counts.div_euclid(TURN) as TurnCount)
    }
}

impl AngleEncoder<SimBus> for SimElevEncoder {
    fn read_position(&mut self, _bus: &mut SimBus) -> Result<EncoderCount, BusFault> {
        let mut s = self.0.borrow_mut();
        s.read(Event::ElevRead)?;
        Ok(s.position(s.elev_counts))
    }
}

impl StepActuator for SimAzStepper {
    fn step(&mut self, steps: i32) {
        let mut s = self.0.borrow_mut();
        s.events.push(Event::AzStep(steps));
        s.az_counts += steps as i64;
    }
}

impl StepActuator for SimElevStepper {
    fn step(&mut self, steps: i32) {
        let mut s = self.0.borrow_mut();
        s.events.push(Event::ElevStep(steps));
        // motor is mounted reversed
        s.elev_counts -= steps as i64;
    }
}

impl DelayNs for SimDelay {
    fn delay_ns(&mut self, _ns: u32) {}

    fn delay_ms(&mut self, ms: u32) {
        self.0.borrow_mut().events.push(Event::Delay(ms));
    }
}

pub type SimHardware =
    Hardware<SimBus, SimAzEncoder, SimAzStepper, SimElevEncoder, SimElevStepper, SimDelay>;
pub type SimMount = PointingController<
    SimBus,
    SimAzEncoder,
    SimAzStepper,
    SimElevEncoder,
    SimElevStepper,
    SimDelay,
>;

/// One encoder count per motor step on both axes, otherwise the defaults.
pub fn config() -> PointingConfig {
    PointingConfig::default()
        .with_az_drive(1.0, COUNTS)
        .with_elev_drive(1.0, COUNTS)
}

pub fn sim(az_counts: i64, elev_counts: i64) -> Sim {
    Rc::new(RefCell::new(SimState {
        az_counts,
        elev_counts,
        ..Default::default()
    }))
}

pub fn hardware(sim: &Sim) -> SimHardware {
    Hardware {
        bus: SimBus(sim.clone()),
        az_encoder: SimAzEncoder(sim.clone()),
        az_actuator: SimAzStepper(sim.clone()),
        elev_encoder: SimElevEncoder(sim.clone()),
        elev_actuator: SimElevStepper(sim.clone()),
        delay: SimDelay(sim.clone()),
    }
}

/// Bring up a mount at the given shaft positions and discard the init events.
pub fn mount_at(az_counts: i64, elev_counts: i64) -> (SimMount, Sim) {
    let sim = sim(az_counts, elev_counts);
    let mount = match PointingController::init(hardware(&sim), config()) {
        Ok(mount) => mount,
        Err(e) => panic!("simulated init failed: {e:?}"),
    };
    sim.borrow_mut().events.clear();
    (mount, sim)
}

pub fn take_events(sim: &Sim) -> Vec<Event> {
    std::mem::take(&mut sim.borrow_mut().events)
}

/// Only the step commands, in order.
pub fn steps(events: &[Event]) -> Vec<Event> {
    events
        .iter()
        .filter(|e| matches!(e, Event::AzStep(_) | Event::ElevStep(_)))
        .cloned()
        .collect()
}
