// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Open-loop pointing controller for the azimuth/elevation mount.
//!
//! The controller owns both axes, the shared encoder bus and a blocking delay. Each command reads
//! the encoders, works out a step count per axis and fires the steppers once. Nothing confirms the
//! move; the encoders are the source of truth for the next command. Use
//! [`read_pose`](PointingController::read_pose) to check convergence.
//!
//! Typical usage pattern:
//!
//! ```ignore
//! let mut mount = PointingController::init(hardware, PointingConfig::default())?;
//!
//! mount.point_to(231.5, 42.0)?;
//! // ... track ...
//! mount.go_home()?;
//! ```
//!
//! Cable safety: the azimuth harness tolerates `az_max_rotation_deg` of twist either way from where
//! the mount was at power-up. A move predicted to land past that is preceded by a one-turn unwind in
//! the opposite direction, and [`go_home`](PointingController::go_home) removes every accumulated
//! turn. The calibration anchor is only valid if the mount cannot complete an azimuth turn while
//! powered off.

use embedded_hal::delay::DelayNs;
use log::{debug, info, warn};

use crate::config::PointingConfig;
use crate::drivers::{AngleEncoder, EncoderCount, MultiTurnEncoder, StepActuator, TurnCount};
use crate::error::Error;
use crate::hw::EncoderBus;
use crate::motors::{ring, AzimuthAxis, ElevationAxis};

/// Everything the controller takes ownership of.
pub struct Hardware<B, AE, AA, EE, EA, D> {
    pub bus: B,
    pub az_encoder: AE,
    pub az_actuator: AA,
    pub elev_encoder: EE,
    pub elev_actuator: EA,
    pub delay: D,
}

/// Step commands issued by one [`point_to`](PointingController::point_to).
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct MoveSummary {
    /// One-turn cable unwind issued before the azimuth move, 0 if none.
    pub untangle_steps: i32,
    pub azimuth_steps: i32,
    /// Command as sent to the elevation driver (reversed from encoder sense).
    pub elevation_steps: i32,
}

/// Encoder readback converted to pointing angles.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Pose {
    pub az_count: EncoderCount,
    pub elev_count: EncoderCount,
    /// Completed azimuth turns relative to the calibration anchor.
    pub turns_since_anchor: TurnCount,
    /// Bearing from true north, `[0, 360)`.
    pub azimuth_deg: f32,
    /// Angle above the horizon, negative below it.
    pub elevation_deg: f32,
    /// Azimuth rotation accumulated since calibration.
    pub cable_twist_deg: f32,
}

pub struct PointingController<B, AE, AA, EE, EA, D> {
    bus: B,
    az: AzimuthAxis<AE, AA>,
    elev: ElevationAxis<EE, EA>,
    delay: D,
    config: PointingConfig,

    /// Azimuth turn count captured at init, never updated.
    az_init_turn_count: TurnCount,
}

impl<B, AE, AA, EE, EA, D> PointingController<B, AE, AA, EE, EA, D>
where
    B: EncoderBus,
    AE: MultiTurnEncoder<B>,
    AA: StepActuator,
    EE: AngleEncoder<B>,
    EA: StepActuator,
    D: DelayNs,
{
    /// Bring up the mount: open the encoder bus, flush stale readings and capture the azimuth
    /// calibration anchor.
    ///
    /// Errors from the throwaway reads are ignored. Configuration, bus setup and the anchor read
    /// must succeed.
    pub fn init(
        hardware: Hardware<B, AE, AA, EE, EA, D>,
        config: PointingConfig,
    ) -> Result<Self, Error<B::Error>> {
        config.validate()?;

        let Hardware {
            mut bus,
            az_encoder,
            az_actuator,
            elev_encoder,
            elev_actuator,
            delay,
        } = hardware;

        bus.configure(&config.bus).map_err(Error::Bus)?;

        let az = AzimuthAxis::new(
            az_encoder,
            az_actuator,
            config.encoder_counts,
            config.az_north_count,
            config.az_reduction,
            config.az_microsteps_per_turn,
        );
        let elev = ElevationAxis::new(
            elev_encoder,
            elev_actuator,
            config.encoder_counts,
            config.elev_zenith_count,
            config.elev_reduction,
            config.elev_microsteps_per_turn,
        );

        let mut mount = Self {
            bus,
            az,
            elev,
            delay,
            config,
            az_init_turn_count: 0,
        };

        mount.drain_bus();

        let anchor = mount
            .az
            .read_turn_count(&mut mount.bus)
            .map_err(Error::Bus)?;
        if let Some((min, max)) = config.anchor_turn_range {
            if !(min..=max).contains(&anchor) {
                return Err(Error::AnchorOutOfRange {
                    turns: anchor,
                    min,
                    max,
                });
            }
        }
        mount.az_init_turn_count = anchor;

        info!("mount ready, azimuth anchor at turn {}", anchor);
        Ok(mount)
    }

    /// Point at a compass bearing and an elevation above the horizon, both in degrees.
    ///
    /// Any finite bearing is accepted. Elevation is clamped to `[0, 90 - zenith_margin_deg]`. All
    /// encoder reads happen before the first step is issued, so a bus error leaves the mount where
    /// it was.
    pub fn point_to(
        &mut self,
        azimuth_deg: f32,
        elevation_deg: f32,
    ) -> Result<MoveSummary, Error<B::Error>> {
        if !(azimuth_deg.is_finite() && elevation_deg.is_finite()) {
            return Err(Error::NonFiniteAngle);
        }
        let modulus = self.config.encoder_counts;

        let az_target = self.az.target_count(azimuth_deg);
        let az_current = self.read_az_position()?;
        let turns = self.turns_since_anchor()?;

        let elevation_deg = ring::clamp_elevation(elevation_deg, self.config.max_elevation_deg());
        let elev_target = self.elev.target_count(elevation_deg);
        let elev_current = self.read_elev_position()?;

        // ----- Azimuth -----
        let az_delta = ring::shortest_delta(az_target, az_current, modulus);

        let predicted = ring::predicted_rotation_deg(turns, az_current, az_delta, modulus);
        let limit = self.config.az_max_rotation_deg;
        let untangle_steps = if predicted > limit {
            -self.az.full_turn_steps()
        } else if predicted < -limit {
            self.az.full_turn_steps()
        } else {
            0
        };
        if untangle_steps != 0 {
            warn!(
                "azimuth twist would reach {:.1} deg (limit {:.1}), unwinding one turn",
                predicted, limit
            );
            self.az.step(untangle_steps);
        }

        let azimuth_steps = self.az.steps_for_counts(az_delta);
        debug!(
            "az {:.2} deg: count {} -> {} ({} counts, {} steps)",
            azimuth_deg, az_current, az_target, az_delta, azimuth_steps
        );
        self.az.step(azimuth_steps);

        // ----- Elevation -----
        let elev_delta = ring::shortest_delta(elev_target, elev_current, modulus);
        let elev_steps = self.elev.steps_for_counts(elev_delta);
        debug!(
            "elev {:.2} deg: count {} -> {} ({} counts, {} steps)",
            elevation_deg, elev_current, elev_target, elev_delta, elev_steps
        );
        let elevation_steps = self.elev.step(elev_steps);

        Ok(MoveSummary {
            untangle_steps,
            azimuth_steps,
            elevation_steps,
        })
    }

    /// Turn the azimuth back by every full turn accumulated since calibration.
    ///
    /// Issues exactly one azimuth step command (zero when already untangled) and returns it.
    pub fn untangle(&mut self) -> Result<i32, Error<B::Error>> {
        let turns = self.turns_since_anchor()?;
        let steps = turns
            .saturating_mul(self.az.full_turn_steps())
            .saturating_neg();

        if turns != 0 {
            info!("untangling {} azimuth turns ({} steps)", turns, steps);
        }
        self.az.step(steps);
        Ok(steps)
    }

    /// Untangle the azimuth cable, then park at true north just below the zenith keep-out.
    pub fn go_home(&mut self) -> Result<MoveSummary, Error<B::Error>> {
        info!("going home");
        self.untangle()?;
        self.point_to(0.0, self.config.max_elevation_deg())
    }

    /// Tip the dish to let water run off, hold it there, then go home.
    pub fn empty_water(&mut self) -> Result<MoveSummary, Error<B::Error>> {
        info!(
            "draining reflector at {:.1} deg for {} ms",
            self.config.drain_elevation_deg, self.config.drain_dwell_ms
        );
        self.point_to(0.0, self.config.drain_elevation_deg)?;
        self.delay.delay_ms(self.config.drain_dwell_ms);
        self.go_home()
    }

    /// Read both encoders and convert to pointing angles.
    pub fn read_pose(&mut self) -> Result<Pose, Error<B::Error>> {
        let az_count = self.read_az_position()?;
        let turns = self.turns_since_anchor()?;
        let elev_count = self.read_elev_position()?;

        Ok(Pose {
            az_count,
            elev_count,
            turns_since_anchor: turns,
            azimuth_deg: self.az.bearing_deg(az_count),
            elevation_deg: self.elev.elevation_deg(elev_count),
            cable_twist_deg: ring::predicted_rotation_deg(
                turns,
                az_count,
                0,
                self.config.encoder_counts,
            ),
        })
    }

    /// Azimuth turn count captured at init.
    #[inline]
    pub fn anchor(&self) -> TurnCount {
        self.az_init_turn_count
    }

    #[inline]
    pub fn config(&self) -> &PointingConfig {
        &self.config
    }

    /// Tear down the controller and return the hardware it owned.
    pub fn release(self) -> Hardware<B, AE, AA, EE, EA, D> {
        let (az_encoder, az_actuator) = self.az.free();
        let (elev_encoder, elev_actuator) = self.elev.free();
        Hardware {
            bus: self.bus,
            az_encoder,
            az_actuator,
            elev_encoder,
            elev_actuator,
            delay: self.delay,
        }
    }

    /// Discard the first readings after the bus comes up.
    fn drain_bus(&mut self) {
        let settle_ms = self.config.drain_settle_ms;
        for round in 0..self.config.drain_reads {
            if let Err(e) = self.az.read_position(&mut self.bus) {
                warn!("drain round {}: azimuth read failed: {:?}", round, e);
            }
            self.delay.delay_ms(settle_ms);

            if let Err(e) = self.elev.read_position(&mut self.bus) {
                warn!("drain round {}: elevation read failed: {:?}", round, e);
            }
            self.delay.delay_ms(settle_ms);
        }
        debug!("encoder bus drained ({} rounds)", self.config.drain_reads);
    }

    fn turns_since_anchor(&mut self) -> Result<TurnCount, Error<B::Error>> {
        let turns = self
            .az
            .read_turn_count(&mut self.bus)
            .map_err(Error::Bus)?;
        Ok(turns.saturating_sub(self.az_init_turn_count))
    }

    fn read_az_position(&mut self) -> Result<EncoderCount, Error<B::Error>> {
        let count = self.az.read_position(&mut self.bus).map_err(Error::Bus)?;
        self.check_count(count)
    }

    fn read_elev_position(&mut self) -> Result<EncoderCount, Error<B::Error>> {
        let count = self.elev.read_position(&mut self.bus).map_err(Error::Bus)?;
        self.check_count(count)
    }

    fn check_count(&self, count: EncoderCount) -> Result<EncoderCount, Error<B::Error>> {
        let modulus = self.config.encoder_counts;
        if count < modulus {
            Ok(count)
        } else {
            Err(Error::CountOutOfRange { count, modulus })
        }
    }
}
