// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Elevation axis: a single-turn encoder paired with a stepper.
//!
//! The elevation travel is less than a turn but is read on the same kind of encoder ring as
//! azimuth. The ring is anchored at the zenith reading; the horizon sits a quarter turn before it.
//! The stepper is mounted so that positive motor steps move the encoder backwards.

use crate::drivers::{AngleEncoder, EncoderCount, StepActuator};
use crate::hw::EncoderBus;
use crate::motors::ring;

pub struct ElevationAxis<E, A> {
    encoder: E,
    actuator: A,
    modulus: u32,
    horizon_count: EncoderCount,
    reduction: f32,
    microsteps_per_turn: u32,
}

impl<E, A> ElevationAxis<E, A>
where
    A: StepActuator,
{
    /// Create a new elevation axis from the encoder count read at the zenith.
    pub fn new(
        encoder: E,
        actuator: A,
        modulus: u32,
        zenith_count: EncoderCount,
        reduction: f32,
        microsteps_per_turn: u32,
    ) -> Self {
        Self {
            encoder,
            actuator,
            modulus,
            horizon_count: ring::horizon_offset(zenith_count, modulus),
            reduction,
            microsteps_per_turn,
        }
    }

    /// Tear down this axis and return its encoder and actuator.
    pub fn free(self) -> (E, A) {
        (self.encoder, self.actuator)
    }

    #[inline]
    pub fn horizon_count(&self) -> EncoderCount {
        self.horizon_count
    }

    /// Encoder count for an elevation above the horizon. Callers clamp first.
    pub fn target_count(&self, elevation_deg: f32) -> EncoderCount {
        ring::deg_to_count(elevation_deg, self.horizon_count, self.modulus)
    }

    /// Elevation for an encoder count, negative below the horizon.
    pub fn elevation_deg(&self, count: EncoderCount) -> f32 {
        let deg = ring::count_to_deg(count, self.horizon_count, self.modulus);
        if deg > ring::FULL_TURN_DEG / 2.0 {
            deg - ring::FULL_TURN_DEG
        } else {
            deg
        }
    }

    /// Motor microsteps for a signed encoder distance.
    #[inline]
    pub fn steps_for_counts(&self, delta: i32) -> i32 {
        ring::counts_to_steps(
            delta,
            self.modulus,
            self.reduction,
            self.microsteps_per_turn,
        )
    }

    /// Move by `steps` in encoder sense. Returns the command sent to the driver, which is reversed.
    pub fn step(&mut self, steps: i32) -> i32 {
        let command = -steps;
        self.actuator.step(command);
        command
    }

    pub fn read_position<B>(&mut self, bus: &mut B) -> Result<EncoderCount, B::Error>
    where
        B: EncoderBus,
        E: AngleEncoder<B>,
    {
        self.encoder.read_position(bus)
    }
}
