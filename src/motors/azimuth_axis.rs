// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Azimuth axis: a multi-turn encoder paired with a stepper.
//!
//! This module converts between compass bearings and azimuth encoder counts, and between encoder
//! distances and motor microsteps.
//!
//! Geometry parameters:
//! - `north_count`: encoder count when the dish faces true north
//! - `reduction`: motor turns per antenna turn
//! - `microsteps_per_turn`: driver microsteps per motor turn

use crate::drivers::{EncoderCount, MultiTurnEncoder, StepActuator, TurnCount};
use crate::hw::EncoderBus;
use crate::motors::ring;

pub struct AzimuthAxis<E, A> {
    encoder: E,
    actuator: A,
    modulus: u32,
    north_count: EncoderCount,
    reduction: f32,
    microsteps_per_turn: u32,
}

impl<E, A> AzimuthAxis<E, A>
where
    A: StepActuator,
{
    /// Create a new azimuth axis. Bearings grow eastward from `north_count`.
    pub fn new(
        encoder: E,
        actuator: A,
        modulus: u32,
        north_count: EncoderCount,
        reduction: f32,
        microsteps_per_turn: u32,
    ) -> Self {
        Self {
            encoder,
            actuator,
            modulus,
            north_count,
            reduction,
            microsteps_per_turn,
        }
    }

    /// Tear down this axis and return its encoder and actuator.
    pub fn free(self) -> (E, A) {
        (self.encoder, self.actuator)
    }

    #[inline]
    pub fn modulus(&self) -> u32 {
        self.modulus
    }

    /// Encoder count for a compass bearing. Any finite bearing is accepted.
    pub fn target_count(&self, bearing_deg: f32) -> EncoderCount {
        let bearing = ring::normalize_deg(bearing_deg);
        ring::deg_to_count(bearing, self.north_count, self.modulus)
    }

    /// Compass bearing in `[0, 360)` for an encoder count.
    pub fn bearing_deg(&self, count: EncoderCount) -> f32 {
        ring::count_to_deg(count, self.north_count, self.modulus)
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

    /// Motor microsteps for one full antenna turn.
    #[inline]
    pub fn full_turn_steps(&self) -> i32 {
        self.steps_for_counts(self.modulus as i32)
    }

    /// Issue a step command. Positive steps turn eastward.
    #[inline]
    pub fn step(&mut self, steps: i32) {
        self.actuator.step(steps);
    }

    pub fn read_position<B>(&mut self, bus: &mut B) -> Result<EncoderCount, B::Error>
    where
        B: EncoderBus,
        E: MultiTurnEncoder<B>,
    {
        self.encoder.read_position(bus)
    }

    pub fn read_turn_count<B>(&mut self, bus: &mut B) -> Result<TurnCount, B::Error>
    where
        B: EncoderBus,
        E: MultiTurnEncoder<B>,
    {
        self.encoder.read_turn_count(bus)
    }
}
