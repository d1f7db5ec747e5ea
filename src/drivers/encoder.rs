// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Absolute rotary encoder contracts.
//!
//! Register framing lives with the concrete encoder driver. This module only fixes what the
//! pointing logic consumes: a position on the encoder ring and, for the azimuth axis, a signed turn
//! counter.

use crate::hw::EncoderBus;

/// Absolute rotor position within one mechanical turn, in `[0, encoder_counts)`.
pub type EncoderCount = u32;

/// Signed number of full turns completed, monotonic with rotation direction.
pub type TurnCount = i32;

/// Single-turn absolute encoder on the shared bus.
pub trait AngleEncoder<B: EncoderBus> {
    /// Blocking bus transaction returning the current ring position.
    fn read_position(&mut self, bus: &mut B) -> Result<EncoderCount, B::Error>;
}

/// Absolute encoder that also tracks completed turns.
pub trait MultiTurnEncoder<B: EncoderBus>: AngleEncoder<B> {
    fn read_turn_count(&mut self, bus: &mut B) -> Result<TurnCount, B::Error>;
}
