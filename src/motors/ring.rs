// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Encoder ring arithmetic.
//!
//! An absolute encoder reports its shaft angle as a count in `[0, modulus)`. Counts wrap, so
//! differences between them only make sense modulo one turn. These helpers convert between degrees
//! and ring counts, pick the short way around the ring, and scale ring distances to motor steps.
//!
//! All functions are pure and take the ring `modulus` explicitly so both axes can share them.

use micromath::F32Ext;

use crate::drivers::EncoderCount;

/// Degrees in one full turn.
pub const FULL_TURN_DEG: f32 = 360.0;

/// Fold any finite angle into `[0, 360)`.
///
/// The magnitude is reduced first and the sign applied afterwards, so the remainder is never
/// taken of a negative value.
pub fn normalize_deg(deg: f32) -> f32 {
    let folded = F32Ext::abs(deg) % FULL_TURN_DEG;
    let deg = if deg < 0.0 {
        FULL_TURN_DEG - folded
    } else {
        folded
    };
    // 360 - tiny rounds up to 360 in f32
    if deg >= FULL_TURN_DEG {
        deg - FULL_TURN_DEG
    } else {
        deg
    }
}

/// Map an angle to the ring count it lands on, shifted by `offset` counts.
pub fn deg_to_count(deg: f32, offset: EncoderCount, modulus: u32) -> EncoderCount {
    let counts = F32Ext::round(deg / FULL_TURN_DEG * modulus as f32) as i64;
    (counts + offset as i64).rem_euclid(modulus as i64) as EncoderCount
}

/// Angle in `[0, 360)` of `count` measured from the ring position `offset`.
pub fn count_to_deg(count: EncoderCount, offset: EncoderCount, modulus: u32) -> f32 {
    let rel = (count as i64 - offset as i64).rem_euclid(modulus as i64);
    rel as f32 / modulus as f32 * FULL_TURN_DEG
}

/// Signed ring distance from `current` to `target`, taking the shorter way around.
///
/// The result never exceeds half a turn in magnitude and `(current + delta) mod modulus` equals
/// `target`.
pub fn shortest_delta(target: EncoderCount, current: EncoderCount, modulus: u32) -> i32 {
    let modulus = modulus as i32;
    let mut delta = target as i32 - current as i32;

    if delta.abs() > modulus / 2 {
        if delta < 0 {
            delta += modulus;
        } else {
            delta -= modulus;
        }
    }

    delta
}

/// Convert a ring distance to motor microsteps, truncating toward zero.
///
/// `reduction` is motor turns per output turn.
pub fn counts_to_steps(delta: i32, modulus: u32, reduction: f32, microsteps_per_turn: u32) -> i32 {
    (delta as f32 / modulus as f32 * reduction * microsteps_per_turn as f32) as i32
}

/// Ring count of the horizon given the ring count of the zenith (a quarter turn earlier).
pub fn horizon_offset(zenith: EncoderCount, modulus: u32) -> EncoderCount {
    (zenith % modulus + modulus - modulus / 4) % modulus
}

/// Clamp an elevation into `[0, max_deg]`.
#[inline]
pub fn clamp_elevation(deg: f32, max_deg: f32) -> f32 {
    deg.clamp(0.0, max_deg)
}

/// Rotation since calibration, in degrees, once a move of `delta` counts from `current` completes.
///
/// `turns` is the completed-turn count relative to the calibration anchor.
pub fn predicted_rotation_deg(
    turns: i32,
    current: EncoderCount,
    delta: i32,
    modulus: u32,
) -> f32 {
    let landing = current as i64 + delta as i64;
    (turns as f32 + landing as f32 / modulus as f32) * FULL_TURN_DEG
}
