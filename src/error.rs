// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Error types for the pointing controller.

use thiserror::Error;

use crate::drivers::{EncoderCount, TurnCount};

/// Rejected [`PointingConfig`](crate::config::PointingConfig) field.
#[derive(Copy, Clone, Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("encoder ring must have between 4 and 2^24 counts, got {0}")]
    EncoderCounts(u32),
    #[error("azimuth north count {count} outside encoder ring of {modulus}")]
    NorthCount { count: EncoderCount, modulus: u32 },
    #[error("elevation zenith count {count} outside encoder ring of {modulus}")]
    ZenithCount { count: EncoderCount, modulus: u32 },
    #[error("gear reduction must be finite and positive, got {0}")]
    Reduction(f32),
    #[error("microsteps per turn must be non-zero")]
    Microsteps,
    #[error("zenith safety margin must be in [0, 90) degrees, got {0}")]
    ZenithMargin(f32),
    #[error("maximum azimuth rotation must be finite and positive, got {0}")]
    MaxRotation(f32),
    #[error("at least one drain read is required")]
    DrainReads,
    #[error("drain elevation must be finite, got {0}")]
    DrainElevation(f32),
    #[error("drain period must be non-zero")]
    DrainPeriod,
    #[error("anchor turn range [{min}, {max}] is empty")]
    AnchorRange { min: TurnCount, max: TurnCount },
}

/// Error returned by [`PointingController`](crate::control::PointingController) operations.
///
/// `E` is the encoder bus error.
#[derive(Debug, Error)]
pub enum Error<E> {
    #[error("encoder bus transaction failed: {0:?}")]
    Bus(E),
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("calibration anchor at turn {turns} outside accepted range [{min}, {max}]")]
    AnchorOutOfRange {
        turns: TurnCount,
        min: TurnCount,
        max: TurnCount,
    },
    #[error("encoder returned {count}, outside ring of {modulus} counts")]
    CountOutOfRange { count: EncoderCount, modulus: u32 },
    #[error("commanded angle is not finite")]
    NonFiniteAngle,
}
