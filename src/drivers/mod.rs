// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # Device Contracts
//!
//! This module holds the device-level interfaces the pointing logic drives. Concrete drivers
//! (encoder register protocol, step pulse generation) implement these traits outside this crate.
//!
//! ## Contracts
//!
//! - [`encoder`] – absolute single-turn and multi-turn encoders on the shared bus
//! - [`stepper`] – signed, fire-and-forget step commands

pub mod encoder;
pub mod stepper;

pub use encoder::{AngleEncoder, EncoderCount, MultiTurnEncoder, TurnCount};
pub use stepper::StepActuator;
