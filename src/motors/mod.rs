// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # Axis Abstractions
//!
//! This module contains axis-level wrappers that sit above the device contracts in `drivers`.
//!
//! ## Modules
//!
//! - [`ring`] - Encoder ring arithmetic shared by both axes.
//! - [`azimuth_axis`] - Multi-turn azimuth axis (bearing from true north).
//! - [`elevation_axis`] - Single-turn elevation axis (angle above the horizon).

pub mod azimuth_axis;
pub mod elevation_axis;
pub mod ring;

pub use azimuth_axis::AzimuthAxis;
pub use elevation_axis::ElevationAxis;
