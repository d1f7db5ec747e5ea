// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # Control Algorithms
//!
//! This module provides the pointing logic for the antenna mount.
//!
//! ## Modules
//!
//! - [`pointing_controller`] - Open-loop az/el pointing with cable untangling and zenith clamping.
//! - [`drain_schedule`] - Period timer for unattended reflector drains.

pub mod drain_schedule;
pub mod pointing_controller;

pub use drain_schedule::DrainSchedule;
pub use pointing_controller::{Hardware, MoveSummary, PointingController, Pose};
