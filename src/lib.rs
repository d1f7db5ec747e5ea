// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # Antenna Mount Firmware Core
//!
//! This crate contains the pointing logic for a two-axis (azimuth/elevation) ground station
//! antenna driven by stepper motors and read back by absolute rotary encoders on a shared SPI bus.
//! It is `no_std` and hardware-agnostic: board support provides the bus, encoders, steppers and a
//! delay through the traits in [`hw`] and [`drivers`].
//!
//! ## Crate Structure
//!
//! | Module | Purpose |
//! | ------ | -------- |
//! | [`hw`] | Shared encoder bus contract and its electrical settings |
//! | [`drivers`] | Encoder and stepper contracts |
//! | [`motors`] | Encoder ring math and per-axis geometry |
//! | [`control`] | Pointing controller and drain schedule |
//! | [`config`] | Installation constants |
//! | [`error`] | Error types |
//!
//! ## Logging
//!
//! Diagnostics go through the [`log`] facade. Install a logger in the firmware image to see them;
//! without one they compile to no-ops.
//!
//! ## Getting Started
//!
//! Build docs:
//!
//! ```bash
//! cargo doc --no-deps --open
//! ```
//!
//! Run the host tests:
//!
//! ```bash
//! cargo test
//! ```
//!
//! ## License
//!
//! Licensed under the **MIT License**.
//!
//! © 2025–2026 Christopher Liu

#![cfg_attr(not(test), no_std)]

pub mod config;
pub mod control;
pub mod drivers;
pub mod error;
pub mod hw;
pub mod motors;

pub use config::PointingConfig;
pub use control::{DrainSchedule, Hardware, MoveSummary, PointingController, Pose};
pub use error::{ConfigError, Error};
