// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Stepper actuator contract.

/// Write-only stepper drive.
///
/// The sign of `steps` selects direction. Whether the call blocks until the pulses are out is up to
/// the implementation; callers never read the actuator back.
pub trait StepActuator {
    fn step(&mut self, steps: i32);
}
