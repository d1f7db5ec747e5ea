// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Timer for unattended reflector drains.
//!
//! Rain collects in the dish while it sits parked. When nobody is operating the mount, the firmware
//! tips it with [`empty_water`](crate::control::PointingController::empty_water) once per period.
//! Operator activity restarts the period.
//!
//! Timestamps are free-running millisecond counters that may wrap.

use crate::config::PointingConfig;

/// Works in `no_std` and does not allocate memory.
#[derive(Copy, Clone, Debug)]
pub struct DrainSchedule {
    period_ms: u32,
    last_ms: u32,
}

impl DrainSchedule {
    /// Start the first period at `now_ms`.
    pub fn new(period_ms: u32, now_ms: u32) -> Self {
        Self {
            period_ms,
            last_ms: now_ms,
        }
    }

    /// Start the first period at `now_ms` using the configured drain interval.
    pub fn from_config(config: &PointingConfig, now_ms: u32) -> Self {
        Self::new(config.drain_period_ms, now_ms)
    }

    #[inline]
    pub fn period_ms(&self) -> u32 {
        self.period_ms
    }

    /// Restart the period, e.g. after an operator command.
    #[inline]
    pub fn note_activity(&mut self, now_ms: u32) {
        self.last_ms = now_ms;
    }

    /// Milliseconds since the period last restarted.
    #[inline]
    pub fn elapsed_ms(&self, now_ms: u32) -> u32 {
        now_ms.wrapping_sub(self.last_ms)
    }

    /// True once a full period has passed without activity.
    #[inline]
    pub fn is_due(&self, now_ms: u32) -> bool {
        self.elapsed_ms(now_ms) >= self.period_ms
    }

    /// Returns true at most once per period and restarts it when it does.
    pub fn poll(&mut self, now_ms: u32) -> bool {
        if self.is_due(now_ms) {
            self.last_ms = now_ms;
            true
        } else {
            false
        }
    }
}
