// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Installation constants for the antenna mount.
//!
//! Everything the pointing logic treats as fixed for a given physical installation lives in
//! [`PointingConfig`]. The defaults describe the reference mount; override individual fields with
//! the `with_*` builders.
//!
//! ```
//! use antenna_mount::config::PointingConfig;
//!
//! let config = PointingConfig::default()
//!     .with_az_north_count(812)
//!     .with_elev_zenith_count(3071);
//! assert!(config.validate().is_ok());
//! ```

use crate::drivers::{EncoderCount, TurnCount};
use crate::error::ConfigError;
use crate::hw::BusSettings;

/// Largest supported encoder ring. Counts stay exact in `f32` and ring distances fit in `i32`.
pub const MAX_ENCODER_COUNTS: u32 = 1 << 24;

/// Geometry, safety limits and sequencing constants.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PointingConfig {
    /// Encoder ring modulus (counts per encoder turn), shared by both axes.
    pub encoder_counts: u32,

    /// Azimuth encoder count when the dish faces true north.
    pub az_north_count: EncoderCount,
    /// Azimuth gear reduction (motor turns per antenna turn).
    pub az_reduction: f32,
    /// Azimuth driver microsteps per motor turn.
    pub az_microsteps_per_turn: u32,
    /// Largest rotation away from the calibration anchor, either direction, before a move is
    /// preceded by a one-turn unwind (degrees).
    pub az_max_rotation_deg: f32,

    /// Elevation encoder count when the dish points at the zenith.
    pub elev_zenith_count: EncoderCount,
    /// Elevation gear reduction (motor turns per antenna turn).
    pub elev_reduction: f32,
    /// Elevation driver microsteps per motor turn.
    pub elev_microsteps_per_turn: u32,
    /// Keep-out band below the zenith (degrees).
    pub zenith_margin_deg: f32,

    /// Throwaway read rounds after the bus is opened.
    pub drain_reads: u8,
    /// Settle delay after each throwaway read (ms).
    pub drain_settle_ms: u32,

    /// Dish elevation that lets water run off the reflector (degrees).
    pub drain_elevation_deg: f32,
    /// How long the dish is held at the drain elevation (ms).
    pub drain_dwell_ms: u32,
    /// Interval between unattended drains (ms).
    pub drain_period_ms: u32,

    /// Encoder bus electrical settings.
    pub bus: BusSettings,

    /// Accepted calibration anchor turn counts, inclusive. `None` accepts any anchor.
    pub anchor_turn_range: Option<(TurnCount, TurnCount)>,
}

impl Default for PointingConfig {
    fn default() -> Self {
        Self {
            encoder_counts: 4096,

            az_north_count: 0,
            az_reduction: 10.0,
            az_microsteps_per_turn: 3200,
            az_max_rotation_deg: 540.0,

            elev_zenith_count: 1024,
            elev_reduction: 30.0,
            elev_microsteps_per_turn: 3200,
            zenith_margin_deg: 5.0,

            drain_reads: 10,
            drain_settle_ms: 50,

            drain_elevation_deg: 60.0,
            drain_dwell_ms: 3_000,
            drain_period_ms: 3_600_000,

            bus: BusSettings::DEFAULT,

            anchor_turn_range: None,
        }
    }
}

impl PointingConfig {
    /// Highest elevation the controller will command.
    #[inline]
    pub fn max_elevation_deg(&self) -> f32 {
        90.0 - self.zenith_margin_deg
    }

    pub fn with_encoder_counts(mut self, counts: u32) -> Self {
        self.encoder_counts = counts;
        self
    }

    pub fn with_az_north_count(mut self, count: EncoderCount) -> Self {
        self.az_north_count = count;
        self
    }

    /// Set azimuth gear reduction and driver microstepping.
    pub fn with_az_drive(mut self, reduction: f32, microsteps_per_turn: u32) -> Self {
        self.az_reduction = reduction;
        self.az_microsteps_per_turn = microsteps_per_turn;
        self
    }

    pub fn with_az_max_rotation_deg(mut self, deg: f32) -> Self {
        self.az_max_rotation_deg = deg;
        self
    }

    pub fn with_elev_zenith_count(mut self, count: EncoderCount) -> Self {
        self.elev_zenith_count = count;
        self
    }

    /// Set elevation gear reduction and driver microstepping.
    pub fn with_elev_drive(mut self, reduction: f32, microsteps_per_turn: u32) -> Self {
        self.elev_reduction = reduction;
        self.elev_microsteps_per_turn = microsteps_per_turn;
        self
    }

    pub fn with_zenith_margin_deg(mut self, deg: f32) -> Self {
        self.zenith_margin_deg = deg;
        self
    }

    pub fn with_bus(mut self, bus: BusSettings) -> Self {
        self.bus = bus;
        self
    }

    /// Reject calibration anchors outside `[min, max]`.
    pub fn with_anchor_turn_range(mut self, min: TurnCount, max: TurnCount) -> Self {
        self.anchor_turn_range = Some((min, max));
        self
    }

    /// Check every field against what the geometry math can handle.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let modulus = self.encoder_counts;
        if !(4..=MAX_ENCODER_COUNTS).contains(&modulus) {
            return Err(ConfigError::EncoderCounts(modulus));
        }
        if self.az_north_count >= modulus {
            return Err(ConfigError::NorthCount {
                count: self.az_north_count,
                modulus,
            });
        }
        if self.elev_zenith_count >= modulus {
            return Err(ConfigError::ZenithCount {
                count: self.elev_zenith_count,
                modulus,
            });
        }
        for reduction in [self.az_reduction, self.elev_reduction] {
            if !(reduction.is_finite() && reduction > 0.0) {
                return Err(ConfigError::Reduction(reduction));
            }
        }
        if self.az_microsteps_per_turn == 0 || self.elev_microsteps_per_turn == 0 {
            return Err(ConfigError::Microsteps);
        }
        if !(0.0..90.0).contains(&self.zenith_margin_deg) {
            return Err(ConfigError::ZenithMargin(self.zenith_margin_deg));
        }
        if !(self.az_max_rotation_deg.is_finite() && self.az_max_rotation_deg > 0.0) {
            return Err(ConfigError::MaxRotation(self.az_max_rotation_deg));
        }
        if self.drain_reads == 0 {
            return Err(ConfigError::DrainReads);
        }
        if !self.drain_elevation_deg.is_finite() {
            return Err(ConfigError::DrainElevation(self.drain_elevation_deg));
        }
        if self.drain_period_ms == 0 {
            return Err(ConfigError::DrainPeriod);
        }
        if let Some((min, max)) = self.anchor_turn_range {
            if min > max {
                return Err(ConfigError::AnchorRange { min, max });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = PointingConfig::default();
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.drain_reads, 10);
        assert_eq!(config.drain_settle_ms, 50);
        assert_eq!(config.drain_dwell_ms, 3_000);
        assert_eq!(config.drain_elevation_deg, 60.0);
        assert_eq!(config.max_elevation_deg(), 85.0);
    }

    #[test]
    fn rejects_offsets_outside_ring() {
        let config = PointingConfig::default().with_az_north_count(4096);
        assert_eq!(
            config.validate(),
            Err(ConfigError::NorthCount {
                count: 4096,
                modulus: 4096
            })
        );

        let config = PointingConfig::default()
            .with_encoder_counts(1024)
            .with_elev_zenith_count(1024);
        assert_eq!(
            config.validate(),
            Err(ConfigError::ZenithCount {
                count: 1024,
                modulus: 1024
            })
        );
    }

    #[test]
    fn rejects_degenerate_drive() {
        let config = PointingConfig::default().with_az_drive(0.0, 3200);
        assert_eq!(config.validate(), Err(ConfigError::Reduction(0.0)));

        let config = PointingConfig::default().with_elev_drive(f32::NAN, 3200);
        assert!(matches!(config.validate(), Err(ConfigError::Reduction(_))));

        let config = PointingConfig::default().with_elev_drive(30.0, 0);
        assert_eq!(config.validate(), Err(ConfigError::Microsteps));
    }

    #[test]
    fn rejects_bad_limits() {
        let config = PointingConfig::default().with_zenith_margin_deg(90.0);
        assert_eq!(config.validate(), Err(ConfigError::ZenithMargin(90.0)));

        let config = PointingConfig::default().with_zenith_margin_deg(-1.0);
        assert_eq!(config.validate(), Err(ConfigError::ZenithMargin(-1.0)));

        let config = PointingConfig::default().with_az_max_rotation_deg(0.0);
        assert_eq!(config.validate(), Err(ConfigError::MaxRotation(0.0)));

        let config = PointingConfig::default().with_anchor_turn_range(3, -3);
        assert_eq!(
            config.validate(),
            Err(ConfigError::AnchorRange { min: 3, max: -3 })
        );
    }

    #[test]
    fn rejects_tiny_ring() {
        let config = PointingConfig::default()
            .with_encoder_counts(2)
            .with_elev_zenith_count(0);
        assert_eq!(config.validate(), Err(ConfigError::EncoderCounts(2)));
    }

    #[test]
    fn rejects_oversized_ring() {
        let config = PointingConfig::default()
            .with_encoder_counts(3_000_000_000)
            .with_elev_zenith_count(2_999_999_999);
        assert_eq!(
            config.validate(),
            Err(ConfigError::EncoderCounts(3_000_000_000))
        );

        let config = PointingConfig::default().with_encoder_counts(MAX_ENCODER_COUNTS + 1);
        assert_eq!(
            config.validate(),
            Err(ConfigError::EncoderCounts(MAX_ENCODER_COUNTS + 1))
        );

        let config = PointingConfig::default()
            .with_encoder_counts(MAX_ENCODER_COUNTS)
            .with_elev_zenith_count(MAX_ENCODER_COUNTS - 1);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn rejects_zero_drain_period() {
        let config = PointingConfig {
            drain_period_ms: 0,
            ..PointingConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::DrainPeriod));
    }
}
