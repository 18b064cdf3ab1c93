//! Font-scale corrections applied around the persisted zoom factor.
//!
//! The OS text-scale setting (and, for desktop-layout surfaces, an extra
//! desktop-site multiplier) is folded into the factor that gets persisted,
//! so that pages render at `level × scale` while the UI keeps talking in
//! unadjusted levels. The two directions are exact inverses on the
//! two-decimal factor grid.

use serde::{Deserialize, Serialize};

use crate::constants::ZOOM_BASE;
use crate::convert::{factor_to_level, round_factor};

/// Snapshot of the multiplicative corrections for one displayed surface,
/// taken when the surface is built and fixed for its lifetime.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ScaleAdjustment {
    /// OS-reported text scale multiplier.
    pub system_scale: f32,
    /// Extra correction while the surface renders a desktop-style layout.
    pub desktop_scale: f64,
    /// When false, both multipliers are treated as 1.0 whatever they hold.
    pub enabled: bool,
}

impl Default for ScaleAdjustment {
    fn default() -> Self {
        Self {
            system_scale: 1.0,
            desktop_scale: 1.0,
            enabled: true,
        }
    }
}

impl ScaleAdjustment {
    /// An adjustment that leaves factors untouched in both directions.
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }

    fn combined(&self) -> f64 {
        if self.enabled {
            f64::from(self.system_scale) * self.desktop_scale
        } else {
            1.0
        }
    }

    /// Converts a raw display factor into the value actually persisted.
    ///
    /// The stored level may land above the nominal maximum; it is not
    /// clamped here, callers display whatever the law produces.
    pub fn to_storage(&self, raw_factor: f64) -> f64 {
        round_factor((factor_to_level(raw_factor) * self.combined()).log(ZOOM_BASE))
    }

    /// Inverse of [`to_storage`](Self::to_storage): recovers the display
    /// factor from a stored value.
    pub fn from_storage(&self, stored_factor: f64) -> f64 {
        round_factor((factor_to_level(stored_factor) / self.combined()).log(ZOOM_BASE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn system(scale: f32) -> ScaleAdjustment {
        ScaleAdjustment {
            system_scale: scale,
            ..ScaleAdjustment::default()
        }
    }

    #[test]
    fn unit_scale_is_identity() {
        let adjustment = ScaleAdjustment::default();
        assert_eq!(adjustment.to_storage(2.22), 2.22);
        assert_eq!(adjustment.from_storage(1.56), 1.56);
    }

    #[test]
    fn disabled_adjustment_ignores_multipliers() {
        let adjustment = ScaleAdjustment {
            system_scale: 2.2,
            desktop_scale: 1.3,
            enabled: false,
        };
        assert_eq!(adjustment.to_storage(0.52), 0.52);
        assert_eq!(adjustment.from_storage(0.52), 0.52);
    }

    #[test]
    fn large_system_scale_round_trips() {
        let adjustment = system(2.2);
        // 300% stored reads back as ~136% displayed.
        assert_eq!(adjustment.from_storage(6.03), 1.71);
        // Persisting 150% lands above the nominal 300% ceiling.
        assert_eq!(adjustment.to_storage(2.22), 6.54);
    }

    #[test]
    fn desktop_scale_multiplies_with_system_scale() {
        let combined = ScaleAdjustment {
            system_scale: 2.0,
            desktop_scale: 1.1,
            enabled: true,
        };
        let separate = ScaleAdjustment {
            system_scale: 2.2,
            ..ScaleAdjustment::default()
        };
        assert_eq!(combined.to_storage(1.22), separate.to_storage(1.22));
    }

    #[test]
    fn storage_directions_invert_on_the_factor_grid() {
        let adjustment = system(1.3);
        for factor in [-3.80, -0.58, 0.0, 1.56, 3.07, 6.03] {
            let stored = adjustment.to_storage(factor);
            assert_eq!(adjustment.from_storage(stored), factor);
        }
    }
}
