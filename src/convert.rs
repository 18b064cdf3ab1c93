//! Conversions between bar positions, zoom factors and display zoom levels.
//!
//! The bar position is linear in zoom level over `[MIN_ZOOM_LEVEL,
//! MAX_ZOOM_LEVEL]`; the factor is the `ZOOM_BASE` exponent of the level.
//! Factors are kept on a two-decimal grid so that conversions stay inverses
//! of each other and land exactly on preset table entries.

use crate::constants::{MAX_ZOOM_LEVEL, MIN_ZOOM_LEVEL, ZOOM_BASE};

/// Rounds a zoom factor to the two-decimal grid shared with the preset table.
pub fn round_factor(factor: f64) -> f64 {
    (factor * 100.0).round() / 100.0
}

/// Converts a bar position to the zoom level it displays.
///
/// `bar` must lie in `0..=max_bar`; anything else is a caller bug.
pub fn bar_to_level(bar: u32, max_bar: u32) -> f64 {
    debug_assert!(bar <= max_bar, "bar value {bar} outside 0..={max_bar}");
    let fraction = f64::from(bar) / f64::from(max_bar);
    MIN_ZOOM_LEVEL + fraction * (MAX_ZOOM_LEVEL - MIN_ZOOM_LEVEL)
}

/// Converts a bar position to a zoom factor, rounded to two decimals.
pub fn bar_to_factor(bar: u32, max_bar: u32) -> f64 {
    round_factor(bar_to_level(bar, max_bar).log(ZOOM_BASE))
}

/// Converts a zoom factor to its display zoom level.
pub fn factor_to_level(factor: f64) -> f64 {
    ZOOM_BASE.powf(factor)
}

/// Converts a zoom factor to the nearest bar position, clamped to
/// `0..=max_bar` so over-limit stored levels still map to a valid position.
pub fn factor_to_bar(factor: f64, max_bar: u32) -> u32 {
    let fraction = (factor_to_level(factor) - MIN_ZOOM_LEVEL) / (MAX_ZOOM_LEVEL - MIN_ZOOM_LEVEL);
    let bar = (fraction * f64::from(max_bar)).round();
    bar.clamp(0.0, f64::from(max_bar)) as u32
}

/// Formats a zoom level as whole-percent display text, e.g. `1.499` → "150%".
pub fn format_percent(level: f64) -> String {
    format!("{}%", (level * 100.0).round() as i64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{LEGACY_MAX_BAR, SLIDER_MAX_BAR};

    #[test]
    fn factor_zero_is_exactly_100_percent() {
        assert_eq!(factor_to_level(0.0), 1.0);
    }

    #[test]
    fn bar_endpoints_hit_level_bounds() {
        assert_eq!(bar_to_level(0, SLIDER_MAX_BAR), MIN_ZOOM_LEVEL);
        assert_eq!(bar_to_level(SLIDER_MAX_BAR, SLIDER_MAX_BAR), MAX_ZOOM_LEVEL);
        assert_eq!(bar_to_level(0, LEGACY_MAX_BAR), MIN_ZOOM_LEVEL);
        assert_eq!(bar_to_level(LEGACY_MAX_BAR, LEGACY_MAX_BAR), MAX_ZOOM_LEVEL);
    }

    #[test]
    fn bar_endpoints_match_preset_extremes() {
        // 50% and 300% are also the first and last stepper presets.
        assert_eq!(bar_to_factor(0, SLIDER_MAX_BAR), -3.80);
        assert_eq!(bar_to_factor(SLIDER_MAX_BAR, SLIDER_MAX_BAR), 6.03);
        assert_eq!(bar_to_factor(0, LEGACY_MAX_BAR), -3.80);
        assert_eq!(bar_to_factor(LEGACY_MAX_BAR, LEGACY_MAX_BAR), 6.03);
    }

    #[test]
    fn hundred_percent_bar_position() {
        assert_eq!(bar_to_factor(50, SLIDER_MAX_BAR), 0.0);
        assert_eq!(factor_to_bar(0.0, SLIDER_MAX_BAR), 50);
        assert_eq!(bar_to_factor(20, LEGACY_MAX_BAR), 0.0);
        assert_eq!(factor_to_bar(0.0, LEGACY_MAX_BAR), 20);
    }

    #[test]
    fn known_factor_to_bar_values() {
        // 150% and 133% on both control ranges.
        assert_eq!(factor_to_bar(2.22, SLIDER_MAX_BAR), 100);
        assert_eq!(factor_to_bar(1.56, SLIDER_MAX_BAR), 83);
        assert_eq!(factor_to_bar(2.22, LEGACY_MAX_BAR), 40);
        assert_eq!(factor_to_bar(1.56, LEGACY_MAX_BAR), 33);
    }

    #[test]
    fn factor_to_bar_clamps_out_of_range_levels() {
        // A stored level above 300% (OS adjustment overflow) still maps to
        // the top of the control, and anything below 50% to the bottom.
        assert_eq!(factor_to_bar(6.54, SLIDER_MAX_BAR), SLIDER_MAX_BAR);
        assert_eq!(factor_to_bar(-5.0, SLIDER_MAX_BAR), 0);
    }

    #[test]
    fn round_trip_within_one_bar_step() {
        for max_bar in [LEGACY_MAX_BAR, SLIDER_MAX_BAR] {
            for bar in 0..=max_bar {
                let back = factor_to_bar(bar_to_factor(bar, max_bar), max_bar);
                let drift = back.abs_diff(bar);
                assert!(drift <= 1, "bar {bar}/{max_bar} came back as {back}");
            }
        }
    }

    #[test]
    fn bar_to_level_is_monotonic() {
        let mut previous = f64::MIN;
        for bar in 0..=SLIDER_MAX_BAR {
            let level = bar_to_level(bar, SLIDER_MAX_BAR);
            assert!(level >= previous);
            previous = level;
        }
    }

    #[test]
    fn percent_text_rounds_to_whole_percent() {
        assert_eq!(format_percent(1.0), "100%");
        assert_eq!(format_percent(factor_to_level(2.22)), "150%");
        assert_eq!(format_percent(factor_to_level(6.54)), "329%");
        assert_eq!(format_percent(0.5), "50%");
    }
}
