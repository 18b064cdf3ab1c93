//! Discrete stepping over the fixed preset factor table.

use thiserror::Error;

use crate::constants::PRESET_FACTORS;

/// Raised when a step is requested past either end of the preset table.
/// Callers are expected to disable the stepper with [`can_decrease`] /
/// [`can_increase`] before this can happen.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum StepError {
    #[error("no zoom preset below factor {0}")]
    NoSmallerPreset(f64),
    #[error("no zoom preset above factor {0}")]
    NoLargerPreset(f64),
}

/// Whether a decrease step from `factor` has somewhere to go.
pub fn can_decrease(factor: f64) -> bool {
    factor > PRESET_FACTORS[0]
}

/// Whether an increase step from `factor` has somewhere to go.
pub fn can_increase(factor: f64) -> bool {
    factor < PRESET_FACTORS[PRESET_FACTORS.len() - 1]
}

/// Index of the next preset strictly beyond `current_factor` in the
/// requested direction.
///
/// Decreasing lands on the greatest preset strictly below the current
/// factor, increasing on the smallest strictly above it, so repeated steps
/// never oscillate even when the factor sits off-grid after a slider drag.
pub fn next_index(decreasing: bool, current_factor: f64) -> Result<usize, StepError> {
    let outcome = PRESET_FACTORS.binary_search_by(|preset| preset.total_cmp(&current_factor));
    match outcome {
        Ok(index) if decreasing => index
            .checked_sub(1)
            .ok_or(StepError::NoSmallerPreset(current_factor)),
        Ok(index) if index + 1 < PRESET_FACTORS.len() => Ok(index + 1),
        Ok(_) => Err(StepError::NoLargerPreset(current_factor)),
        Err(insertion) if decreasing => insertion
            .checked_sub(1)
            .ok_or(StepError::NoSmallerPreset(current_factor)),
        Err(insertion) if insertion < PRESET_FACTORS.len() => Ok(insertion),
        Err(_) => Err(StepError::NoLargerPreset(current_factor)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_sorted_and_symmetric_around_zero() {
        assert!(PRESET_FACTORS.windows(2).all(|pair| pair[0] < pair[1]));
        assert_eq!(PRESET_FACTORS.len(), 14);
        assert_eq!(PRESET_FACTORS[5], 0.0);
    }

    #[test]
    fn steps_from_exact_preset() {
        // From 100% the neighbors are -0.58 and 0.52.
        assert_eq!(next_index(true, 0.0), Ok(4));
        assert_eq!(next_index(false, 0.0), Ok(6));
        assert_eq!(next_index(true, 2.22), Ok(8));
        assert_eq!(next_index(false, 2.22), Ok(10));
    }

    #[test]
    fn steps_from_off_grid_factor() {
        // 1.71 sits between the presets 1.56 and 2.22.
        assert_eq!(next_index(false, 1.71), Ok(9));
        assert_eq!(next_index(true, 1.71), Ok(8));
    }

    #[test]
    fn stepping_past_either_end_is_an_error() {
        let smallest = PRESET_FACTORS[0];
        let largest = PRESET_FACTORS[PRESET_FACTORS.len() - 1];
        assert_eq!(
            next_index(true, smallest),
            Err(StepError::NoSmallerPreset(smallest))
        );
        assert_eq!(
            next_index(false, largest),
            Err(StepError::NoLargerPreset(largest))
        );
        assert_eq!(
            next_index(true, smallest - 1.0),
            Err(StepError::NoSmallerPreset(smallest - 1.0))
        );
        assert_eq!(
            next_index(false, largest + 1.0),
            Err(StepError::NoLargerPreset(largest + 1.0))
        );
    }

    #[test]
    fn steps_are_strictly_monotonic() {
        for factor in [-3.5, -1.0, -0.58, 0.0, 0.3, 1.22, 1.71, 4.9] {
            let up = next_index(false, factor).unwrap();
            assert!(PRESET_FACTORS[up] > factor);
            let down = next_index(true, factor).unwrap();
            assert!(PRESET_FACTORS[down] < factor);
        }
    }

    #[test]
    fn enablement_matches_table_bounds() {
        assert!(!can_decrease(PRESET_FACTORS[0]));
        assert!(can_decrease(-3.79));
        assert!(!can_increase(6.03));
        assert!(can_increase(6.02));
    }
}
