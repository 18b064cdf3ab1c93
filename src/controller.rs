//! Per-surface controller sequencing conversions, presets and storage.
//!
//! One controller exists per displayed surface and owns no state besides a
//! snapshot of its construction-time configuration: every operation
//! re-reads the stored factor, computes the next state, and performs
//! exactly one write back through the [`ZoomStore`]. A store failure aborts
//! the operation with nothing persisted.

use log::debug;
use thiserror::Error;

use crate::constants::{DEFAULT_SNAP_TOLERANCE, PRESET_FACTORS};
use crate::convert::{bar_to_factor, bar_to_level, factor_to_bar, factor_to_level};
use crate::presets::{self, StepError};
use crate::scale::ScaleAdjustment;
use crate::store::{ContextId, StoreError, SurfaceId, ZoomStore};

#[derive(Error, Debug)]
pub enum ZoomError {
    #[error(transparent)]
    Step(#[from] StepError),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("bar value {bar} outside 0..={max_bar}")]
    BarOutOfRange { bar: u32, max_bar: u32 },
}

/// Outcome of a zoom operation: the control position to show and which
/// stepper buttons remain usable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZoomUpdate {
    pub bar: u32,
    pub can_decrease: bool,
    pub can_increase: bool,
}

/// Zoom state machine for one displayed surface.
///
/// Constructing it is the `Uninitialized → Active` transition; dropping it
/// disposes it. Operations are only callable while it exists, so the
/// disposed state needs no runtime checks.
pub struct ZoomController<S> {
    store: S,
    surface: SurfaceId,
    adjustment: ScaleAdjustment,
    max_bar: u32,
    /// Context default, cached for the surface's lifetime.
    default_factor: f64,
}

impl<S: ZoomStore> ZoomController<S> {
    /// Builds the controller for one surface: reads the context default,
    /// verifies the stored factor is reachable, and computes the initial
    /// control position.
    pub fn initialize(
        store: S,
        surface: SurfaceId,
        context: ContextId,
        adjustment: ScaleAdjustment,
        max_bar: u32,
    ) -> Result<Self, ZoomError> {
        let default_factor = store.default_zoom_factor(context)?;
        let controller = Self {
            store,
            surface,
            adjustment,
            max_bar,
            default_factor,
        };
        let initial = controller.current()?;
        debug!(
            "{} zoom initialized: bar {} of {}, default factor {}",
            controller.surface, initial.bar, max_bar, default_factor
        );
        Ok(controller)
    }

    /// Control position and enablement derived from the stored factor.
    pub fn current(&self) -> Result<ZoomUpdate, ZoomError> {
        Ok(self.update_for(self.raw_factor()?))
    }

    /// Display zoom level of the surface (1.0 = 100%).
    pub fn level(&self) -> Result<f64, ZoomError> {
        Ok(factor_to_level(self.raw_factor()?))
    }

    /// Steps to the next larger preset.
    pub fn increase(&mut self) -> Result<ZoomUpdate, ZoomError> {
        self.step(false)
    }

    /// Steps to the next smaller preset.
    pub fn decrease(&mut self) -> Result<ZoomUpdate, ZoomError> {
        self.step(true)
    }

    /// Applies a bar position from direct control manipulation. A position
    /// whose level lies within the snap tolerance of the default zoom is
    /// replaced by the default's exact position.
    pub fn set_bar(&mut self, bar: u32) -> Result<ZoomUpdate, ZoomError> {
        if bar > self.max_bar {
            return Err(ZoomError::BarOutOfRange {
                bar,
                max_bar: self.max_bar,
            });
        }
        let level = bar_to_level(bar, self.max_bar);
        let default_level = factor_to_level(self.default_factor);
        let raw_factor = if (level - default_level).abs() <= DEFAULT_SNAP_TOLERANCE {
            debug!("{}: bar {bar} snapped to default zoom", self.surface);
            self.default_factor
        } else {
            bar_to_factor(bar, self.max_bar)
        };
        self.persist(raw_factor)?;
        Ok(self.update_for(raw_factor))
    }

    /// Returns the surface to the context's default zoom.
    pub fn reset(&mut self) -> Result<ZoomUpdate, ZoomError> {
        self.set_bar(factor_to_bar(self.default_factor, self.max_bar))
    }

    /// Default zoom factor cached at initialization.
    pub fn default_factor(&self) -> f64 {
        self.default_factor
    }

    pub fn max_bar(&self) -> u32 {
        self.max_bar
    }

    fn raw_factor(&self) -> Result<f64, ZoomError> {
        let stored = self.store.zoom_factor(self.surface)?;
        Ok(self.adjustment.from_storage(stored))
    }

    fn step(&mut self, decreasing: bool) -> Result<ZoomUpdate, ZoomError> {
        let raw_factor = self.raw_factor()?;
        let index = presets::next_index(decreasing, raw_factor)?;
        let next = PRESET_FACTORS[index];
        self.persist(next)?;
        Ok(self.update_for(next))
    }

    fn persist(&mut self, raw_factor: f64) -> Result<(), StoreError> {
        let stored = self.adjustment.to_storage(raw_factor);
        self.store.set_zoom_factor(self.surface, stored)?;
        debug!(
            "{}: factor {raw_factor} persisted as {stored}",
            self.surface
        );
        Ok(())
    }

    fn update_for(&self, raw_factor: f64) -> ZoomUpdate {
        ZoomUpdate {
            bar: factor_to_bar(raw_factor, self.max_bar),
            can_decrease: presets::can_decrease(raw_factor),
            can_increase: presets::can_increase(raw_factor),
        }
    }
}
