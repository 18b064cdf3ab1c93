//! Page zoom value model: conversions between slider positions, logarithmic
//! zoom factors and display zoom levels, preset stepping, OS font-scale
//! adjustment, and a per-surface controller over a pluggable store.

pub mod constants;
pub mod controller;
pub mod convert;
pub mod presets;
pub mod scale;
pub mod store;

pub use controller::{ZoomController, ZoomError, ZoomUpdate};
pub use presets::StepError;
pub use scale::ScaleAdjustment;
pub use store::{ContextId, MemoryStore, StoreError, SurfaceId, ZoomStore};
