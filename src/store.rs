//! Persistence interface for zoom factors, plus an in-memory implementation.

use std::collections::{HashMap, HashSet};
use std::fmt;

use thiserror::Error;

/// Identifies one displayed surface (a tab, a preview pane).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SurfaceId(pub u64);

/// Identifies the browsing context that owns a default zoom factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContextId(pub u64);

impl fmt::Display for SurfaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "surface {}", self.0)
    }
}

impl fmt::Display for ContextId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "context {}", self.0)
    }
}

/// Errors a zoom store can report. Reads and writes are single synchronous
/// calls; a failure aborts the whole controller operation, nothing retries.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("{0} was torn down")]
    SurfaceDetached(SurfaceId),
    #[error("zoom storage backend: {0}")]
    Backend(String),
}

/// Narrow persistence interface the zoom model talks through.
///
/// Implementations must keep per-surface and per-context values fully
/// independent; several controllers may share one store.
pub trait ZoomStore {
    /// Stored (adjusted) zoom factor for a surface.
    fn zoom_factor(&self, surface: SurfaceId) -> Result<f64, StoreError>;

    /// Persists the stored (adjusted) zoom factor for a surface.
    fn set_zoom_factor(&mut self, surface: SurfaceId, factor: f64) -> Result<(), StoreError>;

    /// Default zoom factor of a browsing context, the target of a reset.
    fn default_zoom_factor(&self, context: ContextId) -> Result<f64, StoreError>;

    /// Persists the default zoom factor of a browsing context.
    fn set_default_zoom_factor(
        &mut self,
        context: ContextId,
        factor: f64,
    ) -> Result<(), StoreError>;
}

/// `HashMap`-backed store. Unset surfaces and contexts read as factor 0.0
/// (100%). Detached surfaces fail every access, mirroring a surface torn
/// down mid-call.
#[derive(Debug, Default)]
pub struct MemoryStore {
    factors: HashMap<SurfaceId, f64>,
    defaults: HashMap<ContextId, f64>,
    detached: HashSet<SurfaceId>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks a surface as gone; subsequent accesses return
    /// [`StoreError::SurfaceDetached`].
    pub fn detach(&mut self, surface: SurfaceId) {
        self.detached.insert(surface);
    }

    fn check(&self, surface: SurfaceId) -> Result<(), StoreError> {
        if self.detached.contains(&surface) {
            Err(StoreError::SurfaceDetached(surface))
        } else {
            Ok(())
        }
    }
}

impl ZoomStore for MemoryStore {
    fn zoom_factor(&self, surface: SurfaceId) -> Result<f64, StoreError> {
        self.check(surface)?;
        Ok(self.factors.get(&surface).copied().unwrap_or(0.0))
    }

    fn set_zoom_factor(&mut self, surface: SurfaceId, factor: f64) -> Result<(), StoreError> {
        self.check(surface)?;
        self.factors.insert(surface, factor);
        Ok(())
    }

    fn default_zoom_factor(&self, context: ContextId) -> Result<f64, StoreError> {
        Ok(self.defaults.get(&context).copied().unwrap_or(0.0))
    }

    fn set_default_zoom_factor(
        &mut self,
        context: ContextId,
        factor: f64,
    ) -> Result<(), StoreError> {
        self.defaults.insert(context, factor);
        Ok(())
    }
}
