//! RON-file-backed zoom store for the demo surface.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use log::info;
use page_zoom::{ContextId, StoreError, SurfaceId, ZoomStore};
use ron::ser::PrettyConfig;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when loading the persisted zoom data.
#[derive(Error, Debug)]
pub enum StoreLoadError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: String,
        source: ron::de::SpannedError,
    },
}

/// On-disk layout: stored factors keyed by surface id, defaults keyed by
/// context id.
#[derive(Debug, Default, Serialize, Deserialize)]
struct PersistedZoom {
    factors: HashMap<u64, f64>,
    defaults: HashMap<u64, f64>,
}

/// Write-through store persisting every change to a RON file.
pub struct RonStore {
    path: PathBuf,
    data: PersistedZoom,
}

/// Default store location under the platform config directory.
pub fn default_store_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("page-zoom")
        .join("zoom.ron")
}

impl RonStore {
    /// Loads the store from `path`. A missing file starts empty; an
    /// unreadable or corrupt one is an error the caller decides about.
    pub fn load(path: PathBuf) -> Result<Self, StoreLoadError> {
        if !path.exists() {
            info!("no zoom store at {}, starting fresh", path.display());
            return Ok(Self::empty(path));
        }
        let text = fs::read_to_string(&path).map_err(|source| StoreLoadError::Read {
            path: path.display().to_string(),
            source,
        })?;
        let data = ron::from_str(&text).map_err(|source| StoreLoadError::Parse {
            path: path.display().to_string(),
            source,
        })?;
        Ok(Self { path, data })
    }

    pub fn empty(path: PathBuf) -> Self {
        Self {
            path,
            data: PersistedZoom::default(),
        }
    }

    fn save(&self) -> Result<(), StoreError> {
        let text = ron::ser::to_string_pretty(&self.data, PrettyConfig::default())
            .map_err(|err| StoreError::Backend(err.to_string()))?;
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|err| StoreError::Backend(err.to_string()))?;
        }
        fs::write(&self.path, text).map_err(|err| StoreError::Backend(err.to_string()))
    }
}

impl ZoomStore for RonStore {
    fn zoom_factor(&self, surface: SurfaceId) -> Result<f64, StoreError> {
        Ok(self.data.factors.get(&surface.0).copied().unwrap_or(0.0))
    }

    fn set_zoom_factor(&mut self, surface: SurfaceId, factor: f64) -> Result<(), StoreError> {
        self.data.factors.insert(surface.0, factor);
        self.save()
    }

    fn default_zoom_factor(&self, context: ContextId) -> Result<f64, StoreError> {
        Ok(self.data.defaults.get(&context.0).copied().unwrap_or(0.0))
    }

    fn set_default_zoom_factor(
        &mut self,
        context: ContextId,
        factor: f64,
    ) -> Result<(), StoreError> {
        self.data.defaults.insert(context.0, factor);
        self.save()
    }
}
