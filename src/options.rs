//! Controller configuration.
//!
//! Options can be built in code or loaded from JSON:
//!
//! ```json
//! { "bounds": { "left": 0, "right": 800 } }
//! ```
//!
//! Absent (or `null`) sides are unconstrained.

use crate::error::{OptionsError, OptionsResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Partial bounds as supplied by the caller. Any subset of sides may be set.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoundsConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub left: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub right: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bottom: Option<f64>,
}

impl BoundsConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_left(mut self, left: f64) -> Self {
        self.left = Some(left);
        self
    }

    pub fn with_top(mut self, top: f64) -> Self {
        self.top = Some(top);
        self
    }

    pub fn with_right(mut self, right: f64) -> Self {
        self.right = Some(right);
        self
    }

    pub fn with_bottom(mut self, bottom: f64) -> Self {
        self.bottom = Some(bottom);
        self
    }
}

/// Options accepted by [`crate::Draggable::new`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DragOptions {
    pub bounds: Option<BoundsConfig>,
}

impl DragOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_bounds(mut self, bounds: BoundsConfig) -> Self {
        self.bounds = Some(bounds);
        self
    }

    /// Parse options from a JSON document.
    pub fn from_json(json: &str) -> OptionsResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse options from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> OptionsResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| OptionsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let options = Self::from_json(&content)?;
        tracing::debug!(path = %path.display(), ?options, "Loaded drag options");
        Ok(options)
    }
}
