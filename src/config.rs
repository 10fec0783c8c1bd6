//! Grid configuration.
//!
//! Column counts, row height and fallback block heights. Every field has a
//! default from [`crate::constants`], so a config file only needs to name
//! what it overrides:
//!
//! ```json
//! { "layoutCols": { "mobile": 6, "desktop": 24 } }
//! ```

use crate::constants::{
    DEFAULT_DESKTOP_HEIGHT, DEFAULT_MOBILE_HEIGHT, DESKTOP_COLS, LAYOUT_ROW_HEIGHT, MOBILE_COLS,
};
use crate::error::{LayoutError, LayoutResult};
use crate::types::{Breakpoint, PerBreakpoint};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GridConfig {
    /// Column count per breakpoint
    pub layout_cols: PerBreakpoint<i32>,
    /// Pixel height of one grid row, only used for pixel conversion
    pub row_height: f32,
    /// Height used when a block declares no preferred height
    pub default_preferred_height: PerBreakpoint<i32>,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            layout_cols: PerBreakpoint::new(MOBILE_COLS, DESKTOP_COLS),
            row_height: LAYOUT_ROW_HEIGHT,
            default_preferred_height: PerBreakpoint::new(
                DEFAULT_MOBILE_HEIGHT,
                DEFAULT_DESKTOP_HEIGHT,
            ),
        }
    }
}

impl GridConfig {
    /// Parse and validate a config from JSON text
    pub fn from_json(json: &str) -> LayoutResult<Self> {
        let config: GridConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a config file
    pub fn load(path: impl AsRef<Path>) -> LayoutResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        debug!(path = %path.display(), cols = ?config.layout_cols, "loaded grid config");
        Ok(config)
    }

    pub fn validate(&self) -> LayoutResult<()> {
        for &bp in Breakpoint::all() {
            if self.layout_cols[bp] <= 0 {
                return Err(LayoutError::InvalidConfig(format!(
                    "{} column count must be positive, got {}",
                    bp.label(),
                    self.layout_cols[bp]
                )));
            }
            if self.default_preferred_height[bp] <= 0 {
                return Err(LayoutError::InvalidConfig(format!(
                    "{} default height must be positive, got {}",
                    bp.label(),
                    self.default_preferred_height[bp]
                )));
            }
        }
        if !(self.row_height.is_finite() && self.row_height > 0.0) {
            return Err(LayoutError::InvalidConfig(format!(
                "row height must be positive, got {}",
                self.row_height
            )));
        }
        Ok(())
    }
}
