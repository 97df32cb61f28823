use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Tick interval a fresh session starts with.
pub const INITIAL_TICK_INTERVAL: Duration = Duration::from_millis(200);

/// Amount the tick interval shrinks per consumed food item.
pub const SPEED_DECREMENT: Duration = Duration::from_millis(1);

/// Lower bound for the tick interval.
pub const MIN_TICK_INTERVAL: Duration = Duration::from_millis(1);

/// Score value carried by every food item.
pub const FOOD_VALUE: u32 = 1;

pub const DEFAULT_CELL_SIZE: f64 = 40.0;
pub const DEFAULT_GRID_WIDTH: u16 = 20;
pub const DEFAULT_GRID_HEIGHT: u16 = 20;
pub const DEFAULT_FOOD_SPAWN_COUNT: usize = 2;

/// Logical grid dimensions passed through the game as a named type.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GridSize {
    pub width: u16,
    pub height: u16,
}

impl GridSize {
    /// Returns the total number of cells in the grid.
    #[must_use]
    pub fn total_cells(self) -> usize {
        usize::from(self.width) * usize::from(self.height)
    }
}

/// Session settings record used to construct a fresh engine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// World units per grid cell.
    pub cell_size: f64,
    pub grid_width: u16,
    pub grid_height: u16,
    pub food_spawn_count: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            cell_size: DEFAULT_CELL_SIZE,
            grid_width: DEFAULT_GRID_WIDTH,
            grid_height: DEFAULT_GRID_HEIGHT,
            food_spawn_count: DEFAULT_FOOD_SPAWN_COUNT,
        }
    }
}

/// Failures while building or loading [`Settings`].
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("cell size must be a positive finite number, got {0}")]
    InvalidCellSize(f64),
    #[error("grid must be at least 1x1, got {width}x{height}")]
    EmptyGrid { width: u16, height: u16 },
    #[error("failed to read settings file {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse settings file {}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl Settings {
    /// Loads settings from a JSON file; absent keys keep their defaults.
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let raw = fs::read_to_string(path).map_err(|source| SettingsError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_json(&raw).map_err(|source| SettingsError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Checks the record and returns it unchanged when usable.
    pub fn validate(self) -> Result<Self, SettingsError> {
        if !self.cell_size.is_finite() || self.cell_size <= 0.0 {
            return Err(SettingsError::InvalidCellSize(self.cell_size));
        }

        if self.grid_width == 0 || self.grid_height == 0 {
            return Err(SettingsError::EmptyGrid {
                width: self.grid_width,
                height: self.grid_height,
            });
        }

        Ok(self)
    }

    /// Returns the grid dimensions in cells.
    #[must_use]
    pub fn grid_size(&self) -> GridSize {
        GridSize {
            width: self.grid_width,
            height: self.grid_height,
        }
    }
}
