use crate::config::{GridSize, Settings};
use crate::input::Direction;

/// Grid position in logical cell coordinates.
///
/// `y` grows downward, so `Up` decrements it.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    /// Returns the neighbouring cell one step in `direction`.
    #[must_use]
    pub fn stepped(self, direction: Direction) -> Self {
        let (dx, dy) = direction.vector();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Returns true when the position lies inside the bounds.
    #[must_use]
    pub fn is_within_bounds(self, bounds: GridSize) -> bool {
        self.x >= 0
            && self.y >= 0
            && self.x < i32::from(bounds.width)
            && self.y < i32::from(bounds.height)
    }

    /// Returns this position wrapped into bounds on both axes.
    #[must_use]
    pub fn wrapped(self, bounds: GridSize) -> Self {
        Self {
            x: wrap_axis(self.x, i32::from(bounds.width)),
            y: wrap_axis(self.y, i32::from(bounds.height)),
        }
    }
}

fn wrap_axis(value: i32, upper_bound: i32) -> i32 {
    value.rem_euclid(upper_bound)
}

/// A point in world units (cell index scaled by the cell size).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorldPoint {
    pub x: f64,
    pub y: f64,
}

/// Maps cell coordinates to world coordinates and owns the wrap bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridGeometry {
    cell_size: f64,
    size: GridSize,
}

impl GridGeometry {
    #[must_use]
    pub fn new(cell_size: f64, size: GridSize) -> Self {
        debug_assert!(cell_size > 0.0);
        debug_assert!(size.width > 0 && size.height > 0);

        Self { cell_size, size }
    }

    #[must_use]
    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.cell_size, settings.grid_size())
    }

    #[must_use]
    pub fn cell_size(&self) -> f64 {
        self.cell_size
    }

    #[must_use]
    pub fn size(&self) -> GridSize {
        self.size
    }

    /// World-space extent of the whole grid as `(width, height)`.
    #[must_use]
    pub fn world_extent(&self) -> (f64, f64) {
        (
            f64::from(self.size.width) * self.cell_size,
            f64::from(self.size.height) * self.cell_size,
        )
    }

    /// Returns the world-space corner of `cell`.
    #[must_use]
    pub fn to_world(&self, cell: Position) -> WorldPoint {
        WorldPoint {
            x: f64::from(cell.x) * self.cell_size,
            y: f64::from(cell.y) * self.cell_size,
        }
    }

    /// Wraps `cell` toroidally into `[0, width) x [0, height)`.
    #[must_use]
    pub fn wrap(&self, cell: Position) -> Position {
        cell.wrapped(self.size)
    }
}
