use std::time::Duration;

use crate::food::FoodItem;
use crate::grid::{GridGeometry, Position, WorldPoint};
use crate::input::Direction;

/// Immutable per-frame view of a session, read by the renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub geometry: GridGeometry,
    /// Segments from head to tail.
    pub segments: Vec<Position>,
    pub head_direction: Direction,
    pub tail_direction: Direction,
    pub food: Vec<FoodItem>,
    pub score: u32,
    pub speed: Duration,
    pub tick_count: u64,
    pub game_over: bool,
    /// Linear progress toward the next tick in `[0, 1]`.
    pub progress: f64,
    pub head_progress: f64,
    pub tail_progress: f64,
}

impl Snapshot {
    #[must_use]
    pub fn head(&self) -> Option<Position> {
        self.segments.first().copied()
    }

    #[must_use]
    pub fn tail(&self) -> Option<Position> {
        self.segments.last().copied()
    }

    /// World-space corners of every segment, head first.
    pub fn world_segments(&self) -> impl Iterator<Item = WorldPoint> + '_ {
        self.segments
            .iter()
            .map(|segment| self.geometry.to_world(*segment))
    }

    /// Live food items only.
    pub fn live_food(&self) -> impl Iterator<Item = &FoodItem> {
        self.food.iter().filter(|item| item.alive)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use crate::config::GridSize;
    use crate::food::FoodItem;
    use crate::grid::{GridGeometry, Position, WorldPoint};
    use crate::input::Direction;

    use super::Snapshot;

    #[test]
    fn world_segments_scale_by_cell_size() {
        let mut dead = FoodItem::new(Position { x: 4, y: 4 });
        dead.alive = false;
        let snapshot = Snapshot {
            geometry: GridGeometry::new(
                10.0,
                GridSize {
                    width: 8,
                    height: 8,
                },
            ),
            segments: vec![Position { x: 1, y: 2 }, Position { x: 1, y: 3 }],
            head_direction: Direction::Up,
            tail_direction: Direction::Up,
            food: vec![FoodItem::new(Position { x: 5, y: 5 }), dead],
            score: 0,
            speed: Duration::from_millis(200),
            tick_count: 0,
            game_over: false,
            progress: 0.0,
            head_progress: 0.0,
            tail_progress: 0.0,
        };

        let world: Vec<WorldPoint> = snapshot.world_segments().collect();

        assert_eq!(world[0], WorldPoint { x: 10.0, y: 20.0 });
        assert_eq!(snapshot.tail(), Some(Position { x: 1, y: 3 }));
        assert_eq!(snapshot.live_food().count(), 1);
    }
}
