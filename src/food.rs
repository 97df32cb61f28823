use rand::Rng;

use crate::config::{FOOD_VALUE, GridSize};
use crate::grid::Position;

/// One food item in the fixed-size pool.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct FoodItem {
    pub position: Position,
    pub alive: bool,
    pub value: u32,
}

impl FoodItem {
    /// Creates a live item worth [`FOOD_VALUE`] at `position`.
    #[must_use]
    pub fn new(position: Position) -> Self {
        Self {
            position,
            alive: true,
            value: FOOD_VALUE,
        }
    }
}

/// An item eaten during a tick.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Consumption {
    pub index: usize,
    pub value: u32,
}

/// Fixed pool of food items. Items are relocated in place, never removed.
#[derive(Debug, Clone)]
pub struct FoodSet {
    items: Vec<FoodItem>,
}

impl FoodSet {
    /// Spawns `count` live items on random cells. Overlap with the snake is
    /// allowed.
    #[must_use]
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R, count: usize, bounds: GridSize) -> Self {
        let items = (0..count)
            .map(|_| FoodItem::new(random_position(rng, bounds)))
            .collect();

        Self { items }
    }

    /// Builds a set from explicit items.
    #[must_use]
    pub fn from_items(items: Vec<FoodItem>) -> Self {
        Self { items }
    }

    /// Consumes every live item sitting on `head`, relocating each one.
    pub fn consume_at<R: Rng + ?Sized>(
        &mut self,
        head: Position,
        rng: &mut R,
        bounds: GridSize,
    ) -> Vec<Consumption> {
        let mut eaten = Vec::new();

        for (index, item) in self.items.iter_mut().enumerate() {
            if !item.alive || item.position != head {
                continue;
            }

            eaten.push(Consumption {
                index,
                value: item.value,
            });
            item.position = relocated_position(rng, bounds, item.position);
        }

        eaten
    }

    #[must_use]
    pub fn items(&self) -> &[FoodItem] {
        &self.items
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Uniformly random cell on the grid.
#[must_use]
pub fn random_position<R: Rng + ?Sized>(rng: &mut R, bounds: GridSize) -> Position {
    Position {
        x: rng.gen_range(0..i32::from(bounds.width)),
        y: rng.gen_range(0..i32::from(bounds.height)),
    }
}

/// Random cell other than `previous`, unless the grid has a single cell.
fn relocated_position<R: Rng + ?Sized>(
    rng: &mut R,
    bounds: GridSize,
    previous: Position,
) -> Position {
    if bounds.total_cells() <= 1 {
        return previous;
    }

    loop {
        let candidate = random_position(rng, bounds);
        if candidate != previous {
            return candidate;
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use crate::config::GridSize;
    use crate::grid::Position;

    use super::{Consumption, FoodItem, FoodSet, random_position};

    const BOUNDS: GridSize = GridSize {
        width: 8,
        height: 6,
    };

    #[test]
    fn spawn_fills_pool_with_live_items_in_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        let food = FoodSet::spawn(&mut rng, 5, BOUNDS);

        assert_eq!(food.len(), 5);
        for item in food.items() {
            assert!(item.alive);
            assert_eq!(item.value, 1);
            assert!(item.position.is_within_bounds(BOUNDS));
        }
    }

    #[test]
    fn random_positions_stay_in_bounds() {
        let mut rng = StdRng::seed_from_u64(11);

        for _ in 0..200 {
            assert!(random_position(&mut rng, BOUNDS).is_within_bounds(BOUNDS));
        }
    }

    #[test]
    fn item_under_head_is_consumed_and_relocated() {
        let mut rng = StdRng::seed_from_u64(3);
        let spot = Position { x: 2, y: 2 };
        let mut food = FoodSet::from_items(vec![
            FoodItem::new(Position { x: 0, y: 0 }),
            FoodItem::new(spot),
        ]);

        let eaten = food.consume_at(spot, &mut rng, BOUNDS);

        assert_eq!(eaten, vec![Consumption { index: 1, value: 1 }]);
        assert_ne!(food.items()[1].position, spot);
        assert!(food.items()[1].alive);
        assert_eq!(food.items()[0].position, Position { x: 0, y: 0 });
        assert_eq!(food.len(), 2);
    }

    #[test]
    fn dead_items_are_not_consumed() {
        let mut rng = StdRng::seed_from_u64(5);
        let spot = Position { x: 1, y: 4 };
        let mut item = FoodItem::new(spot);
        item.alive = false;
        let mut food = FoodSet::from_items(vec![item]);

        assert!(food.consume_at(spot, &mut rng, BOUNDS).is_empty());
        assert_eq!(food.items()[0].position, spot);
    }

    #[test]
    fn stacked_items_are_all_consumed() {
        let mut rng = StdRng::seed_from_u64(9);
        let spot = Position { x: 3, y: 3 };
        let mut food = FoodSet::from_items(vec![FoodItem::new(spot), FoodItem::new(spot)]);

        let eaten = food.consume_at(spot, &mut rng, BOUNDS);

        assert_eq!(eaten.len(), 2);
    }

    #[test]
    fn single_cell_grid_keeps_item_in_place() {
        let mut rng = StdRng::seed_from_u64(1);
        let bounds = GridSize {
            width: 1,
            height: 1,
        };
        let mut food = FoodSet::from_items(vec![FoodItem::new(Position::ORIGIN)]);

        assert_eq!(food.consume_at(Position::ORIGIN, &mut rng, bounds).len(), 1);
        assert_eq!(food.items()[0].position, Position::ORIGIN);
    }
}
