use std::time::Duration;

use torus_snake::config::{INITIAL_TICK_INTERVAL, Settings};
use torus_snake::food::{FoodItem, FoodSet};
use torus_snake::game::{GameState, GameStatus};
use torus_snake::grid::Position;
use torus_snake::input::Direction;
use torus_snake::snake::Snake;

fn session(seed: u64) -> GameState {
    GameState::new_with_seed(
        Settings {
            cell_size: 40.0,
            grid_width: 20,
            grid_height: 20,
            food_spawn_count: 1,
        },
        seed,
    )
    .expect("settings are valid")
}

#[test]
fn food_one_cell_ahead_is_eaten_on_first_tick() {
    let mut state = session(42);
    assert_eq!(state.snake.len(), 2);
    assert_eq!(state.snake.head_direction(), Direction::Up);

    let ahead = state
        .geometry()
        .wrap(state.snake.head().stepped(Direction::Up));
    state.food = FoodSet::from_items(vec![FoodItem::new(ahead)]);

    state.tick();

    assert_eq!(state.status, GameStatus::Running);
    assert_eq!(state.snake.len(), 3);
    assert_eq!(state.score, 1);
    assert_eq!(state.snake.head(), ahead);
    assert_eq!(state.speed, INITIAL_TICK_INTERVAL - Duration::from_millis(1));
    assert_ne!(state.food.items()[0].position, ahead);
}

#[test]
fn folded_snake_ends_session_and_stays_frozen() {
    let mut state = session(7);
    state.food = FoodSet::from_items(Vec::new());
    state.snake = Snake::from_segments(
        vec![
            Position { x: 5, y: 5 },
            Position { x: 5, y: 4 },
            Position { x: 5, y: 5 },
            Position { x: 5, y: 6 },
        ],
        Direction::Up,
    );
    assert!(state.snake.self_intersects());

    state.tick();
    assert_eq!(state.status, GameStatus::GameOver);

    let frozen: Vec<Position> = state.snake.segments().copied().collect();
    let score = state.score;
    state.push_direction(Some(Direction::Left));
    state.tick();

    assert_eq!(state.snake.segments().copied().collect::<Vec<_>>(), frozen);
    assert_eq!(state.score, score);
    assert!(state.snapshot(std::time::Instant::now()).game_over);
}

#[test]
fn quick_turns_between_ticks_execute_in_order() {
    let mut state = session(3);
    state.food = FoodSet::from_items(Vec::new());
    state.snake = Snake::new(Position { x: 10, y: 10 }, Direction::Up);

    state.push_direction(Some(Direction::Left));
    state.push_direction(Some(Direction::Down));
    state.push_direction(Some(Direction::Up));

    state.tick();
    assert_eq!(state.snake.head(), Position { x: 9, y: 10 });
    state.tick();
    assert_eq!(state.snake.head(), Position { x: 9, y: 11 });
    state.tick();
    assert_eq!(state.snake.head(), Position { x: 9, y: 12 });
}

#[test]
fn snake_travels_around_the_torus() {
    let mut state = session(9);
    state.food = FoodSet::from_items(Vec::new());

    for _ in 0..20 {
        state.tick();
    }

    assert_eq!(state.status, GameStatus::Running);
    assert_eq!(state.snake.head(), Position::ORIGIN);
    assert_eq!(state.tick_count, 20);
}
