use std::time::{Duration, Instant};

use log::{debug, info, trace};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::clock::{SimulationClock, eased_head_progress, eased_tail_progress};
use crate::config::{
    INITIAL_TICK_INTERVAL, MIN_TICK_INTERVAL, SPEED_DECREMENT, Settings, SettingsError,
};
use crate::food::FoodSet;
use crate::grid::GridGeometry;
use crate::input::Direction;
use crate::input_queue::InputQueue;
use crate::snake::Snake;
use crate::snapshot::Snapshot;

/// Current high-level gameplay state.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameStatus {
    Running,
    GameOver,
}

/// Complete mutable game state for one session.
///
/// A new session means building a new `GameState`; nothing here resets.
#[derive(Debug, Clone)]
pub struct GameState {
    pub snake: Snake,
    pub food: FoodSet,
    pub score: u32,
    /// Current tick interval.
    pub speed: Duration,
    pub tick_count: u64,
    pub status: GameStatus,
    input: InputQueue,
    clock: SimulationClock,
    geometry: GridGeometry,
    rng: StdRng,
}

impl GameState {
    /// Creates a session seeded from system entropy.
    pub fn new(settings: Settings) -> Result<Self, SettingsError> {
        Self::with_rng(settings, StdRng::from_entropy())
    }

    /// Creates a deterministic state for tests and reproducible simulations.
    pub fn new_with_seed(settings: Settings, seed: u64) -> Result<Self, SettingsError> {
        Self::with_rng(settings, StdRng::seed_from_u64(seed))
    }

    fn with_rng(settings: Settings, mut rng: StdRng) -> Result<Self, SettingsError> {
        let settings = settings.validate()?;
        let geometry = GridGeometry::from_settings(&settings);
        let snake = Snake::spawn(&geometry);
        let food = FoodSet::spawn(&mut rng, settings.food_spawn_count, geometry.size());

        info!(
            "session started: {}x{} grid, cell size {}, {} food",
            settings.grid_width, settings.grid_height, settings.cell_size, settings.food_spawn_count
        );

        Ok(Self {
            snake,
            food,
            score: 0,
            speed: INITIAL_TICK_INTERVAL,
            tick_count: 0,
            status: GameStatus::Running,
            input: InputQueue::new(),
            clock: SimulationClock::new(Instant::now()),
            geometry,
            rng,
        })
    }

    /// Queues one direction intent for a later tick. Ignored after game over.
    pub fn push_direction(&mut self, intent: Option<Direction>) {
        if self.is_game_over() {
            return;
        }

        if intent.is_some() && !self.input.push(intent, self.snake.head_direction()) {
            debug!("direction intent {intent:?} dropped");
        }
    }

    /// Runs at most one tick if the current interval has elapsed at `now`.
    /// Returns true when a tick ran.
    pub fn update(&mut self, now: Instant) -> bool {
        if self.is_game_over() || !self.clock.poll(now, self.speed) {
            return false;
        }

        self.tick();
        true
    }

    /// Advances simulation by one gameplay tick.
    pub fn tick(&mut self) {
        if self.is_game_over() {
            return;
        }

        self.tick_count += 1;

        if let Some(direction) = self.input.pop() {
            self.snake.set_direction(Some(direction));
        }

        self.snake.move_forward();
        self.snake.wrap_head(&self.geometry);

        let eaten = self
            .food
            .consume_at(self.snake.head(), &mut self.rng, self.geometry.size());
        for consumption in eaten {
            self.snake.grow(&self.geometry);
            self.score += consumption.value;
            self.speed = self
                .speed
                .saturating_sub(SPEED_DECREMENT)
                .max(MIN_TICK_INTERVAL);
            debug!(
                "food {} eaten: score {}, speed {:?}",
                consumption.index, self.score, self.speed
            );
        }

        trace!(
            "tick {}: head {:?}, length {}",
            self.tick_count,
            self.snake.head(),
            self.snake.len()
        );

        if self.snake.self_intersects() {
            self.status = GameStatus::GameOver;
            self.input.clear();
            info!(
                "game over after {} ticks with score {}",
                self.tick_count, self.score
            );
        }
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.status == GameStatus::GameOver
    }

    #[must_use]
    pub fn geometry(&self) -> GridGeometry {
        self.geometry
    }

    /// Number of direction intents waiting for a tick.
    #[must_use]
    pub fn pending_turns(&self) -> usize {
        self.input.len()
    }

    /// Read-only view of the session for rendering at `now`.
    #[must_use]
    pub fn snapshot(&self, now: Instant) -> Snapshot {
        let progress = if self.is_game_over() {
            0.0
        } else {
            self.clock.progress(now, self.speed)
        };

        Snapshot {
            geometry: self.geometry,
            segments: self.snake.segments().copied().collect(),
            head_direction: self.snake.head_direction(),
            tail_direction: self.snake.tail_direction(),
            food: self.food.items().to_vec(),
            score: self.score,
            speed: self.speed,
            tick_count: self.tick_count,
            game_over: self.is_game_over(),
            progress,
            head_progress: eased_head_progress(progress),
            tail_progress: eased_tail_progress(progress),
        }
    }
}
