//! Wrap-around grid snake simulation.
//!
//! The engine in [`game::GameState`] is driven by a host loop that feeds it
//! direction intents and a monotonic clock, and reads back a
//! [`snapshot::Snapshot`] once per frame.

pub mod clock;
pub mod config;
pub mod food;
pub mod game;
pub mod grid;
pub mod input;
pub mod input_queue;
pub mod renderer;
pub mod snake;
pub mod snapshot;
pub mod terminal_runtime;
pub mod ui;
