//! Grid-based terminal Snake.
//!
//! The simulation lives in [`game`], [`snake`], and [`fruit`]: a fixed
//! 20×16 board advanced in discrete 100 ms ticks, with buffered
//! directional input that takes effect one tick after it is requested.
//! Everything else is the thin shell around that engine: crossterm key
//! mapping in [`input`], ratatui frame painting in [`renderer`], and
//! raw-mode lifecycle management in [`terminal_runtime`].

pub mod config;
pub mod error;
pub mod fruit;
pub mod game;
pub mod input;
pub mod renderer;
pub mod snake;
pub mod terminal_runtime;
