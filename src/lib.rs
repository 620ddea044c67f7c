//! Deterministic grid snake simulation.
//!
//! Every lifecycle operation consumes a [`game::GameState`] and returns the
//! next snapshot. Randomness is injected so that whole games replay from a
//! seed.

pub mod autopilot;
pub mod collision;
pub mod config;
pub mod error;
pub mod food;
pub mod game;
pub mod input;
pub mod logging;
pub mod score;
pub mod session;
pub mod snake;
