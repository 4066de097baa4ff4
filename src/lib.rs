//! Swallow: simulation core of a terminal arcade game.
//!
//! A bird collects falling stars against the clock while hunters dash at it
//! from the walls. A limited number of taxis carry the bird to safety.
//!
//! - `entities`: plain data for every actor and the session state
//! - `compute`: the per-tick logic and the difficulty director
//! - `config`: session parameters and the `config.txt` provider
//! - `ranking`: the leaderboard persistence provider

pub mod compute;
pub mod config;
pub mod entities;
pub mod error;
pub mod ranking;

pub use config::GameConfig;
pub use entities::{GameState, InputEvent, Outcome};
