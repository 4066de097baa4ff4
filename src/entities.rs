//! All game entity types: pure data, no logic.
//!
//! Grid coordinates are play-area cells: column `x` grows rightwards, row `y`
//! grows downwards, and the outermost ring (`BORDER` cells wide) is wall.

use crate::config::GameConfig;

// ── Geometry ─────────────────────────────────────────────────────────────────

/// Width of the wall ring around the play area.
pub const BORDER: i32 = 1;

/// Simulated seconds that pass on every tick.
pub const TICK_SECONDS: f64 = 0.05;

pub const BIRD_SYMBOL: &str = "/|O|\\";
/// Horizontal footprint of the bird sprite (it is one row tall).
pub const BIRD_WIDTH: i32 = 5;
pub const MAX_HEALTH: u32 = 100;
/// Accumulated speed needed for one discrete bird step.
pub const MOVE_THRESHOLD: u32 = 3;

pub const MAX_STARS: usize = 10;

/// Size of the hunter pool; `GameConfig::hunter_num` of them are in play.
pub const MAX_HUNTERS: usize = 6;
/// Ticks a hunter stays frozen after hitting a wall.
pub const DASH_RECOVERY_TICKS: u32 = 30;

pub const TAXI_SYMBOL: &str = "o\\__/o";
pub const SAFE_ZONE_W: i32 = 20;
pub const SAFE_ZONE_H: i32 = 10;
pub const TAXI_HOME_X: i32 = 2;
pub const TAXI_SPEED: i32 = 1;
pub const BONUS_STARS: usize = 15;
/// Distance between consecutive bonus stars on the taxi's road.
pub const BONUS_SPACING: i32 = 10;

// ── Input ────────────────────────────────────────────────────────────────────

/// A single discrete input edge, sampled at most once per tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputEvent {
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    SpeedUp,
    SpeedDown,
    ActivateTaxi,
    Quit,
}

// ── Outcome ──────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Continuing,
    /// Star quota reached.
    Won,
    /// Health ran out or the clock hit zero.
    Lost,
    Quit,
}

// ── Bird ─────────────────────────────────────────────────────────────────────

/// Display colour tier derived from the bird's health.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HealthTier {
    Nominal,
    Warning,
    Critical,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Bird {
    pub x: i32,
    pub y: i32,
    /// Direction on each axis, always in {-1, 0, 1}.
    pub dx: i32,
    pub dy: i32,
    /// Added to `counter` every tick; one step is taken per `MOVE_THRESHOLD`.
    pub speed: u32,
    pub counter: u32,
    pub health: u32,
    /// Stars collected.
    pub score: u32,
    pub on_taxi: bool,
}

// ── Star ─────────────────────────────────────────────────────────────────────

/// A falling collectible. Falls one row every `interval` ticks.
#[derive(Clone, Debug, PartialEq)]
pub struct Star {
    pub x: i32,
    pub y: i32,
    pub interval: u32,
    pub counter: u32,
}

// ── Hunter ───────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HunterState {
    /// Flying along its velocity vector.
    Seeking,
    /// Frozen against a wall until the dash countdown expires.
    Stunned,
    /// Out of play; the pool slot may respawn.
    Inactive,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Hunter {
    /// Top-left corner, kept fractional for smooth diagonal flight.
    pub x: f64,
    pub y: f64,
    /// Unit vector (or zero while stunned).
    pub dx: f64,
    pub dy: f64,
    pub speed: f64,
    /// Remaining wall contacts; -1 means spent.
    pub bounces: i32,
    pub damage: u32,
    pub width: i32,
    pub height: i32,
    pub active: bool,
    pub wait_dash: u32,
}

// ── Taxi ─────────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TaxiState {
    /// Docked at home, waiting for the bird to board.
    Waiting,
    /// Carrying the bird towards the far wall.
    Moving,
}

#[derive(Clone, Debug, PartialEq)]
pub struct BonusStar {
    pub x: i32,
    pub collected: bool,
}

/// The taxi's position is the top-left corner of its safe zone.
#[derive(Clone, Debug, PartialEq)]
pub struct Taxi {
    pub x: i32,
    pub y: i32,
    pub active: bool,
    pub state: TaxiState,
    /// Laid out along the road when the bird boards; empty otherwise.
    pub bonus: Vec<BonusStar>,
}

// ── Master game state ────────────────────────────────────────────────────────

/// Everything one session owns. The tick orchestrator is the only writer.
#[derive(Clone, Debug)]
pub struct GameState {
    pub config: GameConfig,
    pub bird: Bird,
    pub stars: Vec<Star>,
    /// Fixed pool of `MAX_HUNTERS` slots.
    pub hunters: Vec<Hunter>,
    pub taxi: Taxi,
    pub outcome: Outcome,
    pub frame: u64,
}
