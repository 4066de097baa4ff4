//! Game logic.
//!
//! Every function mutates the state it is handed and nothing else. All
//! randomness comes through an injected `Rng`, so a seeded RNG replays a
//! session exactly.

pub mod bird;
pub mod difficulty;
pub mod hunter;
pub mod star;
pub mod taxi;

use rand::Rng;

use crate::config::GameConfig;
use crate::entities::{GameState, InputEvent, Outcome, MAX_STARS, TICK_SECONDS};

// ── Constructors ─────────────────────────────────────────────────────────────

/// Build the initial session state. The config is sanitized first, so any
/// values the provider hands over are safe to run with.
pub fn init_state(config: GameConfig, rng: &mut impl Rng) -> GameState {
    let config = config.sanitized();
    let bird = bird::init_bird(&config);
    let stars = (0..MAX_STARS)
        .map(|_| star::spawn_star(&config, rng))
        .collect();
    let hunters = hunter::init_hunters(&config, &bird, rng);
    let taxi = taxi::init_taxi(&config);

    GameState {
        config,
        bird,
        stars,
        hunters,
        taxi,
        outcome: Outcome::Continuing,
        frame: 0,
    }
}

// ── Input ────────────────────────────────────────────────────────────────────

/// Apply a non-terminal input edge. `Quit` is handled by `evaluate_outcome`.
pub fn apply_input(state: &mut GameState, input: InputEvent) {
    let GameState { config, bird, taxi, .. } = state;
    match input {
        InputEvent::MoveUp => bird::steer_up(bird),
        InputEvent::MoveDown => bird::steer_down(bird),
        InputEvent::MoveLeft => bird::steer_left(bird),
        InputEvent::MoveRight => bird::steer_right(bird),
        InputEvent::SpeedUp => bird::speed_up(bird, config),
        InputEvent::SpeedDown => bird::speed_down(bird, config),
        InputEvent::ActivateTaxi => {
            taxi::activate_taxi(taxi, config);
        }
        InputEvent::Quit => {}
    }
}

// ── Outcome ──────────────────────────────────────────────────────────────────

/// Terminal checks in priority order: quit, then lost, then won.
pub fn evaluate_outcome(state: &GameState, quit: bool) -> Outcome {
    if quit {
        Outcome::Quit
    } else if state.bird.health == 0 || state.config.time_remaining <= 0.0 {
        Outcome::Lost
    } else if state.bird.score >= state.config.star_quota {
        Outcome::Won
    } else {
        Outcome::Continuing
    }
}

// ── Per-frame tick ───────────────────────────────────────────────────────────

/// Advance the simulation by one tick and report the session outcome.
///
/// Order: input, difficulty, clock, terminal checks, then taxi, bird (unless
/// riding), stars and hunters. Once the outcome is terminal further calls
/// change nothing.
pub fn tick(state: &mut GameState, input: Option<InputEvent>, rng: &mut impl Rng) -> Outcome {
    if state.outcome != Outcome::Continuing {
        return state.outcome;
    }
    state.frame += 1;

    if let Some(input) = input {
        apply_input(state, input);
    }
    difficulty::apply_difficulty(&mut state.config);
    state.config.time_remaining -= TICK_SECONDS;

    state.outcome = evaluate_outcome(state, input == Some(InputEvent::Quit));
    if state.outcome != Outcome::Continuing {
        log::info!(
            "session ended: {:?} after {} ticks, {} stars",
            state.outcome,
            state.frame,
            state.bird.score
        );
        return state.outcome;
    }

    let GameState {
        config,
        bird,
        stars,
        hunters,
        taxi,
        ..
    } = state;

    if taxi.active {
        taxi::update_taxi(taxi, bird, config);
    }
    if !bird.on_taxi {
        bird::move_bird(bird, config);
    }
    for s in stars.iter_mut() {
        star::update_star(s, bird, config, rng);
    }
    hunter::update_hunters(hunters, bird, taxi, config, rng);

    Outcome::Continuing
}

// ── Scoring ──────────────────────────────────────────────────────────────────

/// Seconds of the configured limit actually played.
pub fn time_used(config: &GameConfig) -> f64 {
    (config.time_limit - config.time_remaining).clamp(0.0, config.time_limit)
}

/// Final ranking score:
/// `floor(time_left * 50) + stars * 100 + health * 5 + level * 500`.
///
/// Saturates at `u32::MAX` rather than wrapping.
pub fn final_score(state: &GameState) -> u32 {
    let time_bonus = (state.config.time_remaining.max(0.0) * 50.0).floor() as u32;
    time_bonus
        .saturating_add(state.bird.score.saturating_mul(100))
        .saturating_add(state.bird.health.saturating_mul(5))
        .saturating_add(state.config.level.saturating_mul(500))
}
