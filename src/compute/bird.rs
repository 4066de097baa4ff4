//! Bird movement: sub-tick speed accumulation and wall bounce.

use crate::config::GameConfig;
use crate::entities::{Bird, HealthTier, BIRD_WIDTH, BORDER, MAX_HEALTH, MOVE_THRESHOLD};

/// Build the bird at the centre of the play area, heading right.
pub fn init_bird(config: &GameConfig) -> Bird {
    Bird {
        x: config.screen_width / 2,
        y: config.screen_height / 2,
        dx: 1,
        dy: 0,
        speed: config.swallow_speed_min,
        counter: 0,
        health: MAX_HEALTH,
        score: 0,
        on_taxi: false,
    }
}

/// Inclusive range the bird's top-left cell may occupy: `(min_x, max_x, min_y, max_y)`.
pub fn bird_bounds(config: &GameConfig) -> (i32, i32, i32, i32) {
    (
        BORDER,
        config.screen_width - BORDER - BIRD_WIDTH,
        BORDER,
        config.screen_height - BORDER - 1,
    )
}

// ── Input-driven steering ────────────────────────────────────────────────────
//
// Each handler overwrites both axes so the bird never flies diagonally.

pub fn steer_up(bird: &mut Bird) {
    bird.dx = 0;
    bird.dy = -1;
}

pub fn steer_down(bird: &mut Bird) {
    bird.dx = 0;
    bird.dy = 1;
}

pub fn steer_left(bird: &mut Bird) {
    bird.dx = -1;
    bird.dy = 0;
}

pub fn steer_right(bird: &mut Bird) {
    bird.dx = 1;
    bird.dy = 0;
}

pub fn speed_up(bird: &mut Bird, config: &GameConfig) {
    if bird.speed < config.swallow_speed_max {
        bird.speed += 1;
    }
}

pub fn speed_down(bird: &mut Bird, config: &GameConfig) {
    if bird.speed > config.swallow_speed_min {
        bird.speed -= 1;
    }
}

// ── Per-tick movement ────────────────────────────────────────────────────────

/// Advance the bird by however many whole steps its accumulator allows.
pub fn move_bird(bird: &mut Bird, config: &GameConfig) {
    let (min_x, max_x, min_y, max_y) = bird_bounds(config);

    bird.counter += bird.speed;
    while bird.counter >= MOVE_THRESHOLD {
        bird.counter -= MOVE_THRESHOLD;
        (bird.x, bird.dx) = step_axis(bird.x, bird.dx, min_x, max_x);
        (bird.y, bird.dy) = step_axis(bird.y, bird.dy, min_y, max_y);
    }
}

/// One step along a single axis with bounce-off-walls.
///
/// Sitting on a wall while heading into it only flips the direction. Otherwise
/// the step is taken and clamped; arriving on a wall flips the direction too.
fn step_axis(pos: i32, dir: i32, min: i32, max: i32) -> (i32, i32) {
    if (pos <= min && dir < 0) || (pos >= max && dir > 0) {
        return (pos.clamp(min, max), -dir);
    }

    let next = pos + dir;
    if dir < 0 && next <= min {
        (min, 1)
    } else if dir > 0 && next >= max {
        (max, -1)
    } else {
        (next.clamp(min, max), dir)
    }
}

/// Colour tier for the renderer: >66 nominal, >33 warning, else critical.
pub fn health_tier(bird: &Bird) -> HealthTier {
    match bird.health {
        h if h > 66 => HealthTier::Nominal,
        h if h > 33 => HealthTier::Warning,
        _ => HealthTier::Critical,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_axis_free_flight() {
        assert_eq!(step_axis(10, 1, 1, 20), (11, 1));
        assert_eq!(step_axis(10, -1, 1, 20), (9, -1));
        assert_eq!(step_axis(10, 0, 1, 20), (10, 0));
    }

    #[test]
    fn step_axis_arrival_flips_direction() {
        assert_eq!(step_axis(2, -1, 1, 20), (1, 1));
        assert_eq!(step_axis(19, 1, 1, 20), (20, -1));
    }

    #[test]
    fn step_axis_on_wall_heading_out_only_flips() {
        assert_eq!(step_axis(1, -1, 1, 20), (1, 1));
        assert_eq!(step_axis(20, 1, 1, 20), (20, -1));
    }

    #[test]
    fn step_axis_on_wall_heading_in_moves() {
        assert_eq!(step_axis(1, 1, 1, 20), (2, 1));
        assert_eq!(step_axis(20, -1, 1, 20), (19, -1));
    }

    #[test]
    fn step_axis_idle_axis_never_flips() {
        assert_eq!(step_axis(1, 0, 1, 20), (1, 0));
        assert_eq!(step_axis(20, 0, 1, 20), (20, 0));
    }
}
