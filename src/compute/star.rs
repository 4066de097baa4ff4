//! Falling stars: fall cadence, bottom respawn and pickup by the bird.

use rand::Rng;

use crate::config::GameConfig;
use crate::entities::{Bird, Star, BIRD_WIDTH};

fn random_interval(rng: &mut impl Rng) -> u32 {
    rng.gen_range(2..=5)
}

fn random_column(config: &GameConfig, rng: &mut impl Rng) -> i32 {
    rng.gen_range(1..config.screen_width - 1)
}

/// A fresh star at the top row with a full fall counter.
pub fn spawn_star(config: &GameConfig, rng: &mut impl Rng) -> Star {
    let interval = random_interval(rng);
    Star {
        x: random_column(config, rng),
        y: 1,
        interval,
        counter: interval,
    }
}

/// True when the star sits on the bird's row (or the one below it) within
/// the bird's horizontal footprint.
pub fn touches_bird(star: &Star, bird: &Bird) -> bool {
    (star.y == bird.y || star.y == bird.y + 1)
        && star.x >= bird.x
        && star.x < bird.x + BIRD_WIDTH
}

/// Advance one star by one tick, then test it against the bird.
pub fn update_star(star: &mut Star, bird: &mut Bird, config: &GameConfig, rng: &mut impl Rng) {
    star.counter = star.counter.saturating_sub(1);
    if star.counter == 0 {
        star.counter = star.interval;
        star.y += 1;
        if star.y >= config.screen_height - 1 {
            star.x = random_column(config, rng);
            star.y = 1;
        }
    }

    if touches_bird(star, bird) {
        *star = spawn_star(config, rng);
        bird.score += 1;
    }
}
