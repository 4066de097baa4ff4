//! Difficulty director: maps elapsed time onto one of four escalating tiers.
//!
//! The windows are fractions of the configured time limit `T`:
//!
//! | tier | elapsed window      | hunters | spawn rate | bounces | speed |
//! |------|---------------------|---------|------------|---------|-------|
//! | 1    | (0, T/6]            | 3       | 50         | 3       | -     |
//! | 2    | (T/6, 2T/6]         | 4       | 25         | 8       | -     |
//! | 3    | (2T/4, 3.5T/4]      | 5       | 20         | 5       | 1.0   |
//! | 4    | > 3.5T/4            | 6       | 10         | 4       | 1.2   |
//!
//! Tier 2 ends at T/3 but tier 3 only starts after T/2; inside that gap no
//! tier is assigned and whatever was set last stays in force.

use crate::config::GameConfig;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tier {
    pub level: u32,
    pub hunter_num: usize,
    pub hunter_spawn_rate: u32,
    pub hunter_bounces: i32,
    /// `None` leaves the configured hunter speed alone.
    pub hunter_speed: Option<f64>,
}

pub const TIERS: [Tier; 4] = [
    Tier {
        level: 1,
        hunter_num: 3,
        hunter_spawn_rate: 50,
        hunter_bounces: 3,
        hunter_speed: None,
    },
    Tier {
        level: 2,
        hunter_num: 4,
        hunter_spawn_rate: 25,
        hunter_bounces: 8,
        hunter_speed: None,
    },
    Tier {
        level: 3,
        hunter_num: 5,
        hunter_spawn_rate: 20,
        hunter_bounces: 5,
        hunter_speed: Some(1.0),
    },
    Tier {
        level: 4,
        hunter_num: 6,
        hunter_spawn_rate: 10,
        hunter_bounces: 4,
        hunter_speed: Some(1.2),
    },
];

/// The tier covering `elapsed` seconds of a `time_limit`-second session.
pub fn tier_for(elapsed: f64, time_limit: f64) -> Option<&'static Tier> {
    let t = time_limit;
    if elapsed > 0.0 && elapsed <= t / 6.0 {
        Some(&TIERS[0])
    } else if elapsed > t / 6.0 && elapsed <= 2.0 * t / 6.0 {
        Some(&TIERS[1])
    } else if elapsed > 2.0 * t / 4.0 && elapsed <= 3.5 * t / 4.0 {
        Some(&TIERS[2])
    } else if elapsed > 3.5 * t / 4.0 {
        Some(&TIERS[3])
    } else {
        None
    }
}

/// Write the current tier's values into the config.
///
/// Depends only on elapsed time, so calling it repeatedly in the same tier
/// changes nothing after the first call.
pub fn apply_difficulty(config: &mut GameConfig) {
    let elapsed = config.time_limit - config.time_remaining;
    let Some(tier) = tier_for(elapsed, config.time_limit) else {
        return;
    };

    if config.level != tier.level {
        log::debug!("difficulty tier {} -> {} at {elapsed:.2}s", config.level, tier.level);
    }
    config.level = tier.level;
    config.hunter_num = tier.hunter_num;
    config.hunter_spawn_rate = tier.hunter_spawn_rate;
    config.hunter_bounces = tier.hunter_bounces;
    if let Some(speed) = tier.hunter_speed {
        config.hunter_speed = speed;
    }
}
