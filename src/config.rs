//! Session configuration and the `config.txt` provider.
//!
//! The file is a flat list of whitespace-separated `KEY value` pairs. Parsing
//! never fails on content: unknown keys and malformed values are logged and
//! the default stays in place. Only an unreadable file is an error.

use std::fs;
use std::path::Path;

use crate::compute::difficulty::TIERS;
use crate::entities::{MAX_HUNTERS, SAFE_ZONE_H, SAFE_ZONE_W};
use crate::error::ConfigError;

/// Smallest play area the simulation accepts.
pub const MIN_WIDTH: i32 = SAFE_ZONE_W * 2;
pub const MIN_HEIGHT: i32 = SAFE_ZONE_H * 2;

pub const MAX_HUNTER_WIDTH: i32 = 8;
pub const MAX_HUNTER_HEIGHT: i32 = 4;
/// Hunters show their bounce budget as a single digit.
pub const MAX_HUNTER_BOUNCES: i32 = 9;
pub const MAX_SWALLOW_SPEED: u32 = 9;
pub const MAX_LEVEL: u32 = TIERS.len() as u32;
/// One hour.
pub const MAX_TIME_LIMIT: f64 = 3600.0;

/// Tunable parameters for one session.
///
/// Loaded once, then only the difficulty director (tier fields) and the tick
/// orchestrator (`time_remaining`, `available_taxis`) write to it.
#[derive(Clone, Debug, PartialEq)]
pub struct GameConfig {
    pub screen_width: i32,
    pub screen_height: i32,
    /// Stars needed to win.
    pub star_quota: u32,
    /// Session length in seconds, as configured.
    pub time_limit: f64,
    pub time_remaining: f64,
    pub swallow_speed_min: u32,
    pub swallow_speed_max: u32,
    /// A dead hunter slot respawns with probability `1 / hunter_spawn_rate` per tick.
    pub hunter_spawn_rate: u32,
    pub seed: u64,
    pub damage_penalty: u32,
    pub hunter_speed: f64,
    pub player_name: String,
    /// Current difficulty tier, starting at the configured level.
    pub level: u32,
    pub hunter_bounces: i32,
    pub hunter_width: i32,
    pub hunter_height: i32,
    pub hunter_num: usize,
    pub available_taxis: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            screen_width: 100,
            screen_height: 35,
            star_quota: 10,
            time_limit: 60.0,
            time_remaining: 60.0,
            swallow_speed_min: 1,
            swallow_speed_max: 5,
            hunter_spawn_rate: 100,
            seed: 1234,
            damage_penalty: 1,
            hunter_speed: 1.0,
            player_name: "PLAYER1".to_string(),
            level: 1,
            hunter_bounces: 3,
            hunter_width: 3,
            hunter_height: 2,
            hunter_num: 3,
            available_taxis: 3,
        }
    }
}

impl GameConfig {
    /// Clamp every field into a range the simulation can run with.
    ///
    /// Bad values degrade to the nearest usable one instead of failing, and
    /// `time_remaining` is reset to the (clamped) time limit.
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();

        self.screen_width = self.screen_width.max(MIN_WIDTH);
        self.screen_height = self.screen_height.max(MIN_HEIGHT);
        self.star_quota = self.star_quota.max(1);
        if !self.time_limit.is_finite() || self.time_limit <= 0.0 {
            self.time_limit = defaults.time_limit;
        }
        self.time_limit = self.time_limit.min(MAX_TIME_LIMIT);
        self.time_remaining = self.time_limit;
        self.swallow_speed_min = self.swallow_speed_min.clamp(1, MAX_SWALLOW_SPEED);
        self.swallow_speed_max = self
            .swallow_speed_max
            .clamp(self.swallow_speed_min, MAX_SWALLOW_SPEED);
        self.hunter_spawn_rate = self.hunter_spawn_rate.max(1);
        if !self.hunter_speed.is_finite() || self.hunter_speed <= 0.0 {
            self.hunter_speed = defaults.hunter_speed;
        }
        if self.player_name.trim().is_empty() {
            self.player_name = defaults.player_name;
        }
        self.level = self.level.clamp(1, MAX_LEVEL);
        self.hunter_bounces = self.hunter_bounces.clamp(0, MAX_HUNTER_BOUNCES);
        self.hunter_width = self.hunter_width.clamp(1, MAX_HUNTER_WIDTH);
        self.hunter_height = self.hunter_height.clamp(1, MAX_HUNTER_HEIGHT);
        self.hunter_num = self.hunter_num.min(MAX_HUNTERS);
        self
    }
}

// ── File provider ────────────────────────────────────────────────────────────

/// Read and parse a config file. The result is not yet sanitized.
pub fn load_config(path: impl AsRef<Path>) -> Result<GameConfig, ConfigError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    log::info!("loaded config from {}", path.display());
    Ok(parse_config(&text))
}

/// Parse `KEY value` pairs on top of the defaults.
pub fn parse_config(text: &str) -> GameConfig {
    let mut config = GameConfig::default();
    let mut tokens = text.split_whitespace();

    while let Some(key) = tokens.next() {
        let Some(value) = tokens.next() else {
            log::warn!("config key {key} has no value");
            break;
        };
        if let Err(reason) = assign(&mut config, key, value) {
            log::warn!("ignoring config entry {key}={value}: {reason}");
        }
    }

    config.time_remaining = config.time_limit;
    config
}

fn assign(config: &mut GameConfig, key: &str, value: &str) -> Result<(), String> {
    match key {
        "SCREEN_WIDTH" => config.screen_width = parse_num(value)?,
        "SCREEN_HEIGHT" => config.screen_height = parse_num(value)?,
        "STAR_QUOTA" => config.star_quota = parse_num(value)?,
        "TIME_LIMIT" => config.time_limit = parse_num(value)?,
        "SWALLOW_SPEED_MIN" => config.swallow_speed_min = parse_num(value)?,
        "SWALLOW_SPEED_MAX" => config.swallow_speed_max = parse_num(value)?,
        "HUNTER_SPAWN_RATE" => config.hunter_spawn_rate = parse_num(value)?,
        "SEED" => config.seed = parse_num(value)?,
        "DAMAGE_PENALTY" => config.damage_penalty = parse_num(value)?,
        "HUNTER_SPEED" => config.hunter_speed = parse_num(value)?,
        "PLAYER_NAME" => config.player_name = value.to_string(),
        "LEVEL" => config.level = parse_num(value)?,
        "HUNTER_BOUNCES" => config.hunter_bounces = parse_num(value)?,
        "HUNTER_NUM" => config.hunter_num = parse_num(value)?,
        "AVAILABLE_TAXIS" => config.available_taxis = parse_num(value)?,
        "HUNTER_SHAPE" => {
            let (w, h) = value
                .split_once(['x', 'X'])
                .ok_or_else(|| format!("expected WxH, got {value}"))?;
            let width = parse_num(w)?;
            let height = parse_num(h)?;
            config.hunter_width = width;
            config.hunter_height = height;
        }
        _ => return Err("unknown key".to_string()),
    }
    Ok(())
}

fn parse_num<T: std::str::FromStr>(value: &str) -> Result<T, String>
where
    T::Err: std::fmt::Display,
{
    value.parse::<T>().map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_num_rejects_garbage() {
        assert_eq!(parse_num::<u32>("12"), Ok(12));
        assert!(parse_num::<u32>("-3").is_err());
        assert!(parse_num::<f64>("fast").is_err());
    }

    #[test]
    fn hunter_shape_requires_both_sides() {
        let mut config = GameConfig::default();
        assert!(assign(&mut config, "HUNTER_SHAPE", "4").is_err());
        assert!(assign(&mut config, "HUNTER_SHAPE", "4x").is_err());
        assert_eq!((config.hunter_width, config.hunter_height), (3, 2));

        assign(&mut config, "HUNTER_SHAPE", "4x3").unwrap();
        assert_eq!((config.hunter_width, config.hunter_height), (4, 3));
    }
}
