use swallow_game::compute::difficulty::*;
use swallow_game::config::GameConfig;

fn level_at(elapsed: f64) -> Option<u32> {
    tier_for(elapsed, 60.0).map(|t| t.level)
}

/// Default config with `elapsed` seconds already played.
fn config_after(elapsed: f64) -> GameConfig {
    let mut config = GameConfig::default();
    config.time_remaining = config.time_limit - elapsed;
    config
}

// ── tier windows ──────────────────────────────────────────────────────────────

#[test]
fn no_tier_before_the_clock_starts() {
    assert_eq!(level_at(0.0), None);
}

#[test]
fn tier_windows_for_sixty_seconds() {
    assert_eq!(level_at(0.05), Some(1));
    assert_eq!(level_at(10.0), Some(1));
    assert_eq!(level_at(10.01), Some(2));
    assert_eq!(level_at(20.0), Some(2));
    assert_eq!(level_at(30.01), Some(3));
    assert_eq!(level_at(52.5), Some(3));
    assert_eq!(level_at(52.51), Some(4));
    assert_eq!(level_at(120.0), Some(4));
}

#[test]
fn gap_between_tiers_two_and_three() {
    assert_eq!(level_at(20.01), None);
    assert_eq!(level_at(25.0), None);
    assert_eq!(level_at(30.0), None);
}

// ── applying ──────────────────────────────────────────────────────────────────

#[test]
fn tier_three_writes_every_field() {
    let mut config = config_after(40.0);
    config.hunter_speed = 2.5;
    apply_difficulty(&mut config);
    assert_eq!(config.level, 3);
    assert_eq!(config.hunter_num, 5);
    assert_eq!(config.hunter_spawn_rate, 20);
    assert_eq!(config.hunter_bounces, 5);
    assert_eq!(config.hunter_speed, 1.0);
}

#[test]
fn early_tiers_keep_configured_hunter_speed() {
    let mut config = config_after(5.0);
    config.hunter_speed = 2.5;
    apply_difficulty(&mut config);
    assert_eq!(config.level, 1);
    assert_eq!(config.hunter_speed, 2.5);

    let mut config = config_after(15.0);
    config.hunter_speed = 2.5;
    apply_difficulty(&mut config);
    assert_eq!(config.level, 2);
    assert_eq!(config.hunter_bounces, 8);
    assert_eq!(config.hunter_speed, 2.5);
}

#[test]
fn gap_keeps_previous_tier_values() {
    let mut config = config_after(15.0);
    apply_difficulty(&mut config);
    config.time_remaining = config.time_limit - 25.0;
    let before = config.clone();
    apply_difficulty(&mut config);
    assert_eq!(config, before);
    assert_eq!(config.level, 2);
}

#[test]
fn applying_twice_equals_applying_once() {
    for elapsed in [0.0, 3.0, 12.0, 27.0, 45.0, 58.0] {
        let mut once = config_after(elapsed);
        apply_difficulty(&mut once);
        let mut twice = once.clone();
        apply_difficulty(&mut twice);
        assert_eq!(once, twice, "elapsed {elapsed}");
    }
}

#[test]
fn zero_elapsed_leaves_config_untouched() {
    let mut config = config_after(0.0);
    apply_difficulty(&mut config);
    assert_eq!(config, GameConfig::default());
}
