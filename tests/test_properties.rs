use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

use swallow_game::compute::bird::bird_bounds;
use swallow_game::compute::hunter::{spawn_hunter, update_hunter};
use swallow_game::compute::taxi::init_taxi;
use swallow_game::compute::{init_state, tick};
use swallow_game::config::GameConfig;
use swallow_game::entities::*;

fn input_from(code: u8) -> Option<InputEvent> {
    match code {
        0 => Some(InputEvent::MoveUp),
        1 => Some(InputEvent::MoveDown),
        2 => Some(InputEvent::MoveLeft),
        3 => Some(InputEvent::MoveRight),
        4 => Some(InputEvent::SpeedUp),
        5 => Some(InputEvent::SpeedDown),
        6 => Some(InputEvent::ActivateTaxi),
        _ => None,
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn bird_stays_in_bounds_and_health_in_range(
        seed in any::<u64>(),
        codes in prop::collection::vec(0u8..10, 0..400),
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut config = GameConfig::default();
        config.damage_penalty = 15;
        let mut state = init_state(config, &mut rng);
        let (min_x, max_x, min_y, max_y) = bird_bounds(&state.config);

        for code in codes {
            let outcome = tick(&mut state, input_from(code), &mut rng);
            let bird = &state.bird;
            prop_assert!(bird.x >= min_x && bird.x <= max_x, "x = {}", bird.x);
            prop_assert!(bird.y >= min_y && bird.y <= max_y, "y = {}", bird.y);
            prop_assert!(bird.health <= MAX_HEALTH);

            if outcome != Outcome::Continuing {
                break;
            }
            if bird.health == 0 {
                prop_assert_eq!(tick(&mut state, None, &mut rng), Outcome::Lost);
                break;
            }
        }
    }

    #[test]
    fn riding_bird_never_loses_health(seed in any::<u64>(), health in 1u32..=100) {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut config = GameConfig::default();
        config.damage_penalty = 50;
        let mut state = init_state(config, &mut rng);
        state.bird.x = 5;
        state.bird.y = 25;
        state.bird.health = health;
        for h in &mut state.hunters {
            h.x = state.bird.x as f64;
            h.y = state.bird.y as f64;
        }

        tick(&mut state, Some(InputEvent::ActivateTaxi), &mut rng);
        prop_assert!(state.bird.on_taxi);
        while state.taxi.state == TaxiState::Moving {
            let before = state.bird.health;
            if tick(&mut state, None, &mut rng) != Outcome::Continuing {
                break;
            }
            if state.taxi.state == TaxiState::Moving {
                prop_assert!(state.bird.health >= before);
            }
        }
    }

    #[test]
    fn bounce_budget_only_shrinks(seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let config = GameConfig::default();
        let taxi = init_taxi(&config);
        let mut bird = init_bird_far(&config);
        let mut hunter = spawn_hunter(&config, &bird, &mut rng);

        let mut last = hunter.bounces;
        for _ in 0..2000 {
            update_hunter(&mut hunter, &mut bird, &taxi, &config);
            prop_assert!(hunter.bounces <= last);
            prop_assert!(hunter.bounces >= -1);
            if hunter.bounces == -1 {
                prop_assert!(!hunter.active);
            }
            if !hunter.active {
                break;
            }
            last = hunter.bounces;
        }
    }
}

/// A bird that hunters cannot reach, so only wall contacts matter.
fn init_bird_far(config: &GameConfig) -> Bird {
    let mut bird = swallow_game::compute::bird::init_bird(config);
    bird.on_taxi = true;
    bird
}
