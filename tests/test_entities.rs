use rand::rngs::StdRng;
use rand::SeedableRng;

use swallow_game::compute::init_state;
use swallow_game::config::GameConfig;
use swallow_game::entities::*;

#[test]
fn entity_enums_compare() {
    assert_eq!(Outcome::Won, Outcome::Won);
    assert_ne!(Outcome::Won, Outcome::Lost);
    assert_ne!(TaxiState::Waiting, TaxiState::Moving);
    assert_ne!(HunterState::Seeking, HunterState::Stunned);
    assert_ne!(InputEvent::MoveUp, InputEvent::MoveDown);
    assert_ne!(HealthTier::Nominal, HealthTier::Critical);
}

#[test]
fn footprint_constants_match_sprites() {
    assert_eq!(BIRD_SYMBOL.chars().count() as i32, BIRD_WIDTH);
    assert!(TAXI_SYMBOL.len() as i32 <= SAFE_ZONE_W);
}

#[test]
fn game_state_clone_is_independent() {
    let original = init_state(GameConfig::default(), &mut StdRng::seed_from_u64(42));
    let mut cloned = original.clone();

    // Mutating the clone must not affect the original
    cloned.bird.x = 3;
    cloned.bird.score = 99;
    cloned.hunters.clear();
    cloned.config.available_taxis = 0;

    assert_eq!(original.bird.x, 50);
    assert_eq!(original.bird.score, 0);
    assert_eq!(original.hunters.len(), MAX_HUNTERS);
    assert_eq!(original.config.available_taxis, 3);
}
