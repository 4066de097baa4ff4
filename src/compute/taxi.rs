//! The taxi: a docked safe zone that, once boarded, carries the bird across
//! the play area, heals it and sweeps up a trail of bonus stars.

use crate::config::GameConfig;
use crate::entities::{
    Bird, BonusStar, Taxi, TaxiState, BIRD_WIDTH, BONUS_SPACING, BONUS_STARS, MAX_HEALTH,
    SAFE_ZONE_H, SAFE_ZONE_W, TAXI_HOME_X, TAXI_SPEED,
};

fn home_y(config: &GameConfig) -> i32 {
    config.screen_height - SAFE_ZONE_H - 1
}

pub fn init_taxi(config: &GameConfig) -> Taxi {
    Taxi {
        x: TAXI_HOME_X,
        y: home_y(config),
        active: false,
        state: TaxiState::Waiting,
        bonus: Vec::new(),
    }
}

/// Call the taxi. Ignored while one is already out or none are left.
pub fn activate_taxi(taxi: &mut Taxi, config: &mut GameConfig) -> bool {
    if taxi.active || config.available_taxis == 0 {
        return false;
    }
    taxi.active = true;
    taxi.state = TaxiState::Waiting;
    config.available_taxis -= 1;
    log::debug!("taxi called, {} left", config.available_taxis);
    true
}

/// Bird footprint against the docked safe zone, edges inclusive.
pub fn bird_can_board(taxi: &Taxi, bird: &Bird) -> bool {
    bird.x + BIRD_WIDTH >= taxi.x
        && bird.x <= taxi.x + SAFE_ZONE_W
        && bird.y >= taxi.y
        && bird.y <= taxi.y + SAFE_ZONE_H
}

/// Where the riding bird sits inside the safe zone.
pub fn seat_position(taxi: &Taxi) -> (i32, i32) {
    (
        taxi.x + SAFE_ZONE_W / 2 - BIRD_WIDTH / 2,
        taxi.y + SAFE_ZONE_H - 3,
    )
}

fn lay_bonus_trail(taxi: &mut Taxi) {
    taxi.bonus = (0..BONUS_STARS as i32)
        .map(|i| BonusStar {
            x: taxi.x + SAFE_ZONE_W + i * BONUS_SPACING,
            collected: false,
        })
        .collect();
}

/// Collect every bonus star the zone's leading edge has reached.
fn collect_bonus(taxi: &mut Taxi, bird: &mut Bird) {
    let leading_edge = taxi.x + SAFE_ZONE_W;
    for star in taxi.bonus.iter_mut().filter(|s| !s.collected) {
        if leading_edge >= star.x {
            star.collected = true;
            bird.score += 1;
        }
    }
}

fn has_arrived(taxi: &Taxi, config: &GameConfig) -> bool {
    taxi.x >= config.screen_width - SAFE_ZONE_W - 1
}

/// One tick for an active taxi.
pub fn update_taxi(taxi: &mut Taxi, bird: &mut Bird, config: &GameConfig) {
    if !taxi.active {
        return;
    }

    match taxi.state {
        TaxiState::Waiting => {
            taxi.x = TAXI_HOME_X;
            taxi.y = home_y(config);
            if bird_can_board(taxi, bird) {
                taxi.state = TaxiState::Moving;
                bird.on_taxi = true;
                lay_bonus_trail(taxi);
                log::debug!("bird boarded the taxi");
            }
        }
        TaxiState::Moving => {
            taxi.x += TAXI_SPEED;
            bird.health = (bird.health + 1).min(MAX_HEALTH);
            collect_bonus(taxi, bird);
            (bird.x, bird.y) = seat_position(taxi);

            if has_arrived(taxi, config) {
                taxi.active = false;
                taxi.state = TaxiState::Waiting;
                taxi.x = TAXI_HOME_X;
                taxi.y = home_y(config);
                taxi.bonus.clear();
                bird.on_taxi = false;
                log::debug!("taxi arrived, bird dropped off at ({}, {})", bird.x, bird.y);
            }
        }
    }
}
