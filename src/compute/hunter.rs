//! Hunters: spawn on a random wall, dash at the bird, stun on wall contact,
//! and despawn once their bounce budget is spent.

use rand::Rng;

use crate::config::GameConfig;
use crate::entities::{
    Bird, Hunter, HunterState, Taxi, TaxiState, BIRD_WIDTH, BORDER, DASH_RECOVERY_TICKS,
    MAX_HUNTERS, SAFE_ZONE_H, SAFE_ZONE_W,
};

/// Unit vector from `(fx, fy)` towards `(tx, ty)`, or zero when they coincide.
pub fn aim(fx: f64, fy: f64, tx: f64, ty: f64) -> (f64, f64) {
    let (dx, dy) = (tx - fx, ty - fy);
    let length = dx.hypot(dy);
    if length == 0.0 {
        (0.0, 0.0)
    } else {
        (dx / length, dy / length)
    }
}

pub fn hunter_state(hunter: &Hunter) -> HunterState {
    if !hunter.active {
        HunterState::Inactive
    } else if hunter.wait_dash > 0 {
        HunterState::Stunned
    } else {
        HunterState::Seeking
    }
}

/// Spawn a hunter just inside one of the four walls, aimed at the bird.
pub fn spawn_hunter(config: &GameConfig, bird: &Bird, rng: &mut impl Rng) -> Hunter {
    let (w, h) = (config.hunter_width, config.hunter_height);
    let (cols, rows) = (config.screen_width, config.screen_height);
    let span_x = (cols - 2 * BORDER - 2 - w).max(1);
    let span_y = (rows - 2 * BORDER - 2 - h).max(1);

    let (x, y) = match rng.gen_range(0..4) {
        0 => (rng.gen_range(0..span_x) + BORDER + 1, BORDER + 1),
        1 => (cols - BORDER - w, rng.gen_range(0..span_y) + BORDER + 1),
        2 => (rng.gen_range(0..span_x) + BORDER + 1, rows - BORDER - h),
        _ => (BORDER + 1, rng.gen_range(0..span_y) + BORDER + 1),
    };
    let (x, y) = (x as f64, y as f64);
    let (dx, dy) = aim(x, y, bird.x as f64, bird.y as f64);

    Hunter {
        x,
        y,
        dx,
        dy,
        speed: config.hunter_speed,
        bounces: rng.gen_range(0..3) + config.hunter_bounces,
        damage: config.damage_penalty,
        width: w,
        height: h,
        active: true,
        wait_dash: 0,
    }
}

/// Fill the pool; only the first `hunter_num` slots start in play.
pub fn init_hunters(config: &GameConfig, bird: &Bird, rng: &mut impl Rng) -> Vec<Hunter> {
    (0..MAX_HUNTERS)
        .map(|i| {
            let mut hunter = spawn_hunter(config, bird, rng);
            hunter.active = i < config.hunter_num;
            hunter
        })
        .collect()
}

// ── Contact rules ────────────────────────────────────────────────────────────

/// Hunter footprint against the bird's sprite, edges inclusive.
pub fn overlaps_bird(hunter: &Hunter, bird: &Bird) -> bool {
    let (hx, hy) = (hunter.x as i32, hunter.y as i32);
    hy <= bird.y
        && hy + hunter.height >= bird.y
        && hx <= bird.x + BIRD_WIDTH
        && hx + hunter.width >= bird.x
}

/// A hunter reaching an unprotected bird hurts it and is spent.
pub fn check_hunter_bird(hunter: &mut Hunter, bird: &mut Bird) {
    if bird.on_taxi || !overlaps_bird(hunter, bird) {
        return;
    }
    hunter.active = false;
    bird.health = bird.health.saturating_sub(hunter.damage);
    log::debug!("hunter hit the bird, health now {}", bird.health);
}

/// The moving taxi's safe zone destroys any hunter it touches.
pub fn check_hunter_taxi(hunter: &mut Hunter, taxi: &Taxi) {
    if !taxi.active || taxi.state != TaxiState::Moving {
        return;
    }
    let (tx, ty) = (taxi.x as f64, taxi.y as f64);
    let hit = hunter.x < tx + SAFE_ZONE_W as f64
        && hunter.x + (hunter.width as f64) > tx
        && hunter.y < ty + SAFE_ZONE_H as f64
        && hunter.y + (hunter.height as f64) > ty;
    if hit {
        hunter.active = false;
        log::debug!("hunter destroyed by the taxi safe zone");
    }
}

// ── Movement ─────────────────────────────────────────────────────────────────

/// Clamp a hunter back inside the walls. Any contact freezes it, starts the
/// dash countdown and spends one bounce.
pub fn bounce(hunter: &mut Hunter, config: &GameConfig) {
    let border = BORDER as f64;
    let max_x = (config.screen_width - BORDER - hunter.width) as f64;
    let max_y = (config.screen_height - BORDER - hunter.height) as f64;
    let mut hit = false;

    if hunter.x < border {
        hunter.x = border;
        hit = true;
    } else if hunter.x > max_x {
        hunter.x = max_x;
        hit = true;
    }
    if hunter.y < border {
        hunter.y = border;
        hit = true;
    } else if hunter.y > max_y {
        hunter.y = max_y;
        hit = true;
    }

    if hit {
        hunter.dx = 0.0;
        hunter.dy = 0.0;
        hunter.wait_dash = DASH_RECOVERY_TICKS;
        hunter.bounces = (hunter.bounces - 1).max(-1);
    }
}

/// One tick for an active hunter.
pub fn update_hunter(hunter: &mut Hunter, bird: &mut Bird, taxi: &Taxi, config: &GameConfig) {
    if !hunter.active {
        return;
    }
    check_hunter_bird(hunter, bird);
    if !hunter.active {
        return;
    }
    check_hunter_taxi(hunter, taxi);
    if !hunter.active {
        return;
    }

    if hunter.wait_dash > 0 {
        hunter.wait_dash -= 1;
        if hunter.wait_dash == 0 {
            (hunter.dx, hunter.dy) = aim(hunter.x, hunter.y, bird.x as f64, bird.y as f64);
        }
        return;
    }

    hunter.x += hunter.dx * hunter.speed;
    hunter.y += hunter.dy * hunter.speed;
    bounce(hunter, config);
    if hunter.bounces < 0 {
        hunter.active = false;
        hunter.wait_dash = 0;
        log::debug!("hunter ran out of bounces");
        return;
    }

    check_hunter_bird(hunter, bird);
}

/// Update the in-play slots of the pool. Dead slots respawn with
/// probability `1 / hunter_spawn_rate`.
pub fn update_hunters(
    hunters: &mut [Hunter],
    bird: &mut Bird,
    taxi: &Taxi,
    config: &GameConfig,
    rng: &mut impl Rng,
) {
    let in_play = config.hunter_num.min(hunters.len());
    for hunter in &mut hunters[..in_play] {
        if hunter.active {
            update_hunter(hunter, bird, taxi, config);
        } else if rng.gen_ratio(1, config.hunter_spawn_rate.max(1)) {
            *hunter = spawn_hunter(config, bird, rng);
            log::debug!("hunter respawned at ({:.1}, {:.1})", hunter.x, hunter.y);
        }
    }
}
