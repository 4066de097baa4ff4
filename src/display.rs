//! Rendering layer: all terminal output lives here.
//!
//! Each function receives a mutable writer and an immutable view of the
//! game state. Nothing here changes the simulation; this module only
//! translates actor positions, footprints and colour tiers into terminal
//! commands.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Attribute, Color, Print},
    terminal,
    QueueableCommand,
};
use swallow_game::compute::bird::health_tier;
use swallow_game::compute::hunter::hunter_state;
use swallow_game::entities::{
    GameState, HealthTier, Hunter, HunterState, Outcome, TaxiState, BIRD_SYMBOL, SAFE_ZONE_H,
    SAFE_ZONE_W, TAXI_SYMBOL,
};
use swallow_game::ranking::Ranking;

/// Screen offset of the play area's top-left wall cell.
pub const OFF_X: u16 = 2;
pub const OFF_Y: u16 = 1;
/// Rows taken by the status bar under the play area.
pub const STATUS_HEIGHT: u16 = 5;

// ── Colour palette ────────────────────────────────────────────────────────────

const C_BORDER: Color = Color::Cyan;
const C_STATUS: Color = Color::Yellow;
const C_BIRD: Color = Color::Green;
const C_BIRD_INJURED: Color = Color::Yellow;
const C_BIRD_CRITICAL: Color = Color::Red;
const C_STAR: Color = Color::Magenta;
const C_HUNTER: Color = Color::Red;
const C_HUNTER_STUNNED: Color = Color::DarkRed;
const C_TAXI: Color = Color::Cyan;
const C_SAFE_ZONE: Color = Color::Green;
const C_BONUS: Color = Color::Yellow;
const C_HINT: Color = Color::DarkGrey;

fn bird_color(tier: HealthTier) -> Color {
    match tier {
        HealthTier::Nominal => C_BIRD,
        HealthTier::Warning => C_BIRD_INJURED,
        HealthTier::Critical => C_BIRD_CRITICAL,
    }
}

/// Move to a play-area cell. Cells left of or above the wall are skipped.
fn put<W: Write>(out: &mut W, x: i32, y: i32, text: &str) -> std::io::Result<()> {
    if x < 0 || y < 0 {
        return Ok(());
    }
    out.queue(cursor::MoveTo(OFF_X + x as u16, OFF_Y + y as u16))?;
    out.queue(Print(text))?;
    Ok(())
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame.
pub fn render<W: Write>(out: &mut W, state: &GameState) -> std::io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    draw_border(out, state)?;
    draw_taxi(out, state)?;
    for star in &state.stars {
        out.queue(style::SetForegroundColor(C_STAR))?;
        put(out, star.x, star.y, "*")?;
    }
    let in_play = state.config.hunter_num.min(state.hunters.len());
    for hunter in &state.hunters[..in_play] {
        draw_hunter(out, hunter)?;
    }
    draw_bird(out, state)?;
    draw_status(out, state)?;

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, status_top(state) + STATUS_HEIGHT))?;
    out.flush()?;
    Ok(())
}

fn status_top(state: &GameState) -> u16 {
    OFF_Y + state.config.screen_height as u16
}

// ── Border ────────────────────────────────────────────────────────────────────

fn draw_border<W: Write>(out: &mut W, state: &GameState) -> std::io::Result<()> {
    let w = state.config.screen_width;
    let h = state.config.screen_height;
    let inner = "─".repeat((w - 2).max(0) as usize);

    out.queue(style::SetForegroundColor(C_BORDER))?;
    put(out, 0, 0, &format!("┌{inner}┐"))?;
    put(out, 0, h - 1, &format!("└{inner}┘"))?;
    for row in 1..h - 1 {
        put(out, 0, row, "│")?;
        put(out, w - 1, row, "│")?;
    }
    Ok(())
}

// ── Entities ──────────────────────────────────────────────────────────────────

fn draw_bird<W: Write>(out: &mut W, state: &GameState) -> std::io::Result<()> {
    let bird = &state.bird;
    out.queue(style::SetForegroundColor(bird_color(health_tier(bird))))?;
    put(out, bird.x, bird.y, BIRD_SYMBOL)
}

/// Hunters are a block of `#` with the remaining bounce budget in the middle.
fn draw_hunter<W: Write>(out: &mut W, hunter: &Hunter) -> std::io::Result<()> {
    let color = match hunter_state(hunter) {
        HunterState::Inactive => return Ok(()),
        HunterState::Stunned => C_HUNTER_STUNNED,
        HunterState::Seeking => C_HUNTER,
    };
    out.queue(style::SetForegroundColor(color))?;

    let (x, y) = (hunter.x as i32, hunter.y as i32);
    let (mid_x, mid_y) = (hunter.width / 2, hunter.height / 2);
    for row in 0..hunter.height {
        let line: String = (0..hunter.width)
            .map(|col| {
                if row == mid_y && col == mid_x {
                    char::from_digit(hunter.bounces.clamp(0, 9) as u32, 10).unwrap_or('#')
                } else {
                    '#'
                }
            })
            .collect();
        put(out, x, y + row, &line)?;
    }
    Ok(())
}

fn draw_taxi<W: Write>(out: &mut W, state: &GameState) -> std::io::Result<()> {
    let taxi = &state.taxi;
    if !taxi.active {
        return Ok(());
    }

    if taxi.state == TaxiState::Moving {
        // Safe zone outline
        out.queue(style::SetForegroundColor(C_SAFE_ZONE))?;
        let edge = "-".repeat(SAFE_ZONE_W as usize);
        put(out, taxi.x, taxi.y, &edge)?;
        put(out, taxi.x, taxi.y + SAFE_ZONE_H - 1, &edge)?;
        for row in 1..SAFE_ZONE_H - 1 {
            put(out, taxi.x, taxi.y + row, "|")?;
            put(out, taxi.x + SAFE_ZONE_W - 1, taxi.y + row, "|")?;
        }

        // Bonus trail, clipped to the play area
        out.queue(style::SetForegroundColor(C_BONUS))?;
        let right_wall = state.config.screen_width - 1;
        for bonus in taxi.bonus.iter().filter(|b| !b.collected && b.x < right_wall) {
            put(out, bonus.x, taxi.y + SAFE_ZONE_H / 2, "*")?;
        }
    }

    out.queue(style::SetForegroundColor(C_TAXI))?;
    out.queue(style::SetAttribute(Attribute::Bold))?;
    let sprite_x = taxi.x + SAFE_ZONE_W / 2 - TAXI_SYMBOL.len() as i32 / 2;
    put(out, sprite_x, taxi.y + SAFE_ZONE_H - 2, TAXI_SYMBOL)?;
    out.queue(style::SetAttribute(Attribute::Reset))?;
    Ok(())
}

// ── Status bar ────────────────────────────────────────────────────────────────

fn draw_status<W: Write>(out: &mut W, state: &GameState) -> std::io::Result<()> {
    let top = status_top(state);
    let cfg = &state.config;
    let bird = &state.bird;

    out.queue(cursor::MoveTo(OFF_X, top + 1))?;
    out.queue(style::SetForegroundColor(bird_color(health_tier(bird))))?;
    out.queue(style::SetAttribute(Attribute::Reverse))?;
    out.queue(Print(format!(
        "   SCORE: {}/{}     Time Left : {:.1}  Life = {}   ",
        bird.score,
        cfg.star_quota,
        cfg.time_remaining.max(0.0),
        bird.health
    )))?;
    out.queue(style::SetAttribute(Attribute::Reset))?;

    out.queue(style::SetForegroundColor(C_STATUS))?;
    out.queue(cursor::MoveTo(OFF_X, top + 2))?;
    out.queue(Print(format!(
        "PLAYER: {}   LEVEL: {}  TAXIS AVAILABLE: {}",
        cfg.player_name, cfg.level, cfg.available_taxis
    )))?;
    out.queue(cursor::MoveTo(OFF_X, top + 3))?;
    out.queue(Print(format!(
        "SPEED = {}   Position: x={} y={}",
        bird.speed, bird.x, bird.y
    )))?;

    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(cursor::MoveTo(OFF_X, top + 4))?;
    out.queue(Print("[W]Up [S]Dn [A]Lft [D]Rgt [O/P]Speed [T]Taxi [Q]Quit"))?;
    Ok(())
}

// ── End-of-session screens ────────────────────────────────────────────────────

/// Centred banner for the session outcome.
pub fn draw_end_banner<W: Write>(
    out: &mut W,
    state: &GameState,
    final_score: u32,
) -> std::io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    let (title, color) = match state.outcome {
        Outcome::Won => ("MISSION ACCOMPLISHED! SWALLOW SAVED!", Color::Green),
        Outcome::Lost => ("GAME OVER.", Color::Red),
        Outcome::Quit | Outcome::Continuing => ("Game Aborted.", Color::DarkGrey),
    };
    let score_line = format!("Final Score: {final_score}");
    let lines: &[(&str, Color)] = &[
        (title, color),
        ("", Color::Reset),
        (score_line.as_str(), Color::Yellow),
        ("Press any key", Color::White),
    ];

    let cx = OFF_X + state.config.screen_width as u16 / 2;
    let start_row = OFF_Y + (state.config.screen_height as u16 / 2).saturating_sub(2);
    for (i, (msg, color)) in lines.iter().enumerate() {
        let col = cx.saturating_sub(msg.chars().count() as u16 / 2);
        out.queue(cursor::MoveTo(col, start_row + i as u16))?;
        out.queue(style::SetForegroundColor(*color))?;
        out.queue(Print(*msg))?;
    }

    out.queue(style::ResetColor)?;
    out.flush()
}

/// The leaderboard, with the current player's row highlighted.
pub fn draw_ranking<W: Write>(
    out: &mut W,
    ranking: &Ranking,
    highlight: Option<usize>,
) -> std::io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    let left = OFF_X + 2;
    let mut row = OFF_Y + 1;
    out.queue(cursor::MoveTo(left + 18, row))?;
    out.queue(style::SetForegroundColor(Color::Yellow))?;
    out.queue(style::SetAttribute(Attribute::Bold))?;
    out.queue(Print("BEST OF THE BEST"))?;
    out.queue(style::SetAttribute(Attribute::Reset))?;
    if let Some(top) = ranking.top_score() {
        out.queue(cursor::MoveTo(left + 18, row + 1))?;
        out.queue(Print(format!("TOP SCORE: {top}")))?;
    }

    row += 2;
    out.queue(cursor::MoveTo(left, row))?;
    out.queue(style::SetAttribute(Attribute::Reverse))?;
    out.queue(Print("RK  NAME         STARS   TIME(s)  SCORE  "))?;
    out.queue(style::SetAttribute(Attribute::Reset))?;

    if ranking.entries.is_empty() {
        out.queue(cursor::MoveTo(left + 18, row + 2))?;
        out.queue(style::SetForegroundColor(C_HINT))?;
        out.queue(Print("No Records Yet!"))?;
    }
    for (i, e) in ranking.entries.iter().enumerate() {
        row += 1;
        let color = if highlight == Some(i + 1) {
            Color::Green
        } else {
            Color::White
        };
        out.queue(cursor::MoveTo(left, row))?;
        out.queue(style::SetForegroundColor(color))?;
        out.queue(Print(format!(
            "#{:<2} {:<12} {:>2}/{:<2}   {:>6.1}   {:>6}",
            i + 1,
            e.name,
            e.stars_collected,
            e.star_quota,
            e.time_used,
            e.total_score
        )))?;
    }

    out.queue(cursor::MoveTo(left + 18, row + 3))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print("Press any key"))?;
    out.queue(style::ResetColor)?;
    out.flush()
}
