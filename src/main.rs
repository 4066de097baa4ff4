mod display;

use std::fs::File;
use std::io::{stdout, BufWriter, Write};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal, ExecutableCommand,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

use swallow_game::compute::{final_score, init_state, tick};
use swallow_game::config::{load_config, GameConfig};
use swallow_game::entities::{GameState, InputEvent, Outcome};
use swallow_game::ranking::{Ranking, RankingEntry, RANKING_FILE};

use display::{OFF_X, OFF_Y, STATUS_HEIGHT};

const FRAME: Duration = Duration::from_millis(50);
const CONFIG_FILE: &str = "config.txt";
const LOG_FILE: &str = "swallow.log";

// ── Input ─────────────────────────────────────────────────────────────────────

fn map_key(key: KeyEvent) -> Option<InputEvent> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(InputEvent::Quit)
        }
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(InputEvent::Quit),
        KeyCode::Char('w') | KeyCode::Char('W') | KeyCode::Up => Some(InputEvent::MoveUp),
        KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Down => Some(InputEvent::MoveDown),
        KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Left => Some(InputEvent::MoveLeft),
        KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Right => Some(InputEvent::MoveRight),
        KeyCode::Char('p') | KeyCode::Char('P') => Some(InputEvent::SpeedUp),
        KeyCode::Char('o') | KeyCode::Char('O') => Some(InputEvent::SpeedDown),
        KeyCode::Char('t') | KeyCode::Char('T') => Some(InputEvent::ActivateTaxi),
        _ => None,
    }
}

/// Drain everything queued since the last frame and keep only the most
/// recent mapped key. A quit anywhere in the batch wins.
fn sample_input(rx: &mpsc::Receiver<Event>) -> Option<InputEvent> {
    let mut latest = None;
    while let Ok(ev) = rx.try_recv() {
        if let Event::Key(key) = ev {
            match map_key(key) {
                Some(InputEvent::Quit) => return Some(InputEvent::Quit),
                Some(input) => latest = Some(input),
                None => {}
            }
        }
    }
    latest
}

/// Drop keys typed during play, then block until a fresh key press.
fn wait_for_key(rx: &mpsc::Receiver<Event>) {
    while rx.try_recv().is_ok() {}
    while let Ok(ev) = rx.recv() {
        if let Event::Key(KeyEvent {
            kind: KeyEventKind::Press,
            ..
        }) = ev
        {
            return;
        }
    }
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// One tick, one render, then sleep out the rest of the frame.
fn game_loop<W: Write>(
    out: &mut W,
    state: &mut GameState,
    rng: &mut StdRng,
    rx: &mpsc::Receiver<Event>,
) -> std::io::Result<Outcome> {
    display::render(out, state)?;

    loop {
        let frame_start = Instant::now();

        let input = sample_input(rx);
        let outcome = tick(state, input, rng);
        if outcome != Outcome::Continuing {
            return Ok(outcome);
        }

        display::render(out, state)?;

        let elapsed = frame_start.elapsed();
        if elapsed < FRAME {
            thread::sleep(FRAME - elapsed);
        }
    }
}

// ── Setup ─────────────────────────────────────────────────────────────────────

/// Log to a file: stderr belongs to the raw-mode terminal.
fn init_logging() {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    match File::create(LOG_FILE) {
        Ok(file) => {
            builder.target(env_logger::Target::Pipe(Box::new(file)));
        }
        Err(_) => {
            builder.filter_level(log::LevelFilter::Off);
        }
    }
    let _ = builder.try_init();
}

/// Load the config, falling back to defaults, and shrink the play area to
/// fit the terminal.
fn session_config() -> std::io::Result<GameConfig> {
    let mut config = load_config(CONFIG_FILE).unwrap_or_else(|e| {
        log::warn!("{e}; using default configuration");
        GameConfig::default()
    });

    let (cols, rows) = terminal::size()?;
    let max_w = cols.saturating_sub(OFF_X + 1) as i32;
    let max_h = rows.saturating_sub(OFF_Y + STATUS_HEIGHT + 1) as i32;
    if config.screen_width > max_w || config.screen_height > max_h {
        log::warn!(
            "terminal is {cols}x{rows}; shrinking play area from {}x{}",
            config.screen_width,
            config.screen_height
        );
        config.screen_width = config.screen_width.min(max_w);
        config.screen_height = config.screen_height.min(max_h);
    }
    Ok(config)
}

fn record_result(state: &GameState) -> (Ranking, Option<usize>) {
    let mut ranking = Ranking::load(RANKING_FILE).unwrap_or_else(|e| {
        log::warn!("{e}; starting a fresh ranking");
        Ranking::new()
    });
    let rank = ranking.record(RankingEntry::from_session(state));
    if let Err(e) = ranking.save(RANKING_FILE) {
        log::error!("could not save ranking: {e}");
    }
    (ranking, rank)
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> std::io::Result<()> {
    init_logging();

    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the game loop never has to block on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || {
        while let Ok(ev) = event::read() {
            if tx.send(ev).is_err() {
                break;
            }
        }
    });

    let result = run(&mut out, &rx);

    // Always restore the terminal
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    result
}

fn run<W: Write>(out: &mut W, rx: &mpsc::Receiver<Event>) -> std::io::Result<()> {
    let config = session_config()?;
    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut state = init_state(config, &mut rng);
    log::info!(
        "session start: {}x{}, quota {}, {:.0}s",
        state.config.screen_width,
        state.config.screen_height,
        state.config.star_quota,
        state.config.time_limit
    );

    let outcome = game_loop(out, &mut state, &mut rng, rx)?;
    let score = final_score(&state);
    let (ranking, rank) = record_result(&state);
    log::info!("session over: {outcome:?}, score {score}, rank {rank:?}");

    display::draw_end_banner(out, &state, score)?;
    thread::sleep(Duration::from_secs(1));
    wait_for_key(rx);

    display::draw_ranking(out, &ranking, rank)?;
    wait_for_key(rx);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(c: char) -> Event {
        Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE))
    }

    fn feed(events: Vec<Event>) -> mpsc::Receiver<Event> {
        let (tx, rx) = mpsc::channel();
        for ev in events {
            tx.send(ev).unwrap();
        }
        rx
    }

    #[test]
    fn map_key_covers_controls() {
        let key = |c| KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE);
        assert_eq!(map_key(key('w')), Some(InputEvent::MoveUp));
        assert_eq!(map_key(key('D')), Some(InputEvent::MoveRight));
        assert_eq!(map_key(key('p')), Some(InputEvent::SpeedUp));
        assert_eq!(map_key(key('o')), Some(InputEvent::SpeedDown));
        assert_eq!(map_key(key('t')), Some(InputEvent::ActivateTaxi));
        assert_eq!(map_key(key('x')), None);
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::Left, KeyModifiers::NONE)),
            Some(InputEvent::MoveLeft)
        );
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(InputEvent::Quit)
        );
    }

    #[test]
    fn key_release_is_ignored() {
        let release =
            KeyEvent::new_with_kind(KeyCode::Char('w'), KeyModifiers::NONE, KeyEventKind::Release);
        assert_eq!(map_key(release), None);
    }

    #[test]
    fn latest_key_in_batch_wins() {
        let rx = feed(vec![press('w'), press('x'), press('a'), Event::FocusGained]);
        assert_eq!(sample_input(&rx), Some(InputEvent::MoveLeft));
        // Batch is drained
        assert_eq!(sample_input(&rx), None);
    }

    #[test]
    fn quit_anywhere_in_batch_wins() {
        let rx = feed(vec![press('w'), press('q'), press('d')]);
        assert_eq!(sample_input(&rx), Some(InputEvent::Quit));
    }

    #[test]
    fn empty_batch_is_no_input() {
        let rx = feed(Vec::new());
        assert_eq!(sample_input(&rx), None);
    }
}
