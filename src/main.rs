mod display;

use std::io::{stdout, BufWriter, Write};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::Context;
use clap::Parser;
use crossterm::{
    cursor,
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyboardEnhancementFlags,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    terminal, ExecutableCommand,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

use dungeon_shooter::compute::{
    advance_level, apply_command, init_state, tick, GameState, GameStatus,
};
use dungeon_shooter::config::{Settings, GAME_OVER_PAUSE_MS, LEVEL_COMPLETE_PAUSE_MS};
use dungeon_shooter::error::Result;
use dungeon_shooter::highscore;
use dungeon_shooter::input::{Command, InputTracker};
use dungeon_shooter::viewport::Viewport;

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Run frames until the player dies or quits. Returns the final state.
fn game_loop<W: Write>(
    out: &mut W,
    mut state: GameState,
    rx: &mpsc::Receiver<Event>,
    rng: &mut StdRng,
    fps: u32,
) -> Result<GameState> {
    let frame = Duration::from_secs(1) / fps;
    let (cols, rows) = terminal::size()?;
    let mut viewport = Viewport::new(cols, rows);
    let mut tracker = InputTracker::new(fps);
    let clock = Instant::now();

    loop {
        let frame_start = Instant::now();
        let now_ms = clock.elapsed().as_millis() as u64;

        // ── Drain all pending input events (non-blocking) ─────────────────────
        while let Ok(ev) = rx.try_recv() {
            if let Event::Resize(cols, rows) = ev {
                viewport = Viewport::new(cols, rows);
                continue;
            }
            match tracker.handle(&ev, &viewport) {
                Some(Command::Quit) => {
                    log::info!("quit requested");
                    state.status = GameStatus::GameOver;
                    return Ok(state);
                }
                Some(command) => {
                    state = apply_command(&state, command, tracker.aim(), now_ms, rng);
                }
                None => {}
            }
        }

        state = tick(&state, &tracker.frame_input(), now_ms, rng);
        display::render(out, &state, &viewport)?;

        match state.status {
            GameStatus::Playing => {}
            GameStatus::LevelComplete => {
                thread::sleep(Duration::from_millis(LEVEL_COMPLETE_PAUSE_MS));
                state = advance_level(&state, rng);
            }
            GameStatus::GameOver => return Ok(state),
        }

        tracker.next_frame();
        let elapsed = frame_start.elapsed();
        if elapsed < frame {
            thread::sleep(frame - elapsed);
        }
    }
}

fn run<W: Write>(out: &mut W, rx: &mpsc::Receiver<Event>, settings: &Settings) -> Result<()> {
    let path = settings.high_score_path();
    let high_score = highscore::load(&path);
    let mut rng = match settings.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let state = init_state(high_score, &mut rng);
    let mut state = game_loop(out, state, rx, &mut rng, settings.fps)?;
    log::info!("game over with score {}", state.score);

    if let Err(err) = highscore::record(&path, state.score) {
        log::warn!("{}", err);
    }

    state.paused = false;
    let (cols, rows) = terminal::size()?;
    display::render(out, &state, &Viewport::new(cols, rows))?;
    thread::sleep(Duration::from_millis(GAME_OVER_PAUSE_MS));
    Ok(())
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let settings = Settings::parse();

    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode().context("enabling raw mode")?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;
    out.execute(EnableMouseCapture)?;

    // Request key-release (and key-repeat) events from the terminal.
    // Kitty-protocol terminals support this; others fall back gracefully.
    let keyboard_enhanced = out
        .execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))
        .is_ok();

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the game loop never has to block on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || loop {
        match event::read() {
            Ok(ev) => {
                if tx.send(ev).is_err() {
                    break; // receiver dropped → program exiting
                }
            }
            Err(_) => break,
        }
    });

    let result = run(&mut out, &rx, &settings);

    // Always restore the terminal
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(DisableMouseCapture);
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    result.context("game loop failed")
}
