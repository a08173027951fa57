mod display;
mod input;

use std::fs::File;
use std::io::{stdout, BufWriter, Write};
use std::path::Path;
use std::sync::{mpsc, Mutex};
use std::thread;
use std::time::{Duration, Instant};

use anyhow::Context;
use crossterm::{
    event::{
        self, Event, KeyEvent, KeyboardEnhancementFlags, PopKeyboardEnhancementFlags,
        PushKeyboardEnhancementFlags,
    },
    cursor,
    style::Print,
    terminal,
    ExecutableCommand, QueueableCommand,
};
use rand::thread_rng;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

use asteroids::config::GameConfig;
use asteroids::entities::Cue;
use asteroids::game::Game;
use asteroids::scores::FileScoreStore;

use crate::input::{KeyAction, KeyTracker};

// ── Logging ───────────────────────────────────────────────────────────────────

/// `RUST_LOG`-style directives, falling back to `info` when none are given.
fn log_filter(directives: &str) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .parse_lossy(directives)
}

/// The terminal belongs to the renderer, so logs go to a file.
fn init_logging(path: &Path) -> anyhow::Result<()> {
    let file = File::create(path)
        .with_context(|| format!("creating log file {}", path.display()))?;
    let directives = std::env::var(EnvFilter::DEFAULT_ENV).unwrap_or_default();
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(&directives))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

// ── Audio cues ────────────────────────────────────────────────────────────────

fn play_cue<W: Write>(out: &mut W, cue: Cue, bell: bool) -> std::io::Result<()> {
    tracing::trace!(?cue, "cue");
    if bell && cue == Cue::Explosion {
        out.queue(Print("\x07"))?;
    }
    Ok(())
}

// ── Frame loop ────────────────────────────────────────────────────────────────

/// Runs until the game asks to exit or the player hits Esc / Ctrl-C.
///
/// Each frame: drain pending key events, step the simulation with the
/// measured delta, play cues, render, then sleep off the rest of the frame.
fn run<W: Write>(
    out: &mut W,
    rx: &mpsc::Receiver<Event>,
    game: &mut Game<FileScoreStore>,
) -> std::io::Result<()> {
    let mut rng = thread_rng();
    let mut keys = KeyTracker::new();
    let frame = Duration::from_millis(game.config().display.frame_ms);
    let bell = game.config().display.bell;
    let mut last = Instant::now();

    while game.is_running() {
        let frame_start = Instant::now();
        let dt = frame_start.duration_since(last).as_secs_f32() * 1000.0;
        last = frame_start;

        // ── Drain all pending input events (non-blocking) ─────────────────────
        keys.begin_frame();
        while let Ok(ev) = rx.try_recv() {
            if let Event::Key(KeyEvent { code, kind, modifiers, .. }) = ev {
                if keys.record(code, kind, modifiers) == KeyAction::Quit {
                    tracing::info!("quit requested");
                    return Ok(());
                }
            }
        }

        game.step(dt, &keys.input(), &mut rng);
        for cue in game.drain_cues() {
            play_cue(out, cue, bell)?;
        }
        display::render(out, &game.snapshot())?;

        let elapsed = frame_start.elapsed();
        if elapsed < frame {
            thread::sleep(frame - elapsed);
        }
    }
    Ok(())
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    let config_path = GameConfig::default_path();
    let cfg = GameConfig::load(&config_path)?;
    init_logging(&cfg.display.log_path)?;
    tracing::info!(config = %config_path.display(), "starting");

    let store = FileScoreStore::new(cfg.scores.path.clone());
    let mut game = Game::new(cfg, store);

    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode().context("entering raw mode")?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    // Request key-release (and key-repeat) events from the terminal.
    // Ghostty / kitty-protocol terminals support this; others fall back gracefully.
    let keyboard_enhanced = out
        .execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))
        .is_ok();

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the frame loop never has to block on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || {
        while let Ok(ev) = event::read() {
            if tx.send(ev).is_err() {
                break; // receiver dropped → program exiting
            }
        }
    });

    let result = run(&mut out, &rx, &mut game);

    // Always restore the terminal
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    if let Err(e) = &result {
        tracing::error!("terminal failure: {e}");
    }
    result.context("running game loop")
}
