//! Terminal Just Not Tetris (default binary).
//!
//! Drives the playing field from the keyboard: gravity every 500 ms, player
//! moves at most every 200 ms. Rendering uses a framebuffer flushed through
//! crossterm.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use tracing::info;

use just_not_tetris::cli::FieldArgs;
use just_not_tetris::core::PlayingField;
use just_not_tetris::input::{action_for_key, should_quit, CommandGate};
use just_not_tetris::logging;
use just_not_tetris::term::{FieldView, FrameBuffer, Hud, TerminalRenderer, Viewport};
use just_not_tetris::types::GameAction;

/// Frame loop interval (~60 FPS)
const FRAME_MS: u64 = 16;

#[derive(Debug, Parser)]
#[command(name = "just-not-tetris")]
#[command(about = "Falling blocks on a small field. Arrows/WASD move, Up rotates, q quits")]
struct Cli {
    #[command(flatten)]
    field: FieldArgs,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.field.log_file.as_deref())?;

    let seed = cli.field.seed.unwrap_or_else(time_seed);
    let mut field = cli.field.build_field(seed, |_| ())?;
    info!(seed, pieces = cli.field.pieces, "starting round");

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut field);

    // Always try to restore terminal state.
    let _ = term.exit();
    info!(locked = field.locked_count(), status = ?field.status(), "round finished");
    result
}

fn run(term: &mut TerminalRenderer, field: &mut PlayingField<()>) -> Result<()> {
    let view = FieldView::default();
    let mut gate = CommandGate::new();
    let mut hud = Hud::default();
    let mut fb = FrameBuffer::new(0, 0);

    let frame = Duration::from_millis(FRAME_MS);
    let mut last_tick = Instant::now();
    let mut fps_window = Instant::now();
    let mut frames_in_window = 0u32;

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&field.snapshot(), &hud, Viewport::new(w, h), &mut fb);
        term.present(&fb)?;
        frames_in_window += 1;

        let timeout = frame.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                // Held keys arrive as repeats; the gate spaces them out.
                if matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat) {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(action) = action_for_key(key) {
                        if gate.accept(action) {
                            dispatch(field, &mut hud, action);
                        }
                    }
                }
            }
        }

        let elapsed = last_tick.elapsed();
        if elapsed >= frame {
            last_tick = Instant::now();
            if let Some(tick) = gate.update(elapsed.as_millis() as u32) {
                field.apply_action(tick);
            }
        }

        if fps_window.elapsed() >= Duration::from_secs(1) {
            hud.fps = frames_in_window;
            frames_in_window = 0;
            fps_window = Instant::now();
        }
    }
}

fn dispatch(field: &mut PlayingField<()>, hud: &mut Hud, action: GameAction) {
    match action {
        GameAction::ToggleDebug => hud.debug = !hud.debug,
        _ => {
            field.apply_action(action);
        }
    }
}

fn time_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u32)
        .unwrap_or(1)
}
