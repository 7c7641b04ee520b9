//! Terminal falling-block runner (default binary).
//!
//! Drives the engine at a fixed frame cadence: key presses collected during a
//! frame are applied as one batch, together with the real elapsed time.
//! Rendering goes through the framebuffer-based terminal renderer.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event};

use blockfall::core::{GameEngine, GameSnapshot, SimpleRng};
use blockfall::input::{session_command, IntentBatch, SessionCommand};
use blockfall::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use blockfall::types::FRAME_MS;
use blockfall::{AppConfig, LogRecord, SessionLog};

fn main() -> Result<()> {
    let config = AppConfig::from_env();
    let mut log = SessionLog::from_path(config.log_path.as_deref())?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config, &mut log);

    // Always try to restore terminal state.
    let _ = term.exit();
    if let Err(e) = log.finish() {
        eprintln!("[blockfall] {e:#}");
    }
    result
}

fn new_session(config: &AppConfig, seed: u32, log: &mut SessionLog) -> GameEngine {
    let engine_config = config.engine_config();
    log.record(&LogRecord::SessionStart {
        seed,
        grid_width: engine_config.grid_width,
        grid_height: engine_config.grid_height,
        fall_interval_ms: engine_config.fall_interval_ms,
    });
    GameEngine::new(engine_config, SimpleRng::new(seed))
}

fn end_session(engine: &GameEngine, log: &mut SessionLog) {
    log.record(&LogRecord::SessionEnd {
        pieces: engine.pieces_spawned(),
        rows: engine.rows_cleared(),
    });
}

fn run(term: &mut TerminalRenderer, config: &AppConfig, log: &mut SessionLog) -> Result<()> {
    let mut seed = config.seed;
    let mut engine = new_session(config, seed, log);

    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut snap = GameSnapshot::default();
    let mut intents = IntentBatch::new();

    let frame = Duration::from_millis(FRAME_MS as u64);
    let mut last_update = Instant::now();

    loop {
        // Render.
        engine.snapshot_into(&mut snap);
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&snap, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        // Collect input until the next frame is due.
        let deadline = last_update + frame;
        loop {
            let timeout = deadline.saturating_duration_since(Instant::now());
            if !event::poll(timeout)? {
                break;
            }
            match event::read()? {
                Event::Key(key) => match session_command(key) {
                    Some(SessionCommand::Quit) => {
                        end_session(&engine, log);
                        return Ok(());
                    }
                    Some(SessionCommand::Restart) => {
                        end_session(&engine, log);
                        seed = SimpleRng::new(seed).next_u32();
                        engine = new_session(config, seed, log);
                        intents.clear();
                    }
                    None => {
                        intents.push_key(key);
                    }
                },
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        // Update.
        let now = Instant::now();
        let elapsed_ms = u32::try_from(now.duration_since(last_update).as_millis()).unwrap_or(u32::MAX);
        last_update = now;

        engine.update(elapsed_ms, intents.as_slice());
        if intents.dropped() > 0 {
            log.record(&LogRecord::InputOverflow {
                dropped: intents.dropped(),
            });
        }
        intents.clear();

        if let Some(event) = engine.take_last_event() {
            log.record(&event.into());
            if event.game_over {
                log.record(&LogRecord::GameOver {
                    pieces: engine.pieces_spawned(),
                    rows: engine.rows_cleared(),
                });
            }
        }
    }
}
