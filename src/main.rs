//! Terminal memory-match runner (default binary).
//!
//! Uses crossterm for keyboard and mouse input and the framebuffer renderer
//! from `memory_match::term`. The session timer is driven from this loop at
//! a fixed `TICK_MS` period.

use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use tracing::{debug, info};

use memory_match::input::{handle_key_event, left_click_at, should_quit};
use memory_match::term::{FrameBuffer, GameView, Hit, RenderThrottle, TerminalRenderer, Viewport};
use memory_match::types::TICK_MS;
use memory_match::{logging, App, GameConfig};

fn main() -> Result<()> {
    let config = GameConfig::from_env();
    logging::init(&config)?;
    let app = App::from_config(&config).context("invalid game configuration")?;
    info!(
        pairs = app.session().pair_count(),
        columns = config.columns,
        seeded = config.seed.is_some(),
        "starting memory match"
    );

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let view = GameView::default().with_columns(config.columns);
    let result = run(&mut term, &view, app);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, view: &GameView, mut app: App) -> Result<()> {
    let mut fb = FrameBuffer::new(0, 0);
    let mut throttle = RenderThrottle::new(1000);
    let started = Instant::now();

    let tick_duration = Duration::from_millis(TICK_MS as u64);
    let mut last_tick = Instant::now();

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let viewport = Viewport::new(w, h);
        let snap = app.session().snapshot();
        let cursor = app.cursor().position();
        let fingerprint = snap.fingerprint() ^ (cursor.index() as u64).rotate_left(32);
        if throttle.should_render(started.elapsed().as_millis() as u64, fingerprint) {
            view.render_into(&snap, Some(cursor), viewport, &mut fb);
            term.draw_swap(&mut fb)?;
        }

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        info!("quit requested");
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        let outcome = app.handle_action(action)?;
                        debug!(action = action.as_str(), ?outcome, "key action");
                    }
                }
                Event::Mouse(mouse) => {
                    if let Some((x, y)) = left_click_at(mouse) {
                        match view.hit_test(app.session().len(), viewport, x, y) {
                            Some(Hit::Card(position)) => {
                                app.click_card(position)?;
                            }
                            Some(Hit::Status) => {
                                app.click_status()?;
                            }
                            None => {}
                        }
                    }
                }
                Event::Resize(_, _) => {
                    term.invalidate();
                    throttle.reset();
                }
                _ => {}
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            app.on_tick()?;
        }
    }
}
