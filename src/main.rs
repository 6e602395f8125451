//! Terminal falling-block game runner (default binary).
//!
//! One event loop serializes gravity ticks, decoded key commands and shutdown
//! signals into calls on the gameplay controller, then redraws through a
//! diffing framebuffer renderer.

use std::thread;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event as TermEvent, KeyEventKind};
use log::{debug, info};
use tokio::sync::mpsc;

use blockfall::config::Cli;
use blockfall::core::Gameplay;
use blockfall::input::{handle_key_event, should_quit};
use blockfall::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use blockfall::ticker::AcceleratingTicker;
use blockfall::types::{Command, Event};

/// Decoded terminal input delivered to the loop.
enum Input {
    Command(Command),
    /// Any key that is not bound to a command.
    Other,
    Resize,
    Quit,
    Failed(anyhow::Error),
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("off")).init();

    let cli = Cli::parse();
    cli.validate()?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &cli).await;

    // Always try to restore terminal state.
    let restored = term.exit();
    let lines = result?;
    restored?;

    println!("Bye. Lines cleared: {lines}");
    Ok(())
}

async fn run(term: &mut TerminalRenderer, cli: &Cli) -> Result<u32> {
    let seed = cli.resolved_seed();
    info!(
        "session start: {}x{} seed={} piece={:?}",
        cli.width, cli.height, seed, cli.piece
    );

    let mut game = Gameplay::new(cli.width, cli.height, cli.spawner(seed));
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut ticker = AcceleratingTicker::new(cli.schedule());

    let (tx, mut rx) = mpsc::unbounded_channel();
    thread::Builder::new()
        .name("input".into())
        .spawn(move || read_input(tx))
        .context("spawn input reader")?;

    let shutdown = shutdown_signal();
    tokio::pin!(shutdown);

    draw(term, &view, &game, &mut fb)?;

    loop {
        tokio::select! {
            input = rx.recv() => match input {
                Some(Input::Command(_) | Input::Other) if game.is_over() => break,
                Some(Input::Command(cmd)) => {
                    if !game.on_command(cmd) {
                        continue;
                    }
                }
                Some(Input::Other) => continue,
                Some(Input::Resize) => term.invalidate(),
                Some(Input::Quit) | None => break,
                Some(Input::Failed(err)) => return Err(err),
            },
            _ = ticker.tick(), if !game.is_over() => {
                for event in game.on_tick() {
                    match event {
                        Event::LinesUpdated { cleared } => debug!("cleared rows {:?}", cleared),
                        Event::GameOver => info!("game over after {} lines", game.lines_cleared()),
                    }
                }
            }
            res = &mut shutdown => {
                res?;
                info!("shutdown signal");
                break;
            }
        }

        draw(term, &view, &game, &mut fb)?;
    }

    info!("session end: {} lines", game.lines_cleared());
    Ok(game.lines_cleared())
}

fn draw(
    term: &mut TerminalRenderer,
    view: &GameView,
    game: &Gameplay,
    fb: &mut FrameBuffer,
) -> Result<()> {
    let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
    view.render_into(game, Viewport::new(w, h), fb);
    term.draw_swap(fb)
}

/// Blocking key reader; runs on its own thread for the life of the process.
fn read_input(tx: mpsc::UnboundedSender<Input>) {
    loop {
        let input = match event::read() {
            Ok(TermEvent::Key(key)) if key.kind == KeyEventKind::Press => {
                if should_quit(key) {
                    Input::Quit
                } else {
                    handle_key_event(key).map_or(Input::Other, Input::Command)
                }
            }
            Ok(TermEvent::Resize(..)) => Input::Resize,
            Ok(_) => continue,
            Err(err) => {
                let _ = tx.send(Input::Failed(
                    anyhow::Error::new(err).context("read terminal input"),
                ));
                return;
            }
        };

        if tx.send(input).is_err() {
            return;
        }
    }
}

/// Resolves on Ctrl-C, or SIGTERM on unix.
async fn shutdown_signal() -> Result<()> {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};

        let mut term = signal(SignalKind::terminate()).context("install SIGTERM handler")?;
        tokio::select! {
            res = tokio::signal::ctrl_c() => res.context("wait for Ctrl-C"),
            _ = term.recv() => Ok(()),
        }
    }

    #[cfg(not(unix))]
    {
        tokio::signal::ctrl_c().await.context("wait for Ctrl-C")
    }
}
