//! Terminal match-3 runner (default binary).
//!
//! This is the primary gameplay entrypoint. With `--adapter` the engine is
//! driven over line-delimited JSON on stdin/stdout instead of the TUI.
//!
//! The event loop blocks on input: the engine has no timers, so there is
//! nothing to tick between key presses.

use anyhow::{bail, Result};
use crossterm::event::{self, Event, KeyEventKind};

use tui_match3::adapter;
use tui_match3::core::{GameState, SelectionOutcome, SequenceResult};
use tui_match3::input::{handle_key_event, should_quit, UiAction};
use tui_match3::term::{encouragement_for, GameView, TerminalRenderer, UiState, Viewport};
use tui_match3::types::EngineConfig;

fn main() -> Result<()> {
    let opts = parse_args(std::env::args().skip(1))?;

    if opts.adapter {
        return adapter::run_stdio(opts.config);
    }

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, opts.config);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

struct Options {
    adapter: bool,
    config: EngineConfig,
}

fn parse_args(args: impl Iterator<Item = String>) -> Result<Options> {
    let mut opts = Options {
        adapter: false,
        config: EngineConfig::default(),
    };

    let mut args = args.peekable();
    while let Some(arg) = args.next() {
        let mut value = |name: &str| -> Result<String> {
            match args.next() {
                Some(v) => Ok(v),
                None => bail!("{name} requires a value"),
            }
        };
        match arg.as_str() {
            "--adapter" => opts.adapter = true,
            "--seed" => opts.config.seed = value("--seed")?.parse()?,
            "--width" => opts.config.width = value("--width")?.parse()?,
            "--height" => opts.config.height = value("--height")?.parse()?,
            "--colors" => opts.config.palette_size = value("--colors")?.parse()?,
            "--moves" => opts.config.starting_moves = value("--moves")?.parse()?,
            "--target" => opts.config.target_score = value("--target")?.parse()?,
            "--help" | "-h" => {
                println!(
                    "tui-match3 [--adapter] [--seed N] [--width N] [--height N] \
                     [--colors N] [--moves N] [--target N]"
                );
                std::process::exit(0);
            }
            other => bail!("unknown argument: {other}"),
        }
    }

    Ok(opts)
}

fn run(term: &mut TerminalRenderer, config: EngineConfig) -> Result<()> {
    let mut game = GameState::new(config)?;
    let view = GameView::default();
    let mut ui = UiState::default();

    loop {
        let snapshot = game.snapshot();
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let frame = view.render(&snapshot, &ui, Viewport::new(w, h));
        term.draw(&frame)?;

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if should_quit(key) {
                    return Ok(());
                }
                if let Some(action) = handle_key_event(key) {
                    apply_ui_action(&mut game, &mut ui, action);
                }
            }
            Event::Resize(..) => {
                // Redrawn at the top of the loop.
            }
            _ => {}
        }
    }
}

fn apply_ui_action(game: &mut GameState, ui: &mut UiState, action: UiAction) {
    let width = game.board().width() as usize;
    let len = game.board().len();

    match action {
        UiAction::CursorLeft => {
            if ui.cursor % width > 0 {
                ui.cursor -= 1;
            }
        }
        UiAction::CursorRight => {
            if ui.cursor % width < width - 1 {
                ui.cursor += 1;
            }
        }
        UiAction::CursorUp => {
            if ui.cursor >= width {
                ui.cursor -= width;
            }
        }
        UiAction::CursorDown => {
            if ui.cursor + width < len {
                ui.cursor += width;
            }
        }
        UiAction::Select => {
            match game.select_tile(ui.cursor) {
                Ok(SelectionOutcome::Selected) => {
                    ui.message = None;
                }
                Ok(SelectionOutcome::SwapRejected) => {
                    ui.message = Some("Tiles must be adjacent".to_string());
                }
                Ok(SelectionOutcome::Sequence(sequence)) => {
                    ui.message = Some(sequence_message(game, &sequence));
                }
                Err(err) => {
                    ui.message = Some(err.to_string());
                }
            }
            ui.selected = game.selection();
        }
        UiAction::Restart => {
            game.restart();
            ui.selected = None;
            ui.message = None;
            ui.cursor = 0;
        }
    }
}

/// Feedback line for a finished sequence.
fn sequence_message(game: &GameState, sequence: &SequenceResult) -> String {
    if sequence.penalty_applied {
        let config = game.config();
        return format!(
            "No match! -{} points, -{} move",
            config.penalty_points, config.penalty_moves
        );
    }
    let points: u32 = sequence.rounds.iter().map(|round| round.score).sum();
    format!(
        "x{} (+{} points) {}",
        sequence.highest_combo,
        points,
        encouragement_for(sequence.highest_combo, sequence.score)
    )
}
