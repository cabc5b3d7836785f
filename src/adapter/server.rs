//! Stdio adapter - blocking line loop
//!
//! Reads one JSON command per line, applies it to the engine, and writes
//! the resulting event(s) back, one JSON object per line. Malformed input
//! and rejected commands become `error` events; the loop keeps running
//! until `quit` or EOF.

use std::io::{BufRead, Write};

use anyhow::Result;

use crate::adapter::protocol::{error_kind, Command, Event, SequenceMsg, SnapshotMsg};
use crate::core::{GameState, SelectionOutcome};
use crate::types::EngineConfig;

/// Run the adapter against stdin/stdout.
pub fn run_stdio(config: EngineConfig) -> Result<()> {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    run(config, stdin.lock(), stdout.lock())
}

/// Run the adapter against arbitrary reader/writer pairs (testable).
pub fn run<R: BufRead, W: Write>(config: EngineConfig, input: R, mut output: W) -> Result<()> {
    let mut game = GameState::new(config)?;

    // Announce the initial board so the controller can bootstrap.
    emit(
        &mut output,
        &Event::Snapshot(SnapshotMsg::from_snapshot(&game.snapshot())),
    )?;

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let command: Command = match serde_json::from_str(&line) {
            Ok(command) => command,
            Err(err) => {
                emit(
                    &mut output,
                    &Event::Error {
                        kind: "parse".to_string(),
                        message: err.to_string(),
                    },
                )?;
                continue;
            }
        };

        match command {
            Command::Select { index } => {
                let event = match game.select_tile(index) {
                    Ok(SelectionOutcome::Selected) => Event::Selected { index },
                    Ok(SelectionOutcome::SwapRejected) => Event::SwapRejected { index },
                    Ok(SelectionOutcome::Sequence(sequence)) => {
                        Event::Sequence(SequenceMsg::from_result(&sequence))
                    }
                    Err(err) => Event::Error {
                        kind: error_kind(err).to_string(),
                        message: err.to_string(),
                    },
                };
                emit(&mut output, &event)?;
            }
            Command::Restart => {
                let snapshot = game.restart();
                emit(
                    &mut output,
                    &Event::Snapshot(SnapshotMsg::from_snapshot(&snapshot)),
                )?;
            }
            Command::Snapshot => {
                emit(
                    &mut output,
                    &Event::Snapshot(SnapshotMsg::from_snapshot(&game.snapshot())),
                )?;
            }
            Command::Quit => break,
        }
    }

    Ok(())
}

fn emit<W: Write>(output: &mut W, event: &Event) -> Result<()> {
    serde_json::to_writer(&mut *output, event)?;
    output.write_all(b"\n")?;
    output.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_session(input: &str) -> Vec<Event> {
        let mut output = Vec::new();
        run(EngineConfig::default(), input.as_bytes(), &mut output).unwrap();
        String::from_utf8(output)
            .unwrap()
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect()
    }

    #[test]
    fn test_session_bootstraps_with_snapshot() {
        let events = run_session("");
        assert_eq!(events.len(), 1);
        let Event::Snapshot(snapshot) = &events[0] else {
            panic!("expected a snapshot event");
        };
        assert_eq!(snapshot.cells.len(), 100);
        assert_eq!(snapshot.moves_left, 20);
        assert_eq!(snapshot.result, "in_progress");
    }

    #[test]
    fn test_select_and_reject_flow() {
        let events = run_session(concat!(
            r#"{"type":"select","index":0}"#,
            "\n",
            r#"{"type":"select","index":2}"#,
            "\n",
            r#"{"type":"quit"}"#,
            "\n",
        ));

        assert_eq!(events.len(), 3);
        assert_eq!(events[1], Event::Selected { index: 0 });
        assert_eq!(events[2], Event::SwapRejected { index: 2 });
    }

    #[test]
    fn test_out_of_range_becomes_error_event() {
        let events = run_session(concat!(r#"{"type":"select","index":400}"#, "\n"));

        assert_eq!(events.len(), 2);
        let Event::Error { kind, .. } = &events[1] else {
            panic!("expected an error event");
        };
        assert_eq!(kind, "out_of_range");
    }

    #[test]
    fn test_malformed_line_keeps_session_alive() {
        let events = run_session(concat!(
            "not json\n",
            r#"{"type":"snapshot"}"#,
            "\n",
        ));

        assert_eq!(events.len(), 3);
        assert!(matches!(events[1], Event::Error { .. }));
        assert!(matches!(events[2], Event::Snapshot(_)));
    }

    #[test]
    fn test_restart_emits_fresh_snapshot() {
        let events = run_session(concat!(r#"{"type":"restart"}"#, "\n"));

        assert_eq!(events.len(), 2);
        let Event::Snapshot(snapshot) = &events[1] else {
            panic!("expected a snapshot event");
        };
        assert_eq!(snapshot.episode_id, 1);
        assert_eq!(snapshot.score, 0);
    }
}
