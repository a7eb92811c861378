use std::io::{self, BufRead, Write};

use log::error;

use super::ScriptedOracle;
use crate::config::RuleSet;
use crate::game::{Game, SuggestionError};
use crate::notation::parse_description;
use crate::position::{CastlingRights, Move, Square};

const HELP: &str = "Commands: <from><to> | m <from> <to> | s <square> | ai [moves] | \
                    load <description> | fen | r (reset) | p (refresh) | q (quit)";

/// Clears the screen and moves cursor to top-left.
#[inline]
fn clear_screen(out: &mut impl Write) -> io::Result<()> {
    write!(out, "\x1B[2J\x1B[H")
}

/// Runs an interactive terminal session for playing through the engine.
///
/// Moves for the "computer" side come from a [`ScriptedOracle`] that is
/// fed with `ai <moves>`; a bare `ai` asks it for the next one.
pub fn run_interactive_terminal(rules: RuleSet) -> io::Result<()> {
    let stdin = io::stdin();
    let mut out = io::stdout();
    let mut game = Game::with_rules(rules);
    let mut oracle = ScriptedOracle::new();

    clear_screen(&mut out)?;
    draw_interface(&mut out, &game)?;

    for line in stdin.lock().lines() {
        let input = line?;
        match handle_command(&input, &mut game, &mut oracle) {
            Outcome::Quit => break,
            Outcome::Redraw(message) => {
                clear_screen(&mut out)?;
                draw_interface(&mut out, &game)?;
                if let Some(message) = message {
                    writeln!(out, "\n{message}")?;
                }
            }
            Outcome::Message(message) => writeln!(out, "{message}")?,
        }
        write!(out, "> ")?;
        out.flush()?;
    }
    Ok(())
}

/// What the terminal should do after a command.
#[derive(Debug, PartialEq, Eq)]
enum Outcome {
    Quit,
    Redraw(Option<String>),
    Message(String),
}

fn handle_command(input: &str, game: &mut Game, oracle: &mut ScriptedOracle) -> Outcome {
    let parts: Vec<&str> = input.split_whitespace().collect();
    let Some(&command) = parts.first() else {
        return Outcome::Message(String::new());
    };

    match (command, &parts[1..]) {
        ("q", _) => Outcome::Quit,
        ("p", _) => Outcome::Redraw(None),
        ("r", _) => {
            game.reset();
            Outcome::Redraw(Some("Reset to initial position".to_string()))
        }
        ("fen", _) => Outcome::Message(game.description()),
        ("m", [from, to]) => match (from.parse::<Square>(), to.parse::<Square>()) {
            (Ok(from), Ok(to)) => try_move(game, Move::new(from, to)),
            (Err(e), _) | (_, Err(e)) => Outcome::Message(format!("Invalid square: {e}")),
        },
        ("m", _) => Outcome::Message("Usage: m <from> <to>".to_string()),
        ("s", [square]) => match square.parse::<Square>() {
            Ok(square) => {
                let targets: Vec<String> = game
                    .destinations(square)
                    .iter()
                    .map(ToString::to_string)
                    .collect();
                if targets.is_empty() {
                    Outcome::Message(format!("No legal moves from {square}"))
                } else {
                    Outcome::Message(format!("{square}: {}", targets.join(" ")))
                }
            }
            Err(e) => Outcome::Message(format!("Invalid square: {e}")),
        },
        ("s", _) => Outcome::Message("Usage: s <square>".to_string()),
        ("ai", []) => match game.play_suggestion(oracle) {
            Ok(Some(mv)) => Outcome::Redraw(Some(format!("Computer plays {mv}"))),
            Ok(None) => Outcome::Message("Computer suggested an illegal move".to_string()),
            Err(SuggestionError::Oracle(e)) => {
                error!("oracle request failed: {e}");
                Outcome::Message(format!("No suggestion: {e}"))
            }
            Err(e) => Outcome::Message(e.to_string()),
        },
        ("ai", moves) => match oracle.push_script(&moves.join(" ")) {
            Ok(()) => Outcome::Message(format!("{} suggestion(s) queued", oracle.pending())),
            Err(e) => Outcome::Message(e.to_string()),
        },
        ("load", ["startpos"]) => {
            *game = Game::with_rules(game.rules());
            Outcome::Redraw(Some("Position loaded".to_string()))
        }
        ("load", [_, ..]) => {
            // Rejoin the rest, the description contains spaces
            let line = input.trim_start()["load".len()..].trim();
            match parse_description(line) {
                Ok((board, side)) => {
                    *game = Game::from_position(board, side, CastlingRights::default(), game.rules());
                    Outcome::Redraw(Some("Position loaded".to_string()))
                }
                Err(e) => Outcome::Message(format!("Invalid description: {e}")),
            }
        }
        ("load", []) => Outcome::Message("Usage: load <description> | load startpos".to_string()),
        (text, []) => match text.parse::<Move>() {
            Ok(mv) => try_move(game, mv),
            Err(_) => Outcome::Message("Unknown command".to_string()),
        },
        _ => Outcome::Message("Unknown command".to_string()),
    }
}

fn try_move(game: &mut Game, mv: Move) -> Outcome {
    let side = game.side_to_move();
    if game.play(mv) {
        Outcome::Redraw(Some(format!("{side} plays {mv}")))
    } else {
        Outcome::Message(format!("Illegal move for {side}: {mv}"))
    }
}

/// Draws the complete interface: help text, board and turn.
fn draw_interface(out: &mut impl Write, game: &Game) -> io::Result<()> {
    writeln!(out, "♟️  Chessboard Rules")?;
    writeln!(out)?;
    writeln!(out, "{HELP}")?;
    writeln!(out)?;
    writeln!(out, "{}", game.board())?;
    writeln!(out)?;
    writeln!(
        out,
        "{} to move | moves played: {}",
        game.side_to_move(),
        game.history().len()
    )?;
    write!(out, "> ")?;
    out.flush()
}
