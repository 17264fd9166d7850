use std::io::{self, Write};

use log::debug;
use owo_colors::OwoColorize;
use tesseract_core::PuzzleController;

use crate::render::Renderer;

const HELP: &str = "\
Gestures, one per line:
  X Y Z        rotate the whole puzzle
  0 1 2 3      twist a vertex
  X 0 Y ...    several moves at once
  undo         take back the last move
  reset        return to the solved state
  scramble     paint every facelet a random color
  history      list the moves since the last reset
  help         show this message
  quit         leave";

/// A single line of user input.
#[derive(Debug, PartialEq, Eq)]
pub enum Gesture<'a> {
    Moves(&'a str),
    Undo,
    Reset,
    Scramble,
    History,
    Help,
    Quit,
    Nothing,
}

impl<'a> Gesture<'a> {
    pub fn parse(line: &'a str) -> Gesture<'a> {
        match line.trim() {
            "" => Gesture::Nothing,
            "undo" | "u" => Gesture::Undo,
            "reset" => Gesture::Reset,
            "scramble" => Gesture::Scramble,
            "history" => Gesture::History,
            "help" | "?" => Gesture::Help,
            "quit" | "exit" | "q" => Gesture::Quit,
            moves => Gesture::Moves(moves),
        }
    }
}

/// Run the interactive loop until `quit` or the end of input, redrawing the
/// puzzle after every gesture.
pub fn play(
    lines: impl Iterator<Item = io::Result<String>>,
    out: &mut impl Write,
    controller: &mut PuzzleController,
    renderer: &Renderer,
    rng: &mut fastrand::Rng,
) -> io::Result<()> {
    writeln!(out, "{}", "Type `help` for the list of gestures".dimmed())?;
    write!(out, "{}", renderer.render(controller.state()))?;

    for line in lines {
        let line = line?;
        debug!("Gesture: {line:?}");

        match Gesture::parse(&line) {
            Gesture::Nothing => continue,
            Gesture::Quit => break,
            Gesture::Help => {
                writeln!(out, "{HELP}")?;
                continue;
            }
            Gesture::History => {
                let history = controller.history().moves();
                if history.is_empty() {
                    writeln!(out, "{}", "No moves yet".dimmed())?;
                } else {
                    let names: Vec<&str> = history.iter().map(|id| id.name()).collect();
                    writeln!(out, "{}", names.join(" "))?;
                }
                continue;
            }
            Gesture::Undo => match controller.try_undo() {
                Ok(id) => writeln!(out, "Undid {}", id.bold())?,
                Err(e) => {
                    writeln!(out, "{}", e.yellow())?;
                    continue;
                }
            },
            Gesture::Reset => {
                controller.reset();
            }
            Gesture::Scramble => {
                controller.scramble(rng);
            }
            Gesture::Moves(moves) => {
                if let Err(e) = controller.perform_sequence(moves) {
                    writeln!(out, "{}", e.red())?;
                    continue;
                }
            }
        }

        write!(out, "{}", renderer.render(controller.state()))?;
    }

    Ok(())
}
