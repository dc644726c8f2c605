//! Line-oriented console session: reads commands, drives a [`Controller`], prints the board.

use std::io::{BufRead, Write};

use tracing::{debug, info, warn};

use drafts_core::{CapturePolicy, Color, Controller, Layout, MoveList, Square, WinResult};

use crate::command::{Command, Setting, parse_command};
use crate::error::ConsoleError;

const HELP: &str = "\
commands:
  new                          start a new game with the current settings
  show                         print the board and game status
  select X Y                   pick up the piece on column X, row Y
  moves                        list the selected piece's moves, or the movable pieces
  move N                       play the N-th listed move
  cancel                       put the selected piece back down
  set home <white|black>       color starting on rows 0-3
  set first <white|black>      color moving first
  set capture <optional|maximal>
                               capture policy
  help                         show this text
  quit                         leave";

/// Settings applied when a game starts. Changes take effect at the next `new`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionConfig {
    /// Board orientation and opening side.
    pub layout: Layout,
    /// How captures are enforced.
    pub policy: CapturePolicy,
}

/// Whether the session keeps reading after a command.
enum Flow {
    Continue,
    Quit,
}

/// A console session holding one game at a time.
pub struct Session {
    config: SessionConfig,
    controller: Controller,
}

impl Session {
    /// Create a session and start a game with `config`.
    pub fn new(config: SessionConfig) -> Self {
        Self {
            config,
            controller: Controller::new(config.layout, config.policy),
        }
    }

    /// Return the current settings.
    pub fn config(&self) -> SessionConfig {
        self.config
    }

    /// Return the game being played.
    pub fn controller(&self) -> &Controller {
        &self.controller
    }

    /// Read commands from `input` until `quit` or end of input, writing replies to `output`.
    ///
    /// Rejected commands are reported on `output` and the loop goes on. Only
    /// I/O failures end the session with an error.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, output: &mut W) -> Result<(), ConsoleError> {
        self.show(output)?;
        for line in input.lines() {
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            debug!(cmd = %trimmed, "received console command");

            let flow = parse_command(trimmed).and_then(|cmd| self.execute(cmd, output));
            match flow {
                Ok(Flow::Continue) => {}
                Ok(Flow::Quit) => break,
                Err(ConsoleError::Io { source }) => return Err(ConsoleError::Io { source }),
                Err(e) => {
                    warn!(error = %e, "command rejected");
                    writeln!(output, "error: {e}")?;
                }
            }
        }

        info!("console session ended");
        Ok(())
    }

    fn execute<W: Write>(&mut self, cmd: Command, output: &mut W) -> Result<Flow, ConsoleError> {
        match cmd {
            Command::New => self.handle_new(output)?,
            Command::Show => self.show(output)?,
            Command::Select(sq) => self.handle_select(sq, output)?,
            Command::Moves => self.handle_moves(output)?,
            Command::Move(index) => self.handle_move(index, output)?,
            Command::Cancel => {
                self.controller.cancel();
                writeln!(output, "selection cleared")?;
            }
            Command::Set(setting) => self.handle_set(setting, output)?,
            Command::Help => writeln!(output, "{HELP}")?,
            Command::Quit => return Ok(Flow::Quit),
            Command::Unknown(name) => {
                warn!(command = %name, "unknown command");
                writeln!(output, "unknown command: {name} (try help)")?;
            }
        }
        Ok(Flow::Continue)
    }

    fn handle_new<W: Write>(&mut self, output: &mut W) -> Result<(), ConsoleError> {
        self.controller = Controller::new(self.config.layout, self.config.policy);
        self.show(output)
    }

    fn handle_select<W: Write>(&mut self, sq: Square, output: &mut W) -> Result<(), ConsoleError> {
        let moves = self.controller.select(sq)?;
        if moves.is_empty() {
            writeln!(output, "the piece at {sq} has no moves")?;
        } else {
            write_moves(output, &moves)?;
        }
        Ok(())
    }

    fn handle_moves<W: Write>(&self, output: &mut W) -> Result<(), ConsoleError> {
        if let Some((from, moves)) = self.controller.selection() {
            writeln!(output, "moves for {from}:")?;
            return write_moves(output, moves);
        }

        let state = self.controller.state();
        let movable: Vec<String> = self
            .controller
            .movable_pieces()
            .map(|sq| sq.to_string())
            .collect();
        if movable.is_empty() {
            writeln!(output, "{} has no moves", state.turn().name())?;
        } else {
            writeln!(output, "movable: {}", movable.join(" "))?;
        }
        Ok(())
    }

    fn handle_move<W: Write>(&mut self, index: usize, output: &mut W) -> Result<(), ConsoleError> {
        let mover = self.controller.state().turn();
        let from = self.controller.selection().map(|(from, _)| from);
        let outcome = self.controller.choose_index(index)?;

        if let Some(from) = from {
            writeln!(output, "{} moved {from} to {}", mover.name(), outcome.applied.dest)?;
        }
        if !outcome.applied.captured.is_empty() {
            writeln!(output, "captured {}", outcome.applied.captured.len())?;
        }
        if outcome.applied.promoted {
            writeln!(output, "crowned at {}", outcome.applied.dest)?;
        }
        self.show(output)
    }

    fn handle_set<W: Write>(&mut self, setting: Setting, output: &mut W) -> Result<(), ConsoleError> {
        match setting {
            Setting::Home(color) => {
                self.config.layout.low_rows = color;
                writeln!(output, "home rows 0-3: {}", color.name())?;
            }
            Setting::First(color) => {
                self.config.layout.first_to_move = color;
                writeln!(output, "first to move: {}", color.name())?;
            }
            Setting::Capture(policy) => {
                self.config.policy = policy;
                writeln!(output, "capture policy: {policy}")?;
            }
        }
        debug!(?setting, "setting changed");
        writeln!(output, "applies to the next new game")?;
        Ok(())
    }

    fn show<W: Write>(&self, output: &mut W) -> Result<(), ConsoleError> {
        let state = self.controller.state();
        writeln!(output, "{}", state.board().pretty())?;
        let captures = state.captures();
        writeln!(
            output,
            "captured: white {}, black {}",
            captures.count(Color::White),
            captures.count(Color::Black)
        )?;
        match self.controller.outcome() {
            WinResult::None if self.controller.has_moves() => {
                writeln!(output, "{} to move", state.turn().name())?
            }
            WinResult::None => writeln!(output, "{} to move, but has no moves", state.turn().name())?,
            result => writeln!(output, "game over: {result}")?,
        }
        Ok(())
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}

fn write_moves<W: Write>(output: &mut W, moves: &MoveList) -> Result<(), ConsoleError> {
    for (i, mv) in moves.iter().enumerate() {
        writeln!(output, "  {}. {mv}", i + 1)?;
    }
    Ok(())
}
