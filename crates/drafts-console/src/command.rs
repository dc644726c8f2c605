//! Console command parsing.

use drafts_core::{CapturePolicy, Color, Square};

use crate::error::ConsoleError;

/// A session option changed with `set`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Setting {
    /// `set home <color>` -- the color that starts on rows 0-3.
    Home(Color),
    /// `set first <color>` -- the color that moves first.
    First(Color),
    /// `set capture <policy>` -- how captures are enforced.
    Capture(CapturePolicy),
}

/// A parsed console command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `new` -- start a new game with the current settings.
    New,
    /// `show` -- print the board and game status.
    Show,
    /// `select X Y` -- pick up the piece on a square.
    Select(Square),
    /// `moves` -- list the offered moves, or the movable pieces.
    Moves,
    /// `move N` -- play the N-th offered move. Stored zero-based.
    Move(usize),
    /// `cancel` -- put the selected piece back down.
    Cancel,
    /// `set <option> <value>` -- change a setting for the next game.
    Set(Setting),
    /// `help` -- list the commands.
    Help,
    /// `quit` -- leave the session.
    Quit,
    /// Unrecognized command.
    Unknown(String),
}

/// Parse a single line of console input into a [`Command`].
pub fn parse_command(line: &str) -> Result<Command, ConsoleError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.is_empty() {
        return Ok(Command::Unknown(String::new()));
    }

    let args = &tokens[1..];
    match tokens[0] {
        "new" => Ok(Command::New),
        "show" => Ok(Command::Show),
        "moves" => Ok(Command::Moves),
        "cancel" => Ok(Command::Cancel),
        "help" => Ok(Command::Help),
        "quit" | "exit" => Ok(Command::Quit),
        "select" => parse_select(args),
        "move" => parse_move(args),
        "set" => parse_set(args),
        other => Ok(Command::Unknown(other.to_string())),
    }
}

fn parse_select(args: &[&str]) -> Result<Command, ConsoleError> {
    let [x, y] = args else {
        return Err(ConsoleError::MalformedCommand {
            command: "select".to_string(),
            usage: "select X Y",
        });
    };
    let sq = Square::from_coords(parse_coord(x)?, parse_coord(y)?).ok_or_else(|| {
        ConsoleError::InvalidCoordinate {
            value: format!("{x} {y}"),
        }
    })?;
    Ok(Command::Select(sq))
}

fn parse_coord(token: &str) -> Result<i32, ConsoleError> {
    token.parse().map_err(|_| ConsoleError::InvalidCoordinate {
        value: token.to_string(),
    })
}

fn parse_move(args: &[&str]) -> Result<Command, ConsoleError> {
    let [n] = args else {
        return Err(ConsoleError::MalformedCommand {
            command: "move".to_string(),
            usage: "move N",
        });
    };
    match n.parse::<usize>() {
        Ok(number) if number > 0 => Ok(Command::Move(number - 1)),
        _ => Err(ConsoleError::InvalidIndex {
            value: n.to_string(),
        }),
    }
}

fn parse_set(args: &[&str]) -> Result<Command, ConsoleError> {
    let [name, value] = args else {
        return Err(ConsoleError::MalformedCommand {
            command: "set".to_string(),
            usage: "set <home|first|capture> <value>",
        });
    };
    let invalid = || ConsoleError::InvalidOption {
        name: name.to_string(),
        value: value.to_string(),
    };

    let setting = match *name {
        "home" => Setting::Home(parse_color(value).ok_or_else(invalid)?),
        "first" => Setting::First(parse_color(value).ok_or_else(invalid)?),
        "capture" => Setting::Capture(value.parse().map_err(|_| invalid())?),
        _ => return Err(invalid()),
    };
    Ok(Command::Set(setting))
}

/// Parse a color name, accepting the diagram tokens as short forms.
fn parse_color(token: &str) -> Option<Color> {
    match token {
        "white" => Some(Color::White),
        "black" => Some(Color::Black),
        short => Color::from_token(short),
    }
}
