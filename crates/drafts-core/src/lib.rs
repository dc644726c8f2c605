//! Core draughts types: board representation, move generation, move application, and game rules.

mod board;
mod color;
mod controller;
mod diagram;
mod draughts_move;
mod error;
mod game;
mod layout;
mod make_move;
pub mod movegen;
pub mod perft;
mod piece;
mod piece_kind;
mod square;
mod victory;

pub use board::{Board, PrettyBoard};
pub use color::Color;
pub use controller::{Controller, Outcome, Phase};
pub use diagram::STARTING_DIAGRAM;
pub use draughts_move::{Move, MoveList};
pub use error::{DiagramError, EngineError, SelectionReason};
pub use game::{CaptureCounts, GameState};
pub use layout::{HOME_ROWS, Layout};
pub use make_move::Applied;
pub use movegen::{CapturePolicy, legal_moves};
pub use piece::Piece;
pub use piece_kind::PieceKind;
pub use square::{BOARD_SIZE, Square};
pub use victory::WinResult;
