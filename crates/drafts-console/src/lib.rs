//! Console front end for the drafts rules engine.

pub mod command;
pub mod error;
pub mod session;

pub use command::{Command, Setting, parse_command};
pub use error::ConsoleError;
pub use session::{Session, SessionConfig};
