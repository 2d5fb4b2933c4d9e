//! UCI (Universal Chess Interface) command codec.
//!
//! Turns single protocol lines into [`Command`] values and back. The crate
//! does no I/O: a transport reads lines from the engine or GUI, hands them to
//! [`Command::parse`], and writes [`Command::to_uci`] output back.
//!
//! # GUI to engine
//!
//! - `uci`, `debug on|off`, `isready`, `ucinewgame`, `stop`, `ponderhit`, `quit`
//! - `setoption name <id> [value <x>]`
//! - `register later | name <name> code <code>`
//! - `position startpos|fen <fen> [moves <move>...]`
//! - `go [searchmoves <move>...] [ponder] [wtime <ms>] ... [infinite]`
//!
//! # Engine to GUI
//!
//! - `id name|author <text>`, `uciok`, `readyok`
//! - `bestmove <move> [ponder <move>]`
//! - `copyprotection <status>`, `registration <status>`
//! - `info [depth <d>] [score cp <x>] [pv <move>...] ... [string <text>]`
//! - `option name <id> type <t> [default <x>] [min <x>] [max <x>] [var <x>]...`
//!
//! Argument sets are written in a fixed order no matter how they were built,
//! so serialization is deterministic:
//!
//! ```
//! use uci::Command;
//!
//! let cmd = Command::parse("go movetime 500 depth 8").unwrap();
//! assert_eq!(cmd.to_uci(), "go depth 8 movetime 500");
//! ```

mod command;
mod config;
mod info;
mod mov;
mod parser;
mod serializer;
mod square;
mod tokenizer;

pub use command::{
    Command, Direction, GoArgument, IdArgument, OptionType, PositionArgument,
    RegistrationArgument,
};
pub use config::ParseOptions;
pub use info::{InfoArgument, InfoBuilder, ScoreArgument};
pub use mov::{Move, Promotion};
pub use parser::Parser;
pub use square::{File, Rank, Square};
pub use tokenizer::Tokenizer;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum UciError {
    #[error("Invalid command: {0}")]
    InvalidCommand(String),
    #[error("Invalid move: {0}")]
    InvalidMove(String),
    #[error("Config error: {0}")]
    Config(#[from] toml::de::Error),
}
