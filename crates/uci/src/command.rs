//! The UCI command model.

use crate::{InfoArgument, Move};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Which side of the connection sends a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    GuiToEngine,
    EngineToGui,
}

/// One line of the UCI protocol, in either direction.
///
/// Argument sets are `BTreeSet`s: duplicates collapse and iteration follows
/// variant declaration order, which is also the order they are written in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    // GUI to engine
    /// Switch the engine to UCI mode.
    Uci,
    /// `debug on` / `debug off`.
    Debug(bool),
    /// Synchronization ping.
    IsReady,
    /// Change an engine parameter.
    SetOption {
        name: String,
        value: Option<String>,
    },
    /// Register the engine, or postpone registration.
    Register(BTreeSet<RegistrationArgument>),
    /// The next search belongs to a new game.
    UciNewGame,
    /// Set up a position and play moves from it.
    Position {
        position: Option<PositionArgument>,
        moves: Vec<Move>,
    },
    /// Start calculating.
    Go(BTreeSet<GoArgument>),
    /// Stop calculating.
    Stop,
    /// The opponent played the expected ponder move.
    PonderHit,
    /// Quit the engine.
    Quit,

    // Engine to GUI
    /// Engine identification.
    Id(IdArgument),
    /// UCI initialization complete.
    UciOk,
    /// Answer to `isready`.
    ReadyOk,
    /// Best move found, with an optional move to ponder on.
    BestMove { mv: Move, ponder: Option<Move> },
    /// Copy protection status (`checking`, `ok`, `error`).
    CopyProtection(String),
    /// Registration status (`checking`, `ok`, `error`).
    Registration(String),
    /// Search information.
    Info(BTreeSet<InfoArgument>),
    /// Declaration of a supported engine parameter.
    Option { name: String, kind: OptionType },
}

impl Command {
    /// The leading keyword of this command.
    pub const fn keyword(&self) -> &'static str {
        match self {
            Command::Uci => "uci",
            Command::Debug(_) => "debug",
            Command::IsReady => "isready",
            Command::SetOption { .. } => "setoption",
            Command::Register(_) => "register",
            Command::UciNewGame => "ucinewgame",
            Command::Position { .. } => "position",
            Command::Go(_) => "go",
            Command::Stop => "stop",
            Command::PonderHit => "ponderhit",
            Command::Quit => "quit",
            Command::Id(_) => "id",
            Command::UciOk => "uciok",
            Command::ReadyOk => "readyok",
            Command::BestMove { .. } => "bestmove",
            Command::CopyProtection(_) => "copyprotection",
            Command::Registration(_) => "registration",
            Command::Info(_) => "info",
            Command::Option { .. } => "option",
        }
    }

    /// Which side sends this command.
    pub const fn direction(&self) -> Direction {
        match self {
            Command::Uci
            | Command::Debug(_)
            | Command::IsReady
            | Command::SetOption { .. }
            | Command::Register(_)
            | Command::UciNewGame
            | Command::Position { .. }
            | Command::Go(_)
            | Command::Stop
            | Command::PonderHit
            | Command::Quit => Direction::GuiToEngine,
            Command::Id(_)
            | Command::UciOk
            | Command::ReadyOk
            | Command::BestMove { .. }
            | Command::CopyProtection(_)
            | Command::Registration(_)
            | Command::Info(_)
            | Command::Option { .. } => Direction::EngineToGui,
        }
    }
}

/// Arguments of the `register` command.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RegistrationArgument {
    Later,
    Name(String),
    Code(String),
}

/// Starting point of the `position` command.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PositionArgument {
    /// A FEN string, fields separated by single spaces.
    Fen(String),
    Startpos,
}

/// Arguments of the `go` command. Times are in milliseconds.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum GoArgument {
    /// Restrict the search to these moves.
    SearchMoves(Vec<Move>),
    /// Search in pondering mode.
    Ponder,
    /// White time remaining.
    WTime(i64),
    /// Black time remaining.
    BTime(i64),
    /// White increment per move.
    WInc(i64),
    /// Black increment per move.
    BInc(i64),
    /// Moves to go until next time control.
    MovesToGo(i64),
    /// Search to this depth.
    Depth(i64),
    /// Search this many nodes.
    Nodes(i64),
    /// Search for a mate in this many moves.
    Mate(i64),
    /// Search for exactly this long.
    MoveTime(i64),
    /// Search until `stop`.
    Infinite,
}

/// Payload of the `id` command.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IdArgument {
    Name(String),
    Author(String),
}

/// Type and constraints of an engine option.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OptionType {
    Check { default: bool },
    Spin { default: i64, min: i64, max: i64 },
    Combo { default: String, vars: Vec<String> },
    String { default: String },
    Button,
}

impl OptionType {
    /// The word written after `type`.
    pub const fn name(&self) -> &'static str {
        match self {
            OptionType::Check { .. } => "check",
            OptionType::Spin { .. } => "spin",
            OptionType::Combo { .. } => "combo",
            OptionType::String { .. } => "string",
            OptionType::Button => "button",
        }
    }
}
