//! Canonical text form of UCI commands.
//!
//! Each argument type renders its own clause; argument sets are written in
//! their iteration order, which is the canonical order.

use crate::{
    Command, GoArgument, IdArgument, InfoArgument, Move, OptionType, PositionArgument,
    RegistrationArgument, ScoreArgument,
};
use std::fmt;

impl Command {
    /// Format command for output, without a line terminator.
    pub fn to_uci(&self) -> String {
        let mut parts = vec![self.keyword().to_string()];

        match self {
            Command::Uci
            | Command::IsReady
            | Command::UciNewGame
            | Command::Stop
            | Command::PonderHit
            | Command::Quit
            | Command::UciOk
            | Command::ReadyOk => {}
            Command::Debug(on) => parts.push(String::from(if *on { "on" } else { "off" })),
            Command::SetOption { name, value } => {
                parts.push(format!("name {}", name));
                if let Some(v) = value {
                    parts.push(format!("value {}", v));
                }
            }
            Command::Register(args) => parts.extend(args.iter().map(ToString::to_string)),
            Command::Position { position, moves } => {
                if let Some(p) = position {
                    parts.push(p.to_string());
                }
                // An empty move list is written without the `moves` keyword
                if !moves.is_empty() {
                    parts.push(with_moves("moves".to_string(), moves));
                }
            }
            Command::Go(args) => parts.extend(args.iter().map(ToString::to_string)),
            Command::Id(arg) => parts.push(arg.to_string()),
            Command::BestMove { mv, ponder } => {
                parts.push(mv.to_string());
                if let Some(p) = ponder {
                    parts.push(format!("ponder {}", p));
                }
            }
            Command::CopyProtection(status) | Command::Registration(status) => {
                parts.push(status.clone())
            }
            Command::Info(args) => parts.extend(args.iter().map(ToString::to_string)),
            Command::Option { name, kind } => {
                parts.push(format!("name {}", name));
                parts.push(format!("type {}", kind));
            }
        }

        parts.join(" ")
    }
}

fn with_moves(head: String, moves: &[Move]) -> String {
    let mut s = head;
    for mv in moves {
        s.push(' ');
        s.push_str(&mv.to_uci());
    }
    s
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_uci())
    }
}

impl fmt::Display for RegistrationArgument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistrationArgument::Later => f.write_str("later"),
            RegistrationArgument::Name(name) => write!(f, "name {}", name),
            RegistrationArgument::Code(code) => write!(f, "code {}", code),
        }
    }
}

impl fmt::Display for PositionArgument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PositionArgument::Fen(fen) => write!(f, "fen {}", fen),
            PositionArgument::Startpos => f.write_str("startpos"),
        }
    }
}

impl fmt::Display for GoArgument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GoArgument::SearchMoves(moves) => {
                f.write_str(&with_moves("searchmoves".to_string(), moves))
            }
            GoArgument::Ponder => f.write_str("ponder"),
            GoArgument::WTime(ms) => write!(f, "wtime {}", ms),
            GoArgument::BTime(ms) => write!(f, "btime {}", ms),
            GoArgument::WInc(ms) => write!(f, "winc {}", ms),
            GoArgument::BInc(ms) => write!(f, "binc {}", ms),
            GoArgument::MovesToGo(n) => write!(f, "movestogo {}", n),
            GoArgument::Depth(d) => write!(f, "depth {}", d),
            GoArgument::Nodes(n) => write!(f, "nodes {}", n),
            GoArgument::Mate(n) => write!(f, "mate {}", n),
            GoArgument::MoveTime(ms) => write!(f, "movetime {}", ms),
            GoArgument::Infinite => f.write_str("infinite"),
        }
    }
}

impl fmt::Display for IdArgument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IdArgument::Name(name) => write!(f, "name {}", name),
            IdArgument::Author(author) => write!(f, "author {}", author),
        }
    }
}

impl fmt::Display for ScoreArgument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScoreArgument::Cp(cp) => write!(f, "cp {}", cp),
            ScoreArgument::Mate(m) => write!(f, "mate {}", m),
            ScoreArgument::LowerBound => f.write_str("lowerbound"),
            ScoreArgument::UpperBound => f.write_str("upperbound"),
        }
    }
}

impl fmt::Display for InfoArgument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InfoArgument::Depth(d) => write!(f, "depth {}", d),
            InfoArgument::SelDepth(d) => write!(f, "seldepth {}", d),
            InfoArgument::Time(ms) => write!(f, "time {}", ms),
            InfoArgument::Nodes(n) => write!(f, "nodes {}", n),
            InfoArgument::Pv(moves) => f.write_str(&with_moves("pv".to_string(), moves)),
            InfoArgument::MultiPv(n) => write!(f, "multipv {}", n),
            InfoArgument::Score(parts) => {
                f.write_str("score")?;
                for part in parts {
                    write!(f, " {}", part)?;
                }
                Ok(())
            }
            InfoArgument::CurrMove(mv) => write!(f, "currmove {}", mv),
            InfoArgument::CurrMoveNumber(n) => write!(f, "currmovenumber {}", n),
            InfoArgument::HashFull(n) => write!(f, "hashfull {}", n),
            InfoArgument::Nps(n) => write!(f, "nps {}", n),
            InfoArgument::TbHits(n) => write!(f, "tbhits {}", n),
            InfoArgument::SbHits(n) => write!(f, "sbhits {}", n),
            InfoArgument::CpuLoad(n) => write!(f, "cpuload {}", n),
            InfoArgument::Refutation(mv, line) => {
                f.write_str(&with_moves(format!("refutation {}", mv), line))
            }
            InfoArgument::CurrLine(cpu, line) => {
                f.write_str(&with_moves(format!("currline {}", cpu), line))
            }
            InfoArgument::String(s) => write!(f, "string {}", s),
        }
    }
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())?;
        match self {
            OptionType::Check { default } => write!(f, " default {}", default),
            OptionType::Spin { default, min, max } => {
                write!(f, " default {} min {} max {}", default, min, max)
            }
            OptionType::Combo { default, vars } => {
                write!(f, " default {}", default)?;
                for var in vars {
                    write!(f, " var {}", var)?;
                }
                Ok(())
            }
            OptionType::String { default } => write!(f, " default {}", default),
            OptionType::Button => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::InfoBuilder;
    use std::collections::BTreeSet;

    fn mv(s: &str) -> Move {
        Move::from_uci(s).unwrap()
    }

    #[test]
    fn simple_commands() {
        assert_eq!(Command::Uci.to_uci(), "uci");
        assert_eq!(Command::ReadyOk.to_uci(), "readyok");
        assert_eq!(Command::Debug(true).to_uci(), "debug on");
        assert_eq!(Command::Debug(false).to_uci(), "debug off");
        assert_eq!(
            Command::CopyProtection("ok".to_string()).to_string(),
            "copyprotection ok"
        );
    }

    #[test]
    fn setoption_with_and_without_value() {
        assert_eq!(
            Command::SetOption {
                name: "Clear Hash".to_string(),
                value: None
            }
            .to_uci(),
            "setoption name Clear Hash"
        );
        assert_eq!(
            Command::SetOption {
                name: "Hash".to_string(),
                value: Some("128".to_string())
            }
            .to_uci(),
            "setoption name Hash value 128"
        );
    }

    #[test]
    fn register_canonical_order() {
        let args: BTreeSet<_> = [
            RegistrationArgument::Code("123".to_string()),
            RegistrationArgument::Name("Stefan MK".to_string()),
        ]
        .into_iter()
        .collect();
        assert_eq!(
            Command::Register(args).to_uci(),
            "register name Stefan MK code 123"
        );
    }

    #[test]
    fn position_omits_empty_moves() {
        assert_eq!(
            Command::Position {
                position: Some(PositionArgument::Startpos),
                moves: vec![]
            }
            .to_uci(),
            "position startpos"
        );
        assert_eq!(
            Command::Position {
                position: Some(PositionArgument::Startpos),
                moves: vec![mv("d2d4"), mv("d7d5")]
            }
            .to_uci(),
            "position startpos moves d2d4 d7d5"
        );
        assert_eq!(
            Command::Position {
                position: None,
                moves: vec![mv("e2e4")]
            }
            .to_uci(),
            "position moves e2e4"
        );
    }

    #[test]
    fn go_canonical_order() {
        let args: BTreeSet<_> = [
            GoArgument::Infinite,
            GoArgument::MoveTime(100),
            GoArgument::SearchMoves(vec![mv("e2e4")]),
            GoArgument::WTime(-20),
            GoArgument::Ponder,
        ]
        .into_iter()
        .collect();
        assert_eq!(
            Command::Go(args).to_uci(),
            "go searchmoves e2e4 ponder wtime -20 movetime 100 infinite"
        );
    }

    #[test]
    fn info_canonical_order() {
        let cmd = InfoBuilder::new()
            .string("thinking hard")
            .pv(vec![mv("e2e4"), mv("e7e5")])
            .score([ScoreArgument::LowerBound, ScoreArgument::Cp(30)])
            .depth(12)
            .build();
        assert_eq!(
            cmd.to_uci(),
            "info depth 12 pv e2e4 e7e5 score cp 30 lowerbound string thinking hard"
        );
    }

    #[test]
    fn info_move_lines() {
        let cmd = InfoBuilder::new()
            .refutation(mv("d1h5"), vec![mv("g6h5")])
            .currline(2, vec![])
            .currmove(Move::NULL)
            .build();
        assert_eq!(
            cmd.to_uci(),
            "info currmove 0000 refutation d1h5 g6h5 currline 2"
        );
    }

    #[test]
    fn option_kinds() {
        let opt = |kind| Command::Option {
            name: "X Y".to_string(),
            kind,
        };
        assert_eq!(
            opt(OptionType::Check { default: false }).to_uci(),
            "option name X Y type check default false"
        );
        assert_eq!(
            opt(OptionType::Spin {
                default: 2,
                min: -1,
                max: 4
            })
            .to_uci(),
            "option name X Y type spin default 2 min -1 max 4"
        );
        assert_eq!(
            opt(OptionType::Combo {
                default: "Normal".to_string(),
                vars: vec!["Solid".to_string(), "Normal".to_string()]
            })
            .to_uci(),
            "option name X Y type combo default Normal var Solid var Normal"
        );
        assert_eq!(
            opt(OptionType::String {
                default: "<empty>".to_string()
            })
            .to_uci(),
            "option name X Y type string default <empty>"
        );
        assert_eq!(opt(OptionType::Button).to_uci(), "option name X Y type button");
    }

    #[test]
    fn bestmove_and_id() {
        assert_eq!(
            Command::BestMove {
                mv: mv("e7e8q"),
                ponder: Some(mv("a2a1n"))
            }
            .to_uci(),
            "bestmove e7e8q ponder a2a1n"
        );
        assert_eq!(
            Command::Id(IdArgument::Author("The Authors".to_string())).to_uci(),
            "id author The Authors"
        );
    }
}
