//! UCI command parsing.
//!
//! Every command is parsed from a [`Tokenizer`] by a small function that
//! either returns a complete [`Command`] or `None`. Argument sets (`go`,
//! `info`, `register`) skip tokens they do not understand; structurally
//! required tokens that are missing or malformed reject the whole line.

use crate::{
    Command, GoArgument, IdArgument, InfoArgument, Move, OptionType, ParseOptions,
    PositionArgument, RegistrationArgument, ScoreArgument, Tokenizer, UciError,
};
use std::collections::BTreeSet;
use std::str::FromStr;

const OPTION_KEYWORDS: [&str; 6] = ["name", "type", "default", "min", "max", "var"];
const REGISTER_KEYWORDS: [&str; 3] = ["later", "name", "code"];

/// Parses lines into [`Command`]s.
#[derive(Debug, Clone, Copy, Default)]
pub struct Parser {
    options: ParseOptions,
}

impl Parser {
    pub fn new(options: ParseOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> ParseOptions {
        self.options
    }

    /// Parses one line. Returns `None` if the line is not a well-formed command.
    pub fn parse(&self, line: &str) -> Option<Command> {
        let mut tokens = Tokenizer::new(line)
            .with_consume_invalid_integers(self.options.consume_invalid_integers);
        let command = parse_command(&mut tokens);
        if command.is_none() {
            tracing::debug!(line, position = tokens.position(), "rejected UCI line");
        }
        command
    }
}

impl Command {
    /// Parses a UCI command line with default [`ParseOptions`].
    pub fn parse(line: &str) -> Option<Self> {
        Parser::default().parse(line)
    }
}

impl FromStr for Command {
    type Err = UciError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Command::parse(s).ok_or_else(|| UciError::InvalidCommand(s.to_string()))
    }
}

fn parse_command(t: &mut Tokenizer<'_>) -> Option<Command> {
    match t.next_token()? {
        "uci" => Some(Command::Uci),
        "debug" => parse_debug(t),
        "isready" => Some(Command::IsReady),
        "setoption" => parse_setoption(t),
        "register" => parse_register(t),
        "ucinewgame" => Some(Command::UciNewGame),
        "position" => parse_position(t),
        "go" => Some(parse_go(t)),
        "stop" => Some(Command::Stop),
        "ponderhit" => Some(Command::PonderHit),
        "quit" => Some(Command::Quit),
        "id" => parse_id(t),
        "uciok" => Some(Command::UciOk),
        "readyok" => Some(Command::ReadyOk),
        "bestmove" => parse_bestmove(t),
        "copyprotection" => t
            .next_token()
            .map(|status| Command::CopyProtection(status.to_string())),
        "registration" => t
            .next_token()
            .map(|status| Command::Registration(status.to_string())),
        "info" => Some(parse_info(t)),
        "option" => parse_option(t),
        _ => None,
    }
}

fn parse_debug(t: &mut Tokenizer<'_>) -> Option<Command> {
    match t.next_token()? {
        "on" => Some(Command::Debug(true)),
        "off" => Some(Command::Debug(false)),
        _ => None,
    }
}

fn parse_setoption(t: &mut Tokenizer<'_>) -> Option<Command> {
    if t.next_token()? != "name" {
        return None;
    }

    let mut name = Vec::new();
    let mut value = None;
    while let Some(token) = t.next_token() {
        if token == "value" {
            let rest = t.take_remaining();
            value = (!rest.is_empty()).then_some(rest);
            break;
        }
        name.push(token);
    }

    if name.is_empty() {
        return None;
    }
    Some(Command::SetOption {
        name: name.join(" "),
        value,
    })
}

fn parse_register(t: &mut Tokenizer<'_>) -> Option<Command> {
    let mut args = BTreeSet::new();

    while let Some(token) = t.next_token() {
        match token {
            "later" => {
                args.insert(RegistrationArgument::Later);
            }
            "name" => {
                let name = read_span(t, &REGISTER_KEYWORDS);
                if !name.is_empty() {
                    args.insert(RegistrationArgument::Name(name));
                }
            }
            "code" => {
                let code = read_span(t, &REGISTER_KEYWORDS);
                if !code.is_empty() {
                    args.insert(RegistrationArgument::Code(code));
                }
            }
            other => tracing::trace!(token = other, "skipping unknown register argument"),
        }
    }

    if args.is_empty() {
        return None;
    }
    Some(Command::Register(args))
}

fn parse_position(t: &mut Tokenizer<'_>) -> Option<Command> {
    let position = match t.next_token()? {
        "startpos" => PositionArgument::Startpos,
        "fen" => {
            let fen = read_span(t, &["moves"]);
            if fen.is_empty() {
                return None;
            }
            PositionArgument::Fen(fen)
        }
        _ => return None,
    };

    let mut moves = Vec::new();
    match t.next_token() {
        None => {}
        Some("moves") => {
            while let Some(token) = t.next_token() {
                moves.push(Move::from_uci(token)?);
            }
        }
        Some(_) => return None,
    }

    Some(Command::Position {
        position: Some(position),
        moves,
    })
}

fn parse_go(t: &mut Tokenizer<'_>) -> Command {
    let mut args = BTreeSet::new();

    while let Some(token) = t.next_token() {
        let arg = match token {
            "searchmoves" => Some(GoArgument::SearchMoves(read_moves(t))),
            "ponder" => Some(GoArgument::Ponder),
            "wtime" => t.next_int().map(GoArgument::WTime),
            "btime" => t.next_int().map(GoArgument::BTime),
            "winc" => t.next_int().map(GoArgument::WInc),
            "binc" => t.next_int().map(GoArgument::BInc),
            "movestogo" => t.next_int().map(GoArgument::MovesToGo),
            "depth" => t.next_int().map(GoArgument::Depth),
            "nodes" => t.next_int().map(GoArgument::Nodes),
            "mate" => t.next_int().map(GoArgument::Mate),
            "movetime" => t.next_int().map(GoArgument::MoveTime),
            "infinite" => Some(GoArgument::Infinite),
            other => {
                tracing::trace!(token = other, "skipping unknown go argument");
                None
            }
        };
        if let Some(arg) = arg {
            args.insert(arg);
        }
    }

    Command::Go(args)
}

fn parse_id(t: &mut Tokenizer<'_>) -> Option<Command> {
    let field = t.next_token()?;
    let text = t.take_remaining();
    if text.is_empty() {
        return None;
    }
    match field {
        "name" => Some(Command::Id(IdArgument::Name(text))),
        "author" => Some(Command::Id(IdArgument::Author(text))),
        _ => None,
    }
}

fn parse_bestmove(t: &mut Tokenizer<'_>) -> Option<Command> {
    let mv = Move::from_uci(t.next_token()?)?;
    let ponder = match t.next_token() {
        None => None,
        Some("ponder") => Some(Move::from_uci(t.next_token()?)?),
        Some(_) => return None,
    };
    Some(Command::BestMove { mv, ponder })
}

fn parse_info(t: &mut Tokenizer<'_>) -> Command {
    let mut args = BTreeSet::new();

    while let Some(token) = t.next_token() {
        let arg = match token {
            "depth" => t.next_int().map(InfoArgument::Depth),
            "seldepth" => t.next_int().map(InfoArgument::SelDepth),
            "time" => t.next_int().map(InfoArgument::Time),
            "nodes" => t.next_int().map(InfoArgument::Nodes),
            "pv" => Some(InfoArgument::Pv(read_moves(t))),
            "multipv" => t.next_int().map(InfoArgument::MultiPv),
            "score" => Some(InfoArgument::Score(read_score(t))),
            "currmove" => t
                .next_token()
                .and_then(Move::from_uci)
                .map(InfoArgument::CurrMove),
            "currmovenumber" => t.next_int().map(InfoArgument::CurrMoveNumber),
            "hashfull" => t.next_int().map(InfoArgument::HashFull),
            "nps" => t.next_int().map(InfoArgument::Nps),
            "tbhits" => t.next_int().map(InfoArgument::TbHits),
            "sbhits" => t.next_int().map(InfoArgument::SbHits),
            "cpuload" => t.next_int().map(InfoArgument::CpuLoad),
            "refutation" => t
                .next_token()
                .and_then(Move::from_uci)
                .map(|mv| InfoArgument::Refutation(mv, read_moves(t))),
            "currline" => t
                .next_int()
                .map(|cpu| InfoArgument::CurrLine(cpu, read_moves(t))),
            "string" => {
                // Free text runs to the end of the line
                let text = t.take_remaining();
                (!text.is_empty()).then_some(InfoArgument::String(text))
            }
            other => {
                tracing::trace!(token = other, "skipping unknown info argument");
                None
            }
        };
        if let Some(arg) = arg {
            args.insert(arg);
        }
    }

    Command::Info(args)
}

/// Reads the parts of a `score` group. The first token that is not part of
/// the group is left for the caller.
fn read_score(t: &mut Tokenizer<'_>) -> BTreeSet<ScoreArgument> {
    let mut parts = BTreeSet::new();

    loop {
        match t.next_token() {
            Some("cp") => {
                if let Some(cp) = t.next_int() {
                    parts.insert(ScoreArgument::Cp(cp));
                }
            }
            Some("mate") => {
                if let Some(mate) = t.next_int() {
                    parts.insert(ScoreArgument::Mate(mate));
                }
            }
            Some("lowerbound") => {
                parts.insert(ScoreArgument::LowerBound);
            }
            Some("upperbound") => {
                parts.insert(ScoreArgument::UpperBound);
            }
            Some(_) => {
                t.undo();
                break;
            }
            None => break,
        }
    }

    parts
}

fn parse_option(t: &mut Tokenizer<'_>) -> Option<Command> {
    let mut name = Vec::new();
    let mut kind = None;
    let mut default = None;
    let mut min = None;
    let mut max = None;
    let mut vars = Vec::new();

    while let Some(token) = t.next_token() {
        match token {
            "name" => {
                let part = read_span(t, &OPTION_KEYWORDS);
                if !part.is_empty() {
                    name.push(part);
                }
            }
            "type" => kind = t.next_token(),
            "default" => default = Some(read_span(t, &OPTION_KEYWORDS)).filter(|s| !s.is_empty()),
            "min" => min = t.next_token(),
            "max" => max = t.next_token(),
            "var" => {
                let var = read_span(t, &OPTION_KEYWORDS);
                if !var.is_empty() {
                    vars.push(var);
                }
            }
            other => tracing::trace!(token = other, "skipping unknown option argument"),
        }
    }

    let name = name.join(" ");
    if name.is_empty() {
        return None;
    }

    let kind = match kind? {
        "check" => OptionType::Check {
            default: default? == "true",
        },
        "spin" => OptionType::Spin {
            default: default?.parse().ok()?,
            min: min?.parse().ok()?,
            max: max?.parse().ok()?,
        },
        "combo" => {
            if vars.is_empty() {
                return None;
            }
            OptionType::Combo {
                default: default?,
                vars,
            }
        }
        "string" => OptionType::String { default: default? },
        "button" => OptionType::Button,
        _ => return None,
    };

    Some(Command::Option { name, kind })
}

/// Reads moves until a token that is not a move, which is left unread.
fn read_moves(t: &mut Tokenizer<'_>) -> Vec<Move> {
    let mut moves = Vec::new();
    while let Some(token) = t.next_token() {
        match Move::from_uci(token) {
            Some(mv) => moves.push(mv),
            None => {
                t.undo();
                break;
            }
        }
    }
    moves
}

/// Reads words up to (not including) one of `stop`, joined by single spaces.
fn read_span(t: &mut Tokenizer<'_>, stop: &[&str]) -> String {
    let mut words = Vec::new();
    while let Some(token) = t.next_token() {
        if stop.contains(&token) {
            t.undo();
            break;
        }
        words.push(token);
    }
    words.join(" ")
}
