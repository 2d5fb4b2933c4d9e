//! UCI info command types.

use crate::{Command, Move};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Parts of a `score` group.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ScoreArgument {
    /// Centipawn score (100 = 1 pawn advantage).
    Cp(i64),
    /// Mate in N moves (positive = engine winning, negative = engine losing).
    Mate(i64),
    /// The score is only a lower bound.
    LowerBound,
    /// The score is only an upper bound.
    UpperBound,
}

/// Arguments of the `info` command.
///
/// `String` is declared last: it swallows the rest of the line, so it has
/// to be written last too.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum InfoArgument {
    /// Search depth in plies.
    Depth(i64),
    /// Selective search depth.
    SelDepth(i64),
    /// Time spent in milliseconds.
    Time(i64),
    /// Nodes searched.
    Nodes(i64),
    /// Principal variation (best line found).
    Pv(Vec<Move>),
    /// Index of this line in multi-PV mode.
    MultiPv(i64),
    /// Score evaluation.
    Score(BTreeSet<ScoreArgument>),
    /// Current move being searched.
    CurrMove(Move),
    /// Current move number.
    CurrMoveNumber(i64),
    /// Hash table usage (per mille).
    HashFull(i64),
    /// Nodes per second.
    Nps(i64),
    /// Endgame tablebase hits.
    TbHits(i64),
    /// Shredder tablebase hits.
    SbHits(i64),
    /// CPU usage (per mille).
    CpuLoad(i64),
    /// A move refuted by the given line.
    Refutation(Move, Vec<Move>),
    /// Line currently searched by the given CPU.
    CurrLine(i64, Vec<Move>),
    /// Arbitrary string info.
    String(String),
}

/// Builder for constructing `info` commands.
#[derive(Default)]
pub struct InfoBuilder {
    args: BTreeSet<InfoArgument>,
}

impl InfoBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn depth(mut self, d: i64) -> Self {
        self.args.insert(InfoArgument::Depth(d));
        self
    }

    pub fn seldepth(mut self, d: i64) -> Self {
        self.args.insert(InfoArgument::SelDepth(d));
        self
    }

    pub fn time(mut self, ms: i64) -> Self {
        self.args.insert(InfoArgument::Time(ms));
        self
    }

    pub fn nodes(mut self, n: i64) -> Self {
        self.args.insert(InfoArgument::Nodes(n));
        self
    }

    pub fn pv(mut self, moves: Vec<Move>) -> Self {
        self.args.insert(InfoArgument::Pv(moves));
        self
    }

    pub fn multipv(mut self, n: i64) -> Self {
        self.args.insert(InfoArgument::MultiPv(n));
        self
    }

    pub fn score_cp(self, cp: i64) -> Self {
        self.score([ScoreArgument::Cp(cp)])
    }

    pub fn score_mate(self, moves: i64) -> Self {
        self.score([ScoreArgument::Mate(moves)])
    }

    /// Adds a `score` group made of the given parts.
    pub fn score(mut self, parts: impl IntoIterator<Item = ScoreArgument>) -> Self {
        self.args
            .insert(InfoArgument::Score(parts.into_iter().collect()));
        self
    }

    pub fn currmove(mut self, mv: Move) -> Self {
        self.args.insert(InfoArgument::CurrMove(mv));
        self
    }

    pub fn currmovenumber(mut self, n: i64) -> Self {
        self.args.insert(InfoArgument::CurrMoveNumber(n));
        self
    }

    pub fn hashfull(mut self, permille: i64) -> Self {
        self.args.insert(InfoArgument::HashFull(permille));
        self
    }

    pub fn nps(mut self, n: i64) -> Self {
        self.args.insert(InfoArgument::Nps(n));
        self
    }

    pub fn tbhits(mut self, n: i64) -> Self {
        self.args.insert(InfoArgument::TbHits(n));
        self
    }

    pub fn sbhits(mut self, n: i64) -> Self {
        self.args.insert(InfoArgument::SbHits(n));
        self
    }

    pub fn cpuload(mut self, permille: i64) -> Self {
        self.args.insert(InfoArgument::CpuLoad(permille));
        self
    }

    pub fn refutation(mut self, mv: Move, line: Vec<Move>) -> Self {
        self.args.insert(InfoArgument::Refutation(mv, line));
        self
    }

    pub fn currline(mut self, cpu: i64, line: Vec<Move>) -> Self {
        self.args.insert(InfoArgument::CurrLine(cpu, line));
        self
    }

    pub fn string(mut self, s: &str) -> Self {
        self.args.insert(InfoArgument::String(s.to_string()));
        self
    }

    /// Returns the collected arguments.
    pub fn args(self) -> BTreeSet<InfoArgument> {
        self.args
    }

    pub fn build(self) -> Command {
        Command::Info(self.args)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mv(s: &str) -> Move {
        Move::from_uci(s).unwrap()
    }

    #[test]
    fn builder_collects_arguments() {
        let cmd = InfoBuilder::new()
            .depth(10)
            .score_cp(35)
            .nodes(50000)
            .pv(vec![mv("e2e4"), mv("e7e5")])
            .build();

        let Command::Info(args) = cmd else {
            panic!("Expected Info command");
        };
        assert!(args.contains(&InfoArgument::Depth(10)));
        assert!(args.contains(&InfoArgument::Nodes(50000)));
        assert!(args.contains(&InfoArgument::Score(
            [ScoreArgument::Cp(35)].into_iter().collect()
        )));
        assert!(args.contains(&InfoArgument::Pv(vec![mv("e2e4"), mv("e7e5")])));
    }

    #[test]
    fn builder_order_does_not_matter() {
        let a = InfoBuilder::new().nps(1000).depth(3).string("hi").args();
        let b = InfoBuilder::new().string("hi").depth(3).nps(1000).args();
        assert_eq!(a, b);
    }

    #[test]
    fn string_sorts_last() {
        let args = InfoBuilder::new()
            .string("x")
            .currline(1, vec![mv("a2a3")])
            .depth(1)
            .args();
        assert_eq!(args.iter().last(), Some(&InfoArgument::String("x".to_string())));
        assert_eq!(args.iter().next(), Some(&InfoArgument::Depth(1)));
    }

    #[test]
    fn score_bounds() {
        let args = InfoBuilder::new()
            .score([ScoreArgument::UpperBound, ScoreArgument::Cp(-12)])
            .args();
        let Some(InfoArgument::Score(parts)) = args.into_iter().next() else {
            panic!("Expected score");
        };
        assert_eq!(
            parts.into_iter().collect::<Vec<_>>(),
            vec![ScoreArgument::Cp(-12), ScoreArgument::UpperBound]
        );
    }
}
