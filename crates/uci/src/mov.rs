//! Move tokens in UCI long algebraic notation.

use crate::{Square, UciError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The piece a pawn promotes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Promotion {
    Queen,
    Rook,
    Bishop,
    Knight,
}

impl Promotion {
    /// Creates a promotion from its lowercase letter (`q`, `r`, `b`, `n`).
    #[inline]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            'q' => Some(Promotion::Queen),
            'r' => Some(Promotion::Rook),
            'b' => Some(Promotion::Bishop),
            'n' => Some(Promotion::Knight),
            _ => None,
        }
    }

    /// Returns the lowercase letter used in move notation.
    #[inline]
    pub const fn to_char(self) -> char {
        match self {
            Promotion::Queen => 'q',
            Promotion::Rook => 'r',
            Promotion::Bishop => 'b',
            Promotion::Knight => 'n',
        }
    }
}

/// A move as written on the wire: `<from><to>[promotion]`, or `0000`.
///
/// Only the syntax is checked. Whether the move is legal in any position is
/// up to the engine.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Move {
    from: Square,
    to: Square,
    promotion: Option<Promotion>,
}

impl Move {
    /// The null move, written `0000`.
    pub const NULL: Move = Move {
        from: Square::NULL,
        to: Square::NULL,
        promotion: None,
    };

    /// Creates a move between two squares.
    #[inline]
    pub const fn new(from: Square, to: Square, promotion: Option<Promotion>) -> Self {
        Move {
            from,
            to,
            promotion,
        }
    }

    /// Creates a move without promotion.
    #[inline]
    pub const fn normal(from: Square, to: Square) -> Self {
        Self::new(from, to, None)
    }

    /// Returns the source square ([`Square::NULL`] for the null move).
    #[inline]
    pub const fn from(self) -> Square {
        self.from
    }

    /// Returns the destination square ([`Square::NULL`] for the null move).
    #[inline]
    pub const fn to(self) -> Square {
        self.to
    }

    /// Returns the promotion piece, if any.
    #[inline]
    pub const fn promotion(self) -> Option<Promotion> {
        self.promotion
    }

    /// Returns true if this is the `0000` null move.
    #[inline]
    pub const fn is_null(self) -> bool {
        self.from.is_null() && self.to.is_null()
    }

    /// Returns the UCI notation for this move (e.g., "e2e4", "e7e8q", "0000").
    pub fn to_uci(self) -> String {
        let mut s = format!("{}{}", self.from, self.to);
        if let Some(promo) = self.promotion {
            s.push(promo.to_char());
        }
        s
    }

    /// Parses a move from UCI notation.
    pub fn from_uci(s: &str) -> Option<Self> {
        if s == "0000" {
            return Some(Move::NULL);
        }
        if !s.is_ascii() || s.len() < 4 || s.len() > 5 {
            return None;
        }
        let from = Square::from_algebraic(&s[0..2])?;
        let to = Square::from_algebraic(&s[2..4])?;
        let promotion = match s[4..].chars().next() {
            Some(c) => Some(Promotion::from_char(c)?),
            None => None,
        };
        Some(Move::new(from, to, promotion))
    }
}

impl FromStr for Move {
    type Err = UciError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Move::from_uci(s).ok_or_else(|| UciError::InvalidMove(s.to_string()))
    }
}

impl TryFrom<String> for Move {
    type Error = UciError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Move> for String {
    fn from(mv: Move) -> Self {
        mv.to_uci()
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({})", self.to_uci())
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_uci())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{File, Rank};
    use proptest::prelude::*;

    #[test]
    fn move_from_uci() {
        let m = Move::from_uci("e2e4").unwrap();
        assert_eq!(m.from().to_algebraic(), "e2");
        assert_eq!(m.to().to_algebraic(), "e4");
        assert_eq!(m.promotion(), None);

        let promo = Move::from_uci("e7e8q").unwrap();
        assert_eq!(promo.from().to_algebraic(), "e7");
        assert_eq!(promo.to().to_algebraic(), "e8");
        assert_eq!(promo.promotion(), Some(Promotion::Queen));

        assert!(Move::from_uci("invalid").is_none());
        assert!(Move::from_uci("e2e9").is_none());
    }

    #[test]
    fn move_null() {
        let null = Move::from_uci("0000").unwrap();
        assert_eq!(null, Move::NULL);
        assert!(null.is_null());
        assert_eq!(null.from().to_algebraic(), "00");
        assert_eq!(null.to().to_algebraic(), "00");
        assert_eq!(null.promotion(), None);
        assert_eq!(null.to_uci(), "0000");
    }

    #[test]
    fn move_from_uci_all_promotions() {
        assert_eq!(Move::from_uci("a7a8q").unwrap().promotion(), Some(Promotion::Queen));
        assert_eq!(Move::from_uci("a7a8r").unwrap().promotion(), Some(Promotion::Rook));
        assert_eq!(Move::from_uci("a7a8b").unwrap().promotion(), Some(Promotion::Bishop));
        assert_eq!(Move::from_uci("a7a8n").unwrap().promotion(), Some(Promotion::Knight));
        // Uppercase and non-piece letters are not UCI
        assert!(Move::from_uci("a7a8Q").is_none());
        assert!(Move::from_uci("a7a8k").is_none());
    }

    #[test]
    fn move_from_uci_edge_cases() {
        assert!(Move::from_uci("").is_none());
        assert!(Move::from_uci("e2").is_none());
        assert!(Move::from_uci("e2e").is_none());
        assert!(Move::from_uci("e2e4qq").is_none());
        assert!(Move::from_uci("000").is_none());
        assert!(Move::from_uci("00000").is_none());
        assert!(Move::from_uci("00e4").is_none());
        assert!(Move::from_uci("é2e4").is_none());
    }

    #[test]
    fn move_from_str_error() {
        let err = "e2x4".parse::<Move>().unwrap_err();
        assert!(matches!(err, UciError::InvalidMove(ref s) if s == "e2x4"));
        assert_eq!("g1f3".parse::<Move>().unwrap().to_string(), "g1f3");
    }

    #[test]
    fn move_serde_as_string() {
        let m = Move::from_uci("b7b8n").unwrap();
        assert_eq!(serde_json::to_string(&m).unwrap(), "\"b7b8n\"");
        let back: Move = serde_json::from_str("\"0000\"").unwrap();
        assert_eq!(back, Move::NULL);
        assert!(serde_json::from_str::<Move>("\"z9z9\"").is_err());
    }

    #[test]
    fn move_debug_display() {
        let m = Move::normal(Square::new(File::E, Rank::R2), Square::new(File::E, Rank::R4));
        assert_eq!(format!("{:?}", m), "Move(e2e4)");
        assert_eq!(format!("{}", m), "e2e4");
    }

    fn any_move() -> impl Strategy<Value = Move> {
        let square = (0..8usize, 0..8usize).prop_map(|(f, r)| Square::new(File::ALL[f], Rank::ALL[r]));
        let promotion = prop_oneof![
            Just(None),
            Just(Some(Promotion::Queen)),
            Just(Some(Promotion::Rook)),
            Just(Some(Promotion::Bishop)),
            Just(Some(Promotion::Knight)),
        ];
        prop_oneof![
            1 => Just(Move::NULL),
            20 => (square.clone(), square, promotion).prop_map(|(from, to, p)| Move::new(from, to, p)),
        ]
    }

    proptest! {
        #[test]
        fn move_notation_is_idempotent(m in any_move()) {
            prop_assert_eq!(Move::from_uci(&m.to_uci()), Some(m));
        }
    }
}
