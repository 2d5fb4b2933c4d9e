//! Whitespace tokenizer with a single rewindable cursor.

/// Splits a command line into tokens and hands them out one at a time.
///
/// The token list never changes after construction; only the cursor moves.
#[derive(Debug, Clone)]
pub struct Tokenizer<'a> {
    tokens: Vec<&'a str>,
    cursor: usize,
    consume_invalid_integers: bool,
}

impl<'a> Tokenizer<'a> {
    /// Tokenizes `line` on runs of whitespace.
    pub fn new(line: &'a str) -> Self {
        Self {
            tokens: line.split_whitespace().collect(),
            cursor: 0,
            consume_invalid_integers: true,
        }
    }

    /// Controls whether [`next_int`](Self::next_int) consumes a token that
    /// fails to parse. Defaults to `true`.
    pub fn with_consume_invalid_integers(mut self, consume: bool) -> Self {
        self.consume_invalid_integers = consume;
        self
    }

    /// Returns the token under the cursor and advances past it.
    pub fn next_token(&mut self) -> Option<&'a str> {
        let token = self.tokens.get(self.cursor).copied()?;
        self.cursor += 1;
        Some(token)
    }

    /// Reads the next token as a base-10 integer.
    ///
    /// A token that is not an integer is still consumed unless the tokenizer
    /// was built with `with_consume_invalid_integers(false)`.
    pub fn next_int(&mut self) -> Option<i64> {
        let token = self.next_token()?;
        match token.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                if !self.consume_invalid_integers {
                    self.undo();
                }
                None
            }
        }
    }

    /// Steps the cursor back by one token, stopping at the start.
    pub fn undo(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Joins every token from the cursor to the end with single spaces.
    ///
    /// Does not move the cursor.
    pub fn remaining(&self) -> String {
        self.tokens[self.cursor..].join(" ")
    }

    /// Moves the cursor to the end, returning what [`remaining`](Self::remaining) would.
    pub fn take_remaining(&mut self) -> String {
        let rest = self.remaining();
        self.cursor = self.tokens.len();
        rest
    }

    /// Current cursor position, in tokens.
    pub fn position(&self) -> usize {
        self.cursor
    }

    /// Returns true if the line contained no tokens at all.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Returns true once every token has been read.
    pub fn is_exhausted(&self) -> bool {
        self.cursor >= self.tokens.len()
    }
}
