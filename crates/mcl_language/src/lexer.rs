//! Lexer for mcl.
//!
//! The lexer converts source text into a stream of tokens. Whitespace,
//! `//` line comments, and `/* */` block comments are trivia and are
//! skipped before each token.

use std::str::Chars;

use mcl_foundation::{Error, Position, Result, Span};
use tracing::trace;

use crate::token::{Token, TokenKind};

/// Lexer for mcl source code.
///
/// The lexer keeps a two-character window over the source and produces
/// tokens on demand. Once the source is exhausted every further call to
/// [`Lexer::next_token`] returns [`TokenKind::EndOfInput`] at the same
/// position.
pub struct Lexer<'src> {
    /// Source text being tokenized.
    source: &'src str,
    /// Characters after the lookahead window.
    chars: Chars<'src>,
    /// Character under the cursor.
    current: Option<char>,
    /// Character after the cursor.
    next: Option<char>,
    /// Position of `current`.
    position: Position,
    /// Set once the iterator has yielded end of input or an error.
    finished: bool,
}

impl<'src> Lexer<'src> {
    /// Creates a new lexer for the given source.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        let mut chars = source.chars();
        let current = chars.next();
        let next = chars.next();
        Self {
            source,
            chars,
            current,
            next,
            position: Position::at_start(),
            finished: false,
        }
    }

    /// Returns the source text being tokenized.
    #[must_use]
    pub const fn source(&self) -> &'src str {
        self.source
    }

    /// Returns the position of the cursor.
    #[must_use]
    pub const fn position(&self) -> Position {
        self.position
    }

    /// Returns the next token from the source.
    ///
    /// # Errors
    /// Returns a lex error on a character that starts no token or on a
    /// block comment that is never closed.
    pub fn next_token(&mut self) -> Result<Token> {
        self.skip_trivia()?;

        let start = self.position;
        let Some(c) = self.current else {
            return Ok(Token::new(TokenKind::EndOfInput, Span::empty(start)));
        };

        let kind = match c {
            '+' => {
                self.advance();
                TokenKind::Plus
            }
            '-' => {
                self.advance();
                TokenKind::Minus
            }
            ';' => {
                self.advance();
                TokenKind::Semicolon
            }
            c if c.is_ascii_digit() => self.scan_integer(),
            c => return Err(Error::unexpected_character(c, start)),
        };

        let token = Token::new(kind, Span::new(start, self.position));
        trace!(kind = %token.kind, span = %token.span, "token");
        Ok(token)
    }

    /// Tokenizes all source and returns a vector of tokens.
    ///
    /// The last token is always [`TokenKind::EndOfInput`].
    ///
    /// # Errors
    /// Returns the first lex error in the source.
    pub fn tokenize_all(source: &str) -> Result<Vec<Token>> {
        let mut lexer = Lexer::new(source);
        let mut tokens = Vec::new();
        loop {
            let token = lexer.next_token()?;
            let is_eof = token.is_eof();
            tokens.push(token);
            if is_eof {
                break;
            }
        }
        Ok(tokens)
    }

    /// Advances past the current character.
    fn advance(&mut self) {
        if let Some(c) = self.current {
            self.position = self.position.advance(c);
            self.current = self.next;
            self.next = self.chars.next();
        }
    }

    /// Skips whitespace and comments.
    fn skip_trivia(&mut self) -> Result<()> {
        loop {
            match (self.current, self.next) {
                (Some(' ' | '\n' | '\r' | '\t'), _) => self.advance(),
                (Some('/'), Some('/')) => self.skip_line_comment(),
                (Some('/'), Some('*')) => self.skip_block_comment()?,
                _ => return Ok(()),
            }
        }
    }

    /// Skips a `//` comment up to, not including, the newline.
    fn skip_line_comment(&mut self) {
        while self.current.is_some_and(|c| c != '\n') {
            self.advance();
        }
    }

    /// Skips a `/* */` comment. Only the exact pair `*/` closes it.
    fn skip_block_comment(&mut self) -> Result<()> {
        let start = self.position;
        self.advance(); // consume '/'
        self.advance(); // consume '*'
        loop {
            match (self.current, self.next) {
                (None, _) => return Err(Error::unterminated_block_comment(start)),
                (Some('*'), Some('/')) => {
                    self.advance();
                    self.advance();
                    return Ok(());
                }
                _ => self.advance(),
            }
        }
    }

    /// Scans a run of decimal digits.
    fn scan_integer(&mut self) -> TokenKind {
        self.advance();
        while self.current.is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
        }
        TokenKind::IntegerLiteral
    }
}

/// Yields tokens up to, not including, end of input. The first error ends
/// the sequence.
impl Iterator for Lexer<'_> {
    type Item = Result<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        match self.next_token() {
            Ok(token) if token.is_eof() => {
                self.finished = true;
                None
            }
            Ok(token) => Some(Ok(token)),
            Err(err) => {
                self.finished = true;
                Some(Err(err))
            }
        }
    }
}
