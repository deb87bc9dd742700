//! Parser for mcl.
//!
//! The parser pulls tokens from the lexer one at a time and builds
//! expression trees by precedence climbing. A program is a sequence of
//! expressions, each terminated by `;`.

use mcl_foundation::{Error, Position, Result, Span};
use tracing::debug;

use crate::ast::{Expression, InfixOp};
use crate::config::PipelineConfig;
use crate::lexer::Lexer;
use crate::token::{Token, TokenKind};

/// Parser for mcl source code.
pub struct Parser<'src> {
    /// The lexer providing tokens.
    lexer: Lexer<'src>,
    /// Most recently consumed token.
    last: Token,
    /// Current token (lookahead).
    current: Token,
    /// Literal typing rules.
    config: PipelineConfig,
}

impl<'src> Parser<'src> {
    /// Creates a new parser for the given source.
    ///
    /// # Errors
    /// Returns an error if the first token cannot be lexed.
    pub fn new(source: &'src str) -> Result<Self> {
        Self::with_config(source, PipelineConfig::default())
    }

    /// Creates a new parser with an explicit configuration.
    ///
    /// # Errors
    /// Returns an error if the first token cannot be lexed.
    pub fn with_config(source: &'src str, config: PipelineConfig) -> Result<Self> {
        let mut lexer = Lexer::new(source);
        let current = lexer.next_token()?;
        Ok(Self {
            lexer,
            last: Token::new(TokenKind::EndOfInput, Span::empty(Position::at_start())),
            current,
            config,
        })
    }

    /// Returns true once every statement has been consumed.
    #[must_use]
    pub const fn is_at_end(&self) -> bool {
        self.current.is_eof()
    }

    /// Parses all statements up to end of input.
    ///
    /// # Errors
    /// Returns the first lex, parse, or literal overflow error.
    pub fn parse_program(&mut self) -> Result<Vec<Expression>> {
        let mut statements = Vec::new();
        while !self.is_at_end() {
            statements.push(self.parse_statement()?);
        }
        Ok(statements)
    }

    /// Parses one expression followed by a required `;`.
    ///
    /// The returned expression's span does not include the semicolon.
    ///
    /// # Errors
    /// Returns an error if the statement is malformed.
    pub fn parse_statement(&mut self) -> Result<Expression> {
        let expr = self.parse_expression(0)?;
        self.expect(TokenKind::Semicolon)?;
        debug!(span = %expr.span(), nodes = expr.node_count(), "parsed statement");
        Ok(expr)
    }

    /// Parses an expression whose operators all bind tighter than
    /// `min_priority`.
    ///
    /// Operators of equal precedence associate to the left: the
    /// right-hand side is parsed with the operator's right binding power,
    /// which is higher than the left power of any same-level operator that
    /// follows, so the loop here picks that operator up instead.
    ///
    /// # Errors
    /// Returns an error if no literal starts the expression or a literal
    /// overflows.
    pub fn parse_expression(&mut self, min_priority: u8) -> Result<Expression> {
        let start = self.current.span.start;
        let mut left = self.parse_primary()?;

        loop {
            let power = self.current.kind.binding_power();
            if power.left <= min_priority {
                break;
            }
            let Some(op) = InfixOp::from_token(self.current.kind) else {
                break;
            };
            self.advance()?;

            let right = self.parse_expression(power.right)?;
            let span = Span::new(start, self.last.span.end);
            left = Expression::infix(op, left, right, span);
        }

        Ok(left)
    }

    /// Parses a primary expression. The only primary is a literal.
    fn parse_primary(&mut self) -> Result<Expression> {
        match self.current.kind {
            TokenKind::IntegerLiteral => self.parse_literal(),
            _ => Err(self.unexpected(TokenKind::IntegerLiteral)),
        }
    }

    /// Parses an integer literal from the digits its token spans.
    fn parse_literal(&mut self) -> Result<Expression> {
        let token = self.current;
        let ty = self.config.literal_type;
        let value = token
            .text(self.lexer.source())
            .parse::<u64>()
            .map_err(|_| Error::overflow(token.span, ty))?;
        if !ty.fits(value) {
            return Err(Error::overflow(token.span, ty));
        }

        self.advance()?;
        Ok(Expression::literal(ty, value, token.span))
    }

    /// Advances to the next token.
    fn advance(&mut self) -> Result<()> {
        self.last = self.current;
        self.current = self.lexer.next_token()?;
        Ok(())
    }

    /// Expects the current token to be of a specific kind, then advances.
    fn expect(&mut self, expected: TokenKind) -> Result<()> {
        if self.current.kind == expected {
            self.advance()
        } else {
            Err(self.unexpected(expected))
        }
    }

    /// Creates an unexpected token error at the current token.
    fn unexpected(&self, expected: TokenKind) -> Error {
        Error::unexpected_token(
            expected.name(),
            self.current.kind.name(),
            self.current.span.start,
        )
    }
}

/// Parses every statement of the source.
///
/// # Errors
/// Returns the first error in the source.
pub fn parse(source: &str) -> Result<Vec<Expression>> {
    Parser::new(source)?.parse_program()
}

/// Parses a single `;`-terminated statement from the start of the source.
///
/// # Errors
/// Returns an error if the first statement cannot be parsed.
pub fn parse_one(source: &str) -> Result<Expression> {
    Parser::new(source)?.parse_statement()
}
