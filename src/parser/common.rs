/*!
Core token cursor for recursive descent parsing.

`TokenParser` owns the token stream and the current position within it. It
provides the navigation and expectation primitives every grammar rule is
built from: peek by kind, consume with error, try-consume, and span
bookkeeping (the end offset of the last consumed token, which is what every
AST node's end position derives from).

The cursor never backtracks past the current position. It also owns the
explicit nesting-depth limit: every recursive descent into a subquery,
parenthesized statement, parenthesized expression, or window frame bound
passes through `descend()`, so pathological inputs fail with a parse error
instead of exhausting the call stack.
*/

use super::lexer::{Token, TokenType};
use crate::ast::Pos;
use crate::error::SqlError;

/// Maximum syntactic nesting depth before a parse is aborted.
pub const MAX_NESTING_DEPTH: usize = 128;

static EOF_TOKEN: Token = Token {
    token_type: TokenType::Eof,
    value: String::new(),
    position: 0,
    end: 0,
};

/// Token cursor over an immutable token sequence.
pub struct TokenParser {
    tokens: Vec<Token>,
    current: usize,
    last_end: Pos,
    depth: usize,
}

impl TokenParser {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens,
            current: 0,
            last_end: 0,
            depth: 0,
        }
    }

    /// Current token without advancing. Returns a static EOF token past the
    /// end of the stream, avoiding Option unwrapping in grammar rules.
    pub fn current_token(&self) -> &Token {
        self.tokens.get(self.current).unwrap_or(&EOF_TOKEN)
    }

    /// Byte position of the current token.
    pub fn current_position(&self) -> Pos {
        self.current_token().position
    }

    /// End offset of the last consumed token. AST node end positions are
    /// always derived from this, never estimated.
    pub fn last_end(&self) -> Pos {
        self.last_end
    }

    /// Move past the current token, recording its end offset. A no-op at end
    /// of stream.
    pub fn advance(&mut self) {
        if let Some(token) = self.tokens.get(self.current) {
            if token.token_type != TokenType::Eof {
                self.last_end = token.end;
                self.current += 1;
            }
        }
    }

    /// True when the current token has the given kind.
    pub fn peek_kind(&self, kind: TokenType) -> bool {
        self.current_token().token_type == kind
    }

    /// Consume a token of the expected kind or fail with an UnexpectedToken
    /// error.
    pub fn expect(&mut self, kind: TokenType) -> Result<Token, SqlError> {
        let token = self.current_token().clone();
        if token.token_type == kind {
            self.advance();
            Ok(token)
        } else {
            Err(SqlError::unexpected_token(
                describe_kind(kind),
                token.describe(),
                token.position,
            ))
        }
    }

    /// Consume a keyword token or fail with an UnexpectedKeyword error.
    pub fn expect_keyword(&mut self, kind: TokenType) -> Result<Token, SqlError> {
        let token = self.current_token().clone();
        if token.token_type == kind {
            self.advance();
            Ok(token)
        } else {
            Err(SqlError::unexpected_keyword(
                describe_kind(kind),
                token.describe(),
                token.position,
            ))
        }
    }

    /// Consume and return the current token if it has the given kind.
    pub fn try_consume(&mut self, kind: TokenType) -> Option<Token> {
        if self.peek_kind(kind) {
            let token = self.current_token().clone();
            self.advance();
            Some(token)
        } else {
            None
        }
    }

    /// UnexpectedToken error at the current position, for rules that accept
    /// one of several constructs.
    pub fn unexpected(&self, expected: impl Into<String>) -> SqlError {
        let token = self.current_token();
        SqlError::unexpected_token(expected, token.describe(), token.position)
    }

    /// Enter one level of syntactic nesting, failing once the depth limit is
    /// hit. Must be paired with `ascend()`.
    pub fn descend(&mut self) -> Result<(), SqlError> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(SqlError::NestingTooDeep {
                limit: MAX_NESTING_DEPTH,
                position: self.current_position(),
            });
        }
        self.depth += 1;
        Ok(())
    }

    pub fn ascend(&mut self) {
        self.depth -= 1;
    }
}

/// Human-readable rendering of a token kind for error messages.
pub(super) fn describe_kind(kind: TokenType) -> &'static str {
    match kind {
        TokenType::Select => "SELECT",
        TokenType::Distinct => "DISTINCT",
        TokenType::Top => "TOP",
        TokenType::Ties => "TIES",
        TokenType::From => "FROM",
        TokenType::Final => "FINAL",
        TokenType::Sample => "SAMPLE",
        TokenType::Offset => "OFFSET",
        TokenType::Global => "GLOBAL",
        TokenType::Local => "LOCAL",
        TokenType::Prewhere => "PREWHERE",
        TokenType::Where => "WHERE",
        TokenType::Group => "GROUP",
        TokenType::By => "BY",
        TokenType::Having => "HAVING",
        TokenType::Order => "ORDER",
        TokenType::Limit => "LIMIT",
        TokenType::Settings => "SETTINGS",
        TokenType::With => "WITH",
        TokenType::As => "AS",
        TokenType::Union => "UNION",
        TokenType::All => "ALL",
        TokenType::Any => "ANY",
        TokenType::Cross => "CROSS",
        TokenType::Inner => "INNER",
        TokenType::Left => "LEFT",
        TokenType::Right => "RIGHT",
        TokenType::Full => "FULL",
        TokenType::Outer => "OUTER",
        TokenType::Semi => "SEMI",
        TokenType::Anti => "ANTI",
        TokenType::Asof => "ASOF",
        TokenType::Join => "JOIN",
        TokenType::On => "ON",
        TokenType::Using => "USING",
        TokenType::Cube => "CUBE",
        TokenType::Rollup => "ROLLUP",
        TokenType::Totals => "TOTALS",
        TokenType::Window => "WINDOW",
        TokenType::Partition => "PARTITION",
        TokenType::Rows => "ROWS",
        TokenType::Range => "RANGE",
        TokenType::Between => "BETWEEN",
        TokenType::Current => "CURRENT",
        TokenType::Row => "ROW",
        TokenType::Unbounded => "UNBOUNDED",
        TokenType::Preceding => "PRECEDING",
        TokenType::Following => "FOLLOWING",
        TokenType::And => "AND",
        TokenType::Or => "OR",
        TokenType::Not => "NOT",
        TokenType::Is => "IS",
        TokenType::In => "IN",
        TokenType::Like => "LIKE",
        TokenType::Null => "NULL",
        TokenType::Array => "ARRAY",
        TokenType::Asc => "ASC",
        TokenType::Desc => "DESC",
        TokenType::Identifier => "identifier",
        TokenType::Number => "number",
        TokenType::String => "string literal",
        TokenType::LeftParen => "'('",
        TokenType::RightParen => "')'",
        TokenType::Comma => "','",
        TokenType::Dot => "'.'",
        TokenType::Semicolon => "';'",
        TokenType::Asterisk => "'*'",
        TokenType::Plus => "'+'",
        TokenType::Minus => "'-'",
        TokenType::Divide => "'/'",
        TokenType::Modulo => "'%'",
        TokenType::Concat => "'||'",
        TokenType::Equal => "'='",
        TokenType::NotEqual => "'!='",
        TokenType::LessThan => "'<'",
        TokenType::LessThanOrEqual => "'<='",
        TokenType::GreaterThan => "'>'",
        TokenType::GreaterThanOrEqual => "'>='",
        TokenType::Eof => "end of input",
    }
}
