/*!
# SQL Parse Errors

Error types for tokenization and parsing. Every grammar deviation is a hard
failure: the first missing token or keyword unwinds the whole parse back to
the entry point with a single error value carrying the byte position and the
expectation that was violated. There is no recovery and no partial AST.

Callers (linters, REPLs) are expected to surface the message and position
directly to the end user.
*/

use thiserror::Error;

/// Errors produced while tokenizing or parsing a SELECT statement.
///
/// All variants carry the byte offset into the original SQL text where the
/// failure was detected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SqlError {
    /// The tokenizer hit input it cannot represent as a token, such as an
    /// unexpected character or an unterminated string or comment.
    #[error("lexical error at position {position}: {message}")]
    Lexical { message: String, position: usize },

    /// A token of a specific kind was required and something else was found.
    #[error("syntax error at position {position}: expected {expected}, found {found}")]
    UnexpectedToken {
        expected: String,
        found: String,
        position: usize,
    },

    /// A specific keyword was required and something else was found.
    #[error("syntax error at position {position}: expected keyword {expected}, found {found}")]
    UnexpectedKeyword {
        expected: String,
        found: String,
        position: usize,
    },

    /// A clause the grammar cannot do without is absent, such as a SELECT
    /// statement with no column list.
    #[error("syntax error at position {position}: missing required {clause}")]
    MissingRequiredClause { clause: String, position: usize },

    /// A modifier sequence went off the rails, such as an unknown keyword
    /// after `GROUP BY ... WITH` or an unrecognized window frame bound.
    #[error("syntax error at position {position}: {message}")]
    MalformedModifierSequence { message: String, position: usize },

    /// Syntactic nesting exceeded the configured depth limit. Deeply nested
    /// subqueries and parenthesized expressions would otherwise exhaust the
    /// call stack.
    #[error("nesting depth limit of {limit} exceeded at position {position}")]
    NestingTooDeep { limit: usize, position: usize },
}

impl SqlError {
    pub fn lexical(message: impl Into<String>, position: usize) -> Self {
        SqlError::Lexical {
            message: message.into(),
            position,
        }
    }

    pub fn unexpected_token(
        expected: impl Into<String>,
        found: impl Into<String>,
        position: usize,
    ) -> Self {
        SqlError::UnexpectedToken {
            expected: expected.into(),
            found: found.into(),
            position,
        }
    }

    pub fn unexpected_keyword(
        expected: impl Into<String>,
        found: impl Into<String>,
        position: usize,
    ) -> Self {
        SqlError::UnexpectedKeyword {
            expected: expected.into(),
            found: found.into(),
            position,
        }
    }

    pub fn missing_clause(clause: impl Into<String>, position: usize) -> Self {
        SqlError::MissingRequiredClause {
            clause: clause.into(),
            position,
        }
    }

    pub fn malformed(message: impl Into<String>, position: usize) -> Self {
        SqlError::MalformedModifierSequence {
            message: message.into(),
            position,
        }
    }

    /// Byte offset into the original SQL text where the error was detected.
    pub fn position(&self) -> usize {
        match self {
            SqlError::Lexical { position, .. }
            | SqlError::UnexpectedToken { position, .. }
            | SqlError::UnexpectedKeyword { position, .. }
            | SqlError::MissingRequiredClause { position, .. }
            | SqlError::MalformedModifierSequence { position, .. }
            | SqlError::NestingTooDeep { position, .. } => *position,
        }
    }
}

/// Result type for parser operations.
pub type SqlResult<T> = Result<T, SqlError>;
