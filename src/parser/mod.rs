/*!
# SELECT Dialect Parser

Recursive-descent parser for the Stratum SELECT dialect. Parsing is a two
phase pipeline:

1. **Tokenization** (`lexer`): SQL text becomes a token stream with byte
   spans.
2. **Parsing**: [`TokenParser`] walks the stream through mutually recursive
   grammar rules and assembles the AST.

The grammar rules are ordinary synchronous functions returning
`Result<T, SqlError>`; optional clauses are `try_parse_*` wrappers that
return `Ok(None)` on absence, while `parse_*` demands its construct. There
is no error recovery: the first grammar deviation unwinds the whole parse.

[`SqlParser`] is the facade most callers want. Statement-level callers that
recognize the SELECT / WITH / `(` lookahead themselves (for example inside
`INSERT INTO t SELECT ...`) can instead tokenize with
[`SqlParser::tokenize`] and drive [`TokenParser::parse_select_statement`] or
[`TokenParser::parse_select_union_expr_list`] directly.
*/

use crate::ast::SelectExprList;
use crate::error::SqlError;
use log::{debug, trace};
use std::collections::HashMap;

mod clauses;
mod common;
mod expressions;
mod joins;
mod lexer;
mod select;
mod window;

pub use common::{TokenParser, MAX_NESTING_DEPTH};
pub use lexer::{Token, TokenType};

/// Parser facade for the Stratum SELECT dialect.
///
/// Owns the keyword lookup table so repeated parses share one
/// classification map.
pub struct SqlParser {
    keywords: HashMap<String, TokenType>,
}

impl SqlParser {
    pub fn new() -> Self {
        Self {
            keywords: lexer::build_keywords(),
        }
    }

    /// Tokenize SQL text without parsing it.
    pub fn tokenize(&self, sql: &str) -> Result<Vec<Token>, SqlError> {
        lexer::tokenize(sql, &self.keywords)
    }

    /// Parse a complete statement: one SELECT, or several connected by
    /// UNION ALL, with an optional trailing semicolon. Anything left over
    /// after that is an error.
    pub fn parse(&self, sql: &str) -> Result<SelectExprList, SqlError> {
        debug!("parsing select statement ({} bytes)", sql.len());
        let tokens = self.tokenize(sql)?;
        let mut parser = TokenParser::new(tokens);
        let list = parser.parse_select_union_expr_list()?;
        let _ = parser.try_consume(TokenType::Semicolon);
        if !parser.peek_kind(TokenType::Eof) {
            return Err(parser.unexpected("end of statement"));
        }
        trace!("parsed {} select statement(s)", list.items.len());
        Ok(list)
    }
}

impl Default for SqlParser {
    fn default() -> Self {
        Self::new()
    }
}
