/*!
# FROM Clause Resolution: Tables and Joins

The FROM clause is one recursively nested join tree. Parsing it splits into
two jobs:

- **Table references** (`parse_table_expr`): a qualified table name, a
  table-valued function, or a parenthesized subquery, each with an optional
  `AS` alias. An unqualified identifier immediately followed by `(` is
  reinterpreted as a table function; a qualified name never is.
- **Join resolution** (`parse_join_expr` / `parse_join_op`): after a table
  source, the join-op classifier greedily consumes modifier keywords. No
  single lookahead token suffices; classification walks fixed priority
  branches:

```text
1. CROSS                     (JOIN required)
2. ,                         (implicit cross join)
3. ANY | ALL   [FULL] [LEFT | RIGHT | INNER | OUTER]
4. SEMI | ASOF [LEFT | RIGHT] [OUTER]
5. INNER       [ALL | ANY | ASOF]
6. LEFT | RIGHT [OUTER] [SEMI | ANTI | ANY | ALL | ASOF | ARRAY]
7. FULL        [OUTER] [ALL | ANY]
```

Each matched branch may be followed by one JOIN keyword, then the right-hand
side is parsed by the same join-expression rule. The tree is therefore
right-associative: `a JOIN b JOIN c` nests `b JOIN c` under the outer
`right`. The matched combination is recorded on the node as a
[`JoinKind`](crate::ast::JoinKind).

A `FINAL` modifier after the table and a `GLOBAL`/`LOCAL` modifier before
the join op are accepted and discarded; neither has an AST representation.
*/

use super::common::TokenParser;
use super::lexer::TokenType;
use crate::ast::*;
use crate::error::SqlError;

impl TokenParser {
    /// Parse a single table source with optional alias.
    pub fn parse_table_expr(&mut self) -> Result<TableExpr, SqlError> {
        let pos = self.current_position();
        let source = match self.current_token().token_type {
            TokenType::Identifier => {
                let table_identifier = self.parse_table_identifier()?;
                if table_identifier.database.is_some() || !self.peek_kind(TokenType::LeftParen) {
                    TableRef::Identifier(table_identifier)
                } else {
                    // unqualified name directly followed by ( is a table function
                    let (args, end) = self.parse_table_arg_list()?;
                    TableRef::Function(TableFunctionExpr {
                        name: table_identifier.table,
                        args,
                        end,
                    })
                }
            }
            TokenType::LeftParen => {
                self.descend()?;
                let lparen = self.expect(TokenType::LeftParen)?;
                let selects = self.parse_select_union_expr_list()?;
                self.expect(TokenType::RightParen)?;
                self.ascend();
                TableRef::Subquery(SubQueryExpr {
                    pos: lparen.position,
                    end: self.last_end(),
                    selects,
                })
            }
            _ => return Err(self.unexpected("table name or subquery")),
        };

        let mut end = source.end();
        let alias = if let Some(as_token) = self.try_consume(TokenType::As) {
            let name = self.parse_ident()?;
            end = name.end;
            Some(TableAlias {
                as_pos: as_token.position,
                name,
            })
        } else {
            None
        };

        Ok(TableExpr {
            pos,
            end,
            source,
            alias,
        })
    }

    /// Parse one node of the join tree: a table source and, if a join
    /// operator follows, the recursively parsed right-hand side with
    /// optional constraints.
    pub fn parse_join_expr(&mut self) -> Result<JoinTreeExpr, SqlError> {
        self.descend()?;
        let table = self.parse_table_expr()?;

        // FINAL is accepted here and not represented in the AST
        let _ = self.try_consume(TokenType::Final);

        let sample = self.try_parse_sample_ratio()?;

        // GLOBAL/LOCAL before a join op is accepted and not represented
        if self.peek_kind(TokenType::Global) || self.peek_kind(TokenType::Local) {
            self.advance();
        }

        let left = JoinTreeExpr::Table { table, sample };
        let result = match self.parse_join_op()? {
            None => left,
            Some(kind) => {
                let right = self.parse_join_expr()?;
                let constraints = self.try_parse_join_constraints()?;
                JoinTreeExpr::Join(Box::new(JoinExpr {
                    kind,
                    left,
                    right,
                    constraints,
                }))
            }
        };
        self.ascend();
        Ok(result)
    }

    /// Classify the join-modifier keyword sequence at the cursor. Returns
    /// `None` when no branch matches, meaning the join tree ends here.
    fn parse_join_op(&mut self) -> Result<Option<JoinKind>, SqlError> {
        let kind = if self.try_consume(TokenType::Cross).is_some() {
            self.expect_keyword(TokenType::Join)?;
            JoinKind::new(JoinOp::Cross)
        } else if self.try_consume(TokenType::Comma).is_some() {
            JoinKind::new(JoinOp::Comma)
        } else if self.peek_kind(TokenType::Any) || self.peek_kind(TokenType::All) {
            let strictness = if self.try_consume(TokenType::Any).is_some() {
                JoinStrictness::Any
            } else {
                self.advance();
                JoinStrictness::All
            };
            let mut kind = JoinKind {
                op: JoinOp::Unspecified,
                strictness,
                outer: false,
            };
            if self.try_consume(TokenType::Full).is_some() {
                kind.op = JoinOp::Full;
            }
            match self.current_token().token_type {
                TokenType::Left => {
                    self.advance();
                    kind.op = JoinOp::Left;
                }
                TokenType::Right => {
                    self.advance();
                    kind.op = JoinOp::Right;
                }
                TokenType::Inner => {
                    self.advance();
                    kind.op = JoinOp::Inner;
                }
                TokenType::Outer => {
                    self.advance();
                    kind.outer = true;
                }
                _ => {}
            }
            kind
        } else if self.peek_kind(TokenType::Semi) || self.peek_kind(TokenType::Asof) {
            let strictness = if self.try_consume(TokenType::Semi).is_some() {
                JoinStrictness::Semi
            } else {
                self.advance();
                JoinStrictness::Asof
            };
            let mut kind = JoinKind {
                op: JoinOp::Unspecified,
                strictness,
                outer: false,
            };
            if self.try_consume(TokenType::Left).is_some() {
                kind.op = JoinOp::Left;
            } else if self.try_consume(TokenType::Right).is_some() {
                kind.op = JoinOp::Right;
            }
            if self.try_consume(TokenType::Outer).is_some() {
                kind.outer = true;
            }
            kind
        } else if self.try_consume(TokenType::Inner).is_some() {
            let mut kind = JoinKind::new(JoinOp::Inner);
            match self.current_token().token_type {
                TokenType::All => {
                    self.advance();
                    kind.strictness = JoinStrictness::All;
                }
                TokenType::Any => {
                    self.advance();
                    kind.strictness = JoinStrictness::Any;
                }
                TokenType::Asof => {
                    self.advance();
                    kind.strictness = JoinStrictness::Asof;
                }
                _ => {}
            }
            kind
        } else if self.peek_kind(TokenType::Left) || self.peek_kind(TokenType::Right) {
            let op = if self.try_consume(TokenType::Left).is_some() {
                JoinOp::Left
            } else {
                self.advance();
                JoinOp::Right
            };
            let mut kind = JoinKind::new(op);
            if self.try_consume(TokenType::Outer).is_some() {
                kind.outer = true;
            }
            match self.current_token().token_type {
                TokenType::Semi => {
                    self.advance();
                    kind.strictness = JoinStrictness::Semi;
                }
                TokenType::Anti => {
                    self.advance();
                    kind.strictness = JoinStrictness::Anti;
                }
                TokenType::Any => {
                    self.advance();
                    kind.strictness = JoinStrictness::Any;
                }
                TokenType::All => {
                    self.advance();
                    kind.strictness = JoinStrictness::All;
                }
                TokenType::Asof => {
                    self.advance();
                    kind.strictness = JoinStrictness::Asof;
                }
                TokenType::Array => {
                    self.advance();
                    kind.strictness = JoinStrictness::Array;
                }
                _ => {}
            }
            kind
        } else if self.try_consume(TokenType::Full).is_some() {
            let mut kind = JoinKind::new(JoinOp::Full);
            if self.try_consume(TokenType::Outer).is_some() {
                kind.outer = true;
            }
            match self.current_token().token_type {
                TokenType::All => {
                    self.advance();
                    kind.strictness = JoinStrictness::All;
                }
                TokenType::Any => {
                    self.advance();
                    kind.strictness = JoinStrictness::Any;
                }
                _ => {}
            }
            kind
        } else if self.peek_kind(TokenType::Join) {
            // bare JOIN with no modifier keywords
            JoinKind::new(JoinOp::Unspecified)
        } else {
            return Ok(None);
        };

        let _ = self.try_consume(TokenType::Join);
        Ok(Some(kind))
    }

    /// ON or USING constraints after a join's right-hand side. USING may
    /// wrap its column list in parentheses.
    fn try_parse_join_constraints(&mut self) -> Result<Option<JoinConstraint>, SqlError> {
        if let Some(on) = self.try_consume(TokenType::On) {
            let list = self.parse_column_expr_list()?;
            return Ok(Some(JoinConstraint::On(OnExpr {
                on_pos: on.position,
                on: list,
            })));
        }
        if let Some(using) = self.try_consume(TokenType::Using) {
            let has_paren = self.try_consume(TokenType::LeftParen).is_some();
            let list = self.parse_column_expr_list()?;
            if has_paren {
                self.expect(TokenType::RightParen)?;
            }
            return Ok(Some(JoinConstraint::Using(UsingExpr {
                using_pos: using.position,
                end: self.last_end(),
                using: list,
            })));
        }
        Ok(None)
    }

    /// `SAMPLE ratio [OFFSET offset]` after a table source.
    pub fn try_parse_sample_ratio(&mut self) -> Result<Option<SampleRatioExpr>, SqlError> {
        let sample = match self.try_consume(TokenType::Sample) {
            Some(token) => token,
            None => return Ok(None),
        };
        let ratio = self.parse_float()?;
        let mut end = ratio.end;
        let offset = if self.try_consume(TokenType::Offset).is_some() {
            let offset = self.parse_float()?;
            end = offset.end;
            Some(offset)
        } else {
            None
        };
        Ok(Some(SampleRatioExpr {
            sample_pos: sample.position,
            end,
            ratio,
            offset,
        }))
    }
}
