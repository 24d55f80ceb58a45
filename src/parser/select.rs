/*!
# SELECT Statement Orchestration

The top of the grammar: UNION ALL composition, WITH/CTE lists, and the
SELECT statement orchestrator that sequences every clause parser in fixed
grammar order.

## Clause order

```text
WITH? SELECT DISTINCT? TOP? columns
    FROM? (ARRAY JOIN)? WINDOW? PREWHERE? WHERE?
    (GROUP BY)? HAVING? (ORDER BY)? (LIMIT [BY])? SETTINGS?
```

Only SELECT and its column list are mandatory. Clauses are attempted in
exactly this order; a keyword belonging to an earlier clause showing up
later is a syntax error, not a reordering. After each clause that is
present, the statement's end position is overwritten with that clause's
end, so `statement_end` always marks the last token of the last clause.

DISTINCT is recognized and consumed but not represented in the AST.

## Entry points

`parse_select_union_expr_list` and `parse_select_statement` are public so a
statement-level caller (one parsing `INSERT INTO t SELECT ...` or
`CREATE VIEW v AS SELECT ...`) can invoke them after recognizing the
SELECT / WITH / `(` lookahead itself.
*/

use super::common::TokenParser;
use super::lexer::TokenType;
use crate::ast::*;
use crate::error::SqlError;

impl TokenParser {
    /// Parse one or more SELECT statements connected by UNION ALL.
    ///
    /// `UNION` not followed by `ALL` is a hard error; no other union
    /// variant is supported.
    pub fn parse_select_union_expr_list(&mut self) -> Result<SelectExprList, SqlError> {
        let mut items = vec![self.parse_select_query()?];
        while self.try_consume(TokenType::Union).is_some() {
            self.expect_keyword(TokenType::All)?;
            items.push(self.parse_select_query()?);
        }
        Ok(SelectExprList { items })
    }

    /// One member of a union list: a full SELECT/WITH statement, or a
    /// parenthesized SELECT statement (one paren level, recursion allows
    /// further nesting).
    fn parse_select_query(&mut self) -> Result<SelectExpr, SqlError> {
        match self.current_token().token_type {
            TokenType::Select | TokenType::With => self.parse_select_statement(),
            TokenType::LeftParen => {
                self.descend()?;
                self.expect(TokenType::LeftParen)?;
                let select = self.parse_select_query()?;
                self.expect(TokenType::RightParen)?;
                self.ascend();
                Ok(select)
            }
            _ => Err(self.unexpected("SELECT, WITH or '('")),
        }
    }

    /// Parse a complete SELECT statement.
    pub fn parse_select_statement(&mut self) -> Result<SelectExpr, SqlError> {
        self.descend()?;
        let select_pos = self.current_position();

        let with = self.try_parse_with_expr()?;
        self.expect_keyword(TokenType::Select)?;

        // DISTINCT is consumed but not retained
        let _ = self.try_consume(TokenType::Distinct);

        let top = self.try_parse_top_expr()?;
        let columns = self.parse_select_columns()?;
        let mut statement_end = columns.end;

        let from = self.try_parse_from_expr()?;
        if let Some(clause) = &from {
            statement_end = clause.end();
        }
        let array_join = self.try_parse_array_join_expr()?;
        if let Some(clause) = &array_join {
            statement_end = clause.end();
        }
        let window = self.try_parse_window_expr()?;
        if let Some(clause) = &window {
            statement_end = clause.end();
        }
        let prewhere = self.try_parse_prewhere_expr()?;
        if let Some(clause) = &prewhere {
            statement_end = clause.end();
        }
        let where_clause = self.try_parse_where_expr()?;
        if let Some(clause) = &where_clause {
            statement_end = clause.end();
        }
        let group_by = self.try_parse_group_by_expr()?;
        if let Some(clause) = &group_by {
            statement_end = clause.end();
        }
        let having = self.try_parse_having_expr()?;
        if let Some(clause) = &having {
            statement_end = clause.end();
        }
        let order_by = self.try_parse_order_by_expr_list()?;
        if let Some(clause) = &order_by {
            statement_end = clause.end();
        }
        let limit_by = self.try_parse_limit_by_expr()?;
        if let Some(clause) = &limit_by {
            statement_end = clause.end();
        }
        let settings = self.try_parse_settings_expr_list()?;
        if let Some(clause) = &settings {
            statement_end = clause.end();
        }

        self.ascend();
        Ok(SelectExpr {
            select_pos,
            statement_end,
            with,
            top,
            columns,
            from,
            array_join,
            window,
            prewhere,
            where_clause,
            group_by,
            having,
            order_by,
            limit_by,
            settings,
        })
    }

    /// The mandatory column list. A SELECT whose next token cannot start an
    /// expression has no column list at all, which is reported as a missing
    /// clause rather than a generic token error.
    fn parse_select_columns(&mut self) -> Result<ColumnExprList, SqlError> {
        let pos = self.current_position();
        match self.parse_column_expr_list() {
            Ok(columns) => Ok(columns),
            Err(err) => {
                if self.current_position() == pos {
                    Err(SqlError::missing_clause("SELECT column list", pos))
                } else {
                    Err(err)
                }
            }
        }
    }

    fn try_parse_with_expr(&mut self) -> Result<Option<WithExpr>, SqlError> {
        if !self.peek_kind(TokenType::With) {
            return Ok(None);
        }
        self.parse_with_expr().map(Some)
    }

    /// `WITH cte [, cte ...]` where each cte is
    /// `name [(alias, ...)] AS (select)`.
    fn parse_with_expr(&mut self) -> Result<WithExpr, SqlError> {
        let with = self.expect_keyword(TokenType::With)?;
        let mut ctes = vec![self.parse_cte_expr()?];
        while self.try_consume(TokenType::Comma).is_some() {
            ctes.push(self.parse_cte_expr()?);
        }
        Ok(WithExpr {
            with_pos: with.position,
            end: self.last_end(),
            ctes,
        })
    }

    fn parse_cte_expr(&mut self) -> Result<CTEExpr, SqlError> {
        let pos = self.current_position();
        let name = self.parse_ident()?;
        let column_aliases = self.try_parse_column_aliases()?;
        self.expect_keyword(TokenType::As)?;
        self.expect(TokenType::LeftParen)?;
        let select = self.parse_select_statement()?;
        self.expect(TokenType::RightParen)?;
        Ok(CTEExpr {
            pos,
            end: self.last_end(),
            name,
            column_aliases,
            select: Box::new(select),
        })
    }

    fn try_parse_column_aliases(&mut self) -> Result<Option<Vec<Ident>>, SqlError> {
        if !self.peek_kind(TokenType::LeftParen) {
            return Ok(None);
        }
        self.expect(TokenType::LeftParen)?;
        let mut aliases = vec![self.parse_ident()?];
        while self.try_consume(TokenType::Comma).is_some() {
            aliases.push(self.parse_ident()?);
        }
        self.expect(TokenType::RightParen)?;
        Ok(Some(aliases))
    }
}
