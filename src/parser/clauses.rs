/*!
# Optional SELECT Clause Parsing

One try/parse pair per optional clause. The `try_parse_*` wrappers peek at
the clause's introducing keyword and return `Ok(None)` when it is absent;
the `parse_*` functions demand the clause and fail otherwise. The statement
orchestrator only ever calls the try variants, in fixed grammar order.
*/

use super::common::TokenParser;
use super::lexer::TokenType;
use crate::ast::*;
use crate::error::SqlError;

impl TokenParser {
    pub fn try_parse_top_expr(&mut self) -> Result<Option<TopExpr>, SqlError> {
        if !self.peek_kind(TokenType::Top) {
            return Ok(None);
        }
        self.parse_top_expr().map(Some)
    }

    /// `TOP n [WITH TIES]`
    fn parse_top_expr(&mut self) -> Result<TopExpr, SqlError> {
        let top = self.expect_keyword(TokenType::Top)?;
        let number = self.parse_number()?;
        let mut end = number.end;

        let mut with_ties = false;
        if self.try_consume(TokenType::With).is_some() {
            self.expect_keyword(TokenType::Ties)?;
            end = self.last_end();
            with_ties = true;
        }

        Ok(TopExpr {
            top_pos: top.position,
            end,
            number,
            with_ties,
        })
    }

    pub fn try_parse_from_expr(&mut self) -> Result<Option<FromExpr>, SqlError> {
        if !self.peek_kind(TokenType::From) {
            return Ok(None);
        }
        self.parse_from_expr().map(Some)
    }

    fn parse_from_expr(&mut self) -> Result<FromExpr, SqlError> {
        let from = self.expect_keyword(TokenType::From)?;
        let expr = self.parse_join_expr()?;
        Ok(FromExpr {
            from_pos: from.position,
            expr,
        })
    }

    pub fn try_parse_array_join_expr(&mut self) -> Result<Option<ArrayJoinExpr>, SqlError> {
        if !self.peek_kind(TokenType::Left)
            && !self.peek_kind(TokenType::Inner)
            && !self.peek_kind(TokenType::Array)
        {
            return Ok(None);
        }
        self.parse_array_join_expr().map(Some)
    }

    /// `[LEFT | INNER] ARRAY JOIN columns`
    fn parse_array_join_expr(&mut self) -> Result<ArrayJoinExpr, SqlError> {
        let pos = self.current_position();
        let kind = if self.try_consume(TokenType::Left).is_some() {
            ArrayJoinKind::Left
        } else if self.try_consume(TokenType::Inner).is_some() {
            ArrayJoinKind::Inner
        } else {
            ArrayJoinKind::Plain
        };

        self.expect_keyword(TokenType::Array)?;
        self.expect_keyword(TokenType::Join)?;
        let expr = self.parse_column_expr_list()?;

        Ok(ArrayJoinExpr { pos, kind, expr })
    }

    pub fn try_parse_prewhere_expr(&mut self) -> Result<Option<PrewhereExpr>, SqlError> {
        if !self.peek_kind(TokenType::Prewhere) {
            return Ok(None);
        }
        let prewhere = self.expect_keyword(TokenType::Prewhere)?;
        let expr = self.parse_expression()?;
        Ok(Some(PrewhereExpr {
            prewhere_pos: prewhere.position,
            expr,
        }))
    }

    pub fn try_parse_where_expr(&mut self) -> Result<Option<WhereExpr>, SqlError> {
        if !self.peek_kind(TokenType::Where) {
            return Ok(None);
        }
        let where_token = self.expect_keyword(TokenType::Where)?;
        let expr = self.parse_expression()?;
        Ok(Some(WhereExpr {
            where_pos: where_token.position,
            expr,
        }))
    }

    pub fn try_parse_having_expr(&mut self) -> Result<Option<HavingExpr>, SqlError> {
        if !self.peek_kind(TokenType::Having) {
            return Ok(None);
        }
        let having = self.expect_keyword(TokenType::Having)?;
        let expr = self.parse_expression()?;
        Ok(Some(HavingExpr {
            having_pos: having.position,
            expr,
        }))
    }

    pub fn try_parse_group_by_expr(&mut self) -> Result<Option<GroupByExpr>, SqlError> {
        if !self.peek_kind(TokenType::Group) {
            return Ok(None);
        }
        self.parse_group_by_expr().map(Some)
    }

    /// `GROUP BY {CUBE(args) | ROLLUP(args) | columns} [WITH CUBE] [WITH
    /// ROLLUP] [WITH TOTALS]`
    ///
    /// The trailing modifiers may appear any number of times in any order;
    /// each occurrence sets its flag. An unknown keyword after WITH is a
    /// hard error.
    fn parse_group_by_expr(&mut self) -> Result<GroupByExpr, SqlError> {
        let group = self.expect_keyword(TokenType::Group)?;
        self.expect_keyword(TokenType::By)?;

        let (aggregate_type, expr) = if self.try_consume(TokenType::Cube).is_some() {
            (AggregateType::Cube, self.parse_function_params()?)
        } else if self.try_consume(TokenType::Rollup).is_some() {
            (AggregateType::Rollup, self.parse_function_params()?)
        } else {
            (AggregateType::None, self.parse_column_expr_list()?)
        };

        let mut with_cube = false;
        let mut with_rollup = false;
        let mut with_totals = false;
        while self.try_consume(TokenType::With).is_some() {
            if self.try_consume(TokenType::Cube).is_some() {
                with_cube = true;
            } else if self.try_consume(TokenType::Rollup).is_some() {
                with_rollup = true;
            } else if self.try_consume(TokenType::Totals).is_some() {
                with_totals = true;
            } else {
                return Err(SqlError::malformed(
                    format!(
                        "expected CUBE, ROLLUP or TOTALS after WITH, found {}",
                        self.current_token().describe()
                    ),
                    self.current_position(),
                ));
            }
        }

        Ok(GroupByExpr {
            group_pos: group.position,
            end: self.last_end(),
            aggregate_type,
            expr,
            with_cube,
            with_rollup,
            with_totals,
        })
    }

    pub fn try_parse_limit_by_expr(&mut self) -> Result<Option<LimitByExpr>, SqlError> {
        if !self.peek_kind(TokenType::Limit) {
            return Ok(None);
        }
        self.parse_limit_by_expr().map(Some)
    }

    /// `LIMIT n [OFFSET m | , n] [BY columns]`
    ///
    /// The comma spelling reverses the roles: the expression parsed first is
    /// the offset and the one after the comma is the limit.
    fn parse_limit_by_expr(&mut self) -> Result<LimitByExpr, SqlError> {
        let limit_token = self.expect_keyword(TokenType::Limit)?;

        let mut limit = self.parse_expression()?;
        let mut offset = None;
        if self.try_consume(TokenType::Offset).is_some() {
            offset = Some(self.parse_expression()?);
        } else if self.try_consume(TokenType::Comma).is_some() {
            let second = self.parse_expression()?;
            offset = Some(std::mem::replace(&mut limit, second));
        }

        let by = if self.try_consume(TokenType::By).is_some() {
            Some(self.parse_column_expr_list()?)
        } else {
            None
        };

        Ok(LimitByExpr {
            limit_pos: limit_token.position,
            end: self.last_end(),
            limit,
            offset,
            by,
        })
    }

    pub fn try_parse_order_by_expr_list(&mut self) -> Result<Option<OrderByExprList>, SqlError> {
        if !self.peek_kind(TokenType::Order) {
            return Ok(None);
        }
        self.parse_order_by_expr_list().map(Some)
    }

    pub fn try_parse_settings_expr_list(&mut self) -> Result<Option<SettingsExprList>, SqlError> {
        if !self.peek_kind(TokenType::Settings) {
            return Ok(None);
        }
        self.parse_settings_expr_list().map(Some)
    }
}
