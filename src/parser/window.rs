/*!
# WINDOW Clause and Frame Bound Parsing

Handles named window definitions (`WINDOW w AS (PARTITION BY ... ORDER BY
... frame)`) and the window frame grammar.

## Frame grammar

```text
frame       := (ROWS | RANGE) bound
bound       := BETWEEN bound AND bound
             | CURRENT ROW
             | UNBOUNDED (PRECEDING | FOLLOWING)
             | <integer> (PRECEDING | FOLLOWING)
```

The ROWS/RANGE prefix belongs to the top-level frame only; the recursive
bounds inside BETWEEN never carry one. Any other lookahead in bound position
is a hard error naming the four accepted alternatives.
*/

use super::common::TokenParser;
use super::lexer::TokenType;
use crate::ast::*;
use crate::error::SqlError;

impl TokenParser {
    pub fn try_parse_window_expr(&mut self) -> Result<Option<WindowExpr>, SqlError> {
        if !self.peek_kind(TokenType::Window) {
            return Ok(None);
        }
        self.parse_window_expr().map(Some)
    }

    /// `WINDOW name AS (condition)`
    fn parse_window_expr(&mut self) -> Result<WindowExpr, SqlError> {
        let window = self.expect_keyword(TokenType::Window)?;
        let name = self.parse_ident()?;
        self.expect_keyword(TokenType::As)?;
        let condition = self.parse_window_condition()?;
        Ok(WindowExpr {
            window_pos: window.position,
            name,
            condition,
        })
    }

    /// The parenthesized window body: `([PARTITION BY ...] [ORDER BY ...]
    /// [frame])`. All three parts are optional.
    fn parse_window_condition(&mut self) -> Result<WindowConditionExpr, SqlError> {
        let lparen = self.expect(TokenType::LeftParen)?;

        let partition_by = if self.peek_kind(TokenType::Partition) {
            Some(self.parse_partition_by_expr()?)
        } else {
            None
        };
        let order_by = self.try_parse_order_by_expr_list()?;
        let frame = self.try_parse_window_frame_expr()?;

        self.expect(TokenType::RightParen)?;
        Ok(WindowConditionExpr {
            lparen_pos: lparen.position,
            rparen_end: self.last_end(),
            partition_by,
            order_by,
            frame,
        })
    }

    pub fn try_parse_window_frame_expr(&mut self) -> Result<Option<WindowFrameExpr>, SqlError> {
        if !self.peek_kind(TokenType::Rows) && !self.peek_kind(TokenType::Range) {
            return Ok(None);
        }
        self.parse_window_frame_expr().map(Some)
    }

    fn parse_window_frame_expr(&mut self) -> Result<WindowFrameExpr, SqlError> {
        let frame_pos = self.current_position();
        let frame_type = if self.try_consume(TokenType::Rows).is_some() {
            Some(WindowFrameType::Rows)
        } else if self.try_consume(TokenType::Range).is_some() {
            Some(WindowFrameType::Range)
        } else {
            None
        };
        let extend = self.parse_window_frame_bound()?;
        Ok(WindowFrameExpr {
            frame_pos,
            frame_type,
            extend,
        })
    }

    /// A bound inside BETWEEN: the frame grammar without a ROWS/RANGE
    /// prefix.
    fn parse_inner_frame_expr(&mut self) -> Result<WindowFrameExpr, SqlError> {
        let frame_pos = self.current_position();
        let extend = self.parse_window_frame_bound()?;
        Ok(WindowFrameExpr {
            frame_pos,
            frame_type: None,
            extend,
        })
    }

    fn parse_window_frame_bound(&mut self) -> Result<WindowFrameBound, SqlError> {
        match self.current_token().token_type {
            TokenType::Between => {
                let between = self.expect_keyword(TokenType::Between)?;
                self.descend()?;
                let low = self.parse_inner_frame_expr()?;
                let and = self.expect_keyword(TokenType::And)?;
                let high = self.parse_inner_frame_expr()?;
                self.ascend();
                Ok(WindowFrameBound::Between(WindowFrameBetween {
                    between_pos: between.position,
                    low: Box::new(low),
                    and_pos: and.position,
                    high: Box::new(high),
                }))
            }
            TokenType::Current => {
                let current = self.expect_keyword(TokenType::Current)?;
                self.expect_keyword(TokenType::Row)?;
                Ok(WindowFrameBound::CurrentRow {
                    current_pos: current.position,
                    end: self.last_end(),
                })
            }
            TokenType::Unbounded => {
                let unbounded = self.expect_keyword(TokenType::Unbounded)?;
                let direction = self.parse_frame_direction()?;
                Ok(WindowFrameBound::Unbounded {
                    pos: unbounded.position,
                    end: self.last_end(),
                    direction,
                })
            }
            TokenType::Number => {
                let number = self.parse_number()?;
                let direction = self.parse_frame_direction()?;
                Ok(WindowFrameBound::Number {
                    number,
                    direction,
                    end: self.last_end(),
                })
            }
            _ => Err(SqlError::malformed(
                format!(
                    "expected BETWEEN, CURRENT ROW, UNBOUNDED or an integer frame bound, found {}",
                    self.current_token().describe()
                ),
                self.current_position(),
            )),
        }
    }

    fn parse_frame_direction(&mut self) -> Result<FrameDirection, SqlError> {
        if self.try_consume(TokenType::Preceding).is_some() {
            Ok(FrameDirection::Preceding)
        } else if self.try_consume(TokenType::Following).is_some() {
            Ok(FrameDirection::Following)
        } else {
            Err(SqlError::malformed(
                format!(
                    "expected PRECEDING or FOLLOWING, found {}",
                    self.current_token().describe()
                ),
                self.current_position(),
            ))
        }
    }
}
