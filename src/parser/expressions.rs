/*!
# Scalar Expression Parsing

Column-expression parsing for SELECT lists, predicates, and the various
column lists (GROUP BY, LIMIT BY ... BY, ON, USING, PARTITION BY). The
grammar engine treats this layer as a collaborator: every function here
returns an AST node carrying its own exact span, or an error.

## Precedence

Standard recursive descent ladder, lowest first:

```text
OR → AND → NOT → comparison / IS / IN / BETWEEN / LIKE → || →
additive → multiplicative → unary minus → primary
```

Primary expressions are literals, column references (optionally qualified),
function calls, the `*` projection, and parenthesized expressions. A
parenthesized expression always becomes a [`TupleExpr`](crate::ast::TupleExpr)
so its span covers the parentheses; a fully parenthesized column list such as
`GROUP BY (a, b)` therefore reaches the AST as a single tuple item.
*/

use super::common::TokenParser;
use super::lexer::TokenType;
use crate::ast::*;
use crate::error::SqlError;

impl TokenParser {
    /// Entry point for expression parsing.
    pub fn parse_expression(&mut self) -> Result<Expr, SqlError> {
        self.parse_or()
    }

    fn parse_or(&mut self) -> Result<Expr, SqlError> {
        let mut left = self.parse_and()?;
        while self.try_consume(TokenType::Or).is_some() {
            let right = self.parse_and()?;
            left = Expr::Binary(BinaryExpr {
                left: Box::new(left),
                op: BinaryOperator::Or,
                right: Box::new(right),
            });
        }
        Ok(left)
    }

    fn parse_and(&mut self) -> Result<Expr, SqlError> {
        let mut left = self.parse_not()?;
        while self.try_consume(TokenType::And).is_some() {
            let right = self.parse_not()?;
            left = Expr::Binary(BinaryExpr {
                left: Box::new(left),
                op: BinaryOperator::And,
                right: Box::new(right),
            });
        }
        Ok(left)
    }

    fn parse_not(&mut self) -> Result<Expr, SqlError> {
        if let Some(token) = self.try_consume(TokenType::Not) {
            let expr = self.parse_not()?;
            return Ok(Expr::Unary(UnaryExpr {
                pos: token.position,
                op: UnaryOperator::Not,
                expr: Box::new(expr),
            }));
        }
        self.parse_comparison()
    }

    /// Comparison operators plus the IS / IN / BETWEEN / LIKE forms, all at
    /// one precedence level.
    fn parse_comparison(&mut self) -> Result<Expr, SqlError> {
        let mut left = self.parse_concat()?;

        loop {
            let op = match self.current_token().token_type {
                TokenType::Equal => Some(BinaryOperator::Eq),
                TokenType::NotEqual => Some(BinaryOperator::NotEq),
                TokenType::LessThan => Some(BinaryOperator::Lt),
                TokenType::GreaterThan => Some(BinaryOperator::Gt),
                TokenType::LessThanOrEqual => Some(BinaryOperator::LtEq),
                TokenType::GreaterThanOrEqual => Some(BinaryOperator::GtEq),
                _ => None,
            };
            if let Some(op) = op {
                self.advance();
                let right = self.parse_concat()?;
                left = Expr::Binary(BinaryExpr {
                    left: Box::new(left),
                    op,
                    right: Box::new(right),
                });
                continue;
            }

            match self.current_token().token_type {
                TokenType::Is => {
                    self.advance();
                    let negated = self.try_consume(TokenType::Not).is_some();
                    self.expect_keyword(TokenType::Null)?;
                    left = Expr::IsNull(IsNullExpr {
                        expr: Box::new(left),
                        negated,
                        end: self.last_end(),
                    });
                }
                TokenType::In => {
                    self.advance();
                    left = self.parse_in_list(left, false)?;
                }
                TokenType::Like => {
                    self.advance();
                    let pattern = self.parse_concat()?;
                    left = Expr::Binary(BinaryExpr {
                        left: Box::new(left),
                        op: BinaryOperator::Like,
                        right: Box::new(pattern),
                    });
                }
                TokenType::Between => {
                    self.advance();
                    left = self.parse_between(left, false)?;
                }
                TokenType::Not => {
                    // infix NOT must introduce NOT IN, NOT LIKE or NOT BETWEEN
                    self.advance();
                    match self.current_token().token_type {
                        TokenType::In => {
                            self.advance();
                            left = self.parse_in_list(left, true)?;
                        }
                        TokenType::Like => {
                            self.advance();
                            let pattern = self.parse_concat()?;
                            left = Expr::Binary(BinaryExpr {
                                left: Box::new(left),
                                op: BinaryOperator::NotLike,
                                right: Box::new(pattern),
                            });
                        }
                        TokenType::Between => {
                            self.advance();
                            left = self.parse_between(left, true)?;
                        }
                        _ => {
                            return Err(self.unexpected("IN, LIKE or BETWEEN after NOT"));
                        }
                    }
                }
                _ => break,
            }
        }

        Ok(left)
    }

    fn parse_in_list(&mut self, left: Expr, negated: bool) -> Result<Expr, SqlError> {
        self.expect(TokenType::LeftParen)?;
        let mut items = vec![self.parse_expression()?];
        while self.try_consume(TokenType::Comma).is_some() {
            items.push(self.parse_expression()?);
        }
        self.expect(TokenType::RightParen)?;
        Ok(Expr::InList(InListExpr {
            expr: Box::new(left),
            negated,
            items,
            end: self.last_end(),
        }))
    }

    fn parse_between(&mut self, left: Expr, negated: bool) -> Result<Expr, SqlError> {
        let low = self.parse_concat()?;
        self.expect_keyword(TokenType::And)?;
        let high = self.parse_concat()?;
        Ok(Expr::Between(BetweenExpr {
            expr: Box::new(left),
            negated,
            low: Box::new(low),
            high: Box::new(high),
        }))
    }

    fn parse_concat(&mut self) -> Result<Expr, SqlError> {
        let mut left = self.parse_additive()?;
        while self.try_consume(TokenType::Concat).is_some() {
            let right = self.parse_additive()?;
            left = Expr::Binary(BinaryExpr {
                left: Box::new(left),
                op: BinaryOperator::Concat,
                right: Box::new(right),
            });
        }
        Ok(left)
    }

    fn parse_additive(&mut self) -> Result<Expr, SqlError> {
        let mut left = self.parse_multiplicative()?;
        loop {
            let op = match self.current_token().token_type {
                TokenType::Plus => BinaryOperator::Plus,
                TokenType::Minus => BinaryOperator::Minus,
                _ => break,
            };
            self.advance();
            let right = self.parse_multiplicative()?;
            left = Expr::Binary(BinaryExpr {
                left: Box::new(left),
                op,
                right: Box::new(right),
            });
        }
        Ok(left)
    }

    fn parse_multiplicative(&mut self) -> Result<Expr, SqlError> {
        let mut left = self.parse_unary()?;
        loop {
            let op = match self.current_token().token_type {
                TokenType::Asterisk => BinaryOperator::Multiply,
                TokenType::Divide => BinaryOperator::Divide,
                TokenType::Modulo => BinaryOperator::Modulo,
                _ => break,
            };
            self.advance();
            let right = self.parse_unary()?;
            left = Expr::Binary(BinaryExpr {
                left: Box::new(left),
                op,
                right: Box::new(right),
            });
        }
        Ok(left)
    }

    fn parse_unary(&mut self) -> Result<Expr, SqlError> {
        if let Some(token) = self.try_consume(TokenType::Minus) {
            let expr = self.parse_unary()?;
            return Ok(Expr::Unary(UnaryExpr {
                pos: token.position,
                op: UnaryOperator::Minus,
                expr: Box::new(expr),
            }));
        }
        self.parse_primary()
    }

    fn parse_primary(&mut self) -> Result<Expr, SqlError> {
        match self.current_token().token_type {
            TokenType::Number => Ok(Expr::Number(self.parse_number()?)),
            TokenType::String => {
                let token = self.expect(TokenType::String)?;
                Ok(Expr::String(StringLiteral {
                    pos: token.position,
                    end: token.end,
                    value: token.value,
                }))
            }
            TokenType::Asterisk => {
                let token = self.expect(TokenType::Asterisk)?;
                Ok(Expr::Asterisk(AsteriskExpr {
                    pos: token.position,
                }))
            }
            TokenType::Identifier => {
                let first = self.parse_ident()?;
                if self.try_consume(TokenType::Dot).is_some() {
                    let name = self.parse_ident()?;
                    return Ok(Expr::Column(ColumnRef {
                        qualifier: Some(first),
                        name,
                    }));
                }
                if self.peek_kind(TokenType::LeftParen) {
                    let (args, end) = self.parse_paren_arg_list()?;
                    return Ok(Expr::Function(FunctionExpr {
                        name: first,
                        args,
                        end,
                    }));
                }
                Ok(Expr::Column(ColumnRef {
                    qualifier: None,
                    name: first,
                }))
            }
            TokenType::LeftParen => {
                self.descend()?;
                let lparen = self.expect(TokenType::LeftParen)?;
                let mut items = vec![self.parse_expression()?];
                while self.try_consume(TokenType::Comma).is_some() {
                    items.push(self.parse_expression()?);
                }
                self.expect(TokenType::RightParen)?;
                self.ascend();
                Ok(Expr::Tuple(TupleExpr {
                    pos: lparen.position,
                    end: self.last_end(),
                    items,
                }))
            }
            _ => Err(self.unexpected("expression")),
        }
    }

    /// A parenthesized argument list, possibly empty: `()` or `(a, b * 2)`.
    /// Returns the arguments and the offset one past the closing
    /// parenthesis.
    fn parse_paren_arg_list(&mut self) -> Result<(Vec<Expr>, Pos), SqlError> {
        self.expect(TokenType::LeftParen)?;
        let mut args = Vec::new();
        if !self.peek_kind(TokenType::RightParen) {
            args.push(self.parse_expression()?);
            while self.try_consume(TokenType::Comma).is_some() {
                args.push(self.parse_expression()?);
            }
        }
        self.expect(TokenType::RightParen)?;
        Ok((args, self.last_end()))
    }

    /// One item of a column list: an expression with an optional `AS alias`.
    fn parse_column_expr_item(&mut self) -> Result<Expr, SqlError> {
        let expr = self.parse_expression()?;
        if self.try_consume(TokenType::As).is_some() {
            let alias = self.parse_ident()?;
            return Ok(Expr::Alias(Box::new(AliasExpr { expr, alias })));
        }
        Ok(expr)
    }

    /// A non-empty, comma-separated column expression list. A fully
    /// parenthesized list arrives as one tuple item.
    pub fn parse_column_expr_list(&mut self) -> Result<ColumnExprList, SqlError> {
        let pos = self.current_position();
        let mut items = vec![self.parse_column_expr_item()?];
        while self.try_consume(TokenType::Comma).is_some() {
            items.push(self.parse_column_expr_item()?);
        }
        Ok(ColumnExprList {
            pos,
            end: self.last_end(),
            items,
        })
    }

    /// A mandatory parenthesized expression list, used for CUBE/ROLLUP
    /// grouping arguments. The span covers the parentheses.
    pub fn parse_function_params(&mut self) -> Result<ColumnExprList, SqlError> {
        let lparen = self.expect(TokenType::LeftParen)?;
        let mut items = vec![self.parse_expression()?];
        while self.try_consume(TokenType::Comma).is_some() {
            items.push(self.parse_expression()?);
        }
        self.expect(TokenType::RightParen)?;
        Ok(ColumnExprList {
            pos: lparen.position,
            end: self.last_end(),
            items,
        })
    }

    pub fn parse_ident(&mut self) -> Result<Ident, SqlError> {
        let token = self.expect(TokenType::Identifier)?;
        Ok(Ident {
            pos: token.position,
            end: token.end,
            name: token.value,
        })
    }

    pub fn parse_number(&mut self) -> Result<NumberLiteral, SqlError> {
        let token = self.expect(TokenType::Number)?;
        Ok(NumberLiteral {
            pos: token.position,
            end: token.end,
            text: token.value,
        })
    }

    /// A numeric literal in a ratio context (SAMPLE). Integers and decimals
    /// are both accepted.
    pub fn parse_float(&mut self) -> Result<FloatLiteral, SqlError> {
        let token = self.expect(TokenType::Number)?;
        Ok(FloatLiteral {
            pos: token.position,
            end: token.end,
            text: token.value,
        })
    }

    /// A possibly database-qualified table name: `t` or `db.t`.
    pub fn parse_table_identifier(&mut self) -> Result<TableIdentifier, SqlError> {
        let first = self.parse_ident()?;
        if self.try_consume(TokenType::Dot).is_some() {
            let table = self.parse_ident()?;
            return Ok(TableIdentifier {
                database: Some(first),
                table,
            });
        }
        Ok(TableIdentifier {
            database: None,
            table: first,
        })
    }

    /// The argument list of a table-valued function. May be empty.
    pub fn parse_table_arg_list(&mut self) -> Result<(Vec<Expr>, Pos), SqlError> {
        self.parse_paren_arg_list()
    }

    /// `ORDER BY expr [ASC|DESC], ...`
    pub fn parse_order_by_expr_list(&mut self) -> Result<OrderByExprList, SqlError> {
        let order = self.expect_keyword(TokenType::Order)?;
        self.expect_keyword(TokenType::By)?;

        let mut items = Vec::new();
        loop {
            let expr = self.parse_expression()?;
            let direction = if self.try_consume(TokenType::Asc).is_some() {
                OrderDirection::Asc
            } else if self.try_consume(TokenType::Desc).is_some() {
                OrderDirection::Desc
            } else {
                OrderDirection::Asc
            };
            items.push(OrderByExpr {
                expr,
                direction,
                end: self.last_end(),
            });

            if self.try_consume(TokenType::Comma).is_none() {
                break;
            }
        }

        Ok(OrderByExprList {
            order_pos: order.position,
            end: self.last_end(),
            items,
        })
    }

    /// `SETTINGS name = value, ...` where value is a number, string, or
    /// identifier.
    pub fn parse_settings_expr_list(&mut self) -> Result<SettingsExprList, SqlError> {
        let settings = self.expect_keyword(TokenType::Settings)?;

        let mut items = Vec::new();
        loop {
            let name = self.parse_ident()?;
            self.expect(TokenType::Equal)?;
            let value = match self.current_token().token_type {
                TokenType::Number => Expr::Number(self.parse_number()?),
                TokenType::String => {
                    let token = self.expect(TokenType::String)?;
                    Expr::String(StringLiteral {
                        pos: token.position,
                        end: token.end,
                        value: token.value,
                    })
                }
                TokenType::Identifier => Expr::Column(ColumnRef {
                    qualifier: None,
                    name: self.parse_ident()?,
                }),
                _ => return Err(self.unexpected("number, string or identifier")),
            };
            items.push(SettingsExpr { name, value });

            if self.try_consume(TokenType::Comma).is_none() {
                break;
            }
        }

        Ok(SettingsExprList {
            settings_pos: settings.position,
            end: self.last_end(),
            items,
        })
    }

    /// `PARTITION BY column, ...` inside a window condition.
    pub fn parse_partition_by_expr(&mut self) -> Result<PartitionByExpr, SqlError> {
        let partition = self.expect_keyword(TokenType::Partition)?;
        self.expect_keyword(TokenType::By)?;
        let expr = self.parse_column_expr_list()?;
        Ok(PartitionByExpr {
            partition_pos: partition.position,
            expr,
        })
    }
}
