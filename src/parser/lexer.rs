/*!
Tokenization for the SELECT dialect.

Converts SQL text into a flat token stream. Keywords are matched
case-insensitively through an uppercase lookup table; every token records its
start and end byte offsets so the parser can compute exact spans for AST
nodes. Comments (`--` and `/* ... */`) are skipped.
*/

use crate::error::SqlError;
use std::collections::HashMap;

/// Token types recognized by the lexer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenType {
    // Statement keywords
    Select,
    Distinct,
    Top,
    Ties,
    From,
    Final,
    Sample,
    Offset,
    Global,
    Local,
    Prewhere,
    Where,
    Group,
    By,
    Having,
    Order,
    Limit,
    Settings,
    With,
    As,
    Union,
    All,

    // Join keywords
    Any,
    Cross,
    Inner,
    Left,
    Right,
    Full,
    Outer,
    Semi,
    Anti,
    Asof,
    Join,
    On,
    Using,

    // Grouping modifiers
    Cube,
    Rollup,
    Totals,

    // Window keywords
    Window,
    Partition,
    Rows,
    Range,
    Between,
    Current,
    Row,
    Unbounded,
    Preceding,
    Following,

    // Expression keywords
    And,
    Or,
    Not,
    Is,
    In,
    Like,
    Null,
    Array,
    Asc,
    Desc,

    // Literals and identifiers
    Identifier,
    Number,
    String,

    // Punctuation
    LeftParen,
    RightParen,
    Comma,
    Dot,
    Semicolon,
    Asterisk,

    // Operators
    Plus,
    Minus,
    Divide,
    Modulo,
    Concat,
    Equal,
    NotEqual,
    LessThan,
    LessThanOrEqual,
    GreaterThan,
    GreaterThanOrEqual,

    Eof,
}

/// A token with its type, source text, and byte span.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub token_type: TokenType,
    /// Original text of the token. String literals have quotes stripped.
    pub value: String,
    /// Byte offset of the first character.
    pub position: usize,
    /// Byte offset one past the last character.
    pub end: usize,
}

impl Token {
    /// Rendering of the token for error messages.
    pub fn describe(&self) -> String {
        match self.token_type {
            TokenType::Eof => "end of input".to_string(),
            _ => format!("'{}'", self.value),
        }
    }
}

/// Build the keyword lookup table for token classification.
pub(super) fn build_keywords() -> HashMap<String, TokenType> {
    let pairs = [
        ("SELECT", TokenType::Select),
        ("DISTINCT", TokenType::Distinct),
        ("TOP", TokenType::Top),
        ("TIES", TokenType::Ties),
        ("FROM", TokenType::From),
        ("FINAL", TokenType::Final),
        ("SAMPLE", TokenType::Sample),
        ("OFFSET", TokenType::Offset),
        ("GLOBAL", TokenType::Global),
        ("LOCAL", TokenType::Local),
        ("PREWHERE", TokenType::Prewhere),
        ("WHERE", TokenType::Where),
        ("GROUP", TokenType::Group),
        ("BY", TokenType::By),
        ("HAVING", TokenType::Having),
        ("ORDER", TokenType::Order),
        ("LIMIT", TokenType::Limit),
        ("SETTINGS", TokenType::Settings),
        ("WITH", TokenType::With),
        ("AS", TokenType::As),
        ("UNION", TokenType::Union),
        ("ALL", TokenType::All),
        ("ANY", TokenType::Any),
        ("CROSS", TokenType::Cross),
        ("INNER", TokenType::Inner),
        ("LEFT", TokenType::Left),
        ("RIGHT", TokenType::Right),
        ("FULL", TokenType::Full),
        ("OUTER", TokenType::Outer),
        ("SEMI", TokenType::Semi),
        ("ANTI", TokenType::Anti),
        ("ASOF", TokenType::Asof),
        ("JOIN", TokenType::Join),
        ("ON", TokenType::On),
        ("USING", TokenType::Using),
        ("CUBE", TokenType::Cube),
        ("ROLLUP", TokenType::Rollup),
        ("TOTALS", TokenType::Totals),
        ("WINDOW", TokenType::Window),
        ("PARTITION", TokenType::Partition),
        ("ROWS", TokenType::Rows),
        ("RANGE", TokenType::Range),
        ("BETWEEN", TokenType::Between),
        ("CURRENT", TokenType::Current),
        ("ROW", TokenType::Row),
        ("UNBOUNDED", TokenType::Unbounded),
        ("PRECEDING", TokenType::Preceding),
        ("FOLLOWING", TokenType::Following),
        ("AND", TokenType::And),
        ("OR", TokenType::Or),
        ("NOT", TokenType::Not),
        ("IS", TokenType::Is),
        ("IN", TokenType::In),
        ("LIKE", TokenType::Like),
        ("NULL", TokenType::Null),
        ("ARRAY", TokenType::Array),
        ("ASC", TokenType::Asc),
        ("DESC", TokenType::Desc),
    ];
    pairs
        .into_iter()
        .map(|(kw, tt)| (kw.to_string(), tt))
        .collect()
}

/// Tokenize SQL text into a vector of tokens ending with an Eof marker.
pub(super) fn tokenize(
    sql: &str,
    keywords: &HashMap<String, TokenType>,
) -> Result<Vec<Token>, SqlError> {
    let mut tokens = Vec::new();
    let mut chars = sql.chars().peekable();
    let mut position = 0;

    let mut push = |token_type, value: &str, position: usize, end: usize| {
        tokens.push(Token {
            token_type,
            value: value.to_string(),
            position,
            end,
        });
    };

    while let Some(&ch) = chars.peek() {
        match ch {
            ' ' | '\t' | '\n' | '\r' => {
                chars.next();
                position += 1;
            }
            '(' => {
                push(TokenType::LeftParen, "(", position, position + 1);
                chars.next();
                position += 1;
            }
            ')' => {
                push(TokenType::RightParen, ")", position, position + 1);
                chars.next();
                position += 1;
            }
            ',' => {
                push(TokenType::Comma, ",", position, position + 1);
                chars.next();
                position += 1;
            }
            '.' => {
                push(TokenType::Dot, ".", position, position + 1);
                chars.next();
                position += 1;
            }
            ';' => {
                push(TokenType::Semicolon, ";", position, position + 1);
                chars.next();
                position += 1;
            }
            '*' => {
                // The parser decides between wildcard and multiplication.
                push(TokenType::Asterisk, "*", position, position + 1);
                chars.next();
                position += 1;
            }
            '+' => {
                push(TokenType::Plus, "+", position, position + 1);
                chars.next();
                position += 1;
            }
            '%' => {
                push(TokenType::Modulo, "%", position, position + 1);
                chars.next();
                position += 1;
            }
            '-' => {
                let start = position;
                chars.next();
                position += 1;
                if let Some(&'-') = chars.peek() {
                    // line comment, skip to end of line
                    for c in chars.by_ref() {
                        position += c.len_utf8();
                        if c == '\n' {
                            break;
                        }
                    }
                } else {
                    push(TokenType::Minus, "-", start, start + 1);
                }
            }
            '/' => {
                let start = position;
                chars.next();
                position += 1;
                if let Some(&'*') = chars.peek() {
                    chars.next();
                    position += 1;
                    let mut terminated = false;
                    while let Some(c) = chars.next() {
                        position += c.len_utf8();
                        if c == '*' {
                            if let Some(&'/') = chars.peek() {
                                chars.next();
                                position += 1;
                                terminated = true;
                                break;
                            }
                        }
                    }
                    if !terminated {
                        return Err(SqlError::lexical("unterminated block comment", start));
                    }
                } else {
                    push(TokenType::Divide, "/", start, start + 1);
                }
            }
            '=' => {
                push(TokenType::Equal, "=", position, position + 1);
                chars.next();
                position += 1;
            }
            '<' => {
                let start = position;
                chars.next();
                position += 1;
                if let Some(&'=') = chars.peek() {
                    chars.next();
                    position += 1;
                    push(TokenType::LessThanOrEqual, "<=", start, start + 2);
                } else if let Some(&'>') = chars.peek() {
                    chars.next();
                    position += 1;
                    push(TokenType::NotEqual, "<>", start, start + 2);
                } else {
                    push(TokenType::LessThan, "<", start, start + 1);
                }
            }
            '>' => {
                let start = position;
                chars.next();
                position += 1;
                if let Some(&'=') = chars.peek() {
                    chars.next();
                    position += 1;
                    push(TokenType::GreaterThanOrEqual, ">=", start, start + 2);
                } else {
                    push(TokenType::GreaterThan, ">", start, start + 1);
                }
            }
            '!' => {
                let start = position;
                chars.next();
                position += 1;
                if let Some(&'=') = chars.peek() {
                    chars.next();
                    position += 1;
                    push(TokenType::NotEqual, "!=", start, start + 2);
                } else {
                    return Err(SqlError::lexical(
                        "unexpected character '!', did you mean '!='?",
                        start,
                    ));
                }
            }
            '|' => {
                let start = position;
                chars.next();
                position += 1;
                if let Some(&'|') = chars.peek() {
                    chars.next();
                    position += 1;
                    push(TokenType::Concat, "||", start, start + 2);
                } else {
                    return Err(SqlError::lexical(
                        "unexpected character '|', did you mean '||'?",
                        start,
                    ));
                }
            }
            '\'' => {
                let start = position;
                chars.next();
                position += 1;
                let mut value = String::new();
                let mut terminated = false;
                while let Some(&c) = chars.peek() {
                    chars.next();
                    position += c.len_utf8();
                    if c == '\'' {
                        terminated = true;
                        break;
                    }
                    value.push(c);
                }
                if !terminated {
                    return Err(SqlError::lexical("unterminated string literal", start));
                }
                push(TokenType::String, &value, start, position);
            }
            '0'..='9' => {
                let start = position;
                let mut value = String::new();
                let mut has_decimal = false;
                let mut has_exponent = false;

                while let Some(&c) = chars.peek() {
                    if c.is_ascii_digit() {
                        value.push(c);
                        chars.next();
                        position += 1;
                    } else if c == '.' && !has_decimal && !has_exponent {
                        has_decimal = true;
                        value.push(c);
                        chars.next();
                        position += 1;
                    } else if (c == 'e' || c == 'E') && !has_exponent {
                        has_exponent = true;
                        value.push(c);
                        chars.next();
                        position += 1;
                        if let Some(&sign) = chars.peek() {
                            if sign == '+' || sign == '-' {
                                value.push(sign);
                                chars.next();
                                position += 1;
                            }
                        }
                    } else {
                        break;
                    }
                }

                push(TokenType::Number, &value, start, position);
            }
            _ if ch.is_alphabetic() || ch == '_' => {
                let start = position;
                let mut value = String::new();
                while let Some(&c) = chars.peek() {
                    if c.is_alphanumeric() || c == '_' {
                        value.push(c);
                        chars.next();
                        position += c.len_utf8();
                    } else {
                        break;
                    }
                }

                let token_type = keywords
                    .get(&value.to_uppercase())
                    .copied()
                    .unwrap_or(TokenType::Identifier);
                push(token_type, &value, start, position);
            }
            _ => {
                return Err(SqlError::lexical(
                    format!("unexpected character '{}'", ch),
                    position,
                ));
            }
        }
    }

    tokens.push(Token {
        token_type: TokenType::Eof,
        value: String::new(),
        position,
        end: position,
    });

    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lex(sql: &str) -> Vec<Token> {
        tokenize(sql, &build_keywords()).unwrap()
    }

    #[test]
    fn test_keywords_case_insensitive() {
        let tokens = lex("select Select SELECT");
        assert_eq!(tokens.len(), 4);
        for token in &tokens[..3] {
            assert_eq!(token.token_type, TokenType::Select);
        }
        assert_eq!(tokens[3].token_type, TokenType::Eof);
    }

    #[test]
    fn test_spans_cover_source_text() {
        let tokens = lex("SELECT a1, 42");
        assert_eq!(tokens[0].position, 0);
        assert_eq!(tokens[0].end, 6);
        assert_eq!(tokens[1].value, "a1");
        assert_eq!(tokens[1].position, 7);
        assert_eq!(tokens[1].end, 9);
        assert_eq!(tokens[3].value, "42");
        assert_eq!(tokens[3].position, 11);
        assert_eq!(tokens[3].end, 13);
    }

    #[test]
    fn test_number_forms() {
        let tokens = lex("1 3.14 2e10 5E-3");
        let values: Vec<&str> = tokens[..4].iter().map(|t| t.value.as_str()).collect();
        assert_eq!(values, vec!["1", "3.14", "2e10", "5E-3"]);
        for token in &tokens[..4] {
            assert_eq!(token.token_type, TokenType::Number);
        }
    }

    #[test]
    fn test_string_literal_strips_quotes() {
        let tokens = lex("'hello world'");
        assert_eq!(tokens[0].token_type, TokenType::String);
        assert_eq!(tokens[0].value, "hello world");
        assert_eq!(tokens[0].position, 0);
        assert_eq!(tokens[0].end, 13);
    }

    #[test]
    fn test_comments_are_skipped() {
        let tokens = lex("SELECT 1 -- trailing\n/* block */ FROM t");
        let types: Vec<TokenType> = tokens.iter().map(|t| t.token_type).collect();
        assert_eq!(
            types,
            vec![
                TokenType::Select,
                TokenType::Number,
                TokenType::From,
                TokenType::Identifier,
                TokenType::Eof,
            ]
        );
    }

    #[test]
    fn test_operators() {
        let tokens = lex("= != <> < <= > >= || + - / %");
        let types: Vec<TokenType> = tokens[..12].iter().map(|t| t.token_type).collect();
        assert_eq!(
            types,
            vec![
                TokenType::Equal,
                TokenType::NotEqual,
                TokenType::NotEqual,
                TokenType::LessThan,
                TokenType::LessThanOrEqual,
                TokenType::GreaterThan,
                TokenType::GreaterThanOrEqual,
                TokenType::Concat,
                TokenType::Plus,
                TokenType::Minus,
                TokenType::Divide,
                TokenType::Modulo,
            ]
        );
    }

    #[test]
    fn test_unterminated_block_comment_is_error() {
        let result = tokenize("SELECT 1 /* oops", &build_keywords());
        assert!(matches!(result, Err(SqlError::Lexical { .. })));
    }

    #[test]
    fn test_unterminated_string_is_error() {
        let result = tokenize("SELECT 'oops", &build_keywords());
        assert!(matches!(result, Err(SqlError::Lexical { .. })));
    }
}
