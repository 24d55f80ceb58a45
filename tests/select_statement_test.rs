//! Tests for SELECT statement orchestration: clause sequencing, statement
//! end tracking, and the mandatory column list.

use stratum_sql::ast::*;
use stratum_sql::{SqlError, SqlParser, Spanned};

fn parse_one(sql: &str) -> SelectExpr {
    let parser = SqlParser::new();
    let mut list = parser.parse(sql).expect("query should parse");
    assert_eq!(list.items.len(), 1, "expected a single SELECT");
    list.items.remove(0)
}

#[test]
fn test_minimal_select() {
    let select = parse_one("SELECT 1");

    assert_eq!(select.columns.items.len(), 1);
    match &select.columns.items[0] {
        Expr::Number(n) => assert_eq!(n.text, "1"),
        other => panic!("expected number literal, got: {:?}", other),
    }
    assert!(select.with.is_none());
    assert!(select.top.is_none());
    assert!(select.from.is_none());
    assert!(select.array_join.is_none());
    assert!(select.window.is_none());
    assert!(select.prewhere.is_none());
    assert!(select.where_clause.is_none());
    assert!(select.group_by.is_none());
    assert!(select.having.is_none());
    assert!(select.order_by.is_none());
    assert!(select.limit_by.is_none());
    assert!(select.settings.is_none());
    assert_eq!(select.statement_end, 8);
}

#[test]
fn test_all_clauses_in_order() {
    let sql = "SELECT a, b FROM t PREWHERE a > 0 WHERE b < 5 GROUP BY a \
               HAVING count(*) > 1 ORDER BY a DESC LIMIT 10 SETTINGS max_threads = 4";
    let select = parse_one(sql);

    assert_eq!(select.columns.items.len(), 2);
    assert!(select.from.is_some());
    assert!(select.prewhere.is_some());
    assert!(select.where_clause.is_some());
    assert!(select.group_by.is_some());
    assert!(select.having.is_some());
    assert!(select.order_by.is_some());
    assert!(select.limit_by.is_some());
    assert!(select.settings.is_some());
    assert_eq!(select.statement_end, sql.len());
}

#[test]
fn test_distinct_is_consumed_but_not_retained() {
    let select = parse_one("SELECT DISTINCT a FROM t");
    assert_eq!(select.columns.items.len(), 1);
    match &select.columns.items[0] {
        Expr::Column(c) => assert_eq!(c.name.name, "a"),
        other => panic!("expected column reference, got: {:?}", other),
    }
}

#[test]
fn test_statement_end_ignores_trailing_trivia() {
    let select = parse_one("SELECT a FROM t   -- trailing note\n");
    assert_eq!(select.statement_end, "SELECT a FROM t".len());

    let select = parse_one("SELECT a FROM t /* block */  ");
    assert_eq!(select.statement_end, "SELECT a FROM t".len());
}

#[test]
fn test_statement_end_tracks_last_clause() {
    let sql = "SELECT a FROM t WHERE a = 1";
    let select = parse_one(sql);
    assert_eq!(select.statement_end, sql.len());

    let sql = "SELECT a FROM t GROUP BY a WITH TOTALS";
    let select = parse_one(sql);
    assert_eq!(select.statement_end, sql.len());
}

#[test]
fn test_top_with_ties() {
    let sql = "SELECT TOP 5 WITH TIES a FROM t";
    let select = parse_one(sql);

    let top = select.top.expect("TOP clause");
    assert_eq!(top.number.text, "5");
    assert!(top.with_ties);
    assert_eq!(&sql[top.start()..top.end()], "TOP 5 WITH TIES");
}

#[test]
fn test_top_without_ties() {
    let select = parse_one("SELECT TOP 100 a FROM t");
    let top = select.top.expect("TOP clause");
    assert_eq!(top.number.text, "100");
    assert!(!top.with_ties);
}

#[test]
fn test_from_clause_span() {
    let sql = "SELECT a FROM t";
    let select = parse_one(sql);
    let from = select.from.expect("FROM clause");
    assert_eq!(&sql[from.start()..from.end()], "FROM t");
}

#[test]
fn test_missing_column_list_is_missing_clause_error() {
    let parser = SqlParser::new();
    let err = parser.parse("SELECT").unwrap_err();
    assert!(
        matches!(err, SqlError::MissingRequiredClause { .. }),
        "got: {:?}",
        err
    );

    let err = parser.parse("SELECT FROM t").unwrap_err();
    assert!(
        matches!(err, SqlError::MissingRequiredClause { .. }),
        "got: {:?}",
        err
    );
}

#[test]
fn test_clause_out_of_order_is_rejected() {
    // PREWHERE is only attempted before WHERE; appearing after it the
    // keyword is left over and the parse fails
    let parser = SqlParser::new();
    let err = parser
        .parse("SELECT a FROM t WHERE b = 1 PREWHERE c = 2")
        .unwrap_err();
    assert!(
        matches!(err, SqlError::UnexpectedToken { .. }),
        "got: {:?}",
        err
    );
}

#[test]
fn test_trailing_semicolon_is_allowed() {
    let select = parse_one("SELECT 1;");
    assert_eq!(select.statement_end, 8);
}

#[test]
fn test_trailing_tokens_are_rejected() {
    let parser = SqlParser::new();
    let err = parser.parse("SELECT 1 2").unwrap_err();
    assert!(
        matches!(err, SqlError::UnexpectedToken { .. }),
        "got: {:?}",
        err
    );
}

#[test]
fn test_settings_values() {
    let select = parse_one("SELECT a FROM t SETTINGS max_threads = 4, mode = 'fast', profile = web");
    let settings = select.settings.expect("SETTINGS clause");
    assert_eq!(settings.items.len(), 3);
    assert_eq!(settings.items[0].name.name, "max_threads");
    match &settings.items[0].value {
        Expr::Number(n) => assert_eq!(n.text, "4"),
        other => panic!("expected number value, got: {:?}", other),
    }
    match &settings.items[1].value {
        Expr::String(s) => assert_eq!(s.value, "fast"),
        other => panic!("expected string value, got: {:?}", other),
    }
}

#[test]
fn test_column_alias() {
    let select = parse_one("SELECT price * quantity AS total FROM orders");
    match &select.columns.items[0] {
        Expr::Alias(alias) => {
            assert_eq!(alias.alias.name, "total");
            assert!(matches!(alias.expr, Expr::Binary(_)));
        }
        other => panic!("expected alias expression, got: {:?}", other),
    }
}

#[test]
fn test_window_clause_participates_in_statement_end() {
    let sql = "SELECT a FROM t WINDOW w AS (PARTITION BY a)";
    let select = parse_one(sql);
    assert!(select.window.is_some());
    assert_eq!(select.statement_end, sql.len());
}
