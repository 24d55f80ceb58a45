//! Tests for UNION ALL composition and WITH/CTE lists.

use stratum_sql::ast::*;
use stratum_sql::{SqlError, SqlParser, Spanned};

fn parse(sql: &str) -> SelectExprList {
    SqlParser::new().parse(sql).expect("query should parse")
}

#[test]
fn test_union_all_produces_two_statements_in_order() {
    let list = parse("SELECT 1 UNION ALL SELECT 2");
    assert_eq!(list.items.len(), 2);
    match &list.items[0].columns.items[0] {
        Expr::Number(n) => assert_eq!(n.text, "1"),
        other => panic!("expected number, got: {:?}", other),
    }
    match &list.items[1].columns.items[0] {
        Expr::Number(n) => assert_eq!(n.text, "2"),
        other => panic!("expected number, got: {:?}", other),
    }
}

#[test]
fn test_union_without_all_is_rejected() {
    let err = SqlParser::new()
        .parse("SELECT 1 UNION SELECT 2")
        .unwrap_err();
    assert!(
        matches!(err, SqlError::UnexpectedKeyword { .. }),
        "got: {:?}",
        err
    );
    assert_eq!(err.position(), 15);
}

#[test]
fn test_union_all_chain_of_three() {
    let list = parse("SELECT 1 UNION ALL SELECT 2 UNION ALL SELECT 3");
    assert_eq!(list.items.len(), 3);
}

#[test]
fn test_parenthesized_union_member() {
    let list = parse("(SELECT 1) UNION ALL SELECT 2");
    assert_eq!(list.items.len(), 2);
}

#[test]
fn test_nested_parenthesized_statement() {
    let list = parse("((SELECT 1))");
    assert_eq!(list.items.len(), 1);
    assert_eq!(list.items[0].columns.items.len(), 1);
}

#[test]
fn test_single_cte() {
    let sql = "WITH recent AS (SELECT a FROM t LIMIT 10) SELECT * FROM recent";
    let list = parse(sql);
    let select = &list.items[0];

    let with = select.with.as_ref().expect("WITH clause");
    assert_eq!(with.ctes.len(), 1);
    assert_eq!(with.ctes[0].name.name, "recent");
    assert!(with.ctes[0].select.limit_by.is_some());

    // the statement span starts at the WITH keyword
    assert_eq!(select.select_pos, 0);
    assert_eq!(select.statement_end, sql.len());
}

#[test]
fn test_multiple_ctes_in_order() {
    let list = parse("WITH a AS (SELECT 1), b AS (SELECT 2) SELECT * FROM b");
    let with = list.items[0].with.as_ref().expect("WITH clause");
    assert_eq!(with.ctes.len(), 2);
    assert_eq!(with.ctes[0].name.name, "a");
    assert_eq!(with.ctes[1].name.name, "b");
}

#[test]
fn test_cte_column_aliases() {
    let list = parse("WITH c (x, y) AS (SELECT 1, 2) SELECT * FROM c");
    let with = list.items[0].with.as_ref().expect("WITH clause");
    let aliases = with.ctes[0].column_aliases.as_ref().expect("aliases");
    assert_eq!(aliases.len(), 2);
    assert_eq!(aliases[0].name, "x");
    assert_eq!(aliases[1].name, "y");
}

#[test]
fn test_duplicate_cte_names_are_not_rejected_here() {
    // uniqueness is a binding-pass concern, not a grammar one
    let list = parse("WITH c AS (SELECT 1), c AS (SELECT 2) SELECT 3");
    let with = list.items[0].with.as_ref().expect("WITH clause");
    assert_eq!(with.ctes.len(), 2);
}

#[test]
fn test_cte_span_covers_closing_paren() {
    let sql = "WITH r AS (SELECT 1) SELECT 2";
    let list = parse(sql);
    let cte = &list.items[0].with.as_ref().unwrap().ctes[0];
    assert_eq!(&sql[cte.start()..cte.end()], "r AS (SELECT 1)");
}

#[test]
fn test_cte_requires_as_and_parenthesized_body() {
    let parser = SqlParser::new();
    assert!(parser.parse("WITH r (SELECT 1) SELECT 2").is_err());
    assert!(parser.parse("WITH r AS SELECT 1 SELECT 2").is_err());
}

#[test]
fn test_nested_cte_statements() {
    let list = parse(
        "WITH outer_cte AS (WITH inner_cte AS (SELECT 1) SELECT * FROM inner_cte) \
         SELECT * FROM outer_cte",
    );
    let with = list.items[0].with.as_ref().expect("WITH clause");
    let inner = with.ctes[0].select.with.as_ref().expect("nested WITH");
    assert_eq!(inner.ctes[0].name.name, "inner_cte");
}
