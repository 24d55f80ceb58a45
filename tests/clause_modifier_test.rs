//! Tests for GROUP BY modifiers, LIMIT BY (including the comma-form swap),
//! ARRAY JOIN, and the single-expression predicate clauses.

use stratum_sql::ast::*;
use stratum_sql::{SqlError, SqlParser, Spanned};

fn parse_one(sql: &str) -> SelectExpr {
    let parser = SqlParser::new();
    let mut list = parser.parse(sql).expect("query should parse");
    assert_eq!(list.items.len(), 1);
    list.items.remove(0)
}

#[test]
fn test_group_by_modifier_flags_are_independent() {
    let select = parse_one("SELECT a FROM t GROUP BY a WITH ROLLUP WITH TOTALS");
    let group_by = select.group_by.expect("GROUP BY");
    assert!(group_by.with_rollup);
    assert!(group_by.with_totals);
    assert!(!group_by.with_cube);
    assert_eq!(group_by.aggregate_type, AggregateType::None);
}

#[test]
fn test_group_by_modifiers_are_order_insensitive() {
    let select = parse_one("SELECT a FROM t GROUP BY a WITH TOTALS WITH CUBE");
    let group_by = select.group_by.expect("GROUP BY");
    assert!(group_by.with_cube);
    assert!(group_by.with_totals);
    assert!(!group_by.with_rollup);
}

#[test]
fn test_group_by_duplicate_modifiers_reset_the_same_flag() {
    let select = parse_one("SELECT a FROM t GROUP BY a WITH CUBE WITH CUBE");
    let group_by = select.group_by.expect("GROUP BY");
    assert!(group_by.with_cube);
    assert!(!group_by.with_rollup);
    assert!(!group_by.with_totals);
}

#[test]
fn test_group_by_cube_function_style() {
    let select = parse_one("SELECT a FROM t GROUP BY CUBE(a, b)");
    let group_by = select.group_by.expect("GROUP BY");
    assert_eq!(group_by.aggregate_type, AggregateType::Cube);
    assert_eq!(group_by.expr.items.len(), 2);
}

#[test]
fn test_group_by_rollup_function_style() {
    let select = parse_one("SELECT a FROM t GROUP BY ROLLUP(a, b, c)");
    let group_by = select.group_by.expect("GROUP BY");
    assert_eq!(group_by.aggregate_type, AggregateType::Rollup);
    assert_eq!(group_by.expr.items.len(), 3);
}

#[test]
fn test_group_by_unknown_with_modifier_is_rejected() {
    let parser = SqlParser::new();
    let err = parser
        .parse("SELECT a FROM t GROUP BY a WITH sideways")
        .unwrap_err();
    assert!(
        matches!(err, SqlError::MalformedModifierSequence { .. }),
        "got: {:?}",
        err
    );
}

#[test]
fn test_group_by_end_includes_trailing_modifiers() {
    let sql = "SELECT a FROM t GROUP BY a WITH TOTALS";
    let select = parse_one(sql);
    let group_by = select.group_by.expect("GROUP BY");
    assert_eq!(&sql[group_by.start()..group_by.end()], "GROUP BY a WITH TOTALS");
}

#[test]
fn test_limit_comma_form_swaps_offset_and_limit() {
    let select = parse_one("SELECT a FROM t LIMIT 5, 10");
    let limit_by = select.limit_by.expect("LIMIT clause");
    match &limit_by.limit {
        Expr::Number(n) => assert_eq!(n.text, "10"),
        other => panic!("expected number limit, got: {:?}", other),
    }
    match limit_by.offset.as_ref().expect("offset") {
        Expr::Number(n) => assert_eq!(n.text, "5"),
        other => panic!("expected number offset, got: {:?}", other),
    }
}

#[test]
fn test_limit_offset_form_matches_comma_form() {
    let select = parse_one("SELECT a FROM t LIMIT 10 OFFSET 5");
    let limit_by = select.limit_by.expect("LIMIT clause");
    match &limit_by.limit {
        Expr::Number(n) => assert_eq!(n.text, "10"),
        other => panic!("expected number limit, got: {:?}", other),
    }
    match limit_by.offset.as_ref().expect("offset") {
        Expr::Number(n) => assert_eq!(n.text, "5"),
        other => panic!("expected number offset, got: {:?}", other),
    }
}

#[test]
fn test_plain_limit() {
    let select = parse_one("SELECT a FROM t LIMIT 100");
    let limit_by = select.limit_by.expect("LIMIT clause");
    assert!(limit_by.offset.is_none());
    assert!(limit_by.by.is_none());
}

#[test]
fn test_limit_by_column_list() {
    let select = parse_one("SELECT a FROM t LIMIT 2 BY domain");
    let limit_by = select.limit_by.expect("LIMIT clause");
    let by = limit_by.by.expect("BY list");
    assert_eq!(by.items.len(), 1);
}

#[test]
fn test_limit_comma_form_with_by() {
    let select = parse_one("SELECT a FROM t LIMIT 5, 10 BY (domain, path)");
    let limit_by = select.limit_by.expect("LIMIT clause");
    match &limit_by.limit {
        Expr::Number(n) => assert_eq!(n.text, "10"),
        other => panic!("expected number limit, got: {:?}", other),
    }
    assert!(limit_by.by.is_some());
}

#[test]
fn test_array_join() {
    let select = parse_one("SELECT a FROM t ARRAY JOIN tags");
    let array_join = select.array_join.expect("ARRAY JOIN");
    assert_eq!(array_join.kind, ArrayJoinKind::Plain);
    assert_eq!(array_join.expr.items.len(), 1);
}

#[test]
fn test_array_join_with_alias() {
    let select = parse_one("SELECT a FROM t ARRAY JOIN tags AS tag");
    let array_join = select.array_join.expect("ARRAY JOIN");
    match &array_join.expr.items[0] {
        Expr::Alias(alias) => assert_eq!(alias.alias.name, "tag"),
        other => panic!("expected aliased column, got: {:?}", other),
    }
}

#[test]
fn test_left_array_join_without_from() {
    let select = parse_one("SELECT a LEFT ARRAY JOIN tags");
    let array_join = select.array_join.expect("ARRAY JOIN");
    assert_eq!(array_join.kind, ArrayJoinKind::Left);
}

#[test]
fn test_left_array_after_from_goes_through_the_join_grammar() {
    // after a FROM table the join classifier owns the LEFT keyword, so
    // LEFT ... ARRAY lands in the join tree rather than the clause
    let select = parse_one("SELECT a FROM t LEFT ARRAY JOIN tags");
    assert!(select.array_join.is_none());
    match &select.from.as_ref().unwrap().expr {
        JoinTreeExpr::Join(join) => {
            assert_eq!(join.kind.op, JoinOp::Left);
            assert_eq!(join.kind.strictness, JoinStrictness::Array);
        }
        other => panic!("expected join tree, got: {:?}", other),
    }
}

#[test]
fn test_prewhere_and_where_each_wrap_one_expression() {
    let select = parse_one("SELECT a FROM t PREWHERE shard = 3 WHERE a > 0");
    let prewhere = select.prewhere.expect("PREWHERE");
    assert!(matches!(prewhere.expr, Expr::Binary(_)));
    let where_clause = select.where_clause.expect("WHERE");
    assert!(matches!(where_clause.expr, Expr::Binary(_)));
}

#[test]
fn test_having_wraps_one_expression() {
    let select = parse_one("SELECT a FROM t GROUP BY a HAVING count(*) > 10");
    let having = select.having.expect("HAVING");
    assert!(matches!(having.expr, Expr::Binary(_)));
}

#[test]
fn test_parenthesized_group_by_list_is_one_tuple() {
    let select = parse_one("SELECT a FROM t GROUP BY (a, b)");
    let group_by = select.group_by.expect("GROUP BY");
    assert_eq!(group_by.expr.items.len(), 1);
    match &group_by.expr.items[0] {
        Expr::Tuple(tuple) => assert_eq!(tuple.items.len(), 2),
        other => panic!("expected tuple, got: {:?}", other),
    }
}
