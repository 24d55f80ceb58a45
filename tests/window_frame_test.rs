//! Tests for WINDOW clause definitions and frame bound parsing.

use stratum_sql::ast::*;
use stratum_sql::{SqlError, SqlParser};

fn parse_window(sql: &str) -> WindowExpr {
    let parser = SqlParser::new();
    let mut list = parser.parse(sql).expect("query should parse");
    list.items.remove(0).window.expect("WINDOW clause")
}

#[test]
fn test_named_window_with_empty_condition() {
    let window = parse_window("SELECT a FROM t WINDOW w AS ()");
    assert_eq!(window.name.name, "w");
    assert!(window.condition.partition_by.is_none());
    assert!(window.condition.order_by.is_none());
    assert!(window.condition.frame.is_none());
}

#[test]
fn test_window_with_partition_and_order() {
    let window =
        parse_window("SELECT a FROM t WINDOW w AS (PARTITION BY sym, venue ORDER BY ts DESC)");

    let partition = window.condition.partition_by.expect("PARTITION BY");
    assert_eq!(partition.expr.items.len(), 2);

    let order = window.condition.order_by.expect("ORDER BY");
    assert_eq!(order.items.len(), 1);
    assert_eq!(order.items[0].direction, OrderDirection::Desc);
}

#[test]
fn test_rows_between_unbounded_preceding_and_current_row() {
    let window = parse_window(
        "SELECT a FROM t WINDOW w AS (ROWS BETWEEN UNBOUNDED PRECEDING AND CURRENT ROW)",
    );

    let frame = window.condition.frame.expect("frame");
    assert_eq!(frame.frame_type, Some(WindowFrameType::Rows));

    match &frame.extend {
        WindowFrameBound::Between(between) => {
            // the recursive bounds carry no ROWS/RANGE prefix of their own
            assert!(between.low.frame_type.is_none());
            assert!(between.high.frame_type.is_none());
            match &between.low.extend {
                WindowFrameBound::Unbounded { direction, .. } => {
                    assert_eq!(*direction, FrameDirection::Preceding)
                }
                other => panic!("expected unbounded bound, got: {:?}", other),
            }
            assert!(matches!(
                between.high.extend,
                WindowFrameBound::CurrentRow { .. }
            ));
        }
        other => panic!("expected BETWEEN frame, got: {:?}", other),
    }
}

#[test]
fn test_range_numeric_bound() {
    let window = parse_window("SELECT a FROM t WINDOW w AS (RANGE 5 PRECEDING)");
    let frame = window.condition.frame.expect("frame");
    assert_eq!(frame.frame_type, Some(WindowFrameType::Range));
    match &frame.extend {
        WindowFrameBound::Number {
            number, direction, ..
        } => {
            assert_eq!(number.text, "5");
            assert_eq!(*direction, FrameDirection::Preceding);
        }
        other => panic!("expected numeric bound, got: {:?}", other),
    }
}

#[test]
fn test_rows_current_row() {
    let window = parse_window("SELECT a FROM t WINDOW w AS (ROWS CURRENT ROW)");
    let frame = window.condition.frame.expect("frame");
    assert!(matches!(frame.extend, WindowFrameBound::CurrentRow { .. }));
}

#[test]
fn test_rows_unbounded_following() {
    let window = parse_window("SELECT a FROM t WINDOW w AS (ROWS UNBOUNDED FOLLOWING)");
    let frame = window.condition.frame.expect("frame");
    match frame.extend {
        WindowFrameBound::Unbounded { direction, .. } => {
            assert_eq!(direction, FrameDirection::Following)
        }
        other => panic!("expected unbounded bound, got: {:?}", other),
    }
}

#[test]
fn test_numeric_between_bounds() {
    let window =
        parse_window("SELECT a FROM t WINDOW w AS (ROWS BETWEEN 3 PRECEDING AND 2 FOLLOWING)");
    let frame = window.condition.frame.expect("frame");
    match &frame.extend {
        WindowFrameBound::Between(between) => {
            match &between.low.extend {
                WindowFrameBound::Number {
                    number, direction, ..
                } => {
                    assert_eq!(number.text, "3");
                    assert_eq!(*direction, FrameDirection::Preceding);
                }
                other => panic!("expected numeric bound, got: {:?}", other),
            }
            match &between.high.extend {
                WindowFrameBound::Number {
                    number, direction, ..
                } => {
                    assert_eq!(number.text, "2");
                    assert_eq!(*direction, FrameDirection::Following);
                }
                other => panic!("expected numeric bound, got: {:?}", other),
            }
        }
        other => panic!("expected BETWEEN frame, got: {:?}", other),
    }
}

#[test]
fn test_unknown_frame_bound_is_rejected() {
    let parser = SqlParser::new();
    let err = parser
        .parse("SELECT a FROM t WINDOW w AS (ROWS sideways)")
        .unwrap_err();
    assert!(
        matches!(err, SqlError::MalformedModifierSequence { .. }),
        "got: {:?}",
        err
    );
}

#[test]
fn test_missing_frame_direction_is_rejected() {
    let parser = SqlParser::new();
    let err = parser
        .parse("SELECT a FROM t WINDOW w AS (ROWS UNBOUNDED)")
        .unwrap_err();
    assert!(
        matches!(err, SqlError::MalformedModifierSequence { .. }),
        "got: {:?}",
        err
    );
}

#[test]
fn test_window_requires_as_and_parens() {
    let parser = SqlParser::new();
    assert!(parser.parse("SELECT a FROM t WINDOW w (ROWS CURRENT ROW)").is_err());
    assert!(parser.parse("SELECT a FROM t WINDOW AS ()").is_err());
}
