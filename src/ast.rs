/*!
# SELECT Statement Abstract Syntax Tree

AST node types for the Stratum SELECT dialect. Nodes are built once during a
single top-down parse pass and never mutated afterward; ownership is strictly
tree shaped.

Every node implements [`Spanned`]: a start and end byte offset into the
original SQL text covering exactly the tokens the node was parsed from. End
offsets always come from the last consumed token, never from estimates, so a
parent's end is derived from its last-parsed child.

Mutually exclusive node shapes (table sources, join trees, join constraints,
window frame bounds, scalar expressions) are closed enums so that consumers
get exhaustiveness checking from the compiler.
*/

/// Byte offset into the original SQL text.
pub type Pos = usize;

/// Shared capability of all AST nodes: the half-open byte range
/// `start()..end()` spanning exactly the source text the node was parsed
/// from.
pub trait Spanned {
    fn start(&self) -> Pos;
    fn end(&self) -> Pos;
}

// ---------------------------------------------------------------------------
// Scalar expression nodes
// ---------------------------------------------------------------------------

/// A bare identifier.
#[derive(Debug, Clone, PartialEq)]
pub struct Ident {
    pub pos: Pos,
    pub end: Pos,
    pub name: String,
}

impl Spanned for Ident {
    fn start(&self) -> Pos {
        self.pos
    }
    fn end(&self) -> Pos {
        self.end
    }
}

/// An integer or decimal literal, kept as its source text.
#[derive(Debug, Clone, PartialEq)]
pub struct NumberLiteral {
    pub pos: Pos,
    pub end: Pos,
    pub text: String,
}

impl Spanned for NumberLiteral {
    fn start(&self) -> Pos {
        self.pos
    }
    fn end(&self) -> Pos {
        self.end
    }
}

/// A numeric literal in a context that permits fractions, such as SAMPLE
/// ratios.
#[derive(Debug, Clone, PartialEq)]
pub struct FloatLiteral {
    pub pos: Pos,
    pub end: Pos,
    pub text: String,
}

impl Spanned for FloatLiteral {
    fn start(&self) -> Pos {
        self.pos
    }
    fn end(&self) -> Pos {
        self.end
    }
}

/// A single-quoted string literal; `value` has the quotes stripped.
#[derive(Debug, Clone, PartialEq)]
pub struct StringLiteral {
    pub pos: Pos,
    pub end: Pos,
    pub value: String,
}

impl Spanned for StringLiteral {
    fn start(&self) -> Pos {
        self.pos
    }
    fn end(&self) -> Pos {
        self.end
    }
}

/// A column reference, optionally qualified: `price` or `trades.price`.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnRef {
    pub qualifier: Option<Ident>,
    pub name: Ident,
}

impl Spanned for ColumnRef {
    fn start(&self) -> Pos {
        self.qualifier.as_ref().map_or(self.name.pos, |q| q.pos)
    }
    fn end(&self) -> Pos {
        self.name.end
    }
}

/// The `*` projection.
#[derive(Debug, Clone, PartialEq)]
pub struct AsteriskExpr {
    pub pos: Pos,
}

impl Spanned for AsteriskExpr {
    fn start(&self) -> Pos {
        self.pos
    }
    fn end(&self) -> Pos {
        self.pos + 1
    }
}

/// A function call: `avg(price)`, `count(*)`.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionExpr {
    pub name: Ident,
    pub args: Vec<Expr>,
    /// One past the closing parenthesis.
    pub end: Pos,
}

impl Spanned for FunctionExpr {
    fn start(&self) -> Pos {
        self.name.pos
    }
    fn end(&self) -> Pos {
        self.end
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOperator {
    Minus,
    Not,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UnaryExpr {
    pub pos: Pos,
    pub op: UnaryOperator,
    pub expr: Box<Expr>,
}

impl Spanned for UnaryExpr {
    fn start(&self) -> Pos {
        self.pos
    }
    fn end(&self) -> Pos {
        self.expr.end()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    Plus,
    Minus,
    Multiply,
    Divide,
    Modulo,
    Concat,
    Eq,
    NotEq,
    Lt,
    Gt,
    LtEq,
    GtEq,
    And,
    Or,
    Like,
    NotLike,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BinaryExpr {
    pub left: Box<Expr>,
    pub op: BinaryOperator,
    pub right: Box<Expr>,
}

impl Spanned for BinaryExpr {
    fn start(&self) -> Pos {
        self.left.start()
    }
    fn end(&self) -> Pos {
        self.right.end()
    }
}

/// A parenthesized expression or tuple. A single item is plain grouping;
/// two or more items form a tuple value, which is also how a fully
/// parenthesized column list (`GROUP BY (a, b)`) reaches the AST.
#[derive(Debug, Clone, PartialEq)]
pub struct TupleExpr {
    pub pos: Pos,
    pub end: Pos,
    pub items: Vec<Expr>,
}

impl Spanned for TupleExpr {
    fn start(&self) -> Pos {
        self.pos
    }
    fn end(&self) -> Pos {
        self.end
    }
}

/// An `expr AS name` binding inside a column list.
#[derive(Debug, Clone, PartialEq)]
pub struct AliasExpr {
    pub expr: Expr,
    pub alias: Ident,
}

impl Spanned for AliasExpr {
    fn start(&self) -> Pos {
        self.expr.start()
    }
    fn end(&self) -> Pos {
        self.alias.end
    }
}

/// `expr [NOT] BETWEEN low AND high`.
#[derive(Debug, Clone, PartialEq)]
pub struct BetweenExpr {
    pub expr: Box<Expr>,
    pub negated: bool,
    pub low: Box<Expr>,
    pub high: Box<Expr>,
}

impl Spanned for BetweenExpr {
    fn start(&self) -> Pos {
        self.expr.start()
    }
    fn end(&self) -> Pos {
        self.high.end()
    }
}

/// `expr [NOT] IN (item, ...)`.
#[derive(Debug, Clone, PartialEq)]
pub struct InListExpr {
    pub expr: Box<Expr>,
    pub negated: bool,
    pub items: Vec<Expr>,
    /// One past the closing parenthesis.
    pub end: Pos,
}

impl Spanned for InListExpr {
    fn start(&self) -> Pos {
        self.expr.start()
    }
    fn end(&self) -> Pos {
        self.end
    }
}

/// `expr IS [NOT] NULL`.
#[derive(Debug, Clone, PartialEq)]
pub struct IsNullExpr {
    pub expr: Box<Expr>,
    pub negated: bool,
    /// One past the NULL keyword.
    pub end: Pos,
}

impl Spanned for IsNullExpr {
    fn start(&self) -> Pos {
        self.expr.start()
    }
    fn end(&self) -> Pos {
        self.end
    }
}

/// A scalar column expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Column(ColumnRef),
    Number(NumberLiteral),
    String(StringLiteral),
    Asterisk(AsteriskExpr),
    Function(FunctionExpr),
    Unary(UnaryExpr),
    Binary(BinaryExpr),
    Tuple(TupleExpr),
    Alias(Box<AliasExpr>),
    Between(BetweenExpr),
    InList(InListExpr),
    IsNull(IsNullExpr),
}

impl Spanned for Expr {
    fn start(&self) -> Pos {
        match self {
            Expr::Column(e) => e.start(),
            Expr::Number(e) => e.start(),
            Expr::String(e) => e.start(),
            Expr::Asterisk(e) => e.start(),
            Expr::Function(e) => e.start(),
            Expr::Unary(e) => e.start(),
            Expr::Binary(e) => e.start(),
            Expr::Tuple(e) => e.start(),
            Expr::Alias(e) => e.start(),
            Expr::Between(e) => e.start(),
            Expr::InList(e) => e.start(),
            Expr::IsNull(e) => e.start(),
        }
    }

    fn end(&self) -> Pos {
        match self {
            Expr::Column(e) => e.end(),
            Expr::Number(e) => e.end(),
            Expr::String(e) => e.end(),
            Expr::Asterisk(e) => e.end(),
            Expr::Function(e) => e.end(),
            Expr::Unary(e) => e.end(),
            Expr::Binary(e) => e.end(),
            Expr::Tuple(e) => e.end(),
            Expr::Alias(e) => e.end(),
            Expr::Between(e) => e.end(),
            Expr::InList(e) => e.end(),
            Expr::IsNull(e) => e.end(),
        }
    }
}

/// A non-empty, comma-separated column expression list.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnExprList {
    pub pos: Pos,
    pub end: Pos,
    pub items: Vec<Expr>,
}

impl Spanned for ColumnExprList {
    fn start(&self) -> Pos {
        self.pos
    }
    fn end(&self) -> Pos {
        self.end
    }
}

// ---------------------------------------------------------------------------
// ORDER BY / SETTINGS / PARTITION BY
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderDirection {
    Asc,
    Desc,
}

/// One ORDER BY item. Direction defaults to ascending when unspecified.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderByExpr {
    pub expr: Expr,
    pub direction: OrderDirection,
    /// End of the direction keyword when present, else end of `expr`.
    pub end: Pos,
}

impl Spanned for OrderByExpr {
    fn start(&self) -> Pos {
        self.expr.start()
    }
    fn end(&self) -> Pos {
        self.end
    }
}

/// A full `ORDER BY expr [ASC|DESC], ...` clause.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderByExprList {
    pub order_pos: Pos,
    pub end: Pos,
    pub items: Vec<OrderByExpr>,
}

impl Spanned for OrderByExprList {
    fn start(&self) -> Pos {
        self.order_pos
    }
    fn end(&self) -> Pos {
        self.end
    }
}

/// One `name = value` pair in a SETTINGS clause.
#[derive(Debug, Clone, PartialEq)]
pub struct SettingsExpr {
    pub name: Ident,
    pub value: Expr,
}

impl Spanned for SettingsExpr {
    fn start(&self) -> Pos {
        self.name.pos
    }
    fn end(&self) -> Pos {
        self.value.end()
    }
}

/// A `SETTINGS name = value, ...` clause.
#[derive(Debug, Clone, PartialEq)]
pub struct SettingsExprList {
    pub settings_pos: Pos,
    pub end: Pos,
    pub items: Vec<SettingsExpr>,
}

impl Spanned for SettingsExprList {
    fn start(&self) -> Pos {
        self.settings_pos
    }
    fn end(&self) -> Pos {
        self.end
    }
}

/// A `PARTITION BY` list inside a window condition.
#[derive(Debug, Clone, PartialEq)]
pub struct PartitionByExpr {
    pub partition_pos: Pos,
    pub expr: ColumnExprList,
}

impl Spanned for PartitionByExpr {
    fn start(&self) -> Pos {
        self.partition_pos
    }
    fn end(&self) -> Pos {
        self.expr.end
    }
}

// ---------------------------------------------------------------------------
// Table sources and joins
// ---------------------------------------------------------------------------

/// A possibly database-qualified table name: `trades` or `market.trades`.
#[derive(Debug, Clone, PartialEq)]
pub struct TableIdentifier {
    pub database: Option<Ident>,
    pub table: Ident,
}

impl Spanned for TableIdentifier {
    fn start(&self) -> Pos {
        self.database.as_ref().map_or(self.table.pos, |d| d.pos)
    }
    fn end(&self) -> Pos {
        self.table.end
    }
}

/// A table-valued function call such as `numbers(10)`. Produced only when an
/// unqualified identifier is immediately followed by `(`.
#[derive(Debug, Clone, PartialEq)]
pub struct TableFunctionExpr {
    pub name: Ident,
    pub args: Vec<Expr>,
    /// One past the closing parenthesis.
    pub end: Pos,
}

impl Spanned for TableFunctionExpr {
    fn start(&self) -> Pos {
        self.name.pos
    }
    fn end(&self) -> Pos {
        self.end
    }
}

/// A parenthesized subquery used as a table source. The span includes the
/// surrounding parentheses; the body is a full UNION ALL list.
#[derive(Debug, Clone, PartialEq)]
pub struct SubQueryExpr {
    pub pos: Pos,
    pub end: Pos,
    pub selects: SelectExprList,
}

impl Spanned for SubQueryExpr {
    fn start(&self) -> Pos {
        self.pos
    }
    fn end(&self) -> Pos {
        self.end
    }
}

/// The three shapes a table source can take.
#[derive(Debug, Clone, PartialEq)]
pub enum TableRef {
    Identifier(TableIdentifier),
    Function(TableFunctionExpr),
    Subquery(SubQueryExpr),
}

impl Spanned for TableRef {
    fn start(&self) -> Pos {
        match self {
            TableRef::Identifier(t) => t.start(),
            TableRef::Function(t) => t.start(),
            TableRef::Subquery(t) => t.start(),
        }
    }
    fn end(&self) -> Pos {
        match self {
            TableRef::Identifier(t) => t.end(),
            TableRef::Function(t) => t.end(),
            TableRef::Subquery(t) => t.end(),
        }
    }
}

/// An `AS name` alias attached to a table source.
#[derive(Debug, Clone, PartialEq)]
pub struct TableAlias {
    pub as_pos: Pos,
    pub name: Ident,
}

/// A table source with an optional alias. The alias extends the end span.
#[derive(Debug, Clone, PartialEq)]
pub struct TableExpr {
    pub pos: Pos,
    pub end: Pos,
    pub source: TableRef,
    pub alias: Option<TableAlias>,
}

impl Spanned for TableExpr {
    fn start(&self) -> Pos {
        self.pos
    }
    fn end(&self) -> Pos {
        self.end
    }
}

/// A `SAMPLE ratio [OFFSET offset]` modifier on a table source.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleRatioExpr {
    pub sample_pos: Pos,
    pub end: Pos,
    pub ratio: FloatLiteral,
    pub offset: Option<FloatLiteral>,
}

impl Spanned for SampleRatioExpr {
    fn start(&self) -> Pos {
        self.sample_pos
    }
    fn end(&self) -> Pos {
        self.end
    }
}

/// Direction component of a classified join.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinOp {
    /// Explicit `CROSS JOIN`.
    Cross,
    /// Implicit cross join spelled as a bare comma.
    Comma,
    Inner,
    Left,
    Right,
    Full,
    /// No direction keyword appeared, e.g. bare `JOIN` or `ANY JOIN`.
    Unspecified,
}

/// Strictness component of a classified join.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinStrictness {
    Default,
    Any,
    All,
    Semi,
    Anti,
    Asof,
    Array,
}

/// Which keyword combination introduced a join. Populated by the join-op
/// classifier; when several direction keywords appear in one modifier
/// sequence the last one wins for `op`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JoinKind {
    pub op: JoinOp,
    pub strictness: JoinStrictness,
    pub outer: bool,
}

impl JoinKind {
    pub fn new(op: JoinOp) -> Self {
        JoinKind {
            op,
            strictness: JoinStrictness::Default,
            outer: false,
        }
    }
}

/// An `ON` join constraint holding a column-expression list.
#[derive(Debug, Clone, PartialEq)]
pub struct OnExpr {
    pub on_pos: Pos,
    pub on: ColumnExprList,
}

impl Spanned for OnExpr {
    fn start(&self) -> Pos {
        self.on_pos
    }
    fn end(&self) -> Pos {
        self.on.end
    }
}

/// A `USING` join constraint, with or without surrounding parentheses.
#[derive(Debug, Clone, PartialEq)]
pub struct UsingExpr {
    pub using_pos: Pos,
    pub end: Pos,
    pub using: ColumnExprList,
}

impl Spanned for UsingExpr {
    fn start(&self) -> Pos {
        self.using_pos
    }
    fn end(&self) -> Pos {
        self.end
    }
}

/// The two constraint shapes a join can carry.
#[derive(Debug, Clone, PartialEq)]
pub enum JoinConstraint {
    On(OnExpr),
    Using(UsingExpr),
}

impl Spanned for JoinConstraint {
    fn start(&self) -> Pos {
        match self {
            JoinConstraint::On(c) => c.start(),
            JoinConstraint::Using(c) => c.start(),
        }
    }
    fn end(&self) -> Pos {
        match self {
            JoinConstraint::On(c) => c.end(),
            JoinConstraint::Using(c) => c.end(),
        }
    }
}

/// One node of a FROM clause's join tree: either a lone table source (no
/// JoinExpr wrapper) or a binary join. The optional sample ratio stays next
/// to the table it samples.
#[derive(Debug, Clone, PartialEq)]
pub enum JoinTreeExpr {
    Table {
        table: TableExpr,
        sample: Option<SampleRatioExpr>,
    },
    Join(Box<JoinExpr>),
}

impl Spanned for JoinTreeExpr {
    fn start(&self) -> Pos {
        match self {
            JoinTreeExpr::Table { table, .. } => table.start(),
            JoinTreeExpr::Join(j) => j.start(),
        }
    }
    fn end(&self) -> Pos {
        match self {
            JoinTreeExpr::Table { table, sample } => {
                sample.as_ref().map_or(table.end, |s| s.end)
            }
            JoinTreeExpr::Join(j) => j.end(),
        }
    }
}

/// A binary join node. The right side is parsed by the same join-expression
/// rule, so a chain of N tables produces N-1 of these threaded through
/// `right` (right-associative).
#[derive(Debug, Clone, PartialEq)]
pub struct JoinExpr {
    pub kind: JoinKind,
    pub left: JoinTreeExpr,
    pub right: JoinTreeExpr,
    pub constraints: Option<JoinConstraint>,
}

impl Spanned for JoinExpr {
    fn start(&self) -> Pos {
        self.left.start()
    }
    fn end(&self) -> Pos {
        self.constraints
            .as_ref()
            .map_or(self.right.end(), |c| c.end())
    }
}

/// The FROM clause: one recursively nested join tree, not a flat list.
#[derive(Debug, Clone, PartialEq)]
pub struct FromExpr {
    pub from_pos: Pos,
    pub expr: JoinTreeExpr,
}

impl Spanned for FromExpr {
    fn start(&self) -> Pos {
        self.from_pos
    }
    fn end(&self) -> Pos {
        self.expr.end()
    }
}

// ---------------------------------------------------------------------------
// Clauses
// ---------------------------------------------------------------------------

/// One CTE binding: `name [(alias, ...)] AS (select)`. Name uniqueness
/// across a WITH list is not enforced here; that is a binding-pass concern.
#[derive(Debug, Clone, PartialEq)]
pub struct CTEExpr {
    pub pos: Pos,
    /// One past the closing parenthesis of the CTE body.
    pub end: Pos,
    pub name: Ident,
    pub column_aliases: Option<Vec<Ident>>,
    pub select: Box<SelectExpr>,
}

impl Spanned for CTEExpr {
    fn start(&self) -> Pos {
        self.pos
    }
    fn end(&self) -> Pos {
        self.end
    }
}

/// A WITH clause: an ordered, non-empty CTE list.
#[derive(Debug, Clone, PartialEq)]
pub struct WithExpr {
    pub with_pos: Pos,
    pub end: Pos,
    pub ctes: Vec<CTEExpr>,
}

impl Spanned for WithExpr {
    fn start(&self) -> Pos {
        self.with_pos
    }
    fn end(&self) -> Pos {
        self.end
    }
}

/// A `TOP n [WITH TIES]` row bound.
#[derive(Debug, Clone, PartialEq)]
pub struct TopExpr {
    pub top_pos: Pos,
    pub end: Pos,
    pub number: NumberLiteral,
    pub with_ties: bool,
}

impl Spanned for TopExpr {
    fn start(&self) -> Pos {
        self.top_pos
    }
    fn end(&self) -> Pos {
        self.end
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrayJoinKind {
    Plain,
    Left,
    Inner,
}

/// An `[LEFT|INNER] ARRAY JOIN columns` clause. The span starts at the
/// LEFT/INNER prefix when present.
#[derive(Debug, Clone, PartialEq)]
pub struct ArrayJoinExpr {
    pub pos: Pos,
    pub kind: ArrayJoinKind,
    pub expr: ColumnExprList,
}

impl Spanned for ArrayJoinExpr {
    fn start(&self) -> Pos {
        self.pos
    }
    fn end(&self) -> Pos {
        self.expr.end
    }
}

/// A PREWHERE clause wrapping exactly one predicate expression.
#[derive(Debug, Clone, PartialEq)]
pub struct PrewhereExpr {
    pub prewhere_pos: Pos,
    pub expr: Expr,
}

impl Spanned for PrewhereExpr {
    fn start(&self) -> Pos {
        self.prewhere_pos
    }
    fn end(&self) -> Pos {
        self.expr.end()
    }
}

/// A WHERE clause wrapping exactly one predicate expression.
#[derive(Debug, Clone, PartialEq)]
pub struct WhereExpr {
    pub where_pos: Pos,
    pub expr: Expr,
}

impl Spanned for WhereExpr {
    fn start(&self) -> Pos {
        self.where_pos
    }
    fn end(&self) -> Pos {
        self.expr.end()
    }
}

/// A HAVING clause wrapping exactly one predicate expression.
#[derive(Debug, Clone, PartialEq)]
pub struct HavingExpr {
    pub having_pos: Pos,
    pub expr: Expr,
}

impl Spanned for HavingExpr {
    fn start(&self) -> Pos {
        self.having_pos
    }
    fn end(&self) -> Pos {
        self.expr.end()
    }
}

/// Grouping shape introduced directly after `GROUP BY`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AggregateType {
    None,
    Cube,
    Rollup,
}

/// A GROUP BY clause. The three `with_*` flags are independent and set by a
/// trailing sequence of `WITH CUBE | WITH ROLLUP | WITH TOTALS` modifiers in
/// any order; duplicates simply re-set the same flag. The end position
/// includes any trailing modifiers.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupByExpr {
    pub group_pos: Pos,
    pub end: Pos,
    pub aggregate_type: AggregateType,
    pub expr: ColumnExprList,
    pub with_cube: bool,
    pub with_rollup: bool,
    pub with_totals: bool,
}

impl Spanned for GroupByExpr {
    fn start(&self) -> Pos {
        self.group_pos
    }
    fn end(&self) -> Pos {
        self.end
    }
}

/// A `LIMIT n [OFFSET m | , n] [BY columns]` clause.
///
/// The comma spelling `LIMIT m, n` swaps the two parsed expressions: the
/// first becomes the offset and the second the limit.
#[derive(Debug, Clone, PartialEq)]
pub struct LimitByExpr {
    pub limit_pos: Pos,
    pub end: Pos,
    pub limit: Expr,
    pub offset: Option<Expr>,
    pub by: Option<ColumnExprList>,
}

impl Spanned for LimitByExpr {
    fn start(&self) -> Pos {
        self.limit_pos
    }
    fn end(&self) -> Pos {
        self.end
    }
}

// ---------------------------------------------------------------------------
// Window definitions
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowFrameType {
    Rows,
    Range,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameDirection {
    Preceding,
    Following,
}

/// The recursive `BETWEEN <frame> AND <frame>` bound form. Both sides are
/// frame expressions without a ROWS/RANGE prefix of their own.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowFrameBetween {
    pub between_pos: Pos,
    pub low: Box<WindowFrameExpr>,
    pub and_pos: Pos,
    pub high: Box<WindowFrameExpr>,
}

/// The four mutually exclusive frame bound shapes.
#[derive(Debug, Clone, PartialEq)]
pub enum WindowFrameBound {
    Between(WindowFrameBetween),
    CurrentRow {
        current_pos: Pos,
        /// One past the ROW keyword.
        end: Pos,
    },
    Unbounded {
        pos: Pos,
        end: Pos,
        direction: FrameDirection,
    },
    Number {
        number: NumberLiteral,
        direction: FrameDirection,
        /// One past the direction keyword.
        end: Pos,
    },
}

impl Spanned for WindowFrameBound {
    fn start(&self) -> Pos {
        match self {
            WindowFrameBound::Between(b) => b.between_pos,
            WindowFrameBound::CurrentRow { current_pos, .. } => *current_pos,
            WindowFrameBound::Unbounded { pos, .. } => *pos,
            WindowFrameBound::Number { number, .. } => number.pos,
        }
    }
    fn end(&self) -> Pos {
        match self {
            WindowFrameBound::Between(b) => b.high.end(),
            WindowFrameBound::CurrentRow { end, .. }
            | WindowFrameBound::Unbounded { end, .. }
            | WindowFrameBound::Number { end, .. } => *end,
        }
    }
}

/// A window frame. `frame_type` is present on the top-level frame of a
/// window condition and absent on the recursive bounds inside BETWEEN.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowFrameExpr {
    pub frame_pos: Pos,
    pub frame_type: Option<WindowFrameType>,
    pub extend: WindowFrameBound,
}

impl Spanned for WindowFrameExpr {
    fn start(&self) -> Pos {
        self.frame_pos
    }
    fn end(&self) -> Pos {
        self.extend.end()
    }
}

/// The parenthesized body of a window definition:
/// `([PARTITION BY ...] [ORDER BY ...] [frame])`.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowConditionExpr {
    pub lparen_pos: Pos,
    /// One past the closing parenthesis.
    pub rparen_end: Pos,
    pub partition_by: Option<PartitionByExpr>,
    pub order_by: Option<OrderByExprList>,
    pub frame: Option<WindowFrameExpr>,
}

impl Spanned for WindowConditionExpr {
    fn start(&self) -> Pos {
        self.lparen_pos
    }
    fn end(&self) -> Pos {
        self.rparen_end
    }
}

/// A `WINDOW name AS (condition)` clause.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowExpr {
    pub window_pos: Pos,
    pub name: Ident,
    pub condition: WindowConditionExpr,
}

impl Spanned for WindowExpr {
    fn start(&self) -> Pos {
        self.window_pos
    }
    fn end(&self) -> Pos {
        self.condition.rparen_end
    }
}

// ---------------------------------------------------------------------------
// SELECT statements
// ---------------------------------------------------------------------------

/// One SELECT statement. Every clause except the column list is optional.
///
/// `statement_end` tracks the end of the last clause actually present, else
/// the end of the column list. DISTINCT is recognized and consumed during
/// parsing but not retained here.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectExpr {
    /// Start of the statement (the WITH keyword when a WITH clause leads).
    pub select_pos: Pos,
    pub statement_end: Pos,
    pub with: Option<WithExpr>,
    pub top: Option<TopExpr>,
    pub columns: ColumnExprList,
    pub from: Option<FromExpr>,
    pub array_join: Option<ArrayJoinExpr>,
    pub window: Option<WindowExpr>,
    pub prewhere: Option<PrewhereExpr>,
    pub where_clause: Option<WhereExpr>,
    pub group_by: Option<GroupByExpr>,
    pub having: Option<HavingExpr>,
    pub order_by: Option<OrderByExprList>,
    pub limit_by: Option<LimitByExpr>,
    pub settings: Option<SettingsExprList>,
}

impl Spanned for SelectExpr {
    fn start(&self) -> Pos {
        self.select_pos
    }
    fn end(&self) -> Pos {
        self.statement_end
    }
}

/// SELECT statements connected by UNION ALL, in evaluation order.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectExprList {
    pub items: Vec<SelectExpr>,
}

impl Spanned for SelectExprList {
    fn start(&self) -> Pos {
        self.items.first().map_or(0, |s| s.select_pos)
    }
    fn end(&self) -> Pos {
        self.items.last().map_or(0, |s| s.statement_end)
    }
}
