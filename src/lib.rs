//! # stratum-sql
//!
//! Recursive-descent parser for the SELECT dialect of the Stratum
//! analytical SQL engine. SQL text goes in, a typed, position-annotated
//! abstract syntax tree comes out, ready for query planners, formatters,
//! and linters to traverse.
//!
//! ## Features
//!
//! - **Full SELECT grammar**: WITH/CTE lists, TOP, the combinatorial
//!   join-modifier grammar with table-valued functions and subqueries,
//!   PREWHERE/WHERE, GROUP BY with CUBE/ROLLUP/TOTALS, HAVING, LIMIT BY,
//!   named WINDOW definitions with frame bounds, ARRAY JOIN, SAMPLE
//!   ratios, and UNION ALL composition
//! - **Exact spans**: every AST node knows the byte range of the source
//!   text it was parsed from, derived from the last consumed token
//! - **Closed AST**: mutually exclusive node shapes are plain Rust enums,
//!   so consumers get exhaustive matching
//! - **Hard failures**: the first grammar deviation aborts the parse with
//!   a position-carrying error; there is no recovery or partial AST
//!
//! ## Quick start
//!
//! ```rust
//! use stratum_sql::SqlParser;
//!
//! let parser = SqlParser::new();
//! let list = parser
//!     .parse("SELECT id, count(*) FROM events GROUP BY id WITH TOTALS")
//!     .unwrap();
//!
//! let select = &list.items[0];
//! assert!(select.group_by.as_ref().unwrap().with_totals);
//! ```

pub mod ast;
pub mod error;
pub mod parser;

pub use ast::Spanned;
pub use error::{SqlError, SqlResult};
pub use parser::SqlParser;
