//! Trampolined evaluator for Keel expressions.
//!
//! The evaluator interprets an expression tree against a [`Context`] and
//! produces a [`Value`] of the statically resolved type, or a diagnostic.
//!
//! ## Design principles
//!
//! - **Pure**: no side effects, no I/O, no time; the same `(context,
//!   expression)` pair always evaluates to the same outcome.
//! - **Stack-safe**: an explicit work stack bounds native stack usage
//!   regardless of expression depth.
//! - **Type-driven**: the resolver validates `IF` branch unification, `EQ`
//!   side unification and `let` binding types before values flow.
//!
//! [`Context`]: crate::domain::Context
//! [`Value`]: crate::values::Value

pub mod error;
pub mod eval;


pub use error::ExecutionError;
pub use eval::eval;
