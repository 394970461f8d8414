//! # Keel core
//!
//! Typed expression evaluator for Keel, a small pure scripting language used
//! to validate blockchain transactions. Given an expression tree and a
//! [`Context`] (a read-only domain view plus an environment of bound
//! definitions), the crate resolves a static type for every subexpression
//! and evaluates the tree to a value of that type, or reports a diagnostic
//! describing why either phase failed.
//!
//! Scripts are pure and total apart from diagnostics: no I/O, no time, no
//! user-defined functions, no recursion, no mutation. Expression trees may
//! nest arbitrarily deep; both phases run as explicit-work-stack trampolines
//! so depth costs heap, never native stack.
//!
//! Parsing source text into trees, networking, persistence and block forging
//! all live outside this crate; callers construct [`Expr`] trees directly in
//! a [`bumpalo`] arena and supply the domain behind the [`Domain`] trait.

pub mod api;
pub mod crypto;
pub mod domain;
pub mod env;
pub mod evaluator;
pub mod resolver;
pub mod terms;
pub mod types;
pub mod values;

pub use api::{evaluate, Error, FromValue};
pub use domain::{Context, Domain};
pub use env::Env;
pub use terms::{Expr, Let, TxField};
pub use types::{Type, TypeFactory};
pub use values::Value;
