//! Public error type for Keel evaluation.
//!
//! Internal phase errors are aggregated here at the API boundary; their
//! diagnostic text is forwarded verbatim so hosts can log it unchanged.

use snafu::Snafu;

use crate::{evaluator::ExecutionError, resolver::TypeError};

#[derive(Debug, Snafu)]
pub enum Error {
    /// A type-resolution diagnostic.
    #[snafu(display("{source}"), context(false))]
    Resolve { source: TypeError },

    /// An execution diagnostic.
    #[snafu(display("{source}"), context(false))]
    Execution { source: ExecutionError },

    /// The expression's resolved type does not match the type the caller
    /// asked for.
    #[snafu(display("Result type mismatch: expected {expected}, found {found}"))]
    ResultType { expected: String, found: String },
}
