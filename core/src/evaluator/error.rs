//! Evaluation diagnostics.
//!
//! Most error conditions are caught during type resolution; the errors here
//! are the ones that can only surface while values flow. As with resolver
//! diagnostics, the rendered text is logged verbatim by hosts.

use std::fmt;

use crate::{resolver::TypeError, values::KindError};

#[derive(Debug)]
pub enum ExecutionError {
    /// A type-resolution failure raised while evaluating `IF`, `EQ` or a
    /// `let` binding.
    Resolve(TypeError),

    /// A `REF` named a definition with no bound value.
    DefinitionNotFound { name: String },

    /// A `let` tried to rebind a name visible in the enclosing scope.
    AlreadyDefined { name: String },

    /// `GET` applied to the `NONE` value.
    GetNone,

    /// A value of an unexpected kind reached an operation. Well-typed
    /// scripts cannot trigger this; it signals a resolver/evaluator
    /// disagreement rather than a script bug.
    KindMismatch(KindError),
}

impl fmt::Display for ExecutionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExecutionError::Resolve(err) => write!(f, "{}", err),
            ExecutionError::DefinitionNotFound { name } => {
                write!(f, "Definition '{}' not found", name)
            }
            ExecutionError::AlreadyDefined { name } => {
                write!(f, "Value '{}' already defined in the scope", name)
            }
            ExecutionError::GetNone => write!(f, "get(NONE)"),
            ExecutionError::KindMismatch(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for ExecutionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ExecutionError::Resolve(err) => Some(err),
            ExecutionError::KindMismatch(err) => Some(err),
            _ => None,
        }
    }
}

impl From<TypeError> for ExecutionError {
    fn from(err: TypeError) -> Self {
        ExecutionError::Resolve(err)
    }
}

impl From<KindError> for ExecutionError {
    fn from(err: KindError) -> Self {
        ExecutionError::KindMismatch(err)
    }
}
