//! Type-resolution diagnostics.
//!
//! The rendered messages are logged verbatim by hosts, which assert on
//! substrings of them, so the `Display` output is part of the contract.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeError {
    /// A `REF` names a definition absent from the environment.
    UnresolvedReference { name: String },

    /// The two branches of an `IF` do not unify.
    IfBranchMismatch { rtype: String, ltype: String },

    /// The two sides of an `EQ` do not unify.
    EqSidesMismatch { rtype: String, ltype: String },

    /// `GET` applied to a non-option expression.
    GetOnNonOption { found: String },
}

impl fmt::Display for TypeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeError::UnresolvedReference { name } => {
                write!(f, "Typecheck failed: Cannot resolve type of {}", name)
            }
            TypeError::IfBranchMismatch { rtype, ltype } => {
                write!(
                    f,
                    "Typecheck failed for IF: RType({}) differs from LType({})",
                    rtype, ltype
                )
            }
            TypeError::EqSidesMismatch { rtype, ltype } => {
                write!(
                    f,
                    "Typecheck failed for EQ: RType({}) differs from LType({})",
                    rtype, ltype
                )
            }
            TypeError::GetOnNonOption { found } => {
                write!(
                    f,
                    "Typecheck failed: GET called on {}, but only call on OPTION[_] is allowed",
                    found
                )
            }
        }
    }
}

impl std::error::Error for TypeError {}
