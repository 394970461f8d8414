//! Public entry point for evaluating Keel expressions.
//!
//! [`evaluate`] runs both phases against a caller-supplied [`Context`]:
//! resolve the expression's type, check it against the type the caller
//! expects, evaluate, and extract the result as a host value. A mismatch
//! between the resolved type and the requested one is a diagnostic, never
//! undefined behavior.
//!
//! # Example
//!
//! ```ignore
//! use bumpalo::Bump;
//! use keel_core::{evaluate, Context, Expr, TypeFactory};
//!
//! let arena = Bump::new();
//! let types = TypeFactory::new(&arena);
//! let ctx = Context::new(&domain);
//!
//! let script = Expr::ge(&arena, Expr::height(&arena), Expr::const_int(&arena, 1000));
//! let approved: bool = evaluate(&arena, types, &ctx, script)?;
//! ```

pub mod error;

pub use error::Error;

use bumpalo::Bump;

use crate::{
    domain::Context,
    evaluator,
    resolver,
    terms::Expr,
    types::{unify, Type, TypeFactory},
    values::Value,
};

/// Conversion from a runtime [`Value`] into a host type, together with the
/// Keel type the caller thereby expects the expression to resolve to.
pub trait FromValue<'a>: Sized {
    /// The expected type, or `None` to accept any resolved type.
    fn expected_type(types: &'a TypeFactory<'a>) -> Option<&'a Type<'a>>;

    fn from_value(value: Value<'a>) -> Option<Self>;
}

impl<'a> FromValue<'a> for i64 {
    fn expected_type(types: &'a TypeFactory<'a>) -> Option<&'a Type<'a>> {
        Some(types.int())
    }

    fn from_value(value: Value<'a>) -> Option<Self> {
        value.as_int().ok()
    }
}

impl<'a> FromValue<'a> for bool {
    fn expected_type(types: &'a TypeFactory<'a>) -> Option<&'a Type<'a>> {
        Some(types.boolean())
    }

    fn from_value(value: Value<'a>) -> Option<Self> {
        value.as_boolean().ok()
    }
}

impl<'a> FromValue<'a> for &'a [u8] {
    fn expected_type(types: &'a TypeFactory<'a>) -> Option<&'a Type<'a>> {
        Some(types.byte_vector())
    }

    fn from_value(value: Value<'a>) -> Option<Self> {
        value.as_byte_vector().ok()
    }
}

impl<'a> FromValue<'a> for Vec<u8> {
    fn expected_type(types: &'a TypeFactory<'a>) -> Option<&'a Type<'a>> {
        Some(types.byte_vector())
    }

    fn from_value(value: Value<'a>) -> Option<Self> {
        value.as_byte_vector().ok().map(<[u8]>::to_vec)
    }
}

impl<'a, T: FromValue<'a>> FromValue<'a> for Option<T> {
    fn expected_type(types: &'a TypeFactory<'a>) -> Option<&'a Type<'a>> {
        T::expected_type(types).map(|inner| types.option(inner))
    }

    fn from_value(value: Value<'a>) -> Option<Self> {
        match value {
            Value::Option(None) => Some(None),
            Value::Option(Some(inner)) => T::from_value(*inner).map(Some),
            _ => None,
        }
    }
}

/// The identity extraction, for callers that want the raw tagged value.
impl<'a> FromValue<'a> for Value<'a> {
    fn expected_type(_types: &'a TypeFactory<'a>) -> Option<&'a Type<'a>> {
        None
    }

    fn from_value(value: Value<'a>) -> Option<Self> {
        Some(value)
    }
}

/// Resolve, type-check against `T`, evaluate, and extract.
pub fn evaluate<'a, T: FromValue<'a>>(
    arena: &'a Bump,
    types: &'a TypeFactory<'a>,
    ctx: &Context<'a>,
    expr: &'a Expr<'a>,
) -> Result<T, Error> {
    let resolved = resolver::resolve(arena, types, ctx.env, expr)?;
    if let Some(expected) = T::expected_type(types) {
        if unify(types, resolved, expected).is_none() {
            return Err(Error::ResultType {
                expected: expected.to_string(),
                found: resolved.to_string(),
            });
        }
    }

    let value = evaluator::eval(arena, types, ctx, expr)?;
    T::from_value(value).ok_or_else(|| Error::ResultType {
        expected: match T::expected_type(types) {
            Some(ty) => ty.to_string(),
            None => "_".to_string(),
        },
        found: value.type_of(types).to_string(),
    })
}
