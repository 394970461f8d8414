//! Type unification for Keel's closed type algebra.
//!
//! `unify` is the partial function deciding whether two types are compatible
//! and returning the more-specific common type:
//!
//! - identical leaves unify to themselves;
//! - `NOTHING` unifies with any type `T`, yielding `T` (so `OPTION[NOTHING]`,
//!   the type of the `NONE` literal, absorbs into any `OPTION[T]`);
//! - `OPTION[A]` unifies with `OPTION[B]` iff `A` unifies with `B`.

use crate::types::{Type, TypeFactory};

/// Unify two types, returning the more-specific common type, or `None` when
/// the types are incompatible.
pub fn unify<'t>(
    types: &'t TypeFactory<'t>,
    t1: &'t Type<'t>,
    t2: &'t Type<'t>,
) -> Option<&'t Type<'t>> {
    tracing::trace!(%t1, %t2, "attempting unification");

    // Peel matched option wrappers iteratively so pathological nesting depth
    // cannot exhaust the native stack.
    let mut wrappers = 0usize;
    let (mut a, mut b) = (t1, t2);
    loop {
        match (a, b) {
            (&Type::Option(x), &Type::Option(y)) => {
                a = x;
                b = y;
                wrappers += 1;
            }
            _ => break,
        }
    }

    let unified = match (a, b) {
        (Type::Nothing, t) | (t, Type::Nothing) => t,
        (Type::Int, Type::Int) => a,
        (Type::Boolean, Type::Boolean) => a,
        (Type::ByteVector, Type::ByteVector) => a,
        _ => {
            tracing::trace!(%a, %b, "types do not unify");
            return None;
        }
    };

    Some((0..wrappers).fold(unified, |ty, _| types.option(ty)))
}
