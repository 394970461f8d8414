use serde::Serialize;
use std::fmt::{self, Display};
use std::hash::{Hash, Hasher};

/// The closed set of types a Keel expression can resolve to.
///
/// `Option` nests recursively through interned references handed out by
/// [`TypeFactory`](crate::types::TypeFactory); `Nothing` is the inner type of
/// the `NONE` literal and unifies with every other type.
///
/// The `Display` forms (`INT`, `OPTION[BYTEVECTOR]`, ...) appear verbatim in
/// diagnostics, so they are part of the observable contract.
#[derive(Serialize, Debug, Clone, Copy)]
pub enum Type<'t> {
    Int,
    Boolean,
    ByteVector,
    Option(&'t Type<'t>),
    Nothing,
}

// Inner references always come from a TypeFactory, which interns them, so
// pointer identity coincides with structural equality and keeps equality and
// hashing O(1) no matter how deeply options nest.
impl PartialEq for Type<'_> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Type::Int, Type::Int) => true,
            (Type::Boolean, Type::Boolean) => true,
            (Type::ByteVector, Type::ByteVector) => true,
            (Type::Nothing, Type::Nothing) => true,
            (Type::Option(a), Type::Option(b)) => std::ptr::eq(*a, *b),
            _ => false,
        }
    }
}

impl Eq for Type<'_> {}

impl Hash for Type<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        if let Type::Option(inner) = self {
            (*inner as *const Type).hash(state);
        }
    }
}

impl Display for Type<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Peel option wrappers iteratively; nesting depth is unbounded.
        let mut ty = self;
        let mut wrappers = 0usize;
        loop {
            match ty {
                Type::Int => break f.write_str("INT")?,
                Type::Boolean => break f.write_str("BOOLEAN")?,
                Type::ByteVector => break f.write_str("BYTEVECTOR")?,
                Type::Nothing => break f.write_str("NOTHING")?,
                Type::Option(inner) => {
                    f.write_str("OPTION[")?;
                    wrappers += 1;
                    ty = inner;
                }
            }
        }
        for _ in 0..wrappers {
            f.write_str("]")?;
        }
        Ok(())
    }
}
