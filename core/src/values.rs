//! Runtime values.
//!
//! `Value` is the tagged union produced by evaluation. Values are `Copy`:
//! byte vectors and wrapped option payloads live in the caller's arena, so a
//! value is at most a tag plus a reference.

use bumpalo::Bump;
use std::fmt;

use crate::types::{Type, TypeFactory};

#[derive(Debug, Clone, Copy)]
pub enum Value<'a> {
    Int(i64),
    Boolean(bool),
    ByteVector(&'a [u8]),
    Option(Option<&'a Value<'a>>),
}

/// A value of one kind was found where another was required.
///
/// The resolver guarantees well-typed scripts never produce this; surfacing
/// it as a diagnostic keeps a resolver/evaluator disagreement observable
/// instead of undefined.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KindError {
    pub expected: &'static str,
    pub found: &'static str,
}

impl fmt::Display for KindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Unexpected {} value where {} was required",
            self.found, self.expected
        )
    }
}

impl std::error::Error for KindError {}

impl<'a> Value<'a> {
    /// Create a byte-vector value, copying the bytes into the arena.
    pub fn byte_vector(arena: &'a Bump, bytes: &[u8]) -> Self {
        Value::ByteVector(arena.alloc_slice_copy(bytes))
    }

    /// Wrap a value in `SOME`, allocating the payload in the arena.
    pub fn some(arena: &'a Bump, inner: Value<'a>) -> Self {
        Value::Option(Some(arena.alloc(inner)))
    }

    /// The `NONE` value.
    pub fn none() -> Self {
        Value::Option(None)
    }

    /// Short tag used in kind-mismatch diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Int(_) => "INT",
            Value::Boolean(_) => "BOOLEAN",
            Value::ByteVector(_) => "BYTEVECTOR",
            Value::Option(_) => "OPTION[_]",
        }
    }

    pub fn as_int(&self) -> Result<i64, KindError> {
        match self {
            Value::Int(value) => Ok(*value),
            other => Err(KindError {
                expected: "INT",
                found: other.kind(),
            }),
        }
    }

    pub fn as_boolean(&self) -> Result<bool, KindError> {
        match self {
            Value::Boolean(value) => Ok(*value),
            other => Err(KindError {
                expected: "BOOLEAN",
                found: other.kind(),
            }),
        }
    }

    pub fn as_byte_vector(&self) -> Result<&'a [u8], KindError> {
        match self {
            Value::ByteVector(bytes) => Ok(*bytes),
            other => Err(KindError {
                expected: "BYTEVECTOR",
                found: other.kind(),
            }),
        }
    }

    pub fn as_option(&self) -> Result<Option<&'a Value<'a>>, KindError> {
        match self {
            Value::Option(inner) => Ok(*inner),
            other => Err(KindError {
                expected: "OPTION[_]",
                found: other.kind(),
            }),
        }
    }

    /// The runtime type of this value; `NONE` reports `OPTION[NOTHING]`.
    pub fn type_of<'t>(&self, types: &'t TypeFactory<'t>) -> &'t Type<'t> {
        let mut wrappers = 0usize;
        let mut value = self;
        let leaf = loop {
            match value {
                Value::Int(_) => break types.int(),
                Value::Boolean(_) => break types.boolean(),
                Value::ByteVector(_) => break types.byte_vector(),
                Value::Option(None) => {
                    wrappers += 1;
                    break types.nothing();
                }
                Value::Option(Some(inner)) => {
                    wrappers += 1;
                    value = *inner;
                }
            }
        };
        (0..wrappers).fold(leaf, |ty, _| types.option(ty))
    }
}

// Structural equality: byte vectors compare byte-wise, options peel
// iteratively so nesting depth cannot exhaust the native stack.
impl PartialEq for Value<'_> {
    fn eq(&self, other: &Self) -> bool {
        let (mut a, mut b) = (self, other);
        loop {
            match (a, b) {
                (Value::Int(x), Value::Int(y)) => return x == y,
                (Value::Boolean(x), Value::Boolean(y)) => return x == y,
                (Value::ByteVector(x), Value::ByteVector(y)) => return x == y,
                (Value::Option(None), Value::Option(None)) => return true,
                (Value::Option(Some(x)), Value::Option(Some(y))) => {
                    a = *x;
                    b = *y;
                }
                _ => return false,
            }
        }
    }
}

impl Eq for Value<'_> {}

impl fmt::Display for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut value = self;
        let mut wrappers = 0usize;
        loop {
            match value {
                Value::Int(n) => break write!(f, "{}", n)?,
                Value::Boolean(b) => break write!(f, "{}", b)?,
                Value::ByteVector(bytes) => {
                    for byte in *bytes {
                        write!(f, "{:02x}", byte)?;
                    }
                    break;
                }
                Value::Option(None) => break f.write_str("NONE")?,
                Value::Option(Some(inner)) => {
                    f.write_str("SOME(")?;
                    wrappers += 1;
                    value = *inner;
                }
            }
        }
        for _ in 0..wrappers {
            f.write_str(")")?;
        }
        Ok(())
    }
}
