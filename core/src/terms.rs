//! The Keel expression algebra.
//!
//! Expressions form a closed algebraic set allocated in a caller-supplied
//! arena; children are `&'a Expr<'a>` references, so trees of any depth are
//! freed in one shot and cheap to walk from trampoline frames.
//!
//! Scripts are pure: no user-defined functions, no recursion, no loops, no
//! mutation. The only binding form is a `let` attached to a block.

use bumpalo::Bump;
use serde::Serialize;

use crate::types::{Type, TypeFactory};

/// Transaction field selectors available to scripts.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TxField {
    Id,
    Type,
    SenderPk,
    BodyBytes,
    Proof(u8),
}

/// A single `let` binding attached to a block.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Let<'a> {
    pub name: &'a str,
    pub value: &'a Expr<'a>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expr<'a> {
    ConstInt(i64),
    ConstByteVector(&'a [u8]),
    True,
    False,
    None,
    Some(&'a Expr<'a>),
    Ref(&'a str),
    Sum(&'a Expr<'a>, &'a Expr<'a>),
    Ge(&'a Expr<'a>, &'a Expr<'a>),
    Gt(&'a Expr<'a>, &'a Expr<'a>),
    Eq(&'a Expr<'a>, &'a Expr<'a>),
    And(&'a Expr<'a>, &'a Expr<'a>),
    Or(&'a Expr<'a>, &'a Expr<'a>),
    If {
        cond: &'a Expr<'a>,
        then_branch: &'a Expr<'a>,
        else_branch: &'a Expr<'a>,
    },
    IsDefined(&'a Expr<'a>),
    Get(&'a Expr<'a>),
    Block {
        binding: Option<Let<'a>>,
        body: &'a Expr<'a>,
    },
    SigVerify {
        message: &'a Expr<'a>,
        signature: &'a Expr<'a>,
        public_key: &'a Expr<'a>,
    },
    Height,
    TxField(TxField),
}

impl<'a> Expr<'a> {
    pub fn const_int(arena: &'a Bump, value: i64) -> &'a Expr<'a> {
        arena.alloc(Expr::ConstInt(value))
    }

    pub fn const_byte_vector(arena: &'a Bump, bytes: &[u8]) -> &'a Expr<'a> {
        arena.alloc(Expr::ConstByteVector(arena.alloc_slice_copy(bytes)))
    }

    pub fn boolean(arena: &'a Bump, value: bool) -> &'a Expr<'a> {
        arena.alloc(if value { Expr::True } else { Expr::False })
    }

    pub fn none(arena: &'a Bump) -> &'a Expr<'a> {
        arena.alloc(Expr::None)
    }

    pub fn some(arena: &'a Bump, inner: &'a Expr<'a>) -> &'a Expr<'a> {
        arena.alloc(Expr::Some(inner))
    }

    pub fn reference(arena: &'a Bump, name: &str) -> &'a Expr<'a> {
        arena.alloc(Expr::Ref(arena.alloc_str(name)))
    }

    pub fn sum(arena: &'a Bump, left: &'a Expr<'a>, right: &'a Expr<'a>) -> &'a Expr<'a> {
        arena.alloc(Expr::Sum(left, right))
    }

    pub fn ge(arena: &'a Bump, left: &'a Expr<'a>, right: &'a Expr<'a>) -> &'a Expr<'a> {
        arena.alloc(Expr::Ge(left, right))
    }

    pub fn gt(arena: &'a Bump, left: &'a Expr<'a>, right: &'a Expr<'a>) -> &'a Expr<'a> {
        arena.alloc(Expr::Gt(left, right))
    }

    pub fn eq(arena: &'a Bump, left: &'a Expr<'a>, right: &'a Expr<'a>) -> &'a Expr<'a> {
        arena.alloc(Expr::Eq(left, right))
    }

    pub fn and(arena: &'a Bump, left: &'a Expr<'a>, right: &'a Expr<'a>) -> &'a Expr<'a> {
        arena.alloc(Expr::And(left, right))
    }

    pub fn or(arena: &'a Bump, left: &'a Expr<'a>, right: &'a Expr<'a>) -> &'a Expr<'a> {
        arena.alloc(Expr::Or(left, right))
    }

    pub fn if_then_else(
        arena: &'a Bump,
        cond: &'a Expr<'a>,
        then_branch: &'a Expr<'a>,
        else_branch: &'a Expr<'a>,
    ) -> &'a Expr<'a> {
        arena.alloc(Expr::If {
            cond,
            then_branch,
            else_branch,
        })
    }

    pub fn is_defined(arena: &'a Bump, inner: &'a Expr<'a>) -> &'a Expr<'a> {
        arena.alloc(Expr::IsDefined(inner))
    }

    pub fn get(arena: &'a Bump, inner: &'a Expr<'a>) -> &'a Expr<'a> {
        arena.alloc(Expr::Get(inner))
    }

    /// A block with no binding, `BLOCK(None, body)`.
    pub fn block(arena: &'a Bump, body: &'a Expr<'a>) -> &'a Expr<'a> {
        arena.alloc(Expr::Block {
            binding: None,
            body,
        })
    }

    /// `let name = value` scoped over `body`.
    pub fn let_in(
        arena: &'a Bump,
        name: &str,
        value: &'a Expr<'a>,
        body: &'a Expr<'a>,
    ) -> &'a Expr<'a> {
        arena.alloc(Expr::Block {
            binding: Some(Let {
                name: arena.alloc_str(name),
                value,
            }),
            body,
        })
    }

    pub fn sig_verify(
        arena: &'a Bump,
        message: &'a Expr<'a>,
        signature: &'a Expr<'a>,
        public_key: &'a Expr<'a>,
    ) -> &'a Expr<'a> {
        arena.alloc(Expr::SigVerify {
            message,
            signature,
            public_key,
        })
    }

    pub fn height(arena: &'a Bump) -> &'a Expr<'a> {
        arena.alloc(Expr::Height)
    }

    pub fn tx_field(arena: &'a Bump, field: TxField) -> &'a Expr<'a> {
        arena.alloc(Expr::TxField(field))
    }

    /// The type of this term when it is independent of subterms and
    /// environment, or `None` for the context-dependent terms (`Ref`,
    /// `Block`, `If`, `Eq`, `Get`, `Some`), which only the resolver can type.
    pub fn predefined_type<'t>(&self, types: &'t TypeFactory<'t>) -> Option<&'t Type<'t>> {
        match self {
            Expr::ConstInt(_) | Expr::Sum(..) | Expr::Height => Some(types.int()),
            Expr::ConstByteVector(_) => Some(types.byte_vector()),
            Expr::True
            | Expr::False
            | Expr::Ge(..)
            | Expr::Gt(..)
            | Expr::And(..)
            | Expr::Or(..)
            | Expr::IsDefined(_)
            | Expr::SigVerify { .. } => Some(types.boolean()),
            Expr::None => Some(types.option(types.nothing())),
            Expr::TxField(field) => Some(match field {
                TxField::Id | TxField::SenderPk | TxField::BodyBytes => types.byte_vector(),
                TxField::Type => types.int(),
                TxField::Proof(_) => types.option(types.byte_vector()),
            }),
            Expr::Ref(_)
            | Expr::Some(_)
            | Expr::Eq(..)
            | Expr::If { .. }
            | Expr::Get(_)
            | Expr::Block { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn predefined_types() {
        let arena = Bump::new();
        let types = TypeFactory::new(&arena);

        let one = Expr::const_int(&arena, 1);
        assert_eq!(one.predefined_type(types), Some(types.int()));
        assert_eq!(
            Expr::sum(&arena, one, one).predefined_type(types),
            Some(types.int())
        );
        assert_eq!(
            Expr::boolean(&arena, true).predefined_type(types),
            Some(types.boolean())
        );
        assert_eq!(
            Expr::none(&arena).predefined_type(types),
            Some(types.option(types.nothing()))
        );
        assert_eq!(
            Expr::tx_field(&arena, TxField::Proof(0)).predefined_type(types),
            Some(types.option(types.byte_vector()))
        );
        assert_eq!(
            Expr::tx_field(&arena, TxField::SenderPk).predefined_type(types),
            Some(types.byte_vector())
        );
        assert_eq!(Expr::height(&arena).predefined_type(types), Some(types.int()));
    }

    #[test]
    fn context_dependent_terms_have_no_predefined_type() {
        let arena = Bump::new();
        let types = TypeFactory::new(&arena);

        let one = Expr::const_int(&arena, 1);
        assert_eq!(Expr::reference(&arena, "x").predefined_type(types), None);
        assert_eq!(Expr::some(&arena, one).predefined_type(types), None);
        assert_eq!(Expr::eq(&arena, one, one).predefined_type(types), None);
        assert_eq!(Expr::get(&arena, one).predefined_type(types), None);
        assert_eq!(Expr::block(&arena, one).predefined_type(types), None);
        assert_eq!(
            Expr::if_then_else(&arena, Expr::boolean(&arena, true), one, one)
                .predefined_type(types),
            None
        );
    }
}
