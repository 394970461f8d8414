use bumpalo::Bump;
use hashbrown::HashMap;
use std::cell::RefCell;

use crate::types::Type;

/// Arena-backed factory that interns every type it hands out.
///
/// Structurally equal types are pointer-equal, so `&'t Type<'t>` references
/// are cheap to copy through resolver and evaluator state, and deeply nested
/// `OPTION` types are freed in one shot when the arena is dropped.
pub struct TypeFactory<'t> {
    arena: &'t Bump,
    interned: RefCell<HashMap<Type<'t>, &'t Type<'t>>>,
}

impl<'t> TypeFactory<'t> {
    pub fn new(arena: &'t Bump) -> &'t Self {
        arena.alloc(Self {
            arena,
            interned: RefCell::new(HashMap::new()),
        })
    }

    fn intern(&self, ty: Type<'t>) -> &'t Type<'t> {
        if let Some(&interned) = self.interned.borrow().get(&ty) {
            return interned;
        }
        let arena_ty = self.arena.alloc(ty);
        self.interned.borrow_mut().insert(ty, arena_ty);
        arena_ty
    }

    // Factory methods for types.
    pub fn int(&self) -> &'t Type<'t> {
        self.intern(Type::Int)
    }
    pub fn boolean(&self) -> &'t Type<'t> {
        self.intern(Type::Boolean)
    }
    pub fn byte_vector(&self) -> &'t Type<'t> {
        self.intern(Type::ByteVector)
    }
    pub fn nothing(&self) -> &'t Type<'t> {
        self.intern(Type::Nothing)
    }
    pub fn option(&self, inner: &'t Type<'t>) -> &'t Type<'t> {
        self.intern(Type::Option(inner))
    }
}
