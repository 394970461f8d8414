//! Lexical environments.
//!
//! An environment maps names to `(type, value-slot)` bindings. The value slot
//! is absent during type-only resolution and filled during evaluation.
//!
//! Environments are immutable: `bind` extends by allocating a new head node
//! in the arena and leaves the parent untouched, so trampoline frames can
//! hold environments by value and sibling scopes never observe each other.
//! Rebinding an existing name is legal at this layer; the evaluator rejects
//! it at binding time.

use bumpalo::Bump;

use crate::{types::Type, values::Value};

#[derive(Clone, Copy)]
pub struct Env<'a> {
    head: Option<&'a Binding<'a>>,
}

pub struct Binding<'a> {
    name: &'a str,
    ty: &'a Type<'a>,
    value: Option<Value<'a>>,
    next: Option<&'a Binding<'a>>,
}

impl<'a> Binding<'a> {
    pub fn name(&self) -> &'a str {
        self.name
    }

    pub fn ty(&self) -> &'a Type<'a> {
        self.ty
    }

    pub fn value(&self) -> Option<Value<'a>> {
        self.value
    }
}

impl<'a> Env<'a> {
    pub const fn empty() -> Self {
        Env { head: None }
    }

    /// Extend with a new binding, shadowing nothing and mutating nothing.
    #[must_use]
    pub fn bind(
        &self,
        arena: &'a Bump,
        name: &str,
        ty: &'a Type<'a>,
        value: Option<Value<'a>>,
    ) -> Env<'a> {
        let binding = arena.alloc(Binding {
            name: arena.alloc_str(name),
            ty,
            value,
            next: self.head,
        });
        Env {
            head: Some(binding),
        }
    }

    /// Look a name up, returning the latest binding for it.
    pub fn lookup(&self, name: &str) -> Option<&'a Binding<'a>> {
        let mut next = self.head;
        while let Some(binding) = next {
            if binding.name == name {
                return Some(binding);
            }
            next = binding.next;
        }
        None
    }

    pub fn contains(&self, name: &str) -> bool {
        self.lookup(name).is_some()
    }
}

impl Default for Env<'_> {
    fn default() -> Self {
        Env::empty()
    }
}
