//! Static type resolution.
//!
//! `resolve` assigns one type to an expression under an environment of bound
//! definitions, without touching any values. It drives the polymorphic parts
//! of evaluation: `IF` branch unification, `EQ` side unification, and the
//! types bound by `let`.
//!
//! Resolution runs as an explicit-work-stack trampoline. Every descent point
//! pushes a small frame onto a heap `Vec`, so a chain of N nested blocks
//! resolves in O(1) native stack frames and O(N) heap. Terms with a
//! predefined type are answered directly; only `Ref`, `Block`, `If`, `Eq`,
//! `Get` and `Some` involve the environment or subterms.
//!
//! Note that the resolver does not reject a `let` whose name is already
//! bound: it visits sub-environments freely, and redefinition is rejected by
//! the evaluator at binding time.

use bumpalo::Bump;

use crate::{
    env::Env,
    resolver::TypeError,
    terms::Expr,
    types::{unify, Type, TypeFactory},
};

enum Frame<'a> {
    /// Resolve an expression under an environment.
    Resolve(Env<'a>, &'a Expr<'a>),
    /// Bind the just-resolved value type and resolve the block body.
    BindValueType {
        env: Env<'a>,
        name: &'a str,
        body: &'a Expr<'a>,
    },
    /// Unify the just-resolved then/else branch types.
    UnifyIfBranches,
    /// Check the just-resolved `EQ` side types unify; the result is `BOOLEAN`.
    UnifyEqSides,
    /// Strip `OPTION` from the just-resolved `GET` operand type.
    UnwrapOption,
    /// Wrap the just-resolved `SOME` operand type in `OPTION`.
    WrapOption,
}

/// Resolve the type of `expr` under `env`.
pub fn resolve<'a>(
    arena: &'a Bump,
    types: &'a TypeFactory<'a>,
    env: Env<'a>,
    expr: &'a Expr<'a>,
) -> Result<&'a Type<'a>, TypeError> {
    let mut frames = vec![Frame::Resolve(env, expr)];
    let mut resolved: Vec<&'a Type<'a>> = Vec::new();

    while let Some(frame) = frames.pop() {
        match frame {
            Frame::Resolve(env, expr) => {
                if let Some(ty) = expr.predefined_type(types) {
                    resolved.push(ty);
                    continue;
                }
                match expr {
                    Expr::Ref(name) => match env.lookup(name) {
                        Some(binding) => resolved.push(binding.ty()),
                        None => {
                            return Err(TypeError::UnresolvedReference {
                                name: (*name).to_string(),
                            })
                        }
                    },
                    Expr::Block {
                        binding: None,
                        body,
                    } => frames.push(Frame::Resolve(env, *body)),
                    Expr::Block {
                        binding: Some(binding),
                        body,
                    } => {
                        frames.push(Frame::BindValueType {
                            env,
                            name: binding.name,
                            body: *body,
                        });
                        frames.push(Frame::Resolve(env, binding.value));
                    }
                    Expr::If {
                        then_branch,
                        else_branch,
                        ..
                    } => {
                        frames.push(Frame::UnifyIfBranches);
                        frames.push(Frame::Resolve(env, *else_branch));
                        frames.push(Frame::Resolve(env, *then_branch));
                    }
                    Expr::Eq(left, right) => {
                        frames.push(Frame::UnifyEqSides);
                        frames.push(Frame::Resolve(env, *right));
                        frames.push(Frame::Resolve(env, *left));
                    }
                    Expr::Get(inner) => {
                        frames.push(Frame::UnwrapOption);
                        frames.push(Frame::Resolve(env, *inner));
                    }
                    Expr::Some(inner) => {
                        frames.push(Frame::WrapOption);
                        frames.push(Frame::Resolve(env, *inner));
                    }
                    _ => unreachable!("predefined_type covers every other term"),
                }
            }
            Frame::BindValueType { env, name, body } => {
                let value_ty = pop(&mut resolved);
                let extended = env.bind(arena, name, value_ty, None);
                frames.push(Frame::Resolve(extended, body));
            }
            Frame::UnifyIfBranches => {
                let else_ty = pop(&mut resolved);
                let then_ty = pop(&mut resolved);
                match unify(types, then_ty, else_ty) {
                    Some(ty) => resolved.push(ty),
                    None => {
                        return Err(TypeError::IfBranchMismatch {
                            rtype: else_ty.to_string(),
                            ltype: then_ty.to_string(),
                        })
                    }
                }
            }
            Frame::UnifyEqSides => {
                let right_ty = pop(&mut resolved);
                let left_ty = pop(&mut resolved);
                if unify(types, left_ty, right_ty).is_none() {
                    return Err(TypeError::EqSidesMismatch {
                        rtype: right_ty.to_string(),
                        ltype: left_ty.to_string(),
                    });
                }
                resolved.push(types.boolean());
            }
            Frame::UnwrapOption => {
                let ty = pop(&mut resolved);
                match ty {
                    Type::Option(inner) => resolved.push(*inner),
                    other => {
                        return Err(TypeError::GetOnNonOption {
                            found: other.to_string(),
                        })
                    }
                }
            }
            Frame::WrapOption => {
                let ty = pop(&mut resolved);
                resolved.push(types.option(ty));
            }
        }
    }

    Ok(pop(&mut resolved))
}

fn pop<'a>(stack: &mut Vec<&'a Type<'a>>) -> &'a Type<'a> {
    stack.pop().expect("resolution stack underflow")
}
