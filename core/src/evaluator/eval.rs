//! Core evaluation logic.
//!
//! Evaluation runs as an explicit-work-stack trampoline over two heap
//! stacks: control frames and intermediate values. Completing a frame either
//! pushes subframes or pushes a value for its parent frame, so expression
//! depth costs heap, never native stack.
//!
//! Ordering is strictly left-to-right; `AND`/`OR` decide before their second
//! argument runs, and `IF` never evaluates the untaken branch. `IF` and `EQ`
//! resolve their own type first, so a branch or side mismatch fails even
//! when the values at hand would have satisfied the operation.

use bumpalo::Bump;

use crate::{
    crypto,
    domain::Context,
    env::Env,
    evaluator::ExecutionError,
    resolver,
    terms::{Expr, TxField},
    types::{Type, TypeFactory},
    values::Value,
};

enum Frame<'a> {
    /// Evaluate an expression under an environment.
    Eval(Env<'a>, &'a Expr<'a>),
    /// Add the two just-evaluated integers.
    Sum,
    /// Compare the two just-evaluated integers.
    Ge,
    Gt,
    /// Compare the two just-evaluated values structurally.
    CompareValues,
    /// Decide on the just-evaluated left operand; evaluate `rhs` only if it
    /// did not short-circuit.
    AndRhs(Env<'a>, &'a Expr<'a>),
    OrRhs(Env<'a>, &'a Expr<'a>),
    /// Pick a branch from the just-evaluated condition.
    SelectBranch(Env<'a>, &'a Expr<'a>, &'a Expr<'a>),
    /// Wrap the just-evaluated value in `SOME`.
    WrapSome,
    /// Test whether the just-evaluated option is `SOME`.
    CheckDefined,
    /// Unwrap the just-evaluated option; `NONE` is a runtime failure.
    UnwrapOption,
    /// Bind the just-evaluated value and evaluate the block body under the
    /// extended environment.
    BindValue {
        env: Env<'a>,
        name: &'a str,
        ty: &'a Type<'a>,
        body: &'a Expr<'a>,
    },
    /// Check the three just-evaluated byte vectors (message, signature,
    /// public key) against the signature primitive.
    VerifySignature,
}

/// Evaluate `expr` against `ctx`, producing a value of its resolved type or
/// the first diagnostic encountered in evaluation order.
pub fn eval<'a>(
    arena: &'a Bump,
    types: &'a TypeFactory<'a>,
    ctx: &Context<'a>,
    expr: &'a Expr<'a>,
) -> Result<Value<'a>, ExecutionError> {
    let mut frames = vec![Frame::Eval(ctx.env, expr)];
    let mut values: Vec<Value<'a>> = Vec::new();

    while let Some(frame) = frames.pop() {
        match frame {
            Frame::Eval(env, expr) => match expr {
                Expr::ConstInt(value) => values.push(Value::Int(*value)),
                Expr::ConstByteVector(bytes) => values.push(Value::ByteVector(*bytes)),
                Expr::True => values.push(Value::Boolean(true)),
                Expr::False => values.push(Value::Boolean(false)),
                Expr::None => values.push(Value::none()),
                Expr::Some(inner) => {
                    frames.push(Frame::WrapSome);
                    frames.push(Frame::Eval(env, *inner));
                }
                Expr::Ref(name) => match env.lookup(name).and_then(|binding| binding.value()) {
                    Some(value) => values.push(value),
                    None => {
                        return Err(ExecutionError::DefinitionNotFound {
                            name: (*name).to_string(),
                        })
                    }
                },
                Expr::Sum(left, right) => {
                    frames.push(Frame::Sum);
                    frames.push(Frame::Eval(env, *right));
                    frames.push(Frame::Eval(env, *left));
                }
                Expr::Ge(left, right) => {
                    frames.push(Frame::Ge);
                    frames.push(Frame::Eval(env, *right));
                    frames.push(Frame::Eval(env, *left));
                }
                Expr::Gt(left, right) => {
                    frames.push(Frame::Gt);
                    frames.push(Frame::Eval(env, *right));
                    frames.push(Frame::Eval(env, *left));
                }
                Expr::Eq(left, right) => {
                    // Unifiability of the two sides is part of the contract,
                    // checked before either side runs.
                    resolver::resolve(arena, types, env, expr)?;
                    frames.push(Frame::CompareValues);
                    frames.push(Frame::Eval(env, *right));
                    frames.push(Frame::Eval(env, *left));
                }
                Expr::And(left, right) => {
                    frames.push(Frame::AndRhs(env, *right));
                    frames.push(Frame::Eval(env, *left));
                }
                Expr::Or(left, right) => {
                    frames.push(Frame::OrRhs(env, *right));
                    frames.push(Frame::Eval(env, *left));
                }
                Expr::If {
                    cond,
                    then_branch,
                    else_branch,
                } => {
                    // Branch unification is enforced up front; a mismatched
                    // conditional fails even if the taken branch would not.
                    resolver::resolve(arena, types, env, expr)?;
                    frames.push(Frame::SelectBranch(env, *then_branch, *else_branch));
                    frames.push(Frame::Eval(env, *cond));
                }
                Expr::IsDefined(inner) => {
                    frames.push(Frame::CheckDefined);
                    frames.push(Frame::Eval(env, *inner));
                }
                Expr::Get(inner) => {
                    frames.push(Frame::UnwrapOption);
                    frames.push(Frame::Eval(env, *inner));
                }
                Expr::Block {
                    binding: None,
                    body,
                } => frames.push(Frame::Eval(env, *body)),
                Expr::Block {
                    binding: Some(binding),
                    body,
                } => {
                    let value_ty = resolver::resolve(arena, types, env, binding.value)?;
                    if env.contains(binding.name) {
                        return Err(ExecutionError::AlreadyDefined {
                            name: binding.name.to_string(),
                        });
                    }
                    frames.push(Frame::BindValue {
                        env,
                        name: binding.name,
                        ty: value_ty,
                        body: *body,
                    });
                    frames.push(Frame::Eval(env, binding.value));
                }
                Expr::SigVerify {
                    message,
                    signature,
                    public_key,
                } => {
                    frames.push(Frame::VerifySignature);
                    frames.push(Frame::Eval(env, *public_key));
                    frames.push(Frame::Eval(env, *signature));
                    frames.push(Frame::Eval(env, *message));
                }
                Expr::Height => values.push(Value::Int(ctx.domain.height())),
                Expr::TxField(field) => values.push(tx_field_value(arena, ctx, *field)),
            },

            Frame::Sum => {
                let right = pop(&mut values).as_int()?;
                let left = pop(&mut values).as_int()?;
                values.push(Value::Int(left.wrapping_add(right)));
            }
            Frame::Ge => {
                let right = pop(&mut values).as_int()?;
                let left = pop(&mut values).as_int()?;
                values.push(Value::Boolean(left >= right));
            }
            Frame::Gt => {
                let right = pop(&mut values).as_int()?;
                let left = pop(&mut values).as_int()?;
                values.push(Value::Boolean(left > right));
            }
            Frame::CompareValues => {
                let right = pop(&mut values);
                let left = pop(&mut values);
                values.push(Value::Boolean(left == right));
            }
            Frame::AndRhs(env, rhs) => {
                if pop(&mut values).as_boolean()? {
                    frames.push(Frame::Eval(env, rhs));
                } else {
                    values.push(Value::Boolean(false));
                }
            }
            Frame::OrRhs(env, rhs) => {
                if pop(&mut values).as_boolean()? {
                    values.push(Value::Boolean(true));
                } else {
                    frames.push(Frame::Eval(env, rhs));
                }
            }
            Frame::SelectBranch(env, then_branch, else_branch) => {
                let taken = if pop(&mut values).as_boolean()? {
                    then_branch
                } else {
                    else_branch
                };
                frames.push(Frame::Eval(env, taken));
            }
            Frame::WrapSome => {
                let inner = pop(&mut values);
                values.push(Value::some(arena, inner));
            }
            Frame::CheckDefined => {
                let option = pop(&mut values).as_option()?;
                values.push(Value::Boolean(option.is_some()));
            }
            Frame::UnwrapOption => match pop(&mut values).as_option()? {
                Some(inner) => values.push(*inner),
                None => return Err(ExecutionError::GetNone),
            },
            Frame::BindValue {
                env,
                name,
                ty,
                body,
            } => {
                let value = pop(&mut values);
                tracing::trace!(name, "extending scope");
                let extended = env.bind(arena, name, ty, Some(value));
                frames.push(Frame::Eval(extended, body));
            }
            Frame::VerifySignature => {
                let public_key = pop(&mut values).as_byte_vector()?;
                let signature = pop(&mut values).as_byte_vector()?;
                let message = pop(&mut values).as_byte_vector()?;
                values.push(Value::Boolean(crypto::verify_signature(
                    signature, message, public_key,
                )));
            }
        }
    }

    Ok(pop(&mut values))
}

fn pop<'a>(stack: &mut Vec<Value<'a>>) -> Value<'a> {
    stack.pop().expect("evaluation stack underflow")
}

fn tx_field_value<'a>(arena: &'a Bump, ctx: &Context<'a>, field: TxField) -> Value<'a> {
    match field {
        TxField::Id => Value::ByteVector(ctx.domain.id()),
        TxField::Type => Value::Int(ctx.domain.tx_type()),
        TxField::SenderPk => Value::ByteVector(ctx.domain.sender_pk()),
        TxField::BodyBytes => Value::ByteVector(ctx.domain.body_bytes()),
        TxField::Proof(index) => match ctx.domain.proof(index) {
            Some(bytes) => Value::some(arena, Value::ByteVector(bytes)),
            None => Value::none(),
        },
    }
}
