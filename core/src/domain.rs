//! Read-only view of the transaction and chain under validation.

use crate::env::Env;

/// What a script is allowed to observe about the world.
///
/// Supplied by the transaction validator; the evaluator treats it as opaque
/// read-only data. Proof slots that are not populated yield `None`, which a
/// script observes as the `NONE` value.
pub trait Domain {
    /// Height of the chain at validation time.
    fn height(&self) -> i64;

    /// Transaction id bytes.
    fn id(&self) -> &[u8];

    /// Numeric transaction type tag.
    fn tx_type(&self) -> i64;

    /// Public key of the transaction sender.
    fn sender_pk(&self) -> &[u8];

    /// The signed body of the transaction.
    fn body_bytes(&self) -> &[u8];

    /// Proof (signature slot) at `index`, if present.
    fn proof(&self, index: u8) -> Option<&[u8]>;
}

/// Everything an evaluation runs against: a domain view plus the initial
/// environment of external definitions.
///
/// Contexts are immutable for the duration of an evaluation; evaluating the
/// same `(context, expression)` pair twice yields the same outcome.
pub struct Context<'a> {
    pub domain: &'a dyn Domain,
    pub env: Env<'a>,
}

impl<'a> Context<'a> {
    pub fn new(domain: &'a dyn Domain) -> Self {
        Context {
            domain,
            env: Env::empty(),
        }
    }

    pub fn with_env(domain: &'a dyn Domain, env: Env<'a>) -> Self {
        Context { domain, env }
    }
}
