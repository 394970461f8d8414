pub mod factory;
pub mod types;
pub mod unification;

pub use factory::TypeFactory;
pub use types::Type;
pub use unification::unify;
