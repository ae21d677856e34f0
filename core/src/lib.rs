//! A container for a value that may or may not be present, with combinators for working with it safely.

pub mod error;
pub mod ext;
pub mod optional;

pub use error::OptionalError;
pub use ext::IntoOptional;
pub use optional::Optional;
