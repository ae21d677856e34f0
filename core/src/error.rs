use thiserror::Error;

/// Message of [`OptionalError::AbsentValueAccess`].
pub const NO_VALUE_PRESENT: &str = "No value present";

/// Failure to access the value of an absent [`Optional`](crate::Optional).
#[derive(Clone, Eq, PartialEq, Hash, Debug, Error)]
pub enum OptionalError {
  /// Value was accessed through [`get`](crate::Optional::get) or [`into_value`](crate::Optional::into_value).
  #[error("No value present")]
  AbsentValueAccess,
  /// Value was accessed through [`or_else_error`](crate::Optional::or_else_error), carrying the caller's message.
  #[error("{0}")]
  AbsentValueAccessWithMessage(String),
}

impl OptionalError {
  #[inline]
  pub fn with_message(message: impl Into<String>) -> Self {
    Self::AbsentValueAccessWithMessage(message.into())
  }

  #[inline]
  pub fn message(&self) -> &str {
    match self {
      Self::AbsentValueAccess => NO_VALUE_PRESENT,
      Self::AbsentValueAccessWithMessage(message) => message,
    }
  }
}
