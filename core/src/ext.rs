use crate::Optional;

/// Extension trait converting a standard [`Option`] into an [`Optional`].
pub trait IntoOptional<T> {
  fn into_optional(self) -> Optional<T>;
}

impl<T> IntoOptional<T> for Option<T> {
  #[inline]
  fn into_optional(self) -> Optional<T> { Optional::of_nullable(self) }
}
