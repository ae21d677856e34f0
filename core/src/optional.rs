use crate::error::OptionalError;

/// A value that is either present or absent.
///
/// Created through the factories [`of`](Self::of), [`empty`](Self::empty), and [`of_nullable`](Self::of_nullable)
/// (or `From<Option<T>>`). Operations never change the state of an existing container; transformations consume it
/// and produce a new one.
#[derive(Clone, Copy, Ord, PartialOrd, Eq, PartialEq, Hash, Debug)]
pub enum Optional<T> {
  Present(T),
  Absent,
}

impl<T> Optional<T> {
  /// Creates a present container holding `value`.
  #[inline]
  pub const fn of(value: T) -> Self { Self::Present(value) }

  /// Creates an absent container.
  #[inline]
  pub const fn empty() -> Self { Self::Absent }

  /// Creates a present container from `Some(value)`, or an absent one from `None`.
  #[inline]
  pub fn of_nullable(value: Option<T>) -> Self {
    match value {
      Some(value) => Self::Present(value),
      None => Self::Absent,
    }
  }


  /// Returns a reference to the value, or [`OptionalError::AbsentValueAccess`] if absent.
  #[inline]
  pub fn get(&self) -> Result<&T, OptionalError> {
    match self {
      Self::Present(value) => Ok(value),
      Self::Absent => Err(absent_access::<T>(OptionalError::AbsentValueAccess)),
    }
  }

  /// Returns the value, or [`OptionalError::AbsentValueAccess`] if absent.
  #[inline]
  pub fn into_value(self) -> Result<T, OptionalError> {
    match self {
      Self::Present(value) => Ok(value),
      Self::Absent => Err(absent_access::<T>(OptionalError::AbsentValueAccess)),
    }
  }

  #[inline]
  pub const fn is_present(&self) -> bool { matches!(self, Self::Present(_)) }

  #[inline]
  pub const fn is_empty(&self) -> bool { !self.is_present() }


  /// Calls `consumer` with the value if present.
  #[inline]
  pub fn if_present(&self, consumer: impl FnOnce(&T)) {
    if let Self::Present(value) = self {
      consumer(value);
    }
  }

  /// Calls `consumer` with the value if present, or `empty_action` if absent. Exactly one of them is called.
  #[inline]
  pub fn if_present_or_else(&self, consumer: impl FnOnce(&T), empty_action: impl FnOnce()) {
    match self {
      Self::Present(value) => consumer(value),
      Self::Absent => empty_action(),
    }
  }

  /// Calls `action` if absent.
  #[inline]
  pub fn if_empty(&self, action: impl FnOnce()) {
    if let Self::Absent = self {
      action();
    }
  }


  /// Returns the value if present, otherwise `other`.
  ///
  /// `other` is evaluated by the caller regardless of the state; use [`or_else_get`](Self::or_else_get) to only
  /// compute the fallback when it is needed.
  #[inline]
  pub fn or_else(self, other: T) -> T {
    match self {
      Self::Present(value) => value,
      Self::Absent => other,
    }
  }

  /// Returns the value if present, otherwise the result of calling `other`.
  #[inline]
  pub fn or_else_get(self, other: impl FnOnce() -> T) -> T {
    match self {
      Self::Present(value) => value,
      Self::Absent => other(),
    }
  }

  /// Returns the value if present, otherwise [`OptionalError::AbsentValueAccessWithMessage`] carrying `message`.
  #[inline]
  pub fn or_else_error(self, message: impl Into<String>) -> Result<T, OptionalError> {
    match self {
      Self::Present(value) => Ok(value),
      Self::Absent => Err(absent_access::<T>(OptionalError::with_message(message))),
    }
  }


  /// Maps the value with `f` if present. `f` is not called if absent.
  #[inline]
  pub fn map<R>(self, f: impl FnOnce(T) -> R) -> Optional<R> {
    match self {
      Self::Present(value) => Optional::Present(f(value)),
      Self::Absent => Optional::Absent,
    }
  }

  /// Maps the value with `f` if present, where `f` itself may produce an absent container.
  #[inline]
  pub fn and_then<R>(self, f: impl FnOnce(T) -> Optional<R>) -> Optional<R> {
    match self {
      Self::Present(value) => f(value),
      Self::Absent => Optional::Absent,
    }
  }

  /// Keeps the value only if `predicate` holds for it.
  #[inline]
  pub fn filter(self, predicate: impl FnOnce(&T) -> bool) -> Self {
    match self {
      Self::Present(value) => if predicate(&value) { Self::Present(value) } else { Self::Absent },
      Self::Absent => Self::Absent,
    }
  }

  /// Returns `self` if present, otherwise `other`.
  #[inline]
  pub fn or(self, other: Self) -> Self {
    match self {
      Self::Present(_) => self,
      Self::Absent => other,
    }
  }


  #[inline]
  pub const fn as_ref(&self) -> Optional<&T> {
    match self {
      Self::Present(value) => Optional::Present(value),
      Self::Absent => Optional::Absent,
    }
  }

  #[inline]
  pub fn as_mut(&mut self) -> Optional<&mut T> {
    match self {
      Self::Present(value) => Optional::Present(value),
      Self::Absent => Optional::Absent,
    }
  }

  /// Iterates over the value if present, yielding at most one item.
  #[inline]
  pub fn iter(&self) -> std::option::IntoIter<&T> {
    self.as_ref().into_option().into_iter()
  }

  #[inline]
  pub fn into_option(self) -> Option<T> {
    match self {
      Self::Present(value) => Some(value),
      Self::Absent => None,
    }
  }
}

#[inline]
fn absent_access<T>(error: OptionalError) -> OptionalError {
  #[cfg(feature = "tracing")]
  tracing::debug!(type_name = std::any::type_name::<T>(), message = error.message(), "accessed value of absent optional");
  error
}


impl<T> Default for Optional<T> {
  #[inline]
  fn default() -> Self { Self::Absent }
}

impl<T> From<Option<T>> for Optional<T> {
  #[inline]
  fn from(value: Option<T>) -> Self { Self::of_nullable(value) }
}

impl<T> From<Optional<T>> for Option<T> {
  #[inline]
  fn from(optional: Optional<T>) -> Self { optional.into_option() }
}

impl<T> IntoIterator for Optional<T> {
  type Item = T;
  type IntoIter = std::option::IntoIter<T>;
  #[inline]
  fn into_iter(self) -> Self::IntoIter { self.into_option().into_iter() }
}

impl<'a, T> IntoIterator for &'a Optional<T> {
  type Item = &'a T;
  type IntoIter = std::option::IntoIter<&'a T>;
  #[inline]
  fn into_iter(self) -> Self::IntoIter { self.iter() }
}
