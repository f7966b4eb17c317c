//! Internal helpers shared by the combinator implementations.

/// Unpack a successful outcome into `(cursor, value)`, or return its
/// failure from the enclosing `parse` method.
///
/// The failure keeps the position it was reported at. Combinators that
/// report at their own start position call [`Failure::relocate`] instead.
///
/// [`Failure::relocate`]: crate::Failure::relocate
macro_rules! chain {
    ($outcome:expr) => {
        match $outcome {
            $crate::Outcome::Success { cursor, value } => (cursor, value),
            $crate::Outcome::Failure(failure) => {
                return $crate::Outcome::Failure(failure);
            }
        }
    };
}
