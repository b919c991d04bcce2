//! Responder output conversion.

use crate::error::BoxError;

/// Trait for converting a handler's output into a dispatch outcome.
///
/// # Default Implementations
///
/// - `()` → success
/// - `Option<T>` → `None` is success, `Some` delegates to `T`
/// - `Result<T, E>` → delegates to `T` or boxes the error
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not an `IntoOutcome`",
    label = "missing `IntoOutcome` implementation",
    note = "Responders must return `()`, `Option<T>` or `Result<T, E>`."
)]
pub trait IntoOutcome {
    /// Convert the output into success or a boxed error.
    fn into_outcome(self) -> Result<(), BoxError>;
}

impl IntoOutcome for () {
    fn into_outcome(self) -> Result<(), BoxError> {
        Ok(())
    }
}

impl<T, E> IntoOutcome for Result<T, E>
where
    T: IntoOutcome,
    E: Into<BoxError>,
{
    fn into_outcome(self) -> Result<(), BoxError> {
        match self {
            Ok(t) => t.into_outcome(),
            Err(e) => Err(e.into()),
        }
    }
}

impl<T: IntoOutcome> IntoOutcome for Option<T> {
    fn into_outcome(self) -> Result<(), BoxError> {
        match self {
            Some(t) => t.into_outcome(),
            None => Ok(()),
        }
    }
}
