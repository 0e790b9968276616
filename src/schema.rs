//! Startup checks of schema declarations that the type system cannot see.

use crate::{
    entity::{ProductImages, ProductLines},
    error::AppError,
    ordering::{self, FieldCheckError},
};

/// Binds every order field declaration, collecting all failures.
pub fn check() -> Result<(), Vec<FieldCheckError>> {
    let errors: Vec<FieldCheckError> = [
        ordering::check::<ProductLines>(),
        ordering::check::<ProductImages>(),
    ]
    .into_iter()
    .filter_map(Result::err)
    .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// [`check`] folded into a single configuration error.
pub fn ensure_valid() -> Result<(), AppError> {
    check().map_err(|errors| {
        let message = errors
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("; ");
        AppError::Config(message)
    })
}
