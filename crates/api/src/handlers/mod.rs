//! Request handlers for planets, species and people.
//!
//! Each submodule provides async handler functions (list, get_by_id, create,
//! delete) for a single entity type. Handlers go through the injected
//! [`Store`](swapi_db::Store) and map errors via [`AppError`].

pub mod person;
pub mod planet;
pub mod species;

use swapi_core::validation::invalid_reference;
use swapi_db::StoreError;

use crate::error::AppError;

/// Turn a failed reference check into the validation error for `fields`.
fn reference_error(err: StoreError, fields: &str) -> AppError {
    match err {
        StoreError::MissingReference { entity, id } => {
            tracing::debug!(entity, id, "Rejected insert with unresolved reference");
            AppError::Core(invalid_reference(fields))
        }
        other => other.into(),
    }
}
