//! Presence checks applied to create payloads before anything is persisted.
//!
//! A field counts as present when it is "truthy": strings must be non-empty
//! and ids must be non-zero. Nothing beyond presence is checked here.

use crate::error::CoreError;
use crate::types::DbId;

/// Keep `value` only if it is a non-empty string.
pub fn present_text(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Keep `value` only if it is a non-zero id.
pub fn present_id(value: Option<DbId>) -> Option<DbId> {
    value.filter(|id| *id != 0)
}

/// Build the validation error reported when required fields are missing.
///
/// `fields` is the human-readable field list, e.g. `"name or planet_id"`.
pub fn missing_fields(fields: &str) -> CoreError {
    CoreError::Validation(format!("Missing {fields}"))
}

/// Build the validation error reported when a reference does not resolve.
///
/// `fields` names the reference field(s), e.g. `"planet_id"`.
pub fn invalid_reference(fields: &str) -> CoreError {
    CoreError::Validation(format!("{fields} is invalid"))
}
