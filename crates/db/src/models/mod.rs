//! Domain model structs, DTOs and views.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO whose fields are all optional, plus the
//!   validated insert struct it converts into
//! - The list/detail views served over HTTP

pub mod person;
pub mod planet;
pub mod species;
