//! Person entity model, DTOs and views.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use swapi_core::error::CoreError;
use swapi_core::types::DbId;
use swapi_core::validation::{missing_fields, present_id, present_text};

/// A person row from the `people` table.
///
/// Serialized as-is for `GET /people` and `POST /people`.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Person {
    pub id: DbId,
    pub name: String,
    pub planet_id: DbId,
    pub species_id: DbId,
}

/// Request body for creating a person.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreatePerson {
    pub name: Option<String>,
    pub planet_id: Option<DbId>,
    pub species_id: Option<DbId>,
}

impl CreatePerson {
    /// Check required fields, producing the row to insert.
    pub fn validate(self) -> Result<NewPerson, CoreError> {
        match (
            present_text(self.name),
            present_id(self.planet_id),
            present_id(self.species_id),
        ) {
            (Some(name), Some(planet_id), Some(species_id)) => Ok(NewPerson {
                name,
                planet_id,
                species_id,
            }),
            _ => Err(missing_fields("name, planet_id or species_id")),
        }
    }
}

/// A validated person ready to insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPerson {
    pub name: String,
    pub planet_id: DbId,
    pub species_id: DbId,
}

/// Person as it appears in `GET /people/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PersonDetail {
    pub id: DbId,
    pub name: String,
    pub planet: Option<String>,
    pub species: Option<String>,
}

impl PersonDetail {
    pub fn new(person: Person, planet: Option<String>, species: Option<String>) -> Self {
        Self {
            id: person.id,
            name: person.name,
            planet,
            species,
        }
    }
}
