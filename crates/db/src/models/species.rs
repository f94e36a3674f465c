//! Species entity model, DTOs and views.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use swapi_core::error::CoreError;
use swapi_core::types::DbId;
use swapi_core::validation::{missing_fields, present_id, present_text};

use crate::models::person::Person;

/// A species row from the `species` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Species {
    pub id: DbId,
    pub name: String,
    pub planet_id: DbId,
}

/// Request body for creating a species.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateSpecies {
    pub name: Option<String>,
    pub planet_id: Option<DbId>,
}

impl CreateSpecies {
    /// Check required fields, producing the row to insert.
    ///
    /// Whether `planet_id` resolves is checked by the store at insert time.
    pub fn validate(self) -> Result<NewSpecies, CoreError> {
        match (present_text(self.name), present_id(self.planet_id)) {
            (Some(name), Some(planet_id)) => Ok(NewSpecies { name, planet_id }),
            _ => Err(missing_fields("name or planet_id")),
        }
    }
}

/// A validated species ready to insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSpecies {
    pub name: String,
    pub planet_id: DbId,
}

/// Species as returned by `POST /species`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpeciesRecord {
    pub id: DbId,
    pub name: String,
    pub planet_id: DbId,
    pub people: Vec<DbId>,
}

impl SpeciesRecord {
    pub fn new(species: Species, people: &[Person]) -> Self {
        Self {
            id: species.id,
            name: species.name,
            planet_id: species.planet_id,
            people: people.iter().map(|p| p.id).collect(),
        }
    }
}

/// Species as it appears in both `GET /species` and `GET /species/{id}`.
///
/// The home planet and members are resolved to names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpeciesView {
    pub id: DbId,
    pub name: String,
    pub planet: Option<String>,
    pub people: Vec<String>,
}

impl SpeciesView {
    pub fn new(species: Species, planet: Option<String>, people: Vec<Person>) -> Self {
        Self {
            id: species.id,
            name: species.name,
            planet,
            people: people.into_iter().map(|p| p.name).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_rejects_missing_planet() {
        let input = CreateSpecies {
            name: Some("Gungan".into()),
            planet_id: None,
        };
        let err = input.validate().unwrap_err();
        assert_eq!(err.to_string(), "Validation failed: Missing name or planet_id");
    }

    #[test]
    fn validate_rejects_zero_planet_id() {
        let input = CreateSpecies {
            name: Some("Gungan".into()),
            planet_id: Some(0),
        };
        assert!(input.validate().is_err());
    }

    #[test]
    fn view_serializes_unresolved_planet_as_null() {
        let species = Species {
            id: 1,
            name: "Gungan".into(),
            planet_id: 1,
        };
        let json = serde_json::to_value(SpeciesView::new(species, None, vec![])).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"id": 1, "name": "Gungan", "planet": null, "people": []})
        );
    }
}
