//! Planet entity model, DTOs and views.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use swapi_core::error::CoreError;
use swapi_core::types::DbId;
use swapi_core::validation::{missing_fields, present_text};

use crate::models::person::Person;
use crate::models::species::Species;

/// A planet row from the `planets` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Planet {
    pub id: DbId,
    pub name: String,
    pub climate: Option<String>,
}

/// Request body for creating a planet.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreatePlanet {
    pub name: Option<String>,
    pub climate: Option<String>,
}

impl CreatePlanet {
    /// Check required fields, producing the row to insert.
    pub fn validate(self) -> Result<NewPlanet, CoreError> {
        let name = present_text(self.name).ok_or_else(|| missing_fields("name"))?;
        Ok(NewPlanet {
            name,
            climate: self.climate,
        })
    }
}

/// A validated planet ready to insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPlanet {
    pub name: String,
    pub climate: Option<String>,
}

/// Planet as it appears in `GET /planets` and in the create response.
///
/// Relations are exposed as ids.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlanetSummary {
    pub id: DbId,
    pub name: String,
    pub climate: Option<String>,
    pub people: Vec<DbId>,
    pub species: Vec<DbId>,
}

impl PlanetSummary {
    pub fn new(planet: Planet, people: &[Person], species: &[Species]) -> Self {
        Self {
            id: planet.id,
            name: planet.name,
            climate: planet.climate,
            people: people.iter().map(|p| p.id).collect(),
            species: species.iter().map(|s| s.id).collect(),
        }
    }
}

/// Planet as it appears in `GET /planets/{id}`.
///
/// Relations are resolved to names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlanetDetail {
    pub id: DbId,
    pub name: String,
    pub climate: Option<String>,
    pub people: Vec<String>,
    pub species: Vec<String>,
}

impl PlanetDetail {
    pub fn new(planet: Planet, people: Vec<Person>, species: Vec<Species>) -> Self {
        Self {
            id: planet.id,
            name: planet.name,
            climate: planet.climate,
            people: people.into_iter().map(|p| p.name).collect(),
            species: species.into_iter().map(|s| s.name).collect(),
        }
    }
}
