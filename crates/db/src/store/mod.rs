//! Storage interface used by the HTTP handlers.
//!
//! ```text
//! ┌──────────────────────────────────────┐
//! │              Store trait             │
//! └──────────────────────────────────────┘
//!          ↑                     ↑
//! ┌────────┴────────┐   ┌────────┴────────┐
//! │   MemoryStore   │   │     PgStore     │
//! │ (tests, no DB)  │   │  (production)   │
//! └─────────────────┘   └─────────────────┘
//! ```
//!
//! Handlers never navigate object graphs; they go through the per-kind
//! `find_*`, `list_*` and `list_*_by_*` operations below. Every `create_*`
//! checks that its references exist and inserts in one atomic step, and
//! every `delete_*` refuses to remove a row that is still referenced.

mod memory;
mod postgres;

use async_trait::async_trait;
use swapi_core::types::DbId;

use crate::error::StoreResult;
use crate::models::person::{NewPerson, Person};
use crate::models::planet::{NewPlanet, Planet};
use crate::models::species::{NewSpecies, Species};

pub use memory::MemoryStore;
pub use postgres::PgStore;

#[async_trait]
pub trait Store: Send + Sync {
    /// Cheap liveness check of the backing storage.
    async fn ping(&self) -> StoreResult<()>;

    // -- planets --

    async fn list_planets(&self) -> StoreResult<Vec<Planet>>;

    async fn find_planet(&self, id: DbId) -> StoreResult<Option<Planet>>;

    async fn create_planet(&self, input: &NewPlanet) -> StoreResult<Planet>;

    /// Returns `false` if the planet does not exist. Fails with
    /// [`StoreError::HasDependents`](crate::error::StoreError::HasDependents)
    /// while people or species still reference it.
    async fn delete_planet(&self, id: DbId) -> StoreResult<bool>;

    // -- species --

    async fn list_species(&self) -> StoreResult<Vec<Species>>;

    async fn find_species(&self, id: DbId) -> StoreResult<Option<Species>>;

    async fn list_species_by_planet(&self, planet_id: DbId) -> StoreResult<Vec<Species>>;

    /// Fails with
    /// [`StoreError::MissingReference`](crate::error::StoreError::MissingReference)
    /// if `planet_id` does not exist; nothing is inserted in that case.
    async fn create_species(&self, input: &NewSpecies) -> StoreResult<Species>;

    /// Returns `false` if the species does not exist. Fails with
    /// [`StoreError::HasDependents`](crate::error::StoreError::HasDependents)
    /// while people still reference it.
    async fn delete_species(&self, id: DbId) -> StoreResult<bool>;

    // -- people --

    async fn list_people(&self) -> StoreResult<Vec<Person>>;

    async fn find_person(&self, id: DbId) -> StoreResult<Option<Person>>;

    async fn list_people_by_planet(&self, planet_id: DbId) -> StoreResult<Vec<Person>>;

    async fn list_people_by_species(&self, species_id: DbId) -> StoreResult<Vec<Person>>;

    /// Fails with
    /// [`StoreError::MissingReference`](crate::error::StoreError::MissingReference)
    /// if either `planet_id` or `species_id` does not exist.
    async fn create_person(&self, input: &NewPerson) -> StoreResult<Person>;

    /// Returns `false` if the person does not exist.
    async fn delete_person(&self, id: DbId) -> StoreResult<bool>;
}
