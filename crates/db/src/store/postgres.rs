//! PostgreSQL-backed [`Store`].
//!
//! Reads go straight to the pool. Writes that depend on other rows run in a
//! transaction: inserts take `FOR KEY SHARE` locks on the rows they reference,
//! deletes take a `FOR UPDATE` lock on the target before checking for
//! dependents. The two lock modes conflict, so a reference check and a
//! concurrent delete of the referenced row cannot interleave.

use async_trait::async_trait;
use swapi_core::types::DbId;

use crate::error::{StoreError, StoreResult};
use crate::models::person::{NewPerson, Person};
use crate::models::planet::{NewPlanet, Planet};
use crate::models::species::{NewSpecies, Species};
use crate::repositories::{PersonRepo, PlanetRepo, SpeciesRepo};
use crate::store::Store;
use crate::DbPool;

pub struct PgStore {
    pool: DbPool,
}

impl PgStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Store for PgStore {
    async fn ping(&self) -> StoreResult<()> {
        crate::health_check(&self.pool).await?;
        Ok(())
    }

    async fn list_planets(&self) -> StoreResult<Vec<Planet>> {
        Ok(PlanetRepo::list(&self.pool).await?)
    }

    async fn find_planet(&self, id: DbId) -> StoreResult<Option<Planet>> {
        Ok(PlanetRepo::find_by_id(&self.pool, id).await?)
    }

    async fn create_planet(&self, input: &NewPlanet) -> StoreResult<Planet> {
        let planet = PlanetRepo::create(&self.pool, input).await?;
        tracing::debug!(id = planet.id, "Inserted planet");
        Ok(planet)
    }

    async fn delete_planet(&self, id: DbId) -> StoreResult<bool> {
        let mut tx = self.pool.begin().await?;

        if !PlanetRepo::lock_exclusive(&mut *tx, id).await? {
            return Ok(false);
        }
        if PersonRepo::exists_for_planet(&mut *tx, id).await? {
            return Err(StoreError::HasDependents {
                entity: "Planet",
                id,
                dependents: "people",
            });
        }
        if SpeciesRepo::exists_for_planet(&mut *tx, id).await? {
            return Err(StoreError::HasDependents {
                entity: "Planet",
                id,
                dependents: "species",
            });
        }

        let deleted = PlanetRepo::delete(&mut *tx, id).await?;
        tx.commit().await?;
        Ok(deleted)
    }

    async fn list_species(&self) -> StoreResult<Vec<Species>> {
        Ok(SpeciesRepo::list(&self.pool).await?)
    }

    async fn find_species(&self, id: DbId) -> StoreResult<Option<Species>> {
        Ok(SpeciesRepo::find_by_id(&self.pool, id).await?)
    }

    async fn list_species_by_planet(&self, planet_id: DbId) -> StoreResult<Vec<Species>> {
        Ok(SpeciesRepo::list_by_planet(&self.pool, planet_id).await?)
    }

    async fn create_species(&self, input: &NewSpecies) -> StoreResult<Species> {
        let mut tx = self.pool.begin().await?;

        if !PlanetRepo::lock_shared(&mut *tx, input.planet_id).await? {
            return Err(StoreError::MissingReference {
                entity: "Planet",
                id: input.planet_id,
            });
        }

        let species = SpeciesRepo::create(&mut *tx, input).await?;
        tx.commit().await?;
        tracing::debug!(id = species.id, planet_id = species.planet_id, "Inserted species");
        Ok(species)
    }

    async fn delete_species(&self, id: DbId) -> StoreResult<bool> {
        let mut tx = self.pool.begin().await?;

        if !SpeciesRepo::lock_exclusive(&mut *tx, id).await? {
            return Ok(false);
        }
        if PersonRepo::exists_for_species(&mut *tx, id).await? {
            return Err(StoreError::HasDependents {
                entity: "Species",
                id,
                dependents: "people",
            });
        }

        let deleted = SpeciesRepo::delete(&mut *tx, id).await?;
        tx.commit().await?;
        Ok(deleted)
    }

    async fn list_people(&self) -> StoreResult<Vec<Person>> {
        Ok(PersonRepo::list(&self.pool).await?)
    }

    async fn find_person(&self, id: DbId) -> StoreResult<Option<Person>> {
        Ok(PersonRepo::find_by_id(&self.pool, id).await?)
    }

    async fn list_people_by_planet(&self, planet_id: DbId) -> StoreResult<Vec<Person>> {
        Ok(PersonRepo::list_by_planet(&self.pool, planet_id).await?)
    }

    async fn list_people_by_species(&self, species_id: DbId) -> StoreResult<Vec<Person>> {
        Ok(PersonRepo::list_by_species(&self.pool, species_id).await?)
    }

    async fn create_person(&self, input: &NewPerson) -> StoreResult<Person> {
        let mut tx = self.pool.begin().await?;

        if !PlanetRepo::lock_shared(&mut *tx, input.planet_id).await? {
            return Err(StoreError::MissingReference {
                entity: "Planet",
                id: input.planet_id,
            });
        }
        if !SpeciesRepo::lock_shared(&mut *tx, input.species_id).await? {
            return Err(StoreError::MissingReference {
                entity: "Species",
                id: input.species_id,
            });
        }

        let person = PersonRepo::create(&mut *tx, input).await?;
        tx.commit().await?;
        tracing::debug!(id = person.id, "Inserted person");
        Ok(person)
    }

    async fn delete_person(&self, id: DbId) -> StoreResult<bool> {
        Ok(PersonRepo::delete(&self.pool, id).await?)
    }
}
