//! In-process [`Store`] used by tests and when no database is configured.
//!
//! All tables live behind one `RwLock`; every write holds the write guard for
//! its whole check-then-mutate sequence, which gives the same atomicity the
//! PostgreSQL store gets from transactions. Ids start at 1 per table and are
//! never reused, matching `BIGSERIAL`.

use std::collections::BTreeMap;

use async_trait::async_trait;
use swapi_core::types::DbId;
use tokio::sync::RwLock;

use crate::error::{StoreError, StoreResult};
use crate::models::person::{NewPerson, Person};
use crate::models::planet::{NewPlanet, Planet};
use crate::models::species::{NewSpecies, Species};
use crate::store::Store;

#[derive(Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

/// One id-ordered map per entity kind plus its id sequence.
#[derive(Default)]
struct Tables {
    planets: Table<Planet>,
    species: Table<Species>,
    people: Table<Person>,
}

struct Table<T> {
    rows: BTreeMap<DbId, T>,
    last_id: DbId,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            rows: BTreeMap::new(),
            last_id: 0,
        }
    }
}

impl<T: Clone> Table<T> {
    fn next_id(&mut self) -> DbId {
        self.last_id += 1;
        self.last_id
    }

    fn get(&self, id: DbId) -> Option<T> {
        self.rows.get(&id).cloned()
    }

    fn contains(&self, id: DbId) -> bool {
        self.rows.contains_key(&id)
    }

    fn all(&self) -> Vec<T> {
        self.rows.values().cloned().collect()
    }

    fn filter(&self, pred: impl Fn(&T) -> bool) -> Vec<T> {
        self.rows.values().filter(|row| pred(*row)).cloned().collect()
    }

    fn any(&self, pred: impl Fn(&T) -> bool) -> bool {
        self.rows.values().any(pred)
    }
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn ping(&self) -> StoreResult<()> {
        Ok(())
    }

    async fn list_planets(&self) -> StoreResult<Vec<Planet>> {
        Ok(self.tables.read().await.planets.all())
    }

    async fn find_planet(&self, id: DbId) -> StoreResult<Option<Planet>> {
        Ok(self.tables.read().await.planets.get(id))
    }

    async fn create_planet(&self, input: &NewPlanet) -> StoreResult<Planet> {
        let mut tables = self.tables.write().await;
        let planet = Planet {
            id: tables.planets.next_id(),
            name: input.name.clone(),
            climate: input.climate.clone(),
        };
        tables.planets.rows.insert(planet.id, planet.clone());
        Ok(planet)
    }

    async fn delete_planet(&self, id: DbId) -> StoreResult<bool> {
        let mut tables = self.tables.write().await;
        if !tables.planets.contains(id) {
            return Ok(false);
        }
        if tables.people.any(|p| p.planet_id == id) {
            return Err(StoreError::HasDependents {
                entity: "Planet",
                id,
                dependents: "people",
            });
        }
        if tables.species.any(|s| s.planet_id == id) {
            return Err(StoreError::HasDependents {
                entity: "Planet",
                id,
                dependents: "species",
            });
        }
        Ok(tables.planets.rows.remove(&id).is_some())
    }

    async fn list_species(&self) -> StoreResult<Vec<Species>> {
        Ok(self.tables.read().await.species.all())
    }

    async fn find_species(&self, id: DbId) -> StoreResult<Option<Species>> {
        Ok(self.tables.read().await.species.get(id))
    }

    async fn list_species_by_planet(&self, planet_id: DbId) -> StoreResult<Vec<Species>> {
        Ok(self
            .tables
            .read()
            .await
            .species
            .filter(|s| s.planet_id == planet_id))
    }

    async fn create_species(&self, input: &NewSpecies) -> StoreResult<Species> {
        let mut tables = self.tables.write().await;
        if !tables.planets.contains(input.planet_id) {
            return Err(StoreError::MissingReference {
                entity: "Planet",
                id: input.planet_id,
            });
        }
        let species = Species {
            id: tables.species.next_id(),
            name: input.name.clone(),
            planet_id: input.planet_id,
        };
        tables.species.rows.insert(species.id, species.clone());
        Ok(species)
    }

    async fn delete_species(&self, id: DbId) -> StoreResult<bool> {
        let mut tables = self.tables.write().await;
        if !tables.species.contains(id) {
            return Ok(false);
        }
        if tables.people.any(|p| p.species_id == id) {
            return Err(StoreError::HasDependents {
                entity: "Species",
                id,
                dependents: "people",
            });
        }
        Ok(tables.species.rows.remove(&id).is_some())
    }

    async fn list_people(&self) -> StoreResult<Vec<Person>> {
        Ok(self.tables.read().await.people.all())
    }

    async fn find_person(&self, id: DbId) -> StoreResult<Option<Person>> {
        Ok(self.tables.read().await.people.get(id))
    }

    async fn list_people_by_planet(&self, planet_id: DbId) -> StoreResult<Vec<Person>> {
        Ok(self
            .tables
            .read()
            .await
            .people
            .filter(|p| p.planet_id == planet_id))
    }

    async fn list_people_by_species(&self, species_id: DbId) -> StoreResult<Vec<Person>> {
        Ok(self
            .tables
            .read()
            .await
            .people
            .filter(|p| p.species_id == species_id))
    }

    async fn create_person(&self, input: &NewPerson) -> StoreResult<Person> {
        let mut tables = self.tables.write().await;
        if !tables.planets.contains(input.planet_id) {
            return Err(StoreError::MissingReference {
                entity: "Planet",
                id: input.planet_id,
            });
        }
        if !tables.species.contains(input.species_id) {
            return Err(StoreError::MissingReference {
                entity: "Species",
                id: input.species_id,
            });
        }
        let person = Person {
            id: tables.people.next_id(),
            name: input.name.clone(),
            planet_id: input.planet_id,
            species_id: input.species_id,
        };
        tables.people.rows.insert(person.id, person.clone());
        Ok(person)
    }

    async fn delete_person(&self, id: DbId) -> StoreResult<bool> {
        Ok(self.tables.write().await.people.rows.remove(&id).is_some())
    }
}
