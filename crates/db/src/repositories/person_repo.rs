//! Repository for the `people` table.

use sqlx::PgExecutor;
use swapi_core::types::DbId;

use crate::models::person::{NewPerson, Person};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, planet_id, species_id";

/// Provides CRUD operations for people.
pub struct PersonRepo;

impl PersonRepo {
    /// Insert a new person, returning the created row.
    ///
    /// The caller is responsible for checking that both references exist.
    pub async fn create<'e, E>(executor: E, input: &NewPerson) -> Result<Person, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let query = format!(
            "INSERT INTO people (name, planet_id, species_id)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Person>(&query)
            .bind(&input.name)
            .bind(input.planet_id)
            .bind(input.species_id)
            .fetch_one(executor)
            .await
    }

    /// Find a person by its ID.
    pub async fn find_by_id<'e, E>(executor: E, id: DbId) -> Result<Option<Person>, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let query = format!("SELECT {COLUMNS} FROM people WHERE id = $1");
        sqlx::query_as::<_, Person>(&query)
            .bind(id)
            .fetch_optional(executor)
            .await
    }

    /// List all people in id order.
    pub async fn list<'e, E>(executor: E) -> Result<Vec<Person>, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let query = format!("SELECT {COLUMNS} FROM people ORDER BY id");
        sqlx::query_as::<_, Person>(&query).fetch_all(executor).await
    }

    /// List the people living on a planet, in id order.
    pub async fn list_by_planet<'e, E>(
        executor: E,
        planet_id: DbId,
    ) -> Result<Vec<Person>, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let query = format!("SELECT {COLUMNS} FROM people WHERE planet_id = $1 ORDER BY id");
        sqlx::query_as::<_, Person>(&query)
            .bind(planet_id)
            .fetch_all(executor)
            .await
    }

    /// List the members of a species, in id order.
    pub async fn list_by_species<'e, E>(
        executor: E,
        species_id: DbId,
    ) -> Result<Vec<Person>, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let query = format!("SELECT {COLUMNS} FROM people WHERE species_id = $1 ORDER BY id");
        sqlx::query_as::<_, Person>(&query)
            .bind(species_id)
            .fetch_all(executor)
            .await
    }

    /// Whether any person still references the planet.
    pub async fn exists_for_planet<'e, E>(executor: E, planet_id: DbId) -> Result<bool, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS (SELECT 1 FROM people WHERE planet_id = $1)")
            .bind(planet_id)
            .fetch_one(executor)
            .await
    }

    /// Whether any person still references the species.
    pub async fn exists_for_species<'e, E>(
        executor: E,
        species_id: DbId,
    ) -> Result<bool, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS (SELECT 1 FROM people WHERE species_id = $1)")
            .bind(species_id)
            .fetch_one(executor)
            .await
    }

    /// Permanently delete a person by ID. Returns `true` if a row was removed.
    pub async fn delete<'e, E>(executor: E, id: DbId) -> Result<bool, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let result = sqlx::query("DELETE FROM people WHERE id = $1")
            .bind(id)
            .execute(executor)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
