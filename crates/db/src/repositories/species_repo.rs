//! Repository for the `species` table.

use sqlx::PgExecutor;
use swapi_core::types::DbId;

use crate::models::species::{NewSpecies, Species};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, planet_id";

/// Provides CRUD operations for species.
pub struct SpeciesRepo;

impl SpeciesRepo {
    /// Insert a new species, returning the created row.
    ///
    /// The caller is responsible for checking that `planet_id` exists.
    pub async fn create<'e, E>(executor: E, input: &NewSpecies) -> Result<Species, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let query = format!(
            "INSERT INTO species (name, planet_id)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Species>(&query)
            .bind(&input.name)
            .bind(input.planet_id)
            .fetch_one(executor)
            .await
    }

    /// Find a species by its ID.
    pub async fn find_by_id<'e, E>(executor: E, id: DbId) -> Result<Option<Species>, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let query = format!("SELECT {COLUMNS} FROM species WHERE id = $1");
        sqlx::query_as::<_, Species>(&query)
            .bind(id)
            .fetch_optional(executor)
            .await
    }

    /// List all species in id order.
    pub async fn list<'e, E>(executor: E) -> Result<Vec<Species>, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let query = format!("SELECT {COLUMNS} FROM species ORDER BY id");
        sqlx::query_as::<_, Species>(&query).fetch_all(executor).await
    }

    /// List the species native to a planet, in id order.
    pub async fn list_by_planet<'e, E>(
        executor: E,
        planet_id: DbId,
    ) -> Result<Vec<Species>, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let query = format!("SELECT {COLUMNS} FROM species WHERE planet_id = $1 ORDER BY id");
        sqlx::query_as::<_, Species>(&query)
            .bind(planet_id)
            .fetch_all(executor)
            .await
    }

    /// Whether any species still references the planet.
    pub async fn exists_for_planet<'e, E>(executor: E, planet_id: DbId) -> Result<bool, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS (SELECT 1 FROM species WHERE planet_id = $1)")
            .bind(planet_id)
            .fetch_one(executor)
            .await
    }

    /// Take a `FOR KEY SHARE` lock on the species so it cannot be deleted
    /// before the surrounding transaction commits. Returns `false` if the
    /// species does not exist.
    pub async fn lock_shared<'e, E>(executor: E, id: DbId) -> Result<bool, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let row: Option<(DbId,)> =
            sqlx::query_as("SELECT id FROM species WHERE id = $1 FOR KEY SHARE")
                .bind(id)
                .fetch_optional(executor)
                .await?;
        Ok(row.is_some())
    }

    /// Take a `FOR UPDATE` lock on the species ahead of deleting it. Returns
    /// `false` if the species does not exist.
    pub async fn lock_exclusive<'e, E>(executor: E, id: DbId) -> Result<bool, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let row: Option<(DbId,)> = sqlx::query_as("SELECT id FROM species WHERE id = $1 FOR UPDATE")
            .bind(id)
            .fetch_optional(executor)
            .await?;
        Ok(row.is_some())
    }

    /// Permanently delete a species by ID. Returns `true` if a row was removed.
    pub async fn delete<'e, E>(executor: E, id: DbId) -> Result<bool, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let result = sqlx::query("DELETE FROM species WHERE id = $1")
            .bind(id)
            .execute(executor)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
