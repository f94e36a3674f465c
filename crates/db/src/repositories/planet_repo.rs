//! Repository for the `planets` table.

use sqlx::PgExecutor;
use swapi_core::types::DbId;

use crate::models::planet::{NewPlanet, Planet};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, climate";

/// Provides CRUD operations for planets.
pub struct PlanetRepo;

impl PlanetRepo {
    /// Insert a new planet, returning the created row.
    pub async fn create<'e, E>(executor: E, input: &NewPlanet) -> Result<Planet, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let query = format!(
            "INSERT INTO planets (name, climate)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Planet>(&query)
            .bind(&input.name)
            .bind(&input.climate)
            .fetch_one(executor)
            .await
    }

    /// Find a planet by its ID.
    pub async fn find_by_id<'e, E>(executor: E, id: DbId) -> Result<Option<Planet>, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let query = format!("SELECT {COLUMNS} FROM planets WHERE id = $1");
        sqlx::query_as::<_, Planet>(&query)
            .bind(id)
            .fetch_optional(executor)
            .await
    }

    /// List all planets in id order.
    pub async fn list<'e, E>(executor: E) -> Result<Vec<Planet>, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let query = format!("SELECT {COLUMNS} FROM planets ORDER BY id");
        sqlx::query_as::<_, Planet>(&query).fetch_all(executor).await
    }

    /// Take a `FOR KEY SHARE` lock on the planet so it cannot be deleted
    /// before the surrounding transaction commits. Returns `false` if the
    /// planet does not exist.
    pub async fn lock_shared<'e, E>(executor: E, id: DbId) -> Result<bool, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let row: Option<(DbId,)> =
            sqlx::query_as("SELECT id FROM planets WHERE id = $1 FOR KEY SHARE")
                .bind(id)
                .fetch_optional(executor)
                .await?;
        Ok(row.is_some())
    }

    /// Take a `FOR UPDATE` lock on the planet ahead of deleting it. Returns
    /// `false` if the planet does not exist.
    pub async fn lock_exclusive<'e, E>(executor: E, id: DbId) -> Result<bool, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let row: Option<(DbId,)> = sqlx::query_as("SELECT id FROM planets WHERE id = $1 FOR UPDATE")
            .bind(id)
            .fetch_optional(executor)
            .await?;
        Ok(row.is_some())
    }

    /// Permanently delete a planet by ID. Returns `true` if a row was removed.
    pub async fn delete<'e, E>(executor: E, id: DbId) -> Result<bool, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let result = sqlx::query("DELETE FROM planets WHERE id = $1")
            .bind(id)
            .execute(executor)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
