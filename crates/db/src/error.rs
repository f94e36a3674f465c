use swapi_core::types::DbId;

/// Errors raised by [`Store`](crate::store::Store) implementations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A foreign key in the insert does not resolve to an existing row.
    #[error("{entity} with id {id} does not exist")]
    MissingReference { entity: &'static str, id: DbId },

    /// The row to delete is still referenced by other rows.
    #[error("{entity} {id} still has {dependents}")]
    HasDependents {
        entity: &'static str,
        id: DbId,
        dependents: &'static str,
    },
}

pub type StoreResult<T> = Result<T, StoreError>;
