//! Handlers for the `/people` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use swapi_core::error::CoreError;
use swapi_core::types::DbId;
use swapi_db::models::person::{CreatePerson, Person, PersonDetail};

use crate::error::{AppError, AppResult};
use crate::extract::{EntityId, JsonBody};
use crate::handlers::reference_error;
use crate::response::MessageResponse;
use crate::state::AppState;

/// GET /people
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Person>>> {
    let people = state.store.list_people().await?;
    tracing::debug!(count = people.len(), "Listed people");
    Ok(Json(people))
}

/// GET /people/{id}
///
/// Planet and species are resolved to names.
pub async fn get_by_id(
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> AppResult<Json<PersonDetail>> {
    let person = state
        .store
        .find_person(id)
        .await?
        .ok_or_else(|| not_found(id))?;

    let planet = state.store.find_planet(person.planet_id).await?;
    let species = state.store.find_species(person.species_id).await?;

    Ok(Json(PersonDetail::new(
        person,
        planet.map(|p| p.name),
        species.map(|s| s.name),
    )))
}

/// POST /people
pub async fn create(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<CreatePerson>,
) -> AppResult<(StatusCode, Json<Person>)> {
    let input = input.validate()?;
    let person = state
        .store
        .create_person(&input)
        .await
        .map_err(|err| reference_error(err, "planet_id or species_id"))?;

    tracing::info!(id = person.id, name = %person.name, "Person created");
    Ok((StatusCode::CREATED, Json(person)))
}

/// DELETE /people/{id}
pub async fn delete(
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> AppResult<Json<MessageResponse>> {
    if !state.store.delete_person(id).await? {
        return Err(not_found(id));
    }
    tracing::info!(id, "Person deleted");
    Ok(Json(MessageResponse::new(format!("Person {id} deleted"))))
}

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Person",
        id,
    })
}
