//! Handlers for the `/species` resource.
//!
//! Unlike planets and people, the list and detail routes share one shape:
//! both resolve the home planet and members to names.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use swapi_core::error::CoreError;
use swapi_core::types::DbId;
use swapi_db::models::species::{CreateSpecies, Species, SpeciesRecord, SpeciesView};

use crate::error::{AppError, AppResult};
use crate::extract::{EntityId, JsonBody};
use crate::handlers::reference_error;
use crate::response::MessageResponse;
use crate::state::AppState;

/// GET /species
///
/// Each row is resolved separately, not from one snapshot.
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<SpeciesView>>> {
    let all = state.store.list_species().await?;

    let mut views = Vec::with_capacity(all.len());
    for species in all {
        views.push(resolve_view(&state, species).await?);
    }

    tracing::debug!(count = views.len(), "Listed species");
    Ok(Json(views))
}

/// GET /species/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> AppResult<Json<SpeciesView>> {
    let species = state
        .store
        .find_species(id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(resolve_view(&state, species).await?))
}

/// POST /species
pub async fn create(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<CreateSpecies>,
) -> AppResult<(StatusCode, Json<SpeciesRecord>)> {
    let input = input.validate()?;
    let species = state
        .store
        .create_species(&input)
        .await
        .map_err(|err| reference_error(err, "planet_id"))?;

    tracing::info!(
        id = species.id,
        name = %species.name,
        planet_id = species.planet_id,
        "Species created"
    );
    Ok((StatusCode::CREATED, Json(SpeciesRecord::new(species, &[]))))
}

/// DELETE /species/{id}
///
/// Refused with 409 while people still reference the species.
pub async fn delete(
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> AppResult<Json<MessageResponse>> {
    if !state.store.delete_species(id).await? {
        return Err(not_found(id));
    }
    tracing::info!(id, "Species deleted");
    Ok(Json(MessageResponse::new(format!("Species {id} deleted"))))
}

async fn resolve_view(state: &AppState, species: Species) -> AppResult<SpeciesView> {
    let planet = state
        .store
        .find_planet(species.planet_id)
        .await?
        .map(|p| p.name);
    let people = state.store.list_people_by_species(species.id).await?;
    Ok(SpeciesView::new(species, planet, people))
}

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Species",
        id,
    })
}
