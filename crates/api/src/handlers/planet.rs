//! Handlers for the `/planets` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use swapi_core::error::CoreError;
use swapi_core::types::DbId;
use swapi_db::models::planet::{CreatePlanet, Planet, PlanetDetail, PlanetSummary};

use crate::error::{AppError, AppResult};
use crate::extract::{EntityId, JsonBody};
use crate::response::MessageResponse;
use crate::state::AppState;

/// GET /planets
///
/// Relations are listed as ids. They are fetched per planet, not from one
/// snapshot, so a write landing mid-request can show up in later rows.
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<PlanetSummary>>> {
    let planets = state.store.list_planets().await?;

    let mut summaries = Vec::with_capacity(planets.len());
    for planet in planets {
        let people = state.store.list_people_by_planet(planet.id).await?;
        let species = state.store.list_species_by_planet(planet.id).await?;
        summaries.push(PlanetSummary::new(planet, &people, &species));
    }

    tracing::debug!(count = summaries.len(), "Listed planets");
    Ok(Json(summaries))
}

/// GET /planets/{id}
///
/// Relations are resolved to names.
pub async fn get_by_id(
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> AppResult<Json<PlanetDetail>> {
    let planet = ensure_planet_exists(&state, id).await?;
    let people = state.store.list_people_by_planet(id).await?;
    let species = state.store.list_species_by_planet(id).await?;
    Ok(Json(PlanetDetail::new(planet, people, species)))
}

/// POST /planets
pub async fn create(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<CreatePlanet>,
) -> AppResult<(StatusCode, Json<PlanetSummary>)> {
    let input = input.validate()?;
    let planet = state.store.create_planet(&input).await?;
    tracing::info!(id = planet.id, name = %planet.name, "Planet created");
    Ok((StatusCode::CREATED, Json(PlanetSummary::new(planet, &[], &[]))))
}

/// DELETE /planets/{id}
///
/// Refused with 409 while people or species still reference the planet.
pub async fn delete(
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> AppResult<Json<MessageResponse>> {
    if !state.store.delete_planet(id).await? {
        return Err(not_found(id));
    }
    tracing::info!(id, "Planet deleted");
    Ok(Json(MessageResponse::new(format!("Planet {id} deleted"))))
}

async fn ensure_planet_exists(state: &AppState, id: DbId) -> AppResult<Planet> {
    state.store.find_planet(id).await?.ok_or_else(|| not_found(id))
}

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Planet",
        id,
    })
}
