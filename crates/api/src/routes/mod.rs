pub mod person;
pub mod planet;
pub mod root;
pub mod species;

use axum::Router;

use crate::state::AppState;

/// Build the resource route tree.
///
/// Route hierarchy:
///
/// ```text
/// /people                 list, create
/// /people/{id}            get, delete
///
/// /planets                list, create
/// /planets/{id}           get, delete
///
/// /species                list, create
/// /species/{id}           get, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/people", person::router())
        .nest("/planets", planet::router())
        .nest("/species", species::router())
}
