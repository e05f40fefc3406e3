use axum::{
    Json, Router,
    extract::{Path, State, rejection::PathRejection},
    routing::get,
};

use crate::{
    error::AppResult,
    models::Planet,
    response::ErrorResponse,
    services::catalog_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/planets", get(list_planets))
        .route("/planet/{id}", get(get_planet))
        .route("/planets/{id}", get(get_planet_plural))
}

#[utoipa::path(
    get,
    path = "/planets",
    responses(
        (status = 200, description = "List planets", body = Vec<Planet>)
    ),
    tag = "Planets"
)]
pub async fn list_planets(State(state): State<AppState>) -> AppResult<Json<Vec<Planet>>> {
    let items = catalog_service::list_planets(&state).await?;
    Ok(Json(items))
}

#[utoipa::path(
    get,
    path = "/planet/{id}",
    params(
        ("id" = i32, Path, description = "Planet ID")
    ),
    responses(
        (status = 200, description = "Get planet", body = Planet),
        (status = 404, description = "Planet not found", body = ErrorResponse)
    ),
    tag = "Planets"
)]
pub async fn get_planet(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> AppResult<Json<Planet>> {
    let Path(id) = id?;
    let planet = catalog_service::get_planet(&state, id).await?;
    Ok(Json(planet))
}

/// Same lookup under the plural collection path.
#[utoipa::path(
    get,
    path = "/planets/{id}",
    params(
        ("id" = i32, Path, description = "Planet ID")
    ),
    responses(
        (status = 200, description = "Get planet", body = Planet),
        (status = 404, description = "Planet not found", body = ErrorResponse)
    ),
    tag = "Planets"
)]
pub async fn get_planet_plural(
    state: State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> AppResult<Json<Planet>> {
    get_planet(state, id).await
}
