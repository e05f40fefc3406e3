use axum::{
    Json, Router,
    extract::{Path, State, rejection::PathRejection},
    routing::get,
};

use crate::{
    error::AppResult,
    models::Person,
    response::ErrorResponse,
    services::catalog_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/people", get(list_people))
        .route("/people/{id}", get(get_person))
}

#[utoipa::path(
    get,
    path = "/people",
    responses(
        (status = 200, description = "List people", body = Vec<Person>)
    ),
    tag = "People"
)]
pub async fn list_people(State(state): State<AppState>) -> AppResult<Json<Vec<Person>>> {
    let items = catalog_service::list_people(&state).await?;
    Ok(Json(items))
}

#[utoipa::path(
    get,
    path = "/people/{id}",
    params(
        ("id" = i32, Path, description = "Person ID")
    ),
    responses(
        (status = 200, description = "Get person", body = Person),
        (status = 404, description = "Person not found", body = ErrorResponse)
    ),
    tag = "People"
)]
pub async fn get_person(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> AppResult<Json<Person>> {
    let Path(id) = id?;
    let person = catalog_service::get_person(&state, id).await?;
    Ok(Json(person))
}
