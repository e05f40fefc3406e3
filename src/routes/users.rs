use axum::{
    Json, Router,
    extract::{Path, State, rejection::PathRejection},
    routing::get,
};

use crate::{
    error::AppResult,
    models::User,
    response::ErrorResponse,
    services::user_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/users", get(list_users))
        .route("/user/{id}", get(get_user))
}

#[utoipa::path(
    get,
    path = "/users",
    responses(
        (status = 200, description = "List users", body = Vec<User>),
        (status = 404, description = "No users exist", body = ErrorResponse)
    ),
    tag = "Users"
)]
pub async fn list_users(State(state): State<AppState>) -> AppResult<Json<Vec<User>>> {
    let items = user_service::list_users(&state).await?;
    Ok(Json(items))
}

#[utoipa::path(
    get,
    path = "/user/{id}",
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Get user", body = User),
        (status = 404, description = "User not found", body = ErrorResponse)
    ),
    tag = "Users"
)]
pub async fn get_user(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> AppResult<Json<User>> {
    let Path(id) = id?;
    let user = user_service::get_user(&state, id).await?;
    Ok(Json(user))
}
