use axum::{
    Json, Router,
    body::Bytes,
    extract::{Path, State, rejection::PathRejection},
    routing::{delete, get, post},
};
use serde::de::DeserializeOwned;

use crate::{
    dto::favorites::{AddFavoritePersonRequest, AddFavoritePlanetRequest},
    error::{AppError, AppResult},
    models::Favorite,
    response::{ErrorResponse, MessageResponse},
    services::{favorite_service, user_service},
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/favorites/{user_id}", get(list_favorites))
        .route("/favorites/planet/{user_id}", post(add_favorite_planet))
        .route("/favorites/people/{user_id}", post(add_favorite_person))
        .route(
            "/favorites/planet/{user_id}/{planet_id}",
            delete(delete_favorite_planet),
        )
        .route(
            "/favorites/people/{user_id}/{people_id}",
            delete(delete_favorite_person),
        )
}

/// An empty body carries no id. Anything else has to decode as JSON; the
/// `Content-Type` header is not required.
fn parse_body<T: Default + DeserializeOwned>(body: &[u8]) -> Result<T, String> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }
    serde_json::from_slice(body).map_err(|err| format!("Invalid request body: {err}"))
}

/// A body that fails to decode is reported only after the user is known to exist.
async fn read_body<T: Default + DeserializeOwned>(
    state: &AppState,
    user_id: i32,
    body: &[u8],
) -> AppResult<T> {
    match parse_body(body) {
        Ok(payload) => Ok(payload),
        Err(message) => {
            tracing::debug!(user_id, error = %message, "favorite body rejected");
            user_service::get_user(state, user_id).await?;
            Err(AppError::BadRequest(message))
        }
    }
}

#[utoipa::path(
    get,
    path = "/favorites/{user_id}",
    params(
        ("user_id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "List favorites of the user", body = Vec<Favorite>),
        (status = 404, description = "User not found", body = ErrorResponse)
    ),
    tag = "Favorites"
)]
pub async fn list_favorites(
    State(state): State<AppState>,
    user_id: Result<Path<i32>, PathRejection>,
) -> AppResult<Json<Vec<Favorite>>> {
    let Path(user_id) = user_id?;
    let items = favorite_service::list_favorites(&state, user_id).await?;
    Ok(Json(items))
}

#[utoipa::path(
    post,
    path = "/favorites/planet/{user_id}",
    params(
        ("user_id" = i32, Path, description = "User ID")
    ),
    request_body = AddFavoritePlanetRequest,
    responses(
        (status = 200, description = "Planet added to favorites", body = MessageResponse),
        (status = 400, description = "Missing planet_id, unreadable body or planet already in favorites", body = ErrorResponse),
        (status = 404, description = "User or planet not found", body = ErrorResponse),
        (status = 500, description = "Persistence failure", body = ErrorResponse)
    ),
    tag = "Favorites"
)]
pub async fn add_favorite_planet(
    State(state): State<AppState>,
    user_id: Result<Path<i32>, PathRejection>,
    body: Bytes,
) -> AppResult<Json<MessageResponse>> {
    let Path(user_id) = user_id?;
    let payload: AddFavoritePlanetRequest = read_body(&state, user_id, &body).await?;
    favorite_service::add_favorite_planet(&state, user_id, payload.planet_id).await?;
    Ok(Json(MessageResponse::new("Planet added to favorites")))
}

#[utoipa::path(
    post,
    path = "/favorites/people/{user_id}",
    params(
        ("user_id" = i32, Path, description = "User ID")
    ),
    request_body = AddFavoritePersonRequest,
    responses(
        (status = 200, description = "Person added to favorites", body = MessageResponse),
        (status = 400, description = "Missing person_id, unreadable body or person already in favorites", body = ErrorResponse),
        (status = 404, description = "User or person not found", body = ErrorResponse),
        (status = 500, description = "Persistence failure", body = ErrorResponse)
    ),
    tag = "Favorites"
)]
pub async fn add_favorite_person(
    State(state): State<AppState>,
    user_id: Result<Path<i32>, PathRejection>,
    body: Bytes,
) -> AppResult<Json<MessageResponse>> {
    let Path(user_id) = user_id?;
    let payload: AddFavoritePersonRequest = read_body(&state, user_id, &body).await?;
    favorite_service::add_favorite_person(&state, user_id, payload.person_id).await?;
    Ok(Json(MessageResponse::new("Person added to favorites")))
}

#[utoipa::path(
    delete,
    path = "/favorites/planet/{user_id}/{planet_id}",
    params(
        ("user_id" = i32, Path, description = "User ID"),
        ("planet_id" = i32, Path, description = "Planet ID")
    ),
    responses(
        (status = 200, description = "Planet removed from favorites", body = MessageResponse),
        (status = 404, description = "Favorite not found", body = ErrorResponse)
    ),
    tag = "Favorites"
)]
pub async fn delete_favorite_planet(
    State(state): State<AppState>,
    ids: Result<Path<(i32, i32)>, PathRejection>,
) -> AppResult<Json<MessageResponse>> {
    let Path((user_id, planet_id)) = ids?;
    favorite_service::delete_favorite_planet(&state, user_id, planet_id).await?;
    Ok(Json(MessageResponse::new("Planet removed from favorites")))
}

#[utoipa::path(
    delete,
    path = "/favorites/people/{user_id}/{people_id}",
    params(
        ("user_id" = i32, Path, description = "User ID"),
        ("people_id" = i32, Path, description = "Person ID")
    ),
    responses(
        (status = 200, description = "Person removed from favorites", body = MessageResponse),
        (status = 404, description = "Favorite not found", body = ErrorResponse)
    ),
    tag = "Favorites"
)]
pub async fn delete_favorite_person(
    State(state): State<AppState>,
    ids: Result<Path<(i32, i32)>, PathRejection>,
) -> AppResult<Json<MessageResponse>> {
    let Path((user_id, people_id)) = ids?;
    favorite_service::delete_favorite_person(&state, user_id, people_id).await?;
    Ok(Json(MessageResponse::new("Person removed from favorites")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_body_means_no_id() {
        let payload: AddFavoritePlanetRequest = parse_body(b"").unwrap();
        assert_eq!(payload.planet_id, None);

        let payload: AddFavoritePlanetRequest = parse_body(b"  \n").unwrap();
        assert_eq!(payload.planet_id, None);
    }

    #[test]
    fn object_without_the_field_means_no_id() {
        let payload: AddFavoritePersonRequest = parse_body(br#"{"planet_id": 3}"#).unwrap();
        assert_eq!(payload.person_id, None);
    }

    #[test]
    fn decode_errors_keep_their_reason() {
        let err = parse_body::<AddFavoritePlanetRequest>(br#"{"planet_id": "tatooine"}"#)
            .unwrap_err();
        assert!(err.starts_with("Invalid request body: invalid type"), "{err}");

        let err = parse_body::<AddFavoritePlanetRequest>(b"{not json").unwrap_err();
        assert!(err.starts_with("Invalid request body"), "{err}");
    }
}
