use axum::Json;
use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema, openapi::OpenApi as OpenApiSpec};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::favorites::{AddFavoritePersonRequest, AddFavoritePlanetRequest},
    models::{Favorite, FavoriteKind, FavoriteTarget, Person, Planet, User},
    response::{ErrorResponse, MessageResponse},
    routes::{favorites, health, people, planets, users},
};

#[derive(OpenApi)]
#[openapi(
    paths(
        sitemap,
        health::health_check,
        people::list_people,
        people::get_person,
        planets::list_planets,
        planets::get_planet,
        planets::get_planet_plural,
        users::list_users,
        users::get_user,
        favorites::list_favorites,
        favorites::add_favorite_planet,
        favorites::add_favorite_person,
        favorites::delete_favorite_planet,
        favorites::delete_favorite_person
    ),
    components(
        schemas(
            User,
            Person,
            Planet,
            Favorite,
            FavoriteKind,
            FavoriteTarget,
            AddFavoritePlanetRequest,
            AddFavoritePersonRequest,
            ErrorResponse,
            MessageResponse,
            health::HealthData,
            RouteEntry,
            RouteList
        )
    ),
    tags(
        (name = "Sitemap", description = "Declared routes"),
        (name = "Health", description = "Health check endpoint"),
        (name = "People", description = "Catalog people"),
        (name = "Planets", description = "Catalog planets"),
        (name = "Users", description = "User endpoints"),
        (name = "Favorites", description = "Favorite endpoints"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RouteEntry {
    pub method: String,
    pub path: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RouteList {
    pub routes: Vec<RouteEntry>,
}

/// Flattens the OpenAPI paths into one entry per (method, path).
pub fn declared_routes(doc: &OpenApiSpec) -> Vec<RouteEntry> {
    let mut routes = Vec::new();
    for (path, item) in doc.paths.paths.iter() {
        let operations = [
            ("GET", item.get.is_some()),
            ("POST", item.post.is_some()),
            ("PUT", item.put.is_some()),
            ("PATCH", item.patch.is_some()),
            ("DELETE", item.delete.is_some()),
        ];
        for (method, declared) in operations {
            if declared {
                routes.push(RouteEntry {
                    method: method.to_string(),
                    path: path.clone(),
                });
            }
        }
    }
    routes
}

#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Declared routes", body = RouteList)
    ),
    tag = "Sitemap"
)]
pub async fn sitemap() -> Json<RouteList> {
    Json(RouteList {
        routes: declared_routes(&ApiDoc::openapi()),
    })
}
