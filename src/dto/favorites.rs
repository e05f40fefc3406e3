use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// Ids are optional so a missing field reaches the service, which reports it
// only after the user has been found.

#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct AddFavoritePlanetRequest {
    pub planet_id: Option<i32>,
}

#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct AddFavoritePersonRequest {
    pub person_id: Option<i32>,
}
