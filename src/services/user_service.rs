use sea_orm::{EntityTrait, QueryOrder};

use crate::{
    entity::{Users, users},
    error::{AppError, AppResult},
    models::User,
    state::AppState,
};

/// Lists every user. An empty table is reported as NotFound, unlike the
/// favorites listing where an empty result is a success.
pub async fn list_users(state: &AppState) -> AppResult<Vec<User>> {
    let items: Vec<User> = Users::find()
        .order_by_asc(users::Column::Id)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(User::from)
        .collect();

    if items.is_empty() {
        return Err(AppError::NotFound("No users found".into()));
    }
    Ok(items)
}

pub async fn get_user(state: &AppState, id: i32) -> AppResult<User> {
    Users::find_by_id(id)
        .one(&state.orm)
        .await?
        .map(User::from)
        .ok_or_else(|| AppError::NotFound("User not found".into()))
}
