use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter,
    QueryOrder, Set, SqlErr, TransactionTrait,
};

use crate::{
    entity::{
        Favorites, People, Planets, Users,
        favorites::{self, ActiveModel, Column},
    },
    error::{AppError, AppResult},
    models::{Favorite, FavoriteKind, FavoriteTarget},
    state::AppState,
};

pub async fn list_favorites(state: &AppState, user_id: i32) -> AppResult<Vec<Favorite>> {
    ensure_user(&state.orm, user_id).await?;

    let rows = Favorites::find()
        .filter(Column::UserId.eq(user_id))
        .order_by_asc(Column::Id)
        .all(&state.orm)
        .await?;

    rows.into_iter()
        .map(|row| Favorite::try_from(row).map_err(AppError::from))
        .collect()
}

pub async fn add_favorite_planet(
    state: &AppState,
    user_id: i32,
    planet_id: Option<i32>,
) -> AppResult<Favorite> {
    add_favorite(state, user_id, FavoriteKind::Planet, planet_id).await
}

pub async fn add_favorite_person(
    state: &AppState,
    user_id: i32,
    person_id: Option<i32>,
) -> AppResult<Favorite> {
    add_favorite(state, user_id, FavoriteKind::Person, person_id).await
}

pub async fn delete_favorite_planet(
    state: &AppState,
    user_id: i32,
    planet_id: i32,
) -> AppResult<()> {
    delete_favorite(state, user_id, FavoriteTarget::Planet(planet_id)).await
}

pub async fn delete_favorite_person(
    state: &AppState,
    user_id: i32,
    person_id: i32,
) -> AppResult<()> {
    delete_favorite(state, user_id, FavoriteTarget::Person(person_id)).await
}

/// Checks run in order: user, request id, target, duplicate. The unique
/// indexes on `favorites` back the duplicate check when two requests race.
pub async fn add_favorite(
    state: &AppState,
    user_id: i32,
    kind: FavoriteKind,
    target_id: Option<i32>,
) -> AppResult<Favorite> {
    ensure_user(&state.orm, user_id).await?;

    let target_id = target_id
        .ok_or_else(|| AppError::BadRequest(format!("{} is required", kind.body_field())))?;
    let target = FavoriteTarget::new(kind, target_id);

    ensure_target(&state.orm, target).await?;

    if find_favorite(&state.orm, user_id, target).await?.is_some() {
        return Err(already_favorite(kind));
    }

    // The insert must be the first statement of the transaction: SQLite only
    // waits on a busy writer when the transaction holds no read lock yet.
    let txn = state.orm.begin().await?;
    let (people_id, planet_id) = target.columns();
    let row = ActiveModel {
        id: NotSet,
        user_id: Set(user_id),
        people_id: Set(people_id),
        planet_id: Set(planet_id),
    }
    .insert(&txn)
    .await
    .map_err(|err| match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => already_favorite(kind),
        _ => AppError::OrmError(err),
    })?;

    txn.commit().await?;

    tracing::info!(user_id, ?kind, target_id, favorite_id = row.id, "favorite added");
    Ok(Favorite::try_from(row)?)
}

pub async fn delete_favorite(
    state: &AppState,
    user_id: i32,
    target: FavoriteTarget,
) -> AppResult<()> {
    let txn = state.orm.begin().await?;

    let result = Favorites::delete_many()
        .filter(Column::UserId.eq(user_id))
        .filter(target.kind().column().eq(target.id()))
        .exec(&txn)
        .await?;
    if result.rows_affected == 0 {
        return Err(AppError::NotFound(format!(
            "Favorite {} not found for this user",
            target.kind().label().to_lowercase()
        )));
    }

    txn.commit().await?;

    tracing::info!(user_id, kind = ?target.kind(), target_id = target.id(), "favorite removed");
    Ok(())
}

async fn ensure_user<C: ConnectionTrait>(db: &C, user_id: i32) -> AppResult<()> {
    match Users::find_by_id(user_id).one(db).await? {
        Some(_) => Ok(()),
        None => Err(AppError::NotFound("User not found".into())),
    }
}

async fn ensure_target<C: ConnectionTrait>(db: &C, target: FavoriteTarget) -> AppResult<()> {
    let exists = match target {
        FavoriteTarget::Person(id) => People::find_by_id(id).one(db).await?.is_some(),
        FavoriteTarget::Planet(id) => Planets::find_by_id(id).one(db).await?.is_some(),
    };
    if !exists {
        return Err(AppError::NotFound(format!(
            "{} not found",
            target.kind().label()
        )));
    }
    Ok(())
}

async fn find_favorite<C: ConnectionTrait>(
    db: &C,
    user_id: i32,
    target: FavoriteTarget,
) -> AppResult<Option<favorites::Model>> {
    let row = Favorites::find()
        .filter(Column::UserId.eq(user_id))
        .filter(target.kind().column().eq(target.id()))
        .one(db)
        .await?;
    Ok(row)
}

fn already_favorite(kind: FavoriteKind) -> AppError {
    AppError::Conflict(format!("{} already in favorites", kind.label()))
}
