#![allow(dead_code)]

use std::path::Path;

use sea_orm::{ActiveModelTrait, ActiveValue::NotSet, ConnectOptions, Database, Set};
use starwars_api::{
    db::run_migrations, entity::users::ActiveModel as UserActive, seed::seed_all, state::AppState,
};

pub const SEED_EMAIL: &str = "luke@rebellion.org";

/// Fresh in-memory database with the schema applied and no rows.
pub async fn setup_state() -> anyhow::Result<AppState> {
    // A single pooled connection keeps every query on the same in-memory database.
    let mut options = ConnectOptions::new("sqlite::memory:");
    options
        .max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);
    let orm = Database::connect(options).await?;
    run_migrations(&orm).await?;
    Ok(AppState::new(orm))
}

/// In-memory database holding one user (id 1), five people and five planets (ids 1..=5).
pub async fn seeded_state() -> anyhow::Result<AppState> {
    let state = setup_state().await?;
    seed_all(&state.orm, SEED_EMAIL, "usetheforce").await?;
    Ok(state)
}

/// Seeded SQLite file under `dir`, served by a pool of several connections so
/// concurrent tasks really hit the database side by side.
pub async fn file_backed_state(dir: &Path) -> anyhow::Result<AppState> {
    let url = format!("sqlite://{}?mode=rwc", dir.join("favorites.db").display());
    let mut options = ConnectOptions::new(url);
    options.max_connections(8).sqlx_logging(false);
    let orm = Database::connect(options).await?;
    run_migrations(&orm).await?;
    seed_all(&orm, SEED_EMAIL, "usetheforce").await?;
    Ok(AppState::new(orm))
}

pub async fn create_user(state: &AppState, email: &str) -> anyhow::Result<i32> {
    let user = UserActive {
        id: NotSet,
        email: Set(email.to_string()),
        password: Set("dummy".into()),
        is_active: Set(true),
    }
    .insert(&state.orm)
    .await?;

    Ok(user.id)
}
