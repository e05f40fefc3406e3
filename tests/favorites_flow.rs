mod common;

use sea_orm::{ActiveModelTrait, ActiveValue::NotSet, EntityTrait, Set, SqlErr};
use starwars_api::{
    entity::{Planets, favorites::ActiveModel as FavoriteActive},
    error::AppError,
    models::FavoriteTarget,
    services::favorite_service,
};

fn assert_not_found<T: std::fmt::Debug>(result: Result<T, AppError>, expected: &str) {
    match result {
        Err(AppError::NotFound(msg)) => assert_eq!(msg, expected),
        other => panic!("expected NotFound({expected}), got {other:?}"),
    }
}

fn assert_bad_request<T: std::fmt::Debug>(result: Result<T, AppError>, expected: &str) {
    match result {
        Err(AppError::BadRequest(msg)) => assert_eq!(msg, expected),
        other => panic!("expected BadRequest({expected}), got {other:?}"),
    }
}

fn assert_conflict<T: std::fmt::Debug>(result: Result<T, AppError>, expected: &str) {
    match result {
        Err(AppError::Conflict(msg)) => assert_eq!(msg, expected),
        other => panic!("expected Conflict({expected}), got {other:?}"),
    }
}

#[tokio::test]
async fn listing_distinguishes_empty_from_unknown_user() -> anyhow::Result<()> {
    let state = common::seeded_state().await?;

    assert!(favorite_service::list_favorites(&state, 1).await?.is_empty());
    assert_not_found(favorite_service::list_favorites(&state, 42).await, "User not found");
    Ok(())
}

#[tokio::test]
async fn adding_the_same_planet_twice_is_a_conflict() -> anyhow::Result<()> {
    let state = common::seeded_state().await?;

    let favorite = favorite_service::add_favorite_planet(&state, 1, Some(1)).await?;
    assert_eq!(favorite.user_id, 1);
    assert_eq!(favorite.target, FavoriteTarget::Planet(1));

    assert_conflict(
        favorite_service::add_favorite_planet(&state, 1, Some(1)).await,
        "Planet already in favorites",
    );
    assert_eq!(favorite_service::list_favorites(&state, 1).await?.len(), 1);
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_adds_of_one_planet_keep_a_single_row() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let state = common::file_backed_state(dir.path()).await?;

    let handles: Vec<_> = (0..16)
        .map(|_| {
            let state = state.clone();
            tokio::spawn(async move {
                favorite_service::add_favorite_planet(&state, 1, Some(1)).await
            })
        })
        .collect();

    let mut added = 0;
    for handle in handles {
        match handle.await? {
            Ok(favorite) => {
                assert_eq!(favorite.target, FavoriteTarget::Planet(1));
                added += 1;
            }
            other => assert_conflict(other, "Planet already in favorites"),
        }
    }
    assert_eq!(added, 1);

    let favorites = favorite_service::list_favorites(&state, 1).await?;
    assert_eq!(favorites.len(), 1);
    assert_eq!(favorites[0].target, FavoriteTarget::Planet(1));

    state.orm.close().await?;
    Ok(())
}

#[tokio::test]
async fn adding_the_same_person_twice_is_a_conflict() -> anyhow::Result<()> {
    let state = common::seeded_state().await?;

    favorite_service::add_favorite_person(&state, 1, Some(2)).await?;
    assert_conflict(
        favorite_service::add_favorite_person(&state, 1, Some(2)).await,
        "Person already in favorites",
    );
    Ok(())
}

#[tokio::test]
async fn person_and_planet_with_same_id_are_distinct_favorites() -> anyhow::Result<()> {
    let state = common::seeded_state().await?;

    favorite_service::add_favorite_planet(&state, 1, Some(3)).await?;
    favorite_service::add_favorite_person(&state, 1, Some(3)).await?;

    let targets: Vec<FavoriteTarget> = favorite_service::list_favorites(&state, 1)
        .await?
        .into_iter()
        .map(|fav| fav.target)
        .collect();
    assert_eq!(
        targets,
        vec![FavoriteTarget::Planet(3), FavoriteTarget::Person(3)]
    );
    Ok(())
}

#[tokio::test]
async fn different_users_may_share_a_favorite() -> anyhow::Result<()> {
    let state = common::seeded_state().await?;
    let han = common::create_user(&state, "han@falcon.net").await?;

    favorite_service::add_favorite_planet(&state, 1, Some(2)).await?;
    favorite_service::add_favorite_planet(&state, han, Some(2)).await?;

    assert_eq!(favorite_service::list_favorites(&state, han).await?.len(), 1);
    assert_eq!(favorite_service::list_favorites(&state, 1).await?.len(), 1);
    Ok(())
}

#[tokio::test]
async fn validation_runs_in_order() -> anyhow::Result<()> {
    let state = common::seeded_state().await?;

    // Unknown user wins over the missing id.
    assert_not_found(
        favorite_service::add_favorite_planet(&state, 42, None).await,
        "User not found",
    );
    assert_bad_request(
        favorite_service::add_favorite_planet(&state, 1, None).await,
        "planet_id is required",
    );
    assert_bad_request(
        favorite_service::add_favorite_person(&state, 1, None).await,
        "person_id is required",
    );
    assert_not_found(
        favorite_service::add_favorite_planet(&state, 1, Some(999)).await,
        "Planet not found",
    );
    assert_not_found(
        favorite_service::add_favorite_person(&state, 1, Some(999)).await,
        "Person not found",
    );

    assert!(favorite_service::list_favorites(&state, 1).await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn add_then_delete_clears_the_favorite() -> anyhow::Result<()> {
    let state = common::seeded_state().await?;

    favorite_service::add_favorite_planet(&state, 1, Some(1)).await?;
    favorite_service::add_favorite_person(&state, 1, Some(1)).await?;

    favorite_service::delete_favorite_planet(&state, 1, 1).await?;

    let favorites = favorite_service::list_favorites(&state, 1).await?;
    assert_eq!(favorites.len(), 1);
    assert!(
        favorites
            .iter()
            .all(|fav| fav.target != FavoriteTarget::Planet(1))
    );

    favorite_service::delete_favorite_person(&state, 1, 1).await?;
    assert!(favorite_service::list_favorites(&state, 1).await?.is_empty());

    // Absent again, so it can be re-added.
    favorite_service::add_favorite_planet(&state, 1, Some(1)).await?;
    Ok(())
}

#[tokio::test]
async fn deleting_a_missing_favorite_is_not_found() -> anyhow::Result<()> {
    let state = common::seeded_state().await?;

    assert_not_found(
        favorite_service::delete_favorite_planet(&state, 1, 999).await,
        "Favorite planet not found for this user",
    );
    assert_not_found(
        favorite_service::delete_favorite_person(&state, 1, 999).await,
        "Favorite person not found for this user",
    );

    // A planet favorite does not satisfy a person delete.
    favorite_service::add_favorite_planet(&state, 1, Some(2)).await?;
    assert_not_found(
        favorite_service::delete_favorite_person(&state, 1, 2).await,
        "Favorite person not found for this user",
    );
    Ok(())
}

#[tokio::test]
async fn unique_index_rejects_duplicates_that_skip_the_check() -> anyhow::Result<()> {
    let state = common::seeded_state().await?;
    favorite_service::add_favorite_planet(&state, 1, Some(5)).await?;

    let err = FavoriteActive {
        id: NotSet,
        user_id: Set(1),
        people_id: Set(None),
        planet_id: Set(Some(5)),
    }
    .insert(&state.orm)
    .await
    .expect_err("duplicate favorite must be rejected");

    assert!(matches!(
        err.sql_err(),
        Some(SqlErr::UniqueConstraintViolation(_))
    ));
    Ok(())
}

#[tokio::test]
async fn favorite_rows_need_exactly_one_target() -> anyhow::Result<()> {
    let state = common::seeded_state().await?;

    let neither = FavoriteActive {
        id: NotSet,
        user_id: Set(1),
        people_id: Set(None),
        planet_id: Set(None),
    }
    .insert(&state.orm)
    .await;
    assert!(neither.is_err());

    let both = FavoriteActive {
        id: NotSet,
        user_id: Set(1),
        people_id: Set(Some(1)),
        planet_id: Set(Some(1)),
    }
    .insert(&state.orm)
    .await;
    assert!(both.is_err());
    Ok(())
}

#[tokio::test]
async fn removing_a_planet_cascades_to_favorites() -> anyhow::Result<()> {
    let state = common::seeded_state().await?;
    favorite_service::add_favorite_planet(&state, 1, Some(2)).await?;
    favorite_service::add_favorite_person(&state, 1, Some(2)).await?;

    Planets::delete_by_id(2).exec(&state.orm).await?;

    let favorites = favorite_service::list_favorites(&state, 1).await?;
    assert_eq!(
        favorites.into_iter().map(|fav| fav.target).collect::<Vec<_>>(),
        vec![FavoriteTarget::Person(2)]
    );
    Ok(())
}
