use sea_orm::{EntityTrait, QueryOrder};

use crate::{
    entity::{People, Planets, people, planets},
    error::{AppError, AppResult},
    models::{Person, Planet},
    state::AppState,
};

pub async fn list_people(state: &AppState) -> AppResult<Vec<Person>> {
    let items = People::find()
        .order_by_asc(people::Column::Id)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(Person::from)
        .collect();
    Ok(items)
}

pub async fn get_person(state: &AppState, id: i32) -> AppResult<Person> {
    People::find_by_id(id)
        .one(&state.orm)
        .await?
        .map(Person::from)
        .ok_or_else(|| AppError::NotFound("Person not found".into()))
}

pub async fn list_planets(state: &AppState) -> AppResult<Vec<Planet>> {
    let items = Planets::find()
        .order_by_asc(planets::Column::Id)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(Planet::from)
        .collect();
    Ok(items)
}

pub async fn get_planet(state: &AppState, id: i32) -> AppResult<Planet> {
    Planets::find_by_id(id)
        .one(&state.orm)
        .await?
        .map(Planet::from)
        .ok_or_else(|| AppError::NotFound("Planet not found".into()))
}
