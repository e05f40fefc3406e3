//! Demo data for a fresh database. Each table is filled only when it is empty.

use argon2::{
    Argon2, PasswordHasher,
    password_hash::{SaltString, rand_core::OsRng},
};
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ConnectionTrait, EntityTrait, PaginatorTrait, Set,
};

use crate::entity::{People, Planets, Users, people, planets, users};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SeedReport {
    pub users: usize,
    pub people: usize,
    pub planets: usize,
}

// name, height, mass, hair, skin, eyes, birth year, gender
#[rustfmt::skip]
const PEOPLE: &[[&str; 8]] = &[
    ["Luke Skywalker", "172", "77", "blond", "fair", "blue", "19BBY", "male"],
    ["C-3PO", "167", "75", "n/a", "gold", "yellow", "112BBY", "n/a"],
    ["R2-D2", "96", "32", "n/a", "white, blue", "red", "33BBY", "n/a"],
    ["Darth Vader", "202", "136", "none", "white", "yellow", "41.9BBY", "male"],
    ["Leia Organa", "150", "49", "brown", "light", "brown", "19BBY", "female"],
];

// name, diameter, rotation, orbit, gravity, population, climate, terrain, surface water
#[rustfmt::skip]
const PLANETS: &[[&str; 9]] = &[
    ["Tatooine", "10465", "23", "304", "1 standard", "200000", "arid", "desert", "1"],
    ["Alderaan", "12500", "24", "364", "1 standard", "2000000000", "temperate", "grasslands, mountains", "40"],
    ["Yavin IV", "10200", "24", "4818", "1 standard", "1000", "temperate, tropical", "jungle, rainforests", "8"],
    ["Hoth", "7200", "23", "549", "1.1 standard", "unknown", "frozen", "tundra, ice caves, mountain ranges", "100"],
    ["Dagobah", "8900", "23", "341", "N/A", "unknown", "murky", "swamp, jungles", "8"],
];

pub async fn seed_all<C: ConnectionTrait>(
    db: &C,
    user_email: &str,
    user_password: &str,
) -> anyhow::Result<SeedReport> {
    Ok(SeedReport {
        users: seed_user(db, user_email, user_password).await?,
        people: seed_people(db).await?,
        planets: seed_planets(db).await?,
    })
}

pub async fn seed_user<C: ConnectionTrait>(
    db: &C,
    email: &str,
    password: &str,
) -> anyhow::Result<usize> {
    if Users::find().count(db).await? > 0 {
        return Ok(0);
    }

    let salt = SaltString::generate(&mut OsRng);
    let password_hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| anyhow::anyhow!(e.to_string()))?
        .to_string();

    users::ActiveModel {
        id: NotSet,
        email: Set(email.to_string()),
        password: Set(password_hash),
        is_active: Set(true),
    }
    .insert(db)
    .await?;

    tracing::info!(email, "seeded user");
    Ok(1)
}

pub async fn seed_people<C: ConnectionTrait>(db: &C) -> anyhow::Result<usize> {
    if People::find().count(db).await? > 0 {
        return Ok(0);
    }

    for [name, height, mass, hair, skin, eyes, birth_year, gender] in PEOPLE {
        people::ActiveModel {
            id: NotSet,
            name: Set(name.to_string()),
            height: Set(Some(height.to_string())),
            mass: Set(Some(mass.to_string())),
            hair_color: Set(Some(hair.to_string())),
            skin_color: Set(Some(skin.to_string())),
            eye_color: Set(Some(eyes.to_string())),
            birth_year: Set(Some(birth_year.to_string())),
            gender: Set(Some(gender.to_string())),
        }
        .insert(db)
        .await?;
    }

    tracing::info!(count = PEOPLE.len(), "seeded people");
    Ok(PEOPLE.len())
}

pub async fn seed_planets<C: ConnectionTrait>(db: &C) -> anyhow::Result<usize> {
    if Planets::find().count(db).await? > 0 {
        return Ok(0);
    }

    for [name, diameter, rotation, orbit, gravity, population, climate, terrain, water] in PLANETS {
        planets::ActiveModel {
            id: NotSet,
            name: Set(name.to_string()),
            diameter: Set(Some(diameter.to_string())),
            rotation_period: Set(Some(rotation.to_string())),
            orbital_period: Set(Some(orbit.to_string())),
            gravity: Set(Some(gravity.to_string())),
            population: Set(Some(population.to_string())),
            climate: Set(Some(climate.to_string())),
            terrain: Set(Some(terrain.to_string())),
            surface_water: Set(Some(water.to_string())),
        }
        .insert(db)
        .await?;
    }

    tracing::info!(count = PLANETS.len(), "seeded planets");
    Ok(PLANETS.len())
}
