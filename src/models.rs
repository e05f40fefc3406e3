use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::entity::{favorites, people, planets, users};

/// Public view of a user. The stored password never leaves the entity layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct User {
    pub id: i32,
    pub email: String,
    pub is_active: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Person {
    pub id: i32,
    pub name: String,
    pub height: Option<String>,
    pub mass: Option<String>,
    pub hair_color: Option<String>,
    pub skin_color: Option<String>,
    pub eye_color: Option<String>,
    pub birth_year: Option<String>,
    pub gender: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Planet {
    pub id: i32,
    pub name: String,
    pub diameter: Option<String>,
    pub rotation_period: Option<String>,
    pub orbital_period: Option<String>,
    pub gravity: Option<String>,
    pub population: Option<String>,
    pub climate: Option<String>,
    pub terrain: Option<String>,
    pub surface_water: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum FavoriteKind {
    Person,
    Planet,
}

impl FavoriteKind {
    /// Capitalized entity name used in response messages.
    pub fn label(self) -> &'static str {
        match self {
            FavoriteKind::Person => "Person",
            FavoriteKind::Planet => "Planet",
        }
    }

    /// Name of the request body field carrying the target id.
    pub fn body_field(self) -> &'static str {
        match self {
            FavoriteKind::Person => "person_id",
            FavoriteKind::Planet => "planet_id",
        }
    }

    pub fn column(self) -> favorites::Column {
        match self {
            FavoriteKind::Person => favorites::Column::PeopleId,
            FavoriteKind::Planet => favorites::Column::PlanetId,
        }
    }
}

/// What a favorite points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "kind", content = "id", rename_all = "snake_case")]
pub enum FavoriteTarget {
    Person(i32),
    Planet(i32),
}

impl FavoriteTarget {
    pub fn new(kind: FavoriteKind, id: i32) -> Self {
        match kind {
            FavoriteKind::Person => FavoriteTarget::Person(id),
            FavoriteKind::Planet => FavoriteTarget::Planet(id),
        }
    }

    pub fn kind(self) -> FavoriteKind {
        match self {
            FavoriteTarget::Person(_) => FavoriteKind::Person,
            FavoriteTarget::Planet(_) => FavoriteKind::Planet,
        }
    }

    pub fn id(self) -> i32 {
        match self {
            FavoriteTarget::Person(id) | FavoriteTarget::Planet(id) => id,
        }
    }

    /// Column values for `(people_id, planet_id)`.
    pub fn columns(self) -> (Option<i32>, Option<i32>) {
        match self {
            FavoriteTarget::Person(id) => (Some(id), None),
            FavoriteTarget::Planet(id) => (None, Some(id)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Favorite {
    pub id: i32,
    pub user_id: i32,
    pub target: FavoriteTarget,
}

#[derive(Debug, thiserror::Error)]
#[error("favorite {id} must reference exactly one person or planet")]
pub struct InvalidFavoriteRow {
    pub id: i32,
}

impl TryFrom<favorites::Model> for Favorite {
    type Error = InvalidFavoriteRow;

    fn try_from(model: favorites::Model) -> Result<Self, Self::Error> {
        let target = match (model.people_id, model.planet_id) {
            (Some(person_id), None) => FavoriteTarget::Person(person_id),
            (None, Some(planet_id)) => FavoriteTarget::Planet(planet_id),
            _ => return Err(InvalidFavoriteRow { id: model.id }),
        };
        Ok(Favorite {
            id: model.id,
            user_id: model.user_id,
            target,
        })
    }
}

impl From<users::Model> for User {
    fn from(model: users::Model) -> Self {
        User {
            id: model.id,
            email: model.email,
            is_active: model.is_active,
        }
    }
}

impl From<people::Model> for Person {
    fn from(model: people::Model) -> Self {
        Person {
            id: model.id,
            name: model.name,
            height: model.height,
            mass: model.mass,
            hair_color: model.hair_color,
            skin_color: model.skin_color,
            eye_color: model.eye_color,
            birth_year: model.birth_year,
            gender: model.gender,
        }
    }
}

impl From<planets::Model> for Planet {
    fn from(model: planets::Model) -> Self {
        Planet {
            id: model.id,
            name: model.name,
            diameter: model.diameter,
            rotation_period: model.rotation_period,
            orbital_period: model.orbital_period,
            gravity: model.gravity,
            population: model.population,
            climate: model.climate,
            terrain: model.terrain,
            surface_water: model.surface_water,
        }
    }
}
