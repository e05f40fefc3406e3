use sea_orm::entity::prelude::*;

/// One row per favorite. Exactly one of `people_id` / `planet_id` is set; the
/// table carries a CHECK constraint for it and unique indexes per target kind.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "favorites")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i32,
    pub people_id: Option<i32>,
    pub planet_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::UserId",
        to = "super::users::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Users,
    #[sea_orm(
        belongs_to = "super::people::Entity",
        from = "Column::PeopleId",
        to = "super::people::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    People,
    #[sea_orm(
        belongs_to = "super::planets::Entity",
        from = "Column::PlanetId",
        to = "super::planets::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Planets,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Users.def()
    }
}

impl Related<super::people::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::People.def()
    }
}

impl Related<super::planets::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Planets.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
