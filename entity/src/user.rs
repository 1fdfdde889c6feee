use sea_orm::entity::prelude::*;

/// An application user.
///
/// `password` holds an already hashed credential. The model intentionally does
/// not implement `Serialize`; expose users through a DTO that omits it.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "user")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_type = "String(StringLen::N(120))", unique)]
    pub email: String,
    pub password: String,
    #[sea_orm(column_type = "String(StringLen::N(50))")]
    pub first_name: String,
    #[sea_orm(column_type = "String(StringLen::N(50))")]
    pub last_name: String,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::favorite_character::Entity")]
    FavoriteCharacter,
    #[sea_orm(has_many = "super::favorite_planet::Entity")]
    FavoritePlanet,
    #[sea_orm(has_many = "super::favorite_starship::Entity")]
    FavoriteStarship,
}

impl Related<super::favorite_character::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FavoriteCharacter.def()
    }
}

impl Related<super::favorite_planet::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FavoritePlanet.def()
    }
}

impl Related<super::favorite_starship::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FavoriteStarship.def()
    }
}

// Many-to-many through the favorite link tables

impl Related<super::character::Entity> for Entity {
    fn to() -> RelationDef {
        super::favorite_character::Relation::Character.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::favorite_character::Relation::User.def().rev())
    }
}

impl Related<super::planet::Entity> for Entity {
    fn to() -> RelationDef {
        super::favorite_planet::Relation::Planet.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::favorite_planet::Relation::User.def().rev())
    }
}

impl Related<super::starship::Entity> for Entity {
    fn to() -> RelationDef {
        super::favorite_starship::Relation::Starship.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::favorite_starship::Relation::User.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
