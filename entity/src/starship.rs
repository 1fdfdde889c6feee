use sea_orm::entity::prelude::*;

/// A starship from the catalog.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "starship")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_type = "String(StringLen::N(100))")]
    pub name: String,
    #[sea_orm(column_type = "String(StringLen::N(100))")]
    pub model: String,
    #[sea_orm(column_type = "String(StringLen::N(100))")]
    pub manufacturer: String,
    #[sea_orm(column_type = "String(StringLen::N(50))")]
    pub crew: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::favorite_starship::Entity")]
    FavoriteStarship,
}

impl Related<super::favorite_starship::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FavoriteStarship.def()
    }
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        super::favorite_starship::Relation::User.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::favorite_starship::Relation::Starship.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
