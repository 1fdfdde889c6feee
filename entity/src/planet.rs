use sea_orm::entity::prelude::*;

/// A planet from the catalog.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "planet")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_type = "String(StringLen::N(100))")]
    pub name: String,
    #[sea_orm(column_type = "String(StringLen::N(50))")]
    pub climate: String,
    #[sea_orm(column_type = "String(StringLen::N(50))")]
    pub population: String,
    #[sea_orm(column_type = "String(StringLen::N(50))")]
    pub terrain: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::favorite_planet::Entity")]
    FavoritePlanet,
}

impl Related<super::favorite_planet::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FavoritePlanet.def()
    }
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        super::favorite_planet::Relation::User.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::favorite_planet::Relation::Planet.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
