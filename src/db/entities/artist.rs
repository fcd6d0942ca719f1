use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "artists")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub image: Option<String>,
    pub birth_date: Option<Date>,
    pub death_date: Option<Date>,
    pub birth_country_id: Option<i32>,
    pub death_country_id: Option<i32>,
}

/// Both country relations point at the same table, so there is no
/// `Related<country::Entity>` impl; query them through the columns.
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::country::Entity",
        from = "Column::BirthCountryId",
        to = "super::country::Column::Id",
        on_update = "NoAction",
        on_delete = "SetNull"
    )]
    BirthCountry,
    #[sea_orm(
        belongs_to = "super::country::Entity",
        from = "Column::DeathCountryId",
        to = "super::country::Column::Id",
        on_update = "NoAction",
        on_delete = "SetNull"
    )]
    DeathCountry,
    #[sea_orm(has_many = "super::artwork::Entity")]
    Artworks,
}

impl Related<super::artwork::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Artworks.def()
    }
}

impl Related<super::museum::Entity> for Entity {
    fn to() -> RelationDef {
        super::artist_museum::Relation::Museum.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::artist_museum::Relation::Artist.def().rev())
    }
}

impl Related<super::movement::Entity> for Entity {
    fn to() -> RelationDef {
        super::artist_movement::Relation::Movement.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::artist_movement::Relation::Artist.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
