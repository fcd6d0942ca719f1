use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// An artistic movement.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "movements")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub image: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub peak_date: Option<Date>,
    pub origin_country_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::country::Entity",
        from = "Column::OriginCountryId",
        to = "super::country::Column::Id",
        on_update = "NoAction",
        on_delete = "SetNull"
    )]
    OriginCountry,
    #[sea_orm(has_many = "super::artwork::Entity")]
    Artworks,
}

impl Related<super::country::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::OriginCountry.def()
    }
}

impl Related<super::artwork::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Artworks.def()
    }
}

impl Related<super::artist::Entity> for Entity {
    fn to() -> RelationDef {
        super::artist_movement::Relation::Artist.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::artist_movement::Relation::Movement.def().rev())
    }
}

impl Related<super::museum::Entity> for Entity {
    fn to() -> RelationDef {
        super::movement_museum::Relation::Museum.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::movement_museum::Relation::Movement.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
