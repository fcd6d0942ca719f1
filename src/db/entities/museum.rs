use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "museums")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub image: Option<String>,
    pub address: Option<String>,
    pub total_artworks: Option<i32>,
    pub country_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::country::Entity",
        from = "Column::CountryId",
        to = "super::country::Column::Id",
        on_update = "NoAction",
        on_delete = "SetNull"
    )]
    Country,
    #[sea_orm(has_many = "super::artwork::Entity")]
    Artworks,
    #[sea_orm(has_many = "super::employee::Entity")]
    Employees,
}

impl Related<super::country::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Country.def()
    }
}

impl Related<super::artwork::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Artworks.def()
    }
}

impl Related<super::employee::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Employees.def()
    }
}

impl Related<super::artist::Entity> for Entity {
    fn to() -> RelationDef {
        super::artist_museum::Relation::Artist.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::artist_museum::Relation::Museum.def().rev())
    }
}

impl Related<super::movement::Entity> for Entity {
    fn to() -> RelationDef {
        super::movement_museum::Relation::Movement.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::movement_museum::Relation::Museum.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
