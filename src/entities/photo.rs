use sea_orm::entity::prelude::*;
use serde::Serialize;
use std::str::FromStr;

use crate::entities::gallery::Entity as Gallery;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "photo")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(indexed)]
    pub gallery_id: String,
    pub src: String,
    pub alt: String,
    pub width: i32,
    pub height: i32,
    pub caption: Option<String>,
    pub kind: MediaKind,
    //Only set for kind == video; src then holds the poster image.
    pub video_src: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "Gallery",
        from = "Column::GalleryId",
        to = "crate::entities::gallery::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Gallery,
}

impl Related<crate::entities::gallery::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Gallery.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Clone, Copy, PartialEq, Debug, EnumIter, DeriveActiveEnum, Serialize)]
#[serde(rename_all = "lowercase")]
#[sea_orm(
    enum_name = "media_kind_enum",
    db_type = "String(StringLen::N(255))",
    rs_type = "String"
)]
pub enum MediaKind {
    #[sea_orm(string_value = "image")]
    Image,
    #[sea_orm(string_value = "video")]
    Video,
}

impl FromStr for MediaKind {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "image" => Ok(MediaKind::Image),
            "video" => Ok(MediaKind::Video),
            _ => Err(()),
        }
    }
}
