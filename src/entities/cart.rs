use sea_orm::entity::prelude::*;
use crate::entities::frame_option::Entity as FrameOption;
use crate::entities::paper_type::Entity as PaperType;
use crate::entities::print::Entity as Print;
use crate::entities::print_size::Entity as PrintSize;

//One configured line item. The composite
//(session_id, print_id, size_id, paper_id, frame_id) is unique by
//construction: add_line_item merges into an existing row instead of
//inserting a second one. Prices are never stored here, they are recomputed
//from the joined catalog rows on every read.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "cart")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(indexed)]
    pub session_id: String,
    pub print_id: i32,
    pub size_id: String,
    pub paper_id: String,
    pub frame_id: String,
    pub quantity: u32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "Print",
        from = "Column::PrintId",
        to = "crate::entities::print::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Print,
    #[sea_orm(
        belongs_to = "PrintSize",
        from = "Column::SizeId",
        to = "crate::entities::print_size::Column::Id",
    )]
    Size,
    #[sea_orm(
        belongs_to = "PaperType",
        from = "Column::PaperId",
        to = "crate::entities::paper_type::Column::Id",
    )]
    Paper,
    #[sea_orm(
        belongs_to = "FrameOption",
        from = "Column::FrameId",
        to = "crate::entities::frame_option::Column::Id",
    )]
    Frame,
}

impl ActiveModelBehavior for ActiveModel {}

impl Related<crate::entities::print::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Print.def()
    }
}
