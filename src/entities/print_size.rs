use sea_orm::entity::prelude::*;
use serde::Serialize;

//Option catalogs are keyed by their display slug ("8x10", "16x20", ...),
//the same identifiers the storefront sends back when configuring a print.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "print_size")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub name: String,
    pub price_modifier: f64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
