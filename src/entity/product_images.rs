use sea_orm::entity::prelude::*;

use crate::ordering::{OrderField, OrderedEntity};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "product_images")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub alternative_text: String,
    pub url: String,
    pub product_line_id: i32,
    pub order: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::product_lines::Entity",
        from = "Column::ProductLineId",
        to = "super::product_lines::Column::Id",
        on_delete = "Cascade"
    )]
    ProductLines,
}

impl Related<super::product_lines::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProductLines.def()
    }
}

impl OrderedEntity for Entity {
    const ORDER_FIELD: OrderField = OrderField::new("order", Some("product_line_id"));
}

impl ActiveModelBehavior for ActiveModel {}
