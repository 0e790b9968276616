use sea_orm::entity::prelude::*;

use crate::ordering::{OrderField, OrderedEntity};

/// A purchasable variant of a product. `price` is stored in minor units.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "product_lines")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub price: i64,
    pub sku: String,
    pub stock_quantity: i32,
    pub product_id: i32,
    pub product_type_id: i32,
    pub is_active: bool,
    pub order: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::products::Entity",
        from = "Column::ProductId",
        to = "super::products::Column::Id",
        on_delete = "Cascade"
    )]
    Products,
    #[sea_orm(
        belongs_to = "super::product_types::Entity",
        from = "Column::ProductTypeId",
        to = "super::product_types::Column::Id",
        on_delete = "NoAction"
    )]
    ProductTypes,
    #[sea_orm(has_many = "super::product_images::Entity")]
    ProductImages,
    #[sea_orm(has_many = "super::product_line_attribute_values::Entity")]
    ProductLineAttributeValues,
}

impl Related<super::products::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Products.def()
    }
}

impl Related<super::product_types::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProductTypes.def()
    }
}

impl Related<super::product_images::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProductImages.def()
    }
}

impl Related<super::product_line_attribute_values::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProductLineAttributeValues.def()
    }
}

impl OrderedEntity for Entity {
    const ORDER_FIELD: OrderField = OrderField::new("order", Some("product_id"));
}

impl ActiveModelBehavior for ActiveModel {}
