use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "product_line_attribute_values")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub product_line_id: i32,
    pub attribute_value_id: i32,
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
    #[sea_orm(
        belongs_to = "super::attribute_values::Entity",
        from = "Column::AttributeValueId",
        to = "super::attribute_values::Column::Id",
        on_delete = "Cascade"
    )]
    AttributeValues,
}

impl Related<super::product_lines::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProductLines.def()
    }
}

impl Related<super::attribute_values::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AttributeValues.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
