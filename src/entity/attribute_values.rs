use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "attribute_values")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub attribute_id: i32,
    pub value: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::attributes::Entity",
        from = "Column::AttributeId",
        to = "super::attributes::Column::Id",
        on_delete = "Cascade"
    )]
    Attributes,
    #[sea_orm(has_many = "super::product_line_attribute_values::Entity")]
    ProductLineAttributeValues,
}

impl Related<super::attributes::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Attributes.def()
    }
}

impl Related<super::product_line_attribute_values::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProductLineAttributeValues.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
