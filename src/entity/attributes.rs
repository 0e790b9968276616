use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "attributes")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::attribute_values::Entity")]
    AttributeValues,
    #[sea_orm(has_many = "super::product_type_attributes::Entity")]
    ProductTypeAttributes,
}

impl Related<super::attribute_values::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AttributeValues.def()
    }
}

impl Related<super::product_type_attributes::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProductTypeAttributes.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
