use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "product_types")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::product_lines::Entity")]
    ProductLines,
    #[sea_orm(has_many = "super::product_type_attributes::Entity")]
    ProductTypeAttributes,
}

impl Related<super::product_lines::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProductLines.def()
    }
}

impl Related<super::product_type_attributes::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProductTypeAttributes.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
