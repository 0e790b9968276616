use sea_orm_migration::prelude::*;

pub struct Migration;

impl MigrationName for Migration {
    fn name(&self) -> &str {
        "m20240601_000001_create_catalog"
    }
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Brands::Table)
                    .if_not_exists()
                    .col(id(Brands::Id))
                    .col(ColumnDef::new(Brands::Name).string_len(100).not_null())
                    .col(flag(Brands::IsActive))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Categories::Table)
                    .if_not_exists()
                    .col(id(Categories::Id))
                    .col(ColumnDef::new(Categories::Name).string_len(100).not_null())
                    .col(ColumnDef::new(Categories::ParentId).integer().null())
                    .col(flag(Categories::IsActive))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_categories_parent")
                            .from(Categories::Table, Categories::ParentId)
                            .to(Categories::Table, Categories::Id)
                            .on_delete(ForeignKeyAction::NoAction),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Products::Table)
                    .if_not_exists()
                    .col(id(Products::Id))
                    .col(ColumnDef::new(Products::Name).string_len(100).not_null())
                    .col(ColumnDef::new(Products::Slug).string_len(255).not_null())
                    .col(
                        ColumnDef::new(Products::Description)
                            .text()
                            .not_null()
                            .default(""),
                    )
                    .col(flag(Products::IsDigital))
                    .col(ColumnDef::new(Products::BrandId).integer().not_null())
                    .col(ColumnDef::new(Products::CategoryId).integer().null())
                    .col(flag(Products::IsActive))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_products_brand")
                            .from(Products::Table, Products::BrandId)
                            .to(Brands::Table, Brands::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_products_category")
                            .from(Products::Table, Products::CategoryId)
                            .to(Categories::Table, Categories::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_products_slug")
                    .table(Products::Table)
                    .col(Products::Slug)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ProductTypes::Table)
                    .if_not_exists()
                    .col(id(ProductTypes::Id))
                    .col(ColumnDef::new(ProductTypes::Name).string_len(100).not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Attributes::Table)
                    .if_not_exists()
                    .col(id(Attributes::Id))
                    .col(ColumnDef::new(Attributes::Name).string_len(100).not_null())
                    .col(ColumnDef::new(Attributes::Description).text().null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(AttributeValues::Table)
                    .if_not_exists()
                    .col(id(AttributeValues::Id))
                    .col(
                        ColumnDef::new(AttributeValues::AttributeId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(AttributeValues::Value)
                            .string_len(100)
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_attribute_values_attribute")
                            .from(AttributeValues::Table, AttributeValues::AttributeId)
                            .to(Attributes::Table, Attributes::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ProductTypeAttributes::Table)
                    .if_not_exists()
                    .col(id(ProductTypeAttributes::Id))
                    .col(
                        ColumnDef::new(ProductTypeAttributes::ProductTypeId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ProductTypeAttributes::AttributeId)
                            .integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_product_type_attributes_type")
                            .from(ProductTypeAttributes::Table, ProductTypeAttributes::ProductTypeId)
                            .to(ProductTypes::Table, ProductTypes::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_product_type_attributes_attribute")
                            .from(ProductTypeAttributes::Table, ProductTypeAttributes::AttributeId)
                            .to(Attributes::Table, Attributes::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("uq_product_type_attribute")
                    .table(ProductTypeAttributes::Table)
                    .col(ProductTypeAttributes::ProductTypeId)
                    .col(ProductTypeAttributes::AttributeId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // No unique index on `order`: uniqueness per parent is checked by
        // crate::ordering before each write.
        manager
            .create_table(
                Table::create()
                    .table(ProductLines::Table)
                    .if_not_exists()
                    .col(id(ProductLines::Id))
                    .col(ColumnDef::new(ProductLines::Price).big_integer().not_null())
                    .col(ColumnDef::new(ProductLines::Sku).string_len(100).not_null())
                    .col(
                        ColumnDef::new(ProductLines::StockQuantity)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(ProductLines::ProductId).integer().not_null())
                    .col(
                        ColumnDef::new(ProductLines::ProductTypeId)
                            .integer()
                            .not_null(),
                    )
                    .col(flag(ProductLines::IsActive))
                    .col(ColumnDef::new(ProductLines::Order).integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_product_lines_product")
                            .from(ProductLines::Table, ProductLines::ProductId)
                            .to(Products::Table, Products::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_product_lines_type")
                            .from(ProductLines::Table, ProductLines::ProductTypeId)
                            .to(ProductTypes::Table, ProductTypes::Id)
                            .on_delete(ForeignKeyAction::NoAction),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ProductImages::Table)
                    .if_not_exists()
                    .col(id(ProductImages::Id))
                    .col(
                        ColumnDef::new(ProductImages::AlternativeText)
                            .string_len(100)
                            .not_null(),
                    )
                    .col(ColumnDef::new(ProductImages::Url).text().not_null())
                    .col(
                        ColumnDef::new(ProductImages::ProductLineId)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(ProductImages::Order).integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_product_images_line")
                            .from(ProductImages::Table, ProductImages::ProductLineId)
                            .to(ProductLines::Table, ProductLines::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ProductLineAttributeValues::Table)
                    .if_not_exists()
                    .col(id(ProductLineAttributeValues::Id))
                    .col(
                        ColumnDef::new(ProductLineAttributeValues::ProductLineId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ProductLineAttributeValues::AttributeValueId)
                            .integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_line_values_line")
                            .from(
                                ProductLineAttributeValues::Table,
                                ProductLineAttributeValues::ProductLineId,
                            )
                            .to(ProductLines::Table, ProductLines::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_line_values_value")
                            .from(
                                ProductLineAttributeValues::Table,
                                ProductLineAttributeValues::AttributeValueId,
                            )
                            .to(AttributeValues::Table, AttributeValues::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("uq_product_line_attribute_value")
                    .table(ProductLineAttributeValues::Table)
                    .col(ProductLineAttributeValues::ProductLineId)
                    .col(ProductLineAttributeValues::AttributeValueId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ProductLineAttributeValues::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ProductImages::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ProductLines::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ProductTypeAttributes::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(AttributeValues::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Attributes::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ProductTypes::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Products::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Categories::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Brands::Table).to_owned())
            .await
    }
}

fn id<T: IntoIden>(name: T) -> ColumnDef {
    ColumnDef::new(name)
        .integer()
        .not_null()
        .auto_increment()
        .primary_key()
        .to_owned()
}

fn flag<T: IntoIden>(name: T) -> ColumnDef {
    ColumnDef::new(name)
        .boolean()
        .not_null()
        .default(false)
        .to_owned()
}

#[derive(DeriveIden)]
enum Brands {
    Table,
    Id,
    Name,
    IsActive,
}

#[derive(DeriveIden)]
enum Categories {
    Table,
    Id,
    Name,
    ParentId,
    IsActive,
}

#[derive(DeriveIden)]
enum Products {
    Table,
    Id,
    Name,
    Slug,
    Description,
    IsDigital,
    BrandId,
    CategoryId,
    IsActive,
}

#[derive(DeriveIden)]
enum ProductTypes {
    Table,
    Id,
    Name,
}

#[derive(DeriveIden)]
enum Attributes {
    Table,
    Id,
    Name,
    Description,
}

#[derive(DeriveIden)]
enum AttributeValues {
    Table,
    Id,
    AttributeId,
    Value,
}

#[derive(DeriveIden)]
enum ProductTypeAttributes {
    Table,
    Id,
    ProductTypeId,
    AttributeId,
}

#[derive(DeriveIden)]
enum ProductLines {
    Table,
    Id,
    Price,
    Sku,
    StockQuantity,
    ProductId,
    ProductTypeId,
    IsActive,
    Order,
}

#[derive(DeriveIden)]
enum ProductImages {
    Table,
    Id,
    AlternativeText,
    Url,
    ProductLineId,
    Order,
}

#[derive(DeriveIden)]
enum ProductLineAttributeValues {
    Table,
    Id,
    ProductLineId,
    AttributeValueId,
}
