#![allow(dead_code)]

use catalog_api::{
    db::{create_orm_conn, run_migrations},
    dto::{
        catalog::{
            CreateAttributeRequest, CreateAttributeValueRequest, CreateBrandRequest,
            CreateCategoryRequest,
        },
        products::{CreateProductImageRequest, CreateProductLineRequest, CreateProductRequest},
    },
    entity::{brands, categories, product_lines, products},
    services::admin_service,
    state::AppState,
};

/// Fresh in-memory database with the catalog schema applied.
pub async fn setup_state() -> anyhow::Result<AppState> {
    let orm = create_orm_conn("sqlite::memory:").await?;
    run_migrations(&orm).await?;
    Ok(AppState { orm })
}

pub async fn brand(state: &AppState, name: &str, is_active: bool) -> anyhow::Result<brands::Model> {
    Ok(admin_service::create_brand(
        state,
        CreateBrandRequest {
            name: name.into(),
            is_active,
        },
    )
    .await?)
}

pub async fn category(
    state: &AppState,
    name: &str,
    parent_id: Option<i32>,
) -> anyhow::Result<categories::Model> {
    Ok(admin_service::create_category(
        state,
        CreateCategoryRequest {
            name: name.into(),
            parent_id,
            is_active: true,
        },
    )
    .await?)
}

pub async fn product(
    state: &AppState,
    slug: &str,
    brand_id: i32,
    category_id: Option<i32>,
    is_active: bool,
) -> anyhow::Result<products::Model> {
    Ok(admin_service::create_product(
        state,
        CreateProductRequest {
            name: slug.replace('-', " "),
            slug: slug.into(),
            description: format!("About {slug}"),
            is_digital: false,
            brand_id,
            category_id,
            is_active,
        },
    )
    .await?)
}

pub fn line_request(product_id: i32, product_type_id: i32, sku: &str) -> CreateProductLineRequest {
    CreateProductLineRequest {
        product_id,
        product_type_id,
        price: 1999,
        sku: sku.into(),
        stock_quantity: 10,
        is_active: true,
        order: None,
    }
}

pub async fn line(
    state: &AppState,
    product_id: i32,
    product_type_id: i32,
    sku: &str,
) -> anyhow::Result<product_lines::Model> {
    Ok(admin_service::create_product_line(state, line_request(product_id, product_type_id, sku)).await?)
}

pub fn image_request(product_line_id: i32, name: &str) -> CreateProductImageRequest {
    CreateProductImageRequest {
        product_line_id,
        url: format!("https://images.example.com/{name}.png"),
        alternative_text: name.into(),
        order: None,
    }
}

/// Attribute with one value, registered on `product_type_id`.
/// Returns `(attribute_id, attribute_value_id)`.
pub async fn attribute_value(
    state: &AppState,
    product_type_id: i32,
    attribute: &str,
    value: &str,
) -> anyhow::Result<(i32, i32)> {
    let attribute = admin_service::create_attribute(
        state,
        CreateAttributeRequest {
            name: attribute.into(),
            description: None,
        },
    )
    .await?;
    admin_service::add_product_type_attribute(state, product_type_id, attribute.id).await?;
    let value = admin_service::create_attribute_value(
        state,
        CreateAttributeValueRequest {
            attribute_id: attribute.id,
            value: value.into(),
        },
    )
    .await?;
    Ok((attribute.id, value.id))
}
