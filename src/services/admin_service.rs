use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, TransactionTrait,
};

use crate::{
    dto::{
        catalog::{
            CreateAttributeRequest, CreateAttributeValueRequest, CreateBrandRequest,
            CreateCategoryRequest,
        },
        products::{
            CreateProductImageRequest, CreateProductLineRequest, CreateProductRequest,
            UpdateProductLineRequest,
        },
    },
    entity::{
        AttributeValues, Attributes, Brands, Categories, ProductImages,
        ProductLineAttributeValues, ProductLines, ProductTypeAttributes, ProductTypes, Products,
        attribute_values, attributes, brands, categories, product_images,
        product_line_attribute_values, product_lines, product_type_attributes, product_types,
        products,
    },
    error::{AppError, AppResult},
    ordering::{insert_ordered, update_ordered},
    state::AppState,
};

const NAME_MAX_LEN: usize = 100;
const SLUG_MAX_LEN: usize = 255;

pub async fn create_brand(state: &AppState, payload: CreateBrandRequest) -> AppResult<brands::Model> {
    validate_name("name", &payload.name)?;
    let brand = brands::ActiveModel {
        id: NotSet,
        name: Set(payload.name),
        is_active: Set(payload.is_active),
    }
    .insert(&state.orm)
    .await?;

    tracing::info!(brand_id = brand.id, "brand created");
    Ok(brand)
}

pub async fn create_category(
    state: &AppState,
    payload: CreateCategoryRequest,
) -> AppResult<categories::Model> {
    validate_name("name", &payload.name)?;
    if let Some(parent_id) = payload.parent_id {
        ensure_exists::<Categories, _>(&state.orm, parent_id, "Parent category not found")
            .await?;
    }

    let category = categories::ActiveModel {
        id: NotSet,
        name: Set(payload.name),
        parent_id: Set(payload.parent_id),
        is_active: Set(payload.is_active),
    }
    .insert(&state.orm)
    .await?;

    tracing::info!(category_id = category.id, "category created");
    Ok(category)
}

pub async fn create_product(
    state: &AppState,
    payload: CreateProductRequest,
) -> AppResult<products::Model> {
    validate_name("name", &payload.name)?;
    validate_slug(&payload.slug)?;
    ensure_exists::<Brands, _>(&state.orm, payload.brand_id, "Brand not found").await?;
    if let Some(category_id) = payload.category_id {
        ensure_exists::<Categories, _>(&state.orm, category_id, "Category not found").await?;
    }

    let product = products::ActiveModel {
        id: NotSet,
        name: Set(payload.name),
        slug: Set(payload.slug),
        description: Set(payload.description),
        is_digital: Set(payload.is_digital),
        brand_id: Set(payload.brand_id),
        category_id: Set(payload.category_id),
        is_active: Set(payload.is_active),
    }
    .insert(&state.orm)
    .await?;

    tracing::info!(product_id = product.id, slug = %product.slug, "product created");
    Ok(product)
}

pub async fn create_product_type(
    state: &AppState,
    name: impl Into<String>,
) -> AppResult<product_types::Model> {
    let name = name.into();
    validate_name("name", &name)?;
    let product_type = product_types::ActiveModel {
        id: NotSet,
        name: Set(name),
    }
    .insert(&state.orm)
    .await?;
    Ok(product_type)
}

pub async fn create_attribute(
    state: &AppState,
    payload: CreateAttributeRequest,
) -> AppResult<attributes::Model> {
    validate_name("name", &payload.name)?;
    let attribute = attributes::ActiveModel {
        id: NotSet,
        name: Set(payload.name),
        description: Set(payload.description),
    }
    .insert(&state.orm)
    .await?;
    Ok(attribute)
}

pub async fn create_attribute_value(
    state: &AppState,
    payload: CreateAttributeValueRequest,
) -> AppResult<attribute_values::Model> {
    validate_name("value", &payload.value)?;
    ensure_exists::<Attributes, _>(&state.orm, payload.attribute_id, "Attribute not found")
        .await?;

    let value = attribute_values::ActiveModel {
        id: NotSet,
        attribute_id: Set(payload.attribute_id),
        value: Set(payload.value),
    }
    .insert(&state.orm)
    .await?;
    Ok(value)
}

/// Allows values of `attribute_id` on lines of `product_type_id`.
/// Adding an existing pair returns the stored row.
pub async fn add_product_type_attribute(
    state: &AppState,
    product_type_id: i32,
    attribute_id: i32,
) -> AppResult<product_type_attributes::Model> {
    ensure_exists::<ProductTypes, _>(&state.orm, product_type_id, "Product type not found")
        .await?;
    ensure_exists::<Attributes, _>(&state.orm, attribute_id, "Attribute not found").await?;

    let existing = ProductTypeAttributes::find()
        .filter(product_type_attributes::Column::ProductTypeId.eq(product_type_id))
        .filter(product_type_attributes::Column::AttributeId.eq(attribute_id))
        .one(&state.orm)
        .await?;
    if let Some(link) = existing {
        return Ok(link);
    }

    let link = product_type_attributes::ActiveModel {
        id: NotSet,
        product_type_id: Set(product_type_id),
        attribute_id: Set(attribute_id),
    }
    .insert(&state.orm)
    .await?;
    Ok(link)
}

pub async fn create_product_line(
    state: &AppState,
    payload: CreateProductLineRequest,
) -> AppResult<product_lines::Model> {
    validate_name("sku", &payload.sku)?;
    validate_stock(Some(payload.stock_quantity), Some(payload.price))?;
    validate_order(payload.order)?;
    ensure_exists::<Products, _>(&state.orm, payload.product_id, "Product not found").await?;
    ensure_exists::<ProductTypes, _>(&state.orm, payload.product_type_id, "Product type not found")
        .await?;

    let active = product_lines::ActiveModel {
        id: NotSet,
        price: Set(payload.price),
        sku: Set(payload.sku),
        stock_quantity: Set(payload.stock_quantity),
        product_id: Set(payload.product_id),
        product_type_id: Set(payload.product_type_id),
        is_active: Set(payload.is_active),
        order: payload.order.map_or(NotSet, Set),
    };

    let txn = state.orm.begin().await?;
    let line = insert_ordered(&txn, active).await?;
    txn.commit().await?;

    tracing::info!(
        product_line_id = line.id,
        product_id = line.product_id,
        order = line.order,
        "product line created"
    );
    Ok(line)
}

pub async fn update_product_line(
    state: &AppState,
    id: i32,
    payload: UpdateProductLineRequest,
) -> AppResult<product_lines::Model> {
    validate_stock(payload.stock_quantity, payload.price)?;
    validate_order(payload.order)?;

    let txn = state.orm.begin().await?;
    let existing = ProductLines::find_by_id(id).one(&txn).await?;
    let existing = match existing {
        Some(line) => line,
        None => return Err(AppError::NotFound),
    };

    let mut active: product_lines::ActiveModel = existing.into();
    if let Some(price) = payload.price {
        active.price = Set(price);
    }
    if let Some(sku) = payload.sku {
        validate_name("sku", &sku)?;
        active.sku = Set(sku);
    }
    if let Some(stock_quantity) = payload.stock_quantity {
        active.stock_quantity = Set(stock_quantity);
    }
    if let Some(is_active) = payload.is_active {
        active.is_active = Set(is_active);
    }
    if let Some(order) = payload.order {
        active.order = Set(order);
    }

    let line = update_ordered(&txn, active).await?;
    txn.commit().await?;
    Ok(line)
}

pub async fn create_product_image(
    state: &AppState,
    payload: CreateProductImageRequest,
) -> AppResult<product_images::Model> {
    if payload.url.trim().is_empty() {
        return Err(AppError::BadRequest("url must not be empty".into()));
    }
    if payload.alternative_text.chars().count() > NAME_MAX_LEN {
        return Err(AppError::BadRequest(format!(
            "alternative_text must be at most {NAME_MAX_LEN} characters"
        )));
    }
    validate_order(payload.order)?;
    ensure_exists::<ProductLines, _>(&state.orm, payload.product_line_id, "Product line not found")
        .await?;

    let active = product_images::ActiveModel {
        id: NotSet,
        alternative_text: Set(payload.alternative_text),
        url: Set(payload.url),
        product_line_id: Set(payload.product_line_id),
        order: payload.order.map_or(NotSet, Set),
    };

    let txn = state.orm.begin().await?;
    let image = insert_ordered(&txn, active).await?;
    txn.commit().await?;
    Ok(image)
}

/// Links an attribute value to a product line. The value's attribute must
/// belong to the line's product type; linking twice is a no-op.
pub async fn attach_attribute_value(
    state: &AppState,
    product_line_id: i32,
    attribute_value_id: i32,
) -> AppResult<product_line_attribute_values::Model> {
    let line = ProductLines::find_by_id(product_line_id)
        .one(&state.orm)
        .await?
        .ok_or_else(|| AppError::BadRequest("Product line not found".into()))?;
    let value = AttributeValues::find_by_id(attribute_value_id)
        .one(&state.orm)
        .await?
        .ok_or_else(|| AppError::BadRequest("Attribute value not found".into()))?;

    let allowed = ProductTypeAttributes::find()
        .filter(product_type_attributes::Column::ProductTypeId.eq(line.product_type_id))
        .filter(product_type_attributes::Column::AttributeId.eq(value.attribute_id))
        .one(&state.orm)
        .await?;
    if allowed.is_none() {
        return Err(AppError::Validation(
            "Attribute is not part of the product type".into(),
        ));
    }

    let existing = ProductLineAttributeValues::find()
        .filter(product_line_attribute_values::Column::ProductLineId.eq(line.id))
        .filter(product_line_attribute_values::Column::AttributeValueId.eq(value.id))
        .one(&state.orm)
        .await?;
    if let Some(link) = existing {
        return Ok(link);
    }

    let link = product_line_attribute_values::ActiveModel {
        id: NotSet,
        product_line_id: Set(line.id),
        attribute_value_id: Set(value.id),
    }
    .insert(&state.orm)
    .await?;
    Ok(link)
}

/// Removes every catalog row.
pub async fn clear_catalog(state: &AppState) -> AppResult<()> {
    let txn = state.orm.begin().await?;
    ProductLineAttributeValues::delete_many().exec(&txn).await?;
    ProductImages::delete_many().exec(&txn).await?;
    ProductLines::delete_many().exec(&txn).await?;
    ProductTypeAttributes::delete_many().exec(&txn).await?;
    AttributeValues::delete_many().exec(&txn).await?;
    Attributes::delete_many().exec(&txn).await?;
    ProductTypes::delete_many().exec(&txn).await?;
    Products::delete_many().exec(&txn).await?;
    Categories::delete_many().exec(&txn).await?;
    Brands::delete_many().exec(&txn).await?;
    txn.commit().await?;

    tracing::info!("catalog cleared");
    Ok(())
}

async fn ensure_exists<E, C>(db: &C, id: i32, message: &str) -> AppResult<()>
where
    E: EntityTrait,
    <E::PrimaryKey as sea_orm::PrimaryKeyTrait>::ValueType: From<i32>,
    C: ConnectionTrait,
{
    match E::find_by_id(id).one(db).await? {
        Some(_) => Ok(()),
        None => Err(AppError::BadRequest(message.to_string())),
    }
}

fn validate_name(field: &str, value: &str) -> AppResult<()> {
    if value.trim().is_empty() {
        return Err(AppError::BadRequest(format!("{field} must not be empty")));
    }
    if value.chars().count() > NAME_MAX_LEN {
        return Err(AppError::BadRequest(format!(
            "{field} must be at most {NAME_MAX_LEN} characters"
        )));
    }
    Ok(())
}

fn validate_slug(slug: &str) -> AppResult<()> {
    let valid = !slug.is_empty()
        && slug.len() <= SLUG_MAX_LEN
        && slug
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if valid {
        Ok(())
    } else {
        Err(AppError::BadRequest(
            "slug may only contain letters, numbers, hyphens and underscores".into(),
        ))
    }
}

fn validate_stock(stock_quantity: Option<i32>, price: Option<i64>) -> AppResult<()> {
    if stock_quantity.is_some_and(|stock| stock < 0) {
        return Err(AppError::BadRequest("stock_quantity cannot be negative".into()));
    }
    if price.is_some_and(|price| price < 0) {
        return Err(AppError::BadRequest("price cannot be negative".into()));
    }
    Ok(())
}

fn validate_order(order: Option<i32>) -> AppResult<()> {
    match order {
        Some(order) if order < 1 => Err(AppError::BadRequest(
            "order must be a positive integer".into(),
        )),
        _ => Ok(()),
    }
}
