use std::collections::{HashMap, HashSet};

use sea_orm::{
    ColumnTrait, Condition, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect,
};

use crate::{
    dto::products::ProductList,
    entity::{
        AttributeValues, Brands, Categories, ProductImages, ProductLineAttributeValues,
        ProductLines, ProductTypes, Products, attribute_values, brands, categories,
        product_images, product_line_attribute_values, product_lines, product_types, products,
    },
    error::{AppError, AppResult},
    models::Product,
    response::{ApiResponse, Meta},
    serializers::product_line_from_entity,
    state::AppState,
};

/// Row selection for product queries. Name filters are exact and
/// case-sensitive.
#[derive(Debug, Default, Clone)]
pub struct ProductFilter {
    pub active_only: bool,
    pub slug: Option<String>,
    pub category: Option<String>,
    pub brand: Option<String>,
}

impl ProductFilter {
    pub fn active() -> Self {
        Self {
            active_only: true,
            ..Self::default()
        }
    }
}

pub async fn find_products<C: ConnectionTrait>(
    db: &C,
    filter: &ProductFilter,
) -> Result<Vec<products::Model>, DbErr> {
    let mut condition = Condition::all();
    let mut finder = Products::find();

    if filter.active_only {
        condition = condition.add(products::Column::IsActive.eq(true));
    }
    if let Some(slug) = &filter.slug {
        condition = condition.add(products::Column::Slug.eq(slug.as_str()));
    }
    if let Some(category) = &filter.category {
        finder = finder.inner_join(Categories);
        condition = condition.add(categories::Column::Name.eq(category.as_str()));
    }
    if let Some(brand) = &filter.brand {
        finder = finder.inner_join(Brands);
        condition = condition.add(brands::Column::Name.eq(brand.as_str()));
    }

    finder
        .filter(condition)
        .order_by_asc(products::Column::Id)
        .all(db)
        .await
}

/// Resolves brand, category, product lines, product types, images and
/// attribute values for `rows` with one batched query per relation.
///
/// Every line of a product is returned; `is_active` only selects products.
pub async fn load_products<C: ConnectionTrait>(
    db: &C,
    rows: Vec<products::Model>,
) -> Result<Vec<Product>, DbErr> {
    if rows.is_empty() {
        return Ok(Vec::new());
    }

    let brand_ids: HashSet<i32> = rows.iter().map(|p| p.brand_id).collect();
    let brand_names: HashMap<i32, String> = Brands::find()
        .filter(brands::Column::Id.is_in(brand_ids))
        .all(db)
        .await?
        .into_iter()
        .map(|b| (b.id, b.name))
        .collect();

    let category_ids: HashSet<i32> = rows.iter().filter_map(|p| p.category_id).collect();
    let category_names: HashMap<i32, String> = if category_ids.is_empty() {
        HashMap::new()
    } else {
        Categories::find()
            .filter(categories::Column::Id.is_in(category_ids))
            .all(db)
            .await?
            .into_iter()
            .map(|c| (c.id, c.name))
            .collect()
    };

    let product_ids: Vec<i32> = rows.iter().map(|p| p.id).collect();
    let lines = ProductLines::find()
        .filter(product_lines::Column::ProductId.is_in(product_ids))
        .order_by_asc(product_lines::Column::Order)
        .all(db)
        .await?;

    let line_ids: Vec<i32> = lines.iter().map(|l| l.id).collect();
    let mut images = load_images(db, &line_ids).await?;
    let mut values = load_attribute_values(db, &line_ids).await?;

    let type_ids: HashSet<i32> = lines.iter().map(|l| l.product_type_id).collect();
    let type_names: HashMap<i32, String> = if type_ids.is_empty() {
        HashMap::new()
    } else {
        ProductTypes::find()
            .filter(product_types::Column::Id.is_in(type_ids))
            .all(db)
            .await?
            .into_iter()
            .map(|t| (t.id, t.name))
            .collect()
    };

    let mut lines_by_product: HashMap<i32, Vec<product_lines::Model>> = HashMap::new();
    for line in lines {
        lines_by_product.entry(line.product_id).or_default().push(line);
    }

    let products = rows
        .into_iter()
        .map(|product| {
            let product_line = lines_by_product
                .remove(&product.id)
                .unwrap_or_default()
                .into_iter()
                .map(|line| {
                    let line_images = images.remove(&line.id).unwrap_or_default();
                    let line_values = values.remove(&line.id).unwrap_or_default();
                    let type_name = match type_names.get(&line.product_type_id) {
                        Some(name) => name.clone(),
                        None => {
                            tracing::warn!(
                                product_line_id = line.id,
                                product_type_id = line.product_type_id,
                                "product type not found"
                            );
                            String::new()
                        }
                    };
                    product_line_from_entity(line, type_name, line_images, &line_values)
                })
                .collect();

            Product {
                brand: brand_names
                    .get(&product.brand_id)
                    .cloned()
                    .unwrap_or_default(),
                category: product
                    .category_id
                    .and_then(|id| category_names.get(&id).cloned()),
                name: product.name,
                slug: product.slug,
                description: product.description,
                is_digital: product.is_digital,
                product_line,
            }
        })
        .collect();

    Ok(products)
}

async fn load_images<C: ConnectionTrait>(
    db: &C,
    line_ids: &[i32],
) -> Result<HashMap<i32, Vec<product_images::Model>>, DbErr> {
    let mut grouped: HashMap<i32, Vec<product_images::Model>> = HashMap::new();
    if line_ids.is_empty() {
        return Ok(grouped);
    }

    let images = ProductImages::find()
        .filter(product_images::Column::ProductLineId.is_in(line_ids.iter().copied()))
        .order_by_asc(product_images::Column::Order)
        .all(db)
        .await?;
    for image in images {
        grouped.entry(image.product_line_id).or_default().push(image);
    }
    Ok(grouped)
}

async fn load_attribute_values<C: ConnectionTrait>(
    db: &C,
    line_ids: &[i32],
) -> Result<HashMap<i32, Vec<attribute_values::Model>>, DbErr> {
    let mut grouped: HashMap<i32, Vec<attribute_values::Model>> = HashMap::new();
    if line_ids.is_empty() {
        return Ok(grouped);
    }

    let links: Vec<(i32, i32)> = ProductLineAttributeValues::find()
        .select_only()
        .column(product_line_attribute_values::Column::ProductLineId)
        .column(product_line_attribute_values::Column::AttributeValueId)
        .filter(
            product_line_attribute_values::Column::ProductLineId.is_in(line_ids.iter().copied()),
        )
        .order_by_asc(product_line_attribute_values::Column::Id)
        .into_tuple()
        .all(db)
        .await?;
    if links.is_empty() {
        return Ok(grouped);
    }

    let value_ids: HashSet<i32> = links.iter().map(|(_, value_id)| *value_id).collect();
    let by_id: HashMap<i32, attribute_values::Model> = AttributeValues::find()
        .filter(attribute_values::Column::Id.is_in(value_ids))
        .all(db)
        .await?
        .into_iter()
        .map(|v| (v.id, v))
        .collect();

    for (line_id, value_id) in links {
        if let Some(value) = by_id.get(&value_id) {
            grouped.entry(line_id).or_default().push(value.clone());
        }
    }
    Ok(grouped)
}

async fn fetch(state: &AppState, filter: ProductFilter) -> AppResult<Vec<Product>> {
    let rows = find_products(&state.orm, &filter).await?;
    let items = load_products(&state.orm, rows).await?;
    tracing::debug!(count = items.len(), ?filter, "loaded products");
    Ok(items)
}

pub async fn list_products(state: &AppState) -> AppResult<ApiResponse<ProductList>> {
    let items = fetch(state, ProductFilter::active()).await?;
    let meta = Meta::total(items.len());
    Ok(ApiResponse::success("Products", ProductList { items }, Some(meta)))
}

pub async fn get_product(state: &AppState, slug: &str) -> AppResult<ApiResponse<Product>> {
    let filter = ProductFilter {
        slug: Some(slug.to_string()),
        ..ProductFilter::active()
    };
    let product = match fetch(state, filter).await?.into_iter().next() {
        Some(p) => p,
        None => return Err(AppError::NotFound),
    };
    Ok(ApiResponse::success("Product", product, None))
}

pub async fn list_by_category(
    state: &AppState,
    category: &str,
) -> AppResult<ApiResponse<ProductList>> {
    let filter = ProductFilter {
        category: Some(category.to_string()),
        ..ProductFilter::active()
    };
    let items = fetch(state, filter).await?;
    let meta = Meta::total(items.len());
    Ok(ApiResponse::success("Products", ProductList { items }, Some(meta)))
}

pub async fn list_by_brand(state: &AppState, brand: &str) -> AppResult<ApiResponse<ProductList>> {
    let filter = ProductFilter {
        brand: Some(brand.to_string()),
        ..ProductFilter::active()
    };
    let items = fetch(state, filter).await?;
    let meta = Meta::total(items.len());
    Ok(ApiResponse::success("Products", ProductList { items }, Some(meta)))
}
