use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::{Brand, Category, Product};

#[derive(Serialize, ToSchema)]
#[serde(transparent)]
pub struct ProductList {
    #[schema(value_type = Vec<Product>)]
    pub items: Vec<Product>,
}

#[derive(Serialize, ToSchema)]
#[serde(transparent)]
pub struct CategoryList {
    #[schema(value_type = Vec<Category>)]
    pub items: Vec<Category>,
}

#[derive(Serialize, ToSchema)]
#[serde(transparent)]
pub struct BrandList {
    #[schema(value_type = Vec<Brand>)]
    pub items: Vec<Brand>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateProductRequest {
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub is_digital: bool,
    pub brand_id: i32,
    pub category_id: Option<i32>,
    #[serde(default)]
    pub is_active: bool,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateProductLineRequest {
    pub product_id: i32,
    pub product_type_id: i32,
    pub price: i64,
    pub sku: String,
    pub stock_quantity: i32,
    #[serde(default)]
    pub is_active: bool,
    /// Left empty to take the next free position within the product.
    pub order: Option<i32>,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateProductLineRequest {
    pub price: Option<i64>,
    pub sku: Option<String>,
    pub stock_quantity: Option<i32>,
    pub is_active: Option<bool>,
    pub order: Option<i32>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateProductImageRequest {
    pub product_line_id: i32,
    pub url: String,
    #[serde(default)]
    pub alternative_text: String,
    pub order: Option<i32>,
}
