use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Attribute id to value, see [`crate::serializers::specification`].
pub type Specification = BTreeMap<i32, String>;

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq)]
pub struct Category {
    pub category: String,
}

/// Brands are exposed without their primary key.
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq)]
pub struct Brand {
    pub brand: String,
    pub name: String,
    pub is_active: bool,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq)]
pub struct ProductImage {
    pub url: String,
    pub alternative_text: String,
    pub order: i32,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq)]
pub struct ProductLine {
    pub price: i64,
    pub sku: String,
    pub stock_quantity: i32,
    pub order: i32,
    pub product_type: String,
    pub product_image: Vec<ProductImage>,
    #[schema(value_type = Object)]
    pub specification: Specification,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq)]
pub struct Product {
    pub name: String,
    pub slug: String,
    pub description: String,
    pub is_digital: bool,
    pub brand: String,
    pub category: Option<String>,
    pub product_line: Vec<ProductLine>,
}
