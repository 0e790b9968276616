use utoipa::{OpenApi, openapi::OpenApi as OpenApiSpec};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::products::{BrandList, CategoryList, ProductList},
    models::{Brand, Category, Product, ProductImage, ProductLine},
    response::{ApiResponse, Meta},
    routes::{brands, categories, health, products},
};

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        categories::list_categories,
        brands::list_brands,
        products::list_products,
        products::get_product,
        products::list_by_category,
        products::list_by_brand
    ),
    components(
        schemas(
            Category,
            Brand,
            Product,
            ProductLine,
            ProductImage,
            CategoryList,
            BrandList,
            ProductList,
            Meta,
            ApiResponse<Product>,
            ApiResponse<ProductList>,
            ApiResponse<CategoryList>,
            ApiResponse<BrandList>
        )
    ),
    tags(
        (name = "Health", description = "Health check endpoint"),
        (name = "Categories", description = "Category endpoints"),
        (name = "Brands", description = "Brand endpoints"),
        (name = "Products", description = "Product endpoints"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
