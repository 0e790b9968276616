pub mod admin_service;
pub mod brand_service;
pub mod category_service;
pub mod product_service;
