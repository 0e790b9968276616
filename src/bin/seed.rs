use std::collections::HashMap;

use clap::{Parser, ValueEnum};
use catalog_api::{
    config::AppConfig,
    db::{create_orm_conn, run_migrations},
    dto::{
        catalog::{
            CreateAttributeRequest, CreateAttributeValueRequest, CreateBrandRequest,
            CreateCategoryRequest,
        },
        products::{CreateProductImageRequest, CreateProductLineRequest, CreateProductRequest},
    },
    schema,
    services::admin_service,
    state::AppState,
};

/// Seed the catalog database for testing and development.
#[derive(Debug, Parser)]
#[command(name = "seed")]
struct Args {
    #[arg(long, value_enum, default_value_t = Mode::Refresh)]
    mode: Mode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Mode {
    /// Wipe the catalog, then insert the sample data.
    Refresh,
    /// Wipe the catalog only.
    Clear,
}

struct SeedLine {
    sku: &'static str,
    price: i64,
    stock: i32,
    values: &'static [(&'static str, &'static str)],
    images: &'static [&'static str],
}

struct SeedProduct {
    name: &'static str,
    slug: &'static str,
    description: &'static str,
    brand: &'static str,
    category: &'static str,
    product_type: &'static str,
    lines: &'static [SeedLine],
}

const CATEGORIES: &[(&str, Option<&str>)] = &[
    ("Clothing", None),
    ("Shoes", Some("Clothing")),
    ("T-Shirts", Some("Clothing")),
    ("Electronics", None),
    ("Phones", Some("Electronics")),
];

const BRANDS: &[&str] = &["Nike", "Apple", "Patagonia"];

const PRODUCT_TYPES: &[(&str, &[&str])] = &[
    ("Shoe", &["Colour", "Size"]),
    ("T-Shirt", &["Colour", "Size"]),
    ("Phone", &["Colour", "Storage"]),
];

const PRODUCTS: &[SeedProduct] = &[
    SeedProduct {
        name: "Air Runner",
        slug: "air-runner",
        description: "Lightweight running shoe",
        brand: "Nike",
        category: "Shoes",
        product_type: "Shoe",
        lines: &[
            SeedLine {
                sku: "AR-RED-42",
                price: 11999,
                stock: 25,
                values: &[("Colour", "Red"), ("Size", "42")],
                images: &["air-runner-red-side.png", "air-runner-red-top.png"],
            },
            SeedLine {
                sku: "AR-BLK-44",
                price: 11999,
                stock: 12,
                values: &[("Colour", "Black"), ("Size", "44")],
                images: &["air-runner-black-side.png"],
            },
        ],
    },
    SeedProduct {
        name: "Trail Tee",
        slug: "trail-tee",
        description: "Organic cotton t-shirt",
        brand: "Patagonia",
        category: "T-Shirts",
        product_type: "T-Shirt",
        lines: &[SeedLine {
            sku: "TT-GRN-M",
            price: 3500,
            stock: 80,
            values: &[("Colour", "Green"), ("Size", "M")],
            images: &["trail-tee-green.png"],
        }],
    },
    SeedProduct {
        name: "Handset Pro",
        slug: "handset-pro",
        description: "Flagship phone",
        brand: "Apple",
        category: "Phones",
        product_type: "Phone",
        lines: &[
            SeedLine {
                sku: "HP-SLV-128",
                price: 99900,
                stock: 40,
                values: &[("Colour", "Silver"), ("Storage", "128GB")],
                images: &["handset-pro-silver.png"],
            },
            SeedLine {
                sku: "HP-SLV-256",
                price: 109900,
                stock: 15,
                values: &[("Colour", "Silver"), ("Storage", "256GB")],
                images: &["handset-pro-silver.png"],
            },
        ],
    },
];

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let args = Args::parse();
    schema::ensure_valid()?;
    let config = AppConfig::from_env()?;

    let orm = create_orm_conn(&config.database_url).await?;
    // Ensure migrations are applied.
    run_migrations(&orm).await?;
    let state = AppState { orm };

    println!("seeding database...");
    admin_service::clear_catalog(&state).await?;
    if args.mode == Mode::Refresh {
        seed_catalog(&state).await?;
    }
    println!("Done...");
    Ok(())
}

async fn seed_catalog(state: &AppState) -> anyhow::Result<()> {
    let mut categories = HashMap::new();
    for (name, parent) in CATEGORIES {
        let parent_id = parent.and_then(|p| categories.get(p).copied());
        let category = admin_service::create_category(
            state,
            CreateCategoryRequest {
                name: name.to_string(),
                parent_id,
                is_active: true,
            },
        )
        .await?;
        categories.insert(*name, category.id);
    }
    println!("Seeded {} categories", categories.len());

    let mut brands = HashMap::new();
    for name in BRANDS {
        let brand = admin_service::create_brand(
            state,
            CreateBrandRequest {
                name: name.to_string(),
                is_active: true,
            },
        )
        .await?;
        brands.insert(*name, brand.id);
    }
    println!("Seeded {} brands", brands.len());

    let mut attributes = HashMap::new();
    let mut product_types = HashMap::new();
    for (type_name, attribute_names) in PRODUCT_TYPES {
        let product_type = admin_service::create_product_type(state, *type_name).await?;
        for attribute_name in *attribute_names {
            let attribute_id = match attributes.get(attribute_name) {
                Some(id) => *id,
                None => {
                    let attribute = admin_service::create_attribute(
                        state,
                        CreateAttributeRequest {
                            name: attribute_name.to_string(),
                            description: None,
                        },
                    )
                    .await?;
                    attributes.insert(*attribute_name, attribute.id);
                    attribute.id
                }
            };
            admin_service::add_product_type_attribute(state, product_type.id, attribute_id)
                .await?;
        }
        product_types.insert(*type_name, product_type.id);
    }

    let mut values: HashMap<(&str, &str), i32> = HashMap::new();
    for product in PRODUCTS {
        let brand_id = *brands
            .get(product.brand)
            .ok_or_else(|| anyhow::anyhow!("unknown brand {}", product.brand))?;
        let product_type_id = *product_types
            .get(product.product_type)
            .ok_or_else(|| anyhow::anyhow!("unknown product type {}", product.product_type))?;

        let created = admin_service::create_product(
            state,
            CreateProductRequest {
                name: product.name.to_string(),
                slug: product.slug.to_string(),
                description: product.description.to_string(),
                is_digital: false,
                brand_id,
                category_id: categories.get(product.category).copied(),
                is_active: true,
            },
        )
        .await?;

        for line in product.lines {
            let created_line = admin_service::create_product_line(
                state,
                CreateProductLineRequest {
                    product_id: created.id,
                    product_type_id,
                    price: line.price,
                    sku: line.sku.to_string(),
                    stock_quantity: line.stock,
                    is_active: true,
                    order: None,
                },
            )
            .await?;

            for image in line.images {
                admin_service::create_product_image(
                    state,
                    CreateProductImageRequest {
                        product_line_id: created_line.id,
                        url: format!("https://images.example.com/{image}"),
                        alternative_text: format!("{} {}", product.name, line.sku),
                        order: None,
                    },
                )
                .await?;
            }

            for (attribute_name, value) in line.values {
                let value_id = match values.get(&(*attribute_name, *value)) {
                    Some(id) => *id,
                    None => {
                        let attribute_id = *attributes.get(attribute_name).ok_or_else(|| {
                            anyhow::anyhow!("unknown attribute {attribute_name}")
                        })?;
                        let created_value = admin_service::create_attribute_value(
                            state,
                            CreateAttributeValueRequest {
                                attribute_id,
                                value: value.to_string(),
                            },
                        )
                        .await?;
                        values.insert((*attribute_name, *value), created_value.id);
                        created_value.id
                    }
                };
                admin_service::attach_attribute_value(state, created_line.id, value_id).await?;
            }
        }
        println!("Seeded product {}", product.slug);
    }

    Ok(())
}
