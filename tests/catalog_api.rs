mod common;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use catalog_api::{routes::create_app, services::admin_service, state::AppState};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

async fn get(app: &Router, uri: &str) -> anyhow::Result<(StatusCode, Value)> {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty())?)
        .await?;
    let status = response.status();
    let bytes = response.into_body().collect().await?.to_bytes();
    Ok((status, serde_json::from_slice(&bytes)?))
}

/// Two brands, a small category tree, one active product with a line,
/// images and two attribute values, plus one inactive product.
async fn seeded() -> anyhow::Result<(AppState, Router)> {
    let state = common::setup_state().await?;

    let clothing = common::category(&state, "Clothing", None).await?;
    let shoes = common::category(&state, "Shoes", Some(clothing.id)).await?;
    common::category(&state, "Boots", Some(shoes.id)).await?;
    common::category(&state, "Accessories", Some(clothing.id)).await?;
    common::category(&state, "Books", None).await?;

    let nike = common::brand(&state, "Nike", true).await?;
    common::brand(&state, "Retired", false).await?;

    let shoe = admin_service::create_product_type(&state, "Shoe").await?;
    let (_, red) = common::attribute_value(&state, shoe.id, "Colour", "Red").await?;
    let (_, size) = common::attribute_value(&state, shoe.id, "Size", "42").await?;

    let runner = common::product(&state, "air-runner", nike.id, Some(shoes.id), true).await?;
    let line = common::line(&state, runner.id, shoe.id, "AR-RED-42").await?;
    admin_service::attach_attribute_value(&state, line.id, red).await?;
    admin_service::attach_attribute_value(&state, line.id, size).await?;
    admin_service::create_product_image(&state, common::image_request(line.id, "side")).await?;
    admin_service::create_product_image(&state, common::image_request(line.id, "top")).await?;

    common::product(&state, "old-runner", nike.id, Some(shoes.id), false).await?;

    let app = create_app(state.clone(), 16);
    Ok((state, app))
}

#[tokio::test]
async fn categories_are_listed_in_tree_order() -> anyhow::Result<()> {
    let (_, app) = seeded().await?;

    let (status, body) = get(&app, "/api/category/").await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["data"],
        json!([
            { "category": "Books" },
            { "category": "Clothing" },
            { "category": "Accessories" },
            { "category": "Shoes" },
            { "category": "Boots" },
        ])
    );
    assert_eq!(body["meta"]["total"], 5);
    Ok(())
}

#[tokio::test]
async fn brands_are_listed_without_ids() -> anyhow::Result<()> {
    let (_, app) = seeded().await?;

    let (status, body) = get(&app, "/api/brand").await?;
    assert_eq!(status, StatusCode::OK);
    let brands = body["data"].as_array().cloned().unwrap_or_default();
    assert_eq!(brands.len(), 2);
    for brand in &brands {
        assert!(brand.get("id").is_none());
    }
    assert_eq!(
        brands[0],
        json!({ "brand": "Nike", "name": "Nike", "is_active": true })
    );
    assert_eq!(brands[1]["is_active"], false);
    Ok(())
}

#[tokio::test]
async fn product_list_nests_lines_images_and_specification() -> anyhow::Result<()> {
    let (_, app) = seeded().await?;

    let (status, body) = get(&app, "/api/product").await?;
    assert_eq!(status, StatusCode::OK);

    let products = body["data"].as_array().cloned().unwrap_or_default();
    assert_eq!(products.len(), 1, "inactive products are hidden");

    let product = &products[0];
    assert_eq!(product["slug"], "air-runner");
    assert_eq!(product["brand"], "Nike");
    assert_eq!(product["category"], "Shoes");

    let line = &product["product_line"][0];
    assert_eq!(line["sku"], "AR-RED-42");
    assert_eq!(line["order"], 1);
    assert_eq!(line["product_type"], "Shoe");
    assert_eq!(line["specification"], json!({ "1": "Red", "2": "42" }));

    let images = line["product_image"].as_array().cloned().unwrap_or_default();
    assert_eq!(images.len(), 2);
    assert_eq!(images[0]["alternative_text"], "side");
    assert_eq!(images[0]["order"], 1);
    assert_eq!(images[1]["order"], 2);
    Ok(())
}

#[tokio::test]
async fn product_detail_by_slug() -> anyhow::Result<()> {
    let (_, app) = seeded().await?;

    let (status, body) = get(&app, "/api/product/air-runner").await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["slug"], "air-runner");
    assert!(body["data"]["product_line"].is_array());

    let (status, _) = get(&app, "/api/product/old-runner").await?;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = get(&app, "/api/product/missing").await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Not Found");
    Ok(())
}

#[tokio::test]
async fn products_filter_by_exact_category_and_brand() -> anyhow::Result<()> {
    let (_, app) = seeded().await?;

    let (status, body) = get(&app, "/api/product/category/Shoes/all").await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().map(Vec::len), Some(1));

    let (_, body) = get(&app, "/api/product/category/shoes/all").await?;
    assert_eq!(body["data"], json!([]), "category names are case-sensitive");

    let (_, body) = get(&app, "/api/product/category/Clothing/all").await?;
    assert_eq!(body["data"], json!([]), "parent categories do not include children");

    let (status, body) = get(&app, "/api/product/brand/Nike/all").await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"][0]["slug"], "air-runner");

    let (_, body) = get(&app, "/api/product/brand/NIKE/all").await?;
    assert_eq!(body["data"], json!([]));
    Ok(())
}

#[tokio::test]
async fn unknown_route_returns_not_found_envelope() -> anyhow::Result<()> {
    let (_, app) = seeded().await?;

    let (status, body) = get(&app, "/api/nope").await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Not Found");
    assert_eq!(body["data"]["path"], "/api/nope");
    Ok(())
}

#[tokio::test]
async fn health_reports_database() -> anyhow::Result<()> {
    let (_, app) = seeded().await?;

    let (status, body) = get(&app, "/health").await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["database"], "up");
    Ok(())
}

#[tokio::test]
async fn inactive_lines_of_active_products_are_listed() -> anyhow::Result<()> {
    let (state, app) = seeded().await?;
    let brand = common::brand(&state, "Nike Trail", true).await?;
    let shoe = admin_service::create_product_type(&state, "Trail Shoe").await?;
    let trail = common::product(&state, "trail-runner", brand.id, None, true).await?;

    common::line(&state, trail.id, shoe.id, "TR-ON").await?;
    let mut off = common::line_request(trail.id, shoe.id, "TR-OFF");
    off.is_active = false;
    admin_service::create_product_line(&state, off).await?;

    let (status, body) = get(&app, "/api/product/trail-runner").await?;
    assert_eq!(status, StatusCode::OK);
    let lines = body["data"]["product_line"]
        .as_array()
        .cloned()
        .unwrap_or_default();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0]["sku"], "TR-ON");
    assert_eq!(lines[1]["sku"], "TR-OFF");
    assert!(lines[1].get("is_active").is_none());

    let (_, body) = get(&app, "/api/product").await?;
    let listed = body["data"]
        .as_array()
        .and_then(|items| items.iter().find(|p| p["slug"] == "trail-runner"))
        .map(|p| p["product_line"].as_array().map(Vec::len));
    assert_eq!(listed, Some(Some(2)));
    Ok(())
}
