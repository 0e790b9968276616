mod common;

use catalog_api::{
    dto::{catalog::CreateAttributeRequest, products::UpdateProductLineRequest},
    entity::{Brands, Categories, ProductLineAttributeValues, ProductLines, Products},
    error::AppError,
    services::{admin_service, category_service},
};
use sea_orm::{EntityTrait, PaginatorTrait};

#[tokio::test]
async fn product_requires_existing_brand() -> anyhow::Result<()> {
    let state = common::setup_state().await?;

    let err = common::product(&state, "ghost", 42, None, true)
        .await
        .unwrap_err();
    let err = err.downcast::<AppError>()?;
    assert!(matches!(err, AppError::BadRequest(ref msg) if msg == "Brand not found"));
    Ok(())
}

#[tokio::test]
async fn invalid_slug_is_rejected() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let brand = common::brand(&state, "Nike", true).await?;

    let err = common::product(&state, "has space", brand.id, None, true)
        .await
        .unwrap_err();
    assert!(matches!(err.downcast::<AppError>()?, AppError::BadRequest(_)));
    Ok(())
}

#[tokio::test]
async fn attribute_outside_product_type_is_rejected() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let brand = common::brand(&state, "Nike", true).await?;
    let product = common::product(&state, "air-runner", brand.id, None, true).await?;
    let shoe = admin_service::create_product_type(&state, "Shoe").await?;
    let phone = admin_service::create_product_type(&state, "Phone").await?;
    let line = common::line(&state, product.id, shoe.id, "AR-1").await?;

    let (_, storage) = common::attribute_value(&state, phone.id, "Storage", "128GB").await?;
    let err = admin_service::attach_attribute_value(&state, line.id, storage)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));

    let (_, colour) = common::attribute_value(&state, shoe.id, "Colour", "Red").await?;
    let first = admin_service::attach_attribute_value(&state, line.id, colour).await?;
    let again = admin_service::attach_attribute_value(&state, line.id, colour).await?;
    assert_eq!(first.id, again.id);
    assert_eq!(ProductLineAttributeValues::find().count(&state.orm).await?, 1);
    Ok(())
}

#[tokio::test]
async fn product_type_attribute_link_is_idempotent() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let shoe = admin_service::create_product_type(&state, "Shoe").await?;
    let size = admin_service::create_attribute(
        &state,
        CreateAttributeRequest {
            name: "Size".into(),
            description: Some("EU shoe size".into()),
        },
    )
    .await?;

    let first = admin_service::add_product_type_attribute(&state, shoe.id, size.id).await?;
    let again = admin_service::add_product_type_attribute(&state, shoe.id, size.id).await?;
    assert_eq!(first.id, again.id);

    let err = admin_service::add_product_type_attribute(&state, shoe.id, 999)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::BadRequest(ref msg) if msg == "Attribute not found"));
    Ok(())
}

#[tokio::test]
async fn category_parent_must_exist() -> anyhow::Result<()> {
    let state = common::setup_state().await?;

    let err = common::category(&state, "Orphan", Some(7)).await.unwrap_err();
    assert!(matches!(
        err.downcast::<AppError>()?,
        AppError::BadRequest(ref msg) if msg == "Parent category not found"
    ));

    let root = common::category(&state, "Root", None).await?;
    common::category(&state, "Leaf", Some(root.id)).await?;
    let tree = category_service::load_tree(&state.orm).await?;
    assert_eq!(tree.len(), 2);
    Ok(())
}

#[tokio::test]
async fn clear_catalog_removes_everything() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let root = common::category(&state, "Root", None).await?;
    let child = common::category(&state, "Child", Some(root.id)).await?;
    let brand = common::brand(&state, "Nike", true).await?;
    let product = common::product(&state, "air-runner", brand.id, Some(child.id), true).await?;
    let shoe = admin_service::create_product_type(&state, "Shoe").await?;
    let line = common::line(&state, product.id, shoe.id, "AR-1").await?;
    let (_, red) = common::attribute_value(&state, shoe.id, "Colour", "Red").await?;
    admin_service::attach_attribute_value(&state, line.id, red).await?;
    admin_service::create_product_image(&state, common::image_request(line.id, "side")).await?;

    admin_service::clear_catalog(&state).await?;

    assert_eq!(Products::find().count(&state.orm).await?, 0);
    assert_eq!(Categories::find().count(&state.orm).await?, 0);
    assert_eq!(Brands::find().count(&state.orm).await?, 0);
    Ok(())
}

#[tokio::test]
async fn update_rejects_negative_stock_and_price() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let brand = common::brand(&state, "Nike", true).await?;
    let product = common::product(&state, "air-runner", brand.id, None, true).await?;
    let shoe = admin_service::create_product_type(&state, "Shoe").await?;
    let line = common::line(&state, product.id, shoe.id, "AR-1").await?;

    let err = admin_service::update_product_line(
        &state,
        line.id,
        UpdateProductLineRequest {
            stock_quantity: Some(-1),
            ..Default::default()
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, AppError::BadRequest(_)));

    let err = admin_service::update_product_line(
        &state,
        line.id,
        UpdateProductLineRequest {
            price: Some(-100),
            ..Default::default()
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, AppError::BadRequest(_)));

    let stored = ProductLines::find_by_id(line.id)
        .one(&state.orm)
        .await?
        .ok_or_else(|| anyhow::anyhow!("line missing"))?;
    assert_eq!((stored.stock_quantity, stored.price), (10, 1999));
    Ok(())
}
