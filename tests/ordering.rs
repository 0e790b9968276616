mod common;

use catalog_api::{
    dto::products::UpdateProductLineRequest,
    entity::{ProductLines, product_lines},
    error::AppError,
    ordering::{OrderError, insert_ordered},
    services::admin_service,
};
use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder};

#[tokio::test]
async fn lines_without_order_are_numbered_from_one() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let brand = common::brand(&state, "Nike", true).await?;
    let product = common::product(&state, "air-runner", brand.id, None, true).await?;
    let shoe = admin_service::create_product_type(&state, "Shoe").await?;

    for n in 0..5 {
        common::line(&state, product.id, shoe.id, &format!("AR-{n}")).await?;
    }

    let orders: Vec<i32> = ProductLines::find()
        .filter(product_lines::Column::ProductId.eq(product.id))
        .order_by_asc(product_lines::Column::Id)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(|line| line.order)
        .collect();
    assert_eq!(orders, vec![1, 2, 3, 4, 5]);
    Ok(())
}

#[tokio::test]
async fn each_parent_has_its_own_sequence() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let brand = common::brand(&state, "Nike", true).await?;
    let first = common::product(&state, "first", brand.id, None, true).await?;
    let second = common::product(&state, "second", brand.id, None, true).await?;
    let shoe = admin_service::create_product_type(&state, "Shoe").await?;

    let a = common::line(&state, first.id, shoe.id, "A-1").await?;
    let b = common::line(&state, first.id, shoe.id, "A-2").await?;
    let c = common::line(&state, second.id, shoe.id, "B-1").await?;

    assert_eq!((a.order, b.order, c.order), (1, 2, 1));

    let image_a1 =
        admin_service::create_product_image(&state, common::image_request(a.id, "a1")).await?;
    let image_a2 =
        admin_service::create_product_image(&state, common::image_request(a.id, "a2")).await?;
    let image_b1 =
        admin_service::create_product_image(&state, common::image_request(b.id, "b1")).await?;
    assert_eq!((image_a1.order, image_a2.order, image_b1.order), (1, 2, 1));
    Ok(())
}

#[tokio::test]
async fn next_order_follows_the_highest_sibling() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let brand = common::brand(&state, "Nike", true).await?;
    let product = common::product(&state, "gap", brand.id, None, true).await?;
    let shoe = admin_service::create_product_type(&state, "Shoe").await?;

    let mut explicit = common::line_request(product.id, shoe.id, "EXPLICIT");
    explicit.order = Some(7);
    admin_service::create_product_line(&state, explicit).await?;

    let next = common::line(&state, product.id, shoe.id, "NEXT").await?;
    assert_eq!(next.order, 8);
    Ok(())
}

#[tokio::test]
async fn duplicate_order_in_same_parent_is_rejected() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let brand = common::brand(&state, "Nike", true).await?;
    let product = common::product(&state, "dup", brand.id, None, true).await?;
    let other = common::product(&state, "other", brand.id, None, true).await?;
    let shoe = admin_service::create_product_type(&state, "Shoe").await?;

    common::line(&state, product.id, shoe.id, "FIRST").await?;

    let mut duplicate = common::line_request(product.id, shoe.id, "SECOND");
    duplicate.order = Some(1);
    let err = admin_service::create_product_line(&state, duplicate)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Validation(ref msg) if msg == "Duplicate value."));

    let count = ProductLines::find()
        .filter(product_lines::Column::ProductId.eq(product.id))
        .all(&state.orm)
        .await?
        .len();
    assert_eq!(count, 1, "rejected line must not be written");

    let mut elsewhere = common::line_request(other.id, shoe.id, "ELSEWHERE");
    elsewhere.order = Some(1);
    let accepted = admin_service::create_product_line(&state, elsewhere).await?;
    assert_eq!(accepted.order, 1);
    Ok(())
}

#[tokio::test]
async fn duplicate_image_order_is_rejected() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let brand = common::brand(&state, "Nike", true).await?;
    let product = common::product(&state, "img", brand.id, None, true).await?;
    let shoe = admin_service::create_product_type(&state, "Shoe").await?;
    let line = common::line(&state, product.id, shoe.id, "IMG-1").await?;

    admin_service::create_product_image(&state, common::image_request(line.id, "front")).await?;
    let mut clash = common::image_request(line.id, "back");
    clash.order = Some(1);
    let err = admin_service::create_product_image(&state, clash)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));
    Ok(())
}

#[tokio::test]
async fn update_keeps_or_validates_order() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let brand = common::brand(&state, "Nike", true).await?;
    let product = common::product(&state, "upd", brand.id, None, true).await?;
    let shoe = admin_service::create_product_type(&state, "Shoe").await?;
    let first = common::line(&state, product.id, shoe.id, "U-1").await?;
    let second = common::line(&state, product.id, shoe.id, "U-2").await?;

    let updated = admin_service::update_product_line(
        &state,
        second.id,
        UpdateProductLineRequest {
            stock_quantity: Some(3),
            ..Default::default()
        },
    )
    .await?;
    assert_eq!(updated.order, 2);
    assert_eq!(updated.stock_quantity, 3);

    let same = admin_service::update_product_line(
        &state,
        first.id,
        UpdateProductLineRequest {
            order: Some(1),
            ..Default::default()
        },
    )
    .await?;
    assert_eq!(same.order, 1, "a row may keep its own order value");

    let err = admin_service::update_product_line(
        &state,
        second.id,
        UpdateProductLineRequest {
            order: Some(1),
            ..Default::default()
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));

    let moved = admin_service::update_product_line(
        &state,
        second.id,
        UpdateProductLineRequest {
            order: Some(5),
            ..Default::default()
        },
    )
    .await?;
    assert_eq!(moved.order, 5);

    let missing = admin_service::update_product_line(&state, 9999, Default::default())
        .await
        .unwrap_err();
    assert!(matches!(missing, AppError::NotFound));
    Ok(())
}

#[tokio::test]
async fn insert_without_scope_is_rejected() -> anyhow::Result<()> {
    let state = common::setup_state().await?;

    let orphan = product_lines::ActiveModel {
        id: NotSet,
        price: Set(100),
        sku: Set("NO-PARENT".into()),
        stock_quantity: Set(1),
        product_id: NotSet,
        product_type_id: Set(1),
        is_active: Set(true),
        order: NotSet,
    };
    let err = insert_ordered(&state.orm, orphan).await.unwrap_err();
    assert!(matches!(err, OrderError::MissingScope(ref field) if field == "product_id"));
    Ok(())
}

#[tokio::test]
async fn order_after_largest_value_is_rejected() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let brand = common::brand(&state, "Nike", true).await?;
    let product = common::product(&state, "full", brand.id, None, true).await?;
    let shoe = admin_service::create_product_type(&state, "Shoe").await?;

    let mut last = common::line_request(product.id, shoe.id, "LAST");
    last.order = Some(i32::MAX);
    let stored = admin_service::create_product_line(&state, last).await?;
    assert_eq!(stored.order, i32::MAX);

    let err = common::line(&state, product.id, shoe.id, "AFTER")
        .await
        .unwrap_err();
    assert!(matches!(err.downcast::<AppError>()?, AppError::Validation(_)));

    let orders: Vec<i32> = ProductLines::find()
        .filter(product_lines::Column::ProductId.eq(product.id))
        .all(&state.orm)
        .await?
        .into_iter()
        .map(|line| line.order)
        .collect();
    assert_eq!(orders, vec![i32::MAX]);
    Ok(())
}
