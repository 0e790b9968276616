use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder};

use crate::{
    dto::products::BrandList,
    entity::{Brands, brands},
    error::AppResult,
    response::{ApiResponse, Meta},
    serializers::brand_from_entity,
    state::AppState,
};

pub async fn find_brands<C: ConnectionTrait>(
    db: &C,
    active_only: bool,
) -> Result<Vec<brands::Model>, DbErr> {
    let mut finder = Brands::find();
    if active_only {
        finder = finder.filter(brands::Column::IsActive.eq(true));
    }
    finder.order_by_asc(brands::Column::Id).all(db).await
}

pub async fn list_brands(state: &AppState, active_only: bool) -> AppResult<ApiResponse<BrandList>> {
    let items: Vec<_> = find_brands(&state.orm, active_only)
        .await?
        .into_iter()
        .map(brand_from_entity)
        .collect();

    let meta = Meta::total(items.len());
    Ok(ApiResponse::success("Brands", BrandList { items }, Some(meta)))
}
