use axum::{Json, Router, extract::State, routing::get};

use crate::{
    dto::products::BrandList, error::AppResult, response::ApiResponse, services::brand_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new().route("/brand", get(list_brands))
}

#[utoipa::path(
    get,
    path = "/api/brand",
    responses(
        (status = 200, description = "List brands", body = ApiResponse<BrandList>)
    ),
    tag = "Brands"
)]
pub async fn list_brands(State(state): State<AppState>) -> AppResult<Json<ApiResponse<BrandList>>> {
    let resp = brand_service::list_brands(&state, false).await?;
    Ok(Json(resp))
}
