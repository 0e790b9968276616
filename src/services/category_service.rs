use sea_orm::{ConnectionTrait, EntityTrait, QueryOrder};

use crate::{
    dto::products::CategoryList,
    entity::{Categories, categories},
    error::AppResult,
    response::{ApiResponse, Meta},
    serializers::category_from_node,
    state::AppState,
    tree::CategoryTree,
};

/// Loads every category into a [`CategoryTree`].
///
/// The tree is always built from all rows so that an inactive parent does
/// not orphan its children; callers filter nodes afterwards.
pub async fn load_tree<C: ConnectionTrait>(db: &C) -> AppResult<CategoryTree> {
    let rows = Categories::find()
        .order_by_asc(categories::Column::Id)
        .all(db)
        .await?;
    Ok(CategoryTree::build(rows)?)
}

pub async fn list_categories(
    state: &AppState,
    active_only: bool,
) -> AppResult<ApiResponse<CategoryList>> {
    let tree = load_tree(&state.orm).await?;
    let items: Vec<_> = tree
        .preorder()
        .into_iter()
        .filter(|node| !active_only || node.is_active)
        .map(category_from_node)
        .collect();

    let meta = Meta::total(items.len());
    Ok(ApiResponse::success(
        "Categories",
        CategoryList { items },
        Some(meta),
    ))
}
