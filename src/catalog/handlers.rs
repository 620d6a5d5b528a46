use super::category::{browseable_categories, display_name};
use super::store::CatalogStore;
use super::types::{CategoryInfo, CategoryListing};

use axum::extract::{Path, Query};
use axum::{Extension, Json};
use serde::Deserialize;
use std::sync::Arc;

/// Items per listing page, matching the directory's card grid.
pub const DEFAULT_PAGE_SIZE: usize = 28;

#[derive(Deserialize)]
pub struct ListParams {
    pub page: Option<usize>,
    pub per_page: Option<usize>,
}

pub async fn handle_list_categories() -> Json<Vec<CategoryInfo>> {
    let categories = browseable_categories()
        .into_iter()
        .map(|id| CategoryInfo {
            id: id.to_string(),
            name: display_name(id),
        })
        .collect();

    Json(categories)
}

pub async fn handle_get_category(
    Path(category): Path<String>,
    Query(params): Query<ListParams>,
    Extension(store): Extension<Arc<CatalogStore>>,
) -> Json<CategoryListing> {
    let resources = store.load(&category).await;

    let total_count = resources.len();
    let per_page = params.per_page.unwrap_or(DEFAULT_PAGE_SIZE).max(1);
    let page = params.page.unwrap_or(1).max(1);
    let total_pages = total_count.div_ceil(per_page);

    let offset = (page - 1) * per_page;
    let page_items: Vec<_> = resources
        .iter()
        .skip(offset)
        .take(per_page)
        .cloned()
        .collect();

    Json(CategoryListing {
        name: display_name(&category),
        category,
        total_count,
        page,
        total_pages,
        count: page_items.len(),
        resources: page_items,
    })
}
