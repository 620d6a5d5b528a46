use super::engine::search;
use super::highlight::highlight;
use super::lexicon::Lexicon;
use super::types::{SearchResponse, SearchResultItem};
use crate::catalog::category::CATEGORY_ALL;
use crate::catalog::handlers::DEFAULT_PAGE_SIZE;
use crate::catalog::store::CatalogStore;

use axum::extract::Query;
use axum::{Extension, Json};
use serde::Deserialize;
use std::sync::Arc;

#[derive(Deserialize)]
pub struct SearchParams {
    pub q: String,
    pub page: Option<usize>,
    pub per_page: Option<usize>,
}

pub async fn handle_search(
    Query(params): Query<SearchParams>,
    Extension(store): Extension<Arc<CatalogStore>>,
    Extension(lexicon): Extension<Arc<Lexicon>>,
) -> Json<SearchResponse> {
    let resources = store.load(CATEGORY_ALL).await;
    let ranked = search(&resources, &params.q, &lexicon.synonyms, &lexicon.variants);

    let total_count = ranked.len();
    let per_page = params.per_page.unwrap_or(DEFAULT_PAGE_SIZE).max(1);
    let page = params.page.unwrap_or(1).max(1);
    let total_pages = total_count.div_ceil(per_page);

    let offset = (page - 1) * per_page;
    let results: Vec<SearchResultItem> = ranked
        .into_iter()
        .skip(offset)
        .take(per_page)
        .map(|(resource, score)| SearchResultItem {
            id: resource.id,
            name: highlight(&resource.name, &params.q),
            description: highlight(&resource.description, &params.q),
            url: resource.url,
            icon: resource.icon,
            category: resource.category,
            score,
        })
        .collect();

    Json(SearchResponse {
        query: params.q,
        total_count,
        page,
        total_pages,
        count: results.len(),
        results,
    })
}
