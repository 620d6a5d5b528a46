use serde::{Deserialize, Serialize};

/// Response format for the search endpoint.
#[derive(Debug, Serialize, Deserialize)]
pub struct SearchResponse {
    pub query: String,
    pub total_count: usize,
    pub page: usize,
    pub total_pages: usize,
    pub count: usize,
    pub results: Vec<SearchResultItem>,
}

/// One ranked search hit.
///
/// `name` and `description` are display copies with highlight markup applied;
/// the stored resource is never mutated. The score is ephemeral and only
/// exists on search results, hence the `_score` wire name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResultItem {
    pub id: String,
    pub name: String,
    pub description: String,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    pub category: String,
    #[serde(rename = "_score")]
    pub score: u32,
}
