use serde::{Deserialize, Serialize};

/// One catalog entry describing an external MCP integration server.
///
/// Records are parsed from the per-category JSON files. `icon` and `created_at`
/// are optional in the backing data; everything else is required, and entries
/// missing a required field are quarantined by the loader instead of flowing
/// downstream with empty values.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Resource {
    pub id: String,
    pub name: String,
    pub description: String,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    pub category: String,
    #[serde(
        rename = "createdAt",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<String>,
}

/// Payload accepted from the submission form, before an id, timestamp, and
/// category are assigned.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewResource {
    pub name: String,
    pub description: String,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

/// One entry of the category listing endpoint.
#[derive(Debug, Serialize, Deserialize)]
pub struct CategoryInfo {
    pub id: String,
    pub name: String,
}

/// Response format for a paginated category page.
#[derive(Debug, Serialize, Deserialize)]
pub struct CategoryListing {
    pub category: String,
    pub name: String,
    pub total_count: usize,
    pub page: usize,
    pub total_pages: usize,
    pub count: usize,
    pub resources: Vec<Resource>,
}
