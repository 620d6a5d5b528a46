use serde::{Deserialize, Serialize};

/// Response returned to the client after a submission attempt.
///
/// Mirrors the validation outcome shape: rejections carry the specific reason,
/// acceptances carry the id assigned to the pending resource.
#[derive(Debug, Serialize, Deserialize)]
pub struct SubmitResponse {
    pub valid: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

/// Response format for the duplicate-URL check endpoint.
#[derive(Debug, Serialize, Deserialize)]
pub struct CheckExistsResponse {
    pub exists: bool,
}
