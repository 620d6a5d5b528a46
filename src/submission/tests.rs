//! Submission Module Tests
//!
//! Validates the intake rules and the submission/duplicate-check endpoints.
//!
//! ## Test Scopes
//! - **Validation**: Each rule produces its specific rejection reason.
//! - **Handlers**: Accepted submissions land in the pending dataset; the
//!   duplicate check sees both published and pending URLs.

#[cfg(test)]
mod tests {
    use crate::catalog::store::CatalogStore;
    use crate::catalog::types::NewResource;
    use crate::submission::handlers::{
        CheckParams, handle_check_resource_exists, handle_submit_resource,
    };
    use crate::submission::validate::{TRUSTED_URL_PREFIX, Validation, validate_submission};
    use axum::extract::Query;
    use axum::http::StatusCode;
    use axum::{Extension, Json};
    use serde_json::json;
    use std::sync::Arc;

    fn submission(url: &str, icon: Option<&str>) -> NewResource {
        NewResource {
            name: "Weather MCP Server".to_string(),
            description: "Forecast lookups for agents".to_string(),
            url: url.to_string(),
            icon: icon.map(|i| i.to_string()),
        }
    }

    // ============================================================
    // VALIDATION TESTS
    // ============================================================

    #[test]
    fn test_valid_submission_passes() {
        let outcome = validate_submission(&submission("https://github.com/example/weather", None));

        assert_eq!(outcome, Validation::ok());
    }

    #[test]
    fn test_missing_fields_rejected() {
        let mut incomplete = submission("https://github.com/example/weather", None);
        incomplete.name = String::new();

        let outcome = validate_submission(&incomplete);

        assert!(!outcome.valid);
        assert_eq!(outcome.message.as_deref(), Some("Missing required fields"));
    }

    #[test]
    fn test_untrusted_host_rejected_with_reason() {
        let outcome = validate_submission(&submission("https://example.com/x", None));

        assert!(!outcome.valid);
        let message = outcome.message.unwrap();
        assert!(
            message.contains(TRUSTED_URL_PREFIX),
            "rejection must name the allowed host: {}",
            message
        );
    }

    #[test]
    fn test_insecure_icon_rejected_with_reason() {
        let outcome = validate_submission(&submission(
            "https://github.com/example/weather",
            Some("http://evil.com/i.png"),
        ));

        assert!(!outcome.valid);
        assert_eq!(
            outcome.message.as_deref(),
            Some("Icon URL must use HTTPS protocol")
        );
    }

    #[test]
    fn test_secure_icon_accepted() {
        let outcome = validate_submission(&submission(
            "https://github.com/example/weather",
            Some("https://cdn.example.com/i.png"),
        ));

        assert!(outcome.valid);
    }

    #[test]
    fn test_empty_icon_counts_as_absent() {
        let outcome =
            validate_submission(&submission("https://github.com/example/weather", Some("")));

        assert!(outcome.valid);
    }

    // ============================================================
    // HANDLER TESTS
    // ============================================================

    #[tokio::test]
    async fn test_submit_rejection_is_structured() {
        let dir = tempfile::tempdir().unwrap();
        let store = Arc::new(CatalogStore::new(dir.path()));

        let (status, Json(response)) = handle_submit_resource(
            Extension(store),
            Json(submission("https://example.com/x", None)),
        )
        .await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(!response.valid);
        assert!(response.message.is_some());
        assert!(response.id.is_none());
    }

    #[tokio::test]
    async fn test_submit_accepted_and_visible_to_duplicate_check() {
        let dir = tempfile::tempdir().unwrap();
        let store = Arc::new(CatalogStore::new(dir.path()));
        let url = "https://github.com/example/weather";

        let (status, Json(response)) = handle_submit_resource(
            Extension(store.clone()),
            Json(submission(url, None)),
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        assert!(response.valid);
        assert!(response.id.is_some());

        let Json(check) = handle_check_resource_exists(
            Query(CheckParams {
                url: url.to_string(),
            }),
            Extension(store),
        )
        .await;

        assert!(check.exists);
    }

    #[tokio::test]
    async fn test_duplicate_check_sees_published_dataset() {
        let dir = tempfile::tempdir().unwrap();
        let entry = json!([{
            "id": "1",
            "name": "GitHub MCP Server",
            "description": "Official GitHub integration",
            "url": "https://github.com/example/github",
            "category": "official"
        }]);
        std::fs::write(dir.path().join("all.json"), entry.to_string()).unwrap();
        let store = Arc::new(CatalogStore::new(dir.path()));

        let Json(found) = handle_check_resource_exists(
            Query(CheckParams {
                url: "https://github.com/example/github".to_string(),
            }),
            Extension(store.clone()),
        )
        .await;
        let Json(missing) = handle_check_resource_exists(
            Query(CheckParams {
                url: "https://github.com/example/unknown".to_string(),
            }),
            Extension(store),
        )
        .await;

        assert!(found.exists);
        assert!(!missing.exists);
    }
}
