use crate::catalog::types::NewResource;
use serde::{Deserialize, Serialize};

/// Only resources hosted under this prefix are accepted.
pub const TRUSTED_URL_PREFIX: &str = "https://github.com/";
/// Icons must use secure transport.
pub const SECURE_ICON_PREFIX: &str = "https://";

/// Outcome of validating a submitted resource.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Validation {
    pub valid: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl Validation {
    pub fn ok() -> Self {
        Self {
            valid: true,
            message: None,
        }
    }

    pub fn rejected(message: impl Into<String>) -> Self {
        Self {
            valid: false,
            message: Some(message.into()),
        }
    }
}

/// Checks a submission against the intake rules, returning the first
/// violation's reason.
///
/// An empty icon string counts as absent, matching what the submission form
/// sends for the optional field.
pub fn validate_submission(submission: &NewResource) -> Validation {
    if submission.name.is_empty() || submission.description.is_empty() || submission.url.is_empty()
    {
        return Validation::rejected("Missing required fields");
    }

    if !submission.url.starts_with(TRUSTED_URL_PREFIX) {
        return Validation::rejected(format!(
            "Only GitHub resources are allowed ({})",
            TRUSTED_URL_PREFIX
        ));
    }

    if let Some(icon) = submission.icon.as_deref() {
        if !icon.is_empty() && !icon.starts_with(SECURE_ICON_PREFIX) {
            return Validation::rejected("Icon URL must use HTTPS protocol");
        }
    }

    Validation::ok()
}
