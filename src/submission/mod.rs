//! Submission Module
//!
//! The intake boundary for user-submitted resources.
//!
//! ## Workflow
//! 1. **Validate**: required fields, the trusted GitHub URL prefix, and the
//!    secure icon scheme. Violations produce a structured `{valid, message}`
//!    outcome with a specific reason per rule, never an error.
//! 2. **Persist**: accepted submissions are appended to the pending `new-url`
//!    dataset via the catalog store, which evicts its cache entry.
//! 3. **Duplicate check**: a separate endpoint answers whether a URL is
//!    already present in the catalog; validation itself does not enforce
//!    non-duplication.
//!
//! ## Submodules
//! - **`handlers`**: HTTP request handlers for the Axum web server.
//! - **`types`**: Data Transfer Objects (DTOs) for API communication.
//! - **`validate`**: The submission validation rules.

pub mod handlers;
pub mod types;
pub mod validate;

#[cfg(test)]
mod tests;
