//! Catalog Module
//!
//! The data layer of the directory. One JSON file per category identifier holds
//! an ordered sequence of resource records; this module reads those files into
//! memory and memoizes them for the lifetime of the process.
//!
//! ## Responsibilities
//! - **Loading**: `CatalogStore` resolves a category identifier to its backing
//!   file, parses it, and caches the result. Missing or malformed files degrade
//!   to an empty dataset, never to an error.
//! - **Validation**: records are checked at the file boundary; entries missing
//!   required fields are quarantined with a logged warning.
//! - **Intake**: accepted submissions are appended to the `new-url` dataset and
//!   its cache entry is evicted so the next read observes the update.
//! - **API**: paginated category listings via RESTful HTTP endpoints.
//!
//! ## Submodules
//! - **`category`**: The closed category identifier set and display names.
//! - **`handlers`**: HTTP request handlers for the Axum web server.
//! - **`store`**: The memoizing loader and the pending-dataset writer.
//! - **`types`**: Resource records and API Data Transfer Objects (DTOs).

pub mod category;
pub mod handlers;
pub mod store;
pub mod types;
