//! MCP Server Directory Library
//!
//! This library crate defines the core modules of the directory service.
//! It serves as the foundation for the binary executable (`main.rs`).
//!
//! ## Architecture Modules
//! The service is composed of three loosely coupled subsystems:
//!
//! - **`catalog`**: The data layer. Loads per-category resource datasets from
//!   JSON files into a process-wide memoizing cache (`CatalogStore`) and
//!   validates records at the file boundary.
//! - **`query`**: The core information retrieval logic. Contains the query
//!   tokenizer, the synonym/spelling-variant lexicon, the relevance scoring
//!   rule table, and the match highlighter.
//! - **`submission`**: The intake boundary. Validates submitted resources
//!   (required fields, trusted URL host, secure icon scheme), appends accepted
//!   entries to the pending dataset, and answers duplicate-URL checks.

pub mod catalog;
pub mod query;
pub mod submission;
