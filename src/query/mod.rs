//! Query Service Module
//!
//! The core component responsible for executing free-text queries against an
//! in-memory category dataset.
//!
//! ## Overview
//! This module implements the Information Retrieval (IR) pipeline of the
//! directory. A query is tokenized, expanded through the synonym lexicon, and
//! scored against every candidate resource by an ordered table of named
//! relevance rules; non-matches are filtered and the remainder is returned in
//! descending score order.
//!
//! ## Responsibilities
//! - **Tokenization**: Normalizing raw query strings into lowercase tokens.
//! - **Expansion**: Synonym and spelling-variant lookup via pluggable tables.
//! - **Ranking**: Scoring resources through the fixed rule sequence.
//! - **Highlighting**: Wrapping matched substrings for display.
//! - **API**: Exposing search via a RESTful HTTP endpoint.
//!
//! ## Submodules
//! - **`engine`**: The scoring rule table and the ranking entry point.
//! - **`handlers`**: HTTP request handlers for the Axum web server.
//! - **`highlight`**: Case-insensitive per-token match wrapping.
//! - **`lexicon`**: Synonym and spelling-variant tables.
//! - **`tokenizer`**: Query normalization utilities.
//! - **`types`**: Data Transfer Objects (DTOs) for API communication.

pub mod engine;
pub mod handlers;
pub mod highlight;
pub mod lexicon;
pub mod tokenizer;
pub mod types;
