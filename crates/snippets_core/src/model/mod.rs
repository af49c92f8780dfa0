//! Domain model for key/value snippets and launcher results.
//!
//! # Responsibility
//! - Define the persisted `Snippet` record and its key normalization.
//! - Define the action descriptors and display-ready results exchanged with the host.
//!
//! # Invariants
//! - A snippet is identified by its trimmed, non-empty, case-sensitive key.
//! - Results and action descriptors are ephemeral and never persisted.

pub mod action;
pub mod snippet;
