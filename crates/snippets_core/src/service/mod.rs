//! Core use-case services.
//!
//! # Responsibility
//! - Turn raw launcher queries into display-ready results.
//! - Execute the action behind a selected result.
//! - Keep host layers decoupled from storage and clipboard details.

pub mod action_executor;
pub mod preview;
pub mod query_resolver;
