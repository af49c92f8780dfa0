//! Key search entry points.
//!
//! # Responsibility
//! - Expose ranked substring lookup over snippet keys.
//! - Keep ranking SQL inside core.

pub mod key_search;
