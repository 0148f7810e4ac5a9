//! # japi-core
//!
//! Core types, errors, and configuration for JSON:API Query RS.
//!
//! This crate provides the building blocks shared by the query and CLI crates:
//! - Common error type and result alias
//! - Resource identifier type
//! - Configuration types (base URL, pagination defaults)

pub mod error;
pub mod result;
pub mod types;
pub mod config;

pub use error::*;
pub use result::*;
pub use types::*;
