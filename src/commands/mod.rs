//! Command implementations for the CLI
//!
//! - estimate: Price one platform
//! - compare: Price the integration platforms side by side
//! - catalog: List the offered pricing tables
//! - serve: Start the HTTP estimate service
//! - config: Configuration display and validation

pub mod catalog;
pub mod compare;
pub mod config;
pub mod estimate;
pub mod serve;
