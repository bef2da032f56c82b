//! Gem version listing, archive caching and fetching
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  Registry   │────▶│  Selector   │────▶│   Fetcher   │
//! │ (versions)  │     │ (pick two)  │     │ (gem fetch) │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!                                                │
//!                                                ▼
//!                                         ┌─────────────┐
//!                                         │    Cache    │
//!                                         │ (archives)  │
//!                                         └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`cache`]: archive directory keyed by name and version
//! - [`error`]: error types for cache, registry and fetch operations
//! - [`fetcher`]: runs the fetch command on cache misses
//! - [`registry`]: Registry trait for listing versions
//! - [`registries`]: RubyGems API implementation
//! - [`selector`]: two-version selection
//! - [`types`]: shared value types
//! - [`version`]: RubyGems version ordering

pub mod cache;
pub mod error;
pub mod fetcher;
pub mod registries;
pub mod registry;
pub mod selector;
pub mod types;
pub mod version;
