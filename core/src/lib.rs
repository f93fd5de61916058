//! # folio Core
//!
//! Core library for folio - a personal portfolio site for your terminal.
//!
//! This library provides the route table, the navigation state, and the
//! static site content. The terminal UI lives in the `folio-cli` crate;
//! everything here is framework-free and synchronous.

// Core modules
pub mod content;
pub mod route;
pub mod router;

// Re-export commonly used types
pub use route::{resolve, routes, Page, Route};
pub use router::{Router, RouterError, RouterResult};

/// Current version of the folio-core library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
