//! MCP surface for the Brazilian open-data adapters
//!
//! [`BrasilServer`] implements the `rmcp` server handler: it lists the tool
//! catalog, decodes tool arguments, dispatches to the adapters and exposes
//! the API reference as a resource.

#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

pub mod args;
mod docs;
mod error;
mod server;
pub mod tools;

pub use docs::{API_REFERENCE, DOCS_URI};
pub use error::ToolError;
pub use server::BrasilServer;
pub use tools::{CATALOG, Toolbox};
