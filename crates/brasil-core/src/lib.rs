//! Shared plumbing for the Brazilian open-data adapters
//!
//! Every adapter turns typed parameters into exactly one GET request and
//! decodes the answer into a source-tagged envelope. This crate holds the
//! pieces they share: the error taxonomy, the source tags, paging
//! normalization, URL construction and the GET executor itself.

#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

mod client;
pub mod dates;
mod error;
pub mod ident;
pub mod paging;
mod query;
mod source;

pub use client::{DEFAULT_TIMEOUT, DEFAULT_USER_AGENT, SourceClient, SourceClientBuilder, decode};
pub use error::{Result, SourceError};
pub use paging::{PageSizeRange, Paging};
pub use query::{QueryParams, endpoint_url, non_blank};
pub use source::Source;
