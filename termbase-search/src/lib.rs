//! Full-text label search for termbase.
//!
//! This crate provides the search backend abstraction and two
//! implementations:
//!
//! - [`LabelScanBackend`]: the native mechanism - scans label literals in a
//!   `GraphStore` and scores by matched query tokens (trailing `*` = prefix
//!   match)
//! - [`PrefixExpandingBackend`]: decorator that rewrites a query so its last
//!   token also matches by prefix (search-as-you-type), leaving queries that
//!   already end in `*` untouched
//!
//! # Example
//!
//! ```ignore
//! use termbase_search::{LabelScanBackend, PrefixExpandingBackend, SearchBackend};
//!
//! let backend = PrefixExpandingBackend::new(LabelScanBackend::new(store));
//! let hits = backend.search("budg", 20).await?;
//! ```

pub mod backend;
pub mod error;
mod hit;
mod wildcard;

pub use backend::{LabelScanBackend, SearchBackend};
pub use error::{Result, SearchError};
pub use hit::SearchHit;
pub use wildcard::{expand_last_token, PrefixExpandingBackend, WILDCARD};
