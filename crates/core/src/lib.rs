//! Domain types, the link-substitution transform, and error definitions.
//!
//! Foundation crate -- no async or I/O dependencies.

pub mod error;
pub mod processing;
pub mod types;

pub use error::{DraftlinkError, DraftlinkResult};
pub use processing::{process_article, replace_keyword};
pub use types::{ArticleId, LinkRule};
