//! In-memory hierarchical namespace rooted at `/`.
//!
//! The tree is a map-of-maps of [`Node`]s addressed by rooted,
//! slash-separated paths. Four operations are exposed: `mkdir`,
//! `write_file`, `read_file` and `ls`. Every operation validates the whole
//! path before touching the tree, so a failed call never leaves a partial
//! mutation behind.

mod node;
mod path;
mod shared;
mod store;

pub use path::InvalidPathError;
pub use shared::SharedStore;
pub use store::{Store, StoreError};
