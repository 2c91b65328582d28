//! Git working-tree queries for stevedore.
//!
//! Release tags are derived from version-control state at invocation time:
//!
//! ```text
//! clean tree ── <short-hash>            e.g. webapp:abc1234
//! dirty tree ── <short-hash>-dirty      e.g. webapp:abc1234-dirty
//! ```
//!
//! The `-dirty` suffix marks images built from uncommitted changes.

pub mod revision;

pub use revision::{git_version, is_dirty, is_inside_work_tree, GitError, Revision, DIRTY_SUFFIX};
