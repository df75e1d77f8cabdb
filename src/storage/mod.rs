//! Persistent Store
//!
//! Browser-local persistence for the dashboard:
//!
//! - **types**: persisted data structures (Session, IdeaRecord, LikeState)
//! - **backend**: key-value backends (localStorage, in-memory for tests)
//! - **store**: typed load/save accessors over a backend
//! - **error**: error types
//!
//! There is no schema versioning: a field added to a record later simply
//! deserializes as its default on old data.

pub mod backend;
pub mod error;
pub mod store;
pub mod types;

pub use backend::{KeyValueBackend, LocalStorageBackend};
pub use error::StoreError;
pub use store::CommunityStore;
pub use types::{IdeaRecord, LikeState, Session};
