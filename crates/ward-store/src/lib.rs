//! Persistent registry of protected areas.
//!
//! The registry lives in two opaque blobs behind a [`BlobStore`]:
//!
//! ```text
//! ┌──────────────────────────┬──────────────────────────────────────────┐
//! │  key                     │  value (JSON)                            │
//! ├──────────────────────────┼──────────────────────────────────────────┤
//! │  protectedAreas          │  [{ id, whitelist, from, to }, ...]      │
//! │  protectedAreasAdmins    │  ["actor", ...]                          │
//! └──────────────────────────┴──────────────────────────────────────────┘
//! ```
//!
//! Every logical mutation on [`AreaStore`] is one read of a blob, one change in
//! memory and at most one write of the same blob. The host serializes all
//! callbacks, so that pair is the unit of atomicity.
//!
//! # Usage
//!
//! ```ignore
//! use ward_store::{AreaStore, LmdbBlobs};
//!
//! let store = AreaStore::open(LmdbBlobs::open("data/ward")?)?;
//! store.register("base", (0, 0, 0).into(), (10, 10, 10).into())?;
//! store.whitelist_add("base", "eve")?;
//! ```

mod area;
mod blob;
mod error;
mod lmdb;
mod store;

pub use area::{ProtectedArea, Registry};
pub use blob::{BlobStore, MemoryBlobs};
pub use error::{StoreError, StoreResult};
pub use lmdb::LmdbBlobs;
pub use store::{ADMINS_KEY, AREAS_KEY, AreaStore};
