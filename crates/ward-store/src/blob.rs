//! The persistence seam: a string-keyed store of opaque string blobs.

use hashbrown::HashMap;
use parking_lot::Mutex;

use crate::StoreResult;

/// External key-value persistence.
///
/// Values are read and rewritten wholesale; there is no partial update.
pub trait BlobStore {
    fn get_blob(&self, key: &str) -> StoreResult<Option<String>>;

    fn put_blob(&self, key: &str, value: &str) -> StoreResult<()>;
}

impl<T: BlobStore + ?Sized> BlobStore for &T {
    fn get_blob(&self, key: &str) -> StoreResult<Option<String>> {
        (**self).get_blob(key)
    }

    fn put_blob(&self, key: &str, value: &str) -> StoreResult<()> {
        (**self).put_blob(key, value)
    }
}

/// In-memory blobs, for tests and hosts without durable storage.
#[derive(Default)]
pub struct MemoryBlobs {
    inner: Mutex<MemoryInner>,
}

#[derive(Default)]
struct MemoryInner {
    blobs: HashMap<String, String>,
    writes: usize,
}

impl MemoryBlobs {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of `put_blob` calls so far.
    pub fn write_count(&self) -> usize {
        self.inner.lock().writes
    }
}

impl BlobStore for MemoryBlobs {
    fn get_blob(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.inner.lock().blobs.get(key).cloned())
    }

    fn put_blob(&self, key: &str, value: &str) -> StoreResult<()> {
        let mut inner = self.inner.lock();
        inner.blobs.insert(key.to_owned(), value.to_owned());
        inner.writes += 1;
        Ok(())
    }
}
