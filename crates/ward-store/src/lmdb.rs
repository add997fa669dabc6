//! LMDB-backed blob store.

use std::path::Path;

use heed::types::Str;
use heed::{Database, Env, EnvOpenOptions};

use crate::{BlobStore, StoreResult};

/// LMDB database holding the ward blobs under their plain string keys.
pub struct LmdbBlobs {
    env: Env,
    db: Database<Str, Str>,
}

impl LmdbBlobs {
    /// Open or create the blob database in the directory at `path`.
    ///
    /// # Safety
    /// Uses unsafe to call heed's open method which requires ensuring
    /// the environment is not opened twice in one process.
    #[allow(unsafe_code)]
    pub fn open(path: impl AsRef<Path>) -> StoreResult<Self> {
        let path = path.as_ref();
        std::fs::create_dir_all(path)?;

        // SAFETY: the ward owns its environment and opens it once at startup
        let env = unsafe {
            EnvOpenOptions::new()
                .map_size(64 * 1024 * 1024)
                .max_dbs(1)
                .open(path)?
        };

        let mut wtxn = env.write_txn()?;
        let db = env.create_database(&mut wtxn, Some("ward"))?;
        wtxn.commit()?;

        tracing::debug!("Opened ward database at {}", path.display());
        Ok(Self { env, db })
    }
}

impl BlobStore for LmdbBlobs {
    fn get_blob(&self, key: &str) -> StoreResult<Option<String>> {
        let rtxn = self.env.read_txn()?;
        let value = self.db.get(&rtxn, key)?.map(str::to_owned);
        Ok(value)
    }

    fn put_blob(&self, key: &str, value: &str) -> StoreResult<()> {
        let mut wtxn = self.env.write_txn()?;
        self.db.put(&mut wtxn, key, value)?;
        wtxn.commit()?;

        tracing::trace!("Wrote {key} ({} bytes)", value.len());
        Ok(())
    }
}
