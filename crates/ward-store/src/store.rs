//! The area registry and admin set.

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{info, warn};
use ward_geometry::BlockPos;

use crate::{BlobStore, ProtectedArea, Registry, StoreError, StoreResult};

/// Blob key holding every registered area.
pub const AREAS_KEY: &str = "protectedAreas";

/// Blob key holding the global admin list.
pub const ADMINS_KEY: &str = "protectedAreasAdmins";

/// Registry of protected areas and global admins on top of a [`BlobStore`].
///
/// Construct it once at startup and lend it to whoever evaluates permissions.
/// Readers always see the persisted state; nothing is cached here.
pub struct AreaStore<B> {
    blobs: B,
}

impl<B: BlobStore> AreaStore<B> {
    /// Wrap `blobs`, seeding both blobs with an empty list when absent.
    pub fn open(blobs: B) -> StoreResult<Self> {
        for key in [AREAS_KEY, ADMINS_KEY] {
            if blobs.get_blob(key)?.is_none() {
                blobs.put_blob(key, "[]")?;
            }
        }
        Ok(Self { blobs })
    }

    pub fn blobs(&self) -> &B {
        &self.blobs
    }

    fn load<T: DeserializeOwned + Default>(&self, key: &str) -> StoreResult<T> {
        let Some(raw) = self.blobs.get_blob(key)? else {
            return Ok(T::default());
        };
        serde_json::from_str(&raw).map_err(|source| StoreError::Corrupt {
            key: key.to_owned(),
            source,
        })
    }

    fn save<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> StoreResult<()> {
        let raw = serde_json::to_string(value)?;
        self.blobs.put_blob(key, &raw)
    }

    fn load_areas(&self) -> StoreResult<Vec<ProtectedArea>> {
        self.load(AREAS_KEY)
    }

    fn save_areas(&self, areas: &[ProtectedArea]) -> StoreResult<()> {
        self.save(AREAS_KEY, areas)
    }

    fn load_admins(&self) -> StoreResult<Vec<String>> {
        self.load(ADMINS_KEY)
    }

    fn save_admins(&self, admins: &[String]) -> StoreResult<()> {
        self.save(ADMINS_KEY, admins)
    }

    // --- reads ---

    /// Every area in registration order.
    pub fn list(&self) -> StoreResult<Vec<ProtectedArea>> {
        self.load_areas()
    }

    pub fn get(&self, id: &str) -> StoreResult<Option<ProtectedArea>> {
        Ok(self.load_areas()?.into_iter().find(|area| area.id == id))
    }

    pub fn whitelist(&self, id: &str) -> StoreResult<Option<Vec<String>>> {
        Ok(self.get(id)?.map(|area| area.whitelist))
    }

    pub fn list_admins(&self) -> StoreResult<Vec<String>> {
        self.load_admins()
    }

    /// Fresh read of both blobs.
    pub fn snapshot(&self) -> StoreResult<Registry> {
        Ok(Registry {
            areas: self.load_areas()?,
            admins: self.load_admins()?,
        })
    }

    // --- areas ---

    /// Register a new area with an empty whitelist.
    ///
    /// Fails with [`StoreError::DuplicateId`] when `id` is taken, and with
    /// [`StoreError::Overlap`] when the box touches or overlaps any existing
    /// area's box.
    pub fn register(&self, id: &str, from: BlockPos, to: BlockPos) -> StoreResult<()> {
        let result = self.try_register(id, from, to);
        if let Err(e) = &result {
            warn!("Rejected area {id}: {e}");
        }
        result
    }

    fn try_register(&self, id: &str, from: BlockPos, to: BlockPos) -> StoreResult<()> {
        validate_name("area id", id)?;

        let mut areas = self.load_areas()?;
        if areas.iter().any(|area| area.id == id) {
            return Err(StoreError::DuplicateId(id.to_owned()));
        }

        let area = ProtectedArea::new(id, from, to);
        let cuboid = area.cuboid();
        if let Some(existing) = areas.iter().find(|a| a.cuboid().intersects(&cuboid)) {
            return Err(StoreError::Overlap {
                id: id.to_owned(),
                existing: existing.id.clone(),
            });
        }

        areas.push(area);
        self.save_areas(&areas)?;

        info!("{id} added to protected areas ({cuboid:?})");
        Ok(())
    }

    /// Remove one area. Returns `false` if it did not exist.
    pub fn delete(&self, id: &str) -> StoreResult<bool> {
        let mut areas = self.load_areas()?;
        let Some(index) = areas.iter().position(|area| area.id == id) else {
            return Ok(false);
        };

        areas.remove(index);
        self.save_areas(&areas)?;

        info!("{id} deleted from protected areas");
        Ok(true)
    }

    /// Remove every area, returning how many there were.
    pub fn delete_all(&self) -> StoreResult<usize> {
        let removed = self.load_areas()?.len();
        self.save_areas(&[])?;

        info!("All {removed} protected areas deleted");
        Ok(removed)
    }

    /// Load, apply `change` to area `id`, and write back only if it reports a change.
    fn update_area(
        &self,
        id: &str,
        change: impl FnOnce(&mut ProtectedArea) -> bool,
    ) -> StoreResult<bool> {
        let mut areas = self.load_areas()?;
        let Some(area) = areas.iter_mut().find(|area| area.id == id) else {
            return Ok(false);
        };

        if !change(area) {
            return Ok(false);
        }
        self.save_areas(&areas)?;
        Ok(true)
    }

    // --- whitelists ---

    /// Allow `actor` inside area `id`. Idempotent.
    pub fn whitelist_add(&self, id: &str, actor: &str) -> StoreResult<bool> {
        validate_name("actor", actor)?;

        let changed = self.update_area(id, |area| {
            if area.is_whitelisted(actor) {
                return false;
            }
            area.whitelist.push(actor.to_owned());
            true
        })?;

        if changed {
            info!("{actor} added to {id} whitelist");
        }
        Ok(changed)
    }

    pub fn whitelist_remove(&self, id: &str, actor: &str) -> StoreResult<bool> {
        let changed = self.update_area(id, |area| {
            let Some(index) = area.whitelist.iter().position(|name| name == actor) else {
                return false;
            };
            area.whitelist.remove(index);
            true
        })?;

        if changed {
            info!("{actor} removed from {id} whitelist");
        }
        Ok(changed)
    }

    pub fn clear_whitelist(&self, id: &str) -> StoreResult<bool> {
        let changed = self.update_area(id, |area| {
            if area.whitelist.is_empty() {
                return false;
            }
            area.whitelist.clear();
            true
        })?;

        if changed {
            info!("{id} whitelist cleared");
        }
        Ok(changed)
    }

    // --- admins ---

    /// Grant `actor` a bypass of every area. Idempotent.
    pub fn admin_add(&self, actor: &str) -> StoreResult<bool> {
        validate_name("actor", actor)?;

        let mut admins = self.load_admins()?;
        if admins.iter().any(|admin| admin == actor) {
            return Ok(false);
        }

        admins.push(actor.to_owned());
        self.save_admins(&admins)?;

        info!("{actor} added to the admins list");
        Ok(true)
    }

    pub fn admin_remove(&self, actor: &str) -> StoreResult<bool> {
        let mut admins = self.load_admins()?;
        let Some(index) = admins.iter().position(|admin| admin == actor) else {
            return Ok(false);
        };

        admins.remove(index);
        self.save_admins(&admins)?;

        info!("{actor} removed from the admins list");
        Ok(true)
    }

    /// Drop every admin, returning how many there were.
    pub fn admin_clear(&self) -> StoreResult<usize> {
        let removed = self.load_admins()?.len();
        self.save_admins(&[])?;

        info!("Admins list cleared ({removed} removed)");
        Ok(removed)
    }
}

fn validate_name(what: &str, value: &str) -> StoreResult<()> {
    if value.trim().is_empty() {
        return Err(StoreError::InvalidInput(format!("{what} must not be empty")));
    }
    Ok(())
}
