//! Axis-aligned block volumes.

use hashbrown::HashSet;

use crate::BlockPos;

/// A closed axis-aligned volume of blocks.
///
/// `min` holds the left/bottom/back bounds and `max` the right/top/front
/// bounds. Never persisted; rebuild it from the stored corners.
#[derive(Copy, Clone, Hash, Eq, PartialEq, Debug)]
pub struct Cuboid {
    pub min: BlockPos,
    pub max: BlockPos,
}

impl Cuboid {
    /// Normalize two opposite corners, given in any order.
    #[must_use]
    pub fn from_corners(a: BlockPos, b: BlockPos) -> Self {
        Self {
            min: BlockPos::new(a.x.min(b.x), a.y.min(b.y), a.z.min(b.z)),
            max: BlockPos::new(a.x.max(b.x), a.y.max(b.y), a.z.max(b.z)),
        }
    }

    pub const fn contains(&self, pos: BlockPos) -> bool {
        pos.x >= self.min.x
            && pos.x <= self.max.x
            && pos.y >= self.min.y
            && pos.y <= self.max.y
            && pos.z >= self.min.z
            && pos.z <= self.max.z
    }

    /// True unless the two volumes are strictly separated on some axis.
    ///
    /// Volumes that only touch on a face, edge or corner share those blocks
    /// and therefore intersect.
    pub const fn intersects(&self, other: &Self) -> bool {
        !(self.max.x < other.min.x
            || self.min.x > other.max.x
            || self.max.y < other.min.y
            || self.min.y > other.max.y
            || self.max.z < other.min.z
            || self.min.z > other.max.z)
    }

    /// Number of blocks along each axis.
    pub fn dimensions(&self) -> (u64, u64, u64) {
        (
            span(self.min.x, self.max.x),
            span(self.min.y, self.max.y),
            span(self.min.z, self.max.z),
        )
    }

    /// Block count, saturating at `u64::MAX`.
    pub fn volume(&self) -> u64 {
        let (w, h, d) = self.dimensions();
        saturate(u128::from(w) * u128::from(h) * u128::from(d))
    }

    /// Number of distinct points [`Self::enumerate_faces`] would produce,
    /// computed without materializing them. Saturates at `u64::MAX`.
    pub fn surface_len(&self) -> u64 {
        let (w, h, d) = self.dimensions();
        let (w, h, d) = (u128::from(w), u128::from(h), u128::from(d));
        let interior = w.saturating_sub(2) * h.saturating_sub(2) * d.saturating_sub(2);
        saturate(w * h * d - interior)
    }

    /// Every lattice point on the six faces, each exactly once.
    ///
    /// Edges and corners belong to several faces; only their first occurrence
    /// is kept. Cost is proportional to [`Self::surface_len`], so callers must
    /// bound the box size first.
    pub fn enumerate_faces(&self) -> Vec<BlockPos> {
        let Self { min, max } = *self;
        let mut seen = HashSet::with_capacity(self.prealloc_len());
        let mut points = Vec::with_capacity(seen.capacity());
        let mut push = |pos: BlockPos| {
            if seen.insert(pos) {
                points.push(pos);
            }
        };

        for x in [min.x, max.x] {
            for y in min.y..=max.y {
                for z in min.z..=max.z {
                    push(BlockPos::new(x, y, z));
                }
            }
        }
        for y in [min.y, max.y] {
            for x in min.x..=max.x {
                for z in min.z..=max.z {
                    push(BlockPos::new(x, y, z));
                }
            }
        }
        for z in [min.z, max.z] {
            for x in min.x..=max.x {
                for y in min.y..=max.y {
                    push(BlockPos::new(x, y, z));
                }
            }
        }

        points
    }
}

impl Cuboid {
    /// Up-front allocation for [`Self::enumerate_faces`]; larger surfaces grow on demand.
    fn prealloc_len(&self) -> usize {
        usize::try_from(self.surface_len().min(PREALLOC_LIMIT)).unwrap_or(0)
    }
}

const PREALLOC_LIMIT: u64 = 1 << 16;

fn saturate(n: u128) -> u64 {
    u64::try_from(n).unwrap_or(u64::MAX)
}

fn span(lo: i32, hi: i32) -> u64 {
    (i64::from(hi) - i64::from(lo) + 1) as u64
}
