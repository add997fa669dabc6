use serde::{Deserialize, Serialize};

/// Integer block coordinate in the world.
#[derive(Copy, Clone, Hash, Eq, PartialEq, Ord, PartialOrd, Debug, Default, Serialize, Deserialize)]
pub struct BlockPos {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl BlockPos {
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Shift by the given deltas, saturating at the `i32` range.
    pub const fn offset(self, dx: i32, dy: i32, dz: i32) -> Self {
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
            z: self.z.saturating_add(dz),
        }
    }

    /// The block sharing `face` with this one. Saturates at the `i32` range.
    pub const fn neighbor(self, face: Face) -> Self {
        let (dx, dy, dz) = face.normal();
        self.offset(dx, dy, dz)
    }
}

impl From<(i32, i32, i32)> for BlockPos {
    fn from((x, y, z): (i32, i32, i32)) -> Self {
        Self::new(x, y, z)
    }
}

/// One of the six faces of a block.
///
/// North is -z and east is +x.
#[derive(Copy, Clone, Hash, Eq, PartialEq, Debug, Serialize, Deserialize)]
pub enum Face {
    Up,
    Down,
    North,
    South,
    East,
    West,
}

impl Face {
    pub const ALL: [Self; 6] = [
        Self::Up,
        Self::Down,
        Self::North,
        Self::South,
        Self::East,
        Self::West,
    ];

    /// Unit outward normal of this face.
    pub const fn normal(self) -> (i32, i32, i32) {
        match self {
            Self::Up => (0, 1, 0),
            Self::Down => (0, -1, 0),
            Self::North => (0, 0, -1),
            Self::South => (0, 0, 1),
            Self::East => (1, 0, 0),
            Self::West => (-1, 0, 0),
        }
    }

    pub const fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::North => Self::South,
            Self::South => Self::North,
            Self::East => Self::West,
            Self::West => Self::East,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neighbor_follows_face_normal() {
        let origin = BlockPos::new(0, 64, 0);
        assert_eq!(origin.neighbor(Face::Up), BlockPos::new(0, 65, 0));
        assert_eq!(origin.neighbor(Face::Down), BlockPos::new(0, 63, 0));
        assert_eq!(origin.neighbor(Face::North), BlockPos::new(0, 64, -1));
        assert_eq!(origin.neighbor(Face::South), BlockPos::new(0, 64, 1));
        assert_eq!(origin.neighbor(Face::East), BlockPos::new(1, 64, 0));
        assert_eq!(origin.neighbor(Face::West), BlockPos::new(-1, 64, 0));
    }

    #[test]
    fn opposite_faces_cancel() {
        let pos = BlockPos::new(-7, 12, 300);
        for face in Face::ALL {
            assert_eq!(pos.neighbor(face).neighbor(face.opposite()), pos);
        }
    }

    #[test]
    fn neighbor_saturates_at_world_extremes() {
        let edge = BlockPos::new(i32::MAX, i32::MIN, i32::MAX);
        assert_eq!(edge.neighbor(Face::East), edge);
        assert_eq!(edge.neighbor(Face::Down), edge);
        assert_eq!(edge.neighbor(Face::South), edge);
        assert_eq!(edge.neighbor(Face::West), BlockPos::new(i32::MAX - 1, i32::MIN, i32::MAX));
    }
}
