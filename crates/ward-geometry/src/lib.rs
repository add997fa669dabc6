//! Block-space geometry for protected areas.
//!
//! Everything here is integer block coordinates. A [`Cuboid`] is always derived
//! from two raw corners via [`Cuboid::from_corners`] and uses closed intervals on
//! every axis, so a block sitting exactly on a boundary is inside.
//!
//! ```text
//!            max (right, top, front)
//!        +--------+
//!       /|       /|
//!      +--------+ |      y (top/bottom)
//!      | +------|-+      |  z (front/back)
//!      |/       |/       | /
//!      +--------+        |/___ x (left/right)
//!   min (left, bottom, back)
//! ```

mod cuboid;
mod pos;

pub use cuboid::Cuboid;
pub use pos::{BlockPos, Face};
