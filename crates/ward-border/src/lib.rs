//! Boundary visualization.
//!
//! Samples the six faces of an area's box into a deduplicated lattice and
//! hands each point to the host renderer exactly once.

use thiserror::Error;
use tracing::{debug, warn};
use ward_geometry::{BlockPos, Cuboid};
use ward_store::ProtectedArea;

/// Host renderer for boundary markers (particles, ghost blocks, ...).
pub trait MarkerSink {
    fn spawn_marker(&mut self, pos: BlockPos);
}

impl<F: FnMut(BlockPos)> MarkerSink for F {
    fn spawn_marker(&mut self, pos: BlockPos) {
        self(pos);
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BorderError {
    /// The box surface has more points than the configured limit.
    #[error("border has {points} points, limit is {limit}")]
    TooLarge { points: u64, limit: u64 },
}

/// Renders area borders, refusing boxes whose surface exceeds `max_points`.
#[derive(Clone, Copy, Debug)]
pub struct BorderVisualizer {
    max_points: u64,
}

impl BorderVisualizer {
    pub const DEFAULT_MAX_POINTS: u64 = 65_536;

    #[must_use]
    pub const fn new(max_points: u64) -> Self {
        Self { max_points }
    }

    pub const fn max_points(&self) -> u64 {
        self.max_points
    }

    /// Emit one marker per distinct surface point of `cuboid`.
    ///
    /// The whole lattice is materialized before the first marker is emitted.
    pub fn render(&self, cuboid: &Cuboid, sink: &mut impl MarkerSink) -> Result<usize, BorderError> {
        let points = cuboid.surface_len();
        if points > self.max_points {
            return Err(BorderError::TooLarge {
                points,
                limit: self.max_points,
            });
        }

        let lattice = cuboid.enumerate_faces();
        for &pos in &lattice {
            sink.spawn_marker(pos);
        }
        Ok(lattice.len())
    }

    pub fn render_area(
        &self,
        area: &ProtectedArea,
        sink: &mut impl MarkerSink,
    ) -> Result<usize, BorderError> {
        match self.render(&area.cuboid(), sink) {
            Ok(count) => {
                debug!("Rendered {count} border markers for {}", area.id);
                Ok(count)
            }
            Err(e) => {
                warn!("Not rendering border of {}: {e}", area.id);
                Err(e)
            }
        }
    }
}

impl Default for BorderVisualizer {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MAX_POINTS)
    }
}
