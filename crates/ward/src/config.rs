//! Runtime configuration.

use std::path::PathBuf;

use tracing::warn;
use ward_border::BorderVisualizer;
use ward_policy::GateMode;

#[derive(Clone, Debug, PartialEq)]
pub struct WardConfig {
    /// LMDB directory holding the area and admin blobs.
    pub db_path: PathBuf,
    /// Maximum view raycast distance for look-target tracking.
    pub raycast_distance: f64,
    /// Run the look-target tracker every N host ticks.
    pub look_interval: u64,
    /// Largest border (in surface points) the visualizer will render.
    pub border_max_points: u64,
    pub gate_mode: GateMode,
}

impl Default for WardConfig {
    fn default() -> Self {
        Self {
            db_path: PathBuf::from("data/ward"),
            raycast_distance: 7.0,
            look_interval: 1,
            border_max_points: BorderVisualizer::DEFAULT_MAX_POINTS,
            gate_mode: GateMode::Evaluate,
        }
    }
}

impl WardConfig {
    /// Read `WARD_*` environment variables, keeping defaults for anything
    /// unset or unparsable.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let db_path = lookup("WARD_DB_PATH")
            .map(PathBuf::from)
            .unwrap_or(defaults.db_path);

        let raycast_distance = lookup("WARD_RAYCAST_DISTANCE")
            .and_then(|v| v.parse::<f64>().ok())
            .filter(|d| d.is_finite() && *d > 0.0)
            .unwrap_or(defaults.raycast_distance);

        let look_interval = lookup("WARD_LOOK_INTERVAL")
            .and_then(|v| v.parse::<u64>().ok())
            .filter(|n| *n >= 1)
            .unwrap_or(defaults.look_interval);

        let border_max_points = lookup("WARD_BORDER_MAX_POINTS")
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(defaults.border_max_points);

        let gate_mode = match lookup("WARD_GATE_MODE").as_deref() {
            None => defaults.gate_mode,
            Some(v) if v.eq_ignore_ascii_case("evaluate") => GateMode::Evaluate,
            Some(v) if v.eq_ignore_ascii_case("cached") => GateMode::Cached,
            Some(other) => {
                warn!("Unknown WARD_GATE_MODE '{other}', using {:?}", defaults.gate_mode);
                defaults.gate_mode
            }
        };

        Self {
            db_path,
            raycast_distance,
            look_interval,
            border_max_points,
            gate_mode,
        }
    }
}
