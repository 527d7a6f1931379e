//! Run configuration – reads `roadsight.toml` from the working directory.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use roadsight_sim::SimTransform;

/// One seeded speed-limit sign in the demo world.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignSeed {
    /// Simulator actor id.
    pub id: i64,
    /// Posted limit in km/h.
    pub limit_kmh: u32,
    /// World pose of the sign.
    #[serde(default)]
    pub transform: SimTransform,
    /// Projected camera-view box `[x_min, x_max, y_min, y_max]`, when known.
    /// Signs without one are logged as skipped by the log projection.
    #[serde(default)]
    pub bbox: Option<[i32; 4]>,
}

/// Demo-run configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Overlay canvas width in pixels.
    #[serde(default = "default_canvas_width")]
    pub canvas_width: usize,

    /// Overlay canvas height in pixels.
    #[serde(default = "default_canvas_height")]
    pub canvas_height: usize,

    /// Ego-vehicle pose, used for distance annotations.
    #[serde(default)]
    pub ego: SimTransform,

    /// Signs to spawn into the ground-truth world.
    #[serde(default = "default_signs")]
    pub signs: Vec<SignSeed>,
}

fn default_canvas_width() -> usize {
    800
}
fn default_canvas_height() -> usize {
    600
}
fn default_signs() -> Vec<SignSeed> {
    vec![
        SignSeed {
            id: 1,
            limit_kmh: 30,
            transform: SimTransform::at(25.0, 3.5, 2.0),
            bbox: Some([410, 470, 180, 240]),
        },
        SignSeed {
            id: 2,
            limit_kmh: 60,
            transform: SimTransform::at(120.0, 3.5, 2.0),
            bbox: Some([430, 450, 200, 220]),
        },
    ]
}

impl Default for Config {
    fn default() -> Self {
        Self {
            canvas_width: default_canvas_width(),
            canvas_height: default_canvas_height(),
            ego: SimTransform::default(),
            signs: default_signs(),
        }
    }
}

/// Load the config from a specific path.  Returns `None` if the file does
/// not exist.
pub fn load_from(path: &Path) -> Result<Option<Config>, String> {
    if !path.exists() {
        return Ok(None);
    }
    let raw = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config at {}: {}", path.display(), e))?;
    let cfg: Config =
        toml::from_str(&raw).map_err(|e| format!("Failed to parse config: {}", e))?;
    Ok(Some(cfg))
}
