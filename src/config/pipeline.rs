use crate::constants::{KEPLER_MAX_ITERATIONS, KEPLER_TOLERANCE};
use crate::errors::PipelineErrors;
use crate::physics::KeplerSolver;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Base of the CelesTrak GP query endpoint
    #[serde(default = "default_celestrak_url")]
    pub celestrak_url: String,

    /// Cached catalogs younger than this are reused
    #[serde(default = "default_cache_hours")]
    pub cache_hours: u64,

    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Points sampled along each orbit by the track renderer
    #[serde(default = "default_track_samples")]
    pub track_samples: usize,

    #[serde(default = "default_kepler_tolerance")]
    pub kepler_tolerance: f64,

    #[serde(default = "default_kepler_max_iterations")]
    pub kepler_max_iterations: u32,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_celestrak_url() -> String {
    "https://celestrak.org/NORAD/elements/gp.php".to_string()
}

fn default_cache_hours() -> u64 {
    6 // CelesTrak refreshes GP data every few hours
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("output")
}

fn default_track_samples() -> usize {
    360
}

fn default_kepler_tolerance() -> f64 {
    KEPLER_TOLERANCE
}

fn default_kepler_max_iterations() -> u32 {
    KEPLER_MAX_ITERATIONS
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            celestrak_url: default_celestrak_url(),
            cache_hours: default_cache_hours(),
            output_dir: default_output_dir(),
            track_samples: default_track_samples(),
            kepler_tolerance: default_kepler_tolerance(),
            kepler_max_iterations: default_kepler_max_iterations(),
        }
    }
}

impl PipelineConfig {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, PipelineErrors> {
        let content = std::fs::read_to_string(path)?;
        let config: PipelineConfig = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn kepler_solver(&self) -> KeplerSolver {
        KeplerSolver::new(self.kepler_tolerance, self.kepler_max_iterations)
    }
}
