//! Runtime configuration for profile runs.
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Clone, Default, Deserialize)]
pub struct OutputConfig {
    pub json_out: Option<PathBuf>,
}

/// Estimator settings shared by every segment in a run.
#[derive(Clone, Deserialize)]
pub struct EstimatorConfig {
    /// Ring radii in Mpc, evaluated in order.
    pub radii: Vec<f64>,
    /// Azimuthal samples per ring.
    pub nphi: usize,
    #[serde(default)]
    pub output: OutputConfig,
}

pub fn load_config(path: &Path) -> Result<EstimatorConfig, String> {
    let contents = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    let config: EstimatorConfig = serde_json::from_str(&contents)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))?;
    Ok(config)
}
