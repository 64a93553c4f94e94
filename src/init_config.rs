// init_config.rs
// Handles loading and parsing the demo parameters from faraday_config.toml

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::config;

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct InitConfig {
    pub coil: Option<CoilConfig>,
    pub demo: Option<DemoConfig>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct CoilConfig {
    /// Number of winding turns. Falls back to the default when omitted.
    pub turns: Option<u32>,
    /// Loop radius in meters.
    pub radius: Option<f64>,
    /// Peak magnetic field in tesla.
    pub peak_field: Option<f64>,
    /// Field oscillation frequency in hertz.
    pub frequency: Option<f64>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct DemoConfig {
    /// Run duration in seconds.
    pub duration: Option<f64>,
}

impl InitConfig {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn std::error::Error>> {
        let content = fs::read_to_string(path)?;
        let config: InitConfig = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn load_default() -> Result<Self, Box<dyn std::error::Error>> {
        Self::load_from_file("faraday_config.toml")
    }

    pub fn turns(&self) -> u32 {
        self.coil
            .as_ref()
            .and_then(|c| c.turns)
            .unwrap_or(config::DEFAULT_TURNS)
    }

    pub fn radius(&self) -> f64 {
        self.coil
            .as_ref()
            .and_then(|c| c.radius)
            .unwrap_or(config::DEFAULT_RADIUS_M)
    }

    pub fn peak_field(&self) -> f64 {
        self.coil
            .as_ref()
            .and_then(|c| c.peak_field)
            .unwrap_or(config::DEFAULT_PEAK_FIELD_T)
    }

    pub fn frequency(&self) -> f64 {
        self.coil
            .as_ref()
            .and_then(|c| c.frequency)
            .unwrap_or(config::DEFAULT_FREQUENCY_HZ)
    }

    pub fn duration(&self) -> f64 {
        self.demo
            .as_ref()
            .and_then(|d| d.duration)
            .unwrap_or(config::DEFAULT_DURATION_S)
    }
}
