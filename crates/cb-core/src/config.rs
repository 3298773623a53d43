//! Map generator tuning
//!
//! All the knobs of the cave carver live in [`GeneratorConfig`]. The defaults
//! produce open, organic caves for rooms in the 10x10 to 60x40 range. Configs
//! may be loaded from JSON; missing fields take their default values.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::RoomError;

/// Tunable parameters of the cave generator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Number of cellular-automaton smoothing passes
    pub smoothing_passes: u32,
    /// A cell becomes Solid when more than this many of its 8 neighbours are Solid
    pub solid_threshold: u32,
    /// Initial Solid probability (percent) at density 0
    pub min_fill_percent: u8,
    /// Initial Solid probability (percent) at density 100
    pub max_fill_percent: u8,
    /// Force the outermost ring Solid before smoothing
    pub solid_border: bool,
    /// Attempts whose open area is below this share of the interior are retried
    pub min_open_percent: u8,
    /// Total generation attempts before the last result is kept
    pub max_attempts: u32,
    /// Density decrease applied on each retry
    pub density_retry_step: u8,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            smoothing_passes: 4,
            solid_threshold: 4,
            min_fill_percent: 20,
            max_fill_percent: 58,
            solid_border: true,
            min_open_percent: 8,
            max_attempts: 4,
            density_retry_step: 20,
        }
    }
}

impl GeneratorConfig {
    /// Parse a config from JSON text and validate it
    pub fn from_json_str(contents: &str) -> Result<Self, RoomError> {
        let config: Self = serde_json::from_str(contents)
            .map_err(|e| RoomError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load a JSON config file
    pub fn load_from_file(path: &Path) -> Result<Self, RoomError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| RoomError::InvalidConfig(format!("{}: {}", path.display(), e)))?;
        Self::from_json_str(&contents)
    }

    /// Reject settings that would make the generator degenerate
    pub fn validate(&self) -> Result<(), RoomError> {
        if self.max_fill_percent >= 100 {
            return Err(RoomError::InvalidConfig(format!(
                "max_fill_percent {} must be below 100",
                self.max_fill_percent
            )));
        }
        if self.min_fill_percent > self.max_fill_percent {
            return Err(RoomError::InvalidConfig(format!(
                "min_fill_percent {} exceeds max_fill_percent {}",
                self.min_fill_percent, self.max_fill_percent
            )));
        }
        if self.solid_threshold > 8 {
            return Err(RoomError::InvalidConfig(format!(
                "solid_threshold {} can never be exceeded by 8 neighbours",
                self.solid_threshold
            )));
        }
        if self.min_open_percent > 100 {
            return Err(RoomError::InvalidConfig(format!(
                "min_open_percent {} is not a percentage",
                self.min_open_percent
            )));
        }
        if self.max_attempts == 0 {
            return Err(RoomError::InvalidConfig(
                "max_attempts must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Initial Solid probability for a cave density in `0..=100`
    ///
    /// Density is mapped linearly onto `[min_fill_percent, max_fill_percent]`,
    /// which keeps the seeded grid away from fully open or fully solid.
    pub fn fill_percent(&self, density: u8) -> u32 {
        let density = u32::from(density.min(crate::MAX_DENSITY));
        let lo = u32::from(self.min_fill_percent);
        let hi = u32::from(self.max_fill_percent);
        lo + hi.saturating_sub(lo) * density / 100
    }
}
