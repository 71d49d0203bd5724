//! Flight rates.

use serde::{Deserialize, Serialize};
use terrace_types::{TerraceError, TerraceResult};

/// Frame rate the default rates were tuned at.
const TUNED_FPS: f32 = 60.0;

/// Turn rates (degrees per second) and speeds (units per second).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlightConfig {
    /// Forward travel added every second regardless of input.
    pub cruise_speed: f32,
    pub yaw_rate: f32,
    /// Pitch rate for the nose-down response.
    pub pitch_dive_rate: f32,
    /// Pitch rate for the nose-up response.
    pub pitch_climb_rate: f32,
    pub roll_rate: f32,
    /// Throttle change per second for each held throttle or trim key.
    pub throttle_rate: f32,
}

impl Default for FlightConfig {
    fn default() -> Self {
        Self {
            cruise_speed: 5.0e-6 * TUNED_FPS,
            yaw_rate: 0.1 * TUNED_FPS,
            pitch_dive_rate: 0.2 * TUNED_FPS,
            pitch_climb_rate: 0.06 * TUNED_FPS,
            roll_rate: 0.5 * TUNED_FPS,
            throttle_rate: 0.001 * TUNED_FPS,
        }
    }
}

impl FlightConfig {
    /// Checks that every rate is finite.
    pub fn validate(&self) -> TerraceResult<()> {
        let rates = [
            ("cruise_speed", self.cruise_speed),
            ("yaw_rate", self.yaw_rate),
            ("pitch_dive_rate", self.pitch_dive_rate),
            ("pitch_climb_rate", self.pitch_climb_rate),
            ("roll_rate", self.roll_rate),
            ("throttle_rate", self.throttle_rate),
        ];
        for (name, value) in rates {
            if !value.is_finite() {
                return Err(TerraceError::Configuration(format!(
                    "{name} must be finite, got {value}"
                )));
            }
        }
        Ok(())
    }

    /// Parses and validates a TOML flight config.
    pub fn from_toml_str(source: &str) -> TerraceResult<Self> {
        let config: Self = toml::from_str(source)
            .map_err(|e| TerraceError::Serialization(format!("Invalid flight config: {e}")))?;
        config.validate()?;
        Ok(config)
    }
}
