//! Flight state and the per-frame update.

use glam::{EulerRot, Quat};
use serde::{Deserialize, Serialize};

use crate::config::FlightConfig;
use crate::input::{Axis, FlightInput};

/// Orientation and forward progress of the camera.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FlightState {
    /// Accumulated orientation.
    pub orientation: Quat,
    /// Distance covered at cruise speed.
    pub travel: f32,
    /// Player-controlled offset added to `travel`.
    pub throttle: f32,
}

impl Default for FlightState {
    fn default() -> Self {
        Self {
            orientation: Quat::IDENTITY,
            travel: 0.0,
            throttle: 0.0,
        }
    }
}

impl FlightState {
    /// Forward translation applied to the terrain.
    #[inline]
    pub fn forward(&self) -> f32 {
        self.travel + self.throttle
    }
}

/// Advances `state` by `dt` seconds under `input`.
///
/// This frame's rotation is built from euler angles (x then y then z) and
/// composed in front of the accumulated orientation, so each delta is
/// applied about the fixed axes.
pub fn update(
    state: &FlightState,
    dt: f32,
    input: &FlightInput,
    config: &FlightConfig,
) -> FlightState {
    let pitch = match (input.pitch(), input.invert_pitch) {
        (Axis::Idle, _) => 0.0,
        (Axis::Positive, false) | (Axis::Negative, true) => -config.pitch_dive_rate,
        (Axis::Negative, false) | (Axis::Positive, true) => config.pitch_climb_rate,
    };
    let yaw = signed(input.yaw(), config.yaw_rate);
    let roll = signed(input.roll(), config.roll_rate);
    let throttle = signed(input.throttle(), config.throttle_rate)
        + signed(input.trim(), config.throttle_rate);

    let delta = Quat::from_euler(
        EulerRot::ZYX,
        (roll * dt).to_radians(),
        (yaw * dt).to_radians(),
        (pitch * dt).to_radians(),
    );

    FlightState {
        orientation: (delta * state.orientation).normalize(),
        travel: state.travel + config.cruise_speed * dt,
        throttle: state.throttle + throttle * dt,
    }
}

#[inline]
fn signed(axis: Axis, rate: f32) -> f32 {
    match axis {
        Axis::Idle => 0.0,
        Axis::Negative => -rate,
        Axis::Positive => rate,
    }
}
