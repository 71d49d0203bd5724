//! Matrices derived from a flight state.

use glam::{Mat4, Vec3};
use terrace_math::TransformStack;

use crate::state::FlightState;

/// Tilt that lays the terrain's z-up mesh flat under a y-up camera.
const TERRAIN_TILT_DEG: f32 = -90.0;

/// View from the origin looking down `-z` with `+y` up.
pub fn default_view() -> Mat4 {
    Mat4::look_at_rh(Vec3::ZERO, Vec3::NEG_Z, Vec3::Y)
}

/// Rotation by the accumulated orientation, then translation along `z` by
/// the forward distance.
pub fn model_matrix(state: &FlightState) -> Mat4 {
    Mat4::from_rotation_translation(state.orientation, Vec3::new(0.0, 0.0, state.forward()))
}

/// Full model-view for drawing the terrain: the flight transform applied
/// after `view`, a yaw of `heading_deg` and the terrain tilt.
pub fn terrain_model_view(state: &FlightState, view: Mat4, heading_deg: f32) -> Mat4 {
    let base = TransformStack::new(view)
        .then(Mat4::from_rotation_y(heading_deg.to_radians()))
        .then(Mat4::from_rotation_x(TERRAIN_TILT_DEG.to_radians()));
    model_matrix(state) * base.current()
}
