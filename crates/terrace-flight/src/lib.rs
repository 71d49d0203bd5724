//! # terrace-flight
//!
//! Flight-simulator camera for flying over a terrain mesh.
//!
//! Everything here is a pure function of the previous state, the elapsed
//! time and the held controls; no clocks or globals are read. A frame loop
//! calls [`update`] once per frame and feeds the result to
//! [`terrain_model_view`].

pub mod camera;
pub mod config;
pub mod input;
pub mod state;

pub use camera::{default_view, model_matrix, terrain_model_view};
pub use config::FlightConfig;
pub use input::{Axis, FlightInput};
pub use state::{update, FlightState};
