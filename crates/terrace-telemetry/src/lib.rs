//! # terrace-telemetry
//!
//! Event bus for synthesis telemetry. Emits structured events
//! (octave progress, mesh sampling, normal estimation) that can be
//! consumed by pluggable sinks (in-memory collection, `tracing`).

pub mod bus;
pub mod events;
pub mod sinks;

pub use bus::EventBus;
pub use events::{EventKind, SynthesisEvent};
pub use sinks::{EventSink, SharedVecSink, TracingSink, VecSink};
