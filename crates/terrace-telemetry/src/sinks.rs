//! Pluggable event sinks.
//!
//! Sinks consume events from the bus and process them
//! (collect in memory, forward to `tracing`, etc.).

use std::sync::{Arc, Mutex};

use crate::events::{EventKind, SynthesisEvent};

/// Trait for event consumers.
///
/// Implement this to create custom telemetry outputs.
pub trait EventSink: Send {
    /// Process a single event.
    fn handle(&mut self, event: &SynthesisEvent);

    /// Called when the bus is finalized. Flush buffers, close files, etc.
    fn finalize(&mut self) {}

    /// Returns a human-readable name for this sink.
    fn name(&self) -> &str;
}

/// A simple sink that collects events in a `Vec`.
pub struct VecSink {
    /// Collected events.
    pub events: Vec<SynthesisEvent>,
}

impl VecSink {
    /// Creates an empty vec sink.
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }
}

impl Default for VecSink {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSink for VecSink {
    fn handle(&mut self, event: &SynthesisEvent) {
        self.events.push(event.clone());
    }

    fn name(&self) -> &str {
        "vec_sink"
    }
}

/// A collecting sink whose events stay readable after the sink is boxed
/// into a bus.
#[derive(Clone, Default)]
pub struct SharedVecSink {
    events: Arc<Mutex<Vec<SynthesisEvent>>>,
}

impl SharedVecSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of the events collected so far.
    pub fn events(&self) -> Vec<SynthesisEvent> {
        match self.events.lock() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

impl EventSink for SharedVecSink {
    fn handle(&mut self, event: &SynthesisEvent) {
        match self.events.lock() {
            Ok(mut guard) => guard.push(event.clone()),
            Err(poisoned) => poisoned.into_inner().push(event.clone()),
        }
    }

    fn name(&self) -> &str {
        "shared_vec_sink"
    }
}

/// A sink that logs events using the `tracing` crate.
pub struct TracingSink {
    level: tracing::Level,
}

impl TracingSink {
    /// Creates a new tracing sink. Completion events are always logged at
    /// `INFO`; everything else uses `level`.
    pub fn new(level: tracing::Level) -> Self {
        Self { level }
    }
}

impl EventSink for TracingSink {
    fn handle(&mut self, event: &SynthesisEvent) {
        if matches!(event.kind, EventKind::SynthesisComplete { .. }) {
            tracing::info!(run = event.run, event = ?event.kind, "synthesis_event");
            return;
        }
        match self.level {
            tracing::Level::ERROR => {
                tracing::error!(run = event.run, event = ?event.kind, "synthesis_event")
            }
            tracing::Level::WARN => {
                tracing::warn!(run = event.run, event = ?event.kind, "synthesis_event")
            }
            tracing::Level::INFO => {
                tracing::info!(run = event.run, event = ?event.kind, "synthesis_event")
            }
            tracing::Level::DEBUG => {
                tracing::debug!(run = event.run, event = ?event.kind, "synthesis_event")
            }
            tracing::Level::TRACE => {
                tracing::trace!(run = event.run, event = ?event.kind, "synthesis_event")
            }
        }
    }

    fn name(&self) -> &str {
        "tracing_sink"
    }
}
