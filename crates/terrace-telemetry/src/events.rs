//! Synthesis event types.
//!
//! Structured events emitted by the synthesizer at each stage of the
//! pipeline. Events are lightweight value types that carry just enough
//! data to be useful for monitoring and debugging.

use serde::{Deserialize, Serialize};

/// A synthesis event emitted by the pipeline.
///
/// Events are tagged with the run number of the synthesizer that
/// produced them (0-indexed, incremented per `synthesize` call).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SynthesisEvent {
    /// Synthesis run number.
    pub run: u32,
    /// Event payload.
    pub kind: EventKind,
}

/// Event payload variants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum EventKind {
    /// Generation started.
    GenerationBegin {
        /// Detail level `n`.
        detail: u32,
        /// Grid side `2^n + 1`.
        side: usize,
        /// PRNG seed, when one was configured.
        seed: Option<u64>,
    },

    /// One square + diamond octave completed.
    OctaveComplete {
        /// Octave index (0-indexed).
        step: u32,
        /// Half-step distance used by this octave.
        half_step: usize,
        /// Roughness used by this octave (before decay).
        roughness: f32,
        /// Cells written by the square pass.
        square_cells: usize,
        /// Cells written by the diamond pass.
        diamond_cells: usize,
    },

    /// Grid mapped onto the domain.
    MeshSampled {
        vertex_count: usize,
        triangle_count: usize,
        min_height: f32,
        max_height: f32,
    },

    /// Per-vertex normals computed.
    NormalsEstimated {
        vertex_count: usize,
        /// Vertices whose summed normal had zero magnitude.
        degenerate_count: usize,
    },

    /// Whole pipeline finished.
    SynthesisComplete {
        /// Wall-clock time for the run (seconds).
        wall_time: f64,
    },
}

impl SynthesisEvent {
    /// Creates a new event for the given run.
    pub fn new(run: u32, kind: EventKind) -> Self {
        Self { run, kind }
    }
}
