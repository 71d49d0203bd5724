//! # terrace-math
//!
//! Linear algebra primitives for the terrace workspace.
//!
//! Provides:
//! - Re-exports of `glam` types (`Vec3`, `Mat4`, etc.)
//! - Face-normal and zero-safe normalization helpers
//! - An immutable transform stack for hierarchical modeling

pub mod transform_stack;
pub mod vector;

// Re-export glam types as the canonical math types for terrace.
pub use glam::{EulerRot, Mat3, Mat4, Quat, Vec2, Vec3, Vec4};

pub use transform_stack::TransformStack;
pub use vector::{face_normal, normalize_or_zero};
