//! Immutable transform stack for hierarchical modeling.
//!
//! Each operation returns a new stack; nothing is mutated in place.
//!
//! ```
//! use terrace_math::{Mat4, TransformStack, Vec3};
//! let root = TransformStack::new(Mat4::IDENTITY);
//! let child = root.push().then(Mat4::from_translation(Vec3::X));
//! let restored = child.pop().unwrap();
//! assert_eq!(restored.current(), Mat4::IDENTITY);
//! ```

use glam::Mat4;
use terrace_types::{TerraceError, TerraceResult};

/// A current transform plus the snapshots saved by `push`.
#[derive(Debug, Clone, PartialEq)]
pub struct TransformStack {
    current: Mat4,
    saved: Vec<Mat4>,
}

impl TransformStack {
    /// Creates a stack with the given current transform and no snapshots.
    pub fn new(current: Mat4) -> Self {
        Self {
            current,
            saved: Vec::new(),
        }
    }

    /// Returns the current transform.
    #[inline]
    pub fn current(&self) -> Mat4 {
        self.current
    }

    /// Returns the number of saved snapshots.
    #[inline]
    pub fn depth(&self) -> usize {
        self.saved.len()
    }

    /// Returns a stack with the current transform saved.
    pub fn push(&self) -> Self {
        let mut saved = self.saved.clone();
        saved.push(self.current);
        Self {
            current: self.current,
            saved,
        }
    }

    /// Returns a stack restored to the most recent snapshot.
    pub fn pop(&self) -> TerraceResult<Self> {
        let mut saved = self.saved.clone();
        let current = saved.pop().ok_or(TerraceError::EmptyTransformStack)?;
        Ok(Self { current, saved })
    }

    /// Returns a stack whose current transform is `current · m`.
    pub fn then(&self, m: Mat4) -> Self {
        Self {
            current: self.current * m,
            saved: self.saved.clone(),
        }
    }
}

impl Default for TransformStack {
    fn default() -> Self {
        Self::new(Mat4::IDENTITY)
    }
}
