//! Held flight controls for one frame.

use serde::{Deserialize, Serialize};

/// Direction requested on one control axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Axis {
    #[default]
    Idle,
    Negative,
    Positive,
}

impl Axis {
    /// Resolves a pair of opposing keys. `first` wins when both are held.
    pub fn resolve(first: bool, second: bool, first_is_positive: bool) -> Self {
        match (first, second) {
            (true, _) if first_is_positive => Axis::Positive,
            (true, _) => Axis::Negative,
            (false, true) if first_is_positive => Axis::Negative,
            (false, true) => Axis::Positive,
            (false, false) => Axis::Idle,
        }
    }
}

/// Keys held during a frame.
///
/// When both keys of one axis are held, the key checked first wins:
/// yaw left over right, pitch up over down, roll right over left,
/// throttle up over down, trim up over down.
///
/// Throttle and trim are independent key pairs that drive the same
/// throttle offset; holding one key of each in the same direction doubles
/// the change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FlightInput {
    pub yaw_left: bool,
    pub yaw_right: bool,
    pub pitch_up: bool,
    pub pitch_down: bool,
    pub roll_left: bool,
    pub roll_right: bool,
    pub throttle_up: bool,
    pub throttle_down: bool,
    pub trim_up: bool,
    pub trim_down: bool,
    /// Swaps the pitch response of the up and down keys.
    pub invert_pitch: bool,
}

impl FlightInput {
    /// No keys held.
    pub fn idle() -> Self {
        Self::default()
    }

    /// Yaw: left turns negative.
    pub fn yaw(&self) -> Axis {
        Axis::resolve(self.yaw_left, self.yaw_right, false)
    }

    /// Pitch key state, before inversion: up is `Positive`.
    pub fn pitch(&self) -> Axis {
        Axis::resolve(self.pitch_up, self.pitch_down, true)
    }

    /// Roll: right is positive.
    pub fn roll(&self) -> Axis {
        Axis::resolve(self.roll_right, self.roll_left, true)
    }

    pub fn throttle(&self) -> Axis {
        Axis::resolve(self.throttle_up, self.throttle_down, true)
    }

    /// Second throttle key pair.
    pub fn trim(&self) -> Axis {
        Axis::resolve(self.trim_up, self.trim_down, true)
    }

    /// Returns true when no control is held.
    pub fn is_idle(&self) -> bool {
        self.yaw() == Axis::Idle
            && self.pitch() == Axis::Idle
            && self.roll() == Axis::Idle
            && self.throttle() == Axis::Idle
            && self.trim() == Axis::Idle
    }
}
