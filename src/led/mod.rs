//! LED engine.

pub mod animation;
pub mod controller;
pub mod render;

pub use self::controller::StateController;

use crate::strip::{HardwareError, Strip};
use serde::{Deserialize, Serialize};
use std::ops;

/// Color of a single LED.
#[derive(Clone, Copy, Default, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

#[allow(missing_docs)]
impl Rgb {
    pub const LISTENING_GREEN: Rgb = Rgb(0, 255, 0);
    pub const OFF: Rgb = Rgb(0, 0, 0);
    pub const RESPONDING_RED: Rgb = Rgb(255, 0, 0);
    pub const THINKING_BLUE: Rgb = Rgb(0, 0, 255);
}

impl ops::Mul<f64> for Rgb {
    type Output = Self;

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn mul(self, rhs: f64) -> Self::Output {
        Rgb(
            (f64::from(self.0) * rhs) as u8,
            (f64::from(self.1) * rhs) as u8,
            (f64::from(self.2) * rhs) as u8,
        )
    }
}

/// Phase of the voice-interaction cycle shown on the strip.
///
/// Exactly one state is current at any instant. The set is closed on purpose:
/// an unknown state is unrepresentable instead of a silently ignored branch.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum State {
    /// Waiting for the wake word.
    Idle,
    /// Capturing the user's speech.
    Listening,
    /// Waiting for the language model's reply.
    Thinking,
    /// Speaking the reply.
    Responding,
    /// Strip blanked, no animation running.
    Cleared,
}

/// Writes a single all-black frame to the strip and flushes it.
///
/// Idempotent: safe to call repeatedly or with no prior animation.
pub fn clear<S: Strip + ?Sized>(strip: &mut S) -> Result<(), HardwareError> {
    for index in 0..strip.num_pixels() {
        strip.set_pixel(index, Rgb::OFF);
    }
    strip.show()
}
