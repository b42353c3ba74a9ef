//! Controller configuration settings.
//!
//! Which animation a state maps to is configuration, not behavior: the
//! defaults below can be overridden by a JSON file passed on the command
//! line.

use crate::{
    consts::{
        CHASE_INTERVAL, PULSE_CYCLES, PULSE_INTERVAL, RAINBOW_INTERVAL, SOLID_INTERVAL,
        WIPE_INTERVAL,
    },
    led::{render, Rgb, State},
};
use eyre::{Result, WrapErr as _};
use serde::{Deserialize, Serialize};
use std::{path::Path, time::Duration};
use tokio::fs;

/// Animation patterns the renderer knows how to draw.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum Kind {
    /// Constant single color.
    Solid,
    /// Progressive single-color fill.
    Wipe,
    /// Moving theater-chase dashes.
    Chase,
    /// Travelling rainbow gradient.
    Rainbow,
    /// Whole-strip brightness pulse.
    Pulse,
}

/// Parameters of one animation: the pattern, its color and timing.
///
/// Immutable once handed to an animation loop.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Style {
    /// Animation pattern.
    pub kind: Kind,
    /// Base color. Ignored by [`Kind::Rainbow`].
    pub color: Rgb,
    /// Delay between two consecutive frames.
    pub wait: Duration,
    /// Number of pulse cycles to run before the animation finishes on its
    /// own. `None` runs until the next transition.
    #[serde(default)]
    pub cycles: Option<u32>,
}

impl Style {
    /// Constant `color` on the whole strip.
    #[must_use]
    pub fn solid(color: Rgb) -> Self {
        Self { kind: Kind::Solid, color, wait: SOLID_INTERVAL, cycles: None }
    }

    /// Progressive fill in `color`.
    #[must_use]
    pub fn wipe(color: Rgb) -> Self {
        Self { kind: Kind::Wipe, color, wait: WIPE_INTERVAL, cycles: None }
    }

    /// Theater chase in `color`.
    #[must_use]
    pub fn chase(color: Rgb) -> Self {
        Self { kind: Kind::Chase, color, wait: CHASE_INTERVAL, cycles: None }
    }

    /// Rainbow cycle.
    #[must_use]
    pub fn rainbow() -> Self {
        Self { kind: Kind::Rainbow, color: Rgb::OFF, wait: RAINBOW_INTERVAL, cycles: None }
    }

    /// Brightness pulse in `color`, fading in and out `cycles` times.
    #[must_use]
    pub fn pulse(color: Rgb, cycles: Option<u32>) -> Self {
        Self { kind: Kind::Pulse, color, wait: PULSE_INTERVAL, cycles }
    }

    /// Total number of frames after which the animation finishes on its own,
    /// or `None` for an endless animation.
    #[must_use]
    pub fn frame_limit(&self) -> Option<u32> {
        match self.kind {
            Kind::Pulse => self.cycles.map(|cycles| cycles * render::PULSE_PERIOD),
            Kind::Solid | Kind::Wipe | Kind::Chase | Kind::Rainbow => None,
        }
    }
}

/// Per-state animation mapping.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Config {
    /// Animation of [`State::Idle`].
    pub idle: Style,
    /// Animation of [`State::Listening`].
    pub listening: Style,
    /// Animation of [`State::Thinking`].
    pub thinking: Style,
    /// Animation of [`State::Responding`].
    pub responding: Style,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            idle: Style::rainbow(),
            listening: Style::chase(Rgb::LISTENING_GREEN),
            thinking: Style::wipe(Rgb::THINKING_BLUE),
            responding: Style::pulse(Rgb::RESPONDING_RED, Some(PULSE_CYCLES)),
        }
    }
}

impl Config {
    /// Loads the configuration from a JSON file.
    pub async fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .await
            .wrap_err_with(|| format!("failed to read config from {}", path.display()))?;
        serde_json::from_str(&contents)
            .wrap_err_with(|| format!("failed to parse config from {}", path.display()))
    }

    /// Returns the animation configured for `state`, or `None` if the state
    /// doesn't animate ([`State::Cleared`] blanks the strip instead).
    #[must_use]
    pub fn style(&self, state: State) -> Option<&Style> {
        match state {
            State::Idle => Some(&self.idle),
            State::Listening => Some(&self.listening),
            State::Thinking => Some(&self.thinking),
            State::Responding => Some(&self.responding),
            State::Cleared => None,
        }
    }
}
