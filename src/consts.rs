//! Global constants.

use std::time::Duration;

/// Number of LEDs on the strip.
pub const LED_COUNT: usize = 20;

/// Refresh delay of a solid color fill.
pub const SOLID_INTERVAL: Duration = Duration::from_millis(100);

/// Per-frame delay of the color wipe animation.
pub const WIPE_INTERVAL: Duration = Duration::from_millis(50);

/// Per-frame delay of the theater chase animation.
pub const CHASE_INTERVAL: Duration = Duration::from_millis(50);

/// Per-frame delay of the rainbow cycle animation.
pub const RAINBOW_INTERVAL: Duration = Duration::from_millis(20);

/// Per-frame delay of the color pulse animation.
pub const PULSE_INTERVAL: Duration = Duration::from_millis(50);

/// Default number of fade-in/fade-out cycles for the pulse animation.
pub const PULSE_CYCLES: u32 = 3;
