//! Per-frame color computation.
//!
//! Every function here is a pure mapping from (frame counter, strip length,
//! parameters) to pixel colors. The only state an animation carries between
//! frames is the frame counter itself, which is owned by the animation loop,
//! and - for the progressive wipe - the previous content of the frame buffer.

use super::Rgb;
use crate::config::{Kind, Style};

/// Brightness increment of the pulse animation per frame.
const PULSE_STEP: u32 = 10;

/// Frames of one pulse slope, `ceil(256 / PULSE_STEP)`.
const PULSE_HALF_PERIOD: u32 = 26;

/// Frames of one full fade-in/fade-out pulse cycle.
pub const PULSE_PERIOD: u32 = PULSE_HALF_PERIOD * 2;

/// Phase count of the theater chase animation.
pub const CHASE_PHASES: u32 = 3;

/// Frame count of one full rainbow revolution.
pub const RAINBOW_PERIOD: u32 = 256;

/// Renders the frame with number `counter` of the animation described by
/// `style` into `frame`.
pub fn frame(style: &Style, frame: &mut [Rgb], counter: u32) {
    match style.kind {
        Kind::Solid => solid(frame, style.color),
        Kind::Wipe => wipe(frame, counter, style.color),
        Kind::Chase => chase(frame, counter, style.color),
        Kind::Rainbow => rainbow(frame, counter),
        Kind::Pulse => pulse(frame, counter, style.color),
    }
}

/// Sets the entire strip to a single color.
pub fn solid(frame: &mut [Rgb], color: Rgb) {
    for led in frame {
        *led = color;
    }
}

/// Progressive fill: pixels up to `counter % len` take `color`, the rest of
/// the buffer keeps its previous content.
#[allow(clippy::cast_possible_truncation)]
pub fn wipe(frame: &mut [Rgb], counter: u32, color: Rgb) {
    if frame.is_empty() {
        return;
    }
    let filled = counter as usize % frame.len();
    for led in &mut frame[..=filled] {
        *led = color;
    }
}

/// Movie theater light style chaser: every third pixel lit, offset by the
/// current phase `counter % 3`.
#[allow(clippy::cast_possible_truncation)]
pub fn chase(frame: &mut [Rgb], counter: u32, color: Rgb) {
    let phase = (counter % CHASE_PHASES) as usize;
    for led in frame.iter_mut() {
        *led = Rgb::OFF;
    }
    for dash in (0..frame.len()).step_by(3) {
        if let Some(led) = frame.get_mut(dash + phase) {
            *led = color;
        }
    }
}

/// Travelling gradient uniformly distributing the color wheel across all
/// pixels, advanced by one wheel position per frame.
pub fn rainbow(frame: &mut [Rgb], counter: u32) {
    let len = frame.len();
    for (i, led) in frame.iter_mut().enumerate() {
        #[allow(clippy::cast_possible_truncation)]
        let pos = ((i * 256 / len + counter as usize) & 255) as u8;
        *led = wheel(pos);
    }
}

/// Whole-strip brightness pulse: a triangular ramp scales the base color's
/// channels up and back down over one [`PULSE_PERIOD`].
pub fn pulse(frame: &mut [Rgb], counter: u32, color: Rgb) {
    let phase = counter % PULSE_PERIOD;
    let level = if phase < PULSE_HALF_PERIOD {
        (phase * PULSE_STEP).min(255)
    } else {
        255_u32.saturating_sub((phase - PULSE_HALF_PERIOD) * PULSE_STEP)
    };
    let scaled = color * (f64::from(level) / 255.0);
    for led in frame {
        *led = scaled;
    }
}

/// Generates rainbow colors across 0-255 positions.
///
/// Three piecewise-linear segments: green fading into red, red into blue,
/// blue back into green. Continuous across the 255 -> 0 wrap.
#[must_use]
pub fn wheel(pos: u8) -> Rgb {
    match pos {
        0..=84 => Rgb(pos * 3, 255 - pos * 3, 0),
        85..=169 => {
            let pos = pos - 85;
            Rgb(255 - pos * 3, 0, pos * 3)
        }
        170..=255 => {
            let pos = pos - 170;
            Rgb(0, pos * 3, 255 - pos * 3)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::LED_COUNT;

    fn channel_delta(a: Rgb, b: Rgb) -> u8 {
        a.0.abs_diff(b.0).max(a.1.abs_diff(b.1)).max(a.2.abs_diff(b.2))
    }

    #[test]
    fn wheel_starts_pure_green() {
        assert_eq!(wheel(0), Rgb(0, 255, 0));
    }

    #[test]
    fn wheel_segment_boundaries_are_continuous() {
        // One ramp step changes a channel by at most 3 units.
        for pos in 0..=254 {
            let delta = channel_delta(wheel(pos), wheel(pos + 1));
            assert!(delta <= 3, "wheel jumps by {delta} between {pos} and {}", pos + 1);
        }
        assert!(channel_delta(wheel(255), wheel(0)) <= 3);
    }

    #[test]
    fn rainbow_has_256_frame_period() {
        let mut first = [Rgb::OFF; LED_COUNT];
        let mut wrapped = [Rgb::OFF; LED_COUNT];
        rainbow(&mut first, 0);
        rainbow(&mut wrapped, RAINBOW_PERIOD);
        assert_eq!(first, wrapped);
    }

    #[test]
    fn wipe_is_progressive() {
        let color = Rgb(255, 16, 240);
        let mut frame = [Rgb::OFF; LED_COUNT];
        wipe(&mut frame, 0, color);
        assert_eq!(frame[0], color);
        assert!(frame[1..].iter().all(|&led| led == Rgb::OFF));
        wipe(&mut frame, 5, color);
        assert!(frame[..=5].iter().all(|&led| led == color));
        assert!(frame[6..].iter().all(|&led| led == Rgb::OFF));
        // Pixels filled earlier in the run are left alone on wrap-around.
        wipe(&mut frame, u32::try_from(LED_COUNT).unwrap(), color);
        assert!(frame[..=5].iter().all(|&led| led == color));
    }

    #[test]
    fn chase_lights_every_third_pixel() {
        let color = Rgb::LISTENING_GREEN;
        for counter in 0..6 {
            let mut frame = [Rgb::OFF; LED_COUNT];
            chase(&mut frame, counter, color);
            let phase = counter as usize % 3;
            for (i, &led) in frame.iter().enumerate() {
                let lit = i % 3 == phase;
                assert_eq!(led == color, lit, "pixel {i} at counter {counter}");
            }
        }
    }

    #[test]
    fn pulse_ramps_up_and_down() {
        let color = Rgb::RESPONDING_RED;
        let mut frame = [Rgb::OFF; LED_COUNT];
        pulse(&mut frame, 0, color);
        assert_eq!(frame[0], Rgb::OFF);
        pulse(&mut frame, PULSE_PERIOD / 2, color);
        assert_eq!(frame[0], color);
        pulse(&mut frame, PULSE_PERIOD - 1, color);
        let tail = frame[0];
        assert!(tail.0 < 10 && tail.1 == 0 && tail.2 == 0, "tail frame is {tail:?}");
        // Periodic.
        pulse(&mut frame, PULSE_PERIOD, color);
        assert_eq!(frame[0], Rgb::OFF);
    }
}
