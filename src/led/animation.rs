//! Animation loop.

use super::{render, Rgb};
use crate::{
    config::Style,
    strip::{HardwareError, Strip},
};
use futures::{future, future::Either, pin_mut, prelude::*};
use tokio::time::{self, MissedTickBehavior};
use tokio_stream::wrappers::IntervalStream;
use tokio_util::sync::CancellationToken;

/// Renders successive frames of `style` to `strip` at the style's cadence
/// until `cancel` is raised or the style's frame limit is reached.
///
/// The cancellation signal is checked once per frame and instead of the
/// inter-frame sleep, so cancellation latency is bounded by one wait
/// interval. Cancellation does not blank the strip; blanking is a separate
/// explicit action ([`super::clear`]).
///
/// The strip is handed back together with the loop's outcome. A failed flush
/// is fatal to the loop and becomes its outcome; the frame is not retried.
pub async fn run<S: Strip>(
    style: Style,
    mut strip: S,
    cancel: CancellationToken,
) -> (S, Result<(), HardwareError>) {
    let outcome = drive(&style, &mut strip, &cancel).await;
    (strip, outcome)
}

async fn drive<S: Strip>(
    style: &Style,
    strip: &mut S,
    cancel: &CancellationToken,
) -> Result<(), HardwareError> {
    let mut frame = vec![Rgb::OFF; strip.num_pixels()];
    let mut interval = time::interval(style.wait);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
    let mut ticks = IntervalStream::new(interval);
    // The first interval tick completes immediately.
    ticks.next().await;
    for counter in 0_u32.. {
        if cancel.is_cancelled() {
            break;
        }
        if style.frame_limit().map_or(false, |limit| counter >= limit) {
            break;
        }
        render::frame(style, &mut frame, counter);
        for (index, &color) in frame.iter().enumerate() {
            strip.set_pixel(index, color);
        }
        strip.show()?;
        let cancelled = cancel.cancelled();
        pin_mut!(cancelled);
        if let Either::Left(..) = future::select(cancelled, ticks.next()).await {
            break;
        }
    }
    Ok(())
}
