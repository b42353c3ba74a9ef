//! Animation state controller.

use super::{animation, clear, State};
use crate::{
    config::Config,
    strip::{HardwareError, Strip},
};
use eyre::{eyre, Result, WrapErr as _};
use tokio::task;
use tokio_util::sync::CancellationToken;

/// One running animation loop.
///
/// The strip value is moved into the loop's task and handed back through the
/// join, so a second writer to the strip is unrepresentable.
struct AnimationHandle<S> {
    state: State,
    cancel: CancellationToken,
    task: task::JoinHandle<(S, Result<(), HardwareError>)>,
}

/// Owner of the strip and of the at-most-one active animation loop.
///
/// Every transition unconditionally stops the active loop and waits for its
/// termination before touching the strip again, so two loops never overlap.
/// Transitions are serialized by `&mut self`; there is no shared mutable
/// state for concurrent requests to race on.
pub struct StateController<S> {
    config: Config,
    current: Option<State>,
    /// The strip, whenever no animation task owns it.
    parked: Option<S>,
    active: Option<AnimationHandle<S>>,
}

impl<S: Strip> StateController<S> {
    /// Creates a new [`StateController`] owning `strip`. No state is current
    /// and nothing is rendered until the first [`request`](Self::request).
    #[must_use]
    pub fn new(strip: S, config: Config) -> Self {
        Self { config, current: None, parked: Some(strip), active: None }
    }

    /// Returns the last requested state.
    #[must_use]
    pub fn current(&self) -> Option<State> {
        self.current
    }

    /// Transitions the strip to `target`.
    ///
    /// Returns after the previous animation loop has terminated and the new
    /// one has been started ([`State::Cleared`] blanks the strip instead of
    /// starting a loop). Requesting the current state again restarts its
    /// animation from frame zero.
    pub async fn request(&mut self, target: State) -> Result<()> {
        let mut strip = self.reclaim().await?;
        match self.config.style(target) {
            Some(style) => {
                let style = style.clone();
                let cancel = CancellationToken::new();
                let task = task::spawn(animation::run(style, strip, cancel.clone()));
                self.active = Some(AnimationHandle { state: target, cancel, task });
            }
            None => {
                let outcome = clear(&mut strip);
                self.parked = Some(strip);
                outcome.wrap_err("failed to blank the strip")?;
            }
        }
        self.current = Some(target);
        Ok(())
    }

    /// Cancels any active animation loop, waits for its termination, and
    /// hands the strip back to the caller. The strip keeps whatever frame
    /// was rendered last; blank it beforehand with
    /// [`request`](Self::request)`(State::Cleared)` if desired.
    pub async fn shutdown(mut self) -> Result<S> {
        self.reclaim().await
    }

    /// Stops the active loop, if any, and takes the strip back.
    ///
    /// This is the hard synchronization point of every transition: the old
    /// loop's cancellation strictly precedes the next write to the strip. A
    /// hardware error that terminated the old loop is logged here; the only
    /// recovery path is the very transition being performed.
    ///
    /// A panicked animation task drops the strip with it. Every transition
    /// after that reports the loss as an error instead of panicking in turn.
    async fn reclaim(&mut self) -> Result<S> {
        if let Some(AnimationHandle { state, cancel, task }) = self.active.take() {
            cancel.cancel();
            let (strip, outcome) = task
                .await
                .wrap_err_with(|| format!("{state:?} animation task panicked"))?;
            if let Err(err) = outcome {
                log::warn!("{state:?} animation terminated with a hardware error: {err}");
            }
            Ok(strip)
        } else {
            self.parked
                .take()
                .ok_or_else(|| eyre!("the strip was lost to a panicked animation task"))
        }
    }
}
