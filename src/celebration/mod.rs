//! Confetti celebration for the party theme.
//!
//! The effect listens for viewport changes through a [`watch`] receiver
//! taken when it is mounted. Dropping the effect drops the receiver, so
//! the listener lives exactly as long as the effect.

mod confetti;
mod viewport;

pub use confetti::{Confetti, ConfettiConfig, Particle, Positioning};
pub use viewport::Viewport;

use crate::games::tictactoe::Outcome;
use crate::tui::BoardLayout;
use rand::{SeedableRng, rngs::StdRng};
use ratatui::layout::Rect;
use tokio::sync::watch;
use tracing::{debug, info, instrument};

/// Transient confetti shown when a game is won.
#[derive(Debug)]
pub struct CelebrationEffect {
    viewport: watch::Receiver<Viewport>,
    template: ConfettiConfig,
    confetti: Option<Confetti>,
    celebrated: bool,
    rng: StdRng,
}

impl CelebrationEffect {
    /// Mounts the effect, subscribing to viewport updates.
    #[instrument(skip_all)]
    pub fn mount(viewport: &watch::Sender<Viewport>, template: ConfettiConfig) -> Self {
        Self::mount_with_rng(viewport, template, StdRng::from_os_rng())
    }

    /// Mounts the effect with a caller-supplied random source.
    #[instrument(skip_all)]
    pub fn mount_with_rng(
        viewport: &watch::Sender<Viewport>,
        template: ConfettiConfig,
        rng: StdRng,
    ) -> Self {
        info!(listeners = viewport.receiver_count() + 1, "Mounting celebration");
        Self {
            viewport: viewport.subscribe(),
            template,
            confetti: None,
            celebrated: false,
            rng,
        }
    }

    /// Reacts to the current outcome.
    ///
    /// A burst starts on the transition into a win. Draws never celebrate.
    /// Returning to an undecided game clears any confetti still falling.
    #[instrument(skip(self))]
    pub fn observe(&mut self, outcome: &Outcome) {
        match outcome {
            Outcome::Winner(mark) if !self.celebrated => {
                let size = *self.viewport.borrow_and_update();
                let field = self.field_for(size);
                info!(?mark, width = field.width, height = field.height, "Starting celebration");
                let config = self
                    .template
                    .clone()
                    .with_width(field.width)
                    .with_height(field.height)
                    .with_recycle(false);
                self.confetti = Some(Confetti::burst(config, &mut self.rng));
                self.celebrated = true;
            }
            Outcome::Winner(_) => {}
            Outcome::Draw => {}
            Outcome::InProgress { .. } => {
                if self.celebrated || self.confetti.is_some() {
                    debug!("Game undecided again, clearing celebration");
                }
                self.confetti = None;
                self.celebrated = false;
            }
        }
    }

    /// Applies viewport changes and advances the confetti one tick.
    #[instrument(level = "trace", skip(self))]
    pub fn tick(&mut self) {
        if self.viewport.has_changed().unwrap_or(false) {
            let size = *self.viewport.borrow_and_update();
            let field = self.field_for(size);
            debug!(width = size.width, height = size.height, "Viewport resized");
            if let Some(confetti) = self.confetti.as_mut() {
                confetti.resize(field.width, field.height);
            }
        }

        let finished = match self.confetti.as_mut() {
            Some(confetti) => {
                confetti.step(&mut self.rng);
                confetti.is_finished()
            }
            None => false,
        };
        if finished {
            debug!("Celebration finished");
            self.confetti = None;
        }
    }

    /// True while confetti is on screen.
    pub fn is_playing(&self) -> bool {
        self.confetti.is_some()
    }

    /// The running confetti, if any.
    pub fn confetti(&self) -> Option<&Confetti> {
        self.confetti.as_ref()
    }

    /// Region the confetti is drawn in.
    pub fn positioning(&self) -> Positioning {
        *self.template.positioning()
    }

    /// Latest viewport seen by the listener.
    pub fn viewport(&self) -> Viewport {
        *self.viewport.borrow()
    }

    /// Screen rect the confetti falls through, for the latest viewport.
    pub fn field(&self) -> Rect {
        self.field_for(self.viewport())
    }

    fn field_for(&self, viewport: Viewport) -> Rect {
        match self.positioning() {
            Positioning::Fixed => viewport.area(),
            Positioning::Absolute => BoardLayout::compute(viewport.area()).panel,
        }
    }
}

impl Drop for CelebrationEffect {
    fn drop(&mut self) {
        debug!("Unmounting celebration, releasing resize listener");
    }
}
