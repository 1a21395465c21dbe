//! Timed round-robin over a list of animations

use embassy_time::{Duration, Instant};
use heapless::Vec;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use super::Animation;
use crate::canvas::FrameContext;

/// Cycles through borrowed animations, staying on each for a fixed dwell time
///
/// The list is never empty and the cursor always points at a valid child.
/// A child is initialized exactly once each time it becomes current.
pub struct RotatingCollection<'a, const N: usize, const CAP: usize> {
    children: Vec<&'a mut dyn Animation<N>, CAP>,
    dwell: Duration,
    cursor: usize,
    /// Deadline of the next switch, armed by `init()` or the first `run()`
    next_switch: Option<Instant>,
}

impl<'a, const N: usize, const CAP: usize> RotatingCollection<'a, N, CAP> {
    /// Create a collection starting at `first`
    ///
    /// `CAP` must be at least 1.
    pub fn new(dwell: Duration, first: &'a mut dyn Animation<N>) -> Self {
        let mut children = Vec::new();
        // A zero capacity collection keeps its invariant by never running a child.
        let _ = children.push(first);
        Self {
            children,
            dwell,
            cursor: 0,
            next_switch: None,
        }
    }

    /// Append an animation to the rotation
    ///
    /// Hands the animation back if the collection is full.
    pub fn push(
        &mut self,
        animation: &'a mut dyn Animation<N>,
    ) -> Result<(), &'a mut dyn Animation<N>> {
        self.children.push(animation)
    }

    /// Builder form of [`RotatingCollection::push`], dropping overflow
    #[must_use]
    pub fn with(mut self, animation: &'a mut dyn Animation<N>) -> Self {
        let _ = self.push(animation);
        self
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Index of the current child
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    pub const fn dwell(&self) -> Duration {
        self.dwell
    }

    fn advance(&mut self, ctx: &mut FrameContext<'_, N>) {
        self.cursor = (self.cursor + 1) % self.children.len();
        #[cfg(feature = "esp32-log")]
        println!(
            "[RotatingCollection.advance] switching to animation {}",
            self.cursor
        );
        if let Some(child) = self.children.get_mut(self.cursor) {
            child.init(ctx);
        }
    }
}

impl<const N: usize, const CAP: usize> Animation<N> for RotatingCollection<'_, N, CAP> {
    fn init(&mut self, ctx: &mut FrameContext<'_, N>) {
        if let Some(child) = self.children.get_mut(self.cursor) {
            child.init(ctx);
        }
        self.next_switch = Some(ctx.now + self.dwell);
    }

    fn run(&mut self, ctx: &mut FrameContext<'_, N>) -> Duration {
        if self.children.is_empty() {
            return self.dwell;
        }

        match self.next_switch {
            Some(deadline) if ctx.now > deadline => {
                self.advance(ctx);
                self.next_switch = Some(ctx.now + self.dwell);
            }
            Some(_) => {}
            None => self.next_switch = Some(ctx.now + self.dwell),
        }

        match self.children.get_mut(self.cursor) {
            Some(child) => child.run(ctx),
            None => self.dwell,
        }
    }
}
