//! Day/night selection between two animations

use embassy_time::Duration;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use super::Animation;
use crate::canvas::FrameContext;

/// Runs one animation in darkness and another in daylight
///
/// The active child is re-initialized exactly once per darkness transition.
#[derive(Debug, Clone)]
pub struct DarknessSwitch<D, L> {
    in_darkness: D,
    in_daylight: L,
    /// Darkness state the active child was initialized for
    last_dark: bool,
}

impl<D, L> DarknessSwitch<D, L> {
    pub const fn new(in_darkness: D, in_daylight: L) -> Self {
        Self {
            in_darkness,
            in_daylight,
            last_dark: false,
        }
    }

    pub const fn in_darkness(&self) -> &D {
        &self.in_darkness
    }

    pub const fn in_daylight(&self) -> &L {
        &self.in_daylight
    }

    /// Darkness state of the active child
    pub const fn is_dark(&self) -> bool {
        self.last_dark
    }
}

impl<D, L> DarknessSwitch<D, L> {
    fn init_active<const N: usize>(&mut self, ctx: &mut FrameContext<'_, N>)
    where
        D: Animation<N>,
        L: Animation<N>,
    {
        if self.last_dark {
            self.in_darkness.init(ctx);
        } else {
            self.in_daylight.init(ctx);
        }
    }
}

impl<const N: usize, D: Animation<N>, L: Animation<N>> Animation<N> for DarknessSwitch<D, L> {
    fn init(&mut self, ctx: &mut FrameContext<'_, N>) {
        self.last_dark = ctx.ambient.is_dark();
        self.init_active(ctx);
    }

    fn run(&mut self, ctx: &mut FrameContext<'_, N>) -> Duration {
        let dark = ctx.ambient.is_dark();
        if dark != self.last_dark {
            #[cfg(feature = "esp32-log")]
            println!("[DarknessSwitch.run] darkness changed: {}", dark);
            self.last_dark = dark;
            self.init_active(ctx);
        }

        if self.last_dark {
            self.in_darkness.run(ctx)
        } else {
            self.in_daylight.run(ctx)
        }
    }
}
