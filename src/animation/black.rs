//! Fade whatever is on the strip down to black

use embassy_time::Duration;

use super::Animation;
use crate::canvas::FrameContext;

const FADE_AMOUNT: u8 = 20;
const FRAME_DELAY: Duration = Duration::from_millis(200);

/// Slowly fades the previous animation out and then idles on a dark strip
#[derive(Debug, Clone, Default)]
pub struct BlackAnimation;

impl<const N: usize> Animation<N> for BlackAnimation {
    fn run(&mut self, ctx: &mut FrameContext<'_, N>) -> Duration {
        ctx.canvas.fade_to_black_by(FADE_AMOUNT);
        FRAME_DELAY
    }
}
