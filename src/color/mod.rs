mod heat;
mod utils;

pub use heat::heat_color;
use smart_leds::{RGB8, hsv::Hsv as HSV};
pub use utils::{
    BLACK, GRAY, WHITE, add_colors, blend_colors, fill_rainbow, hsv, hsv2rgb,
    rgb_from_u32, scale_color,
};

pub type Rgb = RGB8;
pub type Hsv = HSV;
