//! Small per-frame simulations shared by the physics animations

mod gravity;
mod heat;

pub use gravity::{Dot, DotField, GravityFormula, STALL_LIMIT, SUBPIXELS};
pub use heat::{ALWAYS_SPARK, HeatField};
