//! Core helpers shared by every layer.

pub mod random;
pub mod units;

pub use random::DemoRng;
pub use units::{PixelScale, Viewport};
