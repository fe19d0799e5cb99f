pub mod drag;
pub mod physics;
