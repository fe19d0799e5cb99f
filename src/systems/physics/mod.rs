//! PhysicsWorld - owned wrapper around the rapier2d sets and pipeline
//!
//! The engine does all collision detection, solving and integration. This
//! module only exposes the handful of operations the demo needs:
//! - static and dynamic box creation
//! - fixed-step advance + force clearing
//! - drag joints (create / retarget / destroy)
//! - debug-render traversal

mod debug;
mod joints;
mod world;

pub use debug::DebugLayer;
pub use joints::DragJointSpec;
pub use world::{BoxBodyDesc, Material, PhysicsWorld};
