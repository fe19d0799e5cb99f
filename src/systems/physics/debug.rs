use rapier2d::pipeline::{DebugRenderBackend, DebugRenderMode, DebugRenderPipeline, DebugRenderStyle};

use super::PhysicsWorld;

/// The engine's own debug visualization, restricted to collider outlines
/// and joints. Output goes to whatever backend the host provides.
pub struct DebugLayer {
    pipeline: DebugRenderPipeline,
}

impl DebugLayer {
    pub fn new() -> Self {
        Self {
            pipeline: DebugRenderPipeline::new(
                DebugRenderStyle::default(),
                DebugRenderMode::COLLIDER_SHAPES | DebugRenderMode::JOINTS,
            ),
        }
    }

    pub fn draw(&mut self, physics: &PhysicsWorld, backend: &mut impl DebugRenderBackend) {
        physics.debug_render(&mut self.pipeline, backend);
    }
}

impl Default for DebugLayer {
    fn default() -> Self {
        Self::new()
    }
}
