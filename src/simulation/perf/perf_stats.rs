use wasm_bindgen::prelude::*;

/// Snapshot of the last step. Zeros while perf metrics are off.
#[wasm_bindgen]
#[derive(Clone, Debug, Default)]
pub struct PerfStats {
    pub(super) step_ms: f64,
    pub(super) physics_ms: f64,
    pub(super) frame: u32,
    pub(super) body_count: u32,
    pub(super) collider_count: u32,
    pub(super) joint_count: u32,
    pub(super) active_drags: u32,
}

impl PerfStats {
    pub(crate) fn reset(&mut self) {
        *self = PerfStats::default();
    }
}

#[wasm_bindgen]
impl PerfStats {
    #[wasm_bindgen(getter)]
    pub fn step_ms(&self) -> f64 { self.step_ms }
    #[wasm_bindgen(getter)]
    pub fn physics_ms(&self) -> f64 { self.physics_ms }
    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u32 { self.frame }
    #[wasm_bindgen(getter)]
    pub fn body_count(&self) -> u32 { self.body_count }
    #[wasm_bindgen(getter)]
    pub fn collider_count(&self) -> u32 { self.collider_count }
    #[wasm_bindgen(getter)]
    pub fn joint_count(&self) -> u32 { self.joint_count }
    #[wasm_bindgen(getter)]
    pub fn active_drags(&self) -> u32 { self.active_drags }
}
