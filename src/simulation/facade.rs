use wasm_bindgen::prelude::*;

use crate::core::units::Viewport;
use crate::domain::config::DemoConfig;
use crate::domain::entity::EntityId;
use crate::domain::input::{InputMode, PointerId};
use crate::render::HeadlessStage;

use super::perf_stats::PerfStats;
use super::Simulation;

/// JS-driven demo: the caller owns the frame loop and the visuals, and
/// reads transforms back after each `step`.
#[wasm_bindgen]
pub struct Demo {
    core: Simulation,
    stage: HeadlessStage,
}

fn pointer_id(touch_id: Option<i32>) -> PointerId {
    match touch_id {
        Some(id) => PointerId::Touch(id),
        None => PointerId::Mouse,
    }
}

impl Demo {
    fn build(config: DemoConfig, width: f32, height: f32, touch: bool) -> Result<Demo, String> {
        let mut core = Simulation::new(
            config,
            Viewport::new(width, height),
            InputMode::from_touch_support(touch),
        )?;
        let mut stage = HeadlessStage::new();
        core.spawn_entities(&mut stage)?;
        Ok(Demo { core, stage })
    }

    pub fn simulation(&self) -> &Simulation {
        &self.core
    }

    pub fn stage(&self) -> &HeadlessStage {
        &self.stage
    }
}

#[wasm_bindgen]
impl Demo {
    /// Default config, entities already spawned.
    #[wasm_bindgen(constructor)]
    pub fn new(width: f32, height: f32, touch: bool) -> Result<Demo, JsValue> {
        Demo::build(DemoConfig::default(), width, height, touch).map_err(|e| JsValue::from_str(&e))
    }

    #[wasm_bindgen(js_name = withConfig)]
    pub fn with_config(json: &str, width: f32, height: f32, touch: bool) -> Result<Demo, JsValue> {
        let config = DemoConfig::from_json(json).map_err(|e| JsValue::from_str(&e))?;
        Demo::build(config, width, height, touch).map_err(|e| JsValue::from_str(&e))
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> f32 { self.core.viewport().width }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> f32 { self.core.viewport().height }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.core.frame() }

    #[wasm_bindgen(getter)]
    pub fn entity_count(&self) -> u32 { self.core.entities().len() as u32 }

    #[wasm_bindgen(getter)]
    pub fn active_joint_count(&self) -> u32 { self.core.active_joint_count() as u32 }

    #[wasm_bindgen(getter)]
    pub fn multi_touch(&self) -> bool { self.core.input_mode().is_touch() }

    /// Advance one frame
    pub fn step(&mut self) -> Result<(), JsValue> {
        self.core
            .tick(&mut self.stage)
            .map_err(|e| JsValue::from_str(&e))
    }

    /// Start a drag. `touch_id` is the Touch.identifier, or undefined for
    /// the mouse.
    pub fn pointer_down(&mut self, entity: u32, x: f32, y: f32, touch_id: Option<i32>) -> bool {
        self.core
            .pointer_down(pointer_id(touch_id), EntityId(entity), x, y)
    }

    pub fn pointer_move(&mut self, x: f32, y: f32, touch_id: Option<i32>) -> u32 {
        self.core.pointer_move(pointer_id(touch_id), x, y) as u32
    }

    pub fn pointer_up(&mut self, touch_id: Option<i32>) -> u32 {
        self.core.pointer_up(pointer_id(touch_id)) as u32
    }

    pub fn release_all(&mut self) -> u32 {
        self.core.release_all_pointers() as u32
    }

    /// Flat `[id, left, top, angle]` per entity, pixels and radians.
    pub fn transforms(&self) -> Vec<f32> {
        let transforms = self.core.transforms();
        let mut out = Vec::with_capacity(transforms.len() * 4);
        for t in transforms {
            out.extend_from_slice(&[t.entity.0 as f32, t.left, t.top, t.angle]);
        }
        out
    }

    /// Edge length in pixels, 0 for unknown ids.
    pub fn entity_size(&self, entity: u32) -> u32 {
        self.core
            .entities()
            .get(EntityId(entity))
            .map_or(0, |e| e.size_px)
    }

    /// CSS color, e.g. `rgb(12, 200, 0)`.
    pub fn entity_color(&self, entity: u32) -> Option<String> {
        self.core
            .entities()
            .get(EntityId(entity))
            .map(|e| e.color.css())
    }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        self.core.perf_stats()
    }

    pub fn config_json(&self) -> String {
        self.core.config().to_json()
    }
}
