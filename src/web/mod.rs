//! Browser host
//!
//! `run()` reads the window size, spawns boxes as absolutely positioned
//! divs, wires mouse or touch listeners and starts the frame loop. All
//! callbacks share one `Rc<RefCell<App>>` and borrow it only for the length
//! of the callback.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::{Document, Window};

use crate::core::units::Viewport;
use crate::domain::config::DemoConfig;
use crate::domain::input::InputMode;
use crate::simulation::Simulation;

mod events;
mod frame_loop;
mod overlay;
mod stage;

pub use events::{attach_input, mouse_sample, touch_samples};
pub use frame_loop::{start_frame_loop, FrameScheduler};
pub use overlay::{css_hsla, CanvasBackend, DebugOverlay};
pub use stage::DomStage;

/// Everything the page-lifetime closures share.
pub struct App {
    sim: Simulation,
    stage: DomStage,
    overlay: Option<DebugOverlay>,
}

impl App {
    /// `sim` should already have spawned its entities into `stage`.
    pub fn new(sim: Simulation, stage: DomStage, overlay: Option<DebugOverlay>) -> Self {
        App { sim, stage, overlay }
    }

    pub fn sim(&self) -> &Simulation {
        &self.sim
    }

    pub fn stage(&self) -> &DomStage {
        &self.stage
    }

    /// Step, write element styles, redraw the overlay.
    pub fn frame(&mut self) {
        if let Err(err) = self.sim.tick(&mut self.stage) {
            log::error!("render failed: {err}");
        }
        if let Some(overlay) = self.overlay.as_mut() {
            overlay.draw(&self.sim);
        }
    }
}

/// Start the demo with the built-in settings.
#[wasm_bindgen]
pub fn run() -> Result<(), JsValue> {
    start(DemoConfig::default())
}

/// Start the demo with a JSON config; omitted fields keep their defaults.
#[wasm_bindgen]
pub fn run_with_config(json: &str) -> Result<(), JsValue> {
    let config = DemoConfig::from_json(json).map_err(|e| JsValue::from_str(&e))?;
    start(config)
}

fn start(config: DemoConfig) -> Result<(), JsValue> {
    crate::init();

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("window has no document"))?;

    let viewport = read_viewport(&window)?;
    let mode = InputMode::from_touch_support(has_touch(&document));

    let mut sim = Simulation::new(config, viewport, mode).map_err(|e| JsValue::from_str(&e))?;
    let mut stage = DomStage::new(&document)?;
    sim.spawn_entities(&mut stage)
        .map_err(|e| JsValue::from_str(&e))?;

    let overlay = if sim.config().debug_draw {
        Some(DebugOverlay::new(
            &document,
            viewport,
            sim.scale(),
            sim.config().debug_fill_alpha,
        )?)
    } else {
        None
    };

    let app = Rc::new(RefCell::new(App::new(sim, stage, overlay)));
    attach_input(&window, &document, &app)?;
    start_frame_loop(&window, app, FrameScheduler::detect(&window))
}

fn read_viewport(window: &Window) -> Result<Viewport, JsValue> {
    let width = window.inner_width()?.as_f64().unwrap_or(0.0);
    let height = window.inner_height()?.as_f64().unwrap_or(0.0);
    Ok(Viewport::new(width as f32, height as f32))
}

/// `'ontouchstart' in document.documentElement`
fn has_touch(document: &Document) -> bool {
    document
        .document_element()
        .map(|el| js_sys::Reflect::has(&el, &JsValue::from_str("ontouchstart")).unwrap_or(false))
        .unwrap_or(false)
}

/// Best-effort text for a DOM error.
pub(crate) fn js_error_text(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}
