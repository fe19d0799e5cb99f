//! Tumblebox - falling, draggable boxes in WASM
//!
//! DOM elements are driven by a 2D rigid-body world (rapier2d). This crate
//! only configures the world, links elements to bodies and copies
//! transforms back every frame.
//!
//! Architecture:
//! - core/        - Units and randomness
//! - domain/      - Config, entities, input abstraction
//! - systems/     - Physics adapter and drag controller
//! - simulation/  - Owned simulation context (bootstrap, spawn, step)
//! - render/      - Stage seam between simulation and visuals
//! - web/         - Browser host (DOM stage, listeners, frame loop, overlay)

pub mod core;
pub mod domain;
pub mod systems;
pub mod simulation;
pub mod render;
pub mod web;

use wasm_bindgen::prelude::*;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize panic hook and console logging.
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    #[cfg(target_arch = "wasm32")]
    {
        // A second call only fails because the logger is already set.
        let _ = console_log::init_with_level(log::Level::Info);
        web_sys::console::log_1(&"📦 Tumblebox WASM initialized!".into());
    }
}

/// Get crate version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use domain::config::DemoConfig;
pub use domain::entity::{BoxColor, Entity, EntityId};
pub use domain::input::{InputMode, PointerId};
pub use render::{HeadlessStage, ScreenTransform, Stage};
pub use simulation::{Demo, PerfStats, Simulation};
pub use web::{run, run_with_config};
