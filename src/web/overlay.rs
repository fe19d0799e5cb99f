use rapier2d::pipeline::{DebugRenderBackend, DebugRenderObject};
use rapier2d::prelude::{Point, Real};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement};

use crate::core::units::{PixelScale, Viewport};
use crate::simulation::Simulation;
use crate::systems::physics::DebugLayer;

/// `canvas.debug-canvas` over the viewport showing collider outlines and
/// drag joints.
pub struct DebugOverlay {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    layer: DebugLayer,
    scale: PixelScale,
    alpha: f32,
}

impl DebugOverlay {
    pub fn new(document: &Document, viewport: Viewport, scale: PixelScale, alpha: f32) -> Result<Self, JsValue> {
        let canvas = document
            .create_element("canvas")?
            .dyn_into::<HtmlCanvasElement>()?;
        canvas.set_class_name("debug-canvas");
        canvas.set_width(viewport.width.max(0.0) as u32);
        canvas.set_height(viewport.height.max(0.0) as u32);
        document
            .body()
            .ok_or_else(|| JsValue::from_str("document has no body"))?
            .append_child(&canvas)?;

        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2D context not available"))?
            .dyn_into::<CanvasRenderingContext2d>()?;

        log::info!("debug overlay on");
        Ok(Self {
            canvas,
            ctx,
            layer: DebugLayer::new(),
            scale,
            alpha,
        })
    }

    pub fn draw(&mut self, sim: &Simulation) {
        let (w, h) = (self.canvas.width() as f64, self.canvas.height() as f64);
        self.ctx.clear_rect(0.0, 0.0, w, h);
        self.ctx.set_line_width(1.0);

        let mut backend = CanvasBackend {
            ctx: &self.ctx,
            scale: self.scale,
            alpha: self.alpha,
        };
        sim.debug_draw(&mut self.layer, &mut backend);
    }
}

/// Strokes rapier's debug lines onto a 2D context, in pixels.
pub struct CanvasBackend<'a> {
    ctx: &'a CanvasRenderingContext2d,
    scale: PixelScale,
    alpha: f32,
}

impl DebugRenderBackend for CanvasBackend<'_> {
    fn draw_line(&mut self, _object: DebugRenderObject, a: Point<Real>, b: Point<Real>, color: [f32; 4]) {
        let px = |v: Real| self.scale.to_pixels(v) as f64;
        self.ctx.set_stroke_style_str(&css_hsla(color, self.alpha));
        self.ctx.begin_path();
        self.ctx.move_to(px(a.x), px(a.y));
        self.ctx.line_to(px(b.x), px(b.y));
        self.ctx.stroke();
    }
}

/// rapier debug colors are `[hue°, saturation, lightness, alpha]`.
pub fn css_hsla(color: [f32; 4], alpha: f32) -> String {
    let [h, s, l, a] = color;
    format!(
        "hsla({}, {}%, {}%, {})",
        h,
        s * 100.0,
        l * 100.0,
        (a * alpha).clamp(0.0, 1.0)
    )
}
