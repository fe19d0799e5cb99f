use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Window;

use super::App;

/// setTimeout delay when requestAnimationFrame is missing.
const FALLBACK_FRAME_MS: i32 = 1000 / 60;

type FrameClosure = Closure<dyn FnMut()>;

/// How the next frame gets requested.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameScheduler {
    AnimationFrame,
    /// `setTimeout` at roughly 60 Hz.
    Timeout,
}

impl FrameScheduler {
    /// `AnimationFrame` when `host` has a `requestAnimationFrame` member.
    pub fn detect(host: &JsValue) -> Self {
        let has_raf = js_sys::Reflect::has(host, &JsValue::from_str("requestAnimationFrame"))
            .unwrap_or(false);
        if has_raf {
            FrameScheduler::AnimationFrame
        } else {
            FrameScheduler::Timeout
        }
    }

    fn schedule(self, window: &Window, cb: &FrameClosure) -> Result<(), JsValue> {
        match self {
            FrameScheduler::AnimationFrame => {
                window.request_animation_frame(cb.as_ref().unchecked_ref())?;
            }
            FrameScheduler::Timeout => {
                window.set_timeout_with_callback_and_timeout_and_arguments_0(
                    cb.as_ref().unchecked_ref(),
                    FALLBACK_FRAME_MS,
                )?;
            }
        }
        Ok(())
    }
}

/// Run `App::frame` once per scheduled frame for the page's lifetime.
pub fn start_frame_loop(window: &Window, app: Rc<RefCell<App>>, scheduler: FrameScheduler) -> Result<(), JsValue> {
    if scheduler == FrameScheduler::Timeout {
        log::warn!("requestAnimationFrame unavailable, falling back to setTimeout");
    }

    // The closure reschedules itself through `f`; the cycle keeps it alive.
    let f: Rc<RefCell<Option<FrameClosure>>> = Rc::new(RefCell::new(None));
    let g = f.clone();
    let win = window.clone();
    *g.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        app.borrow_mut().frame();
        if let Some(next) = f.borrow().as_ref() {
            if let Err(err) = scheduler.schedule(&win, next) {
                log::error!("frame loop stopped: {}", super::js_error_text(&err));
            }
        }
    }) as Box<dyn FnMut()>));

    if let Some(first) = g.borrow().as_ref() {
        scheduler.schedule(window, first)?;
    }
    Ok(())
}
