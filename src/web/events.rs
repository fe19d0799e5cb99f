use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::convert::FromWasmAbi;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{AddEventListenerOptions, Event, EventTarget, MouseEvent, TouchEvent};

use crate::domain::entity::EntityId;
use crate::domain::input::{InputMode, PointerId, PointerSample};

use super::App;

/// `MouseEvent.button` of the primary button.
const PRIMARY_BUTTON: i16 = 0;

/// Wire pointer listeners for every mounted element.
///
/// `window` receives move/up/blur, `document` gets the scroll blocker. In
/// the page these are the real window and document; any pair of targets
/// works.
pub fn attach_input(window: &EventTarget, document: &EventTarget, app: &Rc<RefCell<App>>) -> Result<(), JsValue> {
    let mode = app.borrow().sim.input_mode();
    let elements: Vec<_> = app
        .borrow()
        .stage
        .elements()
        .map(|(id, el)| (id, el.clone()))
        .collect();

    for (id, el) in &elements {
        match mode {
            InputMode::Pointer => attach_mouse_down(el, *id, app)?,
            InputMode::MultiTouch => attach_touch_start(el, *id, app)?,
        }
    }

    match mode {
        InputMode::Pointer => attach_mouse_tracking(window, app)?,
        InputMode::MultiTouch => attach_touch_tracking(window, document, app)?,
    }

    // Released buttons are never reported to a blurred window.
    let st = app.clone();
    listen(window, "blur", move |_e: Event| {
        st.borrow_mut().sim.release_all_pointers();
    })?;

    log::info!("{mode:?} listeners on {} elements", elements.len());
    Ok(())
}

/// Register a page-lifetime listener.
fn listen<E, F>(target: &EventTarget, name: &str, handler: F) -> Result<(), JsValue>
where
    E: FromWasmAbi + 'static,
    F: FnMut(E) + 'static,
{
    let closure = Closure::<dyn FnMut(E)>::wrap(Box::new(handler));
    target.add_event_listener_with_callback(name, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Page coordinates of a mouse event.
pub fn mouse_sample(e: &MouseEvent) -> PointerSample {
    PointerSample::new(PointerId::Mouse, e.page_x() as f32, e.page_y() as f32)
}

/// Every touch that changed in this event, keyed by `Touch.identifier`.
pub fn touch_samples(e: &TouchEvent) -> Vec<PointerSample> {
    let list = e.changed_touches();
    (0..list.length())
        .filter_map(|i| list.get(i))
        .map(|t| {
            PointerSample::new(
                PointerId::Touch(t.identifier()),
                t.page_x() as f32,
                t.page_y() as f32,
            )
        })
        .collect()
}

fn attach_mouse_down(el: &EventTarget, id: EntityId, app: &Rc<RefCell<App>>) -> Result<(), JsValue> {
    let st = app.clone();
    listen(el, "mousedown", move |e: MouseEvent| {
        if e.button() != PRIMARY_BUTTON {
            return;
        }
        e.prevent_default();
        let p = mouse_sample(&e);
        st.borrow_mut().sim.pointer_down(p.pointer, id, p.x, p.y);
    })
}

fn attach_touch_start(el: &EventTarget, id: EntityId, app: &Rc<RefCell<App>>) -> Result<(), JsValue> {
    let st = app.clone();
    listen(el, "touchstart", move |e: TouchEvent| {
        e.prevent_default();
        // A touchstart on this element grabs it with its first new touch.
        if let Some(p) = touch_samples(&e).first() {
            st.borrow_mut().sim.pointer_down(p.pointer, id, p.x, p.y);
        }
    })
}

fn attach_mouse_tracking(window: &EventTarget, app: &Rc<RefCell<App>>) -> Result<(), JsValue> {
    let st = app.clone();
    listen(window, "mousemove", move |e: MouseEvent| {
        let p = mouse_sample(&e);
        st.borrow_mut().sim.pointer_move(p.pointer, p.x, p.y);
    })?;

    let st = app.clone();
    listen(window, "mouseup", move |_e: MouseEvent| {
        st.borrow_mut().sim.pointer_up(PointerId::Mouse);
    })
}

fn attach_touch_tracking(window: &EventTarget, document: &EventTarget, app: &Rc<RefCell<App>>) -> Result<(), JsValue> {
    let st = app.clone();
    listen(window, "touchmove", move |e: TouchEvent| {
        let mut app = st.borrow_mut();
        for p in touch_samples(&e) {
            app.sim.pointer_move(p.pointer, p.x, p.y);
        }
    })?;

    for name in ["touchend", "touchcancel"] {
        let st = app.clone();
        listen(window, name, move |e: TouchEvent| {
            e.prevent_default();
            let mut app = st.borrow_mut();
            for p in touch_samples(&e) {
                app.sim.pointer_up(p.pointer);
            }
        })?;
    }

    // Page scrolling would steal the gesture. Needs a non-passive listener
    // or preventDefault is ignored.
    let no_scroll = Closure::<dyn FnMut(Event)>::wrap(Box::new(|e: Event| e.prevent_default()));
    let options = AddEventListenerOptions::new();
    options.set_passive(false);
    document.add_event_listener_with_callback_and_add_event_listener_options(
        "touchmove",
        no_scroll.as_ref().unchecked_ref(),
        &options,
    )?;
    no_scroll.forget();
    Ok(())
}
