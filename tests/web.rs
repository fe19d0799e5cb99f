#![cfg(target_arch = "wasm32")]

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{
    Event, EventInit, EventTarget, HtmlElement, MouseEvent, MouseEventInit, Touch, TouchEvent,
    TouchEventInit, TouchInit,
};

use tumblebox::core::Viewport;
use tumblebox::web::{attach_input, mouse_sample, start_frame_loop, touch_samples, App, DomStage, FrameScheduler};
use tumblebox::{Demo, DemoConfig, EntityId, InputMode, PointerId, Simulation};

wasm_bindgen_test_configure!(run_in_browser);

fn scratch_parent() -> (web_sys::Document, HtmlElement) {
    let document = web_sys::window().unwrap().document().unwrap();
    let parent = document
        .create_element("div")
        .unwrap()
        .dyn_into::<HtmlElement>()
        .unwrap();
    document.body().unwrap().append_child(&parent).unwrap();
    (document, parent)
}

#[wasm_bindgen_test]
fn dom_stage_mounts_one_div_per_entity() {
    let (document, parent) = scratch_parent();
    let config = DemoConfig {
        entity_count: 3,
        ..DemoConfig::default()
    };
    let mut sim = Simulation::new(config, Viewport::new(800.0, 600.0), InputMode::Pointer).unwrap();
    let mut stage = DomStage::with_parent(&document, parent.clone());

    sim.spawn_entities(&mut stage).unwrap();
    assert_eq!(parent.child_element_count(), 3);

    let el = stage.element(EntityId(1)).unwrap();
    assert_eq!(el.get_attribute("data-entity").as_deref(), Some("1"));
    assert_eq!(el.style().get_property_value("position").unwrap(), "absolute");
}

#[wasm_bindgen_test]
fn dom_stage_places_elements_each_tick() {
    let (document, parent) = scratch_parent();
    let config = DemoConfig {
        entity_count: 1,
        ..DemoConfig::default()
    };
    let mut sim = Simulation::new(config, Viewport::new(800.0, 600.0), InputMode::Pointer).unwrap();
    let mut stage = DomStage::with_parent(&document, parent);
    sim.spawn_entities(&mut stage).unwrap();

    sim.tick(&mut stage).unwrap();

    let style = stage.element(EntityId(0)).unwrap().style();
    assert!(style.get_property_value("left").unwrap().ends_with("px"));
    assert!(style.get_property_value("transform").unwrap().starts_with("rotate("));
}

#[wasm_bindgen_test]
fn bad_config_is_rejected() {
    assert!(Demo::with_config(r#"{"scale": 0}"#, 800.0, 600.0, false).is_err());
    assert!(Demo::with_config("not json", 800.0, 600.0, false).is_err());
}

/// Demo wired to scratch targets: `win` stands in for the window and `doc`
/// for the document.
struct Wired {
    app: Rc<RefCell<App>>,
    win: HtmlElement,
    doc: HtmlElement,
}

impl Wired {
    fn new(entity_count: u32, mode: InputMode) -> Wired {
        let (document, parent) = scratch_parent();
        let (_, win) = scratch_parent();
        let (_, doc) = scratch_parent();
        let config = DemoConfig {
            entity_count,
            seed: Some(3),
            ..DemoConfig::default()
        };
        let mut sim = Simulation::new(config, Viewport::new(800.0, 600.0), mode).unwrap();
        let mut stage = DomStage::with_parent(&document, parent);
        sim.spawn_entities(&mut stage).unwrap();

        let app = Rc::new(RefCell::new(App::new(sim, stage, None)));
        attach_input(&win, &doc, &app).unwrap();
        Wired { app, win, doc }
    }

    fn element(&self, id: u32) -> HtmlElement {
        self.app.borrow().stage().element(EntityId(id)).unwrap().clone()
    }

    fn joints(&self) -> usize {
        self.app.borrow().sim().active_joint_count()
    }

    fn dragged(&self) -> Vec<(PointerId, EntityId)> {
        let app = self.app.borrow();
        app.sim().drag().joints().iter().map(|j| (j.pointer, j.entity)).collect()
    }
}

fn mouse(kind: &str, x: i32, y: i32, button: i16) -> MouseEvent {
    let init = MouseEventInit::new();
    init.set_bubbles(true);
    init.set_cancelable(true);
    init.set_client_x(x);
    init.set_client_y(y);
    init.set_button(button);
    MouseEvent::new_with_mouse_event_init_dict(kind, &init).unwrap()
}

/// `None` where the browser has no Touch constructor.
fn touch(kind: &str, target: &EventTarget, identifier: i32, x: f64, y: f64) -> Option<TouchEvent> {
    let init = TouchInit::new(identifier, target);
    init.set_client_x(x);
    init.set_client_y(y);
    init.set_page_x(x);
    init.set_page_y(y);
    let touch = Touch::new(&init).ok()?;

    let event = TouchEventInit::new();
    event.set_bubbles(true);
    event.set_cancelable(true);
    event.set_changed_touches(&js_sys::Array::of1(&touch));
    TouchEvent::new_with_event_init_dict(kind, &event).ok()
}

async fn sleep(ms: i32) {
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        web_sys::window()
            .unwrap()
            .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms)
            .unwrap();
    });
    wasm_bindgen_futures::JsFuture::from(promise).await.unwrap();
}

#[wasm_bindgen_test]
fn mouse_sample_reads_page_coordinates() {
    let window = web_sys::window().unwrap();
    let e = mouse("mousemove", 30, 40, 0);
    let p = mouse_sample(&e);

    assert_eq!(p.pointer, PointerId::Mouse);
    assert_eq!(p.x, (30.0 + window.scroll_x().unwrap()) as f32);
    assert_eq!(p.y, (40.0 + window.scroll_y().unwrap()) as f32);
}

#[wasm_bindgen_test]
fn touch_samples_key_by_identifier() {
    let (_, target) = scratch_parent();
    let Some(e) = touch("touchmove", &target, 7, 12.0, 34.0) else {
        return;
    };
    let samples = touch_samples(&e);

    assert_eq!(samples.len(), 1);
    assert_eq!(samples[0].pointer, PointerId::Touch(7));
    assert_eq!((samples[0].x, samples[0].y), (12.0, 34.0));
}

#[wasm_bindgen_test]
fn mousedown_on_a_box_drags_that_entity() {
    let wired = Wired::new(3, InputMode::Pointer);

    let down = mouse("mousedown", 100, 80, 0);
    wired.element(2).dispatch_event(&down).unwrap();
    assert!(down.default_prevented());
    assert_eq!(wired.dragged(), vec![(PointerId::Mouse, EntityId(2))]);

    wired.win.dispatch_event(&mouse("mousemove", 300, 80, 0)).unwrap();
    assert_eq!(wired.joints(), 1);

    wired.win.dispatch_event(&mouse("mouseup", 300, 80, 0)).unwrap();
    assert_eq!(wired.joints(), 0);
}

#[wasm_bindgen_test]
fn only_the_primary_button_starts_a_drag() {
    let wired = Wired::new(1, InputMode::Pointer);

    for button in [1, 2] {
        let down = mouse("mousedown", 10, 10, button);
        wired.element(0).dispatch_event(&down).unwrap();
        assert!(!down.default_prevented());
    }
    assert_eq!(wired.joints(), 0);
}

#[wasm_bindgen_test]
fn blur_releases_every_drag() {
    let wired = Wired::new(2, InputMode::Pointer);
    wired.element(0).dispatch_event(&mouse("mousedown", 10, 10, 0)).unwrap();
    assert_eq!(wired.joints(), 1);

    wired.win.dispatch_event(&Event::new("blur").unwrap()).unwrap();
    assert_eq!(wired.joints(), 0);
}

#[wasm_bindgen_test]
fn touch_end_and_cancel_release_their_own_identifier() {
    let wired = Wired::new(2, InputMode::MultiTouch);
    let (first, second) = (wired.element(0), wired.element(1));
    let (Some(start_a), Some(start_b)) = (
        touch("touchstart", &first, 5, 10.0, 10.0),
        touch("touchstart", &second, 9, 50.0, 10.0),
    ) else {
        return;
    };

    first.dispatch_event(&start_a).unwrap();
    second.dispatch_event(&start_b).unwrap();
    assert_eq!(wired.joints(), 2);

    let end = touch("touchend", &first, 5, 10.0, 10.0).unwrap();
    wired.win.dispatch_event(&end).unwrap();
    assert_eq!(wired.dragged(), vec![(PointerId::Touch(9), EntityId(1))]);

    let cancel = touch("touchcancel", &second, 9, 50.0, 10.0).unwrap();
    wired.win.dispatch_event(&cancel).unwrap();
    assert_eq!(wired.joints(), 0);
}

#[wasm_bindgen_test]
fn document_touchmove_cannot_scroll() {
    let wired = Wired::new(1, InputMode::MultiTouch);

    let init = EventInit::new();
    init.set_cancelable(true);
    let e = Event::new_with_event_init_dict("touchmove", &init).unwrap();

    assert!(!wired.doc.dispatch_event(&e).unwrap());
    assert!(e.default_prevented());
}

#[wasm_bindgen_test]
fn scheduler_falls_back_without_animation_frame() {
    let window = web_sys::window().unwrap();
    assert_eq!(FrameScheduler::detect(&window), FrameScheduler::AnimationFrame);
    assert_eq!(FrameScheduler::detect(&js_sys::Object::new()), FrameScheduler::Timeout);
}

#[wasm_bindgen_test]
async fn timeout_frame_loop_keeps_stepping() {
    let wired = Wired::new(1, InputMode::Pointer);
    let window = web_sys::window().unwrap();

    start_frame_loop(&window, wired.app.clone(), FrameScheduler::Timeout).unwrap();
    sleep(200).await;

    assert!(wired.app.borrow().sim().frame() > 0);
}
