use tumblebox::core::Viewport;
use tumblebox::{Demo, DemoConfig, HeadlessStage, InputMode, Simulation};

fn init_logs() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn boxes_settle_inside_the_viewport() {
    init_logs();
    let mut sim = Simulation::new(
        DemoConfig::default(),
        Viewport::new(800.0, 600.0),
        InputMode::Pointer,
    )
    .unwrap();
    let mut stage = HeadlessStage::new();
    let ids = sim.spawn_entities(&mut stage).unwrap();
    assert_eq!(ids.len(), 20);

    for _ in 0..600 {
        sim.tick(&mut stage).unwrap();
    }

    for id in ids {
        let t = stage.last_transform(id).unwrap();
        assert!(t.top <= 600.0 && t.top > 0.0, "{id:?} top {}", t.top);
        assert!((0.0..=800.0).contains(&t.left), "{id:?} left {}", t.left);
    }
}

#[test]
fn demo_drag_follows_pointer_and_releases() {
    init_logs();
    let mut demo = Demo::with_config(r#"{"entity_count": 1}"#, 800.0, 600.0, false).unwrap();
    assert_eq!(demo.entity_count(), 1);

    let start = demo.transforms();
    assert_eq!(start.len(), 4);
    let (x, y) = (start[1], start[2]);

    assert!(demo.pointer_down(0, x, y, None));
    assert_eq!(demo.pointer_move(400.0, 100.0, None), 1);
    for _ in 0..120 {
        demo.step().unwrap();
    }

    let end = demo.transforms();
    assert!((end[1] - 400.0).abs() < 10.0, "left {}", end[1]);
    assert!((end[2] - 100.0).abs() < 10.0, "top {}", end[2]);

    assert_eq!(demo.pointer_up(None), 1);
    assert_eq!(demo.active_joint_count(), 0);
    assert_eq!(demo.pointer_up(None), 0);
}

#[test]
fn demo_touch_ids_are_tracked_separately() {
    init_logs();
    let mut demo = Demo::new(800.0, 600.0, true).unwrap();
    assert!(demo.multi_touch());

    assert!(demo.pointer_down(0, 10.0, 10.0, Some(1)));
    assert!(demo.pointer_down(1, 20.0, 10.0, Some(2)));
    assert_eq!(demo.active_joint_count(), 2);

    assert_eq!(demo.pointer_up(Some(1)), 1);
    assert_eq!(demo.active_joint_count(), 1);
    assert_eq!(demo.release_all(), 1);
}

#[test]
fn demo_exposes_entity_looks_and_config() {
    let demo = Demo::new(800.0, 600.0, false).unwrap();

    let size = demo.entity_size(0);
    assert!((10..90).contains(&size));
    assert_eq!(demo.entity_size(99), 0);

    let color = demo.entity_color(0).unwrap();
    assert!(color.starts_with("rgb(") && color.ends_with(", 0)"), "{color}");
    assert!(demo.entity_color(99).is_none());

    let config = DemoConfig::from_json(&demo.config_json()).unwrap();
    assert_eq!(config.entity_count, 20);
}
