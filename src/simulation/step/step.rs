use super::{PerfTimer, Simulation};

pub(super) fn step(sim: &mut Simulation) {
    let mut timer = if sim.perf_enabled {
        sim.perf_stats.reset();
        Some(PerfTimer::start())
    } else {
        None
    };

    sim.physics.step();
    if let Some(t) = timer.as_mut() {
        sim.perf_stats.physics_ms = t.lap_ms();
    }

    // Forces never carry over into the next frame.
    sim.physics.clear_forces();
    sim.frame += 1;

    if let Some(t) = timer {
        let stats = &mut sim.perf_stats;
        stats.step_ms = t.elapsed_ms();
        stats.frame = sim.frame.min(u32::MAX as u64) as u32;
        stats.body_count = sim.physics.body_count() as u32;
        stats.collider_count = sim.physics.collider_count() as u32;
        stats.joint_count = sim.physics.joint_count() as u32;
        stats.active_drags = sim.drag.active_count() as u32;
    }
}
