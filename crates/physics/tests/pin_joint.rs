//! The pin joint must hold the bar on its pivot with no drift, tick after
//! tick, while gravity and control torque are active.

use physics::{PhysicsWorld, Seesaw, SeesawConfig, Vec2};

const ANCHOR_TOLERANCE: f32 = 1e-3;

fn anchor_gap(world: &PhysicsWorld, seesaw: &Seesaw) -> f32 {
    let joint = world.pin_joints[seesaw.pin_idx];
    let anchor_a = world.bodies[joint.body_a].local_to_world(joint.anchor_a);
    let anchor_b = world.bodies[joint.body_b].local_to_world(joint.anchor_b);
    (anchor_a - anchor_b).length()
}

#[test]
fn anchors_coincide_for_100_ticks_under_load() {
    let mut world = PhysicsWorld::new();
    let seesaw = Seesaw::build(&mut world, SeesawConfig::default()).unwrap();

    for tick in 0..120 {
        // Alternate torque bursts, the worst case the controller produces.
        let torque = if tick % 20 < 10 { 500_000.0 } else { -500_000.0 };
        seesaw.apply_bar_torque(&mut world, torque);
        world.step();

        let gap = anchor_gap(&world, &seesaw);
        assert!(
            gap < ANCHOR_TOLERANCE,
            "anchor gap {gap} at tick {tick}"
        );
    }
}

#[test]
fn bar_centre_stays_on_pivot() {
    let config = SeesawConfig::default();
    let pivot = config.pivot;
    let mut world = PhysicsWorld::new();
    let seesaw = Seesaw::build(&mut world, config).unwrap();

    world.run(300);

    let bar_pos = seesaw.bar_position(&world);
    assert!(
        (bar_pos - pivot).length() < ANCHOR_TOLERANCE,
        "bar drifted to {bar_pos:?}"
    );
}

#[test]
fn error_rederived_each_tick_not_integrated() {
    // Displace the bar by hand; a single step must pull it back onto the
    // pivot, and a second step must not overshoot.
    let config = SeesawConfig::default();
    let pivot = config.pivot;
    let mut world = PhysicsWorld::new();
    let seesaw = Seesaw::build(&mut world, config).unwrap();

    world.bodies[seesaw.bar_idx].pos = pivot + Vec2::new(7.0, -3.0);
    world.step();
    assert!((seesaw.bar_position(&world) - pivot).length() < ANCHOR_TOLERANCE);

    world.step();
    assert!((seesaw.bar_position(&world) - pivot).length() < ANCHOR_TOLERANCE);
}
