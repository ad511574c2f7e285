use criterion::{criterion_group, criterion_main, Criterion};
use physics::{PhysicsWorld, Seesaw, SeesawConfig};

fn bench_seesaw_step(c: &mut Criterion) {
    let mut world = PhysicsWorld::new();
    let seesaw = Seesaw::build(&mut world, SeesawConfig::default()).unwrap();
    c.bench_function("seesaw_step", |b| {
        b.iter(|| {
            seesaw.apply_bar_torque(&mut world, 500_000.0);
            world.step();
        });
    });
}

criterion_group!(benches, bench_seesaw_step);
criterion_main!(benches);
