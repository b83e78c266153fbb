use aabb_sandbox::utils::demo_scenario;
use criterion::{criterion_group, criterion_main, Criterion, Throughput};

fn bench_world_tick(c: &mut Criterion) {
    let mut group = c.benchmark_group("world_tick");

    // 1. Demo scene as built: boxes still falling, sparks in flight
    {
        let mut world = demo_scenario(0);
        world.tick(16.0);

        group.throughput(Throughput::Elements(world.bodies().len() as u64));
        group.bench_function("demo_fresh", |b| {
            b.iter(|| world.tick(16.0));
        });
    }

    // 2. Settled scene: most boxes resting on the floor, many overlaps per tick
    {
        let mut world = demo_scenario(0);
        for _ in 0..2_000 {
            world.tick(16.0);
        }
        group.bench_function("demo_settled", |b| {
            b.iter(|| world.tick(16.0));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_world_tick);
criterion_main!(benches);
