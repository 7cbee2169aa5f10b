use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use glam::Vec3;
use sdf_scenes::material::SceneUniforms;
use sdf_scenes::packer::{pack, MAX_SDF};
use sdf_scenes::scenes::{DropsScenario, Scenario, SceneContent};
use sdf_scenes::types::{Primitive, Sphere};

fn spheres(count: usize) -> Vec<Sphere> {
    (0..count)
        .map(|i| Sphere {
            position: Vec3::new(i as f32 * 0.5, (i as f32 * 0.2) % 20.0, 0.0),
            color: Vec3::ONE,
            radius: 1.0,
        })
        .collect()
}

/// Packing cost for lists below, at and above capacity
fn bench_pack_spheres(c: &mut Criterion) {
    let mut group = c.benchmark_group("pack");

    for count in [0, 10, MAX_SDF, 200].iter() {
        let list = spheres(*count);
        let dummy = Sphere::dummy();

        group.bench_with_input(BenchmarkId::new("spheres", count), count, |b, _| {
            b.iter(|| black_box(pack(black_box(&list), &dummy, MAX_SDF)))
        });
    }

    group.finish();
}

/// Full per-frame cost: animate the drops scenario and rebuild the uniform block
fn bench_frame_refresh(c: &mut Criterion) {
    let mut scenario = DropsScenario::with_seed(1);
    scenario.create().expect("drops scenario");

    c.bench_function("drops_update_and_pack", |b| {
        b.iter(|| {
            scenario.update(1.0, 1.0 / 60.0);
            black_box(SceneUniforms::from_scene(scenario.scene()))
        })
    });

    let full = SceneContent {
        spheres: spheres(MAX_SDF),
        ..Default::default()
    };
    c.bench_function("pack_full_scene", |b| {
        b.iter(|| black_box(SceneUniforms::from_scene(black_box(&full))))
    });
}

criterion_group!(benches, bench_pack_spheres, bench_frame_refresh);
criterion_main!(benches);
