use criterion::{black_box, criterion_group, criterion_main, Criterion};
use solidcast_csg::{cast_batch, CsgConfig, HitList, Raycast, Surface};
use solidcast_math::{Point3, Vec3};

fn lens() -> Surface {
    let a = Surface::sphere(Point3::new(-1.0, 0.0, 0.0), 2.0).unwrap();
    let b = Surface::sphere(Point3::new(1.0, 0.0, 0.0), 2.0).unwrap();
    &a & &b
}

fn carved_block() -> Surface {
    let block = Surface::aabox(Point3::new(-2.0, -2.0, -2.0), Point3::new(2.0, 2.0, 2.0)).unwrap();
    let ball = Surface::sphere(Point3::origin(), 2.5).unwrap();
    let cut = Surface::plane(Vec3::new(0.0, 1.0, 1.0), Point3::new(0.0, 1.0, 0.0)).unwrap();
    (&block & &ball) - &(!&cut)
}

fn grid_rays(config: &CsgConfig, n: usize) -> Vec<Raycast> {
    let mut rays = Vec::with_capacity(n * n);
    for i in 0..n {
        for j in 0..n {
            let y = -3.0 + 6.0 * i as f64 / n as f64;
            let z = -3.0 + 6.0 * j as f64 / n as f64;
            rays.push(config.ray(Point3::new(-5.0, y, z), Vec3::x()).unwrap());
        }
    }
    rays
}

fn bench_single_ray(c: &mut Criterion) {
    let surface = lens();
    let ray = Raycast::new(Point3::new(-4.0, 0.0, 0.0), Vec3::x()).unwrap();
    let mut hits = HitList::with_capacity(8);

    c.bench_function("lens_single_ray_reused_list", |b| {
        b.iter(|| {
            hits.clear();
            surface.raycast(black_box(&ray), &mut hits);
            black_box(hits.len())
        })
    });
}

fn bench_grid(c: &mut Criterion) {
    let config = CsgConfig::default();
    let surface = carved_block();
    let rays = grid_rays(&config, 64);

    c.bench_function("carved_block_grid_sequential", |b| {
        let mut hits = config.hit_list();
        b.iter(|| {
            let mut found = 0usize;
            for ray in &rays {
                hits.clear();
                surface.raycast(ray, &mut hits);
                found += hits.nearest().is_some() as usize;
            }
            black_box(found)
        })
    });

    c.bench_function("carved_block_grid_parallel", |b| {
        b.iter(|| black_box(cast_batch(&surface, &rays, &config).len()))
    });
}

criterion_group!(benches, bench_single_ray, bench_grid);
criterion_main!(benches);
