use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use geotile::{generate, Options};

fn bench_generate(c: &mut Criterion) {
    c.bench_function("hexagons", |b| {
        b.iter(|| {
            generate(
                black_box("bench-seed"),
                Options::new().with_generator("hexagons"),
            )
            .unwrap()
        })
    });

    c.bench_function("hexagons_data_uri", |b| {
        b.iter(|| {
            geotile::uri_image(
                black_box("bench-seed"),
                Options::new().with_generator("hexagons"),
            )
            .unwrap()
        })
    });
}

criterion_group!(benches, bench_generate);
criterion_main!(benches);
