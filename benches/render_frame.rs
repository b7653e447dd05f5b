mod common;

use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn render_frame(c: &mut Criterion) {
    let r = common::make_renderer();

    c.bench_function("frame/full_scene", |b| {
        b.iter(|| {
            let frame = r
                .render_frame(black_box(common::WIDTH), black_box(common::HEIGHT))
                .unwrap();
            black_box(frame.quads.len());
        })
    });

    c.bench_function("frame/visitor", |b| {
        b.iter(|| {
            let mut n = 0usize;
            r.render_frame_with(black_box(common::WIDTH), black_box(common::HEIGHT), |q| {
                n += 1;
                black_box(q.clip[0]);
            })
            .unwrap();
            black_box(n);
        })
    });
}

criterion_group!(benches, render_frame);
criterion_main!(benches);
