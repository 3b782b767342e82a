use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use panview_foundation::gesture_constants::{ICON_SIZE, MINIMUM_TRANSLATION};
use panview_foundation::{
    elastic, resolve_direction, ElasticLimits, IndicatorGeometry, SwipeDirection,
};
use panview_ui_graphics::Point;

const DRAG_SAMPLES: &[usize] = &[64, 1024];

fn drag_translations(count: usize) -> Vec<f32> {
    (0..count)
        .map(|index| (index as f32 / count as f32) * 400.0 - 200.0)
        .collect()
}

fn bench_elastic(c: &mut Criterion) {
    let mut group = c.benchmark_group("elastic");
    for &count in DRAG_SAMPLES {
        let translations = drag_translations(count);
        group.bench_with_input(BenchmarkId::new("map", count), &translations, |b, input| {
            b.iter(|| {
                let mut sum = 0.0;
                for &x in input {
                    sum += elastic(black_box(x), 44.0, 100.0);
                }
                black_box(sum)
            });
        });
    }
    group.finish();
}

fn bench_frame_update(c: &mut Criterion) {
    let limits = ElasticLimits::default();
    let translations = drag_translations(256);
    c.bench_function("frame_update", |b| {
        b.iter(|| {
            let mut active = 0usize;
            for &x in &translations {
                let translation = Point::new(black_box(x), 3.0);
                let direction = resolve_direction(translation, Point::new(x * 10.0, 1.0))
                    .invert_if_required(translation);
                let offset = limits.apply(translation.x);
                for candidate in SwipeDirection::ALL {
                    let fraction = IndicatorGeometry::measure(candidate, offset, ICON_SIZE)
                        .reveal_fraction(MINIMUM_TRANSLATION);
                    if candidate == direction && fraction >= 1.0 {
                        active += 1;
                    }
                }
            }
            black_box(active)
        });
    });
}

criterion_group!(benches, bench_elastic, bench_frame_update);
criterion_main!(benches);
