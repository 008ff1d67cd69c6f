use criterion::{black_box, criterion_group, criterion_main, Criterion};
use raster_paint::paint::fill::flood_fill;
use raster_paint::paint::render::draw_circle;
use raster_paint::{Color, PixelBuffer, Point};

fn bench_fill_open_canvas(c: &mut Criterion) {
    let blank = PixelBuffer::new(800, 600, Color::WHITE);
    c.bench_function("fill_800x600_open", |b| {
        b.iter(|| {
            let mut buffer = blank.clone();
            flood_fill(&mut buffer, black_box(Point::new(400, 300)), Color::BLACK)
        })
    });
}

fn bench_fill_with_obstacles(c: &mut Criterion) {
    let mut base = PixelBuffer::new(800, 600, Color::WHITE);
    for i in 0..40 {
        let center = Point::new(20 + (i % 10) * 80, 60 + (i / 10) * 140);
        draw_circle(&mut base, center, 30.0, Color::BLACK, 3);
    }
    c.bench_function("fill_800x600_rings", |b| {
        b.iter(|| {
            let mut buffer = base.clone();
            flood_fill(&mut buffer, black_box(Point::new(0, 0)), Color::rgb(255, 0, 0))
        })
    });
}

criterion_group!(benches, bench_fill_open_canvas, bench_fill_with_obstacles);
criterion_main!(benches);
