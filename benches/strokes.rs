use criterion::{black_box, criterion_group, criterion_main, Criterion};
use raster_paint::{BrushStyle, PaintSession, PaintSettings, Point, Tool};

fn scribble(session: &mut PaintSession) {
    session.pointer_down(Point::new(10, 10));
    for i in 0..200 {
        let x = 10 + (i * 3) % 780;
        let y = 10 + (i * 7) % 580;
        session.pointer_move(black_box(Point::new(x, y)));
    }
    session.pointer_up();
}

fn bench_brush_styles(c: &mut Criterion) {
    for (name, style) in [
        ("brush_round_200_moves", BrushStyle::Round),
        ("brush_spray_200_moves", BrushStyle::Spray),
        ("brush_calligraphy_200_moves", BrushStyle::Calligraphy),
    ] {
        let mut session = PaintSession::with_seed(
            PaintSettings {
                initial_tool: Tool::Brush,
                initial_brush_style: style,
                ..PaintSettings::default()
            },
            7,
        );
        c.bench_function(name, |b| b.iter(|| scribble(&mut session)));
    }
}

fn bench_shape_preview(c: &mut Criterion) {
    let mut session = PaintSession::with_seed(
        PaintSettings {
            initial_tool: Tool::Circle,
            ..PaintSettings::default()
        },
        7,
    );
    c.bench_function("circle_preview_50_moves", |b| {
        b.iter(|| {
            session.pointer_down(Point::new(400, 300));
            for r in 0..50 {
                session.pointer_move(black_box(Point::new(400 + r * 4, 300)));
            }
            session.pointer_up();
        })
    });
}

criterion_group!(benches, bench_brush_styles, bench_shape_preview);
criterion_main!(benches);
