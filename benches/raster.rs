use criterion::{black_box, criterion_group, criterion_main, Criterion};
use softcanvas::{Color, PixelFormat, Surface};

fn bench_raster(c: &mut Criterion) {
    let mut g = c.benchmark_group("raster");

    let w = 1920;
    let h = 1080;
    let colour = Color::rgba(0x20, 0x80, 0xff, 0xff);

    g.bench_function("fill_rect_full", |b| {
        let mut s = Surface::new(w, h, PixelFormat::Argb32).unwrap();
        b.iter(|| {
            s.fill_rect(black_box(0), black_box(0), black_box(w), black_box(h), colour);
        });
    });

    g.bench_function("fill_circle_r400", |b| {
        let mut s = Surface::new(w, h, PixelFormat::Argb32).unwrap();
        b.iter(|| {
            s.fill_circle(black_box(960), black_box(540), black_box(400), colour);
        });
    });

    g.bench_function("stroke_line_diagonal", |b| {
        let mut s = Surface::new(w, h, PixelFormat::Argb32).unwrap();
        b.iter(|| {
            s.stroke_line(black_box(0), black_box(0), black_box(1919), black_box(1079), colour);
        });
    });

    g.bench_function("blit_mask_512", |b| {
        let mut src = Surface::new(512, 512, PixelFormat::Argb32).unwrap();
        src.clear(Color::GREEN);
        src.fill_circle(256, 256, 200, Color::RED);
        let mut dst = Surface::new(w, h, PixelFormat::Argb32).unwrap();
        b.iter(|| {
            dst.blit_mask(black_box(&src), black_box(100), black_box(100), Color::GREEN);
        });
    });

    g.finish();
}

criterion_group!(benches, bench_raster);
criterion_main!(benches);
