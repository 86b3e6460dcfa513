use criterion::{black_box, criterion_group, criterion_main, Criterion};
use pathmotion_core::{
    ArcConfig, Basis, BasisMode, Clip, ClipFrame, EaseKind, EnvelopeKind, HelixConfig,
    LinearConfig, MixTarget, Mixer, Shape, Vec3,
};

struct BenchTarget {
    position: Vec3,
}

impl MixTarget for BenchTarget {
    type Handle = u8;

    fn handle(&self) -> u8 {
        0
    }

    fn basis(&self) -> Basis {
        Basis::IDENTITY
    }

    fn position(&self) -> Vec3 {
        self.position
    }

    fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }
}

fn bench_shapes(c: &mut Criterion) {
    let b = Basis::IDENTITY;
    let shapes = [
        Shape::Linear(LinearConfig::new(EaseKind::CubicInOut)),
        Shape::Arc(ArcConfig::new(2.0, 0.7, EaseKind::SineOut)),
        Shape::Helix(HelixConfig::new(1.0, 4.0, 30.0, EnvelopeKind::Parabolic)),
    ];
    c.bench_function("evaluate_three_shapes", |bencher| {
        bencher.iter(|| {
            let mut acc = Vec3::ZERO;
            for shape in &shapes {
                acc += shape.evaluate(&b, black_box(10.0), black_box(0.42));
            }
            acc
        })
    });
}

fn bench_mixer(c: &mut Criterion) {
    let mut mixer: Mixer<u8> = Mixer::default();
    let clips: Vec<_> = (0..8)
        .map(|i| {
            let shape = match i % 3 {
                0 => Shape::Linear(LinearConfig::default()),
                1 => Shape::Arc(ArcConfig::default()),
                _ => Shape::Helix(HelixConfig::default()),
            };
            let mode = if i % 2 == 0 {
                BasisMode::Cached
            } else {
                BasisMode::Live
            };
            mixer.add_clip(Clip::new(shape, mode, 5.0 + i as f32))
        })
        .collect();
    let frames: Vec<ClipFrame> = clips
        .iter()
        .enumerate()
        .map(|(i, id)| ClipFrame::new(*id, 0.5, 1.0 / (i as f32 + 1.0)))
        .collect();
    let mut target = BenchTarget {
        position: Vec3::ZERO,
    };

    c.bench_function("mixer_tick_8_clips", |bencher| {
        bencher.iter(|| mixer.mix(Some(&mut target), black_box(&frames)))
    });
}

criterion_group!(benches, bench_shapes, bench_mixer);
criterion_main!(benches);
