use criterion::{black_box, criterion_group, criterion_main, Criterion};
use mazerace::{random::seeded, MazeGenerator, SearcherKind};

const SIZE: usize = 201;

pub fn generate(c: &mut Criterion) {
    let generator = MazeGenerator::square(SIZE).unwrap();
    c.bench_function("generate_201", |b| {
        b.iter(|| {
            let (mut rng, _) = seeded(Some(black_box(7)));
            generator.generate(&mut rng).unwrap()
        })
    });
}

pub fn search(c: &mut Criterion) {
    let (mut rng, _) = seeded(Some(7));
    let maze = MazeGenerator::square(SIZE).unwrap().generate(&mut rng).unwrap();

    for kind in SearcherKind::ALL {
        c.bench_function(&format!("{}_201", kind.name()), |b| {
            b.iter(|| kind.searcher().solve(black_box(&maze)))
        });
    }
}

criterion_group! {name = benches; config = Criterion::default().sample_size(20); targets = generate, search}
criterion_main!(benches);
