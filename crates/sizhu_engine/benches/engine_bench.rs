use criterion::{Criterion, black_box, criterion_group, criterion_main};
use sizhu_engine::{BirthInput, compute_engine_json, compute_engine_payload, normalize_birth_input};

fn sample_input() -> BirthInput {
    BirthInput::local(1988, 2, 4, 16, 30, 0, "Asia/Shanghai", 104.066, 30.658)
}

fn engine_bench(c: &mut Criterion) {
    let input = sample_input();

    let mut group = c.benchmark_group("engine");
    group.bench_function("normalize_birth_input", |b| {
        b.iter(|| normalize_birth_input(black_box(&input)))
    });
    group.sample_size(20);
    group.bench_function("compute_payload", |b| {
        b.iter(|| compute_engine_payload(black_box(&input)))
    });
    group.bench_function("compute_json", |b| {
        b.iter(|| compute_engine_json(black_box(&input)))
    });
    group.finish();
}

criterion_group!(benches, engine_bench);
criterion_main!(benches);
