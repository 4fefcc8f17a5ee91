use content_embed_engine::{DocumentTree, InsertCommand, Registry};
use criterion::{Criterion, criterion_group, criterion_main};

fn bench_insert_command(c: &mut Criterion) {
    let mut group = c.benchmark_group("commands");
    group.sample_size(10);

    let registry = Registry::with_builtin_blocks();
    let command = InsertCommand::new(&registry);

    group.bench_function("insert_teacher_profile", |b| {
        let mut doc = DocumentTree::new();
        b.iter(|| {
            let result = command.attempt_insert(&mut doc, std::hint::black_box("Filip"));
            std::hint::black_box(result)
        });
    });

    group.bench_function("insert_video", |b| {
        let mut doc = DocumentTree::new();
        b.iter(|| {
            let result = command.attempt_insert(
                &mut doc,
                std::hint::black_box("yt https://www.youtube.com/watch?v=w-kwUHMYIfk"),
            );
            std::hint::black_box(result)
        });
    });

    group.bench_function("reject_unrecognized", |b| {
        let mut doc = DocumentTree::new();
        b.iter(|| {
            let result = command.attempt_insert(&mut doc, std::hint::black_box("socrates"));
            std::hint::black_box(result)
        });
    });

    group.finish();
}

criterion_group!(benches, bench_insert_command);
criterion_main!(benches);
