use criterion::{black_box, criterion_group, criterion_main, Criterion};

use editkit_core::{EditableField, ExternalSaveBus};

fn bench_broadcast(c: &mut Criterion) {
    let mut group = c.benchmark_group("broadcast");

    for &subscribers in &[1usize, 16, 256] {
        group.bench_function(format!("{subscribers}_subscribers"), |b| {
            let bus = ExternalSaveBus::new();
            let _subs: Vec<_> = (0..subscribers)
                .map(|_| bus.subscribe(|| Ok(())))
                .collect();
            b.iter(|| black_box(&bus).broadcast());
        });
    }

    group.bench_function("subscribe_unsubscribe", |b| {
        let bus = ExternalSaveBus::new();
        b.iter(|| {
            let sub = bus.subscribe(|| Ok(()));
            drop(black_box(sub));
        });
    });

    group.finish();
}

fn bench_field_lifecycle(c: &mut Criterion) {
    let mut group = c.benchmark_group("field");

    group.bench_function("open_save", |b| {
        let mut field = EditableField::builder("content_1", "a".repeat(512)).build();
        b.iter(|| {
            field.open();
            field.save();
        });
    });

    group.bench_function("open_cancel", |b| {
        let mut field = EditableField::builder("content_1", "a".repeat(512)).build();
        b.iter(|| {
            field.open();
            field.cancel();
        });
    });

    group.finish();
}

criterion_group!(benches, bench_broadcast, bench_field_lifecycle);
criterion_main!(benches);
