use criterion::{black_box, criterion_group, criterion_main, Criterion};
use wirecraft_editor::{History, HistoryPolicy};
use wirecraft_model::{Content, FieldValue, Section, TemplateKind, Variant};

fn page_of(count: usize) -> Vec<Section> {
    (0..count)
        .map(|i| {
            let mut content = Content::new();
            content.insert("title".into(), FieldValue::text(format!("Section {}", i)));
            content.insert(
                "body".into(),
                FieldValue::text("Join 10,000+ graduates now thriving in their careers."),
            );
            Section::new(TemplateKind::ContentCta, Variant::Light, content)
        })
        .collect()
}

fn bench_snapshot_churn(c: &mut Criterion) {
    let sections = page_of(30);

    c.bench_function("snapshot_100_pages_of_30_sections", |b| {
        b.iter(|| {
            let mut history = History::with_policy(HistoryPolicy::default());
            for _ in 0..100 {
                history.snapshot(black_box(&sections));
            }
            black_box(history.len())
        })
    });
}

fn bench_undo_redo_walk(c: &mut Criterion) {
    let sections = page_of(30);

    c.bench_function("undo_redo_full_walk", |b| {
        b.iter_with_setup(
            || {
                let mut history = History::with_policy(HistoryPolicy::default());
                for _ in 0..40 {
                    history.snapshot(&sections);
                }
                history
            },
            |mut history| {
                while let Some(restored) = history.undo() {
                    black_box(restored.len());
                }
                while let Some(restored) = history.redo() {
                    black_box(restored.len());
                }
                black_box(history.cursor())
            },
        )
    });
}

criterion_group!(benches, bench_snapshot_churn, bench_undo_redo_walk);
criterion_main!(benches);
