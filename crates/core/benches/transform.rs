use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use draftlink_core::{process_article, replace_keyword, LinkRule};
use serde_json::{json, Value};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn make_article(n_elements: usize, hit_ratio: f64) -> Value {
    let elements: Vec<Value> = (0..n_elements)
        .map(|i| {
            // Every third element is non-text and must be skipped.
            if i % 3 == 2 {
                return json!({ "_id": i.to_string(), "type": "image", "url": "https://example.com/i.jpg" });
            }
            let content = if (i as f64 / n_elements as f64) < hit_ratio {
                "Lorem Google ipsum dolor sit amet, Google consectetur adipiscing elit"
            } else {
                "Lorem ipsum dolor sit amet, consectetur adipiscing elit"
            };
            json!({ "_id": i.to_string(), "type": "text", "content": content })
        })
        .collect();

    json!({ "id": "bench-article", "content_elements": elements })
}

// ---------------------------------------------------------------------------
// Benchmark: process_article
// ---------------------------------------------------------------------------

fn bench_process_article(c: &mut Criterion) {
    let rule = LinkRule::default();

    let mut group = c.benchmark_group("process_article");
    for count in [10, 100, 1000] {
        let article = make_article(count, 0.5);
        group.bench_with_input(BenchmarkId::from_parameter(count), &article, |b, article| {
            b.iter(|| black_box(process_article(article, &rule)));
        });
    }
    group.finish();
}

// ---------------------------------------------------------------------------
// Benchmark: replace_keyword
// ---------------------------------------------------------------------------

fn bench_replace_keyword(c: &mut Criterion) {
    let rule = LinkRule::default();
    let hit = "Google ".repeat(512);
    let miss = "Gopher ".repeat(512);

    let mut group = c.benchmark_group("replace_keyword");
    group.bench_function("dense_hits", |b| {
        b.iter(|| black_box(replace_keyword(&hit, &rule)));
    });
    group.bench_function("no_hits", |b| {
        b.iter(|| black_box(replace_keyword(&miss, &rule)));
    });
    group.finish();
}

criterion_group!(benches, bench_process_article, bench_replace_keyword);
criterion_main!(benches);
