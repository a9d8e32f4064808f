use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use event_finder::parsers::parse_records;
use serde_json::json;

/// Generate a page response in the backend's enveloped shape
fn generate_page(num_records: usize) -> String {
    let items: Vec<_> = (0..num_records)
        .map(|i| {
            json!({
                "_id": format!("evt-{}", i),
                "name": format!("Sự kiện {}", i),
                "description": "Mô tả ngắn cho sự kiện",
                "category": { "name": "Âm nhạc" },
                "venue": { "name": "Nhà văn hóa", "city": "Hà Nội" },
                "startTime": "2025-07-01T19:30:00Z",
            })
        })
        .collect();
    json!({ "data": { "items": items } }).to_string()
}

fn bench_parse_records(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_records");

    for size in [10, 100, 1_000].iter() {
        let body = generate_page(*size);
        group.throughput(Throughput::Bytes(body.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &body, |b, body| {
            b.iter(|| parse_records(black_box(body)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_parse_records);
criterion_main!(benches);
