use bench_compare::models::ResultsTable;
use bench_compare::parser::parse_results;
use bench_compare::reporting::{render_csv, render_markdown_table};
use criterion::{Criterion, criterion_group, criterion_main};

const OCTANE: [&str; 14] = [
    "Richards",
    "DeltaBlue",
    "Crypto",
    "RayTrace",
    "EarleyBoyer",
    "RegExp",
    "Splay",
    "NavierStokes",
    "PdfJS",
    "Mandreel",
    "Gameboy",
    "CodeLoad",
    "Box2D",
    "Typescript",
];

fn engine_output(seed: i64) -> String {
    let entries: Vec<serde_json::Value> = OCTANE
        .iter()
        .enumerate()
        .map(|(i, name)| serde_json::json!({ "name": name, "result": seed * 100 + i as i64 }))
        .collect();
    format!(
        "Loading combined.js\nRunning suite...\n{}\nDone.\n",
        serde_json::Value::Array(entries)
    )
}

fn bench_parse_results(c: &mut Criterion) {
    let output = engine_output(12);
    c.bench_function("parse_results", |b| {
        b.iter(|| parse_results(&output).unwrap());
    });
}

fn bench_render(c: &mut Criterion) {
    let labels = ["V8", "V8 --jitless", "JSC", "QuickJS", "Boa"];
    let mut results = ResultsTable::new();
    for (seed, label) in labels.iter().enumerate() {
        results.insert(*label, parse_results(&engine_output(seed as i64)).unwrap());
    }

    c.bench_function("render_markdown_table", |b| {
        b.iter(|| render_markdown_table(&results, &labels));
    });
    c.bench_function("render_csv", |b| {
        b.iter(|| render_csv(&results, &labels));
    });
}

criterion_group!(benches, bench_parse_results, bench_render);
criterion_main!(benches);
