//! Benchmarks for chatpulse parsing and analysis.
//!
//! Run with: `cargo bench`
//! Run specific group: `cargo bench --bench analysis -- statistics`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use chatpulse::analysis::count_words;
use chatpulse::format::{OutputFormat, render};
use chatpulse::parsers::WhatsAppParser;
use chatpulse::{compute_statistics, parse_exported_text};

// =============================================================================
// Test Data Generators
// =============================================================================

const BODIES: [&str; 6] = [
    "Bom dia, amor! 😍",
    "Que saudade de você ❤️",
    "Fiquei triste com o trabalho hoje",
    "<imagem omitida>",
    "Vamos sair amanhã? 😂",
    "ok",
];

fn generate_export(count: usize) -> String {
    let mut lines = Vec::with_capacity(count + count / 10);
    for i in 0..count {
        let sender = if i % 3 == 0 { "Bia" } else { "Ana" };
        let day = 1 + (i / 200) % 28;
        let hour = (i / 10) % 24;
        let minute = i % 60;
        lines.push(format!(
            "{:02}/03/2024, {:02}:{:02} - {}: {}",
            day,
            hour,
            minute,
            sender,
            BODIES[i % BODIES.len()]
        ));
        if i % 10 == 0 {
            lines.push("segunda linha da mensagem".to_string());
        }
    }
    lines.join("\n")
}

// =============================================================================
// Parsing
// =============================================================================

fn bench_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("parsing");

    for size in [100_usize, 1_000, 10_000, 50_000] {
        let txt = generate_export(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &txt, |b, txt| {
            b.iter(|| {
                let conversation = parse_exported_text(black_box(txt)).unwrap();
                black_box(conversation)
            });
        });
    }
    group.finish();
}

fn bench_streaming(c: &mut Criterion) {
    let mut group = c.benchmark_group("streaming");
    let parser = WhatsAppParser::new();

    for size in [1_000_usize, 10_000] {
        let txt = generate_export(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &txt, |b, txt| {
            b.iter(|| {
                let count = parser
                    .stream(std::io::Cursor::new(black_box(txt.as_bytes())))
                    .count();
                black_box(count)
            });
        });
    }
    group.finish();
}

// =============================================================================
// Analysis
// =============================================================================

fn bench_statistics(c: &mut Criterion) {
    let mut group = c.benchmark_group("statistics");

    for size in [100_usize, 1_000, 10_000, 50_000] {
        let conversation = parse_exported_text(&generate_export(size)).unwrap();
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(size),
            &conversation,
            |b, conversation| {
                b.iter(|| black_box(compute_statistics(black_box(conversation))));
            },
        );
    }
    group.finish();
}

fn bench_word_counting(c: &mut Criterion) {
    let mut group = c.benchmark_group("word_counting");

    for size in [1_000_usize, 10_000] {
        let conversation = parse_exported_text(&generate_export(size)).unwrap();
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(size),
            &conversation.messages,
            |b, messages| {
                b.iter(|| black_box(count_words(black_box(messages))));
            },
        );
    }
    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");
    let report = compute_statistics(&parse_exported_text(&generate_export(10_000)).unwrap());

    for format in [OutputFormat::Text, OutputFormat::Json] {
        group.bench_with_input(
            BenchmarkId::from_parameter(format),
            &report,
            |b, report| {
                b.iter(|| black_box(render(black_box(report), format).unwrap()));
            },
        );
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_parsing,
    bench_streaming,
    bench_statistics,
    bench_word_counting,
    bench_render,
);
criterion_main!(benches);
