// ============================================================================
// COTAHIST Decoding Benchmarks
// ============================================================================
//
// Benchmark Categories:
// 1. Numeric Pictures - Implied-decimal field conversion
// 2. Single Line - Classify, slice and assemble one data line
// 3. Full Stream - Reader throughput over in-memory files
// 4. Failure Paths - Cost of skipping malformed lines
// ============================================================================

use cotahist::layout::{data_fields, field_offset};
use cotahist::numeric::{PIC_11V99, PIC_16V99, PIC_7V06};
use cotahist::prelude::*;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;

fn data_line(ticker: &str) -> String {
    let values = [
        "20200102",
        "02",
        ticker,
        "010",
        "PETROBRAS",
        "PN      N2",
        "",
        "R$",
        "0000000003050",
        "0000000003100",
        "0000000003025",
        "0000000003070",
        "0000000003080",
        "0000000003081",
        "0000000003079",
        "31210",
        "000000000037774500",
        "000000001161545525",
        "0000000000000",
        "0",
        "99991231",
        "0000001",
        "0000000000000",
        "BRPETRACNPR6",
        "142",
    ];

    let mut line = String::from("01");
    for (spec, value) in data_fields().iter().zip(values) {
        line.push_str(&format!("{:<width$}", value, width = spec.width));
    }
    line
}

fn file_of(records: usize, every_nth_corrupt: Option<usize>) -> String {
    let good = data_line("PETR4");
    let mut bad = good.clone();
    let offset = field_offset("TOTNEG").unwrap_or(147);
    bad.replace_range(offset..offset + 3, "ABC");

    let mut content = String::from("00COTAHIST.2020BOVESPA 20200102\n");
    for i in 0..records {
        let line = match every_nth_corrupt {
            Some(n) if i % n == 0 => &bad,
            _ => &good,
        };
        content.push_str(line);
        content.push('\n');
    }
    content.push_str("99COTAHIST.2020BOVESPA 20200102\n");
    content
}

// ============================================================================
// Numeric Picture Benchmarks
// ============================================================================

fn benchmark_pictures(c: &mut Criterion) {
    let mut group = c.benchmark_group("picture_decode");

    let cases = [
        ("pic11v99", PIC_11V99, &b"0000000003080"[..]),
        ("pic16v99", PIC_16V99, &b"000000001161545525"[..]),
        ("pic7v06", PIC_7V06, &b"0000001234567"[..]),
        ("blank", PIC_11V99, &b"             "[..]),
    ];

    for (label, picture, raw) in cases {
        group.bench_with_input(BenchmarkId::from_parameter(label), &raw, |b, raw| {
            b.iter(|| black_box(picture.decode(black_box(raw))));
        });
    }

    group.finish();
}

// ============================================================================
// Single Line Benchmarks
// ============================================================================

fn benchmark_line_decoder(c: &mut Criterion) {
    let mut group = c.benchmark_group("line_decoder");
    let line = data_line("PETR4");

    for policy in [FieldFailurePolicy::AbortLine, FieldFailurePolicy::LeaveGap] {
        let decoder = LineDecoder::new(policy);
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{:?}", policy)),
            &line,
            |b, line| {
                b.iter(|| black_box(decoder.decode_line(black_box(line.as_bytes()))));
            },
        );
    }

    group.bench_function("header", |b| {
        let decoder = LineDecoder::default();
        b.iter(|| black_box(decoder.decode_line(black_box(b"00COTAHIST.2020BOVESPA 20200102"))));
    });

    group.finish();
}

// ============================================================================
// Full Stream Benchmarks
// ============================================================================

fn benchmark_reader_throughput(c: &mut Criterion) {
    let mut group = c.benchmark_group("reader_throughput");

    for records in [100, 1_000, 10_000].iter() {
        let content = file_of(*records, None);
        group.throughput(Throughput::Bytes(content.len() as u64));

        group.bench_with_input(
            BenchmarkId::from_parameter(records),
            &content,
            |b, content| {
                b.iter(|| {
                    let reader = HistoricalQuotesReader::new(content.as_bytes());
                    black_box(reader.count())
                });
            },
        );
    }

    group.finish();
}

// ============================================================================
// Failure Path Benchmarks
// ============================================================================

fn benchmark_skipped_lines(c: &mut Criterion) {
    let mut group = c.benchmark_group("skipped_lines");

    for every_nth in [2, 10, 100].iter() {
        let content = file_of(1_000, Some(*every_nth));

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("1_in_{}", every_nth)),
            &content,
            |b, content| {
                b.iter(|| {
                    let reader = HistoricalQuotesReader::new(content.as_bytes());
                    black_box(reader.count())
                });
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_pictures,
    benchmark_line_decoder,
    benchmark_reader_throughput,
    benchmark_skipped_lines,
);
criterion_main!(benches);
