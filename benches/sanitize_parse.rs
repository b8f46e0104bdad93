//! Benchmarks for the sanitize-parse hot path
//!
//! Covers the three line shapes that dominate real roster files: clean
//! unquoted lines (the fast no-allocation path), correctly quoted lines,
//! and lines with stray quotes that need repair.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use roster_importer::app::models::RawLine;
use roster_importer::app::services::line_sanitizer;
use roster_importer::app::services::record_parser::RecordParser;

const CLEAN_LINE: &str = "1041,John,Doe,123 Main St";
const QUOTED_LINE: &str = r#"1042,"O""Brien",Smith,"1 A St, Apt 2""#;
const STRAY_LINE: &str = r#"1043,Jo"hn,D"oe,12"3 Main St"#;

fn bench_sanitizer(c: &mut Criterion) {
    let mut group = c.benchmark_group("sanitize");
    group.bench_function("clean_line", |b| {
        b.iter(|| line_sanitizer::clean(black_box(CLEAN_LINE)))
    });
    group.bench_function("quoted_line", |b| {
        b.iter(|| line_sanitizer::clean(black_box(QUOTED_LINE)))
    });
    group.bench_function("stray_quotes", |b| {
        b.iter(|| line_sanitizer::clean(black_box(STRAY_LINE)))
    });
    group.finish();
}

fn bench_parse_line(c: &mut Criterion) {
    let parser = RecordParser::new();
    let mut group = c.benchmark_group("parse_line");
    for (name, text) in [
        ("clean_line", CLEAN_LINE),
        ("quoted_line", QUOTED_LINE),
        ("stray_quotes", STRAY_LINE),
    ] {
        let line = RawLine::new(2, text);
        group.bench_function(name, |b| b.iter(|| parser.parse_line(black_box(&line))));
    }
    group.finish();
}

criterion_group!(benches, bench_sanitizer, bench_parse_line);
criterion_main!(benches);
