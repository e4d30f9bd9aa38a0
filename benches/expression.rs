//! Performance benchmarks for a3s-cron-expr
//!
//! Run with: cargo bench

use a3s_cron_expr::{CronExpression, Month, TimeField, Weekday};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn sample_expression() -> CronExpression {
    CronExpression::builder()
        .step(TimeField::Seconds, 5)
        .value(TimeField::Minutes, 4)
        .step(TimeField::Minutes, 3)
        .range(TimeField::Hours, 3, 5)
        .range(TimeField::Hours, 7, 11)
        .month(Month::March)
        .weekday(Weekday::Wednesday)
        .weekday(Weekday::Friday)
        .value(TimeField::DayOfMonth, 1)
        .build()
        .unwrap()
}

fn bench_parse(c: &mut Criterion) {
    c.bench_function("parse 5 fields", |b| {
        b.iter(|| CronExpression::parse(black_box("*/15 9-17 * jan-mar mon-fri")).unwrap())
    });

    c.bench_function("parse 7 fields", |b| {
        b.iter(|| {
            CronExpression::parse(black_box("*/5 */3,4 3-5,7-11 1 3 3,5 2030")).unwrap()
        })
    });
}

fn bench_serialize(c: &mut Criterion) {
    let expr = sample_expression();

    c.bench_function("CronExpression to_string", |b| {
        b.iter(|| black_box(&expr).to_string())
    });
}

fn bench_describe(c: &mut Criterion) {
    let expr = sample_expression();
    c.bench_function("CronExpression description", |b| {
        b.iter(|| black_box(&expr).description().unwrap())
    });

    let merged = CronExpression::parse("5 44 3 * * *").unwrap();
    c.bench_function("CronExpression description (merged time)", |b| {
        b.iter(|| black_box(&merged).description().unwrap())
    });
}

criterion_group!(benches, bench_parse, bench_serialize, bench_describe);
criterion_main!(benches);
