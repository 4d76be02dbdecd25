//! Integer rendering benchmarks: decimal/hex/octal/binary across widths and
//! signs, plus the zero-fill and sign/prefix paths that add extra layout work.

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use fixfmt_core::{ArgValue, format};

fn bench_decimal_widths(c: &mut Criterion) {
    let values: &[(&str, i64)] =
        &[("small", 7), ("medium", 123_456), ("large", 9_223_372_036_854_775_807)];
    let mut group = c.benchmark_group("format_decimal");

    for &(label, value) in values {
        group.throughput(Throughput::Elements(1));
        group.bench_with_input(BenchmarkId::new("i64", label), &value, |b, &v| {
            let mut buf = [0u8; 32];
            let args = [ArgValue::from(v)];
            b.iter(|| {
                let n = format(&mut buf, b"{:d}", &args).unwrap();
                black_box(n);
            });
        });
    }
    group.finish();
}

fn bench_zero_fill_hex(c: &mut Criterion) {
    c.bench_function("format_zero_fill_hex_u32", |b| {
        let mut buf = [0u8; 32];
        let args = [ArgValue::from(0xDEAD_BEEFu32)];
        b.iter(|| {
            let n = format(&mut buf, b"{:#010x}", &args).unwrap();
            black_box(n);
        });
    });
}

fn bench_radix_sweep(c: &mut Criterion) {
    let templates: &[(&str, &[u8])] =
        &[("dec", b"{:d}"), ("hex", b"{:x}"), ("oct", b"{:o}"), ("bin", b"{:b}")];
    let mut group = c.benchmark_group("format_radix");

    for &(label, template) in templates {
        group.bench_with_input(BenchmarkId::new("u32", label), &template, |b, &tmpl| {
            let mut buf = [0u8; 40];
            let args = [ArgValue::from(123_456u32)];
            b.iter(|| {
                let n = format(&mut buf, tmpl, &args).unwrap();
                black_box(n);
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_decimal_widths, bench_zero_fill_hex, bench_radix_sweep);
criterion_main!(benches);
