//! Layout benchmarks: padding/alignment overhead across widths, and the
//! template-scanning cost for templates with many placeholders.

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use fixfmt_core::{ArgValue, format};

fn bench_padded_widths(c: &mut Criterion) {
    let widths: &[(&str, &[u8])] =
        &[("w8", b"{:8}"), ("w32", b"{:32}"), ("w128", b"{:128}")];
    let mut group = c.benchmark_group("format_padded_str");

    for &(label, template) in widths {
        group.throughput(Throughput::Elements(1));
        group.bench_with_input(BenchmarkId::new("left_align", label), &template, |b, &tmpl| {
            let mut buf = [0u8; 160];
            let args = [ArgValue::str(b"hi")];
            b.iter(|| {
                let n = format(&mut buf, tmpl, &args).unwrap();
                black_box(n);
            });
        });
    }
    group.finish();
}

fn bench_alignments(c: &mut Criterion) {
    let aligns: &[(&str, &[u8])] = &[("left", b"{:<20}"), ("right", b"{:>20}"), ("center", b"{:^20}")];
    let mut group = c.benchmark_group("format_alignment");

    for &(label, template) in aligns {
        group.bench_with_input(BenchmarkId::new("str", label), &template, |b, &tmpl| {
            let mut buf = [0u8; 40];
            let args = [ArgValue::str(b"mid")];
            b.iter(|| {
                let n = format(&mut buf, tmpl, &args).unwrap();
                black_box(n);
            });
        });
    }
    group.finish();
}

fn bench_many_placeholders(c: &mut Criterion) {
    let template: &[u8] = b"{}{}{}{}{}{}{}{}{}{}";
    let mut group = c.benchmark_group("format_template_scan");
    group.throughput(Throughput::Elements(10));

    group.bench_function("ten_placeholders", |b| {
        let mut buf = [0u8; 64];
        let args: [ArgValue<'_, u8>; 10] = core::array::from_fn(|_| ArgValue::str(b"x"));
        b.iter(|| {
            let n = format(&mut buf, template, &args).unwrap();
            black_box(n);
        });
    });
    group.finish();
}

criterion_group!(benches, bench_padded_widths, bench_alignments, bench_many_placeholders);
criterion_main!(benches);
