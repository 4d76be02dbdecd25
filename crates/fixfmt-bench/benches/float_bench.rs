//! Float rendering benchmarks: the fixed/scientific/general presentations
//! and the zero fast path that skips significand extraction entirely.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use fixfmt_core::{ArgValue, format};

fn bench_presentations(c: &mut Criterion) {
    let templates: &[(&str, &[u8])] =
        &[("fixed", b"{:f}"), ("scientific", b"{:e}"), ("general", b"{:g}")];
    let mut group = c.benchmark_group("format_float_presentation");

    for &(label, template) in templates {
        group.bench_with_input(BenchmarkId::new("f64", label), &template, |b, &tmpl| {
            let mut buf = [0u8; 64];
            let args = [ArgValue::from(1234.56789_f64)];
            b.iter(|| {
                let n = format(&mut buf, tmpl, &args).unwrap();
                black_box(n);
            });
        });
    }
    group.finish();
}

fn bench_zero_fast_path(c: &mut Criterion) {
    c.bench_function("format_float_zero", |b| {
        let mut buf = [0u8; 32];
        let args = [ArgValue::from(0.0_f64)];
        b.iter(|| {
            let n = format(&mut buf, b"{:f}", &args).unwrap();
            black_box(n);
        });
    });
}

fn bench_precision_sweep(c: &mut Criterion) {
    let precisions: &[(&str, &[u8])] =
        &[("p0", b"{:.0f}"), ("p6", b"{:.6f}"), ("p15", b"{:.15f}")];
    let mut group = c.benchmark_group("format_float_precision");

    for &(label, template) in precisions {
        group.bench_with_input(BenchmarkId::new("f64", label), &template, |b, &tmpl| {
            let mut buf = [0u8; 64];
            let args = [ArgValue::from(core::f64::consts::PI)];
            b.iter(|| {
                let n = format(&mut buf, tmpl, &args).unwrap();
                black_box(n);
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_presentations, bench_zero_fast_path, bench_precision_sweep);
criterion_main!(benches);
