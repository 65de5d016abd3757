//! 短码生成与 URL 验证基准测试

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use shortmap::utils::CodeGenerator;
use shortmap::utils::url_validator::validate_url;

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("code_generator/generate");

    for (min, max) in [(6, 8), (6, 6), (12, 16)] {
        let generator = CodeGenerator::with_range(min, max);
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}-{}", min, max)),
            &generator,
            |b, g| {
                b.iter(|| g.generate());
            },
        );
    }

    group.finish();
}

fn bench_validate_url(c: &mut Criterion) {
    let mut group = c.benchmark_group("url_validator/validate_url");

    group.bench_function("valid_https", |b| {
        b.iter(|| {
            assert!(validate_url("https://example.com/some/long/path?q=1").is_ok());
        });
    });

    group.bench_function("invalid_scheme", |b| {
        b.iter(|| {
            assert!(validate_url("ftp://example.com").is_err());
        });
    });

    group.bench_function("malformed", |b| {
        b.iter(|| {
            assert!(validate_url("not a url").is_err());
        });
    });

    group.finish();
}

criterion_group!(benches, bench_generate, bench_validate_url);
criterion_main!(benches);
