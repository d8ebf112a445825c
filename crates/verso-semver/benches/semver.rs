use criterion::{black_box, criterion_group, criterion_main, Criterion};
use verso_semver::{
    is_valid_version, ComponentsParser, FormattingOptions, RegexParser, ScanningParser, Version,
};

const INPUTS: [&str; 9] = [
    "1.2.3",
    "1.2.3-beta.1",
    "2.4.0+build.5",
    "1-beta",
    "22.33+abc-1",
    "1.2.3-alpha.1.-2+exp.test",
    "1.0.0-rc.1",
    "1.2.3.4",
    "1.2.3-beta.",
];

fn bench_scanning_parser(c: &mut Criterion) {
    c.bench_function("parse_scanning", |b| {
        b.iter(|| {
            for input in INPUTS {
                black_box(ScanningParser.parse(black_box(input)));
            }
        })
    });
}

fn bench_regex_parser(c: &mut Criterion) {
    c.bench_function("parse_regex", |b| {
        b.iter(|| {
            for input in INPUTS {
                black_box(RegexParser.parse(black_box(input)));
            }
        })
    });
}

fn bench_validate(c: &mut Criterion) {
    c.bench_function("is_valid_version", |b| {
        b.iter(|| {
            for input in INPUTS {
                black_box(is_valid_version(black_box(input)));
            }
        })
    });
}

fn bench_compare(c: &mut Criterion) {
    let cases: Vec<(Version, Version)> = [
        ("1.2.3", "1.2.4"),
        ("2.4.0-alpha", "2.4.0"),
        ("1.0.0-alpha.1", "1.0.0-alpha.beta"),
        ("1.0.0-beta.2", "1.0.0-beta.11"),
        ("1.2.3+build.1", "1.2.3+build.2"),
        ("1.0.0-rc.1.2.3.4", "1.0.0-rc.1.2.3.5"),
    ]
    .iter()
    .filter_map(|(a, b)| Some((Version::parse(a)?, Version::parse(b)?)))
    .collect();

    c.bench_function("version_compare", |b| {
        b.iter(|| {
            for (lhs, rhs) in &cases {
                black_box(black_box(lhs).cmp(black_box(rhs)));
            }
        })
    });
}

fn bench_sort(c: &mut Criterion) {
    let versions: Vec<Version> = [
        "1.0.0",
        "0.1.0",
        "0.1.1",
        "3.2.1",
        "2.4.0-alpha",
        "2.4.0",
        "1.0.0-rc.1",
        "1.0.0-beta.11",
        "50.2",
        "1.2.3",
        "2.4.5",
        "2.4.5-rc1",
    ]
    .iter()
    .filter_map(|v| Version::parse(v))
    .collect();

    c.bench_function("version_sort", |b| {
        b.iter(|| {
            let mut sorted = versions.clone();
            sorted.sort();
            black_box(sorted);
        })
    });
}

fn bench_format(c: &mut Criterion) {
    let versions: Vec<Version> = INPUTS.iter().filter_map(|v| Version::parse(v)).collect();
    let options = FormattingOptions::FULL_VERSION | FormattingOptions::DROP_TRAILING_ZEROS;

    c.bench_function("version_format", |b| {
        b.iter(|| {
            for version in &versions {
                black_box(version.to_string_with(black_box(options)));
            }
        })
    });
}

criterion_group!(
    benches,
    bench_scanning_parser,
    bench_regex_parser,
    bench_validate,
    bench_compare,
    bench_sort,
    bench_format
);
criterion_main!(benches);
