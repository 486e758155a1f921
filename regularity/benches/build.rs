use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use regularity::{pattern::escape, Regularity};

pub fn criterion_benchmark(c: &mut Criterion) {
    assert_eq!(escape("1.5$"), r"1\.5\$");
    c.bench_function("escape", |b| {
        b.iter(|| escape(black_box("https://example.com/path?query=1&page=2")))
    });

    c.bench_function("source", |b| {
        b.iter(|| {
            let mut r = Regularity::new();
            r.start_with((3, black_box("digits")))
                .unwrap()
                .then("-")
                .unwrap()
                .maybe("#")
                .unwrap()
                .one_of(["a", "bb", "ccc"])
                .unwrap()
                .between((2, 4), "letters")
                .unwrap()
                .end_with("$")
                .unwrap();
            r.source()
        })
    });

    let mut r = Regularity::new();
    r.start_with((3, "digits"))
        .unwrap()
        .between((2, 4), "letters")
        .unwrap()
        .insensitive()
        .unwrap();
    assert!(r.done().unwrap().is_match("123ab"));
    c.bench_function("done", |b| b.iter(|| black_box(&r).done().unwrap()));
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
