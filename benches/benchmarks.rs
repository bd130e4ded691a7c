// benches/benchmarks.rs — Performance benchmarks (criterion)
//
// Relay construction grows with every link because each writer embeds the
// whole encoded program after it. Measured:
//   1. Full build of the default and the longest chain
//   2. A single writer step on a large payload
//   3. Template minimization
//   4. The on-paper cycle used by `sdqr verify`

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use sdqr::relay::minimize::Minimizer;
use sdqr::relay::simulate::run_cycle;
use sdqr::relay::{writer, Chain, LanguageKind, PlainFormatter, RelayBuilder};

fn longest_chain() -> Chain {
    Chain::new(vec![
        LanguageKind::C,
        LanguageKind::Cpp,
        LanguageKind::CSharp,
        LanguageKind::Rust,
    ])
    .expect("valid chain")
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");

    let default_chain = Chain::default();
    group.bench_function("default_chain", |b| {
        b.iter(|| {
            RelayBuilder::new(black_box(&default_chain), &PlainFormatter)
                .build()
                .expect("build")
        })
    });

    let longest = longest_chain();
    group.bench_function("five_links", |b| {
        b.iter(|| {
            RelayBuilder::new(black_box(&longest), &PlainFormatter)
                .build()
                .expect("build")
        })
    });

    group.finish();
}

fn bench_writer(c: &mut Criterion) {
    let payload = "printf(\"%s\\n\", line);\n".repeat(2_000);
    c.bench_function("writer_c_48k", |b| {
        b.iter(|| {
            writer::build(
                LanguageKind::C,
                black_box(&payload),
                "SDQR.cpp",
                "status",
            )
            .expect("writer")
        })
    });
}

fn bench_minimize(c: &mut Criterion) {
    let source = "int main() {\n  // comment\n  puts(\"x\");\n\n  return 0;\n}\n".repeat(500);
    let standard = Minimizer::new(&["//"]);
    let aggressive = Minimizer::new(&["//"]).aggressive();

    let mut group = c.benchmark_group("minimize");
    group.bench_function("standard", |b| {
        b.iter(|| standard.minimize(black_box(&source)))
    });
    group.bench_function("aggressive", |b| {
        b.iter(|| aggressive.minimize(black_box(&source)))
    });
    group.finish();
}

fn bench_cycle(c: &mut Criterion) {
    let chain = longest_chain();
    let relay = RelayBuilder::new(&chain, &PlainFormatter)
        .build()
        .expect("build");
    c.bench_function("run_cycle_five_links", |b| {
        b.iter(|| run_cycle(&chain, black_box(&relay.source)).expect("cycle"))
    });
}

criterion_group!(benches, bench_build, bench_writer, bench_minimize, bench_cycle);
criterion_main!(benches);
