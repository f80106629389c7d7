use criterion::{black_box, criterion_group, criterion_main, Criterion};
use profanity_filter::{Config, ProfanityFilter};

/// Roughly 20,000 characters of mostly clean prose with some disguised profanity mixed in.
fn input() -> String {
    let sentences = [
        "The quarterly report was submitted before the deadline. ",
        "Nobody expected the class assignment to take this long! ",
        "What the f**k happened to the build server last night? ",
        "Please forward the updated schedule to everyone involved. ",
        "That was a total bull-shit excuse, and $h1t like that adds up. ",
        "The cocktail party in Scunthorpe was moved to Saturday. ",
        "Shiiiit, the coffee machine is broken again. ",
    ];
    let mut input = String::new();
    let mut i = 0;
    while input.chars().count() < 20_000 {
        input.push_str(sentences[i % sentences.len()]);
        i += 1;
    }
    input
}

fn filter_benchmark(c: &mut Criterion) {
    let filter = ProfanityFilter::default();
    let input = input();

    c.bench_function("filter", |b| {
        b.iter(|| black_box(filter.filter(black_box(&input))))
    });
    c.bench_function("contains clean", |b| {
        let clean = "The quarterly report was submitted before the deadline. ".repeat(350);
        b.iter(|| black_box(filter.contains(black_box(&clean))))
    });
    c.bench_function("analyze", |b| {
        b.iter(|| black_box(filter.analyze(black_box(&input))))
    });
}

fn build_benchmark(c: &mut Criterion) {
    c.bench_function("build", |b| {
        b.iter(|| black_box(ProfanityFilter::new(black_box(&Config::default()))))
    });
}

criterion_group! {
    name = benches;
    config = Criterion::default().sample_size(100);
    targets = filter_benchmark, build_benchmark
}
criterion_main!(benches);
