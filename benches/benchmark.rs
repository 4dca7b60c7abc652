use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use thematic_recommender::{recommend, Item, Recommender, RecommenderConfig, TFIDFVectorizer};

const THEMES: &[&str] = &[
    "noir", "detective", "corruption", "grief", "memory", "identity", "city", "isolation",
    "survival", "landscape", "romance", "longing", "archive", "cinema", "trauma", "devotion",
];

const FILLER: &[&str] = &[
    "quiet", "restless", "camera", "winter", "harbour", "letters", "family", "journey",
    "stranger", "village", "music", "window", "river", "night", "market", "station",
];

/// synthetic catalog, deterministic
fn make_catalog(size: usize) -> Vec<Item> {
    (0..size)
        .map(|i| {
            let words: Vec<&str> = (0..120)
                .map(|j| {
                    if (i + j) % 7 == 0 {
                        THEMES[(i * 3 + j) % THEMES.len()]
                    } else {
                        FILLER[(i + j * 5) % FILLER.len()]
                    }
                })
                .collect();
            Item::new(i as u64, format!("Film {i}"))
                .with_critique(words.join(" "))
                .with_synopsis(format!("A story about {} and {}", THEMES[i % THEMES.len()], FILLER[i % FILLER.len()]))
                .with_genres(["Drama"])
                .with_description(format!("Item number {i}"))
        })
        .collect()
}

fn recommend_benchmark(c: &mut Criterion) {
    let catalog = make_catalog(200);
    let query = catalog[0].clone();

    c.bench_function("recommend_200", |b| {
        b.iter(|| recommend(black_box(&query), black_box(&catalog), 3))
    });

    let parallel = Recommender::new(RecommenderConfig::default().with_parallel(true)).unwrap();
    c.bench_function("recommend_200_parallel", |b| {
        b.iter(|| parallel.recommend(black_box(&query), black_box(&catalog)))
    });

    let documents: Vec<String> = catalog.iter().map(Item::document).collect();
    c.bench_function("vectorize_200", |b| {
        b.iter(|| {
            let vectorizer: TFIDFVectorizer = TFIDFVectorizer::new(black_box(&documents));
            vectorizer.tfidf_vecs()
        })
    });
}

criterion_group!(benches, recommend_benchmark);
criterion_main!(benches);
