use criterion::{black_box, criterion_group, criterion_main, Criterion};
use hltb_lookup::{
    core::HltbGame,
    ranking::{Ranker, SequenceMatcherRanker},
};

fn create_test_candidates(count: usize) -> Vec<HltbGame> {
    (0..count)
        .map(|i| {
            let mut game = HltbGame::new(i.to_string(), format!("Test Game {}: Chapter {}", i, i % 7));
            game.comp_main = Some(3600.0 * (i % 40) as f64);
            game
        })
        .collect()
}

fn bench_sequence_matcher_ranking(c: &mut Criterion) {
    let ranker = SequenceMatcherRanker::new();

    let candidates_20 = create_test_candidates(20);
    let candidates_100 = create_test_candidates(100);

    c.bench_function("sequence_matcher_best_of_20", |b| {
        b.iter(|| black_box(ranker.best_match("test game 5", &candidates_20)));
    });

    c.bench_function("sequence_matcher_best_of_100", |b| {
        b.iter(|| black_box(ranker.best_match("test game 50", &candidates_100)));
    });

    let long_title = "Warhammer 40,000: Dawn of War II - Chaos Rising - Game of the Year Edition".repeat(3);
    c.bench_function("sequence_matcher_long_titles", |b| {
        b.iter(|| black_box(ranker.similarity(&long_title, "Warhammer 40,000: Dawn of War II")));
    });
}

criterion_group!(benches, bench_sequence_matcher_ranking);
criterion_main!(benches);
