use criterion::{Criterion, criterion_group, criterion_main};
use name_chain::{Dictionary, GameState, apply_move, restart};
use std::hint::black_box;

/// Helper to create a game several moves deep
fn setup_game(names: &[&str]) -> GameState {
    let dictionary = Dictionary::standard();
    names.iter().fold(restart(), |state, name| {
        apply_move(dictionary, &state, name).state
    })
}

/// Benchmark the opening move
fn bench_first_move(c: &mut Criterion) {
    let dictionary = Dictionary::standard();
    let state = restart();

    c.bench_function("apply_move_first", |b| {
        b.iter(|| apply_move(dictionary, black_box(&state), black_box("Arjun")));
    });
}

/// Benchmark an accepted move deep into a game
fn bench_chained_move(c: &mut Criterion) {
    let dictionary = Dictionary::standard();
    let state = setup_game(&["Arjun", "Nitin", "Niraj", "Jagan", "Nisha", "Anita"]);

    c.bench_function("apply_move_chained", |b| {
        b.iter(|| apply_move(dictionary, black_box(&state), black_box("Aisha")));
    });
}

/// Benchmark each rejection path
fn bench_rejections(c: &mut Criterion) {
    let dictionary = Dictionary::standard();
    let state = setup_game(&["Arjun", "Nitin"]);
    let mut group = c.benchmark_group("apply_move_rejected");

    for (label, name) in [
        ("empty", "   "),
        ("length", "Neha"),
        ("unknown", "Bobby"),
        ("used", "nitin"),
        ("chain", "Priya"),
    ] {
        group.bench_function(label, |b| {
            b.iter(|| apply_move(dictionary, black_box(&state), black_box(name)));
        });
    }

    group.finish();
}

/// Benchmark JSON encoding of a stored game
fn bench_state_json(c: &mut Criterion) {
    let state = setup_game(&["Arjun", "Nitin", "Niraj", "Jagan", "Nisha", "Anita"]);
    let json = serde_json::to_string(&state).unwrap();

    c.bench_function("state_to_json", |b| {
        b.iter(|| serde_json::to_string(black_box(&state)).unwrap());
    });
    c.bench_function("state_from_json", |b| {
        b.iter(|| serde_json::from_str::<GameState>(black_box(&json)).unwrap());
    });
}

criterion_group!(
    benches,
    bench_first_move,
    bench_chained_move,
    bench_rejections,
    bench_state_json
);
criterion_main!(benches);
