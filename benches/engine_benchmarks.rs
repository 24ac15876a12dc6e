//! Benchmarks for move generation, candidate squares and the endgame search.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;

use infinite_engine::board::search::{calculate, candidate_moves, evaluate, get_intersections};
use infinite_engine::board::{Coordinate, Position, PositionBuilder, SearchParams};

const ENDGAMES: [(&str, &str); 3] = [
    ("queen", "b k0,0|Q5,3|K9,9"),
    ("rooks", "b k0,0|R-100,7|R250,-3|K1000,1000"),
    ("mixed", "b k3,-2|N0,0|HA7,7|Q-20,11|K-6,4"),
];

fn bench_movegen(c: &mut Criterion) {
    let mut group = c.benchmark_group("movegen");

    let mut startpos = PositionBuilder::starting_position().build();
    let squares: Vec<Coordinate> = startpos.board().pieces().map(|p| p.coords).collect();
    group.bench_function("startpos", |b| {
        b.iter(|| {
            for &coords in &squares {
                black_box(startpos.calculate(coords));
            }
        })
    });

    let mut open = Position::from_notation("w Q0,0|RO4,4|HU-3,2|K9,-9|r0,40|n7,7|k-30,30").unwrap();
    for (name, coords) in [
        ("queen", Coordinate::new(0, 0)),
        ("rose", Coordinate::new(4, 4)),
        ("huygen", Coordinate::new(-3, 2)),
    ] {
        group.bench_with_input(BenchmarkId::new("open", name), &coords, |b, &coords| {
            b.iter(|| black_box(open.calculate(coords)))
        });
    }

    group.bench_function("any_legal_move", |b| {
        b.iter(|| black_box(open.has_any_legal_move(open.turn())))
    });

    group.finish();
}

fn bench_candidates(c: &mut Criterion) {
    let mut group = c.benchmark_group("candidates");

    for (name, text) in ENDGAMES {
        let defending = Position::from_notation(text).unwrap();
        group.bench_with_input(BenchmarkId::new("intersections", name), &(), |b, _| {
            b.iter(|| black_box(get_intersections(&defending)))
        });
        let mut attacking = Position::from_notation(&text.replacen('b', "w", 1)).unwrap();
        group.bench_with_input(BenchmarkId::new("moves", name), &(), |b, _| {
            b.iter(|| black_box(candidate_moves(&mut attacking)))
        });
    }

    group.finish();
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");
    group.sample_size(10); // Fewer samples for slower benchmarks

    for depth in [1, 2, 3] {
        group.bench_with_input(BenchmarkId::new("queen", depth), &depth, |b, &depth| {
            let params = SearchParams::default().with_depth(depth);
            let mut rng = StdRng::seed_from_u64(0);
            b.iter(|| {
                let mut position = Position::from_notation(ENDGAMES[0].1).unwrap();
                calculate(&mut position, &params, &mut rng)
            })
        });
    }

    for (name, text) in ENDGAMES {
        let params = SearchParams::default();
        let mut position = Position::from_notation(text).unwrap();
        group.bench_with_input(BenchmarkId::new("eval", name), &(), |b, _| {
            b.iter(|| black_box(evaluate(&mut position, &params)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_movegen, bench_candidates, bench_search);
criterion_main!(benches);
