// Copyright 2017-2019 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

#[macro_use]
extern crate criterion;

use criterion::black_box;
use criterion::Criterion;
use hotseat::{all_moves, legal_moves, perft, GameState, Square};

fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("queen moves d5 empty board", |b| {
        let state = GameState::from_placement("8/8/8/3Q4/8/8/8/8 w").unwrap();
        let d5: Square = "d5".parse().unwrap();
        b.iter(|| legal_moves(black_box(&state), black_box(d5)))
    });

    c.bench_function("knight moves g1 start", |b| {
        let state = GameState::new();
        let g1: Square = "g1".parse().unwrap();
        b.iter(|| legal_moves(black_box(&state), black_box(g1)))
    });

    c.bench_function("game state clone", |b| {
        let state = GameState::new();
        b.iter(|| black_box(&state).clone())
    });

    c.bench_function("generate moves start", |b| {
        let state = GameState::new();
        b.iter(|| all_moves(black_box(&state)))
    });

    c.bench_function("apply move e2e4", |b| {
        let state = GameState::new();
        let (e2, e4): (Square, Square) = ("e2".parse().unwrap(), "e4".parse().unwrap());
        b.iter(|| {
            let mut next = black_box(&state).clone();
            next.apply_move(e2, e4).unwrap()
        })
    });

    c.bench_function("perft 2 start", |b| {
        let state = GameState::new();
        b.iter(|| perft(black_box(&state), 2))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
