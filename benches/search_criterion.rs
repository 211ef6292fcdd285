use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use negamax_chess::game_state::chess_types::{BoardState, Color};
use negamax_chess::move_generation::move_generator::PseudoLegalMoveGenerator;
use negamax_chess::moves::attack_tables::init_attack_tables;
use negamax_chess::search::board_scoring::MaterialCentralityScorer;
use negamax_chess::search::negamax::NegamaxSearch;

const POSITIONS: &[(&str, &str)] = &[
    ("startpos", "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR"),
    (
        "classical_mid",
        "r4rk1/1pp1qppp/p1np1n2/2b1p1B1/2B1P1b1/P1NP1N2/1PP1QPPP/R4RK1",
    ),
    ("end_kpk", "8/8/8/8/8/4k3/4P3/4K3"),
];

fn bench_search(c: &mut Criterion) {
    init_attack_tables();
    let generator = PseudoLegalMoveGenerator::shared();
    let scorer = MaterialCentralityScorer;

    let mut group = c.benchmark_group("negamax");
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(5));
    group.sample_size(10);

    for (name, fen) in POSITIONS {
        let board = BoardState::from_fen(fen).expect("benchmark FEN should parse");
        for depth in [3u8, 4] {
            group.bench_with_input(
                BenchmarkId::from_parameter(format!("{name}_d{depth}")),
                &depth,
                |b, &depth| {
                    b.iter(|| {
                        let mut search = NegamaxSearch::new(&generator, &scorer);
                        let result = search.search_root(black_box(&board), Color::Light, depth);
                        black_box(result.best_move)
                    });
                },
            );
        }
    }

    group.finish();
}

criterion_group!(search_benches, bench_search);
criterion_main!(search_benches);
