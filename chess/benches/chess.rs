use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rookline::{legal, movegen, Board, Color, Game, Position};

const BOARDS: [(&str, &str, Color); 9] = [
    (
        "initial",
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR",
        Color::White,
    ),
    (
        "sicilian",
        "r1b1k2r/2qnbppp/p2ppn2/1p4B1/3NPPP1/2N2Q2/PPP4P/2KR1B1R",
        Color::White,
    ),
    (
        "middle",
        "1rq1r1k1/1p3ppp/pB3n2/3ppP2/Pbb1P3/1PN2B2/2P2QPP/R1R4K",
        Color::White,
    ),
    (
        "open_position",
        "4r1k1/3R1ppp/8/5P2/p7/6PP/4pK2/1rN1B3",
        Color::White,
    ),
    ("queen", "6K1/8/8/1k3q2/3Q4/8/8/8", Color::White),
    ("pawn_promote", "8/PPPPPPPP/8/2k1K3/8/8/pppppppp/8", Color::White),
    (
        "fools_mate",
        "rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR",
        Color::White,
    ),
    ("stalemate", "7k/5Q2/6K1/8/8/8/8/8", Color::Black),
    ("max", "3Q4/1Q4Q1/4Q3/2Q4R/Q4Q2/3Q4/NR4Q1/kN1BB1K1", Color::White),
];

fn games() -> impl Iterator<Item = (&'static str, Game)> {
    BOARDS.iter().map(|&(name, placement, turn)| {
        (
            name,
            Game::from_board(Board::from_placement(placement).unwrap(), turn),
        )
    })
}

fn bench_pseudo_legal(c: &mut Criterion) {
    let mut group = c.benchmark_group("pseudo_legal");
    for (name, game) in games() {
        let board = game.board();
        group.bench_function(name, |b| {
            b.iter(|| {
                board
                    .pieces_of(game.turn())
                    .into_iter()
                    .map(|pos| black_box(movegen::pseudo_legal(board, pos).len()))
                    .sum::<usize>()
            })
        });
    }
}

fn bench_legal(c: &mut Criterion) {
    let mut group = c.benchmark_group("legal");
    for (name, game) in games() {
        group.bench_function(name, |b| {
            b.iter(|| black_box(game.all_legal_moves(game.turn()).unwrap().len()))
        });
    }
}

fn bench_is_attacked(c: &mut Criterion) {
    let mut group = c.benchmark_group("is_attacked");
    for (name, game) in games() {
        group.bench_function(name, |b| {
            b.iter(|| {
                for color in [Color::White, Color::Black] {
                    for pos in Position::iter() {
                        black_box(movegen::is_attacked(game.board(), pos, color));
                    }
                }
            })
        });
    }
}

fn bench_has_legal_moves(c: &mut Criterion) {
    let mut group = c.benchmark_group("has_legal_moves");
    for (name, game) in games() {
        group.bench_function(name, |b| {
            b.iter(|| black_box(legal::has_legal_moves(game.board(), game.turn()).unwrap()))
        });
    }
}

fn bench_calc_outcome(c: &mut Criterion) {
    let mut group = c.benchmark_group("calc_outcome");
    for (name, game) in games() {
        group.bench_function(name, |b| b.iter(|| black_box(game.calc_outcome().unwrap())));
    }
}

criterion_group!(
    chess,
    bench_pseudo_legal,
    bench_legal,
    bench_is_attacked,
    bench_has_legal_moves,
    bench_calc_outcome,
);

criterion_main!(chess);
