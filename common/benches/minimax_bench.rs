use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use common::games::SessionRng;
use common::games::tictactoe::{
    calculate_minimax_move, calculate_move, Board, BotInput, Mark, TicTacToeBotType,
    TicTacToeGameState,
};

fn bench_minimax_full_self_play() {
    let mut state = TicTacToeGameState::new();
    let mut session_rng = SessionRng::new(0);

    while !state.is_over() {
        let input = BotInput::from_game_state(&state);
        match calculate_move(TicTacToeBotType::Minimax, &input, &mut session_rng) {
            Some(index) => {
                if state.place_mark(input.bot_mark, index).is_err() {
                    break;
                }
            }
            None => break,
        }
    }
}

fn bench_minimax_single_move_empty_board() {
    let input = BotInput {
        board: Board::new(),
        bot_mark: Mark::X,
    };
    black_box(calculate_minimax_move(&input));
}

fn bench_minimax_single_move_mid_game() {
    let mut cells = [Mark::Empty; 9];
    cells[0] = Mark::X;
    cells[4] = Mark::O;
    cells[8] = Mark::X;
    let input = BotInput {
        board: Board::from_cells(cells),
        bot_mark: Mark::O,
    };
    black_box(calculate_minimax_move(&input));
}

fn minimax_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("minimax");

    group.bench_function("full_self_play", |b| {
        b.iter(bench_minimax_full_self_play)
    });

    group.bench_function("single_move_empty", |b| {
        b.iter(bench_minimax_single_move_empty_board)
    });

    group.bench_function("single_move_mid_game", |b| {
        b.iter(bench_minimax_single_move_mid_game)
    });

    group.finish();
}

criterion_group!(benches, minimax_bench);
criterion_main!(benches);
