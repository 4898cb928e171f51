// Ficheiro: tests/engine.rs
// Descrição: Propriedades do gerador de lances e da pesquisa, verificadas ao longo
// de partidas aleatórias reprodutíveis e em posições de cenário.

use motor_damas::agent::{Agent, RandomAgent};
use motor_damas::evaluation::WIN_SCORE;
use motor_damas::moves::find_captures_for_piece;
use motor_damas::search::search_best_move;
use motor_damas::*;

fn at(row: u8, col: u8) -> Coord {
    Coord::new(row, col).unwrap()
}

/// Posições visitadas por uma partida aleatória (com promoções), com o lado a jogar.
fn random_positions(seed: u64, max_turns: usize) -> Vec<(Board, Side)> {
    let mut agent = RandomAgent::new(Some(seed));
    let mut board = Board::new();
    let mut side = Side::Black;
    let mut positions = Vec::new();

    for _ in 0..max_turns {
        if winner(&board).is_some() {
            break;
        }
        positions.push((board.clone(), side));
        board = agent.choose(&board, side).unwrap().promote_kings();
        side = !side;
    }
    positions
}

#[test]
fn legal_moves_properties_hold_during_random_games() {
    for seed in 0..8 {
        for (board, side) in random_positions(seed, 120) {
            let moves = legal_moves(&board, side);

            // Determinismo
            assert_eq!(moves, legal_moves(&board, side));

            for next in &moves.states {
                let transition = board.describe_transition(next);

                // No máximo uma peça se move (uma dama pode voltar à casa de partida),
                // e nenhuma peça do lado a jogar desaparece
                assert!(transition.moved.len() <= 1);
                assert_eq!(next.count_side(side), board.count_side(side));
                assert!(next.len() <= board.len());
                assert!(transition.captured.iter().all(|p| p.side == !side));

                if let Some(&(mover, _, to)) = transition.moved.first() {
                    assert_eq!(mover.side, side);
                    assert_eq!(next.get(mover), Some(to));

                    // Cadeias máximas: a peça não pode continuar a capturar
                    if moves.is_capture {
                        assert!(find_captures_for_piece(mover, next, side).is_empty());
                    }
                }

                if moves.is_capture {
                    assert!(transition.is_capture());
                } else {
                    assert_eq!(transition.moved.len(), 1);
                    assert!(!transition.is_capture());
                    assert_eq!(next.len(), board.len());
                }
            }
        }
    }
}

#[test]
fn captures_are_mandatory_when_available() {
    for seed in 100..106 {
        for (board, side) in random_positions(seed, 120) {
            let any_capture = board
                .pieces_of(side)
                .any(|(piece, _)| !find_captures_for_piece(piece, &board, side).is_empty());
            let moves = legal_moves(&board, side);
            assert_eq!(moves.is_capture, any_capture);
            if any_capture {
                assert!(moves.states.iter().all(|next| next.len() < board.len()));
            }
        }
    }
}

#[test]
fn evaluation_bounds() {
    for seed in 200..204 {
        for (board, _) in random_positions(seed, 200) {
            let score = evaluate(&board);
            match winner(&board) {
                Some(Winner::White) => assert_eq!(score, WIN_SCORE),
                Some(Winner::Black) => assert_eq!(score, -WIN_SCORE),
                None => assert!(score > -WIN_SCORE && score < WIN_SCORE),
            }
        }
    }
}

#[test]
fn terminal_when_side_has_no_pieces() {
    let only_black = Board::from_pieces([(Piece::man(Side::Black, 1), at(3, 2))]).unwrap();
    assert_eq!(winner(&only_black), Some(Winner::Black));
    assert_eq!(evaluate(&only_black), -WIN_SCORE);

    let only_white = Board::from_pieces([(Piece::king(Side::White, 1), at(3, 2))]).unwrap();
    assert_eq!(winner(&only_white), Some(Winner::White));
    assert_eq!(evaluate(&only_white), WIN_SCORE);
}

#[test]
fn terminal_when_side_to_move_is_blocked() {
    // O homem preto em (6, 1) está bloqueado por duas damas brancas que ele não pode saltar
    let board = Board::from_pieces([
        (Piece::man(Side::Black, 1), at(6, 1)),
        (Piece::king(Side::White, 1), at(7, 0)),
        (Piece::king(Side::White, 2), at(7, 2)),
    ])
    .unwrap();
    assert!(legal_moves(&board, Side::Black).is_empty());
    assert_eq!(winner(&board), Some(Winner::White));
}

#[test]
fn depth_one_search_from_start() {
    let board = Board::new();
    let (score, next) = search_best_move(&board, 1, true, false).unwrap();

    let transition = board.describe_transition(&next);
    assert_eq!(transition.moved.len(), 1);
    assert!(transition.captured.is_empty());

    let (piece, from, to) = transition.moved[0];
    assert_eq!(piece.side, Side::White);
    assert_eq!(piece.rank, Rank::Man);
    assert_eq!(to.row() + 1, from.row());
    assert_eq!((to.col() as i8 - from.col() as i8).abs(), 1);
    assert_eq!(score, evaluate(&next));
    assert_eq!(make_intelligent_move(&board, 1, true).unwrap(), next);
}

#[test]
fn single_capture_scenario() {
    let white = Piece::man(Side::White, 1);
    let black = Piece::man(Side::Black, 1);
    let board = Board::from_pieces([(white, at(3, 4)), (black, at(2, 3))]).unwrap();

    let moves = legal_moves(&board, Side::White);
    assert!(moves.is_capture);
    assert_eq!(moves.len(), 1);
    assert_eq!(moves.states[0].get(white), Some(at(1, 2)));
    assert!(!moves.states[0].contains(black));
}

#[test]
fn man_does_not_capture_a_piece_behind_it() {
    // Com o homem preto atrás do homem branco não há captura: só os dois avanços
    let white = Piece::man(Side::White, 1);
    let black = Piece::man(Side::Black, 1);
    let board = Board::from_pieces([(white, at(2, 3)), (black, at(3, 4))]).unwrap();

    let moves = legal_moves(&board, Side::White);
    assert!(!moves.is_capture);
    let destinations: Vec<_> = moves.states.iter().map(|b| b.get(white).unwrap()).collect();
    assert_eq!(destinations, vec![at(1, 2), at(1, 4)]);
    assert!(moves.states.iter().all(|b| b.contains(black)));
}

#[test]
fn search_prefers_the_first_of_equal_moves() {
    // Todos os lances das pretas a profundidade 1 valem o mesmo: o escolhido é o primeiro gerado
    let board = Board::new();
    let first = legal_moves(&board, Side::Black).states[0].clone();
    let result = minimax(&board, 1, false);
    assert_eq!(result.best, Some(first));
}

#[test]
fn search_does_not_change_across_runs() {
    let board = Board::new();
    let sequential = search_best_move(&board, 3, true, false).unwrap();
    for _ in 0..2 {
        assert_eq!(search_best_move(&board, 3, true, false).unwrap(), sequential);
        assert_eq!(search_best_move(&board, 3, true, true).unwrap(), sequential);
    }
}
