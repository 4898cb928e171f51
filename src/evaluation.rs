// Ficheiro: src/evaluation.rs
// Descrição: Deteção de tabuleiros terminais e avaliação material.
// As brancas maximizam e as pretas minimizam.

use crate::board::Board;
use crate::moves::has_legal_move;
use crate::types::*;

/// Pontuação de uma vitória das brancas (e, com sinal trocado, das pretas).
pub const WIN_SCORE: i32 = 1000;

/// Valores materiais de cada categoria de peça.
const MAN_VALUE: i32 = 1;
const KING_VALUE: i32 = 2;

/// Determina o vencedor, se o tabuleiro for terminal.
///
/// Perde quem não tiver peças; depois, perde quem não tiver lances legais.
/// As pretas são verificadas antes das brancas em cada uma das regras.
pub fn winner(board: &Board) -> Option<Winner> {
    if board.count_side(Side::White) == 0 {
        return Some(Winner::Black);
    }
    if board.count_side(Side::Black) == 0 {
        return Some(Winner::White);
    }

    // Sem lances possíveis: o adversário ganha
    if !has_legal_move(board, Side::Black) {
        return Some(Winner::White);
    }
    if !has_legal_move(board, Side::White) {
        return Some(Winner::Black);
    }

    None
}

/// Avalia o tabuleiro: ±WIN_SCORE se terminal, senão a diferença material
/// (homens valem 1, damas valem 2), positiva a favor das brancas.
pub fn evaluate(board: &Board) -> i32 {
    score_with_winner(board, winner(board))
}

/// Igual a [`evaluate`], para quem já calculou o vencedor.
pub(crate) fn score_with_winner(board: &Board, winner: Option<Winner>) -> i32 {
    match winner {
        Some(Winner::White) => WIN_SCORE,
        Some(Winner::Black) => -WIN_SCORE,
        None => material(board),
    }
}

/// Diferença material sem considerar o estado terminal.
pub fn material(board: &Board) -> i32 {
    side_material(board, Side::White) - side_material(board, Side::Black)
}

fn side_material(board: &Board, side: Side) -> i32 {
    board.count(side, Rank::Man) as i32 * MAN_VALUE + board.count(side, Rank::King) as i32 * KING_VALUE
}
