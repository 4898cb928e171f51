// Ficheiro: src/moves/capture.rs
// Descrição: Lógica para gerar as capturas, incluindo as cadeias de capturas múltiplas.

use super::tables::{diagonal, directions};
use crate::{board::Board, types::{Coord, Piece, Side}};

/// Uma captura simples: a peça adversária saltada e a casa onde se aterra.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaptureStep {
    pub captured: Piece,
    pub landing: Coord,
}

/// Gera as capturas de um só salto disponíveis para `piece`.
///
/// Uma captura é válida se a casa diagonal adjacente tiver uma peça adversária e a
/// casa seguinte na mesma diagonal estiver livre e dentro do tabuleiro.
pub fn find_captures_for_piece(piece: Piece, board: &Board, side: Side) -> Vec<CaptureStep> {
    let mut captures = Vec::with_capacity(4);
    if piece.side != side {
        return captures;
    }
    let Some(from) = board.get(piece) else {
        return captures;
    };

    for &direction in directions(piece) {
        let d = diagonal(from, direction);
        let (Some(over), Some(landing)) = (d.step, d.jump) else {
            continue;
        };
        if !board.is_occupied_by(over, !side) || board.is_occupied(landing) {
            continue;
        }
        if let Some(captured) = board.piece_at(over) {
            captures.push(CaptureStep { captured, landing });
        }
    }

    captures
}

/// Gera todos os tabuleiros resultantes de cadeias de captura máximas de `piece`.
///
/// Cada ramo trabalha sobre a sua própria cópia do tabuleiro. Uma peça sem capturas
/// imediatas não contribui com nenhum resultado. Resultados repetidos não são removidos.
pub fn recursive_capture(piece: Piece, board: &Board, side: Side) -> Vec<Board> {
    find_captures_for_piece(piece, board, side)
        .into_iter()
        .flat_map(|step| {
            let next = board.with_capture(piece, step.captured, step.landing);
            continue_chain(piece, next, side)
        })
        .collect()
}

// Continua a cadeia a partir de um estado intermédio; sem mais capturas, o estado é uma folha.
fn continue_chain(piece: Piece, board: Board, side: Side) -> Vec<Board> {
    let steps = find_captures_for_piece(piece, &board, side);
    if steps.is_empty() {
        return vec![board];
    }

    steps
        .into_iter()
        .flat_map(|step| {
            let next = board.with_capture(piece, step.captured, step.landing);
            continue_chain(piece, next, side)
        })
        .collect()
}

/// Todas as cadeias de captura de todas as peças de `side`.
pub fn all_captures(board: &Board, side: Side) -> Vec<Board> {
    board
        .pieces_of(side)
        .flat_map(|(piece, _)| recursive_capture(piece, board, side))
        .collect()
}

/// Verifica se alguma peça de `side` tem pelo menos uma captura imediata.
pub fn has_capture(board: &Board, side: Side) -> bool {
    board
        .pieces_of(side)
        .any(|(piece, _)| !find_captures_for_piece(piece, board, side).is_empty())
}
