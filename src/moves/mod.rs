// Ficheiro: src/moves/mod.rs
// Descrição: Gerador de lances legais: as capturas são obrigatórias e têm precedência.

pub mod capture;
pub mod simple;
pub mod tables;

use crate::{board::Board, types::Side};

pub use capture::{find_captures_for_piece, recursive_capture, CaptureStep};
pub use simple::find_simple_moves;

/// Conjunto de tabuleiros alcançáveis com um lance legal.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LegalMoves {
    pub states: Vec<Board>,
    /// Verdadeiro quando os estados resultam de capturas (informativo).
    pub is_capture: bool,
}

impl LegalMoves {
    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}

impl IntoIterator for LegalMoves {
    type Item = Board;
    type IntoIter = std::vec::IntoIter<Board>;

    fn into_iter(self) -> Self::IntoIter {
        self.states.into_iter()
    }
}

/// Gera todos os tabuleiros resultantes de um lance legal de `side`.
///
/// Se existir alguma captura, só as cadeias de captura máximas são devolvidas.
/// Caso contrário, um tabuleiro por cada par (peça, destino) dos lances simples.
pub fn legal_moves(board: &Board, side: Side) -> LegalMoves {
    let captures = capture::all_captures(board, side);
    if !captures.is_empty() {
        return LegalMoves { states: captures, is_capture: true };
    }

    let states = simple::find_simple_moves(board, side)
        .into_iter()
        .flat_map(|(piece, destinations)| {
            destinations.into_iter().map(move |to| board.with_move(piece, to))
        })
        .collect();

    LegalMoves { states, is_capture: false }
}

/// Verifica se `side` tem algum lance legal, sem materializar os tabuleiros.
/// Equivale a `!legal_moves(board, side).is_empty()`.
pub fn has_legal_move(board: &Board, side: Side) -> bool {
    capture::has_capture(board, side) || simple::has_simple_move(board, side)
}
