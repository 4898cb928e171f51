// Ficheiro: src/moves/tables.rs
// Descrição: Tabelas pré-calculadas de vizinhos diagonais para cada casa.

use crate::types::{Coord, Piece};
use lazy_static::lazy_static;

/// As quatro diagonais, pela ordem (linha, coluna): as duas primeiras descem
/// (frente das pretas), as duas últimas sobem (frente das brancas).
pub const DIAGONALS: [(i8, i8); 4] = [(1, -1), (1, 1), (-1, -1), (-1, 1)];

const DOWN_DIRECTIONS: [usize; 2] = [0, 1];
const UP_DIRECTIONS: [usize; 2] = [2, 3];
const KING_DIRECTIONS: [usize; 4] = [0, 1, 2, 3];

/// Vizinho imediato e casa de aterragem de um salto numa diagonal.
/// `None` quando a casa cai fora do tabuleiro.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Diagonal {
    pub step: Option<Coord>,
    pub jump: Option<Coord>,
}

lazy_static! {
    static ref DIAGONAL_TABLE: Vec<[Diagonal; 4]> = (0..64)
        .filter_map(Coord::from_index)
        .map(|from| {
            DIAGONALS.map(|(d_row, d_col)| Diagonal {
                step: from.offset(d_row, d_col),
                jump: from.offset(2 * d_row, 2 * d_col),
            })
        })
        .collect();
}

/// Diagonal `direction` (índice em [`DIAGONALS`]) a partir de `from`.
#[inline]
pub fn diagonal(from: Coord, direction: usize) -> Diagonal {
    DIAGONAL_TABLE[from.to_index()][direction]
}

/// Direções em que uma peça pode andar e capturar: os homens só para a frente,
/// as damas nas quatro diagonais.
pub fn directions(piece: Piece) -> &'static [usize] {
    if piece.is_king() {
        &KING_DIRECTIONS
    } else if piece.side.forward() > 0 {
        &DOWN_DIRECTIONS
    } else {
        &UP_DIRECTIONS
    }
}
