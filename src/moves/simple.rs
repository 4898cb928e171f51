// Ficheiro: src/moves/simple.rs
// Descrição: Lógica para gerar os lances simples (sem captura).

use super::tables::{diagonal, directions};
use crate::{board::Board, types::{Coord, Piece, Side}};
use std::collections::BTreeMap;

/// Destinos de um passo diagonal livres para uma peça.
fn destinations(piece: Piece, from: Coord, board: &Board) -> Vec<Coord> {
    directions(piece)
        .iter()
        .filter_map(|&direction| diagonal(from, direction).step)
        .filter(|&to| !board.is_occupied(to))
        .collect()
}

/// Gera os lances simples de todas as peças de `side`.
///
/// Os homens só avançam; as damas andam nas quatro diagonais. Peças sem destinos
/// não aparecem no mapa. Só deve ser usado quando não existe nenhuma captura.
pub fn find_simple_moves(board: &Board, side: Side) -> BTreeMap<Piece, Vec<Coord>> {
    board
        .pieces_of(side)
        .map(|(piece, from)| (piece, destinations(piece, from, board)))
        .filter(|(_, moves)| !moves.is_empty())
        .collect()
}

/// Verifica se alguma peça de `side` tem um lance simples.
pub fn has_simple_move(board: &Board, side: Side) -> bool {
    board
        .pieces_of(side)
        .any(|(piece, from)| !destinations(piece, from, board).is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(row: u8, col: u8) -> Coord {
        Coord::new(row, col).unwrap()
    }

    #[test]
    fn test_initial_position_front_rank_only() {
        let board = Board::new();
        let white = find_simple_moves(&board, Side::White);

        // Só os quatro homens da linha 5 se podem mexer: 7 destinos no total
        assert_eq!(white.len(), 4);
        assert_eq!(white.values().map(Vec::len).sum::<usize>(), 7);
        assert_eq!(white[&Piece::man(Side::White, 1)], vec![at(4, 1)]);
        assert_eq!(white[&Piece::man(Side::White, 2)], vec![at(4, 1), at(4, 3)]);

        let black = find_simple_moves(&board, Side::Black);
        assert_eq!(black.len(), 4);
        assert_eq!(black[&Piece::man(Side::Black, 12)], vec![at(3, 6)]);
    }

    #[test]
    fn test_king_moves_in_four_directions() {
        let king = Piece::king(Side::White, 1);
        let board = Board::from_pieces([(king, at(3, 3))]).unwrap();
        let moves = find_simple_moves(&board, Side::White);
        assert_eq!(moves[&king], vec![at(4, 2), at(4, 4), at(2, 2), at(2, 4)]);
    }

    #[test]
    fn test_blocked_piece_is_omitted() {
        let white = Piece::man(Side::White, 1);
        let b1 = Piece::man(Side::Black, 1);
        let b2 = Piece::man(Side::Black, 2);
        // Homem branco encostado à esquerda e bloqueado à frente
        let board = Board::from_pieces([(white, at(4, 0)), (b1, at(3, 1)), (b2, at(2, 2))]).unwrap();
        assert!(find_simple_moves(&board, Side::White).is_empty());
        assert!(!has_simple_move(&board, Side::White));
        assert!(has_simple_move(&board, Side::Black));
    }
}
