// Ficheiro: src/board.rs
// Descrição: Módulo que contém a struct Board e os seus métodos principais.

use super::types::*;
use crate::error::{EngineError, EngineResult};
use std::collections::BTreeMap;
use std::fmt;

/// Posições iniciais (linha, coluna) dos homens, pela ordem dos seus números 1..=12.
const BLACK_START: [(u8, u8); 12] = [
    (0, 1), (0, 3), (0, 5), (0, 7),
    (1, 0), (1, 2), (1, 4), (1, 6),
    (2, 1), (2, 3), (2, 5), (2, 7),
];
const WHITE_START: [(u8, u8); 12] = [
    (5, 0), (5, 2), (5, 4), (5, 6),
    (6, 1), (6, 3), (6, 5), (6, 7),
    (7, 0), (7, 2), (7, 4), (7, 6),
];

// O tabuleiro é um valor: cada transformação devolve um novo Board e nunca altera o original.
// O mapa ordenado garante uma ordem de iteração estável (e portanto pesquisas reprodutíveis).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Board {
    pieces: BTreeMap<Piece, Coord>,

    // Bitboards de ocupação de cada lado, mantidos em sincronia com `pieces`.
    black_occupancy: Bitboard,
    white_occupancy: Bitboard,
}

impl Board {
    /// Cria um novo tabuleiro na posição inicial padrão (12 homens por lado).
    pub fn new() -> Self {
        let mut board = Board::empty();
        for (i, &(row, col)) in BLACK_START.iter().enumerate() {
            board.insert(Piece::man(Side::Black, i as u8 + 1), Coord::new_unchecked(row, col));
        }
        for (i, &(row, col)) in WHITE_START.iter().enumerate() {
            board.insert(Piece::man(Side::White, i as u8 + 1), Coord::new_unchecked(row, col));
        }
        board
    }

    /// Tabuleiro sem peças.
    pub fn empty() -> Self {
        Board::default()
    }

    /// Constrói um tabuleiro a partir de uma lista de peças, validando as invariantes:
    /// nenhuma casa repetida e nenhuma peça repetida (o mesmo lado e número).
    pub fn from_pieces<I>(pieces: I) -> EngineResult<Self>
    where
        I: IntoIterator<Item = (Piece, Coord)>,
    {
        let mut board = Board::empty();
        for (piece, coord) in pieces {
            if board.is_occupied(coord) {
                return Err(EngineError::DuplicateSquare { coord });
            }
            if board.pieces.keys().any(|p| p.side == piece.side && p.index == piece.index) {
                return Err(EngineError::DuplicatePiece { piece });
            }
            board.insert(piece, coord);
        }
        Ok(board)
    }

    fn insert(&mut self, piece: Piece, coord: Coord) {
        *self.occupancy_mut(piece.side) |= coord.bit();
        self.pieces.insert(piece, coord);
    }

    fn remove(&mut self, piece: Piece) -> Option<Coord> {
        let coord = self.pieces.remove(&piece)?;
        *self.occupancy_mut(piece.side) &= !coord.bit();
        Some(coord)
    }

    fn occupancy_mut(&mut self, side: Side) -> &mut Bitboard {
        match side {
            Side::Black => &mut self.black_occupancy,
            Side::White => &mut self.white_occupancy,
        }
    }

    /// Bitboard das casas ocupadas por um lado.
    pub fn occupancy(&self, side: Side) -> Bitboard {
        match side {
            Side::Black => self.black_occupancy,
            Side::White => self.white_occupancy,
        }
    }

    pub fn is_occupied(&self, coord: Coord) -> bool {
        ((self.black_occupancy | self.white_occupancy) & coord.bit()) != 0
    }

    pub fn is_occupied_by(&self, coord: Coord, side: Side) -> bool {
        (self.occupancy(side) & coord.bit()) != 0
    }

    /// Peça que ocupa uma casa, se existir.
    pub fn piece_at(&self, coord: Coord) -> Option<Piece> {
        if !self.is_occupied(coord) {
            return None;
        }
        self.pieces.iter().find(|(_, &c)| c == coord).map(|(&p, _)| p)
    }

    pub fn get(&self, piece: Piece) -> Option<Coord> {
        self.pieces.get(&piece).copied()
    }

    pub fn contains(&self, piece: Piece) -> bool {
        self.pieces.contains_key(&piece)
    }

    /// Itera sobre todas as peças, em ordem estável.
    pub fn iter(&self) -> impl Iterator<Item = (Piece, Coord)> + '_ {
        self.pieces.iter().map(|(&p, &c)| (p, c))
    }

    /// Itera sobre as peças de um lado (homens e damas).
    pub fn pieces_of(&self, side: Side) -> impl Iterator<Item = (Piece, Coord)> + '_ {
        self.iter().filter(move |(p, _)| p.side == side)
    }

    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    /// Número de peças de um lado com uma dada categoria.
    pub fn count(&self, side: Side, rank: Rank) -> usize {
        self.pieces.keys().filter(|p| p.side == side && p.rank == rank).count()
    }

    /// Número total de peças de um lado.
    pub fn count_side(&self, side: Side) -> usize {
        self.occupancy(side).count_ones() as usize
    }

    /// Novo tabuleiro com a peça deslocada para `to` (lance simples).
    pub fn with_move(&self, piece: Piece, to: Coord) -> Board {
        let mut next = self.clone();
        next.remove(piece);
        next.insert(piece, to);
        next
    }

    /// Novo tabuleiro com a peça deslocada para `landing` e a peça `captured` removida.
    pub fn with_capture(&self, piece: Piece, captured: Piece, landing: Coord) -> Board {
        let mut next = self.clone();
        next.remove(captured);
        next.remove(piece);
        next.insert(piece, landing);
        next
    }

    /// Promove a dama todos os homens que chegaram à última linha do adversário.
    /// As pretas são promovidas na linha 7 e as brancas na linha 0.
    pub fn promote_kings(&self) -> Board {
        let mut next = self.clone();
        for (piece, coord) in self.iter() {
            if piece.rank == Rank::Man && coord.row() == piece.side.promotion_row() {
                next.remove(piece);
                next.insert(piece.promoted(), coord);
            }
        }
        next
    }

    /// Descreve a transição de `self` para `after`: peças deslocadas e peças capturadas.
    pub fn describe_transition(&self, after: &Board) -> Transition {
        let moved = self
            .iter()
            .filter_map(|(piece, from)| match after.get(piece) {
                Some(to) if to != from => Some((piece, from, to)),
                _ => None,
            })
            .collect();
        let captured = self
            .iter()
            .filter(|(piece, _)| !after.contains(*piece))
            .map(|(piece, _)| piece)
            .collect();
        Transition { moved, captured }
    }
}

/// Resumo legível de um lance: quem se moveu e quem foi capturado.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub moved: Vec<(Piece, Coord, Coord)>,
    pub captured: Vec<Piece>,
}

impl Transition {
    pub fn is_capture(&self) -> bool {
        !self.captured.is_empty()
    }
}

impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (piece, from, to) in &self.moved {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{} moved from {} to {}", piece, from, to)?;
            first = false;
        }
        for piece in &self.captured {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{} was captured", piece)?;
            first = false;
        }
        Ok(())
    }
}
