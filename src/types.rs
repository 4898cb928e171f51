// Ficheiro: src/types.rs
// Descrição: Módulo para as definições de tipos de dados fundamentais do jogo de damas.

use crate::error::{EngineError, EngineResult};
use std::fmt;

/// Número de casas em cada lado do tabuleiro.
pub const BOARD_SIZE: i8 = 8;

// Um Bitboard é um inteiro de 64 bits sem sinal. Cada bit representa uma casa.
// Bit 0 = (0, 0), Bit 1 = (0, 1), ..., Bit 63 = (7, 7).
pub type Bitboard = u64;

// Enum para representar o lado de uma peça ou de um jogador.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Side {
    Black,
    White,
}

impl std::ops::Not for Side {
    type Output = Side;

    fn not(self) -> Self::Output {
        match self {
            Side::Black => Side::White,
            Side::White => Side::Black,
        }
    }
}

impl Side {
    /// Direção "para a frente" em linhas: as pretas descem (linha 0 -> 7), as brancas sobem.
    pub fn forward(self) -> i8 {
        match self {
            Side::Black => 1,
            Side::White => -1,
        }
    }

    /// Linha onde um homem deste lado é promovido a dama.
    pub fn promotion_row(self) -> u8 {
        match self {
            Side::Black => 7,
            Side::White => 0,
        }
    }

    /// O lado maximizador na pesquisa é sempre o das brancas.
    pub fn from_maximizing(maximizing: bool) -> Self {
        if maximizing {
            Side::White
        } else {
            Side::Black
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Black => f.write_str("Black"),
            Side::White => f.write_str("White"),
        }
    }
}

// Enum para representar a categoria de uma peça: homem ou dama (rei).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rank {
    Man,
    King,
}

// Struct para representar uma peça, combinando lado, categoria e o número de instância.
// O número mantém-se quando um homem é promovido, tal como a identidade da peça.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Piece {
    pub side: Side,
    pub rank: Rank,
    pub index: u8,
}

impl Piece {
    pub const fn man(side: Side, index: u8) -> Self {
        Piece { side, rank: Rank::Man, index }
    }

    pub const fn king(side: Side, index: u8) -> Self {
        Piece { side, rank: Rank::King, index }
    }

    pub fn is_king(self) -> bool {
        self.rank == Rank::King
    }

    /// Devolve a mesma peça promovida a dama.
    pub fn promoted(self) -> Self {
        Piece { rank: Rank::King, ..self }
    }
}

/// Identificador textual no formato histórico: `black_3`, `king_white_10`, ...
impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let side = match self.side {
            Side::Black => "black",
            Side::White => "white",
        };
        match self.rank {
            Rank::Man => write!(f, "{}_{}", side, self.index),
            Rank::King => write!(f, "king_{}_{}", side, self.index),
        }
    }
}

// Struct para uma casa do tabuleiro: (linha, coluna), ambas em [0, 7].
// Campos privados: uma Coord está sempre dentro do tabuleiro.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Coord {
    row: u8,
    col: u8,
}

impl Coord {
    /// Cria uma coordenada, validando os limites do tabuleiro.
    pub fn new(row: u8, col: u8) -> EngineResult<Self> {
        if row < BOARD_SIZE as u8 && col < BOARD_SIZE as u8 {
            Ok(Coord { row, col })
        } else {
            Err(EngineError::InvalidCoord { row, col })
        }
    }

    // Para constantes internas já conhecidas como válidas.
    pub(crate) const fn new_unchecked(row: u8, col: u8) -> Self {
        debug_assert!(row < BOARD_SIZE as u8 && col < BOARD_SIZE as u8);
        Coord { row, col }
    }

    pub fn row(self) -> u8 {
        self.row
    }

    pub fn col(self) -> u8 {
        self.col
    }

    /// Desloca a coordenada; casas fora do tabuleiro são simplesmente descartadas.
    pub fn offset(self, d_row: i8, d_col: i8) -> Option<Self> {
        let row = self.row as i8 + d_row;
        let col = self.col as i8 + d_col;
        if (0..BOARD_SIZE).contains(&row) && (0..BOARD_SIZE).contains(&col) {
            Some(Coord { row: row as u8, col: col as u8 })
        } else {
            None
        }
    }

    /// Índice linear (linha * 8 + coluna), usado pelas tabelas pré-calculadas.
    pub fn to_index(self) -> usize {
        self.row as usize * BOARD_SIZE as usize + self.col as usize
    }

    pub fn bit(self) -> Bitboard {
        1u64 << self.to_index()
    }

    /// Inverso de `to_index`; `None` fora de 0..64.
    pub fn from_index(index: usize) -> Option<Self> {
        if index >= (BOARD_SIZE * BOARD_SIZE) as usize {
            return None;
        }
        Some(Coord {
            row: (index / BOARD_SIZE as usize) as u8,
            col: (index % BOARD_SIZE as usize) as u8,
        })
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

// Resultado de um tabuleiro terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Winner {
    Black,
    White,
}

impl From<Side> for Winner {
    fn from(side: Side) -> Self {
        match side {
            Side::Black => Winner::Black,
            Side::White => Winner::White,
        }
    }
}

impl fmt::Display for Winner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Winner::Black => f.write_str("Black"),
            Winner::White => f.write_str("White"),
        }
    }
}
