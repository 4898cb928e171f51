// Ficheiro: src/error.rs
// Descrição: Tipos de erro do motor de damas.

use crate::types::{Coord, Piece, Side, Winner};
use thiserror::Error;

/// Erros que podem ocorrer no motor.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// O lado a jogar não tem nenhum lance legal na raiz da pesquisa.
    #[error("Sem lances legais para {side}")]
    NoLegalMove { side: Side },

    /// A posição já é terminal, embora o lado a jogar ainda tenha lances.
    #[error("O jogo já terminou: vitória de {winner}")]
    GameAlreadyOver { winner: Winner },

    /// Profundidade zero não permite escolher nenhum sucessor.
    #[error("Profundidade de pesquisa inválida: tem de ser pelo menos 1")]
    InvalidDepth,

    /// Coordenada fora do tabuleiro.
    #[error("Coordenada inválida: ({row}, {col}) (tem de estar em 0-7)")]
    InvalidCoord { row: u8, col: u8 },

    /// Duas peças na mesma casa.
    #[error("Casa {coord} ocupada por mais de uma peça")]
    DuplicateSquare { coord: Coord },

    /// A mesma peça aparece duas vezes (por exemplo como homem e como dama).
    #[error("Peça {piece} repetida no tabuleiro")]
    DuplicatePiece { piece: Piece },
}

/// Alias de resultado para as operações do motor.
pub type EngineResult<T> = Result<T, EngineError>;
