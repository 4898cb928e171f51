// Ficheiro: src/search.rs
// Descrição: Pesquisa minimax de profundidade fixa, sem poda.
// As brancas maximizam, as pretas minimizam.

use crate::board::Board;
use crate::error::{EngineError, EngineResult};
use crate::evaluation::{score_with_winner, winner};
use crate::moves::{has_legal_move, legal_moves};
use crate::types::Side;
use rayon::prelude::*;
use tracing::{debug, trace};

/// Resultado de uma pesquisa: a melhor pontuação e o sucessor que a obtém.
/// `best` só é `None` em nós terminais (profundidade 0 ou jogo terminado).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    pub score: i32,
    pub best: Option<Board>,
}

/// Pesquisa minimax sequencial a partir de `board`.
pub fn minimax(board: &Board, depth: u32, maximizing: bool) -> SearchResult {
    let terminal = winner(board);
    if depth == 0 || terminal.is_some() {
        return SearchResult { score: score_with_winner(board, terminal), best: None };
    }

    let side = Side::from_maximizing(maximizing);
    let candidates = legal_moves(board, side).states;
    let scores = candidates
        .iter()
        .map(|next| minimax(next, depth - 1, !maximizing).score)
        .collect();

    let result = select_first_best(candidates, scores, maximizing);
    trace!(depth, %side, score = result.score, "nó pesquisado");
    result
}

/// Igual a [`minimax`], mas os sucessores da raiz são pesquisados em paralelo.
///
/// O `collect` do rayon preserva a ordem dos sucessores, por isso o desempate
/// (o primeiro melhor) e o lance escolhido são os mesmos da versão sequencial.
pub fn minimax_parallel(board: &Board, depth: u32, maximizing: bool) -> SearchResult {
    let terminal = winner(board);
    if depth == 0 || terminal.is_some() {
        return SearchResult { score: score_with_winner(board, terminal), best: None };
    }

    let side = Side::from_maximizing(maximizing);
    let candidates = legal_moves(board, side).states;
    let scores = candidates
        .par_iter()
        .map(|next| minimax(next, depth - 1, !maximizing).score)
        .collect();

    select_first_best(candidates, scores, maximizing)
}

// Fica com o primeiro candidato que atinge a melhor pontuação: a comparação é estrita,
// um empate nunca substitui o melhor atual.
fn select_first_best(candidates: Vec<Board>, scores: Vec<i32>, maximizing: bool) -> SearchResult {
    let mut best_score = if maximizing { i32::MIN } else { i32::MAX };
    let mut best = None;

    for (candidate, score) in candidates.into_iter().zip(scores) {
        let improves = if maximizing { score > best_score } else { score < best_score };
        if improves {
            best_score = score;
            best = Some(candidate);
        }
    }

    SearchResult { score: best_score, best }
}

/// Pesquisa e devolve a pontuação e o tabuleiro escolhido.
///
/// Falha se a profundidade for 0, se o lado a jogar não tiver lances ou se a
/// posição já for terminal.
pub fn search_best_move(
    board: &Board,
    depth: u32,
    maximizing: bool,
    parallel: bool,
) -> EngineResult<(i32, Board)> {
    if depth == 0 {
        return Err(EngineError::InvalidDepth);
    }

    let side = Side::from_maximizing(maximizing);
    let result = if parallel {
        minimax_parallel(board, depth, maximizing)
    } else {
        minimax(board, depth, maximizing)
    };

    match result.best {
        Some(next) => {
            debug!(
                %side,
                depth,
                score = result.score,
                "lance escolhido: {}",
                board.describe_transition(&next)
            );
            Ok((result.score, next))
        }
        None if !has_legal_move(board, side) => Err(EngineError::NoLegalMove { side }),
        None => match winner(board) {
            Some(winner) => Err(EngineError::GameAlreadyOver { winner }),
            None => Err(EngineError::NoLegalMove { side }),
        },
    }
}

/// Escolhe o melhor sucessor de `board` com uma pesquisa de profundidade `depth`.
/// O chamador deve verificar primeiro se o tabuleiro é terminal.
pub fn make_intelligent_move(board: &Board, depth: u32, maximizing: bool) -> EngineResult<Board> {
    search_best_move(board, depth, maximizing, false).map(|(_, next)| next)
}
