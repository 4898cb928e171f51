// Ficheiro: src/perft.rs
// Descrição: Contém a lógica para o teste de performance (Perft),
// uma ferramenta para verificar a corretude da geração de lances.

use crate::board::Board;
use crate::moves::legal_moves;
use crate::types::Side;
use rayon::prelude::*;
use tracing::info;

/// Função principal do Perft: conta as folhas e regista o tempo decorrido.
pub fn run_perft(board: &Board, side: Side, depth: u8) -> u64 {
    info!(depth, %side, "A executar Perft");
    let start_time = std::time::Instant::now();
    let nodes = perft(board, side, depth);
    info!(nodes, elapsed = ?start_time.elapsed(), "Perft concluído");
    nodes
}

/// Função recursiva que percorre a árvore de lances, alternando os lados.
pub fn perft(board: &Board, side: Side, depth: u8) -> u64 {
    if depth == 0 {
        return 1; // Chegamos a uma folha da árvore de busca.
    }

    let moves = legal_moves(board, side);

    // Otimização: para profundidade 1, conta os estados diretamente
    if depth == 1 {
        return moves.len() as u64;
    }

    // Para profundidades maiores que 3, usa paralelização
    if depth > 3 {
        moves
            .states
            .par_iter()
            .map(|next| perft(next, !side, depth - 1))
            .sum()
    } else {
        moves
            .states
            .iter()
            .map(|next| perft(next, !side, depth - 1))
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_perft_initial_position() {
        let board = Board::new();
        assert_eq!(perft(&board, Side::Black, 1), 7);
        assert_eq!(perft(&board, Side::Black, 2), 49);
        assert_eq!(perft(&board, Side::Black, 3), 302);
        assert_eq!(perft(&board, Side::Black, 4), 1469);
    }

    #[test]
    fn test_perft_parallel_depth() {
        // Profundidade 5 passa pelo ramo paralelo
        assert_eq!(run_perft(&Board::new(), Side::White, 5), 7361);
    }
}
