// Ficheiro: src/agent.rs
// Descrição: Jogadores: aleatório e minimax.

use crate::board::Board;
use crate::config::AgentKind;
use crate::error::{EngineError, EngineResult};
use crate::moves::legal_moves;
use crate::search::search_best_move;
use crate::types::Side;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use tracing::debug;

/// Um jogador escolhe o próximo tabuleiro a partir do atual.
pub trait Agent {
    fn choose(&mut self, board: &Board, side: Side) -> EngineResult<Board>;

    fn kind(&self) -> AgentKind;
}

/// Escolhe uniformemente ao acaso entre os lances legais.
pub struct RandomAgent {
    rng: StdRng,
}

impl RandomAgent {
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        RandomAgent { rng }
    }
}

impl Agent for RandomAgent {
    fn choose(&mut self, board: &Board, side: Side) -> EngineResult<Board> {
        let moves = legal_moves(board, side);
        let next = moves
            .states
            .choose(&mut self.rng)
            .cloned()
            .ok_or(EngineError::NoLegalMove { side })?;

        debug!(%side, capture = moves.is_capture, options = moves.len(), "lance aleatório");
        Ok(next)
    }

    fn kind(&self) -> AgentKind {
        AgentKind::Random
    }
}

/// Escolhe o lance com a pesquisa minimax. As brancas maximizam.
pub struct MinimaxAgent {
    pub depth: u32,
    pub parallel: bool,
}

impl MinimaxAgent {
    pub fn new(depth: u32, parallel: bool) -> Self {
        MinimaxAgent { depth, parallel }
    }
}

impl Agent for MinimaxAgent {
    fn choose(&mut self, board: &Board, side: Side) -> EngineResult<Board> {
        let maximizing = side == Side::White;
        search_best_move(board, self.depth, maximizing, self.parallel).map(|(_, next)| next)
    }

    fn kind(&self) -> AgentKind {
        AgentKind::Minimax
    }
}

/// Cria o jogador indicado pela configuração.
pub fn build_agent(kind: AgentKind, depth: u32, parallel: bool, seed: Option<u64>) -> Box<dyn Agent> {
    match kind {
        AgentKind::Random => Box::new(RandomAgent::new(seed)),
        AgentKind::Minimax => Box::new(MinimaxAgent::new(depth, parallel)),
    }
}
