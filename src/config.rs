// Ficheiro: src/config.rs
// Descrição: Configuração das partidas e dos jogadores.

use clap::ValueEnum;

/// Tipo de jogador que controla um lado.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AgentKind {
    /// Escolhe um lance legal ao acaso (capturas continuam obrigatórias).
    Random,
    /// Escolhe o lance com a pesquisa minimax.
    Minimax,
}

/// Configuração de uma partida (ou de uma série de partidas).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub black: AgentKind,
    pub white: AgentKind,
    /// Profundidade da pesquisa minimax, em meios-lances.
    pub depth: u32,
    /// Número máximo de lances antes de declarar empate.
    pub max_turns: usize,
    /// Semente dos jogadores aleatórios; `None` usa entropia do sistema.
    pub seed: Option<u64>,
    /// Pesquisa os sucessores da raiz em paralelo.
    pub parallel: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            black: AgentKind::Minimax,
            white: AgentKind::Random,
            depth: 3,
            max_turns: 200,
            seed: None,
            parallel: false,
        }
    }
}
