// Ficheiro: src/game.rs
// Descrição: Ciclo de jogo: alterna os lados, aplica promoções, deteta o fim
// e acumula estatísticas de várias partidas.

use crate::agent::{build_agent, Agent};
use crate::board::Board;
use crate::config::GameConfig;
use crate::display::PieceNumberView;
use crate::error::EngineResult;
use crate::evaluation::{evaluate, winner};
use crate::types::{Side, Winner};
use std::fmt;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Resultado final de uma partida.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Win(Winner),
    /// Atingido o limite de lances sem vencedor.
    Draw,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Win(winner) => write!(f, "{} wins", winner),
            Outcome::Draw => f.write_str("Draw"),
        }
    }
}

/// Registo de uma partida terminada.
#[derive(Debug, Clone)]
pub struct GameRecord {
    pub outcome: Outcome,
    pub turns: usize,
    pub final_board: Board,
    pub duration: Duration,
}

/// Uma partida entre dois jogadores. As pretas jogam primeiro.
pub struct Game {
    board: Board,
    black: Box<dyn Agent>,
    white: Box<dyn Agent>,
    max_turns: usize,
}

impl Game {
    /// Cria uma partida na posição inicial a partir da configuração.
    pub fn new(config: &GameConfig) -> Self {
        let black_seed = config.seed;
        let white_seed = config.seed.map(|seed| seed.wrapping_add(1));
        Game::with_agents(
            Board::new(),
            build_agent(config.black, config.depth, config.parallel, black_seed),
            build_agent(config.white, config.depth, config.parallel, white_seed),
            config.max_turns,
        )
    }

    pub fn with_agents(
        board: Board,
        black: Box<dyn Agent>,
        white: Box<dyn Agent>,
        max_turns: usize,
    ) -> Self {
        Game { board, black, white, max_turns }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Joga um único lance de `side` e aplica as promoções.
    pub fn play_turn(&mut self, side: Side) -> EngineResult<()> {
        let agent = match side {
            Side::Black => &mut self.black,
            Side::White => &mut self.white,
        };
        let next = agent.choose(&self.board, side)?;

        info!(%side, agent = ?agent.kind(), "{}", self.board.describe_transition(&next));
        self.board = next.promote_kings();
        debug!("\n{}", PieceNumberView(&self.board));
        Ok(())
    }

    /// Joga até haver um vencedor ou até ao limite de lances.
    pub fn play(&mut self) -> EngineResult<GameRecord> {
        let start_time = Instant::now();
        let mut side = Side::Black;
        let mut turns = 0;

        let outcome = loop {
            if let Some(winner) = winner(&self.board) {
                break Outcome::Win(winner);
            }
            if turns >= self.max_turns {
                break Outcome::Draw;
            }

            turns += 1;
            self.play_turn(side)?;
            debug!(turn = turns, score = evaluate(&self.board), "pontuação do tabuleiro");
            side = !side;
        };

        info!(%outcome, turns, "fim da partida");
        Ok(GameRecord {
            outcome,
            turns,
            final_board: self.board.clone(),
            duration: start_time.elapsed(),
        })
    }
}

/// Estatísticas acumuladas de uma série de partidas.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MatchStats {
    pub games: usize,
    pub black_wins: usize,
    pub white_wins: usize,
    pub draws: usize,
    pub total_turns: usize,
    pub total_duration: Duration,
}

impl MatchStats {
    pub fn record(&mut self, game: &GameRecord) {
        self.games += 1;
        match game.outcome {
            Outcome::Win(Winner::Black) => self.black_wins += 1,
            Outcome::Win(Winner::White) => self.white_wins += 1,
            Outcome::Draw => self.draws += 1,
        }
        self.total_turns += game.turns;
        self.total_duration += game.duration;
    }

    pub fn average_turns(&self) -> f64 {
        if self.games == 0 {
            return 0.0;
        }
        self.total_turns as f64 / self.games as f64
    }

    pub fn average_duration(&self) -> Duration {
        if self.games == 0 {
            return Duration::ZERO;
        }
        self.total_duration / self.games as u32
    }
}

impl fmt::Display for MatchStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Black wins: {}", self.black_wins)?;
        writeln!(f, "White wins: {}", self.white_wins)?;
        writeln!(f, "Draws: {}", self.draws)?;
        writeln!(f, "Average game duration: {:.2?}", self.average_duration())?;
        write!(f, "Average number of turns: {:.2}", self.average_turns())
    }
}

/// Joga `games` partidas seguidas com a mesma configuração.
/// Com semente, cada partida usa uma semente diferente e reprodutível.
pub fn play_many(config: &GameConfig, games: usize) -> EngineResult<MatchStats> {
    let mut stats = MatchStats::default();
    for i in 0..games {
        let game_config = GameConfig {
            seed: config.seed.map(|seed| seed.wrapping_add(2 * i as u64)),
            ..config.clone()
        };
        info!(game = i + 1, "A jogar partida");
        let record = Game::new(&game_config).play()?;
        stats.record(&record);
    }
    Ok(stats)
}
