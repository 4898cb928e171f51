// Ficheiro: src/main.rs
// Descrição: Ponto de entrada principal da aplicação.

use clap::Parser;
use motor_damas::config::{AgentKind, GameConfig};
use motor_damas::display::PieceNumberView;
use motor_damas::game::{play_many, Game};
use motor_damas::perft::run_perft;
use motor_damas::{Board, Side};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Joga partidas de damas entre jogadores aleatórios e minimax.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Jogador das pretas (jogam primeiro)
    #[arg(long, value_enum, default_value_t = AgentKind::Minimax)]
    black: AgentKind,

    /// Jogador das brancas
    #[arg(long, value_enum, default_value_t = AgentKind::Random)]
    white: AgentKind,

    /// Profundidade da pesquisa minimax
    #[arg(long, default_value_t = 3)]
    depth: u32,

    /// Número de partidas a jogar
    #[arg(long, default_value_t = 1)]
    games: usize,

    /// Limite de lances por partida (empate ao atingir)
    #[arg(long, default_value_t = 200)]
    max_turns: usize,

    /// Semente dos jogadores aleatórios
    #[arg(long)]
    seed: Option<u64>,

    /// Pesquisa a raiz em paralelo
    #[arg(long)]
    parallel: bool,

    /// Em vez de jogar, executa o Perft até esta profundidade
    #[arg(long)]
    perft: Option<u8>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();

    if let Some(depth) = args.perft {
        let board = Board::new();
        for d in 1..=depth {
            run_perft(&board, Side::Black, d);
        }
        return;
    }

    let config = GameConfig {
        black: args.black,
        white: args.white,
        depth: args.depth,
        max_turns: args.max_turns,
        seed: args.seed,
        parallel: args.parallel,
    };

    if args.games <= 1 {
        let mut game = Game::new(&config);
        println!("{}", PieceNumberView(game.board()));
        match game.play() {
            Ok(record) => {
                println!("{}", PieceNumberView(&record.final_board));
                println!("{} after {} turns", record.outcome, record.turns);
            }
            Err(e) => error!("partida interrompida: {}", e),
        }
        return;
    }

    info!(games = args.games, ?config, "A iniciar série de partidas");
    match play_many(&config, args.games) {
        Ok(stats) => println!("{}", stats),
        Err(e) => error!("série interrompida: {}", e),
    }
}
