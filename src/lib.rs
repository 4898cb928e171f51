// Motor Damas - Checkers Engine Library

pub mod types;
pub mod error;
pub mod board;
pub mod moves;
pub mod evaluation;
pub mod search;
pub mod perft;
pub mod display;
pub mod config;
pub mod agent;
pub mod game;

pub use types::*;
pub use board::{Board, Transition};
pub use error::{EngineError, EngineResult};
pub use moves::{legal_moves, LegalMoves};
pub use evaluation::{evaluate, winner};
pub use search::{make_intelligent_move, minimax, SearchResult};
