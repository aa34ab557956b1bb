pub mod error;
pub mod game;
pub mod grid;
pub mod player_pool;
pub mod tic_tac_toe;

pub use error::GameError;
pub use game::{FinishedState, Game, GameResult, GameState};
pub use player_pool::{PlayerId, PlayerPool, WithPlayerId};
pub use tic_tac_toe::{Mark, Player, Position, TicTacToe};
