mod clock;
mod event;

pub use clock::MatchClock;
pub use event::SessionEvent;

use tracing::{debug, info};

use crate::game::error::GameError;
use crate::game::game::{FinishedState, Game, GameState};
use crate::game::player_pool::PlayerId;
use crate::game::tic_tac_toe::{Mark, Player, Position, TicTacToe};

pub type SessionResult<T> = Result<T, SessionError>;

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum SessionError {
    #[error("player {index} name is empty")]
    EmptyPlayerName { index: usize },
    #[error("players are already registered")]
    AlreadyRegistered,
    #[error(transparent)]
    Game(#[from] GameError),
}

/// Where the session is in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SessionPhase {
    AwaitingPlayers,
    InProgress,
    Finished,
}

/// Outcome of a move event at the UI boundary.
///
/// Moves on occupied cells, out-of-range indices and clicks outside an
/// active match are ignored rather than surfaced as errors, matching how
/// a grid click that hits nothing playable simply does nothing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MoveOutcome {
    Ignored,
    NextTurn(PlayerId),
    Won(PlayerId),
    Draw,
}

/// A hot-seat match from player registration to its result screen.
///
/// Starts awaiting players, runs a [`TicTacToe`] match once two names are
/// submitted and returns to the initial state on [`GameSession::restart`].
#[derive(Debug, Default)]
pub struct GameSession {
    game: Option<TicTacToe>,
    clock: Option<MatchClock>,
}

impl GameSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> SessionPhase {
        match &self.game {
            None => SessionPhase::AwaitingPlayers,
            Some(game) if game.is_finished() => SessionPhase::Finished,
            Some(_) => SessionPhase::InProgress,
        }
    }

    /// Dispatches a UI event onto the session operations.
    pub fn handle(&mut self, event: SessionEvent) -> SessionResult<()> {
        match event {
            SessionEvent::SubmitPlayers { first, second } => {
                self.submit_players(&first, &second)
            }
            SessionEvent::CellClicked(cell_index) => {
                self.play_move(cell_index);
                Ok(())
            }
            SessionEvent::Restart => {
                self.restart();
                Ok(())
            }
        }
    }

    /// Registers both players and starts the match. Names are trimmed and
    /// must be non-empty; the first player gets X, the second O.
    pub fn submit_players(&mut self, first: &str, second: &str) -> SessionResult<()> {
        if self.game.is_some() {
            return Err(SessionError::AlreadyRegistered);
        }
        let names = [first.trim(), second.trim()];
        for (i, name) in names.iter().enumerate() {
            if name.is_empty() {
                return Err(SessionError::EmptyPlayerName { index: i + 1 });
            }
        }

        let game = TicTacToe::new(vec![
            Player::new(0, names[0], Mark::X),
            Player::new(1, names[1], Mark::O),
        ])?;
        self.game = Some(game);
        self.clock = Some(MatchClock::start());
        info!(player1 = names[0], player2 = names[1], "match started");
        Ok(())
    }

    /// Applies a move for the active player to the cell at `cell_index`.
    ///
    /// Invalid moves leave the board untouched and report
    /// [`MoveOutcome::Ignored`]. The clock stops when the move finishes
    /// the match.
    pub fn play_move(&mut self, cell_index: usize) -> MoveOutcome {
        let Some(game) = self.game.as_mut() else {
            debug!(cell_index, "move before registration ignored");
            return MoveOutcome::Ignored;
        };
        let position = match Position::try_from(cell_index) {
            Ok(position) => position,
            Err(err) => {
                debug!(cell_index, %err, "move ignored");
                return MoveOutcome::Ignored;
            }
        };

        match game.update(position) {
            Ok(GameState::Turn(id)) => MoveOutcome::NextTurn(id),
            Ok(GameState::Finished(FinishedState::Win(id))) => {
                self.stop_clock();
                MoveOutcome::Won(id)
            }
            Ok(GameState::Finished(FinishedState::Draw)) => {
                self.stop_clock();
                MoveOutcome::Draw
            }
            Err(err) => {
                debug!(cell_index, %err, "move ignored");
                MoveOutcome::Ignored
            }
        }
    }

    /// Discards the current match and returns to player registration.
    pub fn restart(&mut self) {
        info!("session restarted");
        self.game = None;
        self.clock = None;
    }

    pub fn game(&self) -> Option<&TicTacToe> {
        self.game.as_ref()
    }

    /// Turn prompt while the match runs, result announcement once it is
    /// over, registration prompt otherwise.
    pub fn status_message(&self) -> String {
        match &self.game {
            None => "Enter player names to start".to_string(),
            Some(game) => match game.state() {
                GameState::Turn(id) => format!("{}'s turn", self.player_name(id)),
                GameState::Finished(FinishedState::Win(id)) => {
                    format!("{} wins!", self.player_name(id))
                }
                GameState::Finished(FinishedState::Draw) => "It's a draw!".to_string(),
            },
        }
    }

    /// One `"{name}: {mark}"` line per registered player.
    pub fn player_lines(&self) -> Vec<String> {
        self.game
            .as_ref()
            .map(|game| {
                game.players()
                    .as_slice()
                    .iter()
                    .map(|player| format!("{}: {}", player.name(), player.mark()))
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn clock_display(&self) -> Option<String> {
        self.clock.map(|clock| clock.display())
    }

    fn stop_clock(&mut self) {
        if let Some(clock) = self.clock.as_mut() {
            clock.stop();
        }
    }

    fn player_name(&self, id: PlayerId) -> &str {
        self.game
            .as_ref()
            .and_then(|game| game.players().find(id))
            .map_or("unknown", Player::name)
    }
}
