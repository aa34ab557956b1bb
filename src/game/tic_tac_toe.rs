use std::fmt::{self, Display, Formatter};

use generic_array::typenum::Unsigned;
use smallvec::SmallVec;
use tracing::debug;

use crate::game::error::GameError;
use crate::game::game::{Game, GameResult, GameState};
use crate::game::grid::{Grid, GridIndex, WithLength};
use crate::game::player_pool::{PlayerId, PlayerPool, WithPlayerId};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Mark {
    X,
    O,
}

impl Display for Mark {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Mark::X => f.write_str("X"),
            Mark::O => f.write_str("O"),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Player {
    id: PlayerId,
    name: String,
    mark: Mark,
}

impl Player {
    pub fn new(id: PlayerId, name: impl Into<String>, mark: Mark) -> Player {
        Self {
            id,
            name: name.into(),
            mark,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn mark(&self) -> Mark {
        self.mark
    }
}

impl WithPlayerId for Player {
    fn get_id(&self) -> PlayerId {
        self.id
    }
}

#[derive(Clone, Copy, Debug)]
pub enum FieldRow {
    R1,
    R2,
    R3,
}

impl WithLength for FieldRow {
    type Length = generic_array::typenum::U3;
}

impl TryFrom<usize> for FieldRow {
    type Error = GameError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::R1),
            1 => Ok(Self::R2),
            2 => Ok(Self::R3),
            _ => Err(Self::Error::InvalidGridRow {
                max_expected: <Self as WithLength>::Length::USIZE - 1,
                found: value,
            }),
        }
    }
}

impl From<FieldRow> for usize {
    fn from(value: FieldRow) -> Self {
        match value {
            FieldRow::R1 => 0,
            FieldRow::R2 => 1,
            FieldRow::R3 => 2,
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub enum FieldCol {
    C1,
    C2,
    C3,
}

impl WithLength for FieldCol {
    type Length = generic_array::typenum::U3;
}

impl TryFrom<usize> for FieldCol {
    type Error = GameError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::C1),
            1 => Ok(Self::C2),
            2 => Ok(Self::C3),
            _ => Err(Self::Error::InvalidGridCol {
                max_expected: <Self as WithLength>::Length::USIZE - 1,
                found: value,
            }),
        }
    }
}

impl From<FieldCol> for usize {
    fn from(value: FieldCol) -> Self {
        match value {
            FieldCol::C1 => 0,
            FieldCol::C2 => 1,
            FieldCol::C3 => 2,
        }
    }
}

const FIELD_SIDE: usize = <FieldRow as WithLength>::Length::USIZE;
const BOARD_CELLS: usize = FIELD_SIDE * <FieldCol as WithLength>::Length::USIZE;

pub type Cell = Option<Mark>;
pub type Position = GridIndex<FieldRow, FieldCol>;

/// Maps a linear cell index in `0..9` to a board position:
/// `row = index / 3`, `col = index % 3`.
impl TryFrom<usize> for Position {
    type Error = GameError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        if value >= BOARD_CELLS {
            return Err(GameError::invalid_cell_index(BOARD_CELLS - 1, value));
        }
        let row = FieldRow::try_from(value / FIELD_SIDE)?;
        let col = FieldCol::try_from(value % FIELD_SIDE)?;
        Ok(Self::new(row, col))
    }
}

impl From<Position> for usize {
    fn from(value: Position) -> Self {
        FIELD_SIDE * value.get_row() + value.get_col()
    }
}

fn row_line(row: FieldRow) -> [Position; 3] {
    [
        Position::new(row, FieldCol::C1),
        Position::new(row, FieldCol::C2),
        Position::new(row, FieldCol::C3),
    ]
}

fn col_line(col: FieldCol) -> [Position; 3] {
    [
        Position::new(FieldRow::R1, col),
        Position::new(FieldRow::R2, col),
        Position::new(FieldRow::R3, col),
    ]
}

fn main_diagonal() -> [Position; 3] {
    [
        Position::new(FieldRow::R1, FieldCol::C1),
        Position::new(FieldRow::R2, FieldCol::C2),
        Position::new(FieldRow::R3, FieldCol::C3),
    ]
}

fn anti_diagonal() -> [Position; 3] {
    [
        Position::new(FieldRow::R3, FieldCol::C1),
        Position::new(FieldRow::R2, FieldCol::C2),
        Position::new(FieldRow::R1, FieldCol::C3),
    ]
}

/// Lines that pass through `position`: its row, its column and, when the
/// position lies on one, each diagonal (`row == col` for the main diagonal,
/// `row + col == 2` for the anti-diagonal).
fn lines_through(position: Position) -> SmallVec<[[Position; 3]; 4]> {
    let mut lines = SmallVec::new();
    lines.push(row_line(position.row()));
    lines.push(col_line(position.col()));
    if position.get_row() == position.get_col() {
        lines.push(main_diagonal());
    }
    if position.get_row() + position.get_col() == FIELD_SIDE - 1 {
        lines.push(anti_diagonal());
    }
    lines
}

#[derive(Debug)]
pub struct TicTacToe {
    players: PlayerPool<Player>,
    state: GameState,
    field: Grid<Cell, FieldRow, FieldCol>,
    free_cells: usize,
}

impl Game for TicTacToe {
    type TurnData = Position;
    type Player = Player;

    fn new(players: Vec<Player>) -> GameResult<Self> {
        let [p1, p2]: [Player; 2] = players
            .try_into()
            .map_err(|players: Vec<Player>| GameError::invalid_players_number(2, players.len()))?;
        if p1.get_id() == p2.get_id() {
            return Err(GameError::DuplicatePlayerId);
        }
        let first = p1.get_id();
        Ok(Self {
            players: PlayerPool::new(vec![p1, p2]),
            state: GameState::Turn(first),
            field: Grid::empty(),
            free_cells: BOARD_CELLS,
        })
    }

    fn update(&mut self, position: Self::TurnData) -> GameResult<GameState> {
        if self.is_finished() {
            return Err(GameError::GameIsFinished);
        }

        let mark = self.get_current_player()?.mark;
        let cell = self.field.get_mut_ref(position);
        if cell.is_some() {
            return Err(GameError::cell_is_occupied(
                position.get_row(),
                position.get_col(),
            ));
        }
        *cell = Some(mark);
        self.free_cells -= 1;
        debug!(cell = usize::from(position), %mark, "mark placed");

        self.update_state(position)
    }

    fn players(&self) -> &PlayerPool<Player> {
        &self.players
    }

    fn players_mut(&mut self) -> &mut PlayerPool<Player> {
        &mut self.players
    }

    fn state(&self) -> GameState {
        self.state
    }

    fn set_state(&mut self, state: GameState) {
        self.state = state;
    }
}

impl TicTacToe {
    pub fn get_player_by_mark(&self, mark: Mark) -> GameResult<&Player> {
        self.players
            .find_if(|player| player.mark == mark)
            .ok_or(GameError::PlayerNotFound)
    }

    pub fn get_cell(&self, position: Position) -> Cell {
        *self.field.get_ref(position)
    }

    pub fn free_cells(&self) -> usize {
        self.free_cells
    }

    /// Resolves the state after a move: a win on one of the lines through the
    /// played cell finishes the game immediately, an exhausted board without
    /// a winner is a draw, otherwise the turn passes to the other player.
    fn update_state(&mut self, last_move: Position) -> GameResult<GameState> {
        for line in lines_through(last_move) {
            if let Some(mark) = self.line_winner(&line) {
                let id = self.get_player_by_mark(mark)?.get_id();
                debug!(winner = id, "line completed");
                return Ok(self.set_winner(id));
            }
        }

        if self.free_cells == 0 {
            return Ok(self.set_draw());
        }

        self.switch_player()
    }

    fn line_winner(&self, line: &[Position; 3]) -> Option<Mark> {
        match (
            self.get_cell(line[0]),
            self.get_cell(line[1]),
            self.get_cell(line[2]),
        ) {
            (Some(a), Some(b), Some(c)) if a == b && b == c => Some(a),
            _ => None,
        }
    }
}

impl Display for TicTacToe {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (i, row) in self.field.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            for cell in row {
                match cell {
                    Some(mark) => write!(f, " {}", mark)?,
                    None => f.write_str(" .")?,
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::game::game::FinishedState;

    fn make_game() -> TicTacToe {
        TicTacToe::new(vec![
            Player::new(0, "Alice", Mark::X),
            Player::new(1, "Bruno", Mark::O),
        ])
        .unwrap()
    }

    fn pos(cell_index: usize) -> Position {
        Position::try_from(cell_index).unwrap()
    }

    #[test]
    fn test_new_requires_two_distinct_players() {
        assert_eq!(
            TicTacToe::new(vec![Player::new(0, "Solo", Mark::X)]).unwrap_err(),
            GameError::invalid_players_number(2, 1)
        );
        assert_eq!(
            TicTacToe::new(vec![
                Player::new(1, "Alice", Mark::X),
                Player::new(1, "Bruno", Mark::O),
            ])
            .unwrap_err(),
            GameError::DuplicatePlayerId
        );
    }

    #[test]
    fn test_cell_index_mapping() {
        assert_eq!(pos(0).get_row(), 0);
        assert_eq!(pos(0).get_col(), 0);
        assert_eq!(pos(5).get_row(), 1);
        assert_eq!(pos(5).get_col(), 2);
        assert_eq!(usize::from(pos(7)), 7);
        assert_eq!(
            Position::try_from(9).unwrap_err(),
            GameError::invalid_cell_index(8, 9)
        );
    }

    #[test]
    fn test_first_turn_belongs_to_x() {
        let mut game = make_game();
        assert_eq!(game.state(), GameState::Turn(0));
        assert_eq!(game.get_current_player().unwrap().mark(), Mark::X);
    }

    #[test]
    fn test_update_switches_turns() {
        let mut game = make_game();
        itertools::assert_equal(
            [4, 0, 5, 1].map(|cell_index| game.update(pos(cell_index)).unwrap()),
            [
                GameState::Turn(1),
                GameState::Turn(0),
                GameState::Turn(1),
                GameState::Turn(0),
            ],
        );
    }

    #[test]
    fn test_occupied_cell_is_rejected() {
        let mut game = make_game();
        game.update(pos(4)).unwrap();

        assert_eq!(
            game.update(pos(4)).unwrap_err(),
            GameError::cell_is_occupied(1, 1)
        );
        // the cell still holds the first mark and it is still O's turn
        assert_eq!(game.get_cell(pos(4)), Some(Mark::X));
        assert_eq!(game.state(), GameState::Turn(1));
        assert_eq!(game.free_cells(), 8);
    }

    #[test]
    fn test_win_on_column() {
        let mut game = make_game();
        let mut state = game.state();
        // X takes the middle column, O fills the top corners
        for cell_index in [1, 0, 4, 2, 7] {
            state = game.update(pos(cell_index)).unwrap();
        }

        assert_eq!(state, GameState::Finished(FinishedState::Win(0)));
        assert!(game.is_finished());
    }

    #[test]
    fn test_win_on_anti_diagonal() {
        let mut game = make_game();
        let mut state = game.state();
        for cell_index in [2, 0, 4, 1, 6] {
            state = game.update(pos(cell_index)).unwrap();
        }

        assert_eq!(state, GameState::Finished(FinishedState::Win(0)));
    }

    #[test]
    fn test_finished_game_rejects_turns() {
        let mut game = make_game();
        for cell_index in [0, 3, 1, 4, 2] {
            game.update(pos(cell_index)).unwrap();
        }
        assert!(game.is_finished());

        assert_eq!(game.update(pos(8)).unwrap_err(), GameError::GameIsFinished);
        assert_eq!(game.get_cell(pos(8)), None);
    }

    #[test]
    fn test_draw_when_board_is_exhausted() {
        let mut game = make_game();
        let mut state = game.state();
        for cell_index in [0, 2, 1, 3, 5, 4, 6, 7, 8] {
            state = game.update(pos(cell_index)).unwrap();
        }

        assert_eq!(state, GameState::Finished(FinishedState::Draw));
        assert_eq!(game.free_cells(), 0);
    }

    #[test]
    fn test_display() {
        let mut game = make_game();
        for cell_index in [4, 0, 8] {
            game.update(pos(cell_index)).unwrap();
        }

        assert_eq!(game.to_string(), " O . .\n . X .\n . . X");
    }
}
