#[derive(thiserror::Error, Debug, PartialEq)]
pub enum GameError {
    #[error("invalid number of players (expected: {expected}, found: {found})")]
    InvalidPlayersNumber { expected: usize, found: usize },
    #[error("players must have distinct ids")]
    DuplicatePlayerId,
    #[error("player not found")]
    PlayerNotFound,
    #[error("cell ({row}, {col}) is occupied")]
    CellIsOccupied { row: usize, col: usize },
    #[error("can't make turn on a finished game")]
    GameIsFinished,
    #[error("invalid row (expected: 0-{max_expected}, found: {found})")]
    InvalidGridRow { max_expected: usize, found: usize },
    #[error("invalid column (expected: 0-{max_expected}, found: {found})")]
    InvalidGridCol { max_expected: usize, found: usize },
    #[error("invalid cell index (expected: 0-{max_expected}, found: {found})")]
    InvalidCellIndex { max_expected: usize, found: usize },
    #[error("failed to switch players in the pool")]
    PlayerPoolCorrupted,
}

impl GameError {
    pub fn invalid_players_number(expected: usize, found: usize) -> Self {
        Self::InvalidPlayersNumber { expected, found }
    }

    pub fn cell_is_occupied(row: usize, col: usize) -> Self {
        Self::CellIsOccupied { row, col }
    }

    pub fn invalid_cell_index(max_expected: usize, found: usize) -> Self {
        Self::InvalidCellIndex {
            max_expected,
            found,
        }
    }
}
