use generic_array::{ArrayLength, GenericArray};
use std::ops::Deref;

/// Associates a row or column coordinate type with the number of values
/// it can take, which defines the corresponding [`Grid`] dimension.
pub trait WithLength {
    type Length: ArrayLength;
}

/// Index struct to access elements in the [`Grid`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridIndex<Row, Col> {
    row: Row,
    col: Col,
}

impl<Row, Col> GridIndex<Row, Col> {
    /// Constructs a new [`GridIndex`].
    pub fn new(row: Row, col: Col) -> Self {
        Self { row, col }
    }
}

impl<Row: Copy, Col: Copy> GridIndex<Row, Col> {
    /// Returns the typed row coordinate.
    pub fn row(&self) -> Row {
        self.row
    }

    /// Returns the typed column coordinate.
    pub fn col(&self) -> Col {
        self.col
    }
}

impl<Row, Col> GridIndex<Row, Col>
where
    Row: Copy + Into<usize>,
    Col: Copy + Into<usize>,
{
    /// Returns value of `self.row` as a plain offset.
    pub fn get_row(&self) -> usize {
        self.row.into()
    }

    /// Returns value of `self.col` as a plain offset.
    pub fn get_col(&self) -> usize {
        self.col.into()
    }
}

/// Two-dimensional fixed-length array that stores values and allows to mutate them.
/// Dimensions are defined by the `Row` and `Col` coordinate types.
#[derive(Clone, Debug)]
pub struct Grid<T, Row: WithLength, Col: WithLength> {
    contents: GenericArray<GenericArray<T, Col::Length>, Row::Length>,
}

impl<T: Default, Row: WithLength, Col: WithLength> Default for Grid<T, Row, Col> {
    fn default() -> Self {
        Self {
            contents: Default::default(),
        }
    }
}

impl<T, Row: WithLength, Col: WithLength> Deref for Grid<T, Row, Col> {
    type Target = [GenericArray<T, Col::Length>];

    fn deref(&self) -> &Self::Target {
        self.contents.as_slice()
    }
}

impl<T, Row, Col> Grid<T, Row, Col>
where
    Row: Copy + Into<usize> + WithLength,
    Col: Copy + Into<usize> + WithLength,
{
    pub fn empty() -> Self
    where
        T: Default,
    {
        Self::default()
    }

    pub fn get_ref(&self, idx: GridIndex<Row, Col>) -> &T {
        &self.contents[idx.get_row()][idx.get_col()]
    }

    pub fn get_mut_ref(&mut self, idx: GridIndex<Row, Col>) -> &mut T {
        &mut self.contents[idx.get_row()][idx.get_col()]
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::game::tic_tac_toe::{FieldCol, FieldRow};

    #[test]
    fn test_get_mut_ref() {
        let mut grid: Grid<usize, FieldRow, FieldCol> = Grid::empty();
        *grid.get_mut_ref(GridIndex::new(FieldRow::R2, FieldCol::C3)) = 7;

        assert_eq!(*grid.get_ref(GridIndex::new(FieldRow::R2, FieldCol::C3)), 7);
        // untouched cells keep the default value
        assert_eq!(*grid.get_ref(GridIndex::new(FieldRow::R1, FieldCol::C1)), 0);
    }

    #[test]
    fn test_deref_iterates_row_by_row() {
        let mut grid: Grid<usize, FieldRow, FieldCol> = Grid::empty();
        *grid.get_mut_ref(GridIndex::new(FieldRow::R1, FieldCol::C2)) = 1;
        *grid.get_mut_ref(GridIndex::new(FieldRow::R3, FieldCol::C1)) = 2;

        itertools::assert_equal(
            grid.iter().flatten().copied(),
            [0, 1, 0, 0, 0, 0, 2, 0, 0],
        );
    }
}
