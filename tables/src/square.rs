/// Index of a square in rank-major order, `rank * 8 + file`.
pub type SquareIndex = u8;

pub const SQUARE_COUNT: usize = 64;
pub const BOARD_SIZE: i8 = 8;

/// A file/rank pair that is not necessarily on the board.
///
/// Geometry rules produce these freely, the bounds filter decides what
/// survives.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Coord {
    pub file: i8,
    pub rank: i8,
}

impl Coord {
    #[inline]
    pub const fn new(file: i8, rank: i8) -> Self {
        Coord { file, rank }
    }

    #[inline]
    pub const fn from_index(index: SquareIndex) -> Self {
        debug_assert!((index as usize) < SQUARE_COUNT);
        Coord {
            file: (index % 8) as i8,
            rank: (index / 8) as i8,
        }
    }

    #[inline]
    pub const fn offset(self, file: i8, rank: i8) -> Self {
        Coord {
            file: self.file + file,
            rank: self.rank + rank,
        }
    }

    #[inline]
    pub const fn is_on_board(self) -> bool {
        self.file >= 0 && self.file < BOARD_SIZE && self.rank >= 0 && self.rank < BOARD_SIZE
    }

    /// Panics if the coordinate is off the board; callers filter first.
    #[inline]
    pub const fn index(self) -> SquareIndex {
        assert!(self.is_on_board(), "off-board coordinate reached index conversion");
        (self.rank * BOARD_SIZE + self.file) as SquareIndex
    }
}

/// Drops every coordinate outside the board, keeping the order of the rest.
#[inline]
pub fn on_board<I>(coords: I) -> impl Iterator<Item = Coord>
where
    I: IntoIterator<Item = Coord>,
{
    coords.into_iter().filter(|coord| coord.is_on_board())
}
