//! Board state: the cell grid, the tile-number grid, and the solved check

use crate::{Error, FaceColor, Orientation, Result};
use glam::IVec2;
use serde::{Deserialize, Serialize};

/// A single board cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cell {
    /// The one open slot cubes roll into
    Empty,
    /// Immovable filler; never participates in a roll
    Blocked,
    /// A cube with the given orientation
    Occupied(Orientation),
}

impl Cell {
    /// Check if this is the empty slot
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Check if this cell is blocked
    pub fn is_blocked(&self) -> bool {
        matches!(self, Cell::Blocked)
    }

    /// Check if this cell holds a cube
    pub fn is_occupied(&self) -> bool {
        matches!(self, Cell::Occupied(_))
    }

    /// The cube orientation, if this cell holds a cube
    pub fn orientation(&self) -> Option<Orientation> {
        match self {
            Cell::Occupied(o) => Some(*o),
            _ => None,
        }
    }
}

/// Construction-time configuration for a board
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    /// Number of rows (at least 1)
    pub height: usize,
    /// Number of columns (at least 1)
    pub width: usize,
    /// Static overlay of immovable cells
    pub blocked: Vec<IVec2>,
    /// Track tile numbers in the solved check
    pub numbered: bool,
}

impl Default for BoardConfig {
    fn default() -> Self {
        BoardConfig {
            height: 3,
            width: 3,
            blocked: Vec::new(),
            numbered: false,
        }
    }
}

impl BoardConfig {
    /// Create a config with the given dimensions
    pub fn new(height: usize, width: usize) -> Self {
        BoardConfig {
            height,
            width,
            ..Default::default()
        }
    }

    /// Add blocked cells (builder pattern)
    pub fn with_blocked(mut self, cells: impl IntoIterator<Item = IVec2>) -> Self {
        self.blocked.extend(cells);
        self
    }

    /// Enable or disable tile numbering (builder pattern)
    pub fn with_numbering(mut self, numbered: bool) -> Self {
        self.numbered = numbered;
        self
    }
}

/// The puzzle board: a rectangular grid of cells with exactly one empty slot
///
/// The board is created in the canonical seed layout and mutated only by the
/// roll engine. Blocked cells are a static overlay fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    width: usize,
    height: usize,
    /// Row-major cell grid
    cells: Vec<Cell>,
    /// Parallel tile-number grid; 0 for Empty/Blocked cells
    numbers: Vec<u32>,
    /// Cached position of the single empty slot
    empty: IVec2,
    numbered: bool,
}

impl Board {
    /// Build the canonical seed board for `config`
    ///
    /// Every playable cell holds a cube in the default orientation, except
    /// the single empty slot at the grid center.
    pub fn new(config: &BoardConfig) -> Result<Board> {
        if config.height == 0 || config.width == 0 {
            return Err(Error::InvalidDimensions {
                height: config.height,
                width: config.width,
            });
        }

        let width = config.width;
        let height = config.height;
        let center = IVec2::new((width / 2) as i32, (height / 2) as i32);

        let mut cells = vec![Cell::Occupied(Orientation::default()); width * height];
        for &cell in &config.blocked {
            let in_bounds = cell.x >= 0
                && cell.y >= 0
                && (cell.x as usize) < width
                && (cell.y as usize) < height;
            if !in_bounds {
                return Err(Error::BlockedOutOfBounds { cell });
            }
            if cell == center {
                return Err(Error::EmptySlotBlocked { cell });
            }
            cells[cell.y as usize * width + cell.x as usize] = Cell::Blocked;
        }
        cells[center.y as usize * width + center.x as usize] = Cell::Empty;

        let numbers = seed_numbers(&cells);
        Ok(Board {
            width,
            height,
            cells,
            numbers,
            empty: center,
            numbered: config.numbered,
        })
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.height
    }

    /// Whether tile numbers take part in the solved check
    pub fn is_numbered(&self) -> bool {
        self.numbered
    }

    /// Position of the empty slot
    pub fn empty_cell(&self) -> IVec2 {
        self.empty
    }

    /// Check if a position lies on the board
    pub fn in_bounds(&self, pos: IVec2) -> bool {
        pos.x >= 0
            && pos.y >= 0
            && (pos.x as usize) < self.width
            && (pos.y as usize) < self.height
    }

    /// The cell at `pos`, or `None` when off the board
    pub fn get(&self, pos: IVec2) -> Option<&Cell> {
        self.in_bounds(pos).then(|| &self.cells[self.index(pos)])
    }

    /// The tile number at `pos`; 0 for Empty/Blocked cells
    pub fn number_at(&self, pos: IVec2) -> Option<u32> {
        self.in_bounds(pos).then(|| self.numbers[self.index(pos)])
    }

    /// Row-major iteration over positions and cells
    pub fn cells(&self) -> impl Iterator<Item = (IVec2, &Cell)> + '_ {
        let width = self.width;
        self.cells.iter().enumerate().map(move |(i, cell)| {
            (
                IVec2::new((i % width) as i32, (i / width) as i32),
                cell,
            )
        })
    }

    /// Whether the puzzle is solved
    ///
    /// A cube counts against the solve while it still shows the seed top
    /// color (White) on top or Yellow on its front; every cube must have
    /// rolled away from both. On numbered boards the nonzero tile numbers
    /// must additionally read 1..N in row-major order.
    pub fn is_solved(&self) -> bool {
        for cell in &self.cells {
            if let Cell::Occupied(o) = cell {
                if o.top() == FaceColor::White || o.front() == FaceColor::Yellow {
                    return false;
                }
            }
        }
        if self.numbered {
            let mut expect = 1;
            for &n in &self.numbers {
                if n == 0 {
                    continue;
                }
                if n != expect {
                    return false;
                }
                expect += 1;
            }
        }
        true
    }

    /// Move the cube at `source` into the empty slot at `target`
    ///
    /// The caller has already validated both cells; the tile numbers of the
    /// two cells swap along with the move.
    pub(crate) fn apply_roll(&mut self, source: IVec2, target: IVec2, orientation: Orientation) {
        debug_assert!(self.get(source).is_some_and(|c| c.is_occupied()));
        debug_assert!(self.get(target).is_some_and(|c| c.is_empty()));
        let (s, t) = (self.index(source), self.index(target));
        self.cells[t] = Cell::Occupied(orientation);
        self.cells[s] = Cell::Empty;
        self.numbers.swap(s, t);
        self.empty = source;
    }

    fn index(&self, pos: IVec2) -> usize {
        debug_assert!(self.in_bounds(pos));
        pos.y as usize * self.width + pos.x as usize
    }
}

/// Sequential tile numbers for a cell grid: 1..N over occupied cells in
/// row-major order, 0 elsewhere
fn seed_numbers(cells: &[Cell]) -> Vec<u32> {
    let mut next = 1;
    cells
        .iter()
        .map(|cell| {
            if cell.is_occupied() {
                let n = next;
                next += 1;
                n
            } else {
                0
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Direction;

    #[test]
    fn test_seed_board_layout() {
        let board = Board::new(&BoardConfig::default()).unwrap();
        assert_eq!(board.width(), 3);
        assert_eq!(board.height(), 3);
        assert_eq!(board.empty_cell(), IVec2::new(1, 1));

        let occupied = board.cells().filter(|(_, c)| c.is_occupied()).count();
        let empty = board.cells().filter(|(_, c)| c.is_empty()).count();
        assert_eq!(occupied, 8);
        assert_eq!(empty, 1);

        for (pos, cell) in board.cells() {
            if pos != board.empty_cell() {
                assert_eq!(cell.orientation(), Some(Orientation::default()));
            }
        }
    }

    #[test]
    fn test_seed_numbers_skip_empty_and_blocked() {
        let config = BoardConfig::default()
            .with_blocked([IVec2::new(0, 0)])
            .with_numbering(true);
        let board = Board::new(&config).unwrap();

        let numbers: Vec<u32> = (0..3)
            .flat_map(|y| (0..3).map(move |x| (x, y)))
            .map(|(x, y)| board.number_at(IVec2::new(x, y)).unwrap())
            .collect();
        assert_eq!(numbers, vec![0, 1, 2, 3, 0, 4, 5, 6, 7]);
    }

    #[test]
    fn test_rejects_zero_dimensions() {
        assert!(matches!(
            Board::new(&BoardConfig::new(0, 3)),
            Err(Error::InvalidDimensions { .. })
        ));
        assert!(matches!(
            Board::new(&BoardConfig::new(3, 0)),
            Err(Error::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn test_rejects_blocked_out_of_bounds() {
        let config = BoardConfig::default().with_blocked([IVec2::new(3, 0)]);
        assert!(matches!(
            Board::new(&config),
            Err(Error::BlockedOutOfBounds { .. })
        ));
    }

    #[test]
    fn test_rejects_blocked_center() {
        let config = BoardConfig::default().with_blocked([IVec2::new(1, 1)]);
        assert!(matches!(
            Board::new(&config),
            Err(Error::EmptySlotBlocked { .. })
        ));
    }

    #[test]
    fn test_seed_board_is_not_solved() {
        let board = Board::new(&BoardConfig::default()).unwrap();
        assert!(!board.is_solved());
    }

    #[test]
    fn test_solved_requires_no_seed_faces_showing() {
        let mut board = Board::new(&BoardConfig::default()).unwrap();
        let away = Orientation::new(FaceColor::Red, FaceColor::Blue);
        for i in 0..board.cells.len() {
            if board.cells[i].is_occupied() {
                board.cells[i] = Cell::Occupied(away);
            }
        }
        assert!(board.is_solved());

        // A single White top drags the whole board back to unsolved.
        board.cells[0] = Cell::Occupied(Orientation::new(FaceColor::White, FaceColor::Blue));
        assert!(!board.is_solved());

        // So does a single Yellow front.
        board.cells[0] = Cell::Occupied(Orientation::new(FaceColor::Red, FaceColor::Yellow));
        assert!(!board.is_solved());
    }

    #[test]
    fn test_numbered_solve_requires_ascending_tiles() {
        let config = BoardConfig::default().with_numbering(true);
        let mut board = Board::new(&config).unwrap();
        let away = Orientation::new(FaceColor::Red, FaceColor::Blue);
        for i in 0..board.cells.len() {
            if board.cells[i].is_occupied() {
                board.cells[i] = Cell::Occupied(away);
            }
        }
        assert!(board.is_solved());

        board.numbers.swap(0, 1);
        assert!(!board.is_solved());
    }

    #[test]
    fn test_apply_roll_moves_cube_and_numbers() {
        let config = BoardConfig::default().with_numbering(true);
        let mut board = Board::new(&config).unwrap();
        let source = IVec2::new(1, 2);
        let target = board.empty_cell();
        let rolled = board
            .get(source)
            .and_then(Cell::orientation)
            .unwrap()
            .rolled(Direction::Up);
        let source_number = board.number_at(source).unwrap();

        board.apply_roll(source, target, rolled);

        assert_eq!(board.empty_cell(), source);
        assert!(board.get(source).unwrap().is_empty());
        assert_eq!(board.get(target).unwrap().orientation(), Some(rolled));
        assert_eq!(board.number_at(target), Some(source_number));
        assert_eq!(board.number_at(source), Some(0));
    }

    #[test]
    fn test_one_by_one_board_is_a_lone_empty_slot() {
        let board = Board::new(&BoardConfig::new(1, 1)).unwrap();
        assert_eq!(board.empty_cell(), IVec2::new(0, 0));
        assert_eq!(board.cells().filter(|(_, c)| c.is_occupied()).count(), 0);
        assert!(board.is_solved());
    }
}
