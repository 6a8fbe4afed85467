use super::cell::{Cell, CellKind, WallKind};
use super::snake::Snake;
use rand::{seq::IteratorRandom, Rng};
use ratatui::layout::{Position, Positions, Rect, Size};
use std::fmt;

/// The grid of cells that the game is played on, walls included.
///
/// A `Board` is a snapshot: it is rebuilt from scratch after every move from
/// the snake and the food rather than being patched in place.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Board {
    size: Size,
    /// Row-major
    cells: Vec<Cell>,
}

impl Board {
    /// Create a board of the given size in which every cell is empty
    pub(crate) fn empty(size: Size) -> Board {
        let cells = positions(size)
            .map(|pos| Cell::new(pos, CellKind::Empty))
            .collect();
        Board { size, cells }
    }

    /// Build the board for a snake & (optionally) a food position: an empty
    /// board with walls around the edge, the snake drawn on top, and then the
    /// food.
    pub(crate) fn regenerate(size: Size, snake: &Snake, food: Option<Position>) -> Board {
        let mut board = Board::empty(size);
        board.stamp_walls();
        board.stamp_snake(snake);
        if let Some(pos) = food {
            board.stamp_food(pos);
        }
        board
    }

    pub(crate) fn size(&self) -> Size {
        self.size
    }

    /// Overwrite the outermost ring of cells with walls
    pub(crate) fn stamp_walls(&mut self) {
        let max_x = self.size.width.saturating_sub(1);
        let max_y = self.size.height.saturating_sub(1);
        for cell in &mut self.cells {
            let Position { x, y } = cell.pos;
            let wall = match (y == 0 || y == max_y, x == 0 || x == max_x) {
                (true, true) => WallKind::Corner,
                (true, false) => WallKind::Horizontal,
                (false, true) => WallKind::Vertical,
                (false, false) => continue,
            };
            cell.kind = CellKind::Wall(wall);
        }
    }

    /// Draw the snake's head & body onto the board
    pub(crate) fn stamp_snake(&mut self, snake: &Snake) {
        for pos in snake.body() {
            self.stamp(pos, CellKind::Body);
        }
        self.stamp(snake.head(), CellKind::Head);
    }

    pub(crate) fn stamp_food(&mut self, pos: Position) {
        self.stamp(pos, CellKind::Food);
    }

    /// Put food in a randomly-chosen empty cell and return its position.
    /// Returns `None` if there are no empty cells left.
    pub(crate) fn place_food<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<Position> {
        let pos = self
            .cells
            .iter()
            .filter(|cell| cell.kind == CellKind::Empty)
            .map(|cell| cell.pos)
            .choose(rng)?;
        self.stamp_food(pos);
        Some(pos)
    }

    /// Return the cell at `pos`, or `None` if `pos` is off the board
    pub(crate) fn get(&self, pos: Position) -> Option<Cell> {
        self.index(pos).map(|i| self.cells[i])
    }

    pub(crate) fn kind_at(&self, pos: Position) -> Option<CellKind> {
        self.get(pos).map(|cell| cell.kind)
    }

    /// Iterate over the rows of the board, top to bottom
    pub(crate) fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks(usize::from(self.size.width).max(1))
    }

    fn stamp(&mut self, pos: Position, kind: CellKind) {
        if let Some(i) = self.index(pos) {
            self.cells[i] = Cell::new(pos, kind);
        }
    }

    fn index(&self, pos: Position) -> Option<usize> {
        (pos.x < self.size.width && pos.y < self.size.height).then(|| {
            usize::from(pos.y) * usize::from(self.size.width) + usize::from(pos.x)
        })
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for cell in row {
                write!(f, " {} ", cell.glyph())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

fn positions(size: Size) -> Positions {
    Rect::from((Position::ORIGIN, size)).positions()
}
