use crate::consts;
use ratatui::layout::Position;

/// A single square of the board
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Cell {
    pub(crate) pos: Position,
    pub(crate) kind: CellKind,
}

impl Cell {
    pub(crate) fn new(pos: Position, kind: CellKind) -> Cell {
        Cell { pos, kind }
    }

    pub(crate) fn glyph(self) -> char {
        self.kind.glyph()
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum CellKind {
    Empty,
    Wall(WallKind),
    Head,
    Body,
    Food,
}

impl CellKind {
    pub(crate) fn glyph(self) -> char {
        match self {
            CellKind::Empty => consts::EMPTY_SYMBOL,
            CellKind::Wall(WallKind::Corner) => consts::WALL_CORNER_SYMBOL,
            CellKind::Wall(WallKind::Horizontal) => consts::WALL_HORIZONTAL_SYMBOL,
            CellKind::Wall(WallKind::Vertical) => consts::WALL_VERTICAL_SYMBOL,
            CellKind::Head => consts::SNAKE_HEAD_SYMBOL,
            CellKind::Body => consts::SNAKE_BODY_SYMBOL,
            CellKind::Food => consts::FOOD_SYMBOL,
        }
    }

    /// Whether moving the snake's head onto a cell of this kind ends the game
    pub(crate) fn is_fatal(self) -> bool {
        matches!(self, CellKind::Wall(_) | CellKind::Head | CellKind::Body)
    }
}

/// Which part of the border a wall cell belongs to
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum WallKind {
    Corner,
    /// Top or bottom row
    Horizontal,
    /// Left or right column
    Vertical,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(CellKind::Empty, ' ', false)]
    #[case(CellKind::Wall(WallKind::Corner), '+', true)]
    #[case(CellKind::Wall(WallKind::Horizontal), '-', true)]
    #[case(CellKind::Wall(WallKind::Vertical), '|', true)]
    #[case(CellKind::Head, 'O', true)]
    #[case(CellKind::Body, '0', true)]
    #[case(CellKind::Food, '@', false)]
    fn kinds(#[case] kind: CellKind, #[case] glyph: char, #[case] fatal: bool) {
        assert_eq!(kind.glyph(), glyph);
        assert_eq!(kind.is_fatal(), fatal);
        assert_eq!(Cell::new(Position::new(3, 4), kind).glyph(), glyph);
    }
}
