//! Assorted constants & hard-coded configuration
use ratatui::layout::Size;

/// Board dimensions used when no configuration says otherwise, walls
/// included
pub(crate) const DEFAULT_BOARD_SIZE: Size = Size {
    width: 11,
    height: 11,
};

/// Smallest board width that keeps the snake's starting cell
/// (`width / 5`) off the left wall
pub(crate) const MIN_BOARD_WIDTH: u16 = 5;

/// Smallest board height that leaves at least one row between the walls
pub(crate) const MIN_BOARD_HEIGHT: u16 = 3;

/// Largest accepted board width
pub(crate) const MAX_BOARD_WIDTH: u16 = 255;

/// Largest accepted board height
pub(crate) const MAX_BOARD_HEIGHT: u16 = 255;

/// Glyph for an unoccupied cell
pub(crate) const EMPTY_SYMBOL: char = ' ';

/// Glyph for the snake's head
pub(crate) const SNAKE_HEAD_SYMBOL: char = 'O';

/// Glyph for the parts of the snake's body
pub(crate) const SNAKE_BODY_SYMBOL: char = '0';

/// Glyph for the food
pub(crate) const FOOD_SYMBOL: char = '@';

/// Glyph for the four corners of the wall
pub(crate) const WALL_CORNER_SYMBOL: char = '+';

/// Glyph for the top & bottom walls
pub(crate) const WALL_HORIZONTAL_SYMBOL: char = '-';

/// Glyph for the left & right walls
pub(crate) const WALL_VERTICAL_SYMBOL: char = '|';

/// Printed before every read of a move
pub(crate) const MOVE_PROMPT: &str = "Move: ";

/// Printed when a line of input is not a move
pub(crate) const INVALID_MOVE_MESSAGE: &str = "Please give a valid move!";

pub(crate) const GAME_OVER_MESSAGE: &str = "Game Over!";

/// Printed above the game-over banner when the snake has filled the board
pub(crate) const BOARD_FULL_MESSAGE: &str = "The board is full!";
