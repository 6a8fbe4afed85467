mod board;
mod cell;
mod direction;
mod snake;
pub(crate) use self::direction::Direction;
use self::board::Board;
use self::cell::CellKind;
use self::snake::Snake;
use crate::config::BoardConfig;
use crate::consts;
use crate::controls::Controls;
use rand::Rng;
use ratatui::layout::Position;
use std::io::{self, BufRead, Write};

/// A single play session: the board, the snake on it, and the score
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Game<R> {
    rng: R,
    score: u32,
    snake: Snake,
    /// `None` only while new food is being placed, or once there is no room
    /// left for it
    food: Option<Position>,
    board: Board,
    state: GameState,
}

impl<R: Rng> Game<R> {
    /// Start a new game on a board of the given size.  The snake starts as a
    /// lone head a fifth of the way across and halfway down the board.
    pub(crate) fn new(board: BoardConfig, mut rng: R) -> Game<R> {
        let size = board.size();
        let snake = Snake::spawn(Position::new(size.width / 5, size.height / 2));
        let mut board = Board::regenerate(size, &snake, None);
        let food = board.place_food(&mut rng);
        let state = if food.is_some() {
            GameState::Running
        } else {
            GameState::Exhausted
        };
        tracing::info!(
            width = size.width,
            height = size.height,
            head = ?snake.head(),
            ?food,
            "Started new game"
        );
        Game {
            rng,
            score: 0,
            snake,
            food,
            board,
            state,
        }
    }

    /// Play until the snake dies, the board fills up, or `controls` runs out
    /// of input, printing the board before each move and a final report at
    /// the end.  Returns the final score.
    pub(crate) fn run<I: BufRead, W: Write>(
        &mut self,
        controls: &mut Controls<I>,
        out: &mut W,
    ) -> io::Result<u32> {
        while self.running() {
            writeln!(out, "{}", self.board)?;
            let Some(direction) = controls.next_direction(out)? else {
                // End the unanswered prompt's line
                writeln!(out)?;
                break;
            };
            let outcome = self.take_turn(direction);
            tracing::debug!(?direction, ?outcome, score = self.score, "Took turn");
        }
        if self.state == GameState::Exhausted {
            writeln!(out, "{}", self.board)?;
            writeln!(out, "{}", consts::BOARD_FULL_MESSAGE)?;
        }
        writeln!(out, "{}", consts::GAME_OVER_MESSAGE)?;
        writeln!(out, "Score: {}", self.score)?;
        tracing::info!(score = self.score, state = ?self.state, "Game over");
        Ok(self.score)
    }

    /// Move the snake one cell in `direction`.
    ///
    /// What happens is decided by the cell in front of the snake's head as
    /// it was on the board before the move: walls and any part of the snake
    /// kill it without moving it, food is eaten.
    pub(crate) fn take_turn(&mut self, direction: Direction) -> TurnOutcome {
        match self.state {
            GameState::Running => (),
            GameState::Dead => return TurnOutcome::Died,
            GameState::Exhausted => return TurnOutcome::Filled,
        }
        let target = direction.advance(self.snake.head());
        let kind = match target.and_then(|pos| self.board.kind_at(pos)) {
            Some(kind) if !kind.is_fatal() => kind,
            other => {
                tracing::debug!(?target, kind = ?other, "Snake crashed");
                self.state = GameState::Dead;
                return TurnOutcome::Died;
            }
        };
        let ate = kind == CellKind::Food;
        if ate {
            self.food = None;
            self.score += 1;
        }
        let moved = self.snake.advance(direction);
        debug_assert_eq!(moved, target, "snake should move onto the checked cell");
        if ate {
            self.snake.grow();
            tracing::debug!(len = self.snake.len(), tail = ?self.snake.tail(), "Snake grew");
        }
        self.board = Board::regenerate(self.board.size(), &self.snake, self.food);
        if self.food.is_none() {
            self.food = self.board.place_food(&mut self.rng);
            let Some(pos) = self.food else {
                tracing::debug!(len = self.snake.len(), "No room left for food");
                self.state = GameState::Exhausted;
                return TurnOutcome::Filled;
            };
            tracing::debug!(?pos, "Placed food");
        }
        if ate {
            TurnOutcome::Ate
        } else {
            TurnOutcome::Moved
        }
    }
}

impl<R> Game<R> {
    fn running(&self) -> bool {
        self.state == GameState::Running
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum GameState {
    Running,
    /// The snake ran into a wall or itself.
    Dead,
    /// The snake has filled the board and there are no more spaces to place
    /// food in.
    Exhausted,
}

/// What happened on a call to [`Game::take_turn()`]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum TurnOutcome {
    /// The snake moved onto an empty cell
    Moved,
    /// The snake moved onto the food and grew
    Ate,
    /// The snake would have hit something, so the game is over
    Died,
    /// The snake ate and now takes up every free cell, so the game is over
    Filled,
}
