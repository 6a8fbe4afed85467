use super::direction::Direction;
use ratatui::layout::Position;
use std::collections::VecDeque;

/// The chain of cells making up the snake
///
/// The head is the front of `segments`; the rest, from the neck to the tip of
/// the tail, follows in order.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Snake {
    /// Never empty
    segments: VecDeque<Position>,

    /// The cell given up by the tail on the most recent move.  Before the
    /// first move, this is the head's starting position.
    vacated: Position,
}

impl Snake {
    /// Create a snake consisting of nothing but a head at `head`
    pub(crate) fn spawn(head: Position) -> Snake {
        Snake {
            segments: VecDeque::from([head]),
            vacated: head,
        }
    }

    /// Return the position of the snake's head
    pub(crate) fn head(&self) -> Position {
        self.segments[0]
    }

    /// Return the position of the last segment
    pub(crate) fn tail(&self) -> Position {
        self.segments[self.segments.len() - 1]
    }

    /// Return the positions of the cells in the snake's body, starting with
    /// the one directly behind the head
    pub(crate) fn body(&self) -> impl Iterator<Item = Position> + '_ {
        self.segments().skip(1)
    }

    /// Return the positions of every segment, head first
    pub(crate) fn segments(&self) -> impl Iterator<Item = Position> + '_ {
        self.segments.iter().copied()
    }

    /// Number of segments, head included
    pub(crate) fn len(&self) -> usize {
        self.segments.len()
    }

    /// Move the head one cell in `direction` and pull every other segment
    /// into the cell that the segment ahead of it just left.
    ///
    /// Returns the new head position, or `None` (leaving the snake untouched)
    /// if the head cannot move that way without leaving the coordinate space.
    pub(crate) fn advance(&mut self, direction: Direction) -> Option<Position> {
        let head = direction.advance(self.head())?;
        // Shifting every segment into its predecessor's old cell is the same
        // as adding a new front and dropping the back.
        self.segments.push_front(head);
        if let Some(tail) = self.segments.pop_back() {
            self.vacated = tail;
        }
        Some(head)
    }

    /// Add a body segment in the cell that the tail left on the last move
    pub(crate) fn grow(&mut self) {
        self.segments.push_back(self.vacated);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    /// Build a snake by growing it along a path of moves from `head`
    fn snake_from_moves(head: Position, moves: &[Direction]) -> Snake {
        let mut snake = Snake::spawn(head);
        for &d in moves {
            assert!(snake.advance(d).is_some());
            snake.grow();
        }
        snake
    }

    #[test]
    fn spawn() {
        let snake = Snake::spawn(Position::new(2, 5));
        assert_eq!(snake.head(), Position::new(2, 5));
        assert_eq!(snake.tail(), Position::new(2, 5));
        assert_eq!(snake.len(), 1);
        assert_eq!(snake.body().count(), 0);
    }

    #[rstest]
    #[case(Direction::Up, Position::new(5, 4))]
    #[case(Direction::Down, Position::new(5, 6))]
    #[case(Direction::Left, Position::new(4, 5))]
    #[case(Direction::Right, Position::new(6, 5))]
    fn advance_head(#[case] d: Direction, #[case] expected: Position) {
        let mut snake = Snake::spawn(Position::new(5, 5));
        assert_eq!(snake.advance(d), Some(expected));
        assert_eq!(snake.head(), expected);
        assert_eq!(snake.len(), 1);
    }

    #[rstest]
    #[case(&[])]
    #[case(&[Direction::Right])]
    #[case(&[Direction::Right, Direction::Right])]
    #[case(&[Direction::Right, Direction::Down, Direction::Down, Direction::Left])]
    #[case(&[
        Direction::Up,
        Direction::Up,
        Direction::Left,
        Direction::Down,
        Direction::Down,
        Direction::Down,
    ])]
    fn advance_follows(#[case] moves: &[Direction]) {
        let mut snake = snake_from_moves(Position::new(10, 10), moves);
        let before = snake.segments().collect::<Vec<_>>();
        assert!(snake.advance(Direction::Up).is_some());
        let after = snake.segments().collect::<Vec<_>>();
        assert_eq!(after.len(), before.len());
        assert_eq!(after[0], Position::new(before[0].x, before[0].y - 1));
        assert_eq!(&after[1..], &before[..before.len() - 1]);
    }

    #[rstest]
    #[case(&[])]
    #[case(&[Direction::Left])]
    #[case(&[Direction::Left, Direction::Up, Direction::Up])]
    fn grow_at_old_tail(#[case] moves: &[Direction]) {
        let mut snake = snake_from_moves(Position::new(10, 10), moves);
        let len = snake.len();
        let old_tail = snake.tail();
        assert!(snake.advance(Direction::Down).is_some());
        snake.grow();
        assert_eq!(snake.len(), len + 1);
        assert_eq!(snake.tail(), old_tail);
    }

    #[test]
    fn grow_single_segment() {
        let mut snake = Snake::spawn(Position::new(3, 5));
        assert_eq!(snake.advance(Direction::Right), Some(Position::new(4, 5)));
        snake.grow();
        assert_eq!(
            snake.segments().collect::<Vec<_>>(),
            [Position::new(4, 5), Position::new(3, 5)]
        );
        assert_eq!(snake.advance(Direction::Down), Some(Position::new(4, 6)));
        assert_eq!(
            snake.segments().collect::<Vec<_>>(),
            [Position::new(4, 6), Position::new(4, 5)]
        );
    }

    #[test]
    fn advance_out_of_range() {
        let mut snake = snake_from_moves(Position::new(0, 1), &[Direction::Up]);
        let before = snake.clone();
        assert_eq!(snake.advance(Direction::Up), None);
        assert_eq!(snake, before);
    }
}
