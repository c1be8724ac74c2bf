use std::collections::VecDeque;

use crate::grid::UNIT_SIZE;
use crate::Cell;
use Direction::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Displacement of one cell of travel, in window units.
    pub fn offset(self) -> (i32, i32) {
        match self {
            Up => (0, -UNIT_SIZE),
            Down => (0, UNIT_SIZE),
            Left => (-UNIT_SIZE, 0),
            Right => (UNIT_SIZE, 0),
        }
    }

    pub fn opposite(self) -> Direction {
        match self {
            Up => Down,
            Down => Up,
            Left => Right,
            Right => Left,
        }
    }
}

/// The snake body, head first. Never empty.
pub struct Snake {
    body: VecDeque<Cell>,
}

impl Snake {
    /// Builds a straight snake of `len` cells with its head at `head`,
    /// trailing away from the direction of travel.
    pub fn new(head: Cell, len: usize, heading: Direction) -> Self {
        let len = len.max(1); // the body is never empty
        let (dx, dy) = heading.offset();
        let body = (0..len as i32)
            .map(|i| (head.0 - dx * i, head.1 - dy * i))
            .collect();

        Snake { body }
    }

    #[cfg(test)]
    pub(crate) fn from_cells<I: IntoIterator<Item = Cell>>(cells: I) -> Self {
        Snake { body: cells.into_iter().collect() }
    }

    pub fn head(&self) -> Cell {
        *self.body.front().unwrap()
    }

    pub fn body(&self) -> &VecDeque<Cell> {
        &self.body
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Prepends the next head cell one unit along `heading` and returns it.
    pub fn advance(&mut self, heading: Direction) -> Cell {
        let (dx, dy) = heading.offset();
        let head = self.head();
        let new_head = (head.0 + dx, head.1 + dy);
        self.body.push_front(new_head);
        new_head
    }

    pub fn drop_tail(&mut self) -> Option<Cell> {
        self.body.pop_back()
    }

    pub fn contains(&self, cell: Cell) -> bool {
        self.body.contains(&cell)
    }

    /// True when the head occupies the same cell as any other body segment.
    pub fn self_intersects(&self) -> bool {
        let head = self.head();
        self.body.iter().skip(1).any(|&c| c == head)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body_of(snake: &Snake) -> Vec<Cell> {
        snake.body().iter().copied().collect()
    }

    #[test]
    fn new_snake_trails_behind_its_head() {
        let snake = Snake::new((200, 200), 3, Right);
        assert_eq!(body_of(&snake), vec![(200, 200), (180, 200), (160, 200)]);

        let snake = Snake::new((100, 100), 2, Up);
        assert_eq!(body_of(&snake), vec![(100, 100), (100, 120)]);
    }

    #[test]
    fn zero_length_still_gets_a_head() {
        let snake = Snake::new((100, 100), 0, Right);
        assert_eq!(body_of(&snake), vec![(100, 100)]);
        assert_eq!(snake.head(), (100, 100));
    }

    #[test]
    fn advance_moves_exactly_one_unit() {
        let cases = [
            (Up, (100, 80)),
            (Down, (100, 120)),
            (Left, (80, 100)),
            (Right, (120, 100)),
        ];

        for (dir, expected) in cases.iter() {
            let mut snake = Snake::new((100, 100), 1, Right);
            assert_eq!(snake.advance(*dir), *expected);
            assert_eq!(snake.head(), *expected);
        }
    }

    #[test]
    fn opposites_pair_up() {
        for dir in [Up, Down, Left, Right].iter() {
            assert_eq!(dir.opposite().opposite(), *dir);
            assert_ne!(dir.opposite(), *dir);
        }
    }

    #[test]
    fn hooking_back_into_the_body_intersects() {
        let mut snake = Snake::new((100, 100), 5, Right);

        for dir in [Up, Left, Down].iter() {
            assert!(!snake.self_intersects());
            snake.advance(*dir);
            snake.drop_tail();
        }

        // The head has curled back onto (80, 100)
        assert_eq!(snake.head(), (80, 100));
        assert!(snake.self_intersects());
    }
}
