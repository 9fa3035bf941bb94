use std::collections::VecDeque;

use crate::grid::{Cell, Direction, Grid};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DeathReason {
    WallCollision,
    SelfCollision,
}

/// Result of moving the snake one cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Advance {
    Alive,
    Dead(DeathReason),
}

#[derive(Clone, Debug)]
pub struct Snake {
    body: VecDeque<Cell>,
    direction: Direction,
    pending_growth: u32,
}

impl Snake {
    /// One-segment snake at `start`.
    pub fn new(start: Cell, direction: Direction) -> Self {
        Self {
            body: VecDeque::from([start]),
            direction,
            pending_growth: 0,
        }
    }

    pub fn spawn(grid: &Grid) -> Self {
        Self::new(grid.center(), Direction::Right)
    }

    pub fn head(&self) -> Cell {
        // body is never empty: advance only pops after a push
        self.body[0]
    }

    pub fn body(&self) -> impl ExactSizeIterator<Item = &Cell> + '_ {
        self.body.iter()
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn pending_growth(&self) -> u32 {
        self.pending_growth
    }

    /// Turns the snake unless `direction` points straight back.
    /// Returns whether the turn was accepted.
    pub fn set_direction(&mut self, direction: Direction) -> bool {
        if direction.is_opposite(self.direction) {
            return false;
        }
        self.direction = direction;
        true
    }

    /// Keep the tail for the next `segments` advances.
    pub fn grow(&mut self, segments: u32) {
        self.pending_growth = self.pending_growth.saturating_add(segments);
    }

    /// Moves the head one cell. On death the snake is left untouched.
    ///
    /// Self-collision ignores the current head and the segment right behind it.
    /// That segment is normally vacated this tick, so the snake can move
    /// straight without tripping over its own neck. The tail cell is still
    /// checked, which makes chasing your own tail fatal.
    pub fn advance(&mut self, grid: &Grid, walls_are_lethal: bool) -> Advance {
        let next = grid.offset(self.head(), self.direction);
        let new_head = if grid.contains(next) {
            next
        } else if walls_are_lethal {
            return Advance::Dead(DeathReason::WallCollision);
        } else {
            grid.wrap(next)
        };

        if self.body.iter().skip(2).any(|c| *c == new_head) {
            return Advance::Dead(DeathReason::SelfCollision);
        }

        self.body.push_front(new_head);
        if self.pending_growth > 0 {
            self.pending_growth -= 1;
        } else {
            self.body.pop_back();
        }
        Advance::Alive
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snake_from(cells: &[(i32, i32)], direction: Direction) -> Snake {
        Snake {
            body: cells.iter().map(|&(x, y)| Cell::new(x, y)).collect(),
            direction,
            pending_growth: 0,
        }
    }

    #[test]
    fn test_spawn_at_center_facing_right() {
        let snake = Snake::spawn(&Grid::new(40, 30));
        assert_eq!(snake.head(), Cell::new(20, 15));
        assert_eq!(snake.direction(), Direction::Right);
        assert_eq!(snake.len(), 1);
    }

    #[test]
    fn test_three_ticks_straight() {
        let grid = Grid::new(40, 30);
        let mut snake = Snake::spawn(&grid);
        for _ in 0..3 {
            assert_eq!(snake.advance(&grid, false), Advance::Alive);
        }
        assert_eq!(snake.head(), Cell::new(23, 15));
        assert_eq!(snake.len(), 1);
    }

    #[test]
    fn test_reverse_is_rejected() {
        for current in Direction::ALL {
            for requested in Direction::ALL {
                let mut snake = Snake::new(Cell::new(5, 5), current);
                let accepted = snake.set_direction(requested);
                if requested.is_opposite(current) {
                    assert!(!accepted);
                    assert_eq!(snake.direction(), current);
                } else {
                    assert!(accepted);
                    assert_eq!(snake.direction(), requested);
                }
            }
        }
    }

    #[test]
    fn test_wraparound_never_kills() {
        let grid = Grid::new(6, 4);
        for cell in grid.cells() {
            for direction in Direction::ALL {
                let mut snake = Snake::new(cell, direction);
                assert_eq!(snake.advance(&grid, false), Advance::Alive);
                assert!(grid.contains(snake.head()));
            }
        }
    }

    #[test]
    fn test_wraps_to_opposite_edge() {
        let grid = Grid::new(40, 30);
        let mut snake = Snake::new(Cell::new(39, 10), Direction::Right);
        snake.advance(&grid, false);
        assert_eq!(snake.head(), Cell::new(0, 10));

        let mut snake = Snake::new(Cell::new(3, 0), Direction::Up);
        snake.advance(&grid, false);
        assert_eq!(snake.head(), Cell::new(3, 29));
    }

    #[test]
    fn test_lethal_walls() {
        let grid = Grid::new(6, 4);
        for cell in grid.cells() {
            for direction in Direction::ALL {
                let mut snake = Snake::new(cell, direction);
                let outward = !grid.contains(grid.offset(cell, direction));
                let result = snake.advance(&grid, true);
                if outward {
                    assert_eq!(result, Advance::Dead(DeathReason::WallCollision));
                    assert_eq!(snake.head(), cell);
                    assert_eq!(snake.len(), 1);
                } else {
                    assert_eq!(result, Advance::Alive);
                }
            }
        }
    }

    #[test]
    fn test_growth_is_spread_over_ticks() {
        let grid = Grid::new(40, 30);
        let mut snake = Snake::spawn(&grid);
        snake.grow(3);
        for expected in 2..=4 {
            snake.advance(&grid, false);
            assert_eq!(snake.len(), expected);
        }
        assert_eq!(snake.pending_growth(), 0);
        snake.advance(&grid, false);
        assert_eq!(snake.len(), 4);
    }

    #[test]
    fn test_self_collision() {
        let grid = Grid::new(10, 10);
        // head at (5,5) heading up into its own third segment
        let mut snake = snake_from(&[(5, 6), (6, 6), (6, 5), (5, 5), (4, 5)], Direction::Up);
        snake.set_direction(Direction::Up);
        let before: Vec<Cell> = snake.body().copied().collect();
        assert_eq!(snake.advance(&grid, false), Advance::Dead(DeathReason::SelfCollision));
        assert_eq!(snake.body().copied().collect::<Vec<_>>(), before);
    }

    #[test]
    fn test_moving_into_neck_is_not_fatal() {
        // Reversal is normally blocked by set_direction; force it to pin down
        // that the neck segment is excluded from the collision check.
        let grid = Grid::new(10, 10);
        let mut snake = snake_from(&[(5, 5), (4, 5), (3, 5), (2, 5)], Direction::Left);
        assert_eq!(snake.advance(&grid, false), Advance::Alive);
        assert_eq!(snake.head(), Cell::new(4, 5));
        assert_eq!(snake.len(), 4);
    }

    #[test]
    fn test_tail_cell_is_fatal() {
        let grid = Grid::new(10, 10);
        // 2x2 loop: the head's next cell is the tail, which would be vacated
        let mut snake = snake_from(&[(5, 5), (5, 6), (4, 6), (4, 5)], Direction::Left);
        assert_eq!(snake.advance(&grid, false), Advance::Dead(DeathReason::SelfCollision));
    }
}
