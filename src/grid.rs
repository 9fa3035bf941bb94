/// Heading of the snake. Screen coordinates, so `Up` decreases `y`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    pub fn is_opposite(self, other: Direction) -> bool {
        self.opposite() == other
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Playing field measured in cells.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    pub width: i32,
    pub height: i32,
}

impl Grid {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Grid that fits a window of `window_width` x `window_height` pixels,
    /// leaving `sidebar` pixels on the left for the HUD.
    pub const fn for_window(window_width: i32, window_height: i32, sidebar: i32, cell_size: i32) -> Self {
        Self::new((window_width - sidebar) / cell_size, window_height / cell_size)
    }

    pub fn contains(&self, cell: Cell) -> bool {
        cell.x >= 0 && cell.y >= 0 && cell.x < self.width && cell.y < self.height
    }

    /// Neighbour of `cell` in `direction`, possibly outside the grid.
    pub fn offset(&self, cell: Cell, direction: Direction) -> Cell {
        let (dx, dy) = direction.delta();
        Cell::new(cell.x + dx, cell.y + dy)
    }

    pub fn wrap(&self, cell: Cell) -> Cell {
        Cell::new(cell.x.rem_euclid(self.width), cell.y.rem_euclid(self.height))
    }

    pub fn center(&self) -> Cell {
        Cell::new(self.width / 2, self.height / 2)
    }

    pub fn len(&self) -> usize {
        (self.width.max(0) * self.height.max(0)) as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Every cell in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.height).flat_map(move |y| (0..self.width).map(move |x| Cell::new(x, y)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposites() {
        assert!(Direction::Up.is_opposite(Direction::Down));
        assert!(Direction::Left.is_opposite(Direction::Right));
        assert!(!Direction::Up.is_opposite(Direction::Left));
        assert!(!Direction::Right.is_opposite(Direction::Right));
        for d in Direction::ALL {
            assert_eq!(d.opposite().opposite(), d);
        }
    }

    #[test]
    fn test_window_grid() {
        assert_eq!(Grid::for_window(800, 600, 0, 20), Grid::new(40, 30));
        assert_eq!(Grid::for_window(1024, 768, 200, 25), Grid::new(32, 30));
    }

    #[test]
    fn test_wrap_both_edges() {
        let grid = Grid::new(40, 30);
        assert_eq!(grid.wrap(Cell::new(40, 15)), Cell::new(0, 15));
        assert_eq!(grid.wrap(Cell::new(-1, 15)), Cell::new(39, 15));
        assert_eq!(grid.wrap(Cell::new(5, -1)), Cell::new(5, 29));
        assert_eq!(grid.wrap(Cell::new(5, 30)), Cell::new(5, 0));
        assert_eq!(grid.wrap(Cell::new(7, 8)), Cell::new(7, 8));
    }

    #[test]
    fn test_contains_and_center() {
        let grid = Grid::new(40, 30);
        assert_eq!(grid.center(), Cell::new(20, 15));
        assert!(grid.contains(Cell::new(0, 0)));
        assert!(grid.contains(Cell::new(39, 29)));
        assert!(!grid.contains(Cell::new(40, 0)));
        assert!(!grid.contains(Cell::new(0, -1)));
    }

    #[test]
    fn test_cells_cover_grid() {
        let grid = Grid::new(4, 3);
        let cells: Vec<Cell> = grid.cells().collect();
        assert_eq!(cells.len(), grid.len());
        assert_eq!(cells[0], Cell::new(0, 0));
        assert_eq!(cells[5], Cell::new(1, 1));
        assert!(cells.iter().all(|c| grid.contains(*c)));
    }
}
