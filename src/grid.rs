use crate::Cell;

pub const WIDTH: i32 = 600;
pub const HEIGHT: i32 = 600;
pub const UNIT_SIZE: i32 = 20;

pub const COLS: i32 = WIDTH / UNIT_SIZE;
pub const ROWS: i32 = HEIGHT / UNIT_SIZE;

pub fn in_bounds(cell: Cell) -> bool {
    cell.0 >= 0 && cell.0 < WIDTH && cell.1 >= 0 && cell.1 < HEIGHT
}

/// Every cell of the board, in row-major order.
pub fn all_cells() -> impl Iterator<Item = Cell> {
    (0..ROWS).flat_map(|row| (0..COLS).map(move |col| (col * UNIT_SIZE, row * UNIT_SIZE)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_are_half_open() {
        assert!(in_bounds((0, 0)));
        assert!(in_bounds((WIDTH - UNIT_SIZE, HEIGHT - UNIT_SIZE)));
        assert!(!in_bounds((-UNIT_SIZE, 0)));
        assert!(!in_bounds((0, -UNIT_SIZE)));
        assert!(!in_bounds((WIDTH, 0)));
        assert!(!in_bounds((0, HEIGHT)));
    }

    #[test]
    fn all_cells_covers_the_board_once() {
        let cells: Vec<_> = all_cells().collect();
        assert_eq!(cells.len(), (COLS * ROWS) as usize);
        assert!(cells.iter().all(|&c| in_bounds(c)));
        assert_eq!(cells[0], (0, 0));
        assert_eq!(*cells.last().unwrap(), (WIDTH - UNIT_SIZE, HEIGHT - UNIT_SIZE));
    }
}
