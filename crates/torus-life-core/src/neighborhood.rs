use crate::grid::CellGrid;

/// Count alive cells among the 8 toroidal neighbours of `(x, y)`.
///
/// Indices wrap, so the board has no edges: column `N - 1` is adjacent to
/// column 0 and likewise for rows. The cell itself is never part of its own
/// neighbourhood, though on a 1x1 board all eight neighbour positions wrap
/// back onto it.
pub fn count_neighbors(grid: &CellGrid, x: usize, y: usize) -> u8 {
    let size = grid.size();
    let left = (x + size - 1) % size;
    let right = (x + 1) % size;
    let up = (y + size - 1) % size;
    let down = (y + 1) % size;

    u8::from(grid.get(left, up))
        + u8::from(grid.get(x, up))
        + u8::from(grid.get(right, up))
        + u8::from(grid.get(left, y))
        + u8::from(grid.get(right, y))
        + u8::from(grid.get(left, down))
        + u8::from(grid.get(x, down))
        + u8::from(grid.get(right, down))
}
