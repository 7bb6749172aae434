use crate::grid::{AgeGrid, CellGrid};
use crate::neighborhood::count_neighbors;
use crate::rule::next_state;

/// Advances a board by whole synchronous ticks.
///
/// Owns the candidate board and the neighbour-count scratch so steady-state
/// ticking allocates nothing.
pub struct TickEngine {
    counts: Vec<u8>,
    next: CellGrid,
}

impl TickEngine {
    pub fn new(size: usize) -> Self {
        Self {
            counts: vec![0; size * size],
            next: CellGrid::blank(size),
        }
    }

    /// Run one tick over `grid` and `ages`.
    ///
    /// Every neighbour count is taken from the board as it stood at entry,
    /// then the rule produces the candidate board, then ages follow the
    /// candidate: surviving and newborn cells gain one tick, dead cells drop
    /// to zero. When `age_cap` is non-zero, a cell whose age passes the cap
    /// is killed and its age zeroed in the same pass. Finally the candidate
    /// board is swapped in.
    pub fn advance(&mut self, grid: &mut CellGrid, ages: &mut AgeGrid, age_cap: u32) {
        let size = grid.size();
        debug_assert_eq!(size, self.next.size());
        debug_assert_eq!(size, ages.size());

        for y in 0..size {
            for x in 0..size {
                self.counts[y * size + x] = count_neighbors(grid, x, y);
            }
        }
        for y in 0..size {
            for x in 0..size {
                let alive = next_state(grid.get(x, y), self.counts[y * size + x]);
                self.next.set(x, y, alive);
            }
        }
        for (age, alive) in ages.ages_mut().iter_mut().zip(self.next.cells_mut()) {
            *age = if *alive { age.saturating_add(1) } else { 0 };
            if age_cap > 0 && *age > age_cap {
                *alive = false;
                *age = 0;
            }
        }
        std::mem::swap(grid, &mut self.next);
    }
}
