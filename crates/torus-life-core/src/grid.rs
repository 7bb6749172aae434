use rand::Rng;

/// Square toroidal board of alive/dead cells, stored row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CellGrid {
    size: usize,
    cells: Vec<bool>,
}

impl CellGrid {
    /// All-dead board with `size` cells along each edge.
    pub fn blank(size: usize) -> Self {
        assert!(size > 0, "grid size must be positive");
        Self {
            size,
            cells: vec![false; size * size],
        }
    }

    /// Randomized board; each cell starts alive with probability 2/5.
    pub fn random(size: usize, rng: &mut impl Rng) -> Self {
        let mut grid = Self::blank(size);
        grid.randomize(rng);
        grid
    }

    /// Refill every cell at the 2/5 alive ratio without reallocating.
    pub fn randomize(&mut self, rng: &mut impl Rng) {
        for cell in &mut self.cells {
            *cell = rng.random_ratio(2, 5);
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn get(&self, x: usize, y: usize) -> bool {
        self.cells[self.index(x, y)]
    }

    pub fn set(&mut self, x: usize, y: usize, alive: bool) {
        let idx = self.index(x, y);
        self.cells[idx] = alive;
    }

    pub fn alive_count(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    pub fn as_slice(&self) -> &[bool] {
        &self.cells
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [bool] {
        &mut self.cells
    }

    fn index(&self, x: usize, y: usize) -> usize {
        debug_assert!(x < self.size && y < self.size);
        y * self.size + x
    }
}

/// Per-cell consecutive-alive tick counts, parallel to a `CellGrid`.
///
/// An entry is zero exactly while the matching cell is dead.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AgeGrid {
    size: usize,
    ages: Vec<u32>,
}

impl AgeGrid {
    pub fn zeroed(size: usize) -> Self {
        assert!(size > 0, "grid size must be positive");
        Self {
            size,
            ages: vec![0; size * size],
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn get(&self, x: usize, y: usize) -> u32 {
        self.ages[self.index(x, y)]
    }

    pub fn set(&mut self, x: usize, y: usize, age: u32) {
        let idx = self.index(x, y);
        self.ages[idx] = age;
    }

    /// Zero every counter, as after a board restart.
    pub fn reset(&mut self) {
        self.ages.fill(0);
    }

    pub fn as_slice(&self) -> &[u32] {
        &self.ages
    }

    pub(crate) fn ages_mut(&mut self) -> &mut [u32] {
        &mut self.ages
    }

    fn index(&self, x: usize, y: usize) -> usize {
        debug_assert!(x < self.size && y < self.size);
        y * self.size + x
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::create_rng;

    #[test]
    fn blank_board_is_fully_dead() {
        let grid = CellGrid::blank(8);
        assert_eq!(grid.size(), 8);
        assert_eq!(grid.alive_count(), 0);
    }

    #[test]
    #[should_panic(expected = "grid size must be positive")]
    fn blank_panics_on_zero_size() {
        CellGrid::blank(0);
    }

    #[test]
    fn set_and_get_round_trip() {
        let mut grid = CellGrid::blank(4);
        grid.set(3, 1, true);
        assert!(grid.get(3, 1));
        assert!(!grid.get(1, 3));
        assert_eq!(grid.alive_count(), 1);
    }

    #[test]
    fn random_board_holds_both_states_at_plausible_ratio() {
        let mut rng = create_rng(Some(7));
        let grid = CellGrid::random(64, &mut rng);
        let alive = grid.alive_count();
        let total = 64 * 64;
        assert!(alive > 0 && alive < total, "degenerate board: {alive}/{total}");
        // 2/5 alive in expectation; allow a generous band around it.
        assert!(alive > total / 4, "too sparse: {alive}/{total}");
        assert!(alive < total / 2, "too dense: {alive}/{total}");
    }

    #[test]
    fn randomize_replaces_the_board_in_place() {
        let mut rng = create_rng(Some(11));
        let mut grid = CellGrid::random(32, &mut rng);
        let before = grid.clone();
        grid.randomize(&mut rng);
        assert_eq!(grid.size(), before.size());
        assert_ne!(grid, before);
    }

    #[test]
    fn fixed_seed_reproduces_the_same_board() {
        let first = CellGrid::random(24, &mut create_rng(Some(42)));
        let second = CellGrid::random(24, &mut create_rng(Some(42)));
        assert_eq!(first, second);
    }

    #[test]
    fn zeroed_ages_reset_after_mutation() {
        let mut ages = AgeGrid::zeroed(4);
        ages.set(1, 1, 9);
        assert_eq!(ages.get(1, 1), 9);
        ages.reset();
        assert!(ages.as_slice().iter().all(|&age| age == 0));
    }

    #[test]
    #[should_panic(expected = "grid size must be positive")]
    fn zeroed_panics_on_zero_size() {
        AgeGrid::zeroed(0);
    }
}
