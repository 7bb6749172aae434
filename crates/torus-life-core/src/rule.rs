/// Next state of one cell under the canonical B3/S23 rule.
///
/// A live cell survives with two or three live neighbours; a dead cell is
/// born with exactly three. Every other combination yields a dead cell.
pub fn next_state(alive: bool, neighbors: u8) -> bool {
    matches!((alive, neighbors), (true, 2 | 3) | (false, 3))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rule_table_matches_b3s23_exhaustively() {
        for neighbors in 0..=8u8 {
            assert_eq!(
                next_state(true, neighbors),
                neighbors == 2 || neighbors == 3,
                "live cell with {neighbors} neighbours"
            );
            assert_eq!(
                next_state(false, neighbors),
                neighbors == 3,
                "dead cell with {neighbors} neighbours"
            );
        }
    }
}
