use crate::{Board, Placement};

/// Checks whether a queen at `(row, col)` is compatible with every queen
/// already placed in columns `[0, col)`.
///
/// Only the left half of the board is inspected: the same row, the
/// upper-left diagonal and the lower-left diagonal. The diagonal scans are
/// clamped to the board, so rows near the edges never cause an
/// out-of-range read. O(N) worst case, no side effects.
pub fn is_safe(board: &Board, row: usize, col: usize) -> bool {
    debug_assert!(row < board.size() && col < board.size());

    for c in 0..col {
        if board.occupied(row, c) {
            return false;
        }
    }
    // The upper-left diagonal ends at whichever edge comes first
    for d in 1..=row.min(col) {
        if board.occupied(row - d, col - d) {
            return false;
        }
    }
    for d in 1..=col {
        let r = row + d;
        if r >= board.size() {
            break;
        }
        if board.occupied(r, col - d) {
            return false;
        }
    }
    true
}

/// Places one queen in every column starting at `col`, backtracking on
/// conflicts.
///
/// Returns whether a full placement was reached. On failure, every column
/// at or right of `col` is left unoccupied again.
fn solve_from(board: &mut Board, col: usize) -> bool {
    if col == board.size() {
        return true;
    }
    // Lowest row first, so the first-found solution is deterministic
    for row in 0..board.size() {
        if is_safe(board, row, col) {
            board.place(row, col);
            if solve_from(board, col + 1) {
                return true;
            }
            board.retract(row, col);
        }
    }
    false
}

/// Solves the N-Queens problem for an `n`×`n` board.
///
/// Returns one placement per column, in increasing column order, or an
/// empty vector when no placement exists (among positive sizes, only
/// `n == 2` and `n == 3` are unsolvable). Repeated calls with the same `n`
/// return the identical vector.
pub fn solve(n: usize) -> Vec<Placement> {
    let mut board = Board::new(n);
    if !solve_from(&mut board, 0) {
        return Vec::new();
    }
    let mut placements = board.occupied_cells();
    placements.sort_by_key(|placement| placement.col);
    placements
}

#[cfg(test)]
mod tests {
    use quickcheck::quickcheck;

    use super::*;
    use crate::arbitrary::SmallBoardSize;

    fn assert_valid_solution(n: usize, placements: &[Placement]) {
        assert_eq!(placements.len(), n);
        for (col, placement) in placements.iter().enumerate() {
            assert_eq!(placement.col, col);
            assert!(placement.row < n);
        }
        for (i, a) in placements.iter().enumerate() {
            for b in &placements[i + 1..] {
                assert_ne!(a.row, b.row, "queens {a} and {b} share a row");
                assert_ne!(
                    a.row.abs_diff(b.row),
                    a.col.abs_diff(b.col),
                    "queens {a} and {b} share a diagonal"
                );
            }
        }
    }

    quickcheck! {
        fn solutions_are_valid(size: SmallBoardSize) -> bool {
            let SmallBoardSize(n) = size;
            let placements = solve(n);
            if n == 2 || n == 3 {
                return placements.is_empty();
            }
            assert_valid_solution(n, &placements);
            true
        }

        fn solving_is_deterministic(size: SmallBoardSize) -> bool {
            let SmallBoardSize(n) = size;
            solve(n) == solve(n)
        }
    }

    #[test]
    fn one_queen_on_a_single_cell_board() {
        assert_eq!(solve(1), vec![Placement::new(0, 0)]);
    }

    #[test]
    fn sizes_two_and_three_have_no_solution() {
        assert_eq!(solve(2), vec![]);
        assert_eq!(solve(3), vec![]);
    }

    #[test]
    fn first_solution_for_size_four() {
        assert_eq!(
            solve(4),
            vec![
                Placement::new(1, 0),
                Placement::new(3, 1),
                Placement::new(0, 2),
                Placement::new(2, 3),
            ]
        );
    }

    #[test]
    fn first_solution_for_size_eight() {
        let placements = solve(8);
        assert_valid_solution(8, &placements);
        let rows_by_column: Vec<usize> = placements.iter().map(|p| p.row).collect();
        assert_eq!(rows_by_column, vec![0, 4, 7, 5, 2, 6, 1, 3]);
    }

    #[test]
    fn failed_search_leaves_no_placements_behind() {
        let mut board = Board::new(3);
        assert!(!solve_from(&mut board, 0));
        assert!(board.occupied_cells().is_empty());
    }

    #[test]
    fn safety_predicate_sees_rows_and_diagonals() {
        let mut board = Board::new(5);
        board.set(2, 1, true).unwrap();
        // Same row
        assert!(!is_safe(&board, 2, 3));
        // Upper-left diagonal of (4, 3) passes through (2, 1)
        assert!(!is_safe(&board, 4, 3));
        // Lower-left diagonal of (0, 3) passes through (2, 1)
        assert!(!is_safe(&board, 0, 3));
        // No shared row or diagonal
        assert!(is_safe(&board, 1, 3));
    }

    #[test]
    fn safety_predicate_clamps_diagonals_at_the_edges() {
        let mut board = Board::new(4);
        board.set(1, 0, true).unwrap();
        // Row 0 has no upper-left diagonal, row 3 no lower-left one
        assert!(is_safe(&board, 0, 2));
        assert!(is_safe(&board, 3, 1));
        assert!(!is_safe(&board, 0, 1));
        assert!(!is_safe(&board, 2, 1));
    }
}
