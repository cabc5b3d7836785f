//! Match detection - 3-window scans over rows and columns
//!
//! Every horizontal and vertical window of three consecutive same-colored
//! tiles contributes its indices to one union set. Runs longer than three
//! are captured by their overlapping windows, and intersecting runs collapse
//! naturally because membership is positional.

use std::collections::BTreeSet;

use crate::core::board::Board;

/// Scan the whole board and return the set of matched cell indices.
///
/// An empty set signals "no match". The set is ordered so that reported
/// clear events are deterministic.
pub fn find_matches(board: &Board) -> BTreeSet<usize> {
    let mut matches = BTreeSet::new();
    let cells = board.cells();
    let width = board.width();
    let height = board.height();
    let stride = width as usize;

    // Horizontal windows
    for row in 0..height {
        for col in 0..width - 2 {
            let i = board.index(row, col);
            if let Some(color) = cells[i] {
                if cells[i + 1] == Some(color) && cells[i + 2] == Some(color) {
                    matches.insert(i);
                    matches.insert(i + 1);
                    matches.insert(i + 2);
                }
            }
        }
    }

    // Vertical windows
    for col in 0..width {
        for row in 0..height - 2 {
            let i = board.index(row, col);
            if let Some(color) = cells[i] {
                if cells[i + stride] == Some(color) && cells[i + 2 * stride] == Some(color) {
                    matches.insert(i);
                    matches.insert(i + stride);
                    matches.insert(i + 2 * stride);
                }
            }
        }
    }

    matches
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Cell;
    use crate::types::Color::*;

    /// 5x5 board with no runs: each row is the previous one rotated left.
    fn latin_rows() -> Vec<Vec<Cell>> {
        vec![
            vec![Some(Red), Some(Blue), Some(Green), Some(Yellow), Some(Purple)],
            vec![Some(Blue), Some(Green), Some(Yellow), Some(Purple), Some(Red)],
            vec![Some(Green), Some(Yellow), Some(Purple), Some(Red), Some(Blue)],
            vec![Some(Yellow), Some(Purple), Some(Red), Some(Blue), Some(Green)],
            vec![Some(Purple), Some(Red), Some(Blue), Some(Green), Some(Yellow)],
        ]
    }

    #[test]
    fn test_quiet_board_has_no_matches() {
        let board = Board::from_rows(latin_rows());
        assert!(find_matches(&board).is_empty());
    }

    #[test]
    fn test_horizontal_triple() {
        let mut rows = latin_rows();
        rows[2] = vec![Some(Red), Some(Red), Some(Red), Some(Yellow), Some(Blue)];
        let board = Board::from_rows(rows);

        let matches = find_matches(&board);
        assert_eq!(matches, BTreeSet::from([10, 11, 12]));
    }

    #[test]
    fn test_vertical_triple() {
        let mut rows = latin_rows();
        rows[1][3] = Some(Red);
        rows[3][3] = Some(Red);
        // rows[2][3] is already Red; column 3 reads Y R R R G top to bottom
        let board = Board::from_rows(rows);

        let matches = find_matches(&board);
        assert_eq!(matches, BTreeSet::from([8, 13, 18]));
    }

    #[test]
    fn test_run_of_five_from_overlapping_windows() {
        let mut rows = latin_rows();
        rows[0] = vec![Some(Purple); 5];
        let board = Board::from_rows(rows);

        let matches = find_matches(&board);
        assert_eq!(matches, BTreeSet::from([0, 1, 2, 3, 4]));
    }

    #[test]
    fn test_intersecting_runs_union() {
        // Horizontal run in row 0 and vertical run in column 0 sharing (0,0)
        let mut rows = latin_rows();
        rows[0][0] = Some(Red);
        rows[0][1] = Some(Red);
        rows[0][2] = Some(Red);
        rows[1][0] = Some(Red);
        rows[2][0] = Some(Red);
        let board = Board::from_rows(rows);

        let matches = find_matches(&board);
        assert_eq!(matches, BTreeSet::from([0, 1, 2, 5, 10]));
    }

    #[test]
    fn test_empty_cells_never_match() {
        let mut rows = latin_rows();
        rows[4] = vec![None, None, None, None, None];
        let board = Board::from_rows(rows);

        assert!(find_matches(&board).is_empty());
    }

    #[test]
    fn test_every_match_member_is_part_of_a_run() {
        // A pair next to a different color must not match.
        let mut rows = latin_rows();
        rows[3] = vec![Some(Red), Some(Red), Some(Blue), Some(Red), Some(Red)];
        let board = Board::from_rows(rows);

        assert!(find_matches(&board).is_empty());
    }
}
