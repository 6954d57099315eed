//! Grid and oracle compliance test helpers.
//!
//! These functions check the invariants the merge engine relies on.
//! Reused by the grid, oracle and path test modules.

use crate::grid::SquareGrid;
use crate::oracle::point_distance;
use crate::paths::{minimal_paths, path_count};
use indexmap::IndexSet;

/// Assert that `point_distance(a, b) == point_distance(b, a)` for all pairs.
pub fn assert_distance_symmetric(grid: &SquareGrid) {
    let cells = grid.canonical_ordering();
    for &a in &cells {
        for &b in &cells {
            let dab = point_distance(a, b);
            let dba = point_distance(b, a);
            assert_eq!(dab, dba, "point_distance({a}, {b}) = {dab} != {dba}");
        }
    }
}

/// Assert that `b in neighbours(a)` implies `a in neighbours(b)`.
pub fn assert_neighbours_symmetric(grid: &SquareGrid) {
    for cell in grid.canonical_ordering() {
        for nb in grid.neighbours(cell) {
            assert!(
                grid.neighbours(nb).contains(&cell),
                "neighbour symmetry violated: {nb} in N({cell}) but {cell} not in N({nb})"
            );
        }
    }
}

/// Assert that `canonical_ordering` returns exactly `cell_count` unique
/// cells, each ranked at its own position.
pub fn assert_canonical_ordering_complete(grid: &SquareGrid) {
    let ordering = grid.canonical_ordering();
    assert_eq!(
        ordering.len(),
        grid.cell_count(),
        "canonical_ordering length ({}) != cell_count ({})",
        ordering.len(),
        grid.cell_count()
    );
    let unique: IndexSet<_> = ordering.iter().collect();
    assert_eq!(unique.len(), grid.cell_count(), "canonical_ordering has duplicates");
    for (i, &cell) in ordering.iter().enumerate() {
        assert_eq!(grid.canonical_rank(cell), Some(i), "rank of {cell}");
    }
}

/// Assert that every enumerated path between every pair of cells is an
/// in-bounds chain of unit steps from one endpoint to the other, and that
/// the path count matches the binomial.
pub fn assert_paths_minimal(grid: &SquareGrid) {
    let cells = grid.canonical_ordering();
    for &a in &cells {
        for &b in &cells {
            let mut seen = 0u64;
            for path in minimal_paths(a, b) {
                seen += 1;
                assert_eq!(path.len() as u32, point_distance(a, b), "length of {a}->{b}");
                let mut prev = a;
                for &cell in &path {
                    assert!(grid.contains(cell), "{cell} off-grid on {a}->{b}");
                    assert!(
                        prev.is_orthogonal_neighbour(cell),
                        "{prev} -> {cell} is not a unit step on {a}->{b}"
                    );
                    prev = cell;
                }
                if a != b {
                    assert!(prev.is_orthogonal_neighbour(b), "{a}->{b} does not end next to {b}");
                }
            }
            assert_eq!(seen, path_count(a, b), "path count for {a}->{b}");
        }
    }
}

/// Run all compliance checks on a grid.
pub fn run_full_compliance(grid: &SquareGrid) {
    assert_distance_symmetric(grid);
    assert_neighbours_symmetric(grid);
    assert_canonical_ordering_complete(grid);
    assert_paths_minimal(grid);
}
