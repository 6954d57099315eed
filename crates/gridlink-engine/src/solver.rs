//! The greedy group-merge solver.
//!
//! [`Solver`] owns the group list and advances it one merge at a time:
//!
//! 1. measure [`group_distance`] for every unordered pair of groups;
//! 2. take the closest pair, lowest index pair first on ties;
//! 3. for every tied candidate pair, every tied point pair and every
//!    minimal path between them, synthesize `left ++ right ++ path`;
//! 4. keep the shortest distinct results, apply the retention policy, and
//!    put the merged group in the lower slot.
//!
//! The tie-break in step 2 depends on the group order left behind by
//! earlier merges. It is deterministic for a given input but carries no
//! meaning; only the reported length is stable across tie-breaks.
//!
//! # Ownership model
//!
//! `Solver` is [`Send`] but all mutation goes through `&mut self`, and
//! [`run()`](Solver::run) consumes it. There is no shared state between
//! solves.

use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};
use std::time::Instant;

use gridlink_core::{Candidate, Group, Point, SolveError, StationId, StepId};
use gridlink_space::{group_distance, minimal_paths, GroupDistance, SquareGrid};
use tracing::{debug, info, warn};

use crate::config::SolverConfig;
use crate::metrics::{MergeRecord, SolveMetrics};
use crate::observer::{NoopObserver, StepObserver};

// Compile-time assertion: Solver is Send.
const _: () = {
    #[allow(dead_code)]
    fn assert_send<T: Send>() {}
    #[allow(dead_code)]
    fn check() {
        assert_send::<Solver>();
    }
};

// ── Validation ──────────────────────────────────────────────────

/// Check solver input: at least one station, every station on the grid,
/// no two stations on the same cell.
///
/// Orthogonal adjacency between stations is allowed here; keeping
/// stations apart is the generator's policy, not a solver requirement.
pub fn validate_stations(grid: &SquareGrid, stations: &[Point]) -> Result<(), SolveError> {
    if stations.is_empty() {
        return Err(SolveError::EmptyInput);
    }
    let mut seen: HashMap<Point, usize> = HashMap::with_capacity(stations.len());
    for (index, &station) in stations.iter().enumerate() {
        if !grid.contains(station) {
            return Err(SolveError::OutOfBounds {
                station,
                index,
                grid_size: grid.size(),
            });
        }
        match seen.entry(station) {
            Entry::Occupied(first) => {
                return Err(SolveError::DuplicateStation {
                    station,
                    first: *first.get(),
                    second: index,
                });
            }
            Entry::Vacant(slot) => {
                slot.insert(index);
            }
        }
    }
    Ok(())
}

// ── Solution ────────────────────────────────────────────────────

/// The network reported by a finished solve.
#[derive(Clone, Debug)]
pub struct Solution {
    stations: Vec<Point>,
    network: Candidate,
    alternatives: usize,
    history: Vec<MergeRecord>,
    metrics: SolveMetrics,
}

impl Solution {
    /// Number of interior (non-station) cells in the network.
    pub fn length(&self) -> usize {
        self.network.interior_len(self.stations.len())
    }

    /// The selected network: stations plus interior cells, in merge
    /// history order.
    pub fn network(&self) -> &Candidate {
        &self.network
    }

    /// Interior cells only, in merge history order.
    pub fn interior(&self) -> impl Iterator<Item = &Point> + '_ {
        self.network
            .iter()
            .filter(move |p| !self.stations.contains(*p))
    }

    /// The stations that were connected, in input order.
    pub fn stations(&self) -> &[Point] {
        &self.stations
    }

    /// How many tied candidates the terminal group held.
    pub fn alternatives(&self) -> usize {
        self.alternatives
    }

    /// Every merge performed, in order.
    pub fn history(&self) -> &[MergeRecord] {
        &self.history
    }

    /// Aggregate metrics for the solve.
    pub fn metrics(&self) -> &SolveMetrics {
        &self.metrics
    }
}

// ── Solver ──────────────────────────────────────────────────────

/// Where a [`Solver`] is in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SolverState {
    /// Two or more groups remain; [`Solver::step`] will merge two.
    Active,
    /// One group covers every station.
    Terminal,
}

/// Greedy nearest-group merge solver over one validated station set.
///
/// # Example
///
/// ```
/// use gridlink_core::Point;
/// use gridlink_engine::{Solver, SolverConfig, NoopObserver};
/// use gridlink_space::SquareGrid;
///
/// let grid = SquareGrid::new(5).unwrap();
/// let stations = [Point::new(0, 0), Point::new(0, 2), Point::new(0, 4)];
/// let solver = Solver::new(SolverConfig::default(), grid, &stations).unwrap();
/// let solution = solver.run(&mut NoopObserver);
/// assert_eq!(solution.length(), 2);
/// assert_eq!(solution.history().len(), 2);
/// ```
#[derive(Debug)]
pub struct Solver {
    config: SolverConfig,
    grid: SquareGrid,
    stations: Vec<Point>,
    groups: Vec<Group>,
    next_step: StepId,
    history: Vec<MergeRecord>,
    metrics: SolveMetrics,
}

/// Candidates synthesized by one merge, before retention.
struct Synthesis {
    candidates: Vec<Candidate>,
    synthesized: usize,
    truncated: bool,
}

impl Solver {
    /// Validate `stations` against `grid` and set up one singleton group
    /// per station.
    ///
    /// # Errors
    ///
    /// Returns [`SolveError`] if the input is empty, off-grid or has a
    /// repeated station. No solver is constructed in that case.
    pub fn new(config: SolverConfig, grid: SquareGrid, stations: &[Point]) -> Result<Self, SolveError> {
        validate_stations(&grid, stations)?;
        let groups = stations
            .iter()
            .enumerate()
            .map(|(i, &s)| Group::singleton(StationId(i as u32), s))
            .collect();
        Ok(Self {
            config,
            grid,
            stations: stations.to_vec(),
            groups,
            next_step: StepId(1),
            history: Vec::with_capacity(stations.len().saturating_sub(1)),
            metrics: SolveMetrics::default(),
        })
    }

    /// Current lifecycle state.
    pub fn state(&self) -> SolverState {
        if self.groups.len() > 1 {
            SolverState::Active
        } else {
            SolverState::Terminal
        }
    }

    /// The current group list. Covered stations partition the input.
    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    /// The validated stations, in input order.
    pub fn stations(&self) -> &[Point] {
        &self.stations
    }

    /// The grid being solved on.
    pub fn grid(&self) -> &SquareGrid {
        &self.grid
    }

    /// Merges performed so far.
    pub fn history(&self) -> &[MergeRecord] {
        &self.history
    }

    /// Metrics accumulated so far.
    pub fn metrics(&self) -> &SolveMetrics {
        &self.metrics
    }

    /// Perform one merge.
    ///
    /// Returns the merge's record, or `None` if the solver is already
    /// [`Terminal`](SolverState::Terminal).
    pub fn step(&mut self) -> Option<MergeRecord> {
        let started = Instant::now();
        let (left, right, distance) = self.closest_pair()?;
        let step = self.next_step;

        let budget = self.config.retention.synthesis_budget();
        let synthesis = synthesize(&self.groups[left], &self.groups[right], &distance, budget);
        if synthesis.truncated {
            warn!(
                step = %step,
                budget = budget.unwrap_or(usize::MAX),
                policy = self.config.retention.name(),
                "synthesis budget reached, remaining tied paths skipped"
            );
        }

        let fallback = synthesis.candidates.first().cloned();
        let mut kept = self.config.retention.retain(step, synthesis.candidates);
        if kept.is_empty() {
            kept.extend(fallback);
        }

        let merged = Group::merged(&self.groups[left], &self.groups[right], kept);
        let retained = merged.alternatives();
        self.groups.remove(right);
        self.groups[left] = merged;

        let record = MergeRecord {
            step,
            left,
            right,
            distance: distance.distance,
            matches: distance.matches.len(),
            point_pairs: distance.pair_count(),
            synthesized: synthesis.synthesized,
            retained,
            truncated: synthesis.truncated,
            groups_remaining: self.groups.len(),
        };
        debug!(
            step = %record.step,
            left = record.left,
            right = record.right,
            distance = record.distance,
            synthesized = record.synthesized,
            retained = record.retained,
            groups_remaining = record.groups_remaining,
            "merged groups"
        );

        self.next_step = step.next();
        self.metrics.record(&record, started.elapsed().as_micros() as u64);
        self.history.push(record.clone());
        Some(record)
    }

    /// Merge until one group remains, reporting every merge to
    /// `observer`, then resolve the terminal group to a [`Solution`].
    pub fn run(mut self, observer: &mut dyn StepObserver) -> Solution {
        while let Some(record) = self.step() {
            observer.on_step(&record, &self.groups);
        }
        self.into_solution()
    }

    /// Merge until one group remains without observing, then resolve.
    pub fn finish(self) -> Solution {
        self.run(&mut NoopObserver)
    }

    /// The closest pair of groups, lowest indices first on ties.
    fn closest_pair(&self) -> Option<(usize, usize, GroupDistance)> {
        let mut best: Option<(usize, usize, GroupDistance)> = None;
        for i in 0..self.groups.len() {
            for j in i + 1..self.groups.len() {
                let gd = group_distance(&self.groups[i], &self.groups[j]);
                let closer = best
                    .as_ref()
                    .map_or(true, |(_, _, b)| gd.distance < b.distance);
                if closer {
                    best = Some((i, j, gd));
                }
            }
        }
        best
    }

    fn into_solution(mut self) -> Solution {
        let Some(group) = self.groups.pop() else {
            unreachable!("validated input always leaves one group");
        };
        let alternatives = group.alternatives();
        let chosen = self.config.selection.select(&group).min(alternatives - 1);
        let network = group.into_candidates().swap_remove(chosen);

        let solution = Solution {
            stations: self.stations,
            network,
            alternatives,
            history: self.history,
            metrics: self.metrics,
        };
        info!(
            stations = solution.stations.len(),
            steps = solution.metrics.steps,
            length = solution.length(),
            alternatives,
            selection = self.config.selection.name(),
            "solve complete"
        );
        solution
    }
}

/// Build every candidate joining `left` and `right` along a tied minimal
/// connection, keeping only the shortest distinct ones.
///
/// Joined candidates can come out shorter than `left + right + distance`
/// when a path re-uses cells either side already owns; those win.
fn synthesize(left: &Group, right: &Group, distance: &GroupDistance, budget: Option<usize>) -> Synthesis {
    let limit = budget.unwrap_or(usize::MAX).max(1);
    let mut candidates: Vec<Candidate> = Vec::new();
    let mut seen: HashSet<Vec<Point>> = HashSet::new();
    let mut shortest = usize::MAX;
    let mut synthesized = 0;
    let mut truncated = false;

    'matches: for m in &distance.matches {
        let a = &left.candidates()[m.left];
        let b = &right.candidates()[m.right];
        for pair in &m.pairs {
            for path in minimal_paths(pair.from, pair.to) {
                if synthesized == limit {
                    truncated = true;
                    break 'matches;
                }
                synthesized += 1;
                let joined = a.joined(b, &path);
                if joined.len() > shortest {
                    continue;
                }
                if joined.len() < shortest {
                    shortest = joined.len();
                    candidates.clear();
                    seen.clear();
                }
                if seen.insert(joined.canonical_key()) {
                    candidates.push(joined);
                }
            }
        }
    }

    Synthesis {
        candidates,
        synthesized,
        truncated,
    }
}

/// Solve `stations` on `grid` with the default configuration.
///
/// ```
/// use gridlink_core::Point;
/// use gridlink_space::SquareGrid;
///
/// let grid = SquareGrid::new(5).unwrap();
/// let solution = gridlink_engine::solve(&grid, &[Point::new(0, 0), Point::new(2, 2)]).unwrap();
/// assert_eq!(solution.length(), 3);
/// ```
pub fn solve(grid: &SquareGrid, stations: &[Point]) -> Result<Solution, SolveError> {
    Ok(Solver::new(SolverConfig::default(), *grid, stations)?.finish())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::{KeepAll, KeepFirst};
    use std::num::NonZeroUsize;

    fn p(r: i32, c: i32) -> Point {
        Point::new(r, c)
    }

    fn grid(size: u32) -> SquareGrid {
        SquareGrid::new(size).unwrap()
    }

    fn solver(size: u32, stations: &[Point]) -> Solver {
        Solver::new(SolverConfig::unbounded(), grid(size), stations).unwrap()
    }

    // ── Validation ──────────────────────────────────────────────

    #[test]
    fn empty_input_is_rejected() {
        assert_eq!(validate_stations(&grid(5), &[]), Err(SolveError::EmptyInput));
    }

    #[test]
    fn duplicate_station_is_rejected() {
        assert_eq!(
            validate_stations(&grid(5), &[p(0, 0), p(0, 0)]),
            Err(SolveError::DuplicateStation {
                station: p(0, 0),
                first: 0,
                second: 1,
            })
        );
    }

    #[test]
    fn out_of_bounds_station_is_rejected() {
        assert_eq!(
            validate_stations(&grid(5), &[p(5, 5)]),
            Err(SolveError::OutOfBounds {
                station: p(5, 5),
                index: 0,
                grid_size: 5,
            })
        );
        assert!(matches!(
            validate_stations(&grid(5), &[p(1, 1), p(-1, 0)]),
            Err(SolveError::OutOfBounds { index: 1, .. })
        ));
    }

    #[test]
    fn adjacent_stations_are_accepted() {
        assert!(validate_stations(&grid(5), &[p(0, 0), p(0, 1)]).is_ok());
    }

    // ── Stepping ────────────────────────────────────────────────

    #[test]
    fn single_station_is_terminal_immediately() {
        let mut s = solver(3, &[p(1, 1)]);
        assert_eq!(s.state(), SolverState::Terminal);
        assert!(s.step().is_none());
        let solution = s.finish();
        assert_eq!(solution.length(), 0);
        assert_eq!(solution.network().to_vec(), vec![p(1, 1)]);
        assert!(solution.history().is_empty());
    }

    #[test]
    fn step_merges_closest_pair_into_lower_slot() {
        let mut s = solver(7, &[p(0, 0), p(6, 6), p(0, 2)]);
        let record = s.step().unwrap();
        assert_eq!(record.step, StepId(1));
        assert_eq!((record.left, record.right), (0, 2));
        assert_eq!(record.distance, 1);
        assert_eq!(record.groups_remaining, 2);
        assert_eq!(s.groups()[0].stations(), &[StationId(0), StationId(2)]);
        assert_eq!(s.groups()[1].stations(), &[StationId(1)]);
        assert_eq!(s.state(), SolverState::Active);
    }

    #[test]
    fn ties_go_to_the_lowest_index_pair() {
        // (0,0)-(0,2) and (0,2)-(0,4) are both 1 apart.
        let mut s = solver(5, &[p(0, 0), p(0, 2), p(0, 4)]);
        let first = s.step().unwrap();
        assert_eq!((first.left, first.right), (0, 1));
        let second = s.step().unwrap();
        assert_eq!((second.left, second.right), (0, 1));
        assert_eq!(second.distance, 1);
        assert!(s.step().is_none());
        assert_eq!(s.state(), SolverState::Terminal);
    }

    #[test]
    fn diagonal_pair_keeps_all_six_paths() {
        let mut s = solver(5, &[p(0, 0), p(2, 2)]);
        let record = s.step().unwrap();
        assert_eq!(record.distance, 3);
        assert_eq!(record.synthesized, 6);
        assert_eq!(record.retained, 6);
        assert!(!record.truncated);
        let group = &s.groups()[0];
        assert!(group.is_well_formed());
        assert_eq!(group.candidate_len(), 5);
    }

    #[test]
    fn budget_truncates_synthesis() {
        let config = SolverConfig::default()
            .with_retention(KeepFirst::new(NonZeroUsize::new(2).unwrap()));
        let mut s = Solver::new(config, grid(5), &[p(0, 0), p(2, 2)]).unwrap();
        let record = s.step().unwrap();
        assert_eq!(record.synthesized, 2);
        assert_eq!(record.retained, 2);
        assert!(record.truncated);
        assert_eq!(s.metrics().truncated_steps, 1);
    }

    #[test]
    fn later_merge_extends_only_the_closest_tied_candidate() {
        // All three pairs are 3 apart. Of the six ways to join (0,0)-(2,2),
        // only the vertical-first one passes (2,0), one cell from (4,0).
        let mut s = solver(5, &[p(0, 0), p(2, 2), p(4, 0)]);
        assert_eq!(s.step().unwrap().retained, 6);
        let record = s.step().unwrap();
        assert_eq!(record.distance, 1);
        assert_eq!(record.matches, 1);
        assert_eq!(record.retained, 1);
        let group = &s.groups()[0];
        assert!(group.is_well_formed());
        assert_eq!(group.interior_len(), 4);
        assert!(group.candidates()[0].contains(&p(3, 0)));
    }

    #[test]
    fn shared_cells_are_counted_once() {
        let a = Group::merged(
            &Group::singleton(StationId(0), p(0, 0)),
            &Group::singleton(StationId(1), p(0, 2)),
            vec![[p(0, 0), p(0, 2), p(0, 1)].into_iter().collect()],
        );
        let b = Group::merged(
            &Group::singleton(StationId(2), p(2, 1)),
            &Group::singleton(StationId(3), p(1, 3)),
            vec![[p(2, 1), p(1, 3), p(1, 1), p(0, 1)].into_iter().collect()],
        );
        let distance = group_distance(&a, &b);
        assert_eq!(distance.distance, 0);

        let synthesis = synthesize(&a, &b, &distance, None);
        assert_eq!(synthesis.synthesized, distance.pair_count());
        assert_eq!(synthesis.candidates.len(), 1);
        assert_eq!(synthesis.candidates[0].len(), 6);
        assert!(!synthesis.truncated);
    }

    // ── Resolution ──────────────────────────────────────────────

    #[test]
    fn solution_reports_interior_cells() {
        let solution = solver(5, &[p(0, 0), p(0, 2)]).finish();
        assert_eq!(solution.length(), 1);
        assert_eq!(solution.interior().copied().collect::<Vec<_>>(), vec![p(0, 1)]);
        assert_eq!(solution.stations(), &[p(0, 0), p(0, 2)]);
        assert_eq!(solution.alternatives(), 1);
    }

    #[test]
    fn run_reports_every_step_to_the_observer() {
        let mut steps = Vec::new();
        let mut observer = |r: &MergeRecord, g: &[Group]| steps.push((r.step, g.len()));
        let solution = solver(7, &[p(0, 0), p(0, 6), p(6, 0), p(6, 6)]).run(&mut observer);
        assert_eq!(steps, vec![(StepId(1), 3), (StepId(2), 2), (StepId(3), 1)]);
        assert_eq!(solution.metrics().steps, 3);
    }

    #[test]
    fn solve_uses_default_config() {
        let solution = solve(&grid(5), &[p(0, 0), p(2, 2)]).unwrap();
        assert_eq!(solution.length(), 3);
        assert_eq!(solution.alternatives(), 6);
    }

    #[test]
    fn keep_all_and_default_agree_on_small_input() {
        let stations = [p(0, 0), p(2, 3), p(4, 1)];
        let all = Solver::new(SolverConfig::default().with_retention(KeepAll), grid(5), &stations)
            .unwrap()
            .finish();
        let capped = solve(&grid(5), &stations).unwrap();
        assert_eq!(all.length(), capped.length());
    }
}
