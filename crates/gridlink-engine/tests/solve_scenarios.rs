//! End-to-end solves over the fixture layouts.

use gridlink_core::{Point, SolveError, StepId};
use gridlink_engine::{
    solve, ChannelObserver, KeepAll, SeededSample, Solver, SolverConfig, SolverState,
};
use gridlink_space::SquareGrid;
use gridlink_test_utils::fixtures;
use gridlink_test_utils::{assert_connected, assert_groups_well_formed, assert_partition, RecordingObserver};
use std::num::NonZeroUsize;

#[test]
fn one_gap_needs_one_cell() {
    let (grid, stations) = fixtures::one_gap();
    let solution = solve(&grid, &stations).unwrap();
    assert_eq!(solution.length(), 1);
    assert_eq!(solution.interior().copied().collect::<Vec<_>>(), vec![Point::new(0, 1)]);
    assert_eq!(solution.alternatives(), 1);
}

#[test]
fn diagonal_keeps_all_six_routes() {
    let (grid, stations) = fixtures::diagonal();
    let solution = solve(&grid, &stations).unwrap();
    assert_eq!(solution.length(), 3);
    assert_eq!(solution.alternatives(), 6);
    assert_connected(solution.network().iter(), &stations);
}

#[test]
fn three_in_a_row_fills_both_gaps() {
    let (grid, stations) = fixtures::three_in_a_row();
    let solution = solve(&grid, &stations).unwrap();
    assert_eq!(solution.length(), 2);
    assert_eq!(solution.history().len(), 2);
    let mut interior: Vec<Point> = solution.interior().copied().collect();
    interior.sort();
    assert_eq!(interior, vec![Point::new(0, 1), Point::new(0, 3)]);
}

#[test]
fn corners_of_a_five_grid() {
    let (grid, stations) = fixtures::corners(5);
    let solution = solve(&grid, &stations).unwrap();
    assert_eq!(solution.length(), 9);
    assert_eq!(solution.history().iter().map(|r| r.distance).sum::<u32>(), 9);
    assert_connected(solution.network().iter(), &stations);
}

#[test]
fn plus_joins_every_arm_to_the_centre() {
    let (grid, stations) = fixtures::plus(2);
    let solution = solve(&grid, &stations).unwrap();
    assert_eq!(solution.length(), 4);
    assert!(solution.history().iter().all(|r| r.distance == 1));
}

#[test]
fn single_station_is_already_terminal() {
    let grid = SquareGrid::new(3).unwrap();
    let solver = Solver::new(SolverConfig::default(), grid, &[Point::new(1, 1)]).unwrap();
    assert_eq!(solver.state(), SolverState::Terminal);
    let solution = solver.finish();
    assert_eq!(solution.length(), 0);
    assert!(solution.history().is_empty());
    assert_eq!(solution.network().to_vec(), vec![Point::new(1, 1)]);
}

#[test]
fn adjacent_stations_need_no_cells() {
    let grid = SquareGrid::new(3).unwrap();
    let solution = solve(&grid, &[Point::new(0, 0), Point::new(0, 1)]).unwrap();
    assert_eq!(solution.length(), 0);
    assert_eq!(solution.history()[0].distance, 0);
    assert_eq!(solution.network().len(), 2);
}

#[test]
fn invalid_input_is_rejected() {
    let grid = SquareGrid::new(4).unwrap();
    assert_eq!(solve(&grid, &[]).unwrap_err(), SolveError::EmptyInput);
    assert!(matches!(
        solve(&grid, &[Point::new(0, 0), Point::new(4, 0)]),
        Err(SolveError::OutOfBounds { index: 1, .. })
    ));
    assert!(matches!(
        solve(&grid, &[Point::new(1, 1), Point::new(0, 0), Point::new(1, 1)]),
        Err(SolveError::DuplicateStation { first: 0, second: 2, .. })
    ));
}

#[test]
fn stepping_matches_running() {
    let (grid, stations) = fixtures::corners(6);
    let mut solver = Solver::new(SolverConfig::default(), grid, &stations).unwrap();
    let mut steps = Vec::new();
    while solver.state() == SolverState::Active {
        let record = solver.step().unwrap();
        assert_groups_well_formed(solver.groups());
        assert_partition(solver.groups(), &stations);
        steps.push(record);
    }
    assert!(solver.step().is_none());
    let stepped = solver.finish();

    let ran = solve(&grid, &stations).unwrap();
    assert_eq!(stepped.length(), ran.length());
    assert_eq!(stepped.history(), ran.history());
    assert_eq!(steps, ran.history());
}

#[test]
fn recording_observer_sees_every_merge() {
    let (grid, stations) = fixtures::plus(3);
    let mut observer = RecordingObserver::new();
    let solution = Solver::new(SolverConfig::default(), grid, &stations)
        .unwrap()
        .run(&mut observer);

    assert_eq!(observer.snapshots.len(), stations.len() - 1);
    for (i, snapshot) in observer.snapshots.iter().enumerate() {
        assert_eq!(snapshot.record.step, StepId(i as u32 + 1));
        assert_eq!(snapshot.groups.len(), stations.len() - 1 - i);
        assert_groups_well_formed(&snapshot.groups);
        assert_partition(&snapshot.groups, &stations);
    }
    let records: Vec<_> = observer.records().into_iter().cloned().collect();
    assert_eq!(records, solution.history());
}

#[test]
fn channel_observer_streams_snapshots() {
    let (grid, stations) = fixtures::corners(5);
    let (mut observer, rx) = ChannelObserver::unbounded();
    let solution = Solver::new(SolverConfig::default(), grid, &stations)
        .unwrap()
        .run(&mut observer);
    assert_eq!(observer.dropped(), 0);

    let snapshots: Vec<_> = rx.try_iter().collect();
    assert_eq!(snapshots.len(), 3);
    let last = snapshots.last().unwrap();
    assert_eq!(last.groups.len(), 1);
    assert!(last.groups[0].candidates().contains(solution.network()));
}

#[test]
fn bounded_channel_drops_late_snapshots() {
    let (grid, stations) = fixtures::corners(5);
    let (mut observer, rx) = ChannelObserver::bounded(1);
    Solver::new(SolverConfig::default(), grid, &stations)
        .unwrap()
        .run(&mut observer);
    assert_eq!(observer.dropped(), 2);
    assert_eq!(rx.try_iter().count(), 1);
}

#[test]
fn retention_policies_agree_on_length() {
    let (grid, stations) = fixtures::corners(7);
    let keep_all = Solver::new(SolverConfig::default().with_retention(KeepAll), grid, &stations)
        .unwrap()
        .finish();
    let limit = NonZeroUsize::new(2).unwrap();
    let sampled = Solver::new(
        SolverConfig::default().with_retention(SeededSample::new(limit, 7)),
        grid,
        &stations,
    )
    .unwrap()
    .finish();
    assert_eq!(keep_all.length(), sampled.length());
    assert!(sampled.alternatives() <= 2);
}

#[test]
fn seeded_sample_is_reproducible() {
    let (grid, stations) = fixtures::corners(8);
    let limit = NonZeroUsize::new(3).unwrap();
    let run = || {
        Solver::new(
            SolverConfig::default().with_retention(SeededSample::new(limit, 42)),
            grid,
            &stations,
        )
        .unwrap()
        .finish()
    };
    let a = run();
    let b = run();
    assert_eq!(a.network(), b.network());
    assert_eq!(a.history(), b.history());
}
