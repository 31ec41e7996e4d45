// Integration tests for the grid model and the path-search engine

use mazetty::grid::{Coord, Grid, LayoutError, DEMO_LAYOUT};
use mazetty::search::{Outcome, Step, StepKind, Trace, VisitSet, Walker};

use rustc_hash::FxHashSet;

fn demo_grid() -> Grid {
    Grid::parse(DEMO_LAYOUT).expect("demo layout must parse")
}

/// A maze whose goal sits behind an unbroken wall column.
const WALLED_OFF: &str = "\
S.#G
..#.
..#.
";

#[test]
fn test_demo_scenario_exact_step_sequence() {
    // Hand-run of the algorithm over the demo maze (blocked cells
    // (0,2) (0,3) (2,0) (2,2) (2,3) (3,0), start (0,0), goal (3,3),
    // neighbor order right/down/left/up).
    let expected: Vec<(StepKind, (usize, usize))> = vec![
        (StepKind::Advance, (0, 0)),
        (StepKind::Advance, (0, 1)),
        (StepKind::Advance, (1, 1)),
        (StepKind::Advance, (1, 2)),
        (StepKind::Advance, (1, 3)),
        (StepKind::DeadEnd, (1, 3)),
        (StepKind::Backtrack, (1, 3)),
        (StepKind::DeadEnd, (1, 2)),
        (StepKind::Backtrack, (1, 2)),
        (StepKind::Advance, (2, 1)),
        (StepKind::Advance, (3, 1)),
        (StepKind::Advance, (3, 2)),
        (StepKind::Advance, (3, 3)),
        (StepKind::GoalReached, (3, 3)),
    ];

    let trace = Trace::run(&demo_grid());

    assert_eq!(trace.outcome, Outcome::Solved);
    assert_eq!(trace.steps.len(), expected.len());
    for (i, (step, (kind, (row, col)))) in trace.steps.iter().zip(expected).enumerate() {
        assert_eq!(step.seq, i, "seq numbers must be dense from 0");
        assert_eq!(step.kind, kind, "step {} kind", i);
        assert_eq!(step.coord, Coord::new(row, col), "step {} coord", i);
    }

    let expected_path: Vec<Coord> = [(0, 0), (0, 1), (1, 1), (2, 1), (3, 1), (3, 2), (3, 3)]
        .iter()
        .map(|&(r, c)| Coord::new(r, c))
        .collect();
    assert_eq!(trace.path, expected_path);
}

#[test]
fn test_identical_grids_yield_identical_sequences() {
    let grid = demo_grid();
    let first = Trace::run(&grid);
    let second = Trace::run(&grid);
    assert_eq!(first.steps, second.steps);
    assert_eq!(first.path, second.path);
}

#[test]
fn test_walled_off_goal_exhausts() {
    let grid = Grid::parse(WALLED_OFF).expect("layout must parse");
    let trace = Trace::run(&grid);

    assert_eq!(trace.outcome, Outcome::Exhausted);
    assert!(trace.path.is_empty());

    let goal_steps = trace
        .steps
        .iter()
        .filter(|s| s.kind == StepKind::GoalReached)
        .count();
    assert_eq!(goal_steps, 0);

    // The terminal step is a single exhausted record carrying the start
    let last = trace.steps.last().expect("trace cannot be empty");
    assert_eq!(last.kind, StepKind::Exhausted);
    assert_eq!(last.coord, grid.start());
    let exhausted_steps = trace
        .steps
        .iter()
        .filter(|s| s.kind == StepKind::Exhausted)
        .count();
    assert_eq!(exhausted_steps, 1);

    // Everything entered was undone, the start included
    let advances = trace
        .steps
        .iter()
        .filter(|s| s.kind == StepKind::Advance)
        .count();
    let backtracks = trace
        .steps
        .iter()
        .filter(|s| s.kind == StepKind::Backtrack)
        .count();
    assert_eq!(advances, backtracks);
    assert!(trace
        .steps
        .iter()
        .any(|s| s.kind == StepKind::Backtrack && s.coord == grid.start()));
}

#[test]
fn test_advance_backtrack_pairing() {
    let trace = Trace::run(&demo_grid());

    // A cell currently on the path is never re-entered, and only path
    // members are ever backtracked
    let mut on_path = FxHashSet::default();
    for step in &trace.steps {
        match step.kind {
            StepKind::Advance => assert!(on_path.insert(step.coord), "re-entered {}", step.coord),
            StepKind::Backtrack => assert!(on_path.remove(&step.coord)),
            _ => {}
        }
    }

    // Per coordinate: every advance is matched by a backtrack, except the
    // one advance that put a final-path cell in place
    let coords: FxHashSet<Coord> = trace.steps.iter().map(|s| s.coord).collect();
    for c in coords {
        let advances = trace
            .steps
            .iter()
            .filter(|s| s.kind == StepKind::Advance && s.coord == c)
            .count();
        let backtracks = trace
            .steps
            .iter()
            .filter(|s| s.kind == StepKind::Backtrack && s.coord == c)
            .count();
        if trace.path.contains(&c) {
            assert_eq!(advances, backtracks + 1, "path cell {}", c);
        } else {
            assert_eq!(advances, backtracks, "abandoned cell {}", c);
        }
    }

    // Dead-end and backtrack records come in adjacent pairs
    for window in trace.steps.windows(2) {
        if window[0].kind == StepKind::DeadEnd {
            assert_eq!(window[1].kind, StepKind::Backtrack);
            assert_eq!(window[0].coord, window[1].coord);
        }
    }
}

#[test]
fn test_visit_set_valid_for_every_prefix() {
    let grid = demo_grid();
    let trace = Trace::run(&grid);

    // Reconstruct the membership set step by step; it must stay a stack
    // of passable in-bounds cells at all times
    let mut visited = VisitSet::new();
    assert!(visited.is_empty());
    for step in &trace.steps {
        match step.kind {
            StepKind::Advance => {
                assert!(grid.is_passable(step.coord));
                assert!(!visited.contains(step.coord), "re-entered {}", step.coord);
                visited.enter(step.coord);
            }
            StepKind::Backtrack => {
                assert_eq!(visited.leave(), Some(step.coord), "non-stack backtrack order");
            }
            _ => {}
        }
        for &c in visited.path() {
            assert!(grid.is_passable(c));
        }
    }

    // At success the membership set is exactly the solution path
    assert_eq!(visited.path(), &trace.path[..]);
    assert_eq!(visited.len(), trace.path.len());
    assert!(!visited.is_empty());
}

#[test]
fn test_walker_is_lazy_and_restartable_by_construction() {
    let grid = demo_grid();

    let prefix: Vec<Step> = Walker::new(&grid).take(5).collect();
    let full: Vec<Step> = Walker::new(&grid).collect();
    assert_eq!(&full[..5], &prefix[..]);

    // Fused after the terminal step
    let mut walker = Walker::new(&grid);
    let count = walker.by_ref().count();
    assert_eq!(count, full.len());
    assert_eq!(walker.next(), None);
    assert_eq!(walker.next(), None);
}

#[test]
fn test_start_equals_goal() {
    let c = Coord::new(0, 0);
    let grid = Grid::new(1, 2, &[], c, c).expect("grid must build");
    let trace = Trace::run(&grid);

    let kinds: Vec<StepKind> = trace.steps.iter().map(|s| s.kind).collect();
    assert_eq!(kinds, vec![StepKind::Advance, StepKind::GoalReached]);
    assert_eq!(trace.path, vec![c]);
    assert_eq!(trace.outcome, Outcome::Solved);
}

#[test]
fn test_neighbor_priority_order() {
    let grid = Grid::new(3, 3, &[], Coord::new(0, 0), Coord::new(2, 2)).expect("grid must build");
    let neighbors: Vec<Coord> = grid.neighbors(Coord::new(1, 1)).collect();
    assert_eq!(
        neighbors,
        vec![
            Coord::new(1, 2), // right
            Coord::new(2, 1), // down
            Coord::new(1, 0), // left
            Coord::new(0, 1), // up
        ]
    );

    // Corner cells lose the out-of-bounds moves but keep the order
    let corner: Vec<Coord> = grid.neighbors(Coord::new(0, 0)).collect();
    assert_eq!(corner, vec![Coord::new(0, 1), Coord::new(1, 0)]);
}

#[test]
fn test_grid_queries_never_panic_out_of_bounds() {
    let grid = demo_grid();
    let far = Coord::new(100, 100);
    assert!(!grid.in_bounds(far));
    assert!(!grid.is_passable(far));
    assert_eq!(grid.neighbors(far).count(), 0);
}

#[test]
fn test_layout_parse_errors() {
    match Grid::parse("") {
        Err(LayoutError::EmptyLayout) => {}
        other => panic!("expected empty layout error, got {:?}", other),
    }

    match Grid::parse("S.\n...\nG.") {
        Err(LayoutError::RaggedRow { row: 1, expected: 2, got: 3 }) => {}
        other => panic!("expected ragged row error, got {:?}", other),
    }

    match Grid::parse("S?\n.G") {
        Err(LayoutError::UnknownCell { ch: '?', .. }) => {}
        other => panic!("expected unknown cell error, got {:?}", other),
    }

    match Grid::parse("..\n.G") {
        Err(LayoutError::MissingStart) => {}
        other => panic!("expected missing start error, got {:?}", other),
    }

    match Grid::parse("S.\n..") {
        Err(LayoutError::MissingGoal) => {}
        other => panic!("expected missing goal error, got {:?}", other),
    }

    match Grid::parse("SS\n.G") {
        Err(LayoutError::DuplicateMarker { ch: 'S', .. }) => {}
        other => panic!("expected duplicate marker error, got {:?}", other),
    }
}

#[test]
fn test_grid_construction_errors() {
    let start = Coord::new(0, 0);
    let goal = Coord::new(1, 1);

    match Grid::new(0, 4, &[], start, goal) {
        Err(LayoutError::EmptyLayout) => {}
        other => panic!("expected empty layout error, got {:?}", other),
    }

    match Grid::new(2, 2, &[Coord::new(5, 5)], start, goal) {
        Err(LayoutError::CellOutOfBounds { .. }) => {}
        other => panic!("expected out-of-bounds cell error, got {:?}", other),
    }

    match Grid::new(2, 2, &[], start, Coord::new(9, 9)) {
        Err(LayoutError::EndpointOutOfBounds { name: "goal", .. }) => {}
        other => panic!("expected endpoint bounds error, got {:?}", other),
    }

    match Grid::new(2, 2, &[start], start, goal) {
        Err(LayoutError::EndpointBlocked { name: "start", .. }) => {}
        other => panic!("expected blocked endpoint error, got {:?}", other),
    }
}
