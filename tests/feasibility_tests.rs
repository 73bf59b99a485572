mod common;

use common::{init_logging, parse_shape};
use polyomino_packing::{
    is_feasible, placement, PieceType, Region, Shape, ShapeTransform, Solver, SolverConfig,
};
use std::collections::HashSet;

fn square() -> Shape {
    parse_shape("##\n##")
}

fn l_tromino() -> Shape {
    parse_shape("##\n#.")
}

/// All twelve free pentominoes.
fn pentominoes() -> Vec<Shape> {
    [
        "#####",
        "##\n##\n#.",
        ".##\n##.\n.#.",
        "#.\n#.\n#.\n##",
        "##..\n.###",
        "###\n.#.\n.#.",
        "#.#\n###",
        "#..\n#..\n###",
        "#..\n##.\n.##",
        ".#.\n###\n.#.",
        ".#\n##\n.#\n.#",
        "##.\n.#.\n.##",
    ]
    .into_iter()
    .map(parse_shape)
    .collect()
}

#[test]
fn orientations_are_bounded_canonical_and_closed() {
    for shape in pentominoes() {
        let orientations = shape.orientations();
        assert!((1..=8).contains(&orientations.len()), "{shape:?}");

        let all: HashSet<_> = orientations.iter().cloned().collect();
        for orientation in &orientations {
            let bounds = orientation.bounds();
            assert_eq!((bounds.min_row, bounds.min_col), (0, 0));

            let again: HashSet<_> = orientation.orientations().into_iter().collect();
            assert!(again.is_subset(&all));
        }
    }
}

#[test]
fn pentominoes_have_63_fixed_orientations() {
    let total: usize = pentominoes()
        .iter()
        .map(|shape| shape.orientations().len())
        .sum();
    assert_eq!(total, 63);
}

#[test]
fn four_squares_tile_a_four_by_four_region() {
    init_logging();

    let pieces = [square()];
    assert!(is_feasible(&Region::with_counts(4, 4, [4]), &pieces).unwrap());
}

#[test]
fn five_squares_exceed_a_four_by_four_region() {
    let pieces = [square()];
    assert!(!is_feasible(&Region::with_counts(4, 4, [5]), &pieces).unwrap());
}

#[test]
fn l_tromino_does_not_fit_a_single_row() {
    let pieces = [l_tromino()];
    let piece_type = PieceType::new(&pieces[0], ShapeTransform::FullSymmetry);

    assert!(placement::enumerate_piece(&piece_type, 1, 4).is_empty());
    assert!(!is_feasible(&Region::with_counts(1, 4, [1]), &pieces).unwrap());
}

#[test]
fn oversized_pieces_make_any_nonzero_requirement_infeasible() {
    let pieces = [parse_shape("#####"), square()];
    let piece_type = PieceType::new(&pieces[0], ShapeTransform::FullSymmetry);

    for (rows, cols) in [(4, 4), (3, 4), (2, 3)] {
        assert!(placement::enumerate_piece(&piece_type, rows, cols).is_empty());
        assert!(!is_feasible(&Region::with_counts(rows, cols, [1, 0]), &pieces).unwrap());
        assert!(is_feasible(&Region::with_counts(rows, cols, [0, 1]), &pieces).unwrap());
    }
}

#[test]
fn asymmetric_and_symmetric_pentominoes_share_a_board() {
    init_logging();

    let f = parse_shape(".##\n##.\n.#.");
    let plus = parse_shape(".#.\n###\n.#.");
    let pieces = [f, plus];
    let solver = Solver::new(&pieces);
    let region = Region::with_counts(8, 8, [1, 1]);

    let region_pieces = solver.region_pieces(&region).unwrap();
    assert_eq!(region_pieces.len(), 2);
    assert_eq!(region_pieces[0].piece_type.orientations().len(), 8);
    assert_eq!(region_pieces[0].placements.len(), 8 * 36);
    assert_eq!(region_pieces[1].piece_type.orientations().len(), 1);
    assert_eq!(region_pieces[1].placements.len(), 36);

    assert!(solver.is_feasible(&region).unwrap());
}

#[test]
fn repeated_evaluation_gives_the_same_answer() {
    let pieces = [l_tromino(), square()];
    let solver = Solver::new(&pieces);
    let regions = [
        Region::with_counts(3, 3, [3, 0]),
        Region::with_counts(3, 4, [2, 1]),
        Region::with_counts(4, 4, [4, 1]),
    ];

    for region in &regions {
        let first = solver.evaluate(region).unwrap();
        for _ in 0..3 {
            assert_eq!(solver.evaluate(region).unwrap(), first);
        }
    }
}

#[test]
fn reducing_requirements_keeps_feasibility() {
    let pieces = [l_tromino(), square(), parse_shape("###")];
    let solver = Solver::new(&pieces);
    let full = [2, 2, 2];
    let region = Region::with_counts(4, 5, full);
    assert!(solver.is_feasible(&region).unwrap());

    for a in 0..=full[0] {
        for b in 0..=full[1] {
            for c in 0..=full[2] {
                let reduced = Region::with_counts(4, 5, [a, b, c]);
                assert!(solver.is_feasible(&reduced).unwrap(), "{a} {b} {c}");
            }
        }
    }
}

#[test]
fn memoization_and_pruning_do_not_change_answers() {
    init_logging();

    let pieces = [l_tromino(), square(), parse_shape("###"), parse_shape("#.\n##\n.#")];
    let regions = [
        Region::with_counts(3, 3, [3, 0, 0, 0]),
        Region::with_counts(3, 3, [1, 1, 0, 0]),
        Region::with_counts(3, 3, [0, 2, 0, 0]),
        Region::with_counts(4, 4, [4, 1, 0, 0]),
        Region::with_counts(4, 4, [0, 0, 1, 3]),
        Region::with_counts(3, 5, [1, 0, 2, 1]),
        Region::with_counts(2, 6, [0, 0, 0, 3]),
        Region::with_counts(5, 2, [2, 0, 0, 1]),
    ];

    let configs = [
        SolverConfig::default(),
        SolverConfig::default().with_memoize(false),
        SolverConfig::default().with_prune_small_components(false),
        SolverConfig::default()
            .with_memoize(false)
            .with_prune_small_components(false),
    ];

    for region in &regions {
        let reports: Vec<_> = configs
            .iter()
            .map(|config| {
                Solver::new(&pieces)
                    .with_config(*config)
                    .evaluate(region)
                    .unwrap()
            })
            .collect();

        let answer = reports[0].feasible;
        assert!(reports.iter().all(|r| r.feasible == answer), "{region:?}");
        assert!(reports[0].stats.nodes_expanded <= reports[1].stats.nodes_expanded);
        assert!(reports[2].stats.nodes_expanded <= reports[3].stats.nodes_expanded);
    }
}

#[test]
fn memoization_explores_fewer_nodes() {
    let pieces = [l_tromino()];
    let region = Region::with_counts(3, 3, [3]);
    let base = SolverConfig::default().with_prune_small_components(false);

    let with_memo = Solver::new(&pieces)
        .with_config(base)
        .evaluate(&region)
        .unwrap();
    let without_memo = Solver::new(&pieces)
        .with_config(base.with_memoize(false))
        .evaluate(&region)
        .unwrap();

    assert!(!with_memo.feasible);
    assert!(!without_memo.feasible);
    assert!(with_memo.stats.memo_hits > 0);
    assert!(with_memo.stats.nodes_expanded < without_memo.stats.nodes_expanded);
}

#[test]
fn pentomino_rectangle_packings() {
    init_logging();

    let pieces = pentominoes();
    let solver = Solver::new(&pieces);

    let five_by_five = |names: [usize; 5]| {
        let mut counts = [0; 12];
        for index in names {
            counts[index] = 1;
        }
        Region::with_counts(5, 5, counts)
    };

    // I, P, L, T and V fill a 5 × 5 square; L, N, P, U and Y do not.
    assert!(solver.is_feasible(&five_by_five([0, 1, 3, 5, 7])).unwrap());
    assert!(!solver.is_feasible(&five_by_five([3, 4, 1, 6, 10])).unwrap());

    // The X pentomino cannot sit in a two-row strip, however long.
    let mut counts = [0; 12];
    counts[9] = 1;
    assert!(!solver
        .is_feasible(&Region::with_counts(2, 10, counts))
        .unwrap());
}
