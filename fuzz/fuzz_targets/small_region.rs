#![no_main]

use libfuzzer_sys::fuzz_target;
use polyomino_packing::{Cell, Region, Shape, Solver, SolverConfig};

#[derive(Debug)]
struct SmallRegionInput {
    pieces: Vec<Shape>,
    region: Region,
}

impl<'a> arbitrary::Arbitrary<'a> for SmallRegionInput {
    fn arbitrary(u: &mut arbitrary::Unstructured<'a>) -> arbitrary::Result<Self> {
        let num_pieces = u.int_in_range(1..=3)?;
        let mut pieces = Vec::with_capacity(num_pieces);
        while pieces.len() < num_pieces {
            // Each bit of the mask fills one cell of a 3 × 3 grid.
            let mask = u.arbitrary::<u16>()? & 0x1ff;
            let cells = (0..9)
                .filter(|bit| mask & (1 << bit) != 0)
                .map(|bit| Cell::new(bit / 3, bit % 3));
            if let Ok(shape) = Shape::new(cells) {
                pieces.push(shape);
            }
        }

        let rows = u.int_in_range(1..=5)?;
        let cols = u.int_in_range(1..=5)?;
        let mut region = Region::new(rows, cols);
        for piece in 0..num_pieces {
            region = region.require(piece, u.int_in_range(0..=3)?);
        }

        Ok(SmallRegionInput { pieces, region })
    }
}

fuzz_target!(|data: SmallRegionInput| {
    let configs = [
        SolverConfig::default(),
        SolverConfig::default().with_memoize(false),
        SolverConfig::default().with_prune_small_components(false),
        SolverConfig::default()
            .with_memoize(false)
            .with_prune_small_components(false),
    ];

    let answers: Vec<bool> = configs
        .iter()
        .map(|config| {
            Solver::new(&data.pieces)
                .with_config(*config)
                .is_feasible(&data.region)
                .unwrap()
        })
        .collect();

    assert!(
        answers.iter().all(|&answer| answer == answers[0]),
        "{data:?} {answers:?}"
    );
});
