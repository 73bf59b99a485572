use polyomino_packing::{Region, Shape};

/// Install a logger for the test binary. Safe to call from every test.
#[allow(dead_code)]
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Build a shape from lines of `#` (filled) and `.` (empty).
///
/// # Panics
///  - If the art contains no `#`.
pub fn parse_shape(art: &str) -> Shape {
    let grid: Vec<Vec<bool>> = art
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| line.chars().map(|c| c == '#').collect())
        .collect();

    log::debug!("Parsing shape [{}] into grid {:?}.", art, grid);

    Shape::from_grid(&grid).expect("Shape art must contain at least one `#`.")
}

/// The six pieces of the worked example:
///
/// ```text
/// 0:    1:    2:    3:    4:    5:
/// ###   ###   .##   ##.   ###   ###
/// ##.   ##.   ###   ###   #..   .#.
/// ##.   .##   ##.   ##.   ###   ###
/// ```
#[allow(dead_code)]
pub fn sample_pieces() -> Vec<Shape> {
    [
        "###\n##.\n##.",
        "###\n##.\n.##",
        ".##\n###\n##.",
        "##.\n###\n##.",
        "###\n#..\n###",
        "###\n.#.\n###",
    ]
    .into_iter()
    .map(parse_shape)
    .collect()
}

/// The regions of the worked example, `4x4: 0 0 0 0 2 0`,
/// `12x5: 1 0 1 0 2 2` and `12x5: 1 0 1 0 3 2`. Sizes there are width by
/// height, so `12x5` is 5 rows of 12 columns. The first two are feasible, the
/// third is not.
#[allow(dead_code)]
pub fn sample_regions() -> Vec<Region> {
    vec![
        Region::with_counts(4, 4, [0, 0, 0, 0, 2, 0]),
        Region::with_counts(5, 12, [1, 0, 1, 0, 2, 2]),
        Region::with_counts(5, 12, [1, 0, 1, 0, 3, 2]),
    ]
}
