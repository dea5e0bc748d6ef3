use battleships::{place_fleet, Grid, ShipType, MAX_PLACEMENT_ATTEMPTS, SHIPS};
use proptest::prelude::*;
use rand::{rngs::SmallRng, SeedableRng};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn placement_never_overlaps(seed in any::<u64>()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut grid = Grid::new(10, 10);
        let runs = place_fleet(&mut grid, &mut rng, &SHIPS, MAX_PLACEMENT_ATTEMPTS).unwrap();
        let expected: usize = SHIPS.iter().map(|s| s.length()).sum();
        prop_assert_eq!(grid.occupied_count(), expected);
        for run in &runs {
            prop_assert!(run.fits(10, 10));
        }
    }

    #[test]
    fn runs_are_contiguous_and_axis_aligned(
        seed in any::<u64>(),
        width in 5usize..=12,
        height in 5usize..=12,
    ) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut grid = Grid::new(width, height);
        let fleet = [ShipType::new("Cruiser", 3), ShipType::new("Destroyer", 2)];
        let runs = place_fleet(&mut grid, &mut rng, &fleet, MAX_PLACEMENT_ATTEMPTS).unwrap();
        for run in runs {
            let cells: Vec<_> = run.cells().collect();
            let same_row = cells.iter().all(|&(_, y)| y == cells[0].1);
            let same_col = cells.iter().all(|&(x, _)| x == cells[0].0);
            prop_assert!(same_row || same_col);
            for pair in cells.windows(2) {
                let step = (pair[1].0 - pair[0].0) + (pair[1].1 - pair[0].1);
                prop_assert_eq!(step, 1);
            }
            for (x, y) in cells {
                prop_assert!(grid.cell(x, y).unwrap().occupied());
            }
        }
    }
}
