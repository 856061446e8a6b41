use ndarray::Array2;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use super::*;
use crate::types::nd;

/// Uniform rejection-sampling mine placement with a cleared zone around the
/// board center.
///
/// A cell is eligible only when both its column distance and its row distance
/// from the center exceed one, so mines land in the four quadrants outside
/// the three-wide cross through the center. Feasibility is checked up front:
/// asking for more mines than there are eligible cells is a construction
/// error rather than an endless resampling loop.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RandomMinefieldGenerator {
    seed: u64,
}

impl RandomMinefieldGenerator {
    pub const fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl MinefieldGenerator for RandomMinefieldGenerator {
    fn generate(self, config: BoardConfig) -> Result<Array2<i8>> {
        let available = config.eligible_mine_cells();
        if config.mines > available {
            log::warn!(
                "cannot place {} mines, only {} cells are eligible",
                config.mines,
                available
            );
            return Err(GameError::UnplaceableMines {
                requested: config.mines,
                available,
            });
        }

        let (center_column, center_row) = config.center();
        let bounds = (config.width, config.height);
        let mut values = Array2::zeros([config.width as usize, config.height as usize]);
        let mut rng = SmallRng::seed_from_u64(self.seed);

        for _ in 0..config.mines {
            // resample until we hit an unmined cell clear of the center cross
            let coords = loop {
                let column = rng.random_range(0..config.width);
                let row = rng.random_range(0..config.height);
                if values[nd((column, row))] != MINE
                    && column.abs_diff(center_column) > 1
                    && row.abs_diff(center_row) > 1
                {
                    break (column, row);
                }
            };
            place_mine(&mut values, coords, bounds);
        }

        Ok(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::neighbors;

    fn generate(config: BoardConfig, seed: u64) -> Array2<i8> {
        RandomMinefieldGenerator::new(seed)
            .generate(config)
            .unwrap()
    }

    #[test]
    fn places_exactly_the_requested_mine_count() {
        for seed in 0..8 {
            let values = generate(BoardConfig::new(9, 9, 10), seed);
            let mines = values.iter().filter(|&&value| value == MINE).count();
            assert_eq!(mines, 10);
        }
    }

    #[test]
    fn non_mine_values_count_their_mined_neighbors() {
        let config = BoardConfig::new(9, 9, 10);
        let values = generate(config, 42);

        for column in 0..config.width {
            for row in 0..config.height {
                let value = values[nd((column, row))];
                if value == MINE {
                    continue;
                }
                let mined = neighbors((column, row), (config.width, config.height))
                    .filter(|&pos| values[nd(pos)] == MINE)
                    .count();
                assert_eq!(value as usize, mined, "at ({column}, {row})");
            }
        }
    }

    #[test]
    fn mines_stay_clear_of_the_center_cross() {
        let config = BoardConfig::new(9, 9, 10);
        let (center_column, center_row) = config.center();

        for seed in 0..16 {
            let values = generate(config, seed);
            for column in 0..config.width {
                for row in 0..config.height {
                    if values[nd((column, row))] == MINE {
                        assert!(column.abs_diff(center_column) > 1, "mine at ({column}, {row})");
                        assert!(row.abs_diff(center_row) > 1, "mine at ({column}, {row})");
                    }
                }
            }
        }
    }

    #[test]
    fn same_seed_reproduces_the_same_minefield() {
        let config = BoardConfig::new(12, 10, 14);
        assert_eq!(generate(config, 7), generate(config, 7));
    }

    #[test]
    fn infeasible_mine_count_is_a_construction_error() {
        // 9x9 leaves a 6x6 eligible area; one more mine than fits must fail
        // instead of resampling forever
        let result = RandomMinefieldGenerator::new(0).generate(BoardConfig::new(9, 9, 37));
        assert_eq!(
            result,
            Err(GameError::UnplaceableMines {
                requested: 37,
                available: 36,
            })
        );
    }

    #[test]
    fn full_eligible_area_is_still_feasible() {
        let values = generate(BoardConfig::new(9, 9, 36), 3);
        let mines = values.iter().filter(|&&value| value == MINE).count();
        assert_eq!(mines, 36);
    }
}
