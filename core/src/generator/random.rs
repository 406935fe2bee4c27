use rand::Rng;

use super::*;

/// Seeded generation strategy: the start cell is never a mine and never gold, everything else is
/// purely random.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomBoardGenerator {
    seed: u64,
    start: Coord2,
}

impl RandomBoardGenerator {
    pub fn new(seed: u64, start: Coord2) -> Self {
        Self { seed, start }
    }
}

impl BoardGenerator for RandomBoardGenerator {
    fn generate(self, settings: DifficultySettings) -> Board {
        use rand::prelude::*;

        let mut rng = SmallRng::seed_from_u64(self.seed);
        generate_board(&mut rng, settings, self.start)
    }
}

/// Lays out mines and gold around `excluded`, drawing every decision from `rng`.
///
/// Mines are placed by rejection sampling, then each remaining safe cell (other than `excluded`)
/// independently becomes gold with `settings.gold_chance`.
pub fn generate_board<R: Rng + ?Sized>(
    rng: &mut R,
    settings: DifficultySettings,
    excluded: Coord2,
) -> Board {
    let side = settings.board_size;
    let mut board = Board::empty(side);
    let total_cells = settings.total_cells();

    if total_cells == 0 {
        log::warn!("Requested an empty board, nothing to generate");
        return board;
    }

    let mut mines = settings.mines_count;
    if mines >= total_cells {
        log::warn!(
            "Minefield would cover the start cell, requested {} but only fits {}",
            mines,
            total_cells - 1
        );
        mines = total_cells - 1;
    }

    let mut mines_placed = 0;
    while mines_placed < mines {
        let coords = (rng.random_range(0..side), rng.random_range(0..side));
        if coords == excluded || board[coords].is_mine {
            continue;
        }
        board[coords].is_mine = true;
        mines_placed += 1;
    }

    let gold_chance = settings.gold_chance.clamp(0.0, 1.0);
    for row in 0..side {
        for col in 0..side {
            let coords = (row, col);
            if board[coords].is_mine || coords == excluded {
                continue;
            }
            if rng.random_bool(gold_chance) {
                board[coords].gold_value = Some(rng.random_range(GOLD_VALUES));
            }
        }
    }

    board.compute_neighbor_counts();

    log::debug!(
        "Generated {}x{} board around {:?}: {} mines, {} gold",
        side,
        side,
        excluded,
        board.mine_count(),
        board.gold_count()
    );
    board
}
