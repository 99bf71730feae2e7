use rand::Rng;

use crate::config::{FRUIT_START_COL_OFFSET, GridSize};
use crate::snake::Position;

/// The single fruit currently on the board.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Fruit {
    pub position: Position,
}

impl Fruit {
    /// Creates a fruit at `position`.
    #[must_use]
    pub fn at(position: Position) -> Self {
        Self { position }
    }

    /// Places the first fruit at a fixed offset right of board center,
    /// clamped into bounds for boards narrower than the offset.
    #[must_use]
    pub fn initial(bounds: GridSize) -> Self {
        let col = (i32::from(bounds.width) / 2 + FRUIT_START_COL_OFFSET)
            .min(i32::from(bounds.width) - 1);

        Self::at(Position {
            row: i32::from(bounds.height) / 2,
            col,
        })
    }

    /// Draws a uniformly random in-bounds cell for the next fruit.
    ///
    /// Cells under the snake are not excluded: the fruit may land
    /// beneath a body segment and sit unreachable until the snake
    /// moves off it.
    #[must_use]
    pub fn relocate<R: Rng + ?Sized>(rng: &mut R, bounds: GridSize) -> Self {
        Self::at(Position {
            row: rng.gen_range(0..i32::from(bounds.height)),
            col: rng.gen_range(0..i32::from(bounds.width)),
        })
    }
}
