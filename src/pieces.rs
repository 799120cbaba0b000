//! Piece color and shape definitions.
//!
//! Each piece is a fixed 3x3 footprint of filled cells, one footprint per
//! color. Footprints have no rotation or reflection variants and are placed
//! in one fixed alignment, so all placement logic can treat them as opaque
//! occupancy masks.

use std::fmt;
use std::str::FromStr;

/// A (row, column) position within a 3x3 layer, each in `0..3`.
pub type Cell = (usize, usize);

/// Grid dimension per axis of a layer.
pub const GRID_DIM: usize = 3;

/// Total cells in one layer.
pub const CELLS_PER_LAYER: usize = GRID_DIM * GRID_DIM;

/// Number of layers in a finished cube.
pub const CUBE_LAYERS: usize = 4;

/// Bitmask with all 9 cells of a layer occupied.
pub const FULL_LAYER_MASK: u16 = (1 << CELLS_PER_LAYER) - 1;

/// The closed set of piece colors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PieceColor {
    Purple,
    Green,
    Pink,
    Orange,
    Blue,
}

impl PieceColor {
    /// Every color, in declaration order. The position of a color in this
    /// array is its stable on-disk index (see `persistence`).
    pub const ALL: [PieceColor; 5] = [
        PieceColor::Purple,
        PieceColor::Green,
        PieceColor::Pink,
        PieceColor::Orange,
        PieceColor::Blue,
    ];

    /// Lowercase color name, matching the CLI argument form.
    pub fn name(self) -> &'static str {
        match self {
            PieceColor::Purple => "purple",
            PieceColor::Green => "green",
            PieceColor::Pink => "pink",
            PieceColor::Orange => "orange",
            PieceColor::Blue => "blue",
        }
    }
}

impl fmt::Display for PieceColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PieceColor {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PieceColor::ALL
            .into_iter()
            .find(|color| color.name() == s)
            .ok_or_else(|| {
                format!("unknown piece color '{s}' (expected purple, green, pink, orange or blue)")
            })
    }
}

const PURPLE_CELLS: &[Cell] = &[(2, 0)];
const GREEN_CELLS: &[Cell] = &[(1, 0), (1, 1), (1, 2)];
const PINK_CELLS: &[Cell] = &[(0, 0), (0, 1), (0, 2)];
const ORANGE_CELLS: &[Cell] = &[(0, 0), (0, 1), (0, 2), (2, 1), (2, 2)];
const BLUE_CELLS: &[Cell] = &[(2, 1), (2, 2)];

/// Returns the fixed footprint for a color.
///
/// Total over the closed color set; every color has exactly one footprint.
pub const fn shape_of(color: PieceColor) -> &'static [Cell] {
    match color {
        PieceColor::Purple => PURPLE_CELLS,
        PieceColor::Green => GREEN_CELLS,
        PieceColor::Pink => PINK_CELLS,
        PieceColor::Orange => ORANGE_CELLS,
        PieceColor::Blue => BLUE_CELLS,
    }
}

/// Number of filled cells in a color's footprint (its weight in the cube).
pub const fn cell_count(color: PieceColor) -> usize {
    shape_of(color).len()
}

/// Converts a cell position to its bit in a layer occupancy mask.
#[inline(always)]
pub const fn cell_bit(cell: Cell) -> u16 {
    1 << (cell.0 * GRID_DIM + cell.1)
}

/// Builds the occupancy mask for a footprint, validating that every cell is
/// in bounds and that no cell appears twice.
const fn mask_of(cells: &[Cell]) -> u16 {
    let mut mask = 0u16;
    let mut i = 0;
    while i < cells.len() {
        let (row, col) = cells[i];
        assert!(row < GRID_DIM && col < GRID_DIM, "footprint cell out of bounds");
        let bit = cell_bit((row, col));
        assert!(mask & bit == 0, "footprint cell listed twice");
        mask |= bit;
        i += 1;
    }
    mask
}

/// Occupancy masks indexed in `PieceColor::ALL` order.
const SHAPE_MASKS: [u16; 5] = {
    let mut masks = [0u16; 5];
    let mut i = 0;
    while i < PieceColor::ALL.len() {
        masks[i] = mask_of(shape_of(PieceColor::ALL[i]));
        i += 1;
    }
    masks
};

/// Returns the occupancy mask for a color's footprint.
///
/// Bit `row * 3 + col` is set for each filled cell.
#[inline(always)]
pub const fn shape_mask(color: PieceColor) -> u16 {
    SHAPE_MASKS[color as usize]
}

/// Cumulative draw weights for the demo generator, ending at 1.0.
///
/// A draw picks the first color whose boundary is at or above a uniform
/// sample in [0, 1), so earlier entries are rarer.
pub const COLOR_WEIGHTS: [(PieceColor, f64); 5] = [
    (PieceColor::Pink, 0.15),
    (PieceColor::Orange, 0.30),
    (PieceColor::Green, 0.50),
    (PieceColor::Blue, 0.75),
    (PieceColor::Purple, 1.0),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_color_has_a_footprint() {
        for color in PieceColor::ALL {
            assert!(!shape_of(color).is_empty(), "{color} has an empty footprint");
            assert_eq!(shape_of(color).len(), cell_count(color));
        }
    }

    #[test]
    fn test_masks_match_footprints() {
        for color in PieceColor::ALL {
            let mut expected = 0u16;
            for &cell in shape_of(color) {
                expected |= cell_bit(cell);
            }
            assert_eq!(shape_mask(color), expected, "mask mismatch for {color}");
            assert_eq!(
                shape_mask(color).count_ones() as usize,
                cell_count(color),
                "popcount mismatch for {color}"
            );
        }
    }

    #[test]
    fn test_purple_is_a_single_cell_at_bottom_left() {
        assert_eq!(shape_of(PieceColor::Purple), &[(2, 0)]);
    }

    #[test]
    fn test_footprints_can_tile_a_layer() {
        use PieceColor::{Blue, Green, Orange, Pink, Purple};

        let covers: [&[PieceColor]; 2] = [&[Purple, Blue, Green, Pink], &[Purple, Green, Orange]];
        for cover in covers {
            let mut union = 0u16;
            for &color in cover {
                assert_eq!(union & shape_mask(color), 0, "cover pieces overlap");
                union |= shape_mask(color);
            }
            assert_eq!(union, FULL_LAYER_MASK, "cover does not fill the layer");
        }
    }

    #[test]
    fn test_weight_table_is_cumulative() {
        let mut previous = 0.0;
        for (color, boundary) in COLOR_WEIGHTS {
            assert!(boundary > previous, "{color} boundary does not increase");
            previous = boundary;
        }
        assert_eq!(previous, 1.0);
    }

    #[test]
    fn test_color_names_round_trip() {
        for color in PieceColor::ALL {
            assert_eq!(color.name().parse::<PieceColor>(), Ok(color));
        }
        assert!("magenta".parse::<PieceColor>().is_err());
    }
}
