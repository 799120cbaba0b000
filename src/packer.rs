//! First-fit layer packer.
//!
//! Packs an ordered sequence of piece colors into 3x3 layers: each piece
//! lands in the lowest-indexed layer whose occupancy is disjoint from its
//! footprint, with a fresh layer appended when none fits. Footprints are
//! placed in one fixed alignment, so the collision test is a single bitmask
//! AND against the layer's occupancy.

use crate::pieces::{shape_mask, shape_of, Cell, PieceColor, FULL_LAYER_MASK};

/// A piece placed into a specific layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlacedPiece {
    /// The piece's color.
    pub color: PieceColor,
    /// Zero-based index of the layer holding this piece.
    pub layer: usize,
    /// The piece's position in the original input sequence.
    pub sequence_index: usize,
    /// The cells this piece occupies within its layer.
    pub cells: &'static [Cell],
}

/// One 3x3 occupancy plane of the cube.
///
/// Pieces are stored in insertion order and have pairwise-disjoint cell
/// sets; the occupancy mask is the union of their footprints.
#[derive(Clone, Debug, Default)]
pub struct Layer {
    occupied: u16,
    pieces: Vec<PlacedPiece>,
}

impl Layer {
    /// True if a footprint mask fits this layer without collision.
    #[inline]
    pub fn accepts(&self, mask: u16) -> bool {
        self.occupied & mask == 0
    }

    /// True once every cell of the layer is occupied.
    pub fn is_full(&self) -> bool {
        self.occupied == FULL_LAYER_MASK
    }

    /// Bitmask of occupied cells (bit `row * 3 + col`).
    pub fn occupied_mask(&self) -> u16 {
        self.occupied
    }

    /// Pieces placed into this layer, in insertion order.
    pub fn pieces(&self) -> &[PlacedPiece] {
        &self.pieces
    }

    fn place(&mut self, piece: PlacedPiece, mask: u16) {
        debug_assert!(self.accepts(mask));
        self.occupied |= mask;
        self.pieces.push(piece);
    }
}

/// Packs a color sequence into layers, strictly in input order.
///
/// Pure and deterministic. Placement is total: an empty layer is disjoint
/// from every footprint, so each piece occupies exactly one layer and the
/// result always contains `colors.len()` placed pieces.
pub fn pack(colors: &[PieceColor]) -> Vec<Layer> {
    let mut layers: Vec<Layer> = Vec::new();

    for (sequence_index, &color) in colors.iter().enumerate() {
        let mask = shape_mask(color);

        let layer = match layers.iter().position(|layer| layer.accepts(mask)) {
            Some(index) => index,
            None => {
                layers.push(Layer::default());
                layers.len() - 1
            }
        };

        layers[layer].place(
            PlacedPiece {
                color,
                layer,
                sequence_index,
                cells: shape_of(color),
            },
            mask,
        );
    }

    layers
}

/// Total number of pieces placed across all layers.
pub fn placed_count(layers: &[Layer]) -> usize {
    layers.iter().map(|layer| layer.pieces().len()).sum()
}
