//! Completion evaluation and renderable cube grids.
//!
//! Projects packed layers onto per-cell color planes, decides whether the
//! cube is complete (exactly four fully occupied layers) and marks every
//! cell highlighted when it is. Also renders the grid as text for the CLI
//! and the saved collection file.

use crate::packer::Layer;
use crate::pieces::{PieceColor, CUBE_LAYERS, GRID_DIM};

/// One rendered cell: the owning piece's color plus a celebration marker.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellColor {
    pub color: PieceColor,
    pub highlight: bool,
}

/// A 3x3 plane of rendered cells; `None` marks an empty cell.
pub type LayerGrid = [[Option<CellColor>; GRID_DIM]; GRID_DIM];

/// The renderable cube: one plane per layer, in layer order.
pub type CubeColorMap = Vec<LayerGrid>;

/// Result of evaluating packed layers.
#[derive(Clone, Debug)]
pub struct Evaluation {
    /// Per-cell color grid, one plane per layer (overflow layers included).
    pub grid: CubeColorMap,
    /// True iff the cube has exactly four layers and all 36 cells are set.
    pub complete: bool,
}

/// Builds the renderable grid and the completion flag for packed layers.
///
/// Pure function, recomputed fully on each call. A fifth layer means the
/// piece set does not fit a single cube: its cells still appear in the
/// grid, but `complete` stays false and nothing is highlighted.
pub fn evaluate(layers: &[Layer]) -> Evaluation {
    let mut grid: CubeColorMap = Vec::with_capacity(layers.len());

    for layer in layers {
        let mut plane: LayerGrid = [[None; GRID_DIM]; GRID_DIM];
        for piece in layer.pieces() {
            for &(row, col) in piece.cells {
                plane[row][col] = Some(CellColor {
                    color: piece.color,
                    highlight: false,
                });
            }
        }
        grid.push(plane);
    }

    let complete = grid.len() == CUBE_LAYERS
        && grid
            .iter()
            .all(|plane| plane.iter().all(|row| row.iter().all(Option::is_some)));

    if complete {
        for plane in &mut grid {
            for row in plane {
                for cell in row.iter_mut().flatten() {
                    cell.highlight = true;
                }
            }
        }
    }

    Evaluation { grid, complete }
}

/// Display letter for a rendered cell.
///
/// One letter per color (`k` is pink, to keep purple unambiguous), `.` for
/// empty. Highlighted cells render uppercase.
fn cell_char(cell: Option<CellColor>) -> char {
    let Some(cell) = cell else {
        return '.';
    };
    let letter = match cell.color {
        PieceColor::Purple => 'p',
        PieceColor::Green => 'g',
        PieceColor::Pink => 'k',
        PieceColor::Orange => 'o',
        PieceColor::Blue => 'b',
    };
    if cell.highlight {
        letter.to_ascii_uppercase()
    } else {
        letter
    }
}

/// Formats the cube as text, layers side by side.
///
/// Rows run top to bottom; layer 0 is the leftmost slice.
pub fn format_cube(grid: &CubeColorMap) -> String {
    if grid.is_empty() {
        return String::from("(no pieces placed)\n");
    }

    // header: L0  L1  ...
    let mut header = String::new();
    for index in 0..grid.len() {
        if index > 0 {
            header.push_str("  ");
        }
        header.push_str(&format!("L{:<width$}", index, width = GRID_DIM - 1));
    }
    let mut output = String::new();
    output.push_str(header.trim_end());
    output.push('\n');

    for row in 0..GRID_DIM {
        for (index, plane) in grid.iter().enumerate() {
            if index > 0 {
                output.push_str("  ");
            }
            for col in 0..GRID_DIM {
                output.push(cell_char(plane[row][col]));
            }
        }
        output.push('\n');
    }

    output
}
