//! File I/O for the acquired-piece collection.
//!
//! The collection is the ordered list of piece colors, oldest first.
//! Binary format for `pieces.bin` (little endian):
//! - u32: piece count
//! - repeat per piece: u8 color index (position in `PieceColor::ALL`)
//!
//! `pieces.txt` is a human-readable companion regenerated on every save:
//! the color names in acquisition order plus the assembled cube.

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use crate::cubemap::{evaluate, format_cube};
use crate::packer::pack;
use crate::pieces::PieceColor;

const PIECES_BIN: &str = "pieces.bin";
const PIECES_TXT: &str = "pieces.txt";

/// Saves the collection to both binary and text files in `dir`.
pub fn save(dir: &Path, colors: &[PieceColor]) -> std::io::Result<()> {
    save_text(dir, colors)?;
    save_binary(dir, colors)?;
    Ok(())
}

/// Saves the collection in human-readable text format.
fn save_text(dir: &Path, colors: &[PieceColor]) -> std::io::Result<()> {
    let mut file = File::create(dir.join(PIECES_TXT))?;
    writeln!(file, "{} pieces collected:", colors.len())?;
    for (order, color) in colors.iter().enumerate() {
        writeln!(file, "{:>4}. {}", order + 1, color)?;
    }

    let evaluation = evaluate(&pack(colors));
    writeln!(file)?;
    write!(file, "{}", format_cube(&evaluation.grid))?;
    if evaluation.complete {
        writeln!(file, "cube complete")?;
    }
    Ok(())
}

/// Saves the collection in compact binary format for fast loading.
fn save_binary(dir: &Path, colors: &[PieceColor]) -> std::io::Result<()> {
    let mut file = File::create(dir.join(PIECES_BIN))?;

    file.write_all(&(colors.len() as u32).to_le_bytes())?;
    for &color in colors {
        file.write_all(&[color as u8])?;
    }

    Ok(())
}

/// Loads the collection from the binary file.
///
/// Returns `None` if the file is missing, truncated, or contains a byte
/// outside the closed color set; the engine itself never validates colors.
pub fn load(dir: &Path) -> Option<Vec<PieceColor>> {
    let mut file = File::open(dir.join(PIECES_BIN)).ok()?;
    let mut u32_buffer = [0u8; 4];

    file.read_exact(&mut u32_buffer).ok()?;
    let piece_count = u32::from_le_bytes(u32_buffer) as usize;

    let mut colors = Vec::with_capacity(piece_count);
    for _ in 0..piece_count {
        let mut color_buffer = [0u8; 1];
        file.read_exact(&mut color_buffer).ok()?;
        let color = PieceColor::ALL.get(color_buffer[0] as usize).copied()?;
        colors.push(color);
    }

    Some(colors)
}

/// Returns the number of collected pieces without loading them all.
pub fn count(dir: &Path) -> Option<usize> {
    let mut file = File::open(dir.join(PIECES_BIN)).ok()?;
    let mut u32_buffer = [0u8; 4];
    file.read_exact(&mut u32_buffer).ok()?;
    Some(u32::from_le_bytes(u32_buffer) as usize)
}
