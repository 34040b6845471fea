use alloc::vec::Vec;

use super::sheet::{Rgb, Sheet};

/// Widest cell that still packs into one byte per row.
pub const MAX_CELL_WIDTH: u32 = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellSize {
    pub width: u32,
    pub height: u32,
}

impl CellSize {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl Default for CellSize {
    fn default() -> Self {
        Self::new(8, 8)
    }
}

/// Layout of the cells on a validated sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    pub cell: CellSize,
    pub columns: u32,
    pub rows: u32,
}

impl Grid {
    pub fn glyph_count(&self) -> usize {
        self.columns as usize * self.rows as usize
    }

    /// Top-left pixel of every cell, rows top to bottom, left to right within a row.
    pub fn origins(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        (0..self.rows).flat_map(move |row| {
            (0..self.columns).map(move |col| (col * self.cell.width, row * self.cell.height))
        })
    }
}

/// Pack `width` pixels starting at `(x, y)` into the low bits of a byte.
/// The leftmost pixel lands in the highest used bit; background pixels are 1.
pub fn pack_row(sheet: &impl Sheet, x: u32, y: u32, width: u32, bg: Rgb) -> u8 {
    (0..width).fold(0u8, |acc, i| (acc << 1) | (sheet.rgb(x + i, y) == bg) as u8)
}

/// One packed glyph cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Glyph {
    width: u32,
    rows: Vec<u8>,
}

impl Glyph {
    pub fn pack(sheet: &impl Sheet, origin: (u32, u32), cell: CellSize, bg: Rgb) -> Self {
        let (x, y) = origin;
        let rows = (0..cell.height)
            .map(|j| pack_row(sheet, x, y + j, cell.width, bg))
            .collect();
        Self {
            width: cell.width,
            rows,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn rows(&self) -> &[u8] {
        &self.rows
    }

    /// Unpack a single pixel again. `None` outside the cell.
    pub fn is_background(&self, x: u32, y: u32) -> Option<bool> {
        if x >= self.width {
            return None;
        }
        let row = *self.rows.get(y as usize)?;
        Some((row >> (self.width - 1 - x)) & 1 == 1)
    }
}
