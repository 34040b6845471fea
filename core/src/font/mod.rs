//! Bitmap font sheets to packed glyph arrays.
//!
//! A sheet is cut into a grid of equally sized cells. Every cell row becomes
//! one byte, written out as a `0b` literal with one digit per pixel column.

use alloc::{
    string::{String, ToString},
    vec::Vec,
};
use core::fmt::{self, Write};

use log::{debug, info, trace};

mod glyph;
mod sheet;

pub use glyph::{CellSize, Glyph, Grid, MAX_CELL_WIDTH, pack_row};
pub use sheet::{IndexedSheet, Palette, Rgb, RgbSheet, Sheet, background};

pub const DEFAULT_NAME: &str = "font";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontOptions {
    pub cell: CellSize,
    /// Name of the generated array.
    pub name: String,
}

impl Default for FontOptions {
    fn default() -> Self {
        Self {
            cell: CellSize::default(),
            name: DEFAULT_NAME.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontError {
    /// A cell dimension was zero.
    InvalidCellSize(CellSize),
    /// Cells wider than one byte per row.
    CellTooWide(u32),
    /// The sheet is not an exact multiple of the cell size.
    SizeMismatch {
        width: u32,
        height: u32,
        cell: CellSize,
    },
}

impl fmt::Display for FontError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FontError::InvalidCellSize(cell) => {
                write!(f, "invalid character size {}x{}", cell.width, cell.height)
            }
            FontError::CellTooWide(width) => write!(
                f,
                "character width {width} does not fit in a byte (max {MAX_CELL_WIDTH})"
            ),
            FontError::SizeMismatch {
                width,
                height,
                cell,
            } => write!(
                f,
                "image size {width}x{height} is not a multiple of character {}x{}",
                cell.width, cell.height
            ),
        }
    }
}

/// Check the cell size against the sheet without reading any pixel.
pub fn validate(sheet: &impl Sheet, cell: CellSize) -> Result<Grid, FontError> {
    if cell.width == 0 || cell.height == 0 {
        return Err(FontError::InvalidCellSize(cell));
    }
    if cell.width > MAX_CELL_WIDTH {
        return Err(FontError::CellTooWide(cell.width));
    }
    let (width, height) = (sheet.width(), sheet.height());
    if width % cell.width != 0 || height % cell.height != 0 {
        return Err(FontError::SizeMismatch {
            width,
            height,
            cell,
        });
    }
    Ok(Grid {
        cell,
        columns: width / cell.width,
        rows: height / cell.height,
    })
}

/// Cut `sheet` into glyphs and pack them.
pub fn encode(sheet: &impl Sheet, options: &FontOptions) -> Result<EncodedFont, FontError> {
    let grid = validate(sheet, options.cell)?;
    debug!(
        "Sheet {}x{}: {} columns, {} rows of {}x{} cells",
        sheet.width(),
        sheet.height(),
        grid.columns,
        grid.rows,
        grid.cell.width,
        grid.cell.height
    );

    // An empty sheet has no glyphs, so the colour never gets compared.
    let bg = background(sheet).unwrap_or_default();
    info!("Background colour: {:?}", bg.0);

    let glyphs: Vec<Glyph> = grid
        .origins()
        .map(|origin| {
            let glyph = Glyph::pack(sheet, origin, grid.cell, bg);
            trace!("Glyph at {:?}: {:02x?}", origin, glyph.rows());
            glyph
        })
        .collect();
    info!("Glyphs: {}", glyphs.len());

    Ok(EncodedFont {
        name: options.name.clone(),
        grid,
        background: bg,
        glyphs,
    })
}

#[derive(Debug, Clone)]
pub struct EncodedFont {
    name: String,
    grid: Grid,
    background: Rgb,
    glyphs: Vec<Glyph>,
}

impl EncodedFont {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn grid(&self) -> Grid {
        self.grid
    }

    pub fn background(&self) -> Rgb {
        self.background
    }

    pub fn glyphs(&self) -> &[Glyph] {
        &self.glyphs
    }

    /// All glyph rows, glyph after glyph.
    pub fn bytes(&self) -> impl Iterator<Item = u8> + '_ {
        self.glyphs.iter().flat_map(|g| g.rows().iter().copied())
    }

    pub fn render(&self) -> String {
        let width = self.grid.cell.width as usize;
        let mut out = String::new();
        let _ = writeln!(out, "// {} characters", self.grid.glyph_count());
        let _ = writeln!(out, "PROGMEM const unsigned char {}[] = {{", self.name);
        for (idx, glyph) in self.glyphs.iter().enumerate() {
            if idx > 0 {
                out.push_str(",\n\n");
            }
            for (row_idx, row) in glyph.rows().iter().enumerate() {
                if row_idx > 0 {
                    out.push_str(",\n");
                }
                let _ = write!(out, "\t0b{row:0width$b}");
            }
        }
        out.push('\n');
        let _ = writeln!(out, "}};\n // end of {}", self.name);
        out
    }
}
