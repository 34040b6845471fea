use alloc::vec::Vec;

/// A pixel colour. Ordering is lexicographic over the channels, which is
/// what the background guess relies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Rgb(pub [u8; 3]);

impl Rgb {
    pub const BLACK: Rgb = Rgb([0, 0, 0]);
    pub const WHITE: Rgb = Rgb([0xff, 0xff, 0xff]);

    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self([r, g, b])
    }
}

/// A glyph sheet: anything that can resolve a coordinate to a colour.
pub trait Sheet {
    fn width(&self) -> u32;
    fn height(&self) -> u32;

    /// Colour at `(x, y)`. Callers stay within `width()` x `height()`.
    fn rgb(&self, x: u32, y: u32) -> Rgb;

    fn pixels(&self) -> impl Iterator<Item = Rgb> + '_
    where
        Self: Sized,
    {
        (0..self.height()).flat_map(move |y| (0..self.width()).map(move |x| self.rgb(x, y)))
    }
}

/// Guess the background colour as the smallest colour on the sheet.
///
/// This is a heuristic: a sheet drawn with dark ink on a light background
/// will have its ink picked instead, and the packed bits come out inverted.
pub fn background(sheet: &impl Sheet) -> Option<Rgb> {
    sheet.pixels().min()
}

/// Direct colour pixels, row-major.
#[derive(Debug, Clone)]
pub struct RgbSheet {
    width: u32,
    height: u32,
    pixels: Vec<Rgb>,
}

impl RgbSheet {
    /// Returns `None` if `pixels` does not hold exactly `width * height` entries.
    pub fn new(width: u32, height: u32, pixels: Vec<Rgb>) -> Option<Self> {
        if pixels.len() != width as usize * height as usize {
            return None;
        }
        Some(Self { width, height, pixels })
    }

    /// Build from packed RGB8 bytes, three per pixel.
    pub fn from_rgb8(width: u32, height: u32, raw: &[u8]) -> Option<Self> {
        if raw.len() % 3 != 0 {
            return None;
        }
        let pixels = raw.chunks_exact(3).map(|c| Rgb([c[0], c[1], c[2]])).collect();
        Self::new(width, height, pixels)
    }

    /// A sheet filled with one colour.
    pub fn filled(width: u32, height: u32, color: Rgb) -> Self {
        Self {
            width,
            height,
            pixels: alloc::vec![color; width as usize * height as usize],
        }
    }

    pub fn set(&mut self, x: u32, y: u32, color: Rgb) {
        let idx = y as usize * self.width as usize + x as usize;
        self.pixels[idx] = color;
    }
}

impl Sheet for RgbSheet {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn rgb(&self, x: u32, y: u32) -> Rgb {
        self.pixels[y as usize * self.width as usize + x as usize]
    }
}

/// Colour table of an indexed image.
#[derive(Debug, Clone, Default)]
pub struct Palette(Vec<Rgb>);

impl Palette {
    pub fn new(colors: Vec<Rgb>) -> Self {
        Self(colors)
    }

    /// Entries past the end of the table resolve to black.
    pub fn lookup(&self, index: u8) -> Rgb {
        self.0.get(index as usize).copied().unwrap_or(Rgb::BLACK)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Palette indices, row-major, resolved through a [`Palette`].
///
/// This is the in-memory model for sheets built by hand. Decoded image
/// files reach the encoder already expanded to RGB by their decoder.
#[derive(Debug, Clone)]
pub struct IndexedSheet {
    width: u32,
    height: u32,
    indices: Vec<u8>,
    palette: Palette,
}

impl IndexedSheet {
    pub fn new(width: u32, height: u32, indices: Vec<u8>, palette: Palette) -> Option<Self> {
        if indices.len() != width as usize * height as usize {
            return None;
        }
        Some(Self {
            width,
            height,
            indices,
            palette,
        })
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }
}

impl Sheet for IndexedSheet {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn rgb(&self, x: u32, y: u32) -> Rgb {
        self.palette
            .lookup(self.indices[y as usize * self.width as usize + x as usize])
    }
}
