//! Keyboard scancode to character table.
//!
//! The table is sparse in the source and expanded into a dense
//! `keyb_map[scancode] = { normal, shifted }` array for the firmware.

use alloc::{collections::BTreeMap, string::String, vec::Vec};
use core::fmt::{self, Write};

use log::{debug, warn};

mod uk;

pub const MAX_SCANCODE_DEFINE: &str = "KEYB_MAX_SCANCODE";
pub const ARRAY_NAME: &str = "keyb_map";

/// What a key produces in one shift state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyChar {
    /// A printable character, emitted as a C character literal.
    Literal(char),
    /// A raw byte, emitted as a `\x` escape.
    Byte(u8),
}

impl KeyChar {
    fn parse(field: &str) -> Option<Self> {
        let mut chars = field.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Some(KeyChar::Literal(c)),
            _ => u8::from_str_radix(field, 16).ok().map(KeyChar::Byte),
        }
    }

    /// The byte the firmware sees.
    pub fn value(self) -> u32 {
        match self {
            KeyChar::Literal(c) => c as u32,
            KeyChar::Byte(b) => b as u32,
        }
    }
}

impl fmt::Display for KeyChar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyChar::Literal('\'') => f.write_str("'\\''"),
            KeyChar::Literal('\\') => f.write_str("'\\\\'"),
            KeyChar::Literal(c) => write!(f, "'{c}'"),
            KeyChar::Byte(b) => write!(f, "'\\x{b:02x}'"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyMapping {
    pub normal: KeyChar,
    pub shifted: KeyChar,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeymapError {
    /// A line did not have exactly three fields.
    FieldCount { line: usize, found: usize },
    /// A scancode or character field was not valid hex.
    InvalidHex { line: usize, field: String },
    /// The table has no entries.
    Empty,
}

impl fmt::Display for KeymapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeymapError::FieldCount { line, found } => {
                write!(f, "line {line}: expected 3 fields, found {found}")
            }
            KeymapError::InvalidHex { line, field } => {
                write!(f, "line {line}: invalid hex value {field:?}")
            }
            KeymapError::Empty => f.write_str("keymap has no entries"),
        }
    }
}

/// Immutable scancode table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keymap {
    entries: BTreeMap<u8, KeyMapping>,
}

impl Keymap {
    /// Parse `<scancode> <normal> <shifted>` lines; blank lines are skipped.
    pub fn parse(table: &str) -> Result<Self, KeymapError> {
        let mut entries = BTreeMap::new();
        for (idx, text) in table.lines().enumerate() {
            let line = idx + 1;
            let fields: Vec<&str> = text.split_whitespace().collect();
            if fields.is_empty() {
                continue;
            }
            let &[scancode, normal, shifted] = fields.as_slice() else {
                return Err(KeymapError::FieldCount {
                    line,
                    found: fields.len(),
                });
            };
            let invalid = |field: &str| KeymapError::InvalidHex {
                line,
                field: field.into(),
            };
            let scancode = u8::from_str_radix(scancode, 16).map_err(|_| invalid(scancode))?;
            let mapping = KeyMapping {
                normal: KeyChar::parse(normal).ok_or_else(|| invalid(normal))?,
                shifted: KeyChar::parse(shifted).ok_or_else(|| invalid(shifted))?,
            };
            if entries.insert(scancode, mapping).is_some() {
                warn!("Scancode 0x{scancode:02x} defined twice, keeping line {line}");
            }
        }
        if entries.is_empty() {
            return Err(KeymapError::Empty);
        }
        debug!("Parsed {} scancodes", entries.len());
        Ok(Self { entries })
    }

    /// The built-in UK layout.
    pub fn uk() -> Result<Self, KeymapError> {
        Self::parse(uk::TABLE)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, scancode: u8) -> Option<KeyMapping> {
        self.entries.get(&scancode).copied()
    }

    pub fn max_scancode(&self) -> u8 {
        // parse() refuses empty tables
        self.entries.keys().next_back().copied().unwrap_or(0)
    }

    /// One slot per scancode up to and including the largest one.
    pub fn dense(&self) -> Vec<Option<KeyMapping>> {
        (0..=self.max_scancode()).map(|sc| self.get(sc)).collect()
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "#define {MAX_SCANCODE_DEFINE} 0x{:x}", self.max_scancode());
        let _ = writeln!(out, "PROGMEM const unsigned char {ARRAY_NAME}[][2] = {{");
        for (idx, slot) in self.dense().iter().enumerate() {
            if idx > 0 {
                out.push_str(", \n");
            }
            let _ = match slot {
                Some(m) => write!(out, "{{ {}, {} }}", m.normal, m.shifted),
                None => write!(out, "{{ 0, 0 }}"),
            };
        }
        let _ = writeln!(out, "\n}}; // {ARRAY_NAME} ends\n");
        out
    }
}
