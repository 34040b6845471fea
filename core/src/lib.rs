/*!
Pure converters turning development assets into C source arrays for the
firmware build.

- [`blob`]: raw binary files as `uint8_t` arrays
- [`font`]: glyph sheets packed into one byte per glyph row
- [`keymap`]: the PS/2 scancode to character table

Nothing in here touches the filesystem; the `assetgen-tools` binaries read
the inputs and write the rendered text to stdout.
*/

#![no_std]

pub mod blob;
pub mod font;
pub mod keymap;

extern crate alloc;
