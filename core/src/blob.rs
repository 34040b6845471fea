use alloc::{
    string::{String, ToString},
    vec::Vec,
};
use core::fmt::Write;

use log::debug;

/// Number of hex literals per output line.
pub const BYTES_PER_LINE: usize = 8;

/// A binary file about to be rendered as a `uint8_t` array.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ByteArray {
    source: String,
    id: String,
    data: Vec<u8>,
}

impl ByteArray {
    /// `source` only ends up in the header comment, `id` names the array.
    pub fn new(source: &str, id: &str, data: Vec<u8>) -> Self {
        Self {
            source: source.to_string(),
            id: id.to_string(),
            data,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Name of the `#define` holding the array length.
    pub fn len_constant(&self) -> String {
        let mut name = self.id.to_ascii_uppercase();
        name.push_str("_LEN");
        name
    }

    /// Hex literals, `BYTES_PER_LINE` to a line, without a trailing comma.
    pub fn body(&self) -> String {
        let mut body = String::with_capacity(self.data.len() * 6);
        for (line, chunk) in self.data.chunks(BYTES_PER_LINE).enumerate() {
            if line > 0 {
                body.push_str(",\n");
            }
            for (idx, byte) in chunk.iter().enumerate() {
                if idx > 0 {
                    body.push_str(", ");
                }
                let _ = write!(body, "0x{byte:02x}");
            }
        }
        body
    }

    pub fn render(&self) -> String {
        debug!("Rendering {} ({} bytes)", self.id, self.data.len());
        let mut out = String::new();
        let _ = writeln!(out, "#include <stdint.h>\n");
        let _ = writeln!(out, "/* file: {} */", self.source);
        let _ = writeln!(out, "#define {} {}\n", self.len_constant(), self.data.len());
        let _ = writeln!(out, "uint8_t {}[] = {{\n{}\n}};\n", self.id, self.body());
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn nine_bytes_split_after_eight() {
        let array = ByteArray::new("foo.bin", "foo", (0u8..9).collect());
        assert_eq!(array.len_constant(), "FOO_LEN");
        assert_eq!(
            array.render(),
            "#include <stdint.h>\n\n\
             /* file: foo.bin */\n\
             #define FOO_LEN 9\n\n\
             uint8_t foo[] = {\n\
             0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07,\n\
             0x08\n\
             };\n\n"
        );
    }

    #[test]
    fn one_literal_per_byte() {
        for len in [1usize, 7, 8, 9, 16, 17, 300] {
            let data: Vec<u8> = (0..len).map(|i| (i * 37) as u8).collect();
            let array = ByteArray::new("data.bin", "data", data);
            let body = array.body();
            assert_eq!(body.matches("0x").count(), len);
            assert_eq!(body.lines().count(), len.div_ceil(BYTES_PER_LINE));
            assert!(array.render().contains(&alloc::format!("#define DATA_LEN {len}\n")));
        }
    }

    #[test]
    fn hex_is_lower_case() {
        let array = ByteArray::new("x", "x", vec![0xab, 0xff, 0x0c]);
        assert_eq!(array.body(), "0xab, 0xff, 0x0c");
    }

    #[test]
    fn empty_input() {
        let array = ByteArray::new("empty.bin", "empty", Vec::new());
        assert!(array.is_empty());
        assert!(array.render().ends_with("#define EMPTY_LEN 0\n\nuint8_t empty[] = {\n\n};\n\n"));
    }

    #[test]
    fn id_kept_verbatim() {
        let array = ByteArray::new("tiles.bin", "Tiles_v2", vec![1]);
        assert_eq!(array.id(), "Tiles_v2");
        assert!(array.render().contains("#define TILES_V2_LEN 1\n"));
        assert!(array.render().contains("uint8_t Tiles_v2[] = {\n"));
    }
}
