//! Render bytes in hex, the way `xxd` does:
//!
//! ```text
//! 0000000: e8a6 8c2b 8511 da71 7b56 250c 5441 8c38  ...+...q{V%.TA.8
//! 0000010: e999 0895 d539 0a49 698c 82e8 bd62 ea6f  .....9.Ii....b.o
//! ```
//!
//! Pure formatting; the `#` instruction feeds it the tape's raw bytes.

/// Formats byte slices as hex-dump lines with a fixed column width.
#[derive(Debug, Clone, Copy)]
pub struct HexDumper {
    cols: usize,
}

impl Default for HexDumper {
    fn default() -> Self {
        Self { cols: 16 }
    }
}

impl HexDumper {
    pub fn new(cols: usize) -> Self {
        Self { cols }
    }

    /// Format one line: a zero-padded 7-hex-digit offset, the bytes as
    /// two-digit hex pairs with a space after every second byte, then the
    /// printable-ASCII rendering. Bytes outside `[32, 126]` show as `.`.
    /// Short chunks are padded with blanks so the text column lines up.
    pub fn format_line(&self, offset: usize, data: &[u8]) -> String {
        debug_assert!(!data.is_empty());
        debug_assert!(data.len() <= self.cols);

        let mut hex = String::new();
        let mut text = String::new();

        for (i, &byte) in data.iter().enumerate() {
            text.push(if (0x20..=0x7e).contains(&byte) {
                byte as char
            } else {
                '.'
            });
            hex.push_str(&format!("{byte:02x}"));
            if i % 2 == 1 {
                hex.push(' ');
            }
        }

        // Pad it out.
        for i in data.len()..self.cols {
            text.push(' ');
            hex.push_str("  ");
            if i % 2 == 1 {
                hex.push(' ');
            }
        }

        format!("{offset:07x}: {hex} {text}")
    }

    /// Render `data` as one newline-terminated line per chunk of `cols`
    /// bytes.
    pub fn dump_string(&self, data: &[u8]) -> String {
        let mut out = String::new();
        for (chunk_no, chunk) in data.chunks(self.cols).enumerate() {
            out.push_str(&self.format_line(chunk_no * self.cols, chunk));
            out.push('\n');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_a_short_line() {
        let dumper = HexDumper::new(16);
        assert_eq!(
            dumper.format_line(0x100, b"12\n45"),
            "0000100: 3132 0a34 35                             12.45           "
        );
        assert_eq!(
            dumper.format_line(0x200, b"12\n456"),
            "0000200: 3132 0a34 3536                           12.456          "
        );
    }

    #[test]
    fn formats_a_full_line() {
        let dumper = HexDumper::new(16);
        assert_eq!(
            dumper.format_line(0x300, b"1245678901234567"),
            "0000300: 3132 3435 3637 3839 3031 3233 3435 3637  1245678901234567"
        );
    }

    #[test]
    fn non_printable_bytes_render_as_dots() {
        let dumper = HexDumper::default();
        let line = dumper.format_line(0, &[0x03]);
        assert_eq!(
            line,
            "0000000: 03                                       .               "
        );
    }

    #[test]
    fn dumps_multiple_chunks_with_running_offsets() {
        let data = b"123456789\n12345612\n45";
        let expected = "0000000: 3132 3334 3536 3738 390a 3132 3334 3536  123456789.123456\n\
                        0000010: 3132 0a34 35                             12.45           \n";
        assert_eq!(HexDumper::new(16).dump_string(data), expected);
    }

    #[test]
    fn empty_input_dumps_nothing() {
        assert_eq!(HexDumper::default().dump_string(&[]), "");
    }
}
