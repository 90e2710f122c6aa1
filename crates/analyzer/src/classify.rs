use tabsense_core::LineSource;

/// Lines longer than this are probed byte-by-byte through `line_char_code`
/// instead of through the materialized line content.
pub(crate) const LONG_LINE_BYTES: usize = 65536;

/// What one line's leading whitespace looks like.
///
/// Recomputed fresh per line during a scan, never retained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineIndent {
    /// True when the line holds at least one non-whitespace byte
    pub has_content: bool,
    /// Offset of the first non-whitespace byte, or the line length if none
    pub indentation: usize,
    /// Spaces before `indentation`
    pub spaces: usize,
    /// Tabs before `indentation`
    pub tabs: usize,
}

impl LineIndent {
    /// Consumes one prefix byte; returns false once content is hit.
    fn step(&mut self, byte: u8, column: usize) -> bool {
        match byte {
            b'\t' => self.tabs += 1,
            b' ' => self.spaces += 1,
            _ => {
                self.has_content = true;
                self.indentation = column;
                return false;
            }
        }
        true
    }
}

/// Classifies the leading whitespace of line `line_number`.
pub fn classify_line<S>(source: &S, line_number: usize) -> LineIndent
where
    S: LineSource + ?Sized,
{
    let length = source.line_length(line_number);
    let mut line = LineIndent {
        has_content: false,
        indentation: length,
        spaces: 0,
        tabs: 0,
    };
    if length > LONG_LINE_BYTES {
        for column in 0..length {
            if !line.step(source.line_char_code(line_number, column), column) {
                break;
            }
        }
    } else {
        for (column, byte) in source.line_content(line_number).bytes().enumerate() {
            if !line.step(byte, column) {
                break;
            }
        }
    }
    line
}
