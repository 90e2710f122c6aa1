use std::ops::Range;

use tabsense_core::LineSource;

/// Line-indexed view over one owned string.
///
/// Lines are split on `\n` with a trailing `\r` trimmed from each span, so both
/// Unix and Windows line endings read the same. Empty input still holds one empty
/// line, matching how editors model an empty document. Spans are byte ranges into
/// the backing string, so no per-line allocation happens.
pub struct LineBuffer {
    text: String,
    spans: Vec<Range<usize>>,
}

impl LineBuffer {
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let bytes = text.as_bytes();
        let mut spans = Vec::new();
        let mut start = 0;
        for (offset, byte) in bytes.iter().enumerate() {
            if *byte == b'\n' {
                spans.push(trim_carriage_return(bytes, start..offset));
                start = offset + 1;
            }
        }
        spans.push(trim_carriage_return(bytes, start..bytes.len()));
        Self { text, spans }
    }
}

fn trim_carriage_return(bytes: &[u8], span: Range<usize>) -> Range<usize> {
    if span.end > span.start && bytes[span.end - 1] == b'\r' {
        span.start..span.end - 1
    } else {
        span
    }
}

impl From<&str> for LineBuffer {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl LineSource for LineBuffer {
    fn line_count(&self) -> usize {
        self.spans.len()
    }

    fn line_length(&self, line_number: usize) -> usize {
        self.spans[line_number - 1].len()
    }

    fn line_content(&self, line_number: usize) -> &str {
        &self.text[self.spans[line_number - 1].clone()]
    }

    fn line_char_code(&self, line_number: usize, column: usize) -> u8 {
        let span = &self.spans[line_number - 1];
        self.text.as_bytes()[span.start + column]
    }
}
