/// Read-only view over an ordered sequence of text lines.
///
/// Line numbers are 1-based and must stay stable for the duration of one analysis
/// pass. Lengths and column offsets are byte-based; the characters the analysis
/// inspects (space and tab) are ASCII, so byte-wise and char-wise inspection agree.
pub trait LineSource {
    fn line_count(&self) -> usize;

    /// Length of the line in bytes, excluding the line terminator.
    fn line_length(&self, line_number: usize) -> usize;

    /// Content of the line, excluding the line terminator.
    fn line_content(&self, line_number: usize) -> &str;

    /// Single byte of the line at `column`.
    ///
    /// Chunked sources can override this so very long lines are probed in place
    /// instead of being assembled into one string first.
    ///
    /// # Panics
    /// Panics if `column` is past the end of the line.
    fn line_char_code(&self, line_number: usize, column: usize) -> u8 {
        self.line_content(line_number).as_bytes()[column]
    }
}
