/// Heuristic check that `data` is a text file rather than a binary.
///
/// A NUL byte rules the file out immediately; otherwise at least 85% of a
/// leading sample must be printable ASCII or non-ASCII (UTF-8 continuation)
/// bytes. Empty files count as text so they can still report their defaults.
#[must_use]
pub fn looks_like_text(data: &[u8]) -> bool {
    if data.is_empty() {
        return true;
    }

    // Sample up to 8KB for performance
    let sample = &data[..data.len().min(8192)];

    let mut printable = 0usize;
    for byte in sample {
        if *byte == 0 {
            return false;
        }
        if byte.is_ascii_graphic() || byte.is_ascii_whitespace() || *byte >= 0x80 {
            printable += 1;
        }
    }
    printable * 100 / sample.len() >= 85
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(b"fn main() {}\n".as_slice(), true)]
    #[case(b"\tindented\r\n\tlines\r\n".as_slice(), true)]
    #[case("caf\u{e9} au lait".as_bytes(), true)]
    #[case(b"".as_slice(), true)]
    #[case(b"\x00\x01\x02\x03".as_slice(), false)]
    #[case(b"text with a \x00 nul".as_slice(), false)]
    #[case(b"\x7f\x45\x4c\x46\x01\x01\x01\x00".as_slice(), false)]
    fn test_looks_like_text(#[case] data: &[u8], #[case] expected: bool) {
        assert_eq!(looks_like_text(data), expected);
    }

    #[test]
    fn test_mostly_control_bytes_rejected() {
        let data: Vec<u8> = (1u8..32).filter(|b| !b.is_ascii_whitespace()).cycle().take(100).collect();
        assert!(!looks_like_text(&data));
    }
}
