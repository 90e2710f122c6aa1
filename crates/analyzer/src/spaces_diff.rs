/// Space-equivalent indentation delta between two lines.
///
/// `a_indent` and `b_indent` are the measured indentation prefix lengths, not the
/// full line lengths. The shared prefix is skipped first, then each remainder is
/// counted as spaces vs tabs. A remainder that mixes both cannot be attributed to a
/// single tab width and scores 0. Returns 0 both for "no difference" and for
/// unscorable pairs; bucket 0 is never a tab-size candidate, so the two collapse
/// without affecting the vote.
///
/// # Panics
/// Panics if an indent length exceeds its line's byte length.
#[must_use]
pub fn spaces_diff(a: &str, a_indent: usize, b: &str, b_indent: usize) -> usize {
    let a = &a.as_bytes()[..a_indent];
    let b = &b.as_bytes()[..b_indent];

    let mut prefix = 0;
    while prefix < a.len() && prefix < b.len() && a[prefix] == b[prefix] {
        prefix += 1;
    }

    // The remainders can go both ways, e.g. a = "\t" against b = "\t    "
    // leaves nothing on a and four spaces on b.
    let (a_spaces, a_tabs) = count_remainder(&a[prefix..]);
    let (b_spaces, b_tabs) = count_remainder(&b[prefix..]);

    if a_spaces > 0 && a_tabs > 0 {
        return 0;
    }
    if b_spaces > 0 && b_tabs > 0 {
        return 0;
    }

    let tabs_delta = a_tabs.abs_diff(b_tabs);
    let spaces_delta = a_spaces.abs_diff(b_spaces);
    if tabs_delta == 0 {
        return spaces_delta;
    }
    if spaces_delta % tabs_delta == 0 {
        return spaces_delta / tabs_delta;
    }
    0
}

fn count_remainder(remainder: &[u8]) -> (usize, usize) {
    let mut spaces = 0;
    let mut tabs = 0;
    for byte in remainder {
        if *byte == b' ' {
            spaces += 1;
        } else {
            tabs += 1;
        }
    }
    (spaces, tabs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    // pure-space deltas come back verbatim
    #[case("", 0, "    ", 4, 4)]
    #[case("    ", 4, "        ", 8, 4)]
    #[case("  ", 2, "      ", 6, 4)]
    // one tab replaced by spaces implies the spaces-per-tab quotient
    #[case("\t", 1, "\t    ", 5, 4)]
    #[case("\t\t", 2, "\t        ", 9, 8)]
    #[case("\t", 1, "   ", 3, 3)]
    // evenly divisible multi-tab replacement
    #[case("\t\t", 2, "        ", 8, 4)]
    // no delta at all
    #[case("", 0, "", 0, 0)]
    #[case("\t\t", 2, "\t\t", 2, 0)]
    // indivisible space/tab ratio is unscorable
    #[case("\t\t", 2, "   ", 3, 0)]
    // a remainder mixing tabs and spaces is unscorable
    #[case(" \t", 2, "", 0, 0)]
    #[case("", 0, "\t ", 2, 0)]
    #[case("  ", 2, " \t  ", 4, 0)]
    fn test_spaces_diff(
        #[case] a: &str,
        #[case] a_indent: usize,
        #[case] b: &str,
        #[case] b_indent: usize,
        #[case] expected: usize,
    ) {
        assert_eq!(spaces_diff(a, a_indent, b, b_indent), expected);
        // absolute deltas make the score symmetric
        assert_eq!(spaces_diff(b, b_indent, a, a_indent), expected);
    }

    #[test]
    fn test_indent_shorter_than_line_is_respected() {
        // only the measured prefix participates, not the full line
        assert_eq!(spaces_diff("    return 1;", 4, "}", 0), 4);
    }

    #[test]
    fn test_shared_prefix_is_ignored() {
        // identical two-tab prefix, delta is the two extra spaces on b
        assert_eq!(spaces_diff("\t\t", 2, "\t\t  ", 4), 2);
    }
}
