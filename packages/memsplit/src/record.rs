//! Slicing a single record into lane fragments.

use crate::config::{lane_offset, FRAGMENT_WIDTH, LANE_COUNT, RECORD_WIDTH};

/// Fragments of one record, indexed by lane.
pub type Fragments<'a> = [&'a str; LANE_COUNT];

/// Split a record (without its line terminator) into its lane fragments.
///
/// Slicing is by character and clamps at the end of the line: a fragment
/// that starts past the end is empty, one that runs past the end is
/// truncated. Characters beyond [`RECORD_WIDTH`] are ignored.
///
/// # Examples
/// ```
/// use memsplit::record::split_record;
///
/// assert_eq!(split_record("abcdef12"), ["12", "ef", "cd", "ab"]);
/// assert_eq!(split_record("abcde"), ["", "e", "cd", "ab"]);
/// ```
#[must_use]
pub fn split_record(line: &str) -> Fragments<'_> {
    std::array::from_fn(|lane| char_slice(line, lane_offset(lane), FRAGMENT_WIDTH))
}

/// Whether `line` is too short to fill every lane.
#[must_use]
pub fn is_short(line: &str) -> bool {
    line.chars().take(RECORD_WIDTH).count() < RECORD_WIDTH
}

/// Put lane fragments back into record order (lane 3 first).
///
/// For a record of at least [`RECORD_WIDTH`] characters this returns its
/// first [`RECORD_WIDTH`] characters.
#[must_use]
pub fn reassemble(fragments: &Fragments<'_>) -> String {
    fragments.iter().rev().copied().collect()
}

/// Up to `len` characters of `s` starting at character `start`.
fn char_slice(s: &str, start: usize, len: usize) -> &str {
    let mut boundaries = s
        .char_indices()
        .map(|(i, _)| i)
        .chain(std::iter::once(s.len()))
        .skip(start);

    let Some(begin) = boundaries.next() else {
        return "";
    };
    let end = boundaries.take(len).last().unwrap_or(begin);

    &s[begin..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_full_record() {
        assert_eq!(split_record("00112233"), ["33", "22", "11", "00"]);
        assert_eq!(split_record("aabbccdd"), ["dd", "cc", "bb", "aa"]);
    }

    #[test]
    fn test_split_ignores_trailing_columns() {
        assert_eq!(split_record("deadbeef // comment"), ["ef", "be", "ad", "de"]);
    }

    #[test]
    fn test_split_short_records() {
        assert_eq!(split_record(""), ["", "", "", ""]);
        assert_eq!(split_record("a"), ["", "", "", "a"]);
        assert_eq!(split_record("abc"), ["", "", "c", "ab"]);
        assert_eq!(split_record("abcdef"), ["", "ef", "cd", "ab"]);
        assert_eq!(split_record("abcdefg"), ["g", "ef", "cd", "ab"]);
    }

    #[test]
    fn test_split_counts_characters_not_bytes() {
        assert_eq!(split_record("ä1b2c3d4"), ["d4", "c3", "b2", "ä1"]);
        assert_eq!(split_record("ééé"), ["", "", "é", "éé"]);
    }

    #[test]
    fn test_is_short() {
        assert!(is_short(""));
        assert!(is_short("abcdefg"));
        assert!(!is_short("abcdefgh"));
        assert!(!is_short("abcdefgh\tignored"));
    }

    #[test]
    fn test_reassemble_round_trip() {
        for line in ["00112233", "cafebabe", "0123456789abcdef", "ffffffff"] {
            let fragments = split_record(line);
            assert_eq!(reassemble(&fragments), &line[..RECORD_WIDTH]);
        }
    }

    #[test]
    fn test_reassemble_short_record() {
        assert_eq!(reassemble(&split_record("abcde")), "abcde");
    }

    #[test]
    fn test_char_slice_bounds() {
        assert_eq!(char_slice("abcd", 0, 2), "ab");
        assert_eq!(char_slice("abcd", 3, 2), "d");
        assert_eq!(char_slice("abcd", 4, 2), "");
        assert_eq!(char_slice("abcd", 9, 2), "");
    }
}
