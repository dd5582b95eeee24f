//! Layout constants for the byte-lane split.

/// Number of output files (byte lanes) produced per input.
pub const LANE_COUNT: usize = 4;

/// Characters per fragment: one byte written as two hex digits.
pub const FRAGMENT_WIDTH: usize = 2;

/// Characters of a record that are distributed over the lanes.
///
/// Anything past this column is ignored.
pub const RECORD_WIDTH: usize = LANE_COUNT * FRAGMENT_WIDTH;

/// Character offset of the fragment that goes to `lane`.
///
/// Lanes are assigned in reverse: lane 0 takes the last byte of the word,
/// lane 3 the first.
///
/// # Examples
/// ```
/// use memsplit::config::lane_offset;
///
/// assert_eq!(lane_offset(0), 6);
/// assert_eq!(lane_offset(3), 0);
/// ```
#[must_use]
pub const fn lane_offset(lane: usize) -> usize {
    debug_assert!(lane < LANE_COUNT, "lane out of range");
    (LANE_COUNT - 1 - lane) * FRAGMENT_WIDTH
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_width() {
        assert_eq!(RECORD_WIDTH, 8);
    }

    #[test]
    fn test_lane_offsets() {
        let offsets: Vec<usize> = (0..LANE_COUNT).map(lane_offset).collect();
        assert_eq!(offsets, vec![6, 4, 2, 0]);
    }
}
