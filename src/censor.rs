//! Masking of matched spans.
//!
//! Scanning produces, for every `char` position in the input, the length of the longest match
//! ending there. [`marks()`] turns those lengths into one flag per position, and [`apply()`]
//! writes the masked copy of the input.
//!
//! Both passes are linear in the input length, no matter how long the matched words are.

use alloc::{string::String, vec, vec::Vec};

/// The default mask character.
pub const DEFAULT_MASK: char = '*';

/// Compute which positions are covered by a match.
///
/// `spans[i]` is the length, in `char`s, of the longest match ending at position `i`, or `0` if
/// no match ends there. Position `j` is marked if some `i >= j` has `i - spans[i] < j`.
pub(crate) fn marks(spans: &[usize]) -> Vec<bool> {
    let mut marks = vec![false; spans.len()];
    // Number of positions, counting the current one, still covered by a match seen to the right.
    let mut remaining = 0;
    for (mark, span) in marks.iter_mut().zip(spans).rev() {
        remaining = remaining.max(*span);
        if remaining > 0 {
            *mark = true;
            remaining -= 1;
        }
    }
    marks
}

/// Copy `input`, replacing every marked `char` with `mask`.
///
/// `marks` must contain one entry per `char` of `input`.
pub(crate) fn apply(input: &str, marks: &[bool], mask: char) -> String {
    debug_assert_eq!(input.chars().count(), marks.len());
    input
        .chars()
        .zip(marks)
        .fold(String::with_capacity(input.len()), |mut output, (c, marked)| {
            output.push(if *marked { mask } else { c });
            output
        })
}

#[cfg(test)]
mod tests {
    use crate::censor::{apply, marks};
    use alloc::vec;

    #[test]
    fn marks_empty() {
        assert!(marks(&[]).is_empty());
    }

    #[test]
    fn marks_none() {
        assert_eq!(marks(&[0, 0, 0]), vec![false, false, false]);
    }

    #[test]
    fn marks_single() {
        assert_eq!(marks(&[0, 0, 3, 0]), vec![true, true, true, false]);
    }

    #[test]
    fn marks_overlapping() {
        // "ab" ending at 1 and "bcd" ending at 3.
        assert_eq!(marks(&[0, 2, 0, 3, 0]), vec![true, true, true, true, false]);
    }

    #[test]
    fn marks_contained() {
        // A long match ending later covers a shorter one ending earlier.
        assert_eq!(marks(&[0, 0, 1, 0, 5]), vec![true; 5]);
    }

    #[test]
    fn marks_adjacent() {
        assert_eq!(marks(&[0, 2, 0, 2]), vec![true; 4]);
    }

    #[test]
    fn marks_gap() {
        assert_eq!(
            marks(&[1, 0, 0, 2, 0]),
            vec![true, false, true, true, false]
        );
    }

    #[test]
    fn apply_mask() {
        assert_eq!(apply("foo bar", &marks(&[0, 0, 3, 0, 0, 0, 0]), '*'), "*** bar");
    }

    #[test]
    fn apply_custom_mask() {
        assert_eq!(apply("foo", &[true, true, true], '#'), "###");
    }

    #[test]
    fn apply_multibyte() {
        assert_eq!(
            apply("测试ok", &[true, true, false, false], '*'),
            "**ok"
        );
        assert_eq!(apply("ok", &[true, false], '测'), "测k");
    }

    #[test]
    fn apply_empty() {
        assert_eq!(apply("", &[], '*'), "");
    }
}
