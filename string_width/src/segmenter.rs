// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use unicode_segmentation::UnicodeSegmentation;

/// Splits text into grapheme clusters: the units a terminal moves the cursor past in one
/// step.
///
/// Implementations must return ordered, non overlapping slices of `text` that together
/// cover all of it, so that concatenating them reproduces the input exactly. Measurement
/// is generic over this trait, which lets tests feed the classifier synthetic cluster
/// boundaries.
pub trait GraphemeSegmenter {
    fn segment<'a>(&self, text: &'a str) -> impl Iterator<Item = &'a str>;
}

/// Default segmenter. Uses the extended grapheme cluster rules of
/// [UAX #29](https://www.unicode.org/reports/tr29/) via [`unicode_segmentation`], which
/// keeps regional indicator pairs (flags), emoji modifier sequences, and ZWJ emoji
/// sequences in one cluster each.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct UnicodeGraphemeSegmenter;

impl GraphemeSegmenter for UnicodeGraphemeSegmenter {
    fn segment<'a>(&self, text: &'a str) -> impl Iterator<Item = &'a str> {
        text.graphemes(/* is_extended */ true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;

    fn segments(text: &str) -> Vec<&str> { UnicodeGraphemeSegmenter.segment(text).collect() }

    #[test]
    fn test_concatenation_reproduces_input() {
        let input = "Hi 😀 古池や x\u{300} 🇺🇸🇬🇧 👨\u{200D}👩\u{200D}👧\r\n";
        assert_eq2!(segments(input).concat(), input);
    }

    #[test]
    fn test_combining_mark_joins_base() {
        assert_eq2!(segments("x\u{300}y"), vec!["x\u{300}", "y"]);
    }

    #[test]
    fn test_regional_indicators_pair_up() {
        assert_eq2!(segments("🇺🇸🇬🇧"), vec!["🇺🇸", "🇬🇧"]);
        assert_eq2!(segments("🇺🇸🇬"), vec!["🇺🇸", "🇬"]);
    }

    #[test]
    fn test_zwj_sequence_is_one_cluster() {
        assert_eq2!(segments("👨\u{200D}👩\u{200D}👧").len(), 1);
    }

    #[test]
    fn test_modifier_sequence_is_one_cluster() {
        assert_eq2!(segments("👩🏿"), vec!["👩🏿"]);
    }

    #[test]
    fn test_leading_mark_is_its_own_cluster() {
        assert_eq2!(segments("\u{300}a"), vec!["\u{300}", "a"]);
    }

    #[test]
    fn test_crlf_is_one_cluster() {
        assert_eq2!(segments("a\r\nb"), vec!["a", "\r\n", "b"]);
    }
}
