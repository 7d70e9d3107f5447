// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Entry points that run the whole pipeline: filter escapes, segment, classify, sum.

use std::borrow::Cow;

use crate::{ClusterClass, ESC, GraphemeSegmenter, StringWidthOptions,
            UnicodeGraphemeSegmenter, classify_cluster, strip_ansi_escape_sequences};

/// Width of `text` in terminal columns, with [`StringWidthOptions::default`].
///
/// ```
/// use r3bl_string_width::string_width;
///
/// assert_eq!(string_width("A\u{1F600}BC"), 5);
/// assert_eq!(string_width("\u{1b}[31m\u{1b}[39m"), 0);
/// ```
#[must_use]
pub fn string_width(text: &str) -> usize {
    string_width_with_options(text, StringWidthOptions::default())
}

/// Width of `text` in terminal columns.
#[must_use]
pub fn string_width_with_options(text: &str, options: StringWidthOptions) -> usize {
    string_width_with_segmenter(text, options, &UnicodeGraphemeSegmenter)
}

/// Width of `text` in terminal columns, using `segmenter` to find grapheme clusters.
#[must_use]
pub fn string_width_with_segmenter(
    text: &str,
    options: StringWidthOptions,
    segmenter: &impl GraphemeSegmenter,
) -> usize {
    if text.is_empty() {
        return 0;
    }

    if let Some(width) = try_ascii_fast_path(text, options) {
        return width;
    }

    let filtered = filter_escapes(text, options);
    segmenter
        .segment(&filtered)
        .map(|cluster| classify_cluster(cluster, options).width())
        .sum()
}

/// Printable ASCII is 1 column per byte and never merges into a cluster with a
/// neighbor, and ASCII controls are 0. This shortcut is only taken when escape
/// stripping would be a no-op.
fn try_ascii_fast_path(text: &str, options: StringWidthOptions) -> Option<usize> {
    if !text.is_ascii() {
        return None;
    }
    if !options.count_ansi_escape_codes && text.contains(ESC) {
        return None;
    }
    Some(text.bytes().filter(|byte| (0x20..0x7F).contains(byte)).count())
}

fn filter_escapes(text: &str, options: StringWidthOptions) -> Cow<'_, str> {
    if options.count_ansi_escape_codes {
        Cow::Borrowed(text)
    } else {
        strip_ansi_escape_sequences(text)
    }
}

/// Stands in for an unpaired surrogate when UTF-16 input is decoded. A line feed is a
/// zero width control, grapheme cluster boundaries fall on both sides of it, and the
/// escape filter keeps it (even inside an escape sequence).
const LONE_SURROGATE_PLACEHOLDER: char = '\n';

/// Width of UTF-16 code units that may be malformed.
///
/// Each unpaired surrogate is a zero width cluster of its own. The whole input is
/// decoded before the escape filter runs, so an escape sequence with a lone surrogate
/// inside it is still removed.
#[must_use]
pub fn utf16_string_width(units: &[u16], options: StringWidthOptions) -> usize {
    if units.is_empty() {
        return 0;
    }

    let text: String = char::decode_utf16(units.iter().copied())
        .map(|decoded| {
            decoded.unwrap_or_else(|error| {
                tracing::trace!(
                    unpaired_surrogate = error.unpaired_surrogate(),
                    "lone surrogate measured as zero width"
                );
                LONE_SURROGATE_PLACEHOLDER
            })
        })
        .collect();

    string_width_with_options(&text, options)
}

/// One grapheme cluster and how it was classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClusterWidth<'a> {
    pub cluster: &'a str,
    pub class: ClusterClass,
}

impl ClusterWidth<'_> {
    #[must_use]
    pub fn width(&self) -> usize { self.class.width() }
}

/// The per cluster view of a measurement. Holds the escape filtered text, so the
/// clusters it yields can borrow from it.
///
/// ```
/// use r3bl_string_width::{ClusterClass, MeasuredText, StringWidthOptions};
///
/// let measured = MeasuredText::new("x\u{300}😀", StringWidthOptions::default());
/// let widths: Vec<usize> = measured.clusters().map(|it| it.width()).collect();
/// assert_eq!(widths, vec![1, 2]);
/// assert_eq!(measured.total(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeasuredText<'a> {
    filtered: Cow<'a, str>,
    options: StringWidthOptions,
}

impl<'a> MeasuredText<'a> {
    #[must_use]
    pub fn new(text: &'a str, options: StringWidthOptions) -> Self {
        Self {
            filtered: filter_escapes(text, options),
            options,
        }
    }

    /// The text that was segmented, ie: the input minus any escape sequences.
    #[must_use]
    pub fn filtered_text(&self) -> &str { &self.filtered }

    /// Clusters from left to right.
    pub fn clusters(&self) -> impl Iterator<Item = ClusterWidth<'_>> {
        let options = self.options;
        UnicodeGraphemeSegmenter
            .segment(&self.filtered)
            .map(move |cluster| ClusterWidth {
                cluster,
                class: classify_cluster(cluster, options),
            })
    }

    #[must_use]
    pub fn total(&self) -> usize { self.clusters().map(|it| it.width()).sum() }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;
    use crate::assert_eq2;

    #[test_case("", 0 ; "empty")]
    #[test_case("abcde", 5 ; "ascii")]
    #[test_case("古池や", 6 ; "fullwidth")]
    #[test_case("あいうabc", 9 ; "hiragana and ascii")]
    #[test_case("ノード.js", 9 ; "katakana and ascii")]
    #[test_case("你好", 4 ; "chinese")]
    #[test_case("안녕하세요", 10 ; "hangul")]
    #[test_case("A\u{1F600}BC", 5 ; "emoji between ascii")]
    #[test_case("\u{1b}[31m\u{1b}[39m", 0 ; "only escapes")]
    #[test_case("\u{1b}[31mred\u{1b}[0m", 3 ; "sgr around ascii")]
    #[test_case("\u{1b}[1m\u{1b}[31mBold Red\u{1b}[0m", 8 ; "nested sgr")]
    #[test_case("\u{1b}[31m你好\u{1b}[0m", 4 ; "sgr around cjk")]
    #[test_case("\u{1b}]8;;https://r3bl.com\u{7}link\u{1b}]8;;\u{7}", 4 ; "osc hyperlink")]
    #[test_case("\u{1F469}\u{1F3FF}", 2 ; "modifier sequence")]
    #[test_case("x\u{300}", 1 ; "combining mark")]
    #[test_case("cafe\u{301}", 4 ; "decomposed cafe")]
    #[test_case("\u{2194}\u{FE0F}", 2 ; "vs16")]
    #[test_case("\u{2194}\u{FE0E}", 1 ; "vs15")]
    #[test_case("👨\u{200D}👩\u{200D}👧\u{200D}👦", 2 ; "zwj family")]
    #[test_case("🇺🇸🇬🇧", 4 ; "two flags")]
    #[test_case("🇺🇸\u{1F1EC}", 4 ; "flag and lone regional indicator")]
    #[test_case("1\u{FE0F}\u{20E3}", 2 ; "keycap")]
    #[test_case("1\u{20E3}", 1 ; "unqualified keycap")]
    #[test_case("\u{2764}\u{FE0F}\u{200D}\u{1F525}", 2 ; "fully qualified zwj sequence")]
    #[test_case("\u{2764}\u{200D}\u{1F525}", 1 ; "minimally qualified zwj sequence")]
    #[test_case("\u{1E4EC}", 0 ; "lone unicode 15 mark")]
    #[test_case("\u{0897}", 0 ; "lone unicode 16 mark")]
    #[test_case("hi你好😀", 8 ; "mixed")]
    #[test_case("a\tb\n", 2 ; "ascii controls")]
    #[test_case("\u{300}\u{301}", 0 ; "marks with no base")]
    #[test_case("\u{FE0F}", 0 ; "lone vs16")]
    #[test_case("\u{200B}\u{2060}\u{FEFF}", 0 ; "ignorables")]
    #[test_case("ｶﾞｷﾞ", 4 ; "halfwidth katakana with dakuten")]
    #[test_case("😀\u{200D}😀", 2 ; "non rgi zwj sequence")]
    fn test_string_width(input: &str, expected: usize) {
        assert_eq2!(string_width(input), expected);
    }

    #[test]
    fn test_count_ansi_escape_codes() {
        let options = StringWidthOptions::default().with_count_ansi_escape_codes(true);
        assert_eq2!(string_width_with_options("\u{1b}[31m", options), 4);
        assert_eq2!(string_width_with_options("\u{1b}[31m古\u{1b}[0m", options), 9);
        assert_eq2!(string_width_with_options("plain", options), 5);
    }

    #[test]
    fn test_ambiguous_is_narrow() {
        let wide = StringWidthOptions::default().with_ambiguous_is_narrow(false);
        assert_eq2!(string_width("\u{00B1}"), 1);
        assert_eq2!(string_width_with_options("\u{00B1}", wide), 2);
        assert_eq2!(string_width_with_options("\u{2460}\u{2461}", wide), 4);
        // ASCII is never ambiguous, so the fast path is policy independent.
        assert_eq2!(string_width_with_options("abc", wide), 3);
    }

    #[test]
    fn test_ascii_fast_path_agrees_with_full_pipeline() {
        let options = StringWidthOptions::default();
        for input in ["", "hello", "a\r\nb", "\t\0x\x7f", "  spaces  "] {
            let full: usize = UnicodeGraphemeSegmenter
                .segment(input)
                .map(|cluster| classify_cluster(cluster, options).width())
                .sum();
            assert_eq2!(try_ascii_fast_path(input, options), Some(full));
        }
        assert_eq2!(try_ascii_fast_path("\x1b[1m", options), None);
        assert_eq2!(try_ascii_fast_path("古", options), None);
    }

    /// Treats every scalar as its own cluster, to show that measurement only depends on
    /// the segmenter through the clusters it yields.
    #[derive(Debug)]
    struct ScalarSegmenter;

    impl GraphemeSegmenter for ScalarSegmenter {
        fn segment<'a>(&self, text: &'a str) -> impl Iterator<Item = &'a str> {
            text.char_indices()
                .map(move |(index, ch)| &text[index..index + ch.len_utf8()])
        }
    }

    #[test]
    fn test_injected_segmenter() {
        let options = StringWidthOptions::default();
        // Split apart, the modifier is its own wide emoji.
        assert_eq2!(
            string_width_with_segmenter("\u{1F469}\u{1F3FF}", options, &ScalarSegmenter),
            4
        );
        // Split apart, the combining mark is a zero width cluster.
        assert_eq2!(string_width_with_segmenter("x\u{300}", options, &ScalarSegmenter), 1);
    }

    #[test]
    fn test_utf16_lone_surrogates() {
        let options = StringWidthOptions::default();
        // "A" + U+1F600 as a surrogate pair + "BC"
        assert_eq2!(
            utf16_string_width(&[0x41, 0xD83D, 0xDE00, 0x42, 0x43], options),
            5
        );
        assert_eq2!(utf16_string_width(&[0xD800], options), 0);
        assert_eq2!(utf16_string_width(&[0xDC00, 0xD800], options), 0);
        assert_eq2!(utf16_string_width(&[0x61, 0xD800, 0x62], options), 2);
        // The surrogate breaks the cluster, so the mark after it has no base.
        assert_eq2!(utf16_string_width(&[0x78, 0xD800, 0x0300], options), 1);
        assert_eq2!(utf16_string_width(&[], options), 0);
    }

    #[test]
    fn test_utf16_lone_surrogate_inside_escape_sequence() {
        let options = StringWidthOptions::default();
        // ESC [ 3 <lone surrogate> 1 m a b
        let units: Vec<u16> = "\u{1b}[3"
            .encode_utf16()
            .chain([0xD800])
            .chain("1mab".encode_utf16())
            .collect();
        assert_eq2!(utf16_string_width(&units, options), 2);
        assert_eq2!(
            utf16_string_width(&units, options),
            string_width("\u{1b}[31mab")
        );

        // A surrogate between two regional indicators keeps them apart.
        let units: Vec<u16> = "\u{1F1EC}"
            .encode_utf16()
            .chain([0xDC00])
            .chain("\u{1F1EC}\u{1b}[0m".encode_utf16())
            .collect();
        assert_eq2!(utf16_string_width(&units, options), 4);
    }

    #[test]
    fn test_measured_text_clusters() {
        let measured = MeasuredText::new(
            "\u{1b}[31ma古\u{1b}[0m😀\u{300}",
            StringWidthOptions::default(),
        );
        assert_eq2!(measured.filtered_text(), "a古😀\u{300}");

        let clusters: Vec<ClusterWidth<'_>> = measured.clusters().collect();
        assert_eq2!(
            clusters,
            vec![
                ClusterWidth {
                    cluster: "a",
                    class: ClusterClass::EastAsian { base: 'a', width: 1 },
                },
                ClusterWidth {
                    cluster: "古",
                    class: ClusterClass::EastAsian { base: '古', width: 2 },
                },
                // A mark after an emoji is not an RGI sequence, so the base decides.
                ClusterWidth {
                    cluster: "😀\u{300}",
                    class: ClusterClass::EastAsian { base: '😀', width: 2 },
                },
            ]
        );
        assert_eq2!(measured.total(), 5);
    }

    #[test]
    fn test_measured_text_total_matches_string_width() {
        let options = StringWidthOptions::default().with_ambiguous_is_narrow(false);
        for input in ["abc", "±↔", "ｶﾞ", "🇺🇸x\u{300}", "\u{1b}[4m古池\u{1b}[24m"] {
            assert_eq2!(
                MeasuredText::new(input, options).total(),
                string_width_with_options(input, options)
            );
        }
    }
}
