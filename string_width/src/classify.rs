// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// cspell:words dakuten

//! Decide how many columns one grapheme cluster takes.
//!
//! The rules are applied in priority order and the first match wins:
//!
//! | # | Rule                | Matches when                                        | Width       |
//! | - | ------------------- | --------------------------------------------------- | ----------- |
//! | 1 | [`ZeroWidth`]       | every scalar is Default Ignorable, Control or Mark  | 0           |
//! | 2 | [`Emoji`]           | RGI emoji sequence that asks for emoji presentation | 2           |
//! | 3 | [`EastAsian`]       | everything else                                     | EAW of base |
//!
//! [`ZeroWidth`]: ClusterClass::ZeroWidth
//! [`Emoji`]: ClusterClass::Emoji
//! [`EastAsian`]: ClusterClass::EastAsian

use std::fmt::{Display, Formatter, Result};

use crate::{StringWidthOptions, VS15, VS16, east_asian_width, has_emoji_presentation,
            is_halfwidth_or_fullwidth_form, is_leading_non_printing, is_rgi_emoji_sequence,
            is_zero_width_scalar, looks_like_emoji_sequence};

/// What [`classify_cluster`] decided about a cluster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClusterClass {
    /// Nothing visible: ignorables, controls, marks with no base, stray variation
    /// selectors. Also used for a cluster of Format characters with no visible base.
    ZeroWidth,
    /// An emoji sequence rendered in emoji presentation. Always 2 columns.
    Emoji,
    /// Measured by the East Asian Width of `base`, the first visible scalar. `width`
    /// includes any trailing halfwidth forms in the same cluster.
    EastAsian { base: char, width: usize },
}

impl ClusterClass {
    #[must_use]
    pub fn width(&self) -> usize {
        match self {
            ClusterClass::ZeroWidth => 0,
            ClusterClass::Emoji => 2,
            ClusterClass::EastAsian { width, .. } => *width,
        }
    }
}

impl Display for ClusterClass {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            ClusterClass::ZeroWidth => write!(f, "zero-width"),
            ClusterClass::Emoji => write!(f, "emoji"),
            ClusterClass::EastAsian { base, .. } => {
                write!(f, "east-asian(U+{:04X})", u32::from(*base))
            }
        }
    }
}

/// Facts about a cluster, gathered in one pass over its scalars.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClusterInfo {
    /// First scalar after the leading run of Default Ignorable, Control, Format and Mark
    /// scalars. [`None`] if the cluster is made only of those.
    pub base: Option<char>,
    pub has_vs15: bool,
    pub has_vs16: bool,
    pub scalar_count: usize,
    /// Every scalar passes [`is_zero_width_scalar`].
    pub all_zero_width: bool,
    /// The last scalar is [`VS15`].
    pub ends_with_vs15: bool,
}

impl ClusterInfo {
    #[must_use]
    pub fn new(cluster: &str) -> Self {
        let mut it = Self {
            base: None,
            has_vs15: false,
            has_vs16: false,
            scalar_count: 0,
            all_zero_width: true,
            ends_with_vs15: false,
        };

        for ch in cluster.chars() {
            it.scalar_count += 1;
            it.has_vs15 |= ch == VS15;
            it.has_vs16 |= ch == VS16;
            it.all_zero_width &= is_zero_width_scalar(ch);
            it.ends_with_vs15 = ch == VS15;
            if it.base.is_none() && !is_leading_non_printing(ch) {
                it.base = Some(ch);
            }
        }

        // An empty slice has no scalars to be visible.
        it.all_zero_width &= it.scalar_count > 0;
        it
    }

    /// Rule 2's presentation test. The cluster must already match the RGI grammar.
    fn wants_emoji_presentation(&self) -> bool {
        if self.has_vs16 {
            return true;
        }

        let base_is_emoji_presentation = self.base.is_some_and(has_emoji_presentation);
        if base_is_emoji_presentation && !self.has_vs15 {
            return true;
        }

        // `base + VS15` is text presentation, not a meaningful multi scalar sequence.
        let is_text_presentation_pair = self.scalar_count == 2 && self.ends_with_vs15;
        self.scalar_count > 1 && !is_text_presentation_pair
    }
}

/// Classify one grapheme cluster. This is a pure function of its arguments.
///
/// Rule 3 adds, on top of the base scalar's width, the East Asian Width of every later
/// scalar from the Halfwidth and Fullwidth Forms block. That is how halfwidth Katakana
/// with a halfwidth dakuten (`ｶﾞ`) ends up 2 columns wide, matching its two cells on
/// screen.
#[must_use]
pub fn classify_cluster(cluster: &str, options: StringWidthOptions) -> ClusterClass {
    let info = ClusterInfo::new(cluster);

    if info.all_zero_width {
        return ClusterClass::ZeroWidth;
    }

    if is_rgi_emoji_sequence(cluster) {
        if info.wants_emoji_presentation() {
            return ClusterClass::Emoji;
        }
    } else if info.scalar_count > 1 && looks_like_emoji_sequence(cluster) {
        tracing::trace!(
            ?cluster,
            "emoji-like cluster is not an RGI sequence, measuring its base"
        );
    }

    let Some(base) = info.base else {
        return ClusterClass::ZeroWidth;
    };

    let ambiguous_as_wide = options.ambiguous_as_wide();
    let trailing_halfwidth: usize = cluster
        .chars()
        .skip(1)
        .filter(|&ch| is_halfwidth_or_fullwidth_form(ch))
        .map(|ch| east_asian_width(ch, ambiguous_as_wide))
        .sum();

    ClusterClass::EastAsian {
        base,
        width: east_asian_width(base, ambiguous_as_wide) + trailing_halfwidth,
    }
}

/// Shorthand for `classify_cluster(cluster, options).width()`.
#[must_use]
pub fn cluster_width(cluster: &str, options: StringWidthOptions) -> usize {
    classify_cluster(cluster, options).width()
}
