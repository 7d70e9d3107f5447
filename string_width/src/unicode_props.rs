// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Per scalar Unicode property lookups used by the cluster classifier.
//!
//! - General category and `Emoji_Presentation` come from [`unicode_properties`], which
//!   is maintained alongside `unicode-segmentation` and `unicode-width`.
//! - `Default_Ignorable_Code_Point` comes from the generated [`crate::tables`].
//! - East Asian Width comes from [`unicode_width`], whose `width` / `width_cjk` pair
//!   encodes the Ambiguous category policy.

use std::{cmp::Ordering, ops::RangeInclusive};

use unicode_properties::{EmojiStatus, GeneralCategory, GeneralCategoryGroup,
                         UnicodeEmoji, UnicodeGeneralCategory};
use unicode_width::UnicodeWidthChar;

use crate::tables::DEFAULT_IGNORABLE;

/// VARIATION SELECTOR-15, requests text presentation of the preceding character.
pub const VS15: char = '\u{FE0E}';

/// VARIATION SELECTOR-16, requests emoji presentation of the preceding character.
pub const VS16: char = '\u{FE0F}';

/// `Halfwidth and Fullwidth Forms` block. Scalars from this block that trail a base in
/// the same cluster (eg: halfwidth dakuten `ﾞ`) add their own width.
pub const HALFWIDTH_AND_FULLWIDTH_FORMS: RangeInclusive<u32> = 0xFF00..=0xFFEF;

/// `REGIONAL INDICATOR SYMBOL LETTER A` to `Z`. Pairs of these form flags.
pub const REGIONAL_INDICATORS: RangeInclusive<u32> = 0x1F1E6..=0x1F1FF;

fn table_contains(table: &[(u32, u32)], ch: char) -> bool {
    let code_point = u32::from(ch);
    table
        .binary_search_by(|&(lo, hi)| {
            if hi < code_point {
                Ordering::Less
            } else if lo > code_point {
                Ordering::Greater
            } else {
                Ordering::Equal
            }
        })
        .is_ok()
}

#[must_use]
pub fn is_default_ignorable(ch: char) -> bool { table_contains(DEFAULT_IGNORABLE, ch) }

/// General category `Cc`.
#[must_use]
pub fn is_control(ch: char) -> bool { ch.is_control() }

/// General category `Cf`.
#[must_use]
pub fn is_format(ch: char) -> bool { ch.general_category() == GeneralCategory::Format }

/// General categories `Mn`, `Mc` and `Me`.
#[must_use]
pub fn is_mark(ch: char) -> bool {
    ch.general_category_group() == GeneralCategoryGroup::Mark
}

/// A scalar that can never show up on its own: Default Ignorable, Control or Mark. A
/// cluster made only of these is zero width.
#[must_use]
pub fn is_zero_width_scalar(ch: char) -> bool {
    is_control(ch) || is_mark(ch) || is_default_ignorable(ch)
}

/// A scalar that is skipped when looking for the base visible scalar of a cluster. This
/// is [`is_zero_width_scalar`] plus the Format category.
#[must_use]
pub fn is_leading_non_printing(ch: char) -> bool {
    is_zero_width_scalar(ch) || is_format(ch)
}

#[must_use]
pub fn is_regional_indicator(ch: char) -> bool {
    REGIONAL_INDICATORS.contains(&u32::from(ch))
}

#[must_use]
pub fn is_halfwidth_or_fullwidth_form(ch: char) -> bool {
    HALFWIDTH_AND_FULLWIDTH_FORMS.contains(&u32::from(ch))
}

/// East Asian Width of a single scalar, in columns.
///
/// - `Wide` and `Fullwidth` are 2.
/// - `Narrow`, `Halfwidth` and `Neutral` are 1.
/// - `Ambiguous` is 2 when `ambiguous_as_wide` is set, otherwise 1.
///
/// The result is always 1 or 2. [`unicode_width`] reports 0 or `None` for scalars that
/// it considers invisible; those are `Neutral` here, since the caller already decided
/// that this scalar is the visible one.
#[must_use]
pub fn east_asian_width(ch: char, ambiguous_as_wide: bool) -> usize {
    let width = if ambiguous_as_wide {
        ch.width_cjk()
    } else {
        ch.width()
    };
    match width {
        Some(2..) => 2,
        _ => 1,
    }
}

/// `Emoji_Presentation=Yes`, ie: the scalar renders as a colorful emoji even without
/// VS16. Regional indicators and skin tone modifiers are included.
#[must_use]
pub fn has_emoji_presentation(ch: char) -> bool {
    matches!(
        ch.emoji_status(),
        EmojiStatus::EmojiPresentation
            | EmojiStatus::EmojiPresentationAndModifierBase
            | EmojiStatus::EmojiPresentationAndEmojiComponent
            | EmojiStatus::EmojiPresentationAndModifierAndEmojiComponent
    )
}
