// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{VS16, is_regional_indicator};

/// Does `cluster` match the RGI ("recommended for general interchange") emoji sequence
/// grammar? That covers single emoji characters, modifier sequences (`👩🏿`), flags
/// (`🇺🇸`), keycaps (`1️⃣`), tag sequences (`🏴󠁧󠁢󠁥󠁮󠁧󠁿`) and ZWJ sequences (`👨‍👩‍👧`).
///
/// Only the fully qualified spelling is RGI. [`emojis::get`] also resolves the
/// unqualified and minimally qualified spellings from `emoji-test.txt` (eg: `1⃣`
/// without VS16, `❤‍🔥` without VS16, or a bare `©`), so the match has to be exact.
///
/// A lone regional indicator is also accepted, as a single emoji character sequence.
#[must_use]
pub fn is_rgi_emoji_sequence(cluster: &str) -> bool {
    if emojis::get(cluster).is_some_and(|emoji| emoji.as_str() == cluster) {
        return true;
    }
    let mut chars = cluster.chars();
    matches!(
        (chars.next(), chars.next()),
        (Some(ch), None) if is_regional_indicator(ch)
    )
}

/// Clusters carrying one of the emoji sequence building blocks: ZWJ, VS16, a keycap, a
/// skin tone modifier, a tag, or a regional indicator. Only used to report clusters
/// that look like emoji but aren't RGI.
#[must_use]
pub fn looks_like_emoji_sequence(cluster: &str) -> bool {
    cluster.chars().any(|ch| {
        matches!(
            ch,
            '\u{200D}' | VS16 | '\u{20E3}' | '\u{1F3FB}'..='\u{1F3FF}' | '\u{E0020}'..='\u{E007F}'
        ) || is_regional_indicator(ch)
    })
}
