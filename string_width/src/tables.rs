// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Generated by `scripts/unicode_tables.py`. Do not edit by hand.

//! Sorted, non-overlapping inclusive code point ranges for the Unicode properties
//! that the cluster classifier needs and that no dependency exposes publicly.

#![allow(clippy::unreadable_literal)]

/// `Default_Ignorable_Code_Point=Yes`.
pub static DEFAULT_IGNORABLE: &[(u32, u32)] = &[
    (0xAD, 0xAD), (0x34F, 0x34F), (0x61C, 0x61C), (0x115F, 0x1160), (0x17B4, 0x17B5),
    (0x180B, 0x180F), (0x200B, 0x200F), (0x202A, 0x202E), (0x2060, 0x206F),
    (0x3164, 0x3164), (0xFE00, 0xFE0F), (0xFEFF, 0xFEFF), (0xFFA0, 0xFFA0),
    (0xFFF0, 0xFFF8), (0x1BCA0, 0x1BCA3), (0x1D173, 0x1D17A), (0xE0000, 0xE0FFF),
];

