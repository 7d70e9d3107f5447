// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::borrow::Cow;

use crate::{StringWidthOptions, string_width_with_options, utf16_string_width};

/// Extension trait so anything that holds text can be asked for its width directly.
///
/// Absent text ([`None`]) is 0 columns wide, just like the empty string.
///
/// ```
/// use r3bl_string_width::DisplayWidth;
///
/// assert_eq!("古池や".display_width(), 6);
/// assert_eq!(String::from("abc").display_width(), 3);
/// assert_eq!(None::<&str>.display_width(), 0);
/// assert_eq!([0x61_u16, 0xD800].as_slice().display_width(), 1);
/// ```
pub trait DisplayWidth {
    fn display_width_with(&self, options: StringWidthOptions) -> usize;

    fn display_width(&self) -> usize { self.display_width_with(StringWidthOptions::default()) }
}

impl DisplayWidth for str {
    fn display_width_with(&self, options: StringWidthOptions) -> usize {
        string_width_with_options(self, options)
    }
}

impl DisplayWidth for String {
    fn display_width_with(&self, options: StringWidthOptions) -> usize {
        self.as_str().display_width_with(options)
    }
}

impl DisplayWidth for Cow<'_, str> {
    fn display_width_with(&self, options: StringWidthOptions) -> usize {
        self.as_ref().display_width_with(options)
    }
}

/// UTF-16 code units, possibly with unpaired surrogates.
impl DisplayWidth for [u16] {
    fn display_width_with(&self, options: StringWidthOptions) -> usize {
        utf16_string_width(self, options)
    }
}

impl DisplayWidth for Vec<u16> {
    fn display_width_with(&self, options: StringWidthOptions) -> usize {
        self.as_slice().display_width_with(options)
    }
}

impl<T: DisplayWidth + ?Sized> DisplayWidth for &T {
    fn display_width_with(&self, options: StringWidthOptions) -> usize {
        (**self).display_width_with(options)
    }
}

impl<T: DisplayWidth> DisplayWidth for Option<T> {
    fn display_width_with(&self, options: StringWidthOptions) -> usize {
        self.as_ref()
            .map_or(0, |it| it.display_width_with(options))
    }
}
