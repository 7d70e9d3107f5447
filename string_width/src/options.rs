// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// Knobs that change how a string is measured. This is an immutable value type; build
/// it from [`StringWidthOptions::default`] and the `with_*` methods, so any option you
/// don't mention keeps its documented default.
///
/// | Option                      | Default | Effect when flipped                          |
/// | --------------------------- | ------- | -------------------------------------------- |
/// | [`ambiguous_is_narrow`]     | `true`  | East Asian Ambiguous characters are 2 wide   |
/// | [`count_ansi_escape_codes`] | `false` | Escape sequences are measured as plain text  |
///
/// [`ambiguous_is_narrow`]: Self::ambiguous_is_narrow
/// [`count_ansi_escape_codes`]: Self::count_ansi_escape_codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StringWidthOptions {
    /// Treat characters in the East Asian Width `Ambiguous` category (eg: `±`, `↔`,
    /// `①`) as 1 column instead of 2. Non CJK terminals render them narrow.
    pub ambiguous_is_narrow: bool,

    /// Skip escape sequence removal, so the bytes of eg `ESC [31m` are measured like
    /// any other text (`ESC` itself is a control character and stays zero width).
    pub count_ansi_escape_codes: bool,
}

impl Default for StringWidthOptions {
    fn default() -> Self {
        Self {
            ambiguous_is_narrow: true,
            count_ansi_escape_codes: false,
        }
    }
}

impl StringWidthOptions {
    #[must_use]
    pub fn with_ambiguous_is_narrow(mut self, ambiguous_is_narrow: bool) -> Self {
        self.ambiguous_is_narrow = ambiguous_is_narrow;
        self
    }

    #[must_use]
    pub fn with_count_ansi_escape_codes(mut self, count_ansi_escape_codes: bool) -> Self {
        self.count_ansi_escape_codes = count_ansi_escape_codes;
        self
    }

    /// The flag in the form that the East Asian Width lookup wants it.
    #[must_use]
    pub fn ambiguous_as_wide(&self) -> bool { !self.ambiguous_is_narrow }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;

    #[test]
    fn test_defaults() {
        let options = StringWidthOptions::default();
        assert!(options.ambiguous_is_narrow);
        assert!(!options.count_ansi_escape_codes);
        assert!(!options.ambiguous_as_wide());
    }

    #[test]
    fn test_builder_keeps_other_defaults() {
        let options = StringWidthOptions::default().with_count_ansi_escape_codes(true);
        assert_eq2!(
            options,
            StringWidthOptions {
                ambiguous_is_narrow: true,
                count_ansi_escape_codes: true,
            }
        );

        let options = StringWidthOptions::default().with_ambiguous_is_narrow(false);
        assert!(options.ambiguous_as_wide());
        assert!(!options.count_ansi_escape_codes);
    }
}
