//! `MACRO_CASE`, also known as screaming snake case.

use crate::{
    ascii::Casing,
    scan::{self, Style},
    Options,
};

pub(crate) const STYLE: Style = Style {
    separator: Some('_'),
    initial: Casing::Upper,
    word_start: Casing::Upper,
    rest: Casing::Upper,
};

/// Converts a string to macro case.
///
/// ```
/// assert_eq!(identcase::macro_case("fooBarBaz"), "FOO_BAR_BAZ");
/// assert_eq!(identcase::macro_case("max-retries"), "MAX_RETRIES");
/// ```
pub fn macro_case(input: &str) -> String {
    macro_case_with_options(input, &Options::new())
}

/// Converts a string to macro case with the given options.
pub fn macro_case_with_options(input: &str, opts: &Options<'_>) -> String {
    scan::convert(input, opts, STYLE)
}

/// Converts a string to macro case, splitting words only at `seps`.
#[deprecated(note = "use `macro_case_with_options` with `Options::with_separators`")]
pub fn macro_case_with_sep(input: &str, seps: &str) -> String {
    macro_case_with_options(input, &Options::new().with_separators(seps))
}

/// Converts a string to macro case, keeping the characters in `kept`.
#[deprecated(note = "use `macro_case_with_options` with `Options::with_keep`")]
pub fn macro_case_with_keep(input: &str, kept: &str) -> String {
    macro_case_with_options(input, &Options::new().with_keep(kept))
}
