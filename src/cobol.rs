//! `COBOL-CASE`: upper-case words joined by hyphens.

use crate::{
    ascii::Casing,
    scan::{self, Style},
    Options,
};

pub(crate) const STYLE: Style = Style {
    separator: Some('-'),
    initial: Casing::Upper,
    word_start: Casing::Upper,
    rest: Casing::Upper,
};

/// Converts a string to cobol case.
///
/// ```
/// assert_eq!(identcase::cobol_case("abcDefGHIjk"), "ABC-DEF-GH-IJK");
/// ```
pub fn cobol_case(input: &str) -> String {
    cobol_case_with_options(input, &Options::new())
}

/// Converts a string to cobol case with the given options.
///
/// ```
/// use identcase::{cobol_case_with_options, Options};
///
/// let opts = Options::new().with_separators("-");
/// assert_eq!(cobol_case_with_options("abc_def_ghi", &opts), "ABC_-DEF_-GHI");
/// ```
pub fn cobol_case_with_options(input: &str, opts: &Options<'_>) -> String {
    scan::convert(input, opts, STYLE)
}

/// Converts a string to cobol case, splitting words only at `seps`.
#[deprecated(note = "use `cobol_case_with_options` with `Options::with_separators`")]
pub fn cobol_case_with_sep(input: &str, seps: &str) -> String {
    cobol_case_with_options(input, &Options::new().with_separators(seps))
}

/// Converts a string to cobol case, keeping the characters in `kept`.
#[deprecated(note = "use `cobol_case_with_options` with `Options::with_keep`")]
pub fn cobol_case_with_keep(input: &str, kept: &str) -> String {
    cobol_case_with_options(input, &Options::new().with_keep(kept))
}
