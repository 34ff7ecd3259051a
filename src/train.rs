//! `Train-Case`: capitalized words joined by hyphens, as used for HTTP header
//! names.

use crate::{
    ascii::Casing,
    scan::{self, Style},
    Options,
};

pub(crate) const STYLE: Style = Style {
    separator: Some('-'),
    initial: Casing::Upper,
    word_start: Casing::Upper,
    rest: Casing::Lower,
};

/// Converts a string to train case.
///
/// # Examples
///
/// ```
/// assert_eq!(identcase::train_case("content_type"), "Content-Type");
/// assert_eq!(identcase::train_case("XMLHttpRequest"), "Xml-Http-Request");
/// assert_eq!(identcase::train_case("123Abc_456Def"), "123-Abc-456-Def");
/// ```
pub fn train_case(input: &str) -> String {
    train_case_with_options(input, &Options::new())
}

/// Converts a string to train case with the given options.
pub fn train_case_with_options(input: &str, opts: &Options<'_>) -> String {
    scan::convert(input, opts, STYLE)
}

/// Converts a string to train case, splitting words only at `seps`.
#[deprecated(note = "use `train_case_with_options` with `Options::with_separators`")]
pub fn train_case_with_sep(input: &str, seps: &str) -> String {
    train_case_with_options(input, &Options::new().with_separators(seps))
}

/// Converts a string to train case, keeping the characters in `kept`.
#[deprecated(note = "use `train_case_with_options` with `Options::with_keep`")]
pub fn train_case_with_keep(input: &str, kept: &str) -> String {
    train_case_with_options(input, &Options::new().with_keep(kept))
}
