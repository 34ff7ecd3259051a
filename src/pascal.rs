//! `PascalCase`: like camel case, but the first word is capitalized too.

use crate::{
    ascii::Casing,
    scan::{self, Style},
    Options,
};

pub(crate) const STYLE: Style = Style {
    separator: None,
    initial: Casing::Upper,
    word_start: Casing::Upper,
    rest: Casing::Lower,
};

/// Converts a string to pascal case.
///
/// # Examples
///
/// ```
/// assert_eq!(identcase::pascal_case("foo_bar_baz"), "FooBarBaz");
/// assert_eq!(identcase::pascal_case("XMLHttpRequest"), "XmlHttpRequest");
/// assert_eq!(identcase::pascal_case(":.abc~!@def#$ghi"), "AbcDefGhi");
/// ```
pub fn pascal_case(input: &str) -> String {
    pascal_case_with_options(input, &Options::new())
}

/// Converts a string to pascal case with the given options.
///
/// As with [`camel_case_with_options`](crate::camel_case_with_options),
/// [`separate_before_non_alphabets`](Options::separate_before_non_alphabets)
/// has no effect.
pub fn pascal_case_with_options(input: &str, opts: &Options<'_>) -> String {
    scan::convert(input, opts, STYLE)
}

/// Converts a string to pascal case, splitting words only at `seps`.
#[deprecated(note = "use `pascal_case_with_options` with `Options::with_separators`")]
pub fn pascal_case_with_sep(input: &str, seps: &str) -> String {
    pascal_case_with_options(input, &Options::new().with_separators(seps))
}

/// Converts a string to pascal case, keeping the characters in `kept`.
#[deprecated(note = "use `pascal_case_with_options` with `Options::with_keep`")]
pub fn pascal_case_with_keep(input: &str, kept: &str) -> String {
    pascal_case_with_options(input, &Options::new().with_keep(kept))
}
