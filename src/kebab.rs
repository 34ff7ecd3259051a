//! `kebab-case`.

use crate::{
    ascii::Casing,
    scan::{self, Style},
    Options,
};

pub(crate) const STYLE: Style = Style {
    separator: Some('-'),
    initial: Casing::Lower,
    word_start: Casing::Lower,
    rest: Casing::Lower,
};

/// Converts a string to kebab case.
///
/// ```
/// assert_eq!(identcase::kebab_case("fooBarBaz"), "foo-bar-baz");
/// assert_eq!(identcase::kebab_case("FOO_BAR"), "foo-bar");
/// ```
pub fn kebab_case(input: &str) -> String {
    kebab_case_with_options(input, &Options::new())
}

/// Converts a string to kebab case with the given options.
pub fn kebab_case_with_options(input: &str, opts: &Options<'_>) -> String {
    scan::convert(input, opts, STYLE)
}

/// Converts a string to kebab case, splitting words only at `seps`.
#[deprecated(note = "use `kebab_case_with_options` with `Options::with_separators`")]
pub fn kebab_case_with_sep(input: &str, seps: &str) -> String {
    kebab_case_with_options(input, &Options::new().with_separators(seps))
}

/// Converts a string to kebab case, keeping the characters in `kept`.
#[deprecated(note = "use `kebab_case_with_options` with `Options::with_keep`")]
pub fn kebab_case_with_keep(input: &str, kept: &str) -> String {
    kebab_case_with_options(input, &Options::new().with_keep(kept))
}
