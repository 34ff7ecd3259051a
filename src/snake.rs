//! `snake_case`: lower-case words joined by underscores.

use crate::{
    ascii::Casing,
    scan::{self, Style},
    Options,
};

pub(crate) const STYLE: Style = Style {
    separator: Some('_'),
    initial: Casing::Lower,
    word_start: Casing::Lower,
    rest: Casing::Lower,
};

/// Converts a string to snake case.
///
/// Words are split at every change from lower to upper case, at the last
/// capital of a run of capitals followed by a lower-case letter, and at any
/// character other than an ASCII letter or digit. Those other characters are
/// removed.
///
/// # Examples
///
/// ```
/// assert_eq!(identcase::snake_case("fooBarBaz"), "foo_bar_baz");
/// assert_eq!(identcase::snake_case("HTTPRequest"), "http_request");
/// assert_eq!(identcase::snake_case("--foo--bar--"), "foo_bar");
/// assert_eq!(identcase::snake_case("v2-beta"), "v2_beta");
/// ```
pub fn snake_case(input: &str) -> String {
    snake_case_with_options(input, &Options::new())
}

/// Converts a string to snake case with the given options.
///
/// # Examples
///
/// ```
/// use identcase::{snake_case_with_options, Options};
///
/// let opts = Options::new().with_keep(".").separate_before(true).separate_after(false);
/// assert_eq!(snake_case_with_options("fooBar.baz", &opts), "foo_bar_.baz");
/// ```
pub fn snake_case_with_options(input: &str, opts: &Options<'_>) -> String {
    scan::convert(input, opts, STYLE)
}

/// Converts a string to snake case, splitting words only at `seps`.
#[deprecated(note = "use `snake_case_with_options` with `Options::with_separators`")]
pub fn snake_case_with_sep(input: &str, seps: &str) -> String {
    snake_case_with_options(input, &Options::new().with_separators(seps))
}

/// Converts a string to snake case, keeping the characters in `kept`.
#[deprecated(note = "use `snake_case_with_options` with `Options::with_keep`")]
pub fn snake_case_with_keep(input: &str, kept: &str) -> String {
    snake_case_with_options(input, &Options::new().with_keep(kept))
}
