//! `camelCase`: words are joined without separators, and every word after the
//! first starts with an upper-case letter.

use crate::{
    ascii::Casing,
    scan::{self, Style},
    Options,
};

pub(crate) const STYLE: Style = Style {
    separator: None,
    initial: Casing::Lower,
    word_start: Casing::Upper,
    rest: Casing::Lower,
};

/// Converts a string to camel case.
///
/// Every character other than an ASCII letter or digit is treated as a word
/// separator and removed. Runs of capitals are treated as a single word, except
/// that a capital directly followed by a lower-case letter begins a new word.
///
/// # Examples
///
/// ```
/// assert_eq!(identcase::camel_case("foo_bar_baz"), "fooBarBaz");
/// assert_eq!(identcase::camel_case("parseHTTPRequest"), "parseHttpRequest");
/// assert_eq!(identcase::camel_case("Train-Case-2"), "trainCase2");
/// ```
pub fn camel_case(input: &str) -> String {
    camel_case_with_options(input, &Options::new())
}

/// Converts a string to camel case, using `opts` to decide which characters
/// separate words.
///
/// Camel case has no separator glyph, so
/// [`separate_before_non_alphabets`](Options::separate_before_non_alphabets)
/// has no effect.
///
/// # Examples
///
/// ```
/// use identcase::{camel_case_with_options, Options};
///
/// let opts = Options::new().with_keep("$");
/// assert_eq!(camel_case_with_options("foo_$bar", &opts), "foo$Bar");
///
/// let opts = opts.separate_after(false);
/// assert_eq!(camel_case_with_options("foo_$bar", &opts), "foo$bar");
/// ```
pub fn camel_case_with_options(input: &str, opts: &Options<'_>) -> String {
    scan::convert(input, opts, STYLE)
}

/// Converts a string to camel case, splitting words only at the given
/// separator characters. Other punctuation is kept.
#[deprecated(note = "use `camel_case_with_options` with `Options::with_separators`")]
pub fn camel_case_with_sep(input: &str, seps: &str) -> String {
    camel_case_with_options(input, &Options::new().with_separators(seps))
}

/// Converts a string to camel case, keeping the given characters in the
/// output.
#[deprecated(note = "use `camel_case_with_options` with `Options::with_keep`")]
pub fn camel_case_with_keep(input: &str, kept: &str) -> String {
    camel_case_with_options(input, &Options::new().with_keep(kept))
}
