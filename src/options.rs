use crate::ascii;

/// Controls how non-alphabetic characters split and survive a conversion.
///
/// The [`Default`] value is the configuration used by the plain entry points
/// such as [`snake_case`](crate::snake_case): every character other than an
/// ASCII letter or digit is a separator, and a word boundary falls at the end
/// of each run of non-alphabetic characters.
///
/// # Examples
///
/// ```
/// use identcase::{kebab_case_with_options, Options};
///
/// let opts = Options::default().with_keep(".");
/// assert_eq!(kebab_case_with_options("fooBar.bazQux", &opts), "foo-bar.-baz-qux");
///
/// let opts = opts.separate_after(false);
/// assert_eq!(kebab_case_with_options("fooBar.bazQux", &opts), "foo-bar.baz-qux");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options<'a> {
    /// Treat the start of a run of kept non-alphabetic characters as a word
    /// boundary.
    ///
    /// Camel and pascal case encode boundaries in the case of the following
    /// letter, so they ignore this flag.
    pub separate_before_non_alphabets: bool,
    /// Treat the end of a run of kept non-alphabetic characters as a word
    /// boundary.
    pub separate_after_non_alphabets: bool,
    /// Characters which separate words and are dropped from the output.
    ///
    /// If non-empty, every other non-alphanumeric character is kept, and
    /// [`keep`](Options::keep) is ignored.
    pub separators: &'a str,
    /// Characters which are copied to the output rather than treated as
    /// separators. Digits are always kept.
    pub keep: &'a str,
}

impl<'a> Options<'a> {
    /// Equivalent to [`Options::default()`].
    pub const fn new() -> Self {
        Options {
            separate_before_non_alphabets: false,
            separate_after_non_alphabets: true,
            separators: "",
            keep: "",
        }
    }

    /// Sets [`separate_before_non_alphabets`](Options::separate_before_non_alphabets).
    pub const fn separate_before(mut self, yes: bool) -> Self {
        self.separate_before_non_alphabets = yes;
        self
    }

    /// Sets [`separate_after_non_alphabets`](Options::separate_after_non_alphabets).
    pub const fn separate_after(mut self, yes: bool) -> Self {
        self.separate_after_non_alphabets = yes;
        self
    }

    /// Sets the characters treated as separators.
    pub const fn with_separators(mut self, separators: &'a str) -> Self {
        self.separators = separators;
        self
    }

    /// Sets the characters kept in the output.
    pub const fn with_keep(mut self, keep: &'a str) -> Self {
        self.keep = keep;
        self
    }

    /// Whether a non-letter is copied to the output. Characters which are not
    /// kept are separators.
    pub(crate) fn is_kept(&self, ch: char) -> bool {
        if ascii::is_digit(ch) {
            true
        } else if !self.separators.is_empty() {
            !self.separators.contains(ch)
        } else if !self.keep.is_empty() {
            self.keep.contains(ch)
        } else {
            false
        }
    }
}

impl<'a> Default for Options<'a> {
    fn default() -> Self {
        Options::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_separates_all_punctuation() {
        let opts = Options::default();
        assert!(!opts.separate_before_non_alphabets);
        assert!(opts.separate_after_non_alphabets);

        assert!(opts.is_kept('0'));
        assert!(opts.is_kept('7'));
        assert!(!opts.is_kept('_'));
        assert!(!opts.is_kept('-'));
        assert!(!opts.is_kept(' '));
        assert!(!opts.is_kept('é'));
    }

    #[test]
    fn keep() {
        let opts = Options::new().with_keep("-.");
        assert!(opts.is_kept('-'));
        assert!(opts.is_kept('.'));
        assert!(opts.is_kept('3'));
        assert!(!opts.is_kept('_'));
        assert!(!opts.is_kept('/'));
    }

    #[test]
    fn separators() {
        let opts = Options::new().with_separators("_");
        assert!(!opts.is_kept('_'));
        assert!(opts.is_kept('-'));
        assert!(opts.is_kept('.'));
        assert!(opts.is_kept('é'));
    }

    #[test]
    fn separators_take_precedence_over_keep() {
        let opts = Options::new().with_separators("-").with_keep("-_");
        assert!(!opts.is_kept('-'));
        assert!(opts.is_kept('_'));
        assert!(opts.is_kept(':'));
    }

    #[test]
    fn digits_are_never_separators() {
        let opts = Options::new().with_separators("1");
        assert!(opts.is_kept('1'));
    }
}
