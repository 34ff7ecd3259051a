use std::{fmt, str::FromStr};

use crate::{
    camel, cobol,
    error::{Error, ErrorKind},
    kebab, macro_case, pascal, scan, snake, train, Options,
};

/// One of the supported identifier case conventions.
///
/// This allows the output style to be chosen at runtime, for example from
/// configuration or a command line argument.
///
/// # Examples
///
/// ```
/// use identcase::Case;
///
/// let case: Case = "kebab-case".parse().unwrap();
/// assert_eq!(case, Case::Kebab);
/// assert_eq!(case.convert("fooBarBaz"), "foo-bar-baz");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Case {
    /// `camelCase`
    Camel,
    /// `PascalCase`
    Pascal,
    /// `snake_case`
    Snake,
    /// `kebab-case`
    Kebab,
    /// `MACRO_CASE`
    Macro,
    /// `COBOL-CASE`
    Cobol,
    /// `Train-Case`
    Train,
}

impl Case {
    /// Every case convention, in a fixed order.
    pub const ALL: [Case; 7] = [
        Case::Camel,
        Case::Pascal,
        Case::Snake,
        Case::Kebab,
        Case::Macro,
        Case::Cobol,
        Case::Train,
    ];

    /// Converts `input` to this case with the default [`Options`].
    pub fn convert(self, input: &str) -> String {
        self.convert_with_options(input, &Options::new())
    }

    /// Converts `input` to this case.
    pub fn convert_with_options(self, input: &str, opts: &Options<'_>) -> String {
        let style = match self {
            Case::Camel => camel::STYLE,
            Case::Pascal => pascal::STYLE,
            Case::Snake => snake::STYLE,
            Case::Kebab => kebab::STYLE,
            Case::Macro => macro_case::STYLE,
            Case::Cobol => cobol::STYLE,
            Case::Train => train::STYLE,
        };
        scan::convert(input, opts, style)
    }

    /// The lower-case name of this case, as accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            Case::Camel => "camel",
            Case::Pascal => "pascal",
            Case::Snake => "snake",
            Case::Kebab => "kebab",
            Case::Macro => "macro",
            Case::Cobol => "cobol",
            Case::Train => "train",
        }
    }
}

impl fmt::Display for Case {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Case {
    type Err = Error;

    /// Parses a case name, ignoring ASCII case and an optional `case` suffix,
    /// so `"snake"`, `"SNAKE_CASE"` and `"snakeCase"` are all accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(Error::new(ErrorKind::EmptyCaseName));
        }

        let lower = trimmed.to_ascii_lowercase();
        let name = ["_case", "-case", "case"]
            .iter()
            .find_map(|suffix| lower.strip_suffix(suffix))
            .unwrap_or(lower.as_str());

        match name {
            "camel" | "lower_camel" => Ok(Case::Camel),
            "pascal" | "upper_camel" => Ok(Case::Pascal),
            "snake" => Ok(Case::Snake),
            "kebab" => Ok(Case::Kebab),
            "macro" | "upper" | "screaming" | "screaming_snake" => Ok(Case::Macro),
            "cobol" => Ok(Case::Cobol),
            "train" | "header" => Ok(Case::Train),
            _ => Err(Error::unknown_case(trimmed)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_names() {
        for case in Case::ALL {
            assert_eq!(case.name().parse::<Case>(), Ok(case));
            assert_eq!(case.to_string().parse::<Case>(), Ok(case));
        }
    }

    #[test]
    fn parse_suffixed_names() {
        assert_eq!("camelCase".parse::<Case>(), Ok(Case::Camel));
        assert_eq!("PascalCase".parse::<Case>(), Ok(Case::Pascal));
        assert_eq!("snake_case".parse::<Case>(), Ok(Case::Snake));
        assert_eq!("kebab-case".parse::<Case>(), Ok(Case::Kebab));
        assert_eq!("MACRO_CASE".parse::<Case>(), Ok(Case::Macro));
        assert_eq!("COBOL-CASE".parse::<Case>(), Ok(Case::Cobol));
        assert_eq!("Train-Case".parse::<Case>(), Ok(Case::Train));
        assert_eq!(" snake ".parse::<Case>(), Ok(Case::Snake));
    }

    #[test]
    fn parse_aliases() {
        assert_eq!("SCREAMING_SNAKE_CASE".parse::<Case>(), Ok(Case::Macro));
        assert_eq!("upper".parse::<Case>(), Ok(Case::Macro));
        assert_eq!("lower_camel".parse::<Case>(), Ok(Case::Camel));
        assert_eq!("upper_camel_case".parse::<Case>(), Ok(Case::Pascal));
        assert_eq!("header".parse::<Case>(), Ok(Case::Train));
    }

    #[test]
    fn parse_errors() {
        let err = "".parse::<Case>().unwrap_err();
        assert_eq!(err.kind(), &ErrorKind::EmptyCaseName);
        assert_eq!(err.name(), "");
        assert_eq!(err.to_string(), "case style name is empty");

        let err = "title".parse::<Case>().unwrap_err();
        assert_eq!(
            err.kind(),
            &ErrorKind::UnknownCase {
                name: "title".to_owned()
            }
        );
        assert_eq!(err.name(), "title");
        assert_eq!(err.to_string(), "unknown case style 'title'");

        assert_eq!("case".parse::<Case>(), Err(Error::unknown_case("case")));
        assert_eq!("snake__case".parse::<Case>(), Err(Error::unknown_case("snake__case")));
    }

    #[test]
    fn convert_dispatches_to_style() {
        assert_eq!(Case::Camel.convert("foo_bar"), "fooBar");
        assert_eq!(Case::Pascal.convert("foo_bar"), "FooBar");
        assert_eq!(Case::Snake.convert("fooBar"), "foo_bar");
        assert_eq!(Case::Kebab.convert("fooBar"), "foo-bar");
        assert_eq!(Case::Macro.convert("fooBar"), "FOO_BAR");
        assert_eq!(Case::Cobol.convert("fooBar"), "FOO-BAR");
        assert_eq!(Case::Train.convert("fooBar"), "Foo-Bar");
    }
}
