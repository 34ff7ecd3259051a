use miette::Diagnostic;
use thiserror::Error;

/// An error returned when parsing a [`Case`](crate::Case) from a string.
#[derive(Debug, Clone, PartialEq, Eq, Diagnostic, Error)]
#[error(transparent)]
#[diagnostic(transparent)]
pub struct Error {
    kind: ErrorKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Diagnostic, Error)]
pub(crate) enum ErrorKind {
    #[error("case style name is empty")]
    #[diagnostic(
        code(identcase::empty_case_name),
        help("expected one of: camel, pascal, snake, kebab, macro, cobol, train")
    )]
    EmptyCaseName,
    #[error("unknown case style '{name}'")]
    #[diagnostic(
        code(identcase::unknown_case),
        help("expected one of: camel, pascal, snake, kebab, macro, cobol, train")
    )]
    UnknownCase { name: String },
}

impl Error {
    pub(crate) fn new(kind: ErrorKind) -> Self {
        Error { kind }
    }

    pub(crate) fn unknown_case(name: impl Into<String>) -> Self {
        Error::new(ErrorKind::UnknownCase { name: name.into() })
    }

    #[cfg(test)]
    pub(crate) fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    /// The text which failed to parse.
    pub fn name(&self) -> &str {
        match &self.kind {
            ErrorKind::EmptyCaseName => "",
            ErrorKind::UnknownCase { name } => name,
        }
    }
}
