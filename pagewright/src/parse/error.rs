use std::fmt::Display;

use nom::error::{ErrorKind, ParseError};

use super::Span;
use crate::pdf::TrailerError;

/// What went wrong while reading a file back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PwParseErrorKind {
    InvalidTrailer(TrailerError),
    StartxrefInvalid,
    BackwardSearchNotFound,
    /// An xref entry that can't be represented or points at the wrong object.
    XrefInvalid,
    /// A stream without a usable `Length` entry.
    StreamLength,
    Incomplete,
    Nom(ErrorKind),
}

impl Display for PwParseErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidTrailer(err) => write!(f, "invalid trailer ({:?})", err),
            Self::StartxrefInvalid => f.write_str("startxref is not a usable offset"),
            Self::BackwardSearchNotFound => f.write_str("keyword not found near the end of the file"),
            Self::XrefInvalid => f.write_str("xref table does not match the objects"),
            Self::StreamLength => f.write_str("stream without a valid Length"),
            Self::Incomplete => f.write_str("unexpected end of input"),
            Self::Nom(kind) => write!(f, "syntax error ({})", kind.description()),
        }
    }
}

impl From<TrailerError> for PwParseErrorKind {
    fn from(err: TrailerError) -> Self {
        PwParseErrorKind::InvalidTrailer(err)
    }
}

/// nom error carrying a [`PwParseErrorKind`]. Errors appended by combinators
/// point back at the error they wrap through `from`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PwParseError<I> {
    pub input: I,
    pub kind: PwParseErrorKind,
    pub from: Option<Box<Self>>,
}

impl<I> PwParseError<I> {
    pub fn new(input: I, kind: impl Into<PwParseErrorKind>) -> Self {
        Self {
            input,
            kind: kind.into(),
            from: None,
        }
    }

    /// Recoverable error, `alt` and friends go on with the next branch.
    pub fn error(input: I, kind: impl Into<PwParseErrorKind>) -> nom::Err<Self> {
        nom::Err::Error(Self::new(input, kind))
    }

    /// Unrecoverable error, parsing stops here.
    pub fn failure(input: I, kind: impl Into<PwParseErrorKind>) -> nom::Err<Self> {
        nom::Err::Failure(Self::new(input, kind))
    }

    /// The innermost error of the chain.
    pub fn root_cause(&self) -> &Self {
        let mut cause = self;
        while let Some(from) = &cause.from {
            cause = from;
        }
        cause
    }
}

impl PwParseError<Span<'_>> {
    /// Byte offset in the file at which the error was raised.
    pub(crate) fn offset(&self) -> usize {
        self.input.location_offset()
    }
}

impl<I> ParseError<I> for PwParseError<I> {
    fn from_error_kind(input: I, kind: ErrorKind) -> Self {
        Self::new(input, PwParseErrorKind::Nom(kind))
    }

    fn append(input: I, kind: ErrorKind, other: Self) -> Self {
        Self {
            input,
            kind: PwParseErrorKind::Nom(kind),
            from: Some(Box::new(other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_cause_follows_the_chain() {
        let inner = PwParseError::new("inner", PwParseErrorKind::StreamLength);
        let outer = PwParseError::append("outer", ErrorKind::Alt, inner.clone());
        assert_eq!(outer.kind, PwParseErrorKind::Nom(ErrorKind::Alt));
        assert_eq!(outer.root_cause(), &inner);
        assert_eq!(inner.root_cause(), &inner);
    }

    #[test]
    fn trailer_errors_convert() {
        let err = PwParseError::new((), TrailerError::MissingRoot);
        assert_eq!(err.kind, PwParseErrorKind::InvalidTrailer(TrailerError::MissingRoot));
    }

    #[test]
    fn failure_is_not_recoverable() {
        assert!(matches!(
            PwParseError::failure((), PwParseErrorKind::XrefInvalid),
            nom::Err::Failure(_)
        ));
        assert!(matches!(
            PwParseError::error((), PwParseErrorKind::XrefInvalid),
            nom::Err::Error(_)
        ));
    }

    #[test]
    fn kinds_describe_themselves() {
        assert_eq!(
            PwParseErrorKind::StreamLength.to_string(),
            "stream without a valid Length"
        );
    }
}
