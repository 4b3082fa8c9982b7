use thiserror::Error;

use crate::parse::error::{PwParseError, PwParseErrorKind};

#[derive(Debug, Error)]
pub enum PwError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("object {from} references missing object {to}")]
    DanglingReference { from: u32, to: u32 },

    #[error("expected object number {expected}, found {found}")]
    ObjectNumbering { expected: u32, found: u32 },

    #[error("page layout value `{field}` is not a finite number")]
    NonFiniteLayout { field: &'static str },

    #[error("malformed file: {0}")]
    Parse(PwParseErrorKind),
}

impl<I> From<nom::Err<PwParseError<I>>> for PwError {
    fn from(err: nom::Err<PwParseError<I>>) -> Self {
        match err {
            nom::Err::Incomplete(_) => PwError::Parse(PwParseErrorKind::Incomplete),
            nom::Err::Error(e) | nom::Err::Failure(e) => PwError::Parse(e.kind),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nom_errors_keep_their_kind() {
        let err: PwError =
            nom::Err::Failure(PwParseError::new((), PwParseErrorKind::StreamLength)).into();
        assert!(matches!(err, PwError::Parse(PwParseErrorKind::StreamLength)));

        let err: PwError = nom::Err::<PwParseError<()>>::Incomplete(nom::Needed::Unknown).into();
        assert!(matches!(err, PwError::Parse(PwParseErrorKind::Incomplete)));
    }

    #[test]
    fn messages() {
        let err = PwError::DanglingReference { from: 3, to: 9 };
        assert_eq!(err.to_string(), "object 3 references missing object 9");
    }
}
