use std::fmt::{Display, Formatter};

use crate::to_chars::Errc;

#[derive(Debug, Clone, Eq, PartialEq)]
pub enum ErrorKind {
    /// The arguments of the conversion were not valid
    InvalidArgument(InvalidArgumentError),
    /// The destination range can not hold the text
    ResultOutOfRange { required: usize, available: usize },
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Error {
    kind: ErrorKind,
}

impl Error {
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    /// The error code reported by the non failing entry points for this error
    pub fn errc(&self) -> Errc {
        match self.kind {
            ErrorKind::InvalidArgument(_) => Errc::InvalidArgument,
            ErrorKind::ResultOutOfRange { .. } => Errc::ResultOutOfRange,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.kind() {
            ErrorKind::InvalidArgument(err) => write!(f, "Invalid argument: {err}"),
            ErrorKind::ResultOutOfRange {
                required,
                available,
            } => write!(
                f,
                "Result out of range: {required} characters are required \
                but the destination holds {available}"
            ),
        }
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Self { kind }
    }
}

impl From<InvalidArgumentError> for Error {
    fn from(value: InvalidArgumentError) -> Self {
        let kind = ErrorKind::InvalidArgument(value);
        Self { kind }
    }
}

impl std::error::Error for Error {}

/// Error returned when the arguments of a conversion are invalid
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum InvalidArgumentError {
    /// The lower bound of the destination is greater than its upper bound
    WrongOrder { first: usize, last: usize },
    /// The upper bound of the destination is past the end of the buffer
    RangeTooBig { last: usize, len: usize },
    /// The base is not in `2..=36`
    UnsupportedBase(u32),
}

impl Display for InvalidArgumentError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::WrongOrder { first, last } => write!(
                f,
                "The lower bound {first} is greater than the upper bound {last}"
            ),
            Self::RangeTooBig { last, len } => write!(
                f,
                "The upper bound {last} is past the end of a buffer of length {len}"
            ),
            Self::UnsupportedBase(base) => {
                write!(f, "The base {base} is not between 2 and 36 (inclusive)")
            }
        }
    }
}

impl std::error::Error for InvalidArgumentError {}
