use std::fmt::{Display, Formatter};

/// The error code of a conversion, with the errno values of the C conversion functions.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(i32)]
pub enum Errc {
    Ok = 0,
    /// A precondition on the arguments was violated, nothing was written
    InvalidArgument = 22,
    /// The destination is too small for the text, nothing was written
    ResultOutOfRange = 34,
}

impl Errc {
    pub const fn as_errno(self) -> i32 {
        self as i32
    }

    pub const fn is_ok(self) -> bool {
        matches!(self, Self::Ok)
    }
}

impl Display for Errc {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ok => write!(f, "no error"),
            Self::InvalidArgument => write!(f, "invalid argument"),
            Self::ResultOutOfRange => write!(f, "result out of range"),
        }
    }
}

impl std::error::Error for Errc {}

/// Outcome of a conversion.
///
/// `ptr` is an index into the destination buffer: one past the last written byte on success, the
/// upper bound of the destination range on failure.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ToCharsResult {
    pub ptr: usize,
    pub ec: Errc,
}

impl ToCharsResult {
    pub const fn new(ptr: usize, ec: Errc) -> Self {
        Self { ptr, ec }
    }

    pub const fn is_ok(&self) -> bool {
        self.ec.is_ok()
    }

    /// The end of the written text, or the error code.
    pub fn into_result(self) -> Result<usize, Errc> {
        match self.ec {
            Errc::Ok => Ok(self.ptr),
            ec => Err(ec),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_errno_values() {
        assert_eq!(Errc::Ok.as_errno(), 0);
        assert_eq!(Errc::InvalidArgument.as_errno(), 22);
        assert_eq!(Errc::ResultOutOfRange.as_errno(), 34);
    }

    #[test]
    fn test_into_result() {
        assert_eq!(ToCharsResult::new(3, Errc::Ok).into_result(), Ok(3));
        assert_eq!(
            ToCharsResult::new(8, Errc::ResultOutOfRange).into_result(),
            Err(Errc::ResultOutOfRange)
        );
        assert_ne!(
            ToCharsResult::new(8, Errc::InvalidArgument),
            ToCharsResult::new(8, Errc::ResultOutOfRange)
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde() {
        let res = ToCharsResult::new(4, Errc::ResultOutOfRange);
        let json = serde_json::to_string(&res).unwrap();
        let back: ToCharsResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back, res);
    }
}
