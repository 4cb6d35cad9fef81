use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// `try_next` or `peek` was called with no element left.
    Exhausted,
    /// `remove` is never supported, the adapters are read-only.
    UnsupportedOperation,
}

pub type R<A> = Result<A, Error>;

impl Display for Error {
    fn fmt(&self, formatter: &mut std::fmt::Formatter) -> Result<(), std::fmt::Error> {
        let message = match self {
            Error::Exhausted => "no more elements",
            Error::UnsupportedOperation => "unsupported operation",
        };
        write!(formatter, "{}", message)
    }
}

impl std::error::Error for Error {}
