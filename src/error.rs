/// A enum that contains the different types of errors that the library returns as part of Result's.
#[non_exhaustive]
#[derive(Debug)]
pub enum Error {
    /// A character class with an empty pool was given a nonzero quota.
    EmptyPool,
    /// A character class was constructed with a minimum above its maximum.
    InvalidQuota { min: usize, max: usize },
    Generic(&'static str),
    GenericDyn(String),
}

impl From<&str> for Error {
    fn from(err: &str) -> Self {
        Self::GenericDyn(err.to_owned())
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::EmptyPool => write!(f, "character class has an empty pool but a nonzero quota"),
            Self::InvalidQuota { min, max } => {
                write!(f, "character class minimum {min} exceeds maximum {max}")
            }
            Self::Generic(err) => write!(f, "{err}"),
            Self::GenericDyn(err) => write!(f, "{err}"),
        }
    }
}

/// Convenience type for Results
pub type Result<T> = std::result::Result<T, Error>;
