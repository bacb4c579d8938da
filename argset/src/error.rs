//! Errors returned by the typed accessors
use core::num::{ParseFloatError, ParseIntError};
use derive_more::{Display, From};
use std::error::Error;

/// Why a flag value could not be converted into the requested type
#[derive(Debug, Clone, PartialEq, Eq, Display, From)]
pub enum ConversionError {
    /// Not an integer, or out of range for the requested type
    #[from]
    #[display("{_0}")]
    ParseInt(ParseIntError),
    /// Not a floating point number
    #[from]
    #[display("{_0}")]
    ParseFloat(ParseFloatError),
    /// An unsigned value was written with a leading `+` or `-`
    #[display("unsigned value cannot carry a sign")]
    SignedUnsigned,
    /// A finite number too large to be represented by the requested type
    #[display("value out of range")]
    OutOfRange,
}

impl Error for ConversionError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::ParseInt(err) => Some(err),
            Self::ParseFloat(err) => Some(err),
            Self::SignedUnsigned | Self::OutOfRange => None,
        }
    }
}

/// Error returned by the typed accessors of [ArgumentSet](crate::ArgumentSet)
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ArgsError {
    /// Neither the key nor any of its aliases was given
    #[display("flag <{key}> is required")]
    MissingRequiredFlag {
        /// Primary key that was looked up
        key: String,
    },
    /// The key was given, but without a value
    #[display("flag <{key}> is provided but has no value")]
    FlagPresentWithoutValue {
        /// Key (or alias) that matched
        key: String,
    },
    /// The value could not be parsed as the requested type
    #[display("cannot convert value [{value}] to {expected} (flag: <{key}>): {source}")]
    TypeConversionFailure {
        /// Primary key that was looked up
        key: String,
        /// Value as it was given
        value: String,
        /// Name of the requested type
        expected: &'static str,
        /// Underlying parse error
        source: ConversionError,
    },
}

impl Error for ArgsError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::TypeConversionFailure { source, .. } => Some(source),
            _ => None,
        }
    }
}
