use crate::error::ArgsError;
use crate::field::FlagValue;
use crate::utils::{flag_name, Token, TokenIterator};
use std::collections::HashMap;
use tracing::{debug, trace};

/// Positionals and flags parsed out of a list of invocation arguments
///
/// Built once with [ArgumentSet::from_args] or [ArgumentSet::from_env] and read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArgumentSet {
    positionals: Vec<String>,
    flags: HashMap<String, String>,
}

impl ArgumentSet {
    /// Construct from an iterator of arguments, not including the program name
    ///
    /// This never fails. A flag given twice keeps its last value.
    pub fn from_args<T: AsRef<str>>(args: impl IntoIterator<Item = T>) -> Self {
        let mut set = Self::default();

        for token in TokenIterator::from_args(args.into_iter()) {
            match token {
                Token::Flag(marker, value) => {
                    let name = flag_name(marker.as_ref()).to_owned();
                    let value = value.map(|v| v.as_ref().to_owned()).unwrap_or_default();
                    trace!(flag = %name, value = %value, "classified flag");
                    set.flags.insert(name, value);
                }
                Token::Positional(arg) => {
                    trace!(positional = arg.as_ref(), "classified positional");
                    set.positionals.push(arg.as_ref().to_owned());
                }
            }
        }

        set
    }

    /// Convenience function to parse from [std::env::args], skipping the program name
    pub fn from_env() -> Self {
        Self::from_args(std::env::args().skip(1))
    }

    /// Positional arguments in the order they were given
    pub fn positionals(&self) -> &[String] {
        &self.positionals
    }

    /// All flags, keyed by name without leading dashes
    ///
    /// Flags given without a value map to the empty string.
    pub fn flags(&self) -> &HashMap<String, String> {
        &self.flags
    }

    /// Raw value of a single flag, if it was given
    pub fn flag(&self, name: &str) -> Option<&str> {
        self.flags.get(name).map(String::as_str)
    }

    /// Look up `key`, then each alias in order
    ///
    /// Returns the first matching key with its value. A match with an empty value is an error.
    fn lookup(&self, key: &str, aliases: &[&str]) -> Result<Option<(&str, &str)>, ArgsError> {
        let Some((name, value)) = core::iter::once(&key)
            .chain(aliases)
            .find_map(|k| self.flags.get_key_value(*k))
        else {
            return Ok(None);
        };

        if value.is_empty() {
            return Err(ArgsError::FlagPresentWithoutValue { key: name.clone() });
        }

        Ok(Some((name.as_str(), value.as_str())))
    }

    /// Get the value of `key` (or the first alias given) converted to `T`
    ///
    /// When no key matches, this returns `default`, or [ArgsError::MissingRequiredFlag] if
    /// `required` is set. The default is never used in place of a value that fails to parse.
    ///
    /// ```
    /// use argset::ArgumentSet;
    ///
    /// let args = ArgumentSet::from_args("-j 8".split_whitespace());
    /// let jobs: u16 = args.get("jobs", false, 1, &["j"]).unwrap();
    /// assert_eq!(jobs, 8);
    /// ```
    pub fn get<T: FlagValue>(
        &self,
        key: &str,
        required: bool,
        default: T,
        aliases: &[&str],
    ) -> Result<T, ArgsError> {
        match self.lookup(key, aliases)? {
            Some((name, value)) => {
                if name != key {
                    debug!(key, alias = name, "matched alias");
                }
                T::parse_value(value).map_err(|source| ArgsError::TypeConversionFailure {
                    key: key.to_owned(),
                    value: value.to_owned(),
                    expected: T::EXPECTED,
                    source,
                })
            }
            None if required => Err(ArgsError::MissingRequiredFlag {
                key: key.to_owned(),
            }),
            None => {
                debug!(key, "flag not given, using default");
                Ok(default)
            }
        }
    }

    /// Get a flag's value verbatim
    pub fn get_string(
        &self,
        key: &str,
        required: bool,
        default: &str,
        aliases: &[&str],
    ) -> Result<String, ArgsError> {
        self.get(key, required, default.to_owned(), aliases)
    }

    /// Get a flag's value as a signed integer
    pub fn get_int(
        &self,
        key: &str,
        required: bool,
        default: i64,
        aliases: &[&str],
    ) -> Result<i64, ArgsError> {
        self.get(key, required, default, aliases)
    }

    /// Get a flag's value as an unsigned integer
    ///
    /// Values with a leading sign are rejected, `-0` and `+1` included.
    pub fn get_uint(
        &self,
        key: &str,
        required: bool,
        default: u64,
        aliases: &[&str],
    ) -> Result<u64, ArgsError> {
        self.get(key, required, default, aliases)
    }

    /// Get a flag's value as a floating point number
    pub fn get_float(
        &self,
        key: &str,
        required: bool,
        default: f64,
        aliases: &[&str],
    ) -> Result<f64, ArgsError> {
        self.get(key, required, default, aliases)
    }

    /// Whether `key` or any of its aliases was given, with or without a value
    pub fn get_bool(&self, key: &str, aliases: &[&str]) -> bool {
        core::iter::once(&key)
            .chain(aliases)
            .any(|k| self.flags.contains_key(*k))
    }
}

impl<T: AsRef<str>> FromIterator<T> for ArgumentSet {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_args(iter)
    }
}
