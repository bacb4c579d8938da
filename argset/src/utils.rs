//! Tokenizing utilities for internal use
use core::iter::Peekable;

/// A single classified invocation token
#[derive(Debug, PartialEq, Eq)]
#[doc(hidden)]
pub enum Token<T> {
    /// A flag marker, along with the following token if that token is its value
    Flag(T, Option<T>),
    Positional(T),
}

/// Whether `arg` names a flag rather than a value
#[doc(hidden)]
pub fn is_flag_marker(arg: &str) -> bool {
    arg.starts_with('-')
}

/// Strip at most one `--`, then at most one further `-`
#[doc(hidden)]
pub fn flag_name(arg: &str) -> &str {
    let name = arg.strip_prefix("--").unwrap_or(arg);
    name.strip_prefix('-').unwrap_or(name)
}

/// An iterator that splits an iterator of arguments into flags (with their values) and
/// positionals
///
/// A non-flag token directly after a flag marker is always that flag's value, so it is consumed
/// together with the marker and never shows up as a positional.
#[doc(hidden)]
pub struct TokenIterator<T: AsRef<str>, InputIterator: Iterator<Item = T>> {
    args: Peekable<InputIterator>,
}

impl<T: AsRef<str>, InputIterator: Iterator<Item = T>> TokenIterator<T, InputIterator> {
    /// Construct from list of logical arguments
    pub fn from_args(args: InputIterator) -> Self {
        Self {
            args: args.peekable(),
        }
    }
}

impl<T: AsRef<str>, InputIterator: Iterator<Item = T>> Iterator for TokenIterator<T, InputIterator> {
    type Item = Token<T>;

    fn next(&mut self) -> Option<Token<T>> {
        let arg = self.args.next()?;

        if !is_flag_marker(arg.as_ref()) {
            return Some(Token::Positional(arg));
        }

        let value = self.args.next_if(|next| !is_flag_marker(next.as_ref()));
        Some(Token::Flag(arg, value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let sh = self.args.size_hint();
        (sh.0.div_ceil(2), sh.1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dash_stripping() {
        assert_eq!(flag_name("-x"), "x");
        assert_eq!(flag_name("--x"), "x");
        assert_eq!(flag_name("---x"), "x");
        assert_eq!(flag_name("----x"), "-x");
        assert_eq!(flag_name("-"), "");
        assert_eq!(flag_name("--"), "");
    }

    #[test]
    fn classification() {
        let tokens: Vec<_> = TokenIterator::from_args(["a", "-b", "c", "-d", "--e"].into_iter()).collect();
        assert_eq!(
            tokens,
            [
                Token::Positional("a"),
                Token::Flag("-b", Some("c")),
                Token::Flag("-d", None),
                Token::Flag("--e", None),
            ]
        );
    }
}
