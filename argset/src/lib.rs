#![forbid(unsafe_code)]
//! A minimal flag/positional argument parser
//!
//! Any token starting with `-` is a flag. If the token after it doesn't start with `-`, that
//! token is the flag's value; otherwise the flag is given without a value. Everything else is a
//! positional. Values are pulled out afterwards with typed accessors that take a default, a
//! `required` switch and a list of aliases.
//!
//! # Example
//!
//! ```
//! use argset::ArgumentSet;
//!
//! let args = ArgumentSet::from_args("build -v --name x out.txt".split_whitespace());
//! assert_eq!(args.positionals(), ["build", "out.txt"]);
//!
//! assert!(args.get_bool("verbose", &["v"]));
//! assert_eq!(args.get_string("name", true, "", &["n"]).unwrap(), "x");
//! assert_eq!(args.get_uint("jobs", false, 4, &["j"]).unwrap(), 4);
//! ```
//!
//! Errors are plain values. At the program's entry point, [OrExit] turns them into a message on
//! stderr and a non-zero exit status:
//!
//! ```no_run
//! use argset::{ArgumentSet, OrExit};
//!
//! let args = ArgumentSet::from_env();
//! let port = args.get_int("port", false, 8080, &["p"]).or_exit();
//! println!("listening on {port}");
//! ```

mod arguments;
pub mod error;
mod exit;
mod field;
#[doc(hidden)]
pub mod utils;

pub use arguments::ArgumentSet;
pub use error::{ArgsError, ConversionError};
pub use exit::OrExit;
pub use field::FlagValue;
