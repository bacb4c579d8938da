use crate::error::ArgsError;
use std::path::Path;

/// Turn accessor errors into process termination
///
/// Meant for the program's entry point, where a malformed invocation should stop everything
/// before any work begins.
pub trait OrExit<T> {
    /// Unwrap the value, or print the error to stderr and exit with status 1
    fn or_exit(self) -> T;
}

impl<T> OrExit<T> for Result<T, ArgsError> {
    fn or_exit(self) -> T {
        match self {
            Ok(val) => val,
            Err(err) => {
                eprintln!("{}: error: {err}", program_name());
                std::process::exit(1);
            }
        }
    }
}

fn program_name() -> String {
    let arg0 = std::env::args_os().next();
    arg0.as_deref()
        .and_then(|path| Path::new(path).file_name())
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| env!("CARGO_PKG_NAME").to_owned())
}
