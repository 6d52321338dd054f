use std::error::Error;
use std::fmt;

/// Error for invalid or missing command line arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CliErr(pub &'static str);

impl fmt::Display for CliErr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Error for CliErr {}
