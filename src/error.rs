// Grapher Error Handling

use std::fmt;
use std::io;

#[derive(Debug, Clone, PartialEq)]
pub enum GrapherError {
    // Dump format errors
    MalformedDump {
        line: usize,
        expected_fields: usize,
        found_fields: usize,
        text: String,
    },

    // Compiler invocation errors
    CompilerLaunch(String, String), // program, reason

    // Configuration errors
    Config(String, String), // path, reason

    // Command line errors
    Usage(String),

    // IO errors
    Io(String),
}

impl fmt::Display for GrapherError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            GrapherError::MalformedDump {
                line,
                expected_fields,
                found_fields,
                text,
            } => {
                write!(
                    f,
                    "Malformed dump at line {}: expected at least {} fields, found {} (unsupported dump version?): '{}'",
                    line, expected_fields, found_fields, text
                )
            }
            GrapherError::CompilerLaunch(program, reason) => {
                write!(f, "Could not run compiler '{}': {}", program, reason)
            }
            GrapherError::Config(path, reason) => {
                write!(f, "Invalid configuration in '{}': {}", path, reason)
            }
            GrapherError::Usage(msg) => write!(f, "{}", msg),
            GrapherError::Io(msg) => write!(f, "IO error: {}", msg),
        }
    }
}

impl std::error::Error for GrapherError {}

impl From<io::Error> for GrapherError {
    fn from(err: io::Error) -> Self {
        GrapherError::Io(err.to_string())
    }
}
