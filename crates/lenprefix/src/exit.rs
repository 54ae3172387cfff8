use std::fmt;
use std::io;

use lenprefix_frame::FrameError;

pub const SUCCESS: i32 = 0;
pub const FAILURE: i32 = 1;
pub const PERMISSION_DENIED: i32 = 50;
// EX_OSERR from sysexits.h.
pub const OUT_OF_MEMORY: i32 = 71;

pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug)]
pub struct CliError {
    pub code: i32,
    pub message: String,
}

impl CliError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

pub fn io_error(context: &str, err: &io::Error) -> CliError {
    let code = match err.kind() {
        io::ErrorKind::PermissionDenied => PERMISSION_DENIED,
        io::ErrorKind::OutOfMemory => OUT_OF_MEMORY,
        _ => FAILURE,
    };
    CliError::new(code, format!("{context}: {err}"))
}

pub fn frame_error(err: FrameError) -> CliError {
    match &err {
        FrameError::OutOfMemory(_) => CliError::new(OUT_OF_MEMORY, err.to_string()),
        FrameError::Read(source) => io_error("reading input failed", source),
        FrameError::Write(source) => io_error("writing output failed", source),
    }
}
