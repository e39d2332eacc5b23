//! Standard exit codes (BSD sysexits.h compatible) and the dispatcher's result code

/// Successful termination
pub const OK: i32 = 0;

/// Query answered but matched nothing
pub const NO_OUTPUT: i32 = 1;

/// Invoked without any command
pub const NO_ARGS: i32 = 2;

/// Command line usage error
pub const USAGE: i32 = 64;

/// Service unavailable
pub const UNAVAILABLE: i32 = 69;

/// Internal software error
pub const SOFTWARE: i32 = 70;

/// Configuration error
pub const CONFIG: i32 = 78;

/// Result of one invocation of the dispatcher.
///
/// Every failure the CLI can observe collapses into one of these values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExitStatus {
    Success,
    NoOutput,
    NonSuccessResponse,
    NoArguments,
    BadArguments,
}

impl ExitStatus {
    /// Process exit code for this status.
    pub fn code(self) -> i32 {
        match self {
            ExitStatus::Success => OK,
            ExitStatus::NoOutput => NO_OUTPUT,
            ExitStatus::NonSuccessResponse => UNAVAILABLE,
            ExitStatus::NoArguments => NO_ARGS,
            ExitStatus::BadArguments => USAGE,
        }
    }
}
