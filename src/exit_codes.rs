//! Exit code constants for the tinytpl CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, bad config, engine misuse)
//! - 2: Check failure (unresolved placeholders)
//! - 3: I/O failure reading the template or writing output
//! - 4: Resource exhaustion (output buffer allocation failed)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, invalid configuration, or engine misuse.
pub const USER_ERROR: i32 = 1;

/// `check` found placeholders that do not resolve against the values.
pub const CHECK_FAILURE: i32 = 2;

/// Reading the template or writing the output failed.
pub const IO_FAILURE: i32 = 3;

/// An output buffer could not be allocated.
pub const RESOURCE_EXHAUSTED: i32 = 4;
