//! Exit code constants for the msgtpl CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, empty input, unfilled fields in strict mode)
//! - 2: Template not found
//! - 3: Template store could not be read or written
//! - 4: Configuration could not be read or is invalid

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments or input the command refuses to accept.
pub const USER_ERROR: i32 = 1;

/// The requested template id does not exist in the store.
pub const NOT_FOUND: i32 = 2;

/// Storage failure: reading, parsing, or writing the template store.
pub const STORAGE_FAILURE: i32 = 3;

/// Configuration failure: unreadable or invalid `config.yaml`.
pub const CONFIG_FAILURE: i32 = 4;
