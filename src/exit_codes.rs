//! Exit code constants for the ciftify-env CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, invalid state)
//! - 2: Configuration failure (missing or unparseable config file)
//! - 3: Dependency failure (external tool or required directory not found)
//! - 4: Command failure (subprocess could not run or exited non-zero)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments or invalid state.
pub const USER_ERROR: i32 = 1;

/// Configuration failure: config file unreadable, unparseable, or invalid.
pub const CONFIG_FAILURE: i32 = 2;

/// Dependency failure: FSL, MSM, data or work directory could not be located.
pub const DEPENDENCY_FAILURE: i32 = 3;

/// Command failure: a subprocess could not be spawned or reported failure.
pub const COMMAND_FAILURE: i32 = 4;
