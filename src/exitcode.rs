//! Standard exit codes (BSD sysexits.h compatible)

/// Successful termination, also used when the user cancels
pub const OK: i32 = 0;

/// Cannot open input (not inside a git work tree)
pub const NOINPUT: i32 = 66;

/// Service unavailable (required external tool missing)
pub const UNAVAILABLE: i32 = 69;

/// Internal software error (external tool failed)
pub const SOFTWARE: i32 = 70;

/// Input/output error
pub const IOERR: i32 = 74;

/// Configuration error
pub const CONFIG: i32 = 78;
