//! Process exit codes. Part of the CLI contract.

pub const OK: i32 = 0;
/// Score below `min_score`.
pub const BELOW_THRESHOLD: i32 = 1;
/// Unreadable config or dataset, misaligned or empty answers.
pub const CONFIG_ERROR: i32 = 2;
