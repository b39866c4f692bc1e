//! Debugging feature flags.
//!
//! Toggle individual diagnostics here; keep them `false` by default so release
//! builds remain quiet.

/// Emit row counts and column positions while loading the spread log.
pub const PRINT_LOAD_SUMMARY: bool = false;

/// Emit each hour's session/quality classification as the hourly table is built.
pub const PRINT_HOURLY_CLASSIFICATION: bool = false;

/// Emit session windows that matched no observations (they are left out of the report).
pub const PRINT_EMPTY_SESSIONS: bool = true;
