//! Schedule constants for the background jobs.

/// Roster pruning sweep.
pub mod roster {
    /// Cron expression for the inactive-member sweep.
    /// Runs daily at 05:30, well clear of both lookup sites' nightly
    /// maintenance windows.
    pub const CRON_EXPRESSION: &str = "0 30 5 * * *";
}
