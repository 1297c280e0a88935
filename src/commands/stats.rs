//! Statistics command

use crate::output::print_stats;
use crate::stats::{KeyValueStore, StatsTracker};
use anyhow::Result;
use colored::Colorize;

/// Print the persisted statistics, or wipe them when `reset` is set
///
/// # Errors
///
/// Returns an error if a reset cannot be saved.
pub fn run_stats<S: KeyValueStore>(mut tracker: StatsTracker<S>, reset: bool) -> Result<()> {
    if reset {
        tracker.reset()?;
        println!("{}", "Statistics reset.".green());
        return Ok(());
    }

    print_stats(tracker.stats(), &tracker.distribution_bars());
    Ok(())
}
