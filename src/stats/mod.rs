//! Cross-session statistics
//!
//! The record is stored as JSON under [`STATS_KEY`] in an injected
//! [`KeyValueStore`]. Anything that cannot be read back as a consistent record
//! is replaced by zeroed statistics rather than reported as an error.

mod store;

pub use store::{FileStore, KeyValueStore, MemoryStore, StoreError};

use crate::game::{GameResult, MAX_ATTEMPTS};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Store key for the statistics record
pub const STATS_KEY: &str = "wordle-stats";

/// Errors saving statistics
#[derive(Debug, thiserror::Error)]
pub enum StatsError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("failed to encode statistics: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Aggregate outcomes across all finished games
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameStats {
    pub games_played: u32,
    pub wins: u32,
    pub current_streak: u32,
    pub max_streak: u32,
    /// Wins keyed by attempts used, always exactly the keys 1..=6
    pub guess_distribution: BTreeMap<u8, u32>,
}

impl Default for GameStats {
    fn default() -> Self {
        Self {
            games_played: 0,
            wins: 0,
            current_streak: 0,
            max_streak: 0,
            guess_distribution: (1..=MAX_ATTEMPTS as u8).map(|n| (n, 0)).collect(),
        }
    }
}

impl GameStats {
    /// Check the invariants a loaded record must satisfy
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        let keys_ok = self
            .guess_distribution
            .keys()
            .copied()
            .eq(1..=MAX_ATTEMPTS as u8);
        let distributed: u64 = self.guess_distribution.values().map(|&n| u64::from(n)).sum();

        keys_ok
            && self.wins <= self.games_played
            && self.current_streak <= self.max_streak
            && distributed <= u64::from(self.wins)
    }

    /// Wins as a rounded percentage of games played; 0 before any game
    #[must_use]
    pub fn win_percentage(&self) -> u8 {
        if self.games_played == 0 {
            return 0;
        }
        let wins = u64::from(self.wins);
        let games = u64::from(self.games_played);
        ((wins * 100 + games / 2) / games) as u8
    }

    /// Wins that took exactly `attempts` rows
    #[must_use]
    pub fn wins_in(&self, attempts: u8) -> u32 {
        self.guess_distribution.get(&attempts).copied().unwrap_or(0)
    }
}

/// One row of the guess distribution chart
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DistributionBar {
    pub attempts: u8,
    pub count: u32,
    /// Bar length relative to the largest count, 0..=100
    pub percent: u8,
    /// The most recent game was won in this many attempts
    pub highlighted: bool,
}

/// Loads, updates and saves [`GameStats`] through a store
#[derive(Debug)]
pub struct StatsTracker<S: KeyValueStore> {
    store: S,
    stats: GameStats,
    last_win: Option<u8>,
}

impl<S: KeyValueStore> StatsTracker<S> {
    /// Read statistics from `store`, falling back to zeroed statistics
    pub fn load(store: S) -> Self {
        let stats = match store.get(STATS_KEY) {
            Ok(Some(text)) => match serde_json::from_str::<GameStats>(&text) {
                Ok(stats) if stats.is_consistent() => stats,
                Ok(_) => {
                    log::warn!("stored statistics are inconsistent; starting fresh");
                    GameStats::default()
                }
                Err(e) => {
                    log::warn!("stored statistics are unreadable ({e}); starting fresh");
                    GameStats::default()
                }
            },
            Ok(None) => GameStats::default(),
            Err(e) => {
                log::warn!("could not read statistics: {e}");
                GameStats::default()
            }
        };

        Self {
            store,
            stats,
            last_win: None,
        }
    }

    /// Write the current statistics to the store
    ///
    /// # Errors
    /// Returns `StatsError` if encoding or the store write fails.
    pub fn save(&mut self) -> Result<(), StatsError> {
        let json = serde_json::to_string(&self.stats)?;
        self.store.set(STATS_KEY, &json)?;
        log::debug!("statistics saved");
        Ok(())
    }

    /// Fold one finished game into the statistics
    ///
    /// # Panics
    /// If `attempts_used` is outside 1..=6.
    pub fn record_result(&mut self, won: bool, attempts_used: u8) {
        assert!(
            (1..=MAX_ATTEMPTS as u8).contains(&attempts_used),
            "attempts_used out of range: {attempts_used}"
        );

        // Counters stop at u32::MAX; a saturated win count freezes the
        // distribution too so it never sums past `wins`.
        let stats = &mut self.stats;
        stats.games_played = stats.games_played.saturating_add(1);
        if won {
            if stats.wins < u32::MAX {
                stats.wins += 1;
                *stats.guess_distribution.entry(attempts_used).or_insert(0) += 1;
            }
            stats.current_streak = stats.current_streak.saturating_add(1);
            stats.max_streak = stats.max_streak.max(stats.current_streak);
            self.last_win = Some(attempts_used);
        } else {
            stats.current_streak = 0;
            self.last_win = None;
        }
    }

    /// Fold a [`GameResult`] into the statistics
    pub fn record(&mut self, result: &GameResult) {
        self.record_result(result.won, result.attempts_used);
    }

    /// Zero the statistics and persist the empty record
    ///
    /// # Errors
    /// Returns `StatsError` if the save fails.
    pub fn reset(&mut self) -> Result<(), StatsError> {
        self.stats = GameStats::default();
        self.last_win = None;
        self.save()
    }

    /// Forget which bar the last win highlights, e.g. when a new game starts
    pub const fn clear_highlight(&mut self) {
        self.last_win = None;
    }

    /// Guess distribution scaled for bar rendering
    #[must_use]
    pub fn distribution_bars(&self) -> Vec<DistributionBar> {
        let max = self
            .stats
            .guess_distribution
            .values()
            .copied()
            .max()
            .unwrap_or(0)
            .max(1);

        self.stats
            .guess_distribution
            .iter()
            .map(|(&attempts, &count)| DistributionBar {
                attempts,
                count,
                percent: (u64::from(count) * 100 / u64::from(max)) as u8,
                highlighted: self.last_win == Some(attempts),
            })
            .collect()
    }

    #[must_use]
    pub const fn stats(&self) -> &GameStats {
        &self.stats
    }

    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tracker() -> StatsTracker<MemoryStore> {
        StatsTracker::load(MemoryStore::new())
    }

    #[test]
    fn empty_store_gives_zeroed_stats() {
        let t = tracker();
        assert_eq!(t.stats(), &GameStats::default());
        assert_eq!(t.stats().guess_distribution.len(), 6);
        assert_eq!(t.stats().win_percentage(), 0);
    }

    #[test]
    fn wins_and_losses_are_counted() {
        let mut t = tracker();
        t.record_result(true, 3);
        t.record_result(true, 4);
        t.record_result(false, 6);
        t.record_result(true, 3);

        let s = t.stats();
        assert_eq!(s.games_played, 4);
        assert_eq!(s.wins, 3);
        assert_eq!(s.wins_in(3), 2);
        assert_eq!(s.wins_in(4), 1);
        assert_eq!(s.guess_distribution.values().sum::<u32>(), s.wins);
        assert_eq!(s.win_percentage(), 75);
        assert!(s.is_consistent());
    }

    #[test]
    fn loss_resets_current_but_keeps_max_streak() {
        let mut t = tracker();
        for _ in 0..4 {
            t.record_result(true, 2);
        }
        t.record_result(false, 6);
        assert_eq!(t.stats().current_streak, 0);
        assert_eq!(t.stats().max_streak, 4);

        t.record_result(true, 5);
        assert_eq!(t.stats().current_streak, 1);
        assert_eq!(t.stats().max_streak, 4);
    }

    #[test]
    fn win_percentage_rounds_half_up() {
        let stats = GameStats {
            games_played: 8,
            wins: 5,
            ..GameStats::default()
        };
        // 62.5%
        assert_eq!(stats.win_percentage(), 63);
    }

    #[test]
    #[should_panic(expected = "attempts_used out of range")]
    fn zero_attempts_is_a_bug() {
        tracker().record_result(true, 0);
    }

    #[test]
    #[should_panic(expected = "attempts_used out of range")]
    fn seven_attempts_is_a_bug() {
        tracker().record_result(false, 7);
    }

    #[test]
    fn save_then_load_is_identity() {
        let mut t = tracker();
        t.record_result(true, 1);
        t.record_result(false, 6);
        t.save().unwrap();

        let stored = t.store().clone();
        let reloaded = StatsTracker::load(stored);
        assert_eq!(reloaded.stats(), t.stats());
    }

    #[test]
    fn stored_json_uses_camel_case_keys() {
        let mut t = tracker();
        t.record_result(true, 2);
        t.save().unwrap();

        let json = t.store().get(STATS_KEY).unwrap().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["gamesPlayed"], 1);
        assert_eq!(value["maxStreak"], 1);
        assert_eq!(value["guessDistribution"]["2"], 1);
    }

    #[test]
    fn corrupt_data_falls_back_to_default() {
        let mut store = MemoryStore::new();
        store.set(STATS_KEY, "not json").unwrap();
        assert_eq!(StatsTracker::load(store).stats(), &GameStats::default());
    }

    #[test]
    fn inconsistent_data_falls_back_to_default() {
        let mut store = MemoryStore::new();
        store
            .set(
                STATS_KEY,
                r#"{"gamesPlayed":1,"wins":5,"currentStreak":0,"maxStreak":0,
                   "guessDistribution":{"1":0,"2":0,"3":0,"4":0,"5":0,"6":0}}"#,
            )
            .unwrap();
        assert_eq!(StatsTracker::load(store).stats(), &GameStats::default());

        let mut store = MemoryStore::new();
        store
            .set(
                STATS_KEY,
                r#"{"gamesPlayed":1,"wins":1,"currentStreak":1,"maxStreak":1,
                   "guessDistribution":{"1":1}}"#,
            )
            .unwrap();
        assert_eq!(StatsTracker::load(store).stats(), &GameStats::default());
    }

    #[test]
    fn saturated_counters_do_not_overflow() {
        let mut store = MemoryStore::new();
        store
            .set(
                STATS_KEY,
                r#"{"gamesPlayed":4294967295,"wins":4294967295,
                   "currentStreak":4294967295,"maxStreak":4294967295,
                   "guessDistribution":{"1":0,"2":0,"3":4294967295,"4":0,"5":0,"6":0}}"#,
            )
            .unwrap();
        let mut t = StatsTracker::load(store);
        assert_eq!(t.stats().games_played, u32::MAX);

        t.record_result(true, 3);
        t.record_result(false, 6);
        t.record_result(true, 3);

        let stats = t.stats();
        assert_eq!(stats.games_played, u32::MAX);
        assert_eq!(stats.wins, u32::MAX);
        assert_eq!(stats.wins_in(3), u32::MAX);
        assert_eq!(stats.current_streak, 1);
        assert_eq!(stats.max_streak, u32::MAX);
        assert!(stats.is_consistent());
    }

    #[test]
    fn clear_highlight_leaves_counts_alone() {
        let mut t = tracker();
        t.record_result(true, 4);
        assert!(t.distribution_bars()[3].highlighted);

        t.clear_highlight();
        assert!(t.distribution_bars().iter().all(|bar| !bar.highlighted));
        assert_eq!(t.stats().wins_in(4), 1);
    }

    #[test]
    fn distribution_bars_scale_to_largest() {
        let mut t = tracker();
        for attempts in [3, 3, 3, 3, 4, 4] {
            t.record_result(true, attempts);
        }
        let bars = t.distribution_bars();
        assert_eq!(bars.len(), 6);
        assert_eq!(bars[2].percent, 100);
        assert_eq!(bars[3].percent, 50);
        assert_eq!(bars[0].percent, 0);
        assert!(bars[3].highlighted);
        assert!(!bars[2].highlighted);
    }

    #[test]
    fn distribution_bars_without_wins_are_empty() {
        let t = tracker();
        assert!(t.distribution_bars().iter().all(|b| b.percent == 0 && !b.highlighted));
    }

    #[test]
    fn reset_clears_and_persists() {
        let mut t = tracker();
        t.record_result(true, 2);
        t.save().unwrap();
        t.reset().unwrap();

        let reloaded = StatsTracker::load(t.store().clone());
        assert_eq!(reloaded.stats(), &GameStats::default());
    }
}
