//! Per-letter feedback for a guess
//!
//! Evaluation follows Wordle's duplicate-letter rules: exact matches consume
//! their secret letter first, then the remaining guess letters claim whatever
//! occurrences are left, left to right.

use super::Word;
use super::word::WORD_LEN;
use std::fmt;

/// Classification of a single revealed letter
///
/// Ordered by how much it tells the player, so `max` gives the best-known state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LetterState {
    /// Letter does not occur (in any unclaimed position) in the secret
    Absent,
    /// Letter occurs in the secret at another position
    Present,
    /// Letter is in the right position
    Correct,
}

impl LetterState {
    /// Single-character code used by the text front end and parser
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Correct => 'G',
            Self::Present => 'Y',
            Self::Absent => '-',
        }
    }

    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

/// Feedback for one submitted row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([LetterState; WORD_LEN]);

impl Feedback {
    /// All letters correct
    pub const SOLVED: Self = Self([LetterState::Correct; WORD_LEN]);

    #[must_use]
    pub const fn new(states: [LetterState; WORD_LEN]) -> Self {
        Self(states)
    }

    /// Evaluate `guess` against `secret`
    ///
    /// # Algorithm
    /// 1. First pass: mark exact matches and remove them from the secret's pool
    /// 2. Second pass: each remaining guess letter takes one unclaimed
    ///    occurrence from the pool if there is one, else it is absent
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::{Feedback, LetterState::*, Word};
    ///
    /// let guess = Word::new("eagle").unwrap();
    /// let secret = Word::new("allee").unwrap();
    /// let feedback = Feedback::evaluate(&guess, &secret);
    ///
    /// assert_eq!(feedback.states(), &[Present, Present, Absent, Present, Correct]);
    /// ```
    #[must_use]
    pub fn evaluate(guess: &Word, secret: &Word) -> Self {
        let mut result = [LetterState::Absent; WORD_LEN];
        let mut secret_available = secret.char_counts();

        // Allow: Index needed to compare guess[i] with secret[i] and set result[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LEN {
            if guess.char_at(i) == secret.char_at(i) {
                result[i] = LetterState::Correct;
                if let Some(count) = secret_available.get_mut(&guess.char_at(i)) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LEN {
            if result[i] == LetterState::Correct {
                continue;
            }
            if let Some(count) = secret_available.get_mut(&guess.char_at(i))
                && *count > 0
            {
                result[i] = LetterState::Present;
                *count -= 1;
            }
        }

        Self(result)
    }

    #[inline]
    #[must_use]
    pub const fn states(&self) -> &[LetterState; WORD_LEN] {
        &self.0
    }

    #[inline]
    #[must_use]
    pub const fn state_at(&self, position: usize) -> LetterState {
        self.0[position]
    }

    /// Check if every letter is correct
    #[must_use]
    pub fn is_solved(&self) -> bool {
        *self == Self::SOLVED
    }

    /// Count positions with the given state
    #[must_use]
    pub fn count(&self, state: LetterState) -> usize {
        self.0.iter().filter(|&&s| s == state).count()
    }

    /// Render as "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|s| s.emoji()).collect()
    }

    /// Parse feedback from a string like "GY-GY" or "🟩🟨⬜🟩🟨"
    ///
    /// Accepts:
    /// - 'G'/'g'/🟩 for correct
    /// - 'Y'/'y'/🟨 for present
    /// - '-'/'_'/'X'/'x'/⬜ for absent
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let mut states = [LetterState::Absent; WORD_LEN];
        let mut len = 0;

        for ch in s.chars() {
            if len == WORD_LEN {
                return None;
            }
            states[len] = match ch {
                'G' | 'g' | '🟩' => LetterState::Correct,
                'Y' | 'y' | '🟨' => LetterState::Present,
                '-' | '_' | 'X' | 'x' | '⬜' => LetterState::Absent,
                _ => return None,
            };
            len += 1;
        }

        (len == WORD_LEN).then_some(Self(states))
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for state in &self.0 {
            write!(f, "{}", state.symbol())?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Feedback {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid feedback string: {s}"))
    }
}
