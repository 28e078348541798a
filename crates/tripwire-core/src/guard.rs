//! The secret comparison guard.

use serde::{Deserialize, Serialize};

use crate::distance::levenshtein;

/// Attempts granted at construction and restored by an exact match.
pub const MAX_ATTEMPTS: u8 = 3;

/// Characters of the provided secret that are retained.
pub const SECRET_LIMIT: usize = 32;

/// Edit distance at which a wrong guess stops costing attempts and locks
/// the guard outright.
pub const LOCKOUT_DISTANCE: usize = 2;

/// Outcome of a single comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchOutcome {
    /// The guard was already locked; the guess was not evaluated.
    Locked,
    /// The guess equals the secret; attempts reset to [`MAX_ATTEMPTS`].
    Exact,
    /// Wrong guess at edit distance 1; one attempt consumed.
    CloseMiss,
    /// Wrong guess at edit distance >= [`LOCKOUT_DISTANCE`]; guard locked.
    FarMiss,
}

impl MatchOutcome {
    /// True only when the guess matched the secret.
    pub fn granted(&self) -> bool {
        matches!(self, MatchOutcome::Exact)
    }
}

/// Single-secret guard with a bounded attempt counter.
///
/// Holds the first [`SECRET_LIMIT`] characters of the secret it was built
/// with. Comparisons take `&mut self`, so a guard shared across threads
/// must sit behind a `Mutex`.
#[derive(Debug, Clone)]
pub struct Guard {
    secret: String,
    remaining: u8,
}

impl Guard {
    /// Create a guard for `secret`, truncated to [`SECRET_LIMIT`]
    /// characters. Any input is accepted, including the empty string.
    pub fn new(secret: &str) -> Self {
        Self {
            secret: secret.chars().take(SECRET_LIMIT).collect(),
            remaining: MAX_ATTEMPTS,
        }
    }

    /// Attempts left before the guard locks.
    pub fn remaining(&self) -> u8 {
        self.remaining
    }

    pub fn is_locked(&self) -> bool {
        self.remaining == 0
    }

    /// Compare `guess` against the secret and report the full decision.
    ///
    /// Evaluated in strict order:
    /// 1. A locked guard refuses everything, the correct secret included.
    /// 2. An exact match restores the counter to [`MAX_ATTEMPTS`].
    /// 3. A wrong guess at edit distance 1 costs one attempt; anything
    ///    further away is treated as probing and locks the guard.
    pub fn assess(&mut self, guess: &str) -> MatchOutcome {
        if self.remaining == 0 {
            return MatchOutcome::Locked;
        }

        if guess == self.secret {
            self.remaining = MAX_ATTEMPTS;
            tracing::debug!(remaining = self.remaining, "exact match, attempts reset");
            return MatchOutcome::Exact;
        }

        let distance = levenshtein(guess, &self.secret);
        if distance >= LOCKOUT_DISTANCE {
            self.remaining = 0;
            tracing::warn!(
                distance,
                guess_len = guess.chars().count(),
                "far miss, guard locked"
            );
            MatchOutcome::FarMiss
        } else {
            // Strings differ, so distance is exactly 1 here and the
            // counter is at least 1.
            self.remaining -= 1;
            tracing::debug!(remaining = self.remaining, "close miss");
            MatchOutcome::CloseMiss
        }
    }

    /// Boolean projection of [`assess`](Self::assess): `true` only on an
    /// exact match against an unlocked guard.
    pub fn matches(&mut self, guess: &str) -> bool {
        self.assess(guess).granted()
    }
}
