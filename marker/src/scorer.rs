//! # Scorer Module
//!
//! Heuristic scoring of free-text submissions. A score is a random base in
//! `[60, 80]`, plus a length bonus, plus a keyword bonus, capped at 100:
//!
//! | component | points |
//! |-----------|--------|
//! | base      | uniform in 60..=80 |
//! | length    | +5 above 200 chars, +5 more above 500 |
//! | keywords  | +2 per distinct keyword present, at most +10 |
//!
//! The random generator is a parameter so tests can pin the base.
//!
//! # Example
//!
//! ```
//! use marker::scorer::score_with_rng;
//! use rand::rngs::mock::StepRng;
//!
//! // A generator that always yields zero draws the lowest base.
//! let mut rng = StepRng::new(0, 0);
//! assert_eq!(score_with_rng("", &mut rng), 60);
//! assert_eq!(score_with_rng("Solve the equation", &mut rng), 64);
//! ```

use rand::Rng;

pub const BASE_MIN: u32 = 60;
pub const BASE_MAX: u32 = 80;
pub const MAX_SCORE: u32 = 100;

/// Each threshold crossed (strictly greater) adds [`LENGTH_BONUS`].
pub const LENGTH_THRESHOLDS: [usize; 2] = [200, 500];
pub const LENGTH_BONUS: u32 = 5;

pub const POINTS_PER_KEYWORD: u32 = 2;
pub const MAX_KEYWORD_BONUS: u32 = 10;

/// Subject vocabulary that earns keyword points. Matched as lowercase
/// substrings of the lowercased text.
pub const KEYWORDS: [&str; 16] = [
    // Mathematics
    "equation",
    "formula",
    "calculation",
    "solve",
    // Science
    "cell",
    "organism",
    "structure",
    "function",
    // English
    "analysis",
    "theme",
    "character",
    "evidence",
    // History
    "event",
    "historical",
    "timeline",
    "impact",
];

/// Number of distinct keywords present at least once.
pub fn keyword_matches(text: &str) -> usize {
    let lowered = text.to_lowercase();
    KEYWORDS.iter().filter(|k| lowered.contains(*k)).count()
}

pub fn keyword_bonus(text: &str) -> u32 {
    let matches = u32::try_from(keyword_matches(text)).unwrap_or(u32::MAX);
    matches.saturating_mul(POINTS_PER_KEYWORD).min(MAX_KEYWORD_BONUS)
}

/// Length is measured in characters, not bytes.
pub fn length_bonus(text: &str) -> u32 {
    let len = text.chars().count();
    LENGTH_THRESHOLDS
        .iter()
        .filter(|&&threshold| len > threshold)
        .count() as u32
        * LENGTH_BONUS
}

/// Scores `text` drawing the base from `rng`.
pub fn score_with_rng<R: Rng + ?Sized>(text: &str, rng: &mut R) -> u32 {
    let base = rng.gen_range(BASE_MIN..=BASE_MAX);
    (base + length_bonus(text) + keyword_bonus(text)).min(MAX_SCORE)
}

/// Scores `text` with the thread-local generator.
pub fn score(text: &str) -> u32 {
    score_with_rng(text, &mut rand::thread_rng())
}
