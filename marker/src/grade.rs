//! Letter grades and averages.

/// Round a float to one decimal place.
#[inline]
pub fn round1(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}

/// Letter grade for a (possibly fractional) score: ≥90 A, ≥80 B, ≥70 C,
/// ≥60 D, otherwise F.
pub fn letter_grade(score: f64) -> &'static str {
    if score >= 90.0 {
        "A"
    } else if score >= 80.0 {
        "B"
    } else if score >= 70.0 {
        "C"
    } else if score >= 60.0 {
        "D"
    } else {
        "F"
    }
}

/// Unrounded mean of `scores`. An empty slice averages to 0.
pub fn mean(scores: &[u32]) -> f64 {
    if scores.is_empty() {
        return 0.0;
    }
    let sum: u64 = scores.iter().map(|&s| u64::from(s)).sum();
    sum as f64 / scores.len() as f64
}

/// Mean of `scores` rounded to one decimal, for display.
pub fn class_average(scores: &[u32]) -> f64 {
    round1(mean(scores))
}
