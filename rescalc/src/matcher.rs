//! Tolerance-expanding nearest-match search.
//!
//! The same policy serves value and ratio queries: start with a zero
//! error band, sweep every candidate, and widen the band until enough
//! matches have accumulated. The sweep that crosses the minimum keeps
//! every candidate inside its band, so a query can return more than
//! the requested minimum.

/// Error band growth per sweep for single-value candidate sets.
pub const SINGLE_INCREMENT: f64 = 0.01;

/// Error band growth per sweep for combination candidate sets, which
/// are dense enough that the coarse step would overshoot badly.
pub const COMBINATION_INCREMENT: f64 = 0.001;

/// Signed deviation of `value` from `target`, in percent of the target.
pub fn percent_error(value: f64, target: f64) -> f64 {
    (value - target) / target * 100.0
}

/// Collect at least `min_results` candidates nearest `target`.
///
/// Candidates are swept in order; one is accepted the first time its
/// absolute percent error falls inside the current band, and is never
/// re-evaluated. After each full sweep the band grows by `increment`.
/// The loop also ends once every candidate has been accepted, so a
/// minimum larger than the candidate set cannot spin forever.
///
/// The result is sorted ascending by absolute error with a stable
/// sort, so earlier table entries win ties regardless of which sweep
/// admitted them.
pub fn find_matches<K: Copy>(
    candidates: &[(K, f64)],
    target: f64,
    min_results: usize,
    increment: f64,
) -> Vec<(K, f64)> {
    let mut accepted: Vec<(K, f64)> = Vec::new();
    let mut taken = vec![false; candidates.len()];
    let mut band = 0.0;

    while accepted.len() < min_results && accepted.len() < candidates.len() {
        for (idx, &(key, value)) in candidates.iter().enumerate() {
            if taken[idx] {
                continue;
            }
            let error = percent_error(value, target);
            if error.abs() < band {
                taken[idx] = true;
                accepted.push((key, error));
            }
        }
        band += increment;
    }

    accepted.sort_by(|a, b| a.1.abs().total_cmp(&b.1.abs()));
    accepted
}
