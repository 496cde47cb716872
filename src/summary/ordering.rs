// Chronological ordering of sample batches

use crate::models::Sample;

/// Oldest first. Samples sharing a timestamp keep their input order.
pub fn sorted_ascending(samples: &[Sample]) -> Vec<&Sample> {
    let mut out: Vec<&Sample> = samples.iter().collect();
    out.sort_by_key(|s| s.timestamp);
    out
}

/// Newest first. Samples sharing a timestamp keep their input order.
pub fn sorted_descending(samples: &[Sample]) -> Vec<&Sample> {
    let mut out: Vec<&Sample> = samples.iter().collect();
    out.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    out
}
