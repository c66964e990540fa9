use rand::Rng;
use rand::seq::SliceRandom as _;

use crate::error::VocabError;
use crate::extract::VocabRecord;

/// Pick up to `count` unseen records for the week, marking each one seen.
///
/// The unseen indices are shuffled and the first `count` taken, so the
/// routine terminates no matter how close the store is to exhaustion.
/// Fewer than `count` records come back only when fewer unseen records
/// remain; zero remaining is an error, and the store is left untouched
/// in that case. Callers persist the mutated records before showing the
/// selection to anyone.
pub fn weekly<R: Rng + ?Sized>(
    records: &mut [VocabRecord],
    count: usize,
    rng: &mut R,
) -> Result<Vec<VocabRecord>, VocabError> {
    let mut unseen: Vec<usize> = records
        .iter()
        .enumerate()
        .filter(|(_, record)| !record.seen)
        .map(|(idx, _)| idx)
        .collect();

    if unseen.is_empty() {
        return Err(VocabError::StoreExhausted);
    }

    unseen.shuffle(rng);
    unseen.truncate(count);

    let mut picked = Vec::with_capacity(unseen.len());
    for idx in unseen {
        records[idx].seen = true;
        picked.push(records[idx].clone());
    }

    tracing::debug!(picked = picked.len(), "weekly sample drawn");
    Ok(picked)
}
