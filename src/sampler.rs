//! Random raw-record sampling for on-demand inspection.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::dataset::{TripDataset, TripRecord};

/// Rows shown per raw-data page.
pub const SAMPLE_SIZE: usize = 5;

/// Draws up to `n` distinct records uniformly at random.
///
/// Returns every record (in random order) when the dataset holds fewer than `n`.
pub fn sample<'a, R: Rng + ?Sized>(
    dataset: &'a TripDataset,
    n: usize,
    rng: &mut R,
) -> Vec<&'a TripRecord> {
    dataset.records().choose_multiple(rng, n).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::test_support::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn hours(n: u32) -> TripDataset {
        dataset((0..n).map(at_hour).collect())
    }

    #[test]
    fn test_sample_smaller_dataset_returns_all() {
        let ds = hours(3);
        let mut rng = StdRng::seed_from_u64(7);
        let picked = sample(&ds, SAMPLE_SIZE, &mut rng);
        assert_eq!(picked.len(), 3);
    }

    #[test]
    fn test_sample_without_replacement() {
        let ds = hours(20);
        let mut rng = StdRng::seed_from_u64(42);
        let picked = sample(&ds, SAMPLE_SIZE, &mut rng);
        assert_eq!(picked.len(), SAMPLE_SIZE);

        let mut seen: Vec<u32> = picked.iter().map(|r| r.hour).collect();
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen.len(), SAMPLE_SIZE);
    }

    #[test]
    fn test_sample_is_reproducible_with_seed() {
        let ds = hours(20);
        let a = sample(&ds, SAMPLE_SIZE, &mut StdRng::seed_from_u64(1));
        let b = sample(&ds, SAMPLE_SIZE, &mut StdRng::seed_from_u64(1));
        assert_eq!(a, b);
    }

    #[test]
    fn test_sample_empty_dataset() {
        let ds = hours(0);
        let picked = sample(&ds, SAMPLE_SIZE, &mut StdRng::seed_from_u64(1));
        assert!(picked.is_empty());
    }
}
